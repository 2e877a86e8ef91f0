//! # Bootstrap Definitions
//!
//! The embedded definitions text behind [`UnitRegistry::with_defaults`]
//! and the global registry. Same flat format the offline generator emits:
//! one definition per line, `#` comments, base rows first so every derived
//! row only references symbols above it. SI-prefixed forms (km, mg, ...)
//! are not listed; the registry derives them on lookup.
//!
//! [`UnitRegistry::with_defaults`]: crate::registry::UnitRegistry::with_defaults

/// Curated bootstrap unit set (SI base + common derived units).
pub const DEFAULT_UNIT_DEFINITIONS: &str = "\
# base unit definitions
m = [L]
s = [T]
g = [M]
A = [I]
K = [THETA]
mol = [N]
cd = [J]
rad = [1]

# mass
kg = 1000 g
tonne = 1000 kg
metric_ton = tonne
lb = 453.59237 g
pound = lb
oz = lb/16
grain = lb/7000
carat = 200 mg
electron_mass = 9.1093837015e-31 kg

# length
in = 2.54 cm
ft = 12 in
yd = 3 ft
mile = 5280 ft
angstrom = 1e-10 m

# time
min = 60 s
hour = 60 min
day = 24 hour
week = 7 day
year = 365.25 day

# frequency
Hz = 1/s

# mechanics
gravity = 9.80665 m/s^2
N = kg m/s^2
J = N m
W = J/s
Pa = N/m^2
bar = 100000 Pa
atm = 101325 Pa
lbf = lb gravity
psi = lbf/in^2
cal = 4.184 J
kcal = 1000 cal
Btu = 1055.056 J
Wh = W hour
eV = 1.602176634e-19 J
hp = 745.6998715822702 W
H2O = 9806.65 Pa/m

# volume
L = 1000 cm^3
liter = L
gal = 231 in^3

# speed
mph = mile/hour
kph = km/hour
knot = 1852 m/hour

# temperature
degC = K - 273.15
degR = 5 K / 9
degF = degR - 459.67

# angle (dimensionless)
deg = 0.017453292519943295 rad
percent = 0.01 rad
";
