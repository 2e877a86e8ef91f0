//! # Unit Registry
//!
//! The incremental symbol table at the center of the engine. Units are
//! defined in terms of units already present, so a definition can never
//! reference a symbol defined after it - forward references and cycles are
//! ruled out by ordering, not by graph analysis. The lifecycle is
//! forward-only: define, look up, never edit or delete.

pub mod defaults;
pub mod global;
mod si_prefix;

pub use defaults::DEFAULT_UNIT_DEFINITIONS;
pub use global::global_registry;

use std::collections::BTreeMap;
use std::fmt;

use crate::core::{Dimension, Quantity, Unit};
use crate::error::{DefineError, LoadError, ParseError};
use crate::parser;
use crate::parser::Token;

/// A registry of named units, built up from textual definitions.
///
/// # Example
///
/// ```
/// use unit_convert::UnitRegistry;
///
/// let mut reg = UnitRegistry::new();
/// reg.define_unit("m = [L]").unwrap();
/// reg.define_unit("s = [T]").unwrap();
/// reg.define_unit("cm = 0.01 m").unwrap();
/// reg.define_unit("in = 2.54 cm").unwrap();
///
/// let q = reg.make_quantity("2 m").unwrap();
/// assert!((q.to("in").unwrap().value() - 200.0 / 2.54).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    /// Symbol -> resolved unit. Every stored unit is fully resolved
    /// against base dimensions at definition time.
    units: BTreeMap<String, Unit>,
}

impl UnitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-seeded with the embedded bootstrap definitions
    /// ([`DEFAULT_UNIT_DEFINITIONS`]).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .load_definitions(DEFAULT_UNIT_DEFINITIONS)
            .expect("embedded unit definitions are valid");
        registry
    }

    /// Number of defined units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if nothing has been defined.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Register `symbol` as the coherent (scale 1) unit of the base
    /// dimension named `dimension_symbol`.
    ///
    /// A previously unseen `dimension_symbol` introduces a new orthogonal
    /// dimension; a repeated one makes `symbol` a scale-1 alias of the
    /// same dimension. `"1"` names the dimensionless dimension.
    pub fn define_base_unit(
        &mut self,
        symbol: &str,
        dimension_symbol: &str,
    ) -> Result<(), DefineError> {
        let dimension = if dimension_symbol == "1" {
            Dimension::dimensionless()
        } else {
            Dimension::base(dimension_symbol)
        };
        self.insert(symbol, Unit::base(dimension))
    }

    /// Add one definition line: `[coefficient] name = expression`, where
    /// the expression may also be a `[DIM]` base-dimension shorthand or
    /// carry a trailing `+/- offset`.
    ///
    /// The stored unit is `expression / coefficient`, so `100 cm = m`
    /// makes a centimeter one hundredth of a meter. Atomic: on any error
    /// the registry is unchanged.
    pub fn define_unit(&mut self, line: &str) -> Result<(), DefineError> {
        let (lhs, rhs) = line.split_once('=').ok_or_else(|| {
            ParseError::Syntax(format!("definition '{}' is missing '='", line))
        })?;
        let (coefficient, name) = parse_definition_lhs(lhs)?;
        if self.units.contains_key(&name) {
            return Err(DefineError::DuplicateSymbol(name));
        }
        let unit = parser::resolve(rhs, self)?
            .divided_by(coefficient)
            .ensure_finite()?;
        self.insert(&name, unit)
    }

    /// Apply [`define_unit`](Self::define_unit) to every non-blank,
    /// non-`#` line of `text`, in order.
    ///
    /// Stops at the first failure, reporting its 1-based line number and
    /// text; definitions from earlier lines stay in the registry. Returns
    /// the number of definitions applied.
    pub fn load_definitions(&mut self, text: &str) -> Result<usize, LoadError> {
        let mut defined = 0;
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.define_unit(line).map_err(|source| LoadError {
                line: index + 1,
                text: line.to_string(),
                source,
            })?;
            defined += 1;
        }
        Ok(defined)
    }

    /// Exact lookup of a defined symbol. No prefix fallback.
    pub fn lookup(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol)
    }

    /// Resolve a unit expression (`"kg m^2/s^2"`) against this registry.
    ///
    /// Every symbol in the expression must already be defined (or be an
    /// SI-prefixed form of one that is); the expression itself need not
    /// be.
    pub fn resolve_unit(&self, expr: &str) -> Result<Unit, ParseError> {
        parser::resolve(expr, self)
    }

    /// Build a quantity from a combined literal: `"100 mile/hour"`.
    pub fn make_quantity(&self, literal: &str) -> Result<Quantity<'_>, ParseError> {
        let (value, unit_expr) = split_quantity_literal(literal)?;
        self.make_quantity_parts(value, unit_expr)
    }

    /// Build a quantity from a separate value and unit expression.
    pub fn make_quantity_parts(
        &self,
        value: f64,
        unit_expr: &str,
    ) -> Result<Quantity<'_>, ParseError> {
        let unit = self.resolve_unit(unit_expr)?;
        Ok(Quantity::new(value, unit, self))
    }

    /// Resolve one symbol: exact entry first, then SI-prefix fallback
    /// (`mm` = milli + `m`, scaled by the prefix's power of ten).
    pub(crate) fn resolve_symbol(&self, symbol: &str) -> Result<Unit, ParseError> {
        if let Some(unit) = self.units.get(symbol) {
            return Ok(unit.clone());
        }
        for (power, remainder) in si_prefix::candidates(symbol) {
            if let Some(unit) = self.units.get(remainder) {
                return unit.scaled(10f64.powi(power)).ensure_finite();
            }
        }
        Err(ParseError::UnknownSymbol(symbol.to_string()))
    }

    fn insert(&mut self, symbol: &str, unit: Unit) -> Result<(), DefineError> {
        if self.units.contains_key(symbol) {
            return Err(DefineError::DuplicateSymbol(symbol.to_string()));
        }
        self.units.insert(symbol.to_string(), unit);
        Ok(())
    }
}

impl fmt::Display for UnitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, unit) in &self.units {
            writeln!(f, "{} -> {}", symbol, unit)?;
        }
        Ok(())
    }
}

/// Parse the left side of a definition: optional numeric coefficient, then
/// the new unit's name.
fn parse_definition_lhs(lhs: &str) -> Result<(f64, String), ParseError> {
    let tokens = parser::lex(lhs)?;
    match tokens.as_slice() {
        [Token::Symbol(name)] => Ok((1.0, name.clone())),
        [Token::Number { value, .. }, Token::Symbol(name)] => Ok((*value, name.clone())),
        _ => Err(ParseError::Syntax(format!(
            "expected '[coefficient] name' before '=', found '{}'",
            lhs.trim()
        ))),
    }
}

/// Split a quantity literal into its leading numeric value and trailing
/// unit expression. The number is required; so is the unit.
fn split_quantity_literal(literal: &str) -> Result<(f64, &str), ParseError> {
    let trimmed = literal.trim();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return Err(ParseError::Syntax(format!(
            "quantity '{}' must begin with a numeric value",
            trimmed
        )));
    }
    let value: f64 = trimmed[..end]
        .parse()
        .map_err(|_| ParseError::Numeric(format!("invalid numeric literal '{}'", &trimmed[..end])))?;
    let unit_expr = trimmed[end..].trim();
    if unit_expr.is_empty() {
        return Err(ParseError::Syntax(format!(
            "quantity '{}' is missing a unit expression",
            trimmed
        )));
    }
    Ok((value, unit_expr))
}

/// Length of the leading decimal literal (optional sign, digits, fraction,
/// exponent). The exponent marker is only taken when digits follow, so
/// `"2 eV"` splits after the 2.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut seen_digit = false;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        seen_digit = true;
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            seen_digit = true;
            i += 1;
        }
    }
    if !seen_digit {
        return 0;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    #[test]
    fn test_define_base_units() {
        let mut reg = UnitRegistry::new();
        reg.define_base_unit("cm", "L").unwrap();
        reg.define_base_unit("g", "M").unwrap();
        reg.define_base_unit("s", "T").unwrap();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.lookup("cm").unwrap().scale(), 1.0);
    }

    #[test]
    fn test_base_unit_alias_shares_dimension() {
        let mut reg = UnitRegistry::new();
        reg.define_base_unit("m", "L").unwrap();
        reg.define_base_unit("meter", "L").unwrap();
        assert_eq!(
            reg.lookup("m").unwrap().dimension(),
            reg.lookup("meter").unwrap().dimension()
        );
        let q = reg.make_quantity("3 meter").unwrap();
        assert_eq!(q.to("m").unwrap().value(), 3.0);
    }

    #[test]
    fn test_duplicate_symbol_rejected_and_first_kept() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();
        reg.define_unit("cm = 0.01 m").unwrap();

        let err = reg.define_unit("cm = 10 m").unwrap_err();
        assert!(matches!(err, DefineError::DuplicateSymbol(s) if s == "cm"));

        // first definition intact
        let q = reg.make_quantity("2 m").unwrap();
        assert!((q.to("cm").unwrap().value() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_forward_reference_rejected_then_succeeds() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();

        let err = reg.define_unit("1 ft = 12 in").unwrap_err();
        assert!(matches!(
            err,
            DefineError::Parse(ParseError::UnknownSymbol(s)) if s == "in"
        ));
        assert_eq!(reg.len(), 1); // atomic: nothing was added

        reg.define_unit("in = 2.54 cm").unwrap();
        reg.define_unit("1 ft = 12 in").unwrap();
        assert!(reg.lookup("ft").is_some());
    }

    #[test]
    fn test_coefficient_on_lhs() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();
        reg.define_unit("100 cm = m").unwrap();

        let q = reg.make_quantity("2 m").unwrap();
        assert!((q.to("cm").unwrap().value() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_coefficient_rejected() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();
        let err = reg.define_unit("0 zip = m").unwrap_err();
        assert!(matches!(err, DefineError::Parse(ParseError::Numeric(_))));
    }

    #[test]
    fn test_zero_scale_definition_rejected() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();

        // would make every conversion through 'z' divide by zero
        let err = reg.define_unit("z = 0 m").unwrap_err();
        assert!(matches!(err, DefineError::Parse(ParseError::Numeric(_))));
        assert!(reg.lookup("z").is_none());
    }

    #[test]
    fn test_malformed_definitions() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();
        assert!(reg.define_unit("no equals sign").is_err());
        assert!(reg.define_unit("a b = m").is_err());
        assert!(reg.define_unit("= m").is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_load_definitions_skips_blanks_and_comments() {
        let mut reg = UnitRegistry::new();
        let count = reg
            .load_definitions("m = [L]\n\n# a comment\ns = [T]\n  \ncm = 0.01 m")
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_load_definitions_reports_line_and_keeps_prefix() {
        let mut reg = UnitRegistry::new();
        let err = reg
            .load_definitions("m = [L]\ns = [T]\nft = 12 in\nmin = 60 s")
            .unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.text, "ft = 12 in");
        assert!(matches!(
            err.source,
            DefineError::Parse(ParseError::UnknownSymbol(_))
        ));
        // the two earlier definitions survived; the later one never ran
        assert_eq!(reg.len(), 2);
        assert!(reg.lookup("min").is_none());
    }

    #[test]
    fn test_make_quantity_literals() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();
        reg.define_unit("s = [T]").unwrap();

        assert_eq!(reg.make_quantity("2 m").unwrap().value(), 2.0);
        assert_eq!(reg.make_quantity("-3.5 m/s").unwrap().value(), -3.5);
        assert_eq!(reg.make_quantity("1e3 m").unwrap().value(), 1e3);
        assert_eq!(reg.make_quantity("100m").unwrap().value(), 100.0);

        // a number alone, or a unit alone, is not a quantity
        assert!(matches!(
            reg.make_quantity("10"),
            Err(ParseError::Syntax(_))
        ));
        assert!(matches!(
            reg.make_quantity("m"),
            Err(ParseError::Syntax(_))
        ));
    }

    #[test]
    fn test_si_prefix_lookup() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("cm = [L]").unwrap();
        reg.define_unit("m = 100 cm").unwrap();

        let q = reg.make_quantity("24 cm").unwrap();
        assert!((q.to("m").unwrap().value() - 0.24).abs() < 1e-12);
        assert!((q.to("mm").unwrap().value() - 240.0).abs() < 1e-9);
        // prefix applies to derived units too: 'mcm' = milli + cm
        assert!((q.to("mcm").unwrap().value() - 24000.0).abs() < 1e-6);
    }

    #[test]
    fn test_meter_to_centimeter() {
        let mut reg = UnitRegistry::new();
        reg.load_definitions("m = [L]\ng = [M]\ns = [T]\ncm = 0.01 m\n1 in = 2.54 cm")
            .unwrap();
        let value = reg
            .make_quantity("1 m")
            .unwrap()
            .to("cm")
            .unwrap()
            .value();
        assert!((value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_mph_to_meters_per_second() {
        let mut reg = UnitRegistry::new();
        reg.load_definitions(
            "m = [L]\n\
             g = [M]\n\
             s = [T]\n\
             cm = 0.01 m\n\
             1 in = 2.54 cm\n\
             1 ft = 12 in\n\
             1 mile = 5280 ft\n\
             1 min = 60 s\n\
             1 hour = 60 min\n\
             1 mph = 1 mile/hour",
        )
        .unwrap();
        let value = reg
            .make_quantity("100 mph")
            .unwrap()
            .to("m/s")
            .unwrap()
            .value();
        assert!((value - 44.704).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_mismatch_is_never_coerced() {
        let mut reg = UnitRegistry::new();
        reg.load_definitions("m = [L]\ns = [T]").unwrap();
        let q = reg.make_quantity("1 m").unwrap();
        assert!(matches!(
            q.to("s"),
            Err(ConversionError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_display_lists_units() {
        let mut reg = UnitRegistry::new();
        reg.define_unit("m = [L]").unwrap();
        reg.define_unit("cm = 0.01 m").unwrap();
        let listing = format!("{}", reg);
        assert!(listing.contains("m -> 1 L"));
        assert!(listing.contains("cm -> 0.01 L"));
    }
}
