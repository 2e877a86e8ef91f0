//! # SI Prefixes
//!
//! Fallback lookup table: when a symbol is not in the registry, it may be
//! an SI-prefixed form of one that is (`mm` = milli + `m`). Prefixed
//! symbols are resolved on the fly and never stored.

/// (prefix, power of ten), ordered longest-prefix-first so `milli` is
/// tried before the bare `m` prefix and `da` before `d`.
const PREFIXES: &[(&str, i32)] = &[
    ("yotta", 24),
    ("zetta", 21),
    ("femto", -15),
    ("hecto", 2),
    ("micro", -6),
    ("milli", -3),
    ("centi", -2),
    ("zepto", -21),
    ("yocto", -24),
    ("deca", 1),
    ("deci", -1),
    ("nano", -9),
    ("pico", -12),
    ("atto", -18),
    ("kilo", 3),
    ("giga", 9),
    ("mega", 6),
    ("peta", 15),
    ("tera", 12),
    ("exa", 18),
    ("da", 1),
    ("Y", 24),
    ("Z", 21),
    ("E", 18),
    ("P", 15),
    ("T", 12),
    ("G", 9),
    ("M", 6),
    ("k", 3),
    ("h", 2),
    ("d", -1),
    ("c", -2),
    ("m", -3),
    ("u", -6),
    ("n", -9),
    ("p", -12),
    ("f", -15),
    ("a", -18),
    ("z", -21),
    ("y", -24),
];

/// Candidate (power, remainder) splits of `symbol`, longest prefix first.
/// The remainder is guaranteed non-empty.
pub(crate) fn candidates(symbol: &str) -> impl Iterator<Item = (i32, &str)> {
    PREFIXES.iter().filter_map(move |&(prefix, power)| {
        if symbol.len() > prefix.len() && symbol.starts_with(prefix) {
            Some((power, &symbol[prefix.len()..]))
        } else {
            None
        }
    })
}
