//! # Dimension Vector
//!
//! A point in the space of orthogonal base dimensions, stored as a sparse
//! map from dimension symbol ("L", "M", "THETA", or any symbol a user
//! introduces with a `[X]` definition) to a signed integer exponent.
//!
//! Canonical form: zero-exponent entries are never stored, so structural
//! equality of the map is exactly dimensional compatibility. Two units can
//! be converted into each other iff their `Dimension`s compare equal.

use std::collections::BTreeMap;
use std::fmt;

/// The dimensions of a physical quantity, as exponents of base dimensions.
///
/// Base dimensions are not a fixed set: every symbol that appears inside
/// brackets in a definition (`m = [L]`) names one. Arithmetic mirrors unit
/// algebra: multiplying units adds exponents, dividing subtracts them,
/// raising to a power scales them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Symbol -> exponent. Invariant: no entry is zero.
    exponents: BTreeMap<String, i32>,
}

impl Dimension {
    /// The dimensionless vector (empty map).
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A base dimension: `{symbol: 1}`.
    pub fn base(symbol: &str) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(symbol.to_string(), 1);
        Self { exponents }
    }

    /// True if every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The exponent of a base dimension symbol (0 if absent).
    pub fn exponent(&self, symbol: &str) -> i32 {
        self.exponents.get(symbol).copied().unwrap_or(0)
    }

    /// Multiply dimensions (add exponents).
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = self.clone();
        for (symbol, &exp) in &other.exponents {
            result.accumulate(symbol, exp);
        }
        result
    }

    /// Divide dimensions (subtract exponents).
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = self.clone();
        for (symbol, &exp) in &other.exponents {
            result.accumulate(symbol, -exp);
        }
        result
    }

    /// Raise to an integer power (multiply exponents).
    pub fn power(&self, exp: i32) -> Dimension {
        if exp == 0 {
            return Dimension::dimensionless();
        }
        let exponents = self
            .exponents
            .iter()
            .map(|(symbol, &e)| (symbol.clone(), e * exp))
            .collect();
        Dimension { exponents }
    }

    /// Invert dimensions (negate exponents).
    pub fn invert(&self) -> Dimension {
        self.power(-1)
    }

    /// Add `exp` to the entry for `symbol`, dropping it if it cancels.
    fn accumulate(&mut self, symbol: &str, exp: i32) {
        let total = self.exponent(symbol) + exp;
        if total == 0 {
            self.exponents.remove(symbol);
        } else {
            self.exponents.insert(symbol.to_string(), total);
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponents.is_empty() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exp) in &self.exponents {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if *exp == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exp)?;
            }
        }
        Ok(())
    }
}
