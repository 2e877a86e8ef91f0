//! # Unit
//!
//! A unit is a dimension vector plus a scale factor relating it to the
//! coherent base representation of that dimension, and (for affine units
//! like degC) an optional offset.
//!
//! The algebra here is what the expression parser folds factors through:
//! multiply, divide, integer powers, numeric coefficients. All of it is
//! checked - offset units are excluded from products and quotients, and a
//! scale that leaves the representable range is reported rather than
//! silently carried as inf/NaN.

use std::fmt;

use crate::core::Dimension;
use crate::error::ParseError;

/// A unit: scale, optional offset, dimension.
///
/// `scale` is the multiplicative ratio converting a magnitude in this unit
/// into base units. `offset`, when present, is expressed in this unit's own
/// scale and is the value subtracted to reach the absolute unit (so
/// `degC = K - 273.15` stores an offset of -273.15).
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    scale: f64,
    offset: Option<f64>,
    dimension: Dimension,
}

impl Unit {
    /// A unit with the given scale and dimension, no offset.
    pub fn new(scale: f64, dimension: Dimension) -> Self {
        Self { scale, offset: None, dimension }
    }

    /// The coherent (scale 1) unit of a dimension.
    pub fn base(dimension: Dimension) -> Self {
        Self::new(1.0, dimension)
    }

    /// The dimensionless identity unit. This is the accumulator seed for
    /// expression evaluation.
    pub fn dimensionless() -> Self {
        Self::new(1.0, Dimension::dimensionless())
    }

    /// Scale relative to the coherent base representation.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The offset, in this unit's own scale (0 when absent).
    pub fn offset(&self) -> f64 {
        self.offset.unwrap_or(0.0)
    }

    /// True for affine units such as degC.
    pub fn is_offset(&self) -> bool {
        self.offset.is_some()
    }

    /// The unit's dimension vector.
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Multiply by another unit: scales multiply, dimensions add.
    pub fn multiply(&self, other: &Unit) -> Result<Unit, ParseError> {
        self.reject_offset_algebra(other, "multiply")?;
        let unit = Unit::new(
            self.scale * other.scale,
            self.dimension.multiply(&other.dimension),
        );
        unit.ensure_finite()
    }

    /// Divide by another unit: scales divide, dimensions subtract.
    pub fn divide(&self, other: &Unit) -> Result<Unit, ParseError> {
        self.reject_offset_algebra(other, "divide")?;
        let unit = Unit::new(
            self.scale / other.scale,
            self.dimension.divide(&other.dimension),
        );
        unit.ensure_finite()
    }

    /// Raise to an integer power.
    pub fn power(&self, exp: i32) -> Result<Unit, ParseError> {
        if self.is_offset() {
            return Err(ParseError::OffsetUnit(
                "cannot raise an offset unit to a power".to_string(),
            ));
        }
        let unit = Unit::new(self.scale.powi(exp), self.dimension.power(exp));
        unit.ensure_finite()
    }

    /// Apply a numeric coefficient: `2.54 * cm`.
    ///
    /// Rescaling an offset unit rescales the offset inversely - the offset
    /// counts *this* unit's divisions, so a bigger unit needs a smaller
    /// offset.
    pub fn scaled(&self, factor: f64) -> Unit {
        Unit {
            scale: self.scale * factor,
            offset: self.offset.map(|o| o / factor),
            dimension: self.dimension.clone(),
        }
    }

    /// Divide the scale by a coefficient (used for `[coeff] name = expr`
    /// definitions, where the stored unit is `expr / coeff`).
    pub fn divided_by(&self, factor: f64) -> Unit {
        self.scaled(1.0 / factor)
    }

    /// Add to the offset: `K - 273.15` shifts by -273.15.
    pub fn shifted(&self, offset: f64) -> Unit {
        Unit {
            scale: self.scale,
            offset: Some(self.offset() + offset),
            dimension: self.dimension.clone(),
        }
    }

    /// Reject inf/NaN and zero scales. Overflow is signaled at the point
    /// it happens, and a zero scale would turn every later conversion
    /// through this unit into a silent inf.
    pub fn ensure_finite(self) -> Result<Unit, ParseError> {
        if self.scale.is_finite() && self.scale != 0.0 {
            Ok(self)
        } else {
            Err(ParseError::Numeric(format!(
                "scale factor is not usable ({})",
                self.scale
            )))
        }
    }

    fn reject_offset_algebra(&self, other: &Unit, op: &str) -> Result<(), ParseError> {
        if self.is_offset() || other.is_offset() {
            return Err(ParseError::OffsetUnit(format!(
                "cannot {} offset units; use the non-offset (delta) unit instead",
                op
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scale, self.dimension)?;
        if let Some(offset) = self.offset {
            write!(f, " {} {}", if offset < 0.0 { "-" } else { "+" }, offset.abs())?;
        }
        Ok(())
    }
}
