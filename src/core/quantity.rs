//! # Quantity
//!
//! A numeric magnitude tagged with the unit it is expressed in, bound to
//! the registry that produced it. Quantities are immutable: `to` returns a
//! new value and never touches the source.
//!
//! The registry binding is a borrow, so converting against a foreign
//! registry is unrepresentable - the target expression always resolves
//! against the registry the quantity came from.

use std::fmt;

use crate::core::Unit;
use crate::error::ConversionError;
use crate::registry::UnitRegistry;

/// Convert a magnitude between two already-resolved units.
///
/// Fails with [`ConversionError::DimensionMismatch`] unless the dimension
/// vectors are equal. The rescale multiplies by the direct ratio of scale
/// factors (offset-adjusted on either side), so chained conversions only
/// accumulate ordinary floating-point rounding.
pub fn convert_value(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    if from.dimension() != to.dimension() {
        return Err(ConversionError::DimensionMismatch {
            from: from.dimension().clone(),
            to: to.dimension().clone(),
        });
    }
    Ok((value - from.offset()) * (from.scale() / to.scale()) + to.offset())
}

/// A value with a unit, produced by [`UnitRegistry::make_quantity`].
#[derive(Debug, Clone)]
pub struct Quantity<'r> {
    value: f64,
    unit: Unit,
    registry: &'r UnitRegistry,
}

impl<'r> Quantity<'r> {
    pub(crate) fn new(value: f64, unit: Unit, registry: &'r UnitRegistry) -> Self {
        Self { value, unit, registry }
    }

    /// The magnitude, in whatever unit this quantity currently represents
    /// (the unit used at construction or at the most recent `to`).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit this quantity is expressed in.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The registry this quantity resolves target expressions against.
    pub fn registry(&self) -> &'r UnitRegistry {
        self.registry
    }

    /// Convert to the unit named by an expression, e.g. `"m/s"`.
    ///
    /// The expression is resolved against the originating registry. The
    /// dimension vectors must match exactly; there is no implicit or lossy
    /// conversion.
    pub fn to(&self, target_expr: &str) -> Result<Quantity<'r>, ConversionError> {
        let target = self.registry.resolve_unit(target_expr)?;
        self.to_unit(&target)
    }

    /// Convert to an already-resolved unit.
    pub fn to_unit(&self, target: &Unit) -> Result<Quantity<'r>, ConversionError> {
        let value = convert_value(self.value, &self.unit, target)?;
        Ok(Quantity::new(value, target.clone(), self.registry))
    }

    /// Re-express this quantity in coherent base units (scale 1).
    pub fn to_base_units(&self) -> Quantity<'r> {
        let value = (self.value - self.unit.offset()) * self.unit.scale();
        Quantity::new(value, Unit::base(self.unit.dimension().clone()), self.registry)
    }
}

impl fmt::Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
