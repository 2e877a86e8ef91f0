//! # Python Bindings
//!
//! PyO3 bindings exposing the registry and quantity surface to host
//! applications.
//!
//! ## Python API
//!
//! ```python
//! from unit_convert import UnitRegistry
//!
//! reg = UnitRegistry.with_defaults()
//! reg.define_unit("1 furlong = 220 yd")
//!
//! q = reg.make_quantity("100 mile/hour")
//! print(q.to("m/s").value())   # 44.704
//!
//! len(reg)                     # number of defined units
//! "furlong" in reg             # True
//! ```
//!
//! Lifetimes cannot cross the FFI boundary, so a Python `Quantity` holds a
//! shared handle to its originating registry instead of a borrow; the
//! binding is the same, enforced at run time.

use std::sync::{Arc, Mutex, MutexGuard};

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{convert_value, Unit};
use crate::registry::UnitRegistry;

fn lock(registry: &Arc<Mutex<UnitRegistry>>) -> PyResult<MutexGuard<'_, UnitRegistry>> {
    registry
        .lock()
        .map_err(|_| PyRuntimeError::new_err("unit registry mutex poisoned"))
}

/// A quantity bound to the registry that produced it.
#[pyclass(name = "Quantity")]
#[derive(Clone)]
pub struct PyQuantity {
    value: f64,
    unit: Unit,
    registry: Arc<Mutex<UnitRegistry>>,
}

#[pymethods]
impl PyQuantity {
    /// The magnitude in the unit this quantity currently represents.
    fn value(&self) -> f64 {
        self.value
    }

    /// Convert to the unit named by an expression.
    ///
    /// Args:
    ///     target: Unit expression, e.g. "m/s" or "kg cm^2 / s^2"
    ///
    /// Returns:
    ///     Quantity: A new quantity; the source is unchanged.
    fn to(&self, target: &str) -> PyResult<PyQuantity> {
        let unit = {
            let reg = lock(&self.registry)?;
            reg.resolve_unit(target)
                .map_err(|e| PyValueError::new_err(format!("{}", e)))?
        };
        let value = convert_value(self.value, &self.unit, &unit)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(PyQuantity {
            value,
            unit,
            registry: Arc::clone(&self.registry),
        })
    }

    /// Re-express this quantity in coherent base units.
    fn to_base_units(&self) -> PyQuantity {
        let value = (self.value - self.unit.offset()) * self.unit.scale();
        PyQuantity {
            value,
            unit: Unit::base(self.unit.dimension().clone()),
            registry: Arc::clone(&self.registry),
        }
    }

    /// The quantity's dimension vector as a string, e.g. "L T^-1".
    fn dimension(&self) -> String {
        format!("{}", self.unit.dimension())
    }

    fn __repr__(&self) -> String {
        format!("Quantity(value={}, unit='{}')", self.value, self.unit)
    }

    fn __str__(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}

/// A registry of named units, built up from textual definitions.
#[pyclass(name = "UnitRegistry")]
pub struct PyUnitRegistry {
    inner: Arc<Mutex<UnitRegistry>>,
}

#[pymethods]
impl PyUnitRegistry {
    /// Create an empty registry.
    #[new]
    fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(UnitRegistry::new())),
        }
    }

    /// Create a registry pre-seeded with the bootstrap unit set.
    #[staticmethod]
    fn with_defaults() -> Self {
        Self {
            inner: Arc::new(Mutex::new(UnitRegistry::with_defaults())),
        }
    }

    /// Register a base unit for a dimension.
    ///
    /// Args:
    ///     symbol: The unit's name, e.g. "m"
    ///     dimension_symbol: The dimension it anchors, e.g. "L"
    fn define_base_unit(&self, symbol: &str, dimension_symbol: &str) -> PyResult<()> {
        lock(&self.inner)?
            .define_base_unit(symbol, dimension_symbol)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Add one definition line, e.g. "1 in = 2.54 cm" or "m = [L]".
    fn define_unit(&self, line: &str) -> PyResult<()> {
        lock(&self.inner)?
            .define_unit(line)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Apply a definitions text, one definition per line.
    ///
    /// Returns:
    ///     int: Number of definitions applied.
    fn load_definitions(&self, text: &str) -> PyResult<usize> {
        lock(&self.inner)?
            .load_definitions(text)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Build a quantity from a literal like "100 mile/hour".
    fn make_quantity(&self, literal: &str) -> PyResult<PyQuantity> {
        let reg = lock(&self.inner)?;
        let quantity = reg
            .make_quantity(literal)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(PyQuantity {
            value: quantity.value(),
            unit: quantity.unit().clone(),
            registry: Arc::clone(&self.inner),
        })
    }

    /// Build a quantity from a separate value and unit expression.
    fn quantity(&self, value: f64, unit_expr: &str) -> PyResult<PyQuantity> {
        let reg = lock(&self.inner)?;
        let quantity = reg
            .make_quantity_parts(value, unit_expr)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(PyQuantity {
            value: quantity.value(),
            unit: quantity.unit().clone(),
            registry: Arc::clone(&self.inner),
        })
    }

    /// Number of defined units.
    fn __len__(&self) -> PyResult<usize> {
        Ok(lock(&self.inner)?.len())
    }

    /// True if `symbol` is defined (exact match, no prefix fallback).
    fn __contains__(&self, symbol: &str) -> PyResult<bool> {
        Ok(lock(&self.inner)?.lookup(symbol).is_some())
    }

    fn __repr__(&self) -> String {
        match self.inner.lock() {
            Ok(reg) => format!("UnitRegistry(units={})", reg.len()),
            Err(_) => "UnitRegistry(<poisoned>)".to_string(),
        }
    }
}

/// The process-wide default registry, shared with the Rust side.
#[pyfunction]
fn global_registry() -> PyUnitRegistry {
    PyUnitRegistry {
        inner: crate::registry::global_registry(),
    }
}

/// unit-convert Python module
#[pymodule]
fn unit_convert(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyUnitRegistry>()?;
    m.add_class::<PyQuantity>()?;
    m.add_function(wrap_pyfunction!(global_registry, m)?)?;

    m.add("__doc__", "Runtime physical-unit conversion")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
