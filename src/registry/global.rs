//! # Global Registry Handle
//!
//! A process-wide default registry for callers that do not want to manage
//! their own instance. Built lazily on first access (exactly once, even
//! under concurrent first use), pre-seeded with the bootstrap definitions,
//! never reset. Internally it is an ordinary [`UnitRegistry`]; the mutex is
//! the external synchronization every registry needs for cross-thread
//! mutation.

use std::sync::{Arc, Mutex, OnceLock};

use crate::registry::UnitRegistry;

static GLOBAL: OnceLock<Arc<Mutex<UnitRegistry>>> = OnceLock::new();

/// The process-wide default registry, pre-loaded with
/// [`DEFAULT_UNIT_DEFINITIONS`](crate::registry::DEFAULT_UNIT_DEFINITIONS).
///
/// Returns a shared handle; every call sees the same instance, so units
/// defined through one handle are visible through all of them.
///
/// # Example
///
/// ```
/// use unit_convert::global_registry;
///
/// let reg = global_registry();
/// let reg = reg.lock().unwrap();
/// let q = reg.make_quantity("2 m").unwrap();
/// assert!((q.to("cm").unwrap().value() - 200.0).abs() < 1e-9);
/// ```
pub fn global_registry() -> Arc<Mutex<UnitRegistry>> {
    GLOBAL
        .get_or_init(|| Arc::new(Mutex::new(UnitRegistry::with_defaults())))
        .clone()
}
