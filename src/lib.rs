//! # unit-convert - Runtime Physical-Unit Conversion
//!
//! > "Dimensions are checked where the data arrives, not where it compiles"
//!
//! unit-convert resolves unit expressions against a registry built entirely
//! at run time. Units are text until the moment they are needed, which makes
//! the crate suitable for config files, network payloads, and user input
//! where the set of units is not known ahead of time.
//!
//! ## Philosophy
//!
//! - **Text in, numbers out** - Units arrive as strings, conversions leave as `f64`
//! - **Registries over tables** - Every unit is defined in terms of earlier ones
//! - **Dimensions are data** - Sparse exponent vectors, user-extensible symbols
//! - **Pure core, swappable surfaces** - The same registry backs Rust and Python
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      unit-convert                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    Dimension, Unit, Quantity, convert_value                 │
//! │                                                              │
//! │  PARSER (text to units)                                      │
//! │    Lexer, recursive-descent expression resolver             │
//! │                                                              │
//! │  REGISTRY (state)                                            │
//! │    UnitRegistry, SI prefix fallback, bootstrap definitions, │
//! │    process-wide global handle                               │
//! │                                                              │
//! │  SURFACES                                                    │
//! │    Python bindings (feature "python")                       │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use unit_convert::UnitRegistry;
//!
//! // Registry pre-seeded with the SI base set and common derived units
//! let reg = UnitRegistry::with_defaults();
//!
//! // Parse a quantity literal and convert it
//! let speed = reg.make_quantity("100 mile/hour").unwrap();
//! assert!((speed.to("m/s").unwrap().value() - 44.704).abs() < 1e-9);
//!
//! // Extend the registry with your own units
//! let mut reg = UnitRegistry::with_defaults();
//! reg.define_unit("1 furlong = 220 yd").unwrap();
//! let q = reg.make_quantity("8 furlong").unwrap();
//! assert!((q.to("mile").unwrap().value() - 1.0).abs() < 1e-9);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: Dimension, Unit, Quantity, convert_value
pub mod core;

/// Error taxonomy shared by the parser and the registry
pub mod error;

/// Expression parsing - lexer and recursive-descent resolver
pub mod parser;

/// Registry - unit state, SI prefix fallback, bootstrap set, global handle
pub mod registry;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub mod python;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{convert_value, Dimension, Quantity, Unit};

// Errors
pub use crate::error::{ConversionError, DefineError, LoadError, ParseError};

// Registry
pub use crate::registry::{global_registry, UnitRegistry, DEFAULT_UNIT_DEFINITIONS};
