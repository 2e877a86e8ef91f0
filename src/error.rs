//! # Error Types
//!
//! One error enum per failure surface:
//! - [`ParseError`] - the expression mini-language rejected its input
//! - [`DefineError`] - a definition could not be added to a registry
//! - [`LoadError`] - a definitions text failed part-way through
//! - [`ConversionError`] - a quantity could not be converted
//!
//! Everything here is a recoverable result value. The crate never aborts
//! the process on bad input.

use thiserror::Error;

use crate::core::Dimension;

/// Errors produced while parsing a unit expression or quantity literal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Malformed token stream: unbalanced operator, stray character,
    /// non-integer exponent, missing unit in a quantity literal.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A referenced unit symbol is not in the registry (and is not an
    /// SI-prefixed form of one that is).
    #[error("unknown unit symbol '{0}'")]
    UnknownSymbol(String),

    /// A scale factor left the representable range, or a numeric literal
    /// could not be read.
    #[error("numeric error: {0}")]
    Numeric(String),

    /// Offset units (e.g. degC) cannot participate in products, quotients
    /// or powers.
    #[error("offset unit error: {0}")]
    OffsetUnit(String),
}

/// Errors produced while adding a definition to a registry.
///
/// A failed definition leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefineError {
    /// The symbol is already defined. The first definition stays intact.
    #[error("unit '{0}' already exists in the registry")]
    DuplicateSymbol(String),

    /// The definition's right-hand side did not parse or resolve.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A definitions text failed at a specific line.
///
/// Definitions on earlier lines were applied and remain in the registry;
/// callers can inspect how far loading proceeded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("definition at line {line} failed ('{text}'): {source}")]
pub struct LoadError {
    /// 1-based line number of the offending definition.
    pub line: usize,

    /// The offending line, trimmed.
    pub text: String,

    /// Why the definition was rejected.
    #[source]
    pub source: DefineError,
}

/// Errors produced while converting a quantity to another unit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Source and target dimension vectors differ. Conversion is never
    /// attempted across dimensions.
    #[error("cannot convert from [{from}] to [{to}]")]
    DimensionMismatch { from: Dimension, to: Dimension },

    /// The target unit expression did not parse or resolve.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
