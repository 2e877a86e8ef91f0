//! Unit-algebra mini-language: hand-written tokenizer + recursive-descent
//! evaluator. The grammar is deliberately small (products, quotients,
//! integer powers, one numeric coefficient, an optional offset tail), so no
//! grammar framework is used.

pub mod expression;
pub mod lexer;

pub use expression::resolve;
pub(crate) use lexer::{lex, Token};
