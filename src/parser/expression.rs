//! # Expression Evaluator
//!
//! Recursive-descent evaluation of the unit mini-language, resolving
//! symbols against a registry as it goes:
//!
//! ```text
//! expr      := term (('*' | implicit-space) term)* offset?
//! term      := factor ('/' factor)*
//! factor    := SYMBOL ('^' INTEGER)? | NUMBER
//! offset    := ('+' | '-') NUMBER
//! bracketed := '[' SYMBOL ']'
//! ```
//!
//! `^` binds tighter than `*` and `/`; everything else associates left to
//! right, so `g cm mm / hour / min / ms` is g.cm.mm / (hour.min.ms). A
//! bracketed dimension symbol stands alone as a whole expression and yields
//! the coherent unit of that (possibly brand-new) dimension.

use crate::core::{Dimension, Unit};
use crate::error::ParseError;
use crate::parser::{lex, Token};
use crate::registry::UnitRegistry;

/// Evaluate `expr` against `registry`, producing the accumulated
/// (coefficient-folded) scale and dimension vector as a [`Unit`].
pub fn resolve(expr: &str, registry: &UnitRegistry) -> Result<Unit, ParseError> {
    let tokens = lex(expr)?;
    if tokens.is_empty() {
        return Err(ParseError::Syntax(format!(
            "empty unit expression in '{}'",
            expr
        )));
    }
    let mut parser = ExprParser { tokens, pos: 0, registry };
    let unit = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(unit)
}

struct ExprParser<'r> {
    tokens: Vec<Token>,
    pos: usize,
    registry: &'r UnitRegistry,
}

impl ExprParser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::Syntax(format!(
                "unexpected trailing input at token {:?}",
                token
            ))),
        }
    }

    fn parse_expression(&mut self) -> Result<Unit, ParseError> {
        if matches!(self.peek(), Some(Token::LBracket)) {
            return self.parse_bracketed();
        }

        let mut unit = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    unit = unit.multiply(&rhs)?;
                }
                // implicit multiplication: the next token opens a factor
                Some(Token::Symbol(_)) | Some(Token::Number { .. }) => {
                    let rhs = self.parse_term()?;
                    unit = unit.multiply(&rhs)?;
                }
                // offset tail: '+ 273.15' / '- 273.15', then nothing else
                Some(Token::Plus) | Some(Token::Minus) => {
                    let offset = self.parse_offset()?;
                    self.expect_end()?;
                    unit = unit.shifted(offset);
                }
                _ => break,
            }
        }
        Ok(unit)
    }

    fn parse_term(&mut self) -> Result<Unit, ParseError> {
        let mut unit = self.parse_factor()?;
        while matches!(self.peek(), Some(Token::Slash)) {
            self.advance();
            let divisor = self.parse_factor()?;
            unit = unit.divide(&divisor)?;
        }
        Ok(unit)
    }

    fn parse_factor(&mut self) -> Result<Unit, ParseError> {
        match self.advance() {
            Some(Token::Symbol(symbol)) => {
                let mut unit = self.registry.resolve_symbol(&symbol)?;
                if matches!(self.peek(), Some(Token::Caret)) {
                    self.advance();
                    let exp = self.parse_exponent()?;
                    unit = unit.power(exp)?;
                }
                Ok(unit)
            }
            Some(Token::Number { value, .. }) => {
                Ok(Unit::dimensionless().scaled(value).ensure_finite()?)
            }
            other => Err(ParseError::Syntax(format!(
                "expected a unit symbol or number, found {:?}",
                other
            ))),
        }
    }

    /// Integer exponent with optional sign. A decimal point or anything
    /// else non-integral here is a syntax error, never a truncation.
    fn parse_exponent(&mut self) -> Result<i32, ParseError> {
        let sign = match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                -1
            }
            Some(Token::Plus) => {
                self.advance();
                1
            }
            _ => 1,
        };
        match self.advance() {
            Some(Token::Number { integral: Some(exp), .. }) => Ok(sign * exp),
            Some(Token::Number { integral: None, .. }) => Err(ParseError::Syntax(
                "exponents must be integers".to_string(),
            )),
            other => Err(ParseError::Syntax(format!(
                "expected an integer exponent, found {:?}",
                other
            ))),
        }
    }

    fn parse_offset(&mut self) -> Result<f64, ParseError> {
        let sign = match self.advance() {
            Some(Token::Minus) => -1.0,
            Some(Token::Plus) => 1.0,
            _ => unreachable!("caller checked for a sign token"),
        };
        match self.advance() {
            Some(Token::Number { value, .. }) => Ok(sign * value),
            other => Err(ParseError::Syntax(format!(
                "expected a numeric offset, found {:?}",
                other
            ))),
        }
    }

    /// `[SYM]` - the coherent unit of a base dimension. `[1]` is the
    /// dimensionless unit.
    fn parse_bracketed(&mut self) -> Result<Unit, ParseError> {
        self.advance(); // '['
        let dimension = match self.advance() {
            Some(Token::Symbol(symbol)) => Dimension::base(&symbol),
            Some(Token::Number { integral: Some(1), .. }) => Dimension::dimensionless(),
            other => {
                return Err(ParseError::Syntax(format!(
                    "expected a dimension symbol inside brackets, found {:?}",
                    other
                )));
            }
        };
        match self.advance() {
            Some(Token::RBracket) => {}
            other => {
                return Err(ParseError::Syntax(format!(
                    "expected ']', found {:?}",
                    other
                )));
            }
        }
        self.expect_end()?;
        Ok(Unit::base(dimension))
    }
}
