//! # Lexer
//!
//! Tokenizes the unit mini-language. Whitespace separates tokens but emits
//! nothing - adjacency of two factors is what the evaluator reads as
//! implicit multiplication.

use crate::error::ParseError;

/// One token of the unit mini-language.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A unit symbol: starts with a letter or `_`, may contain digits
    /// after that (`H2O`).
    Symbol(String),

    /// A numeric literal. `integral` is populated only when the lexeme is
    /// a plain digit string, which is what exponent position requires.
    Number { value: f64, integral: Option<i32> },

    Star,
    Slash,
    Caret,
    Plus,
    Minus,
    LBracket,
    RBracket,
}

/// Tokenize an expression. First error wins.
pub(crate) fn lex(input: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' => i += 1,
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '[' => {
                tokens.push(Token::LBracket);
                i += 1;
            }
            ']' => {
                tokens.push(Token::RBracket);
                i += 1;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < bytes.len() {
                    let c = bytes[i] as char;
                    if c.is_ascii_alphanumeric() || c == '_' {
                        i += 1;
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Symbol(input[start..i].to_string()));
            }
            c if c.is_ascii_digit() || c == '.' => {
                let (token, next) = lex_number(input, i)?;
                tokens.push(token);
                i = next;
            }
            other => {
                return Err(ParseError::Syntax(format!(
                    "unexpected character '{}' in '{}'",
                    other, input
                )));
            }
        }
    }

    Ok(tokens)
}

/// Scan a decimal literal starting at `start`: digits, optional fraction,
/// optional exponent part. The exponent marker is only consumed when a
/// digit (or signed digit) follows, so `2m` and `2 e` lex as number then
/// symbol.
fn lex_number(input: &str, start: usize) -> Result<(Token, usize), ParseError> {
    let bytes = input.as_bytes();
    let mut i = start;
    let mut plain_digits = true;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        plain_digits = false;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            plain_digits = false;
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    let lexeme = &input[start..i];
    if lexeme == "." {
        return Err(ParseError::Syntax(format!(
            "stray '.' in '{}'",
            input
        )));
    }
    let value: f64 = lexeme
        .parse()
        .map_err(|_| ParseError::Numeric(format!("invalid numeric literal '{}'", lexeme)))?;
    let integral = if plain_digits {
        lexeme.parse::<i32>().ok()
    } else {
        None
    };

    Ok((Token::Number { value, integral }, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Symbol(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_lex_expression() {
        let tokens = lex("kg m^2 / s^-2").unwrap();
        assert_eq!(symbols(&tokens), vec!["kg", "m", "s"]);
        assert_eq!(tokens[2], Token::Caret);
        assert_eq!(
            tokens[3],
            Token::Number { value: 2.0, integral: Some(2) }
        );
        assert!(tokens.contains(&Token::Slash));
        assert!(tokens.contains(&Token::Minus));
    }

    #[test]
    fn test_lex_numbers() {
        assert_eq!(
            lex("2.54").unwrap(),
            vec![Token::Number { value: 2.54, integral: None }]
        );
        assert_eq!(
            lex("1e-3").unwrap(),
            vec![Token::Number { value: 1e-3, integral: None }]
        );
        assert_eq!(
            lex(".5").unwrap(),
            vec![Token::Number { value: 0.5, integral: None }]
        );
        assert_eq!(
            lex("42").unwrap(),
            vec![Token::Number { value: 42.0, integral: Some(42) }]
        );
    }

    #[test]
    fn test_number_then_symbol() {
        // '2m' is a coefficient followed by a unit, not one token
        let tokens = lex("2m").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::Number { value: 2.0, integral: Some(2) });
        assert_eq!(tokens[1], Token::Symbol("m".to_string()));

        // 'e' only opens an exponent when digits follow
        let tokens = lex("2 e").unwrap();
        assert_eq!(tokens[1], Token::Symbol("e".to_string()));
    }

    #[test]
    fn test_symbols_with_digits_and_underscores() {
        let tokens = lex("H2O electron_mass").unwrap();
        assert_eq!(symbols(&tokens), vec!["H2O", "electron_mass"]);
    }

    #[test]
    fn test_brackets() {
        let tokens = lex("[THETA]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LBracket,
                Token::Symbol("THETA".to_string()),
                Token::RBracket
            ]
        );
    }

    #[test]
    fn test_bad_character() {
        assert!(matches!(lex("m % s"), Err(ParseError::Syntax(_))));
        assert!(matches!(lex("."), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_fractional_literal_is_not_integral() {
        let tokens = lex("1.5").unwrap();
        assert_eq!(tokens[0], Token::Number { value: 1.5, integral: None });
    }
}
