//! Parsed input tokens.

use std::fmt;

/// A classified unit of parsed input.
///
/// Tokens are immutable value objects: produced once per parse, consumed
/// once per evaluation. Operator symbols and function names have already
/// been validated against their registries when a token is built.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// An operator symbol, e.g. `+`.
    Operator(String),
    /// A function name, stored lower-cased, e.g. `sum`.
    Function(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Operator(symbol) => write!(f, "{symbol}"),
            Token::Function(name) => write!(f, "{name}()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_input_shape() {
        assert_eq!(Token::Number(1.5).to_string(), "1.5");
        assert_eq!(Token::Operator("+".to_string()).to_string(), "+");
        assert_eq!(Token::Function("sum".to_string()).to_string(), "sum()");
    }
}
