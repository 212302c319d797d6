//! Tokenizer/parser for postfix input lines.
//!
//! A line is split on whitespace and every item is classified in precedence
//! order:
//!
//! 1. parses as an IEEE double (sign, decimal point, scientific notation)
//!    → number token
//! 2. ends with `()` and the stripped name resolves as a function
//!    → function token
//! 3. resolves as an operator symbol → operator token
//!
//! Validation is a separate pass over the whole line: every invalid item is
//! collected, and parsing fails with a single aggregated error listing all
//! of them. Only a fully valid line is turned into tokens.

use crate::error::CalcError;
use crate::registry::{FunctionRegistry, OperatorRegistry};
use crate::token::Token;

/// Parser over a pair of registries.
pub struct Parser<'a> {
    operators: &'a OperatorRegistry,
    functions: &'a FunctionRegistry,
}

impl<'a> Parser<'a> {
    /// Create a parser that validates against the given registries.
    pub fn new(operators: &'a OperatorRegistry, functions: &'a FunctionRegistry) -> Self {
        Self {
            operators,
            functions,
        }
    }

    /// Parse a single input line into tokens.
    ///
    /// Empty or whitespace-only input is not an error: it yields an empty
    /// token sequence.
    pub fn parse(&self, input: &str) -> Result<Vec<Token>, CalcError> {
        let items: Vec<&str> = input.split_whitespace().collect();
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let invalid: Vec<&str> = items
            .iter()
            .copied()
            .filter(|item| !self.is_valid_item(item))
            .collect();
        if !invalid.is_empty() {
            return Err(CalcError::InvalidInput(invalid.join(" ")));
        }

        let mut tokens = Vec::with_capacity(items.len());
        for item in items {
            tokens.push(self.make_token(item)?);
        }
        Ok(tokens)
    }

    fn is_valid_item(&self, item: &str) -> bool {
        item.parse::<f64>().is_ok()
            || function_name(item).is_some_and(|name| self.functions.is_valid(name))
            || self.operators.is_valid(item)
    }

    /// Build the token for one already-validated item.
    ///
    /// Registry lookups are repeated here; a failure is unexpected after
    /// validation but still propagates.
    fn make_token(&self, item: &str) -> Result<Token, CalcError> {
        if let Ok(value) = item.parse::<f64>() {
            return Ok(Token::Number(value));
        }
        if let Some(name) = function_name(item)
            && self.functions.is_valid(name)
        {
            let function = self.functions.get(name)?;
            return Ok(Token::Function(function.name().to_string()));
        }
        let operator = self.operators.get(item)?;
        Ok(Token::Operator(operator.symbol().to_string()))
    }
}

/// Strip the trailing `()` from a function call item.
fn function_name(item: &str) -> Option<&str> {
    item.strip_suffix("()")
}
