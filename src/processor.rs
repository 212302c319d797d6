//! Token evaluation against a single stack.
//!
//! The processor owns one [`Stack`] and both registries and reduces a token
//! sequence left to right. There is no state machine across calls: the stack
//! contents are the only state carried between invocations.

use crate::error::CalcError;
use crate::parse::Parser;
use crate::registry::{FunctionRegistry, OperatorRegistry};
use crate::stack::Stack;
use crate::token::Token;

/// Evaluates token sequences against a stack.
pub struct Processor {
    stack: Stack,
    operators: OperatorRegistry,
    functions: FunctionRegistry,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    /// Create a processor with an empty stack and the built-in registries.
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            operators: OperatorRegistry::with_builtins(),
            functions: FunctionRegistry::with_builtins(),
        }
    }

    /// The live stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The operator registry.
    pub fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    /// The function registry.
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Parse an input line against this processor's registries.
    pub fn parse(&self, input: &str) -> Result<Vec<Token>, CalcError> {
        Parser::new(&self.operators, &self.functions).parse(input)
    }

    /// Apply tokens in order and return the evaluation result.
    ///
    /// Numbers push their value. Operators require
    /// `len >= min_stack_size` before they run; functions do their own
    /// checks. The first failing token aborts immediately: tokens already
    /// applied stay applied, only individual operations are atomic.
    ///
    /// The result is the value produced by the *last* operator or function,
    /// even if numbers were pushed afterwards. If none ran, it is the
    /// current stack top, or `NoResultOnStack` for an empty stack.
    pub fn process(&mut self, tokens: &[Token]) -> Result<f64, CalcError> {
        let mut last_result = None;

        for token in tokens {
            match token {
                Token::Number(value) => self.stack.push(*value),
                Token::Operator(symbol) => {
                    let operator = self.operators.get(symbol)?;
                    if self.stack.len() < operator.min_stack_size() {
                        return Err(CalcError::StackHasLessThanTwoNumbers);
                    }
                    last_result = Some(operator.evaluate(&mut self.stack)?);
                }
                Token::Function(name) => {
                    let function = self.functions.get(name)?;
                    last_result = Some(function.execute(&mut self.stack)?);
                }
            }
        }

        match last_result {
            Some(value) => Ok(value),
            None => self.stack.peek().map_err(|_| CalcError::NoResultOnStack),
        }
    }

    /// Parse and process an input line in one step.
    pub fn eval(&mut self, input: &str) -> Result<f64, CalcError> {
        let tokens = self.parse(input)?;
        self.process(&tokens)
    }

    /// Replace the live stack's contents with a copy of a snapshot.
    ///
    /// Used for undo; the registries are unaffected.
    pub fn restore_stack(&mut self, snapshot: &Stack) {
        self.stack.restore_from(snapshot);
    }
}
