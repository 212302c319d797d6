//! Binary arithmetic operators.
//!
//! The operator set is fixed and small, so operators are a closed enum
//! dispatched by `match` rather than trait objects behind a registry.

use crate::error::CalcError;
use crate::stack::Stack;

/// The built-in binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every built-in operator, in registration order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The textual symbol the parser matches. Case-sensitive.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Human-readable operator name.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "Add",
            Operator::Subtract => "Subtract",
            Operator::Multiply => "Multiply",
            Operator::Divide => "Divide",
        }
    }

    /// One-line description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            Operator::Add => "Adds the top two numbers",
            Operator::Subtract => "Subtracts the top number from the second",
            Operator::Multiply => "Multiplies the top two numbers",
            Operator::Divide => "Divides the second number by the top",
        }
    }

    /// Minimum stack depth required before `evaluate` may run.
    pub fn min_stack_size(&self) -> usize {
        2
    }

    /// Pop the right then the left operand, push the result, and return it.
    ///
    /// Division checks the divisor (the current top) before popping, so a
    /// failed `/` leaves both operands on the stack.
    pub fn evaluate(&self, stack: &mut Stack) -> Result<f64, CalcError> {
        if matches!(self, Operator::Divide) && stack.peek()? == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let right = stack.pop()?;
        let left = stack.pop()?;
        let result = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        };
        stack.push(result);
        Ok(result)
    }
}
