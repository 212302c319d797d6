//! Calculator value stack.
//!
//! Holds `f64` values; the last element is the top. Besides the usual
//! push/pop/peek/clear/swap primitives it carries the arithmetic-adjacent
//! bulk operations (sum, sqrt, pow, reciprocal) that work on the stack in
//! place. Failed operations leave the stack untouched, with one documented
//! exception: a negative `sqrt` consumes the popped value.

use crate::error::CalcError;

/// The calculator value stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    items: Vec<f64>,
}

impl Stack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a stack from existing values (bottom to top).
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { items: values }
    }

    /// Get the number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a slice of all values (bottom to top).
    pub fn as_slice(&self) -> &[f64] {
        &self.items
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: f64) {
        self.items.push(value);
    }

    /// Pop the top value.
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.items.pop().ok_or(CalcError::StackEmpty)
    }

    /// Peek at the top value without removing it.
    pub fn peek(&self) -> Result<f64, CalcError> {
        self.items.last().copied().ok_or(CalcError::StackEmpty)
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Exchange the top two values and return the value moved down
    /// (the previous top).
    pub fn swap(&mut self) -> Result<f64, CalcError> {
        let len = self.items.len();
        if len < 2 {
            return Err(CalcError::StackHasLessThanTwoNumbers);
        }
        self.items.swap(len - 1, len - 2);
        Ok(self.items[len - 2])
    }

    /// Sum every value, clear the stack, push the total, and return it.
    ///
    /// This is a destructive reduction, not a peek: `[1, 2, 3]` becomes
    /// `[6]`.
    pub fn sum(&mut self) -> Result<f64, CalcError> {
        if self.items.is_empty() {
            return Err(CalcError::StackEmpty);
        }
        let total: f64 = self.items.iter().sum();
        self.items.clear();
        self.items.push(total);
        Ok(total)
    }

    /// Pop the top value, push its square root, and return the root.
    ///
    /// A negative top fails with `InvalidNegativeSquareRoot` and the popped
    /// value is NOT restored. This asymmetry is part of the contract; see
    /// the module tests.
    pub fn sqrt(&mut self) -> Result<f64, CalcError> {
        let value = self.pop()?;
        if value < 0.0 {
            return Err(CalcError::InvalidNegativeSquareRoot);
        }
        let root = value.sqrt();
        self.items.push(root);
        Ok(root)
    }

    /// Pop the exponent (top) then the base, push `base^exponent`, and
    /// return it.
    pub fn pow(&mut self) -> Result<f64, CalcError> {
        if self.items.len() < 2 {
            return Err(CalcError::StackHasLessThanTwoNumbers);
        }
        let exponent = self.pop()?;
        let base = self.pop()?;
        let result = base.powf(exponent);
        self.items.push(result);
        Ok(result)
    }

    /// Return the reciprocal of the top value without popping or pushing.
    ///
    /// Unlike the other bulk operations this is a read-only transform: the
    /// stack is never mutated, even on success. A zero top fails with
    /// `DivisionByZero`.
    pub fn reciprocal(&self) -> Result<f64, CalcError> {
        let top = self.peek()?;
        if top == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(1.0 / top)
    }

    /// Replace the contents with a copy of another stack's contents.
    pub fn restore_from(&mut self, snapshot: &Stack) {
        self.items.clear();
        self.items.extend_from_slice(&snapshot.items);
    }
}
