//! Bounded undo histories.
//!
//! [`History`] is a generic bounded undo stack: LIFO retrieval inside a
//! window that evicts its oldest entry on overflow. Entries are stored by
//! value, so a pushed snapshot cannot be corrupted by later mutation of the
//! source; an optional deep-clone hook covers types with shared interiors.
//!
//! [`SynchronizedHistory`] pairs a stack-snapshot history with an
//! input-line history and keeps them in lock-step with a two-phase
//! push/pop: if the second half of an operation fails, the first half is
//! compensated before the error is returned, so the two sub-histories are
//! never observably different lengths.

use crate::error::CalcError;
use crate::stack::Stack;

/// Default capacity for histories.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

type CloneFn<T> = Box<dyn Fn(&T) -> T>;
type ValidateFn<T> = Box<dyn Fn(&T) -> bool>;

/// A bounded undo stack.
pub struct History<T> {
    entries: Vec<T>,
    max_entries: usize,
    clone_fn: Option<CloneFn<T>>,
    validate: Option<ValidateFn<T>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create a history with the default capacity.
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a history with an explicit capacity.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
            clone_fn: None,
            validate: None,
        }
    }

    /// Store a deep copy produced by `clone` instead of the pushed value.
    ///
    /// Only useful for types whose `Clone` is shallow (shared interiors);
    /// plain value types are already stored defensively.
    pub fn clone_with(mut self, clone: impl Fn(&T) -> T + 'static) -> Self {
        self.clone_fn = Some(Box::new(clone));
        self
    }

    /// Reject pushes for which `validate` returns false.
    pub fn validate_with(mut self, validate: impl Fn(&T) -> bool + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Push an entry.
    ///
    /// A configured validator may reject the item with `ValidationFailed`,
    /// leaving the history unchanged. On overflow the oldest entry is
    /// evicted.
    pub fn push(&mut self, item: T) -> Result<(), CalcError> {
        if let Some(validate) = &self.validate
            && !validate(&item)
        {
            return Err(CalcError::ValidationFailed);
        }
        let stored = match &self.clone_fn {
            Some(clone) => clone(&item),
            None => item,
        };
        self.entries.push(stored);
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
        Ok(())
    }

    /// Remove and return the most recently pushed entry.
    pub fn pop(&mut self) -> Result<T, CalcError> {
        self.entries.pop().ok_or(CalcError::HistoryIsEmpty)
    }

    /// True iff at least one entry can be popped.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

/// An input line must contain something other than whitespace to be worth
/// recording. Shared by the input history's validator and the up-front
/// check in [`SynchronizedHistory::push`].
fn input_is_valid(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Two co-indexed histories: stack snapshots and the input lines that
/// produced them.
pub struct SynchronizedHistory {
    stacks: History<Stack>,
    inputs: History<String>,
}

impl Default for SynchronizedHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SynchronizedHistory {
    /// Create a synchronized history with the default capacity.
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// Create a synchronized history with an explicit capacity.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            stacks: History::with_max_entries(max_entries),
            inputs: History::with_max_entries(max_entries)
                .validate_with(|input: &String| input_is_valid(input)),
        }
    }

    /// Push a stack snapshot and the input line that produced it.
    ///
    /// Blank input is rejected before the stack history is touched: once
    /// both sides are at capacity, a stack-side push evicts the oldest
    /// snapshot, and a later compensation could not bring it back. Any
    /// other input-side failure is compensated by popping the snapshot
    /// back out before the error is returned.
    pub fn push(&mut self, stack: &Stack, input: &str) -> Result<(), CalcError> {
        if !input_is_valid(input) {
            return Err(CalcError::ValidationFailed);
        }
        self.stacks.push(stack.clone())?;
        if let Err(err) = self.inputs.push(input.to_string()) {
            // Compensate: the push above cannot be left in place.
            let _ = self.stacks.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Pop the most recent snapshot/input pair.
    ///
    /// The snapshot history is popped first; if the input pop then fails,
    /// the snapshot is pushed back before the error is returned.
    pub fn pop(&mut self) -> Result<(Stack, String), CalcError> {
        let stack = self.stacks.pop()?;
        match self.inputs.pop() {
            Ok(input) => Ok((stack, input)),
            Err(err) => {
                // Compensate: restore the snapshot we just removed.
                let _ = self.stacks.push(stack);
                Err(err)
            }
        }
    }

    /// True iff a pair can be popped.
    ///
    /// The sub-histories always have equal length, so the stack history's
    /// flag is authoritative.
    pub fn can_undo(&self) -> bool {
        self.stacks.can_undo()
    }

    /// Get the number of stored pairs.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Stored snapshots, oldest first.
    pub fn snapshots(&self) -> &[Stack] {
        self.stacks.entries()
    }

    /// Stored input lines, oldest first.
    pub fn inputs(&self) -> &[String] {
        self.inputs.entries()
    }

    /// Rebuild a history from saved parallel sequences, oldest first.
    ///
    /// Fails with `ValidationFailed` if the sequences have different
    /// lengths; blank input lines are rejected pair-by-pair as usual.
    pub fn restore(snapshots: Vec<Stack>, inputs: Vec<String>) -> Result<Self, CalcError> {
        if snapshots.len() != inputs.len() {
            return Err(CalcError::ValidationFailed);
        }
        let mut history = Self::new();
        for (snapshot, input) in snapshots.into_iter().zip(inputs) {
            history.push(&snapshot, &input)?;
        }
        Ok(history)
    }
}
