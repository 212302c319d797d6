//! High-level session facade.
//!
//! A [`Session`] is what a presentation layer talks to: it accepts raw input
//! lines and discrete named commands, exposes a read-only view of the stack
//! and the most recent error text, and wires successful inputs into the
//! synchronized undo history.

use log::debug;

use crate::error::CalcError;
use crate::history::SynchronizedHistory;
use crate::persist::HistoryRecord;
use crate::processor::Processor;

/// One evaluator plus its undo history and last-error text.
pub struct Session {
    processor: Processor,
    history: SynchronizedHistory,
    last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with an empty stack and history.
    pub fn new() -> Self {
        Self {
            processor: Processor::new(),
            history: SynchronizedHistory::new(),
            last_error: None,
        }
    }

    /// Evaluate a raw input line.
    ///
    /// On success the stack state from *before* the line ran is recorded in
    /// the history, paired with the line, so [`undo`](Self::undo) can step
    /// back over it. A failed line records nothing. Lines that produce no
    /// tokens (blank input) are evaluated but never recorded.
    pub fn eval(&mut self, line: &str) -> Result<f64, CalcError> {
        let result = self.eval_inner(line);
        self.note(&result);
        result
    }

    fn eval_inner(&mut self, line: &str) -> Result<f64, CalcError> {
        let tokens = self.processor.parse(line)?;
        if tokens.is_empty() {
            return self.processor.process(&tokens);
        }

        let before = self.processor.stack().clone();
        let value = self.processor.process(&tokens)?;
        self.history.push(&before, line)?;
        debug!("eval {line:?} -> {value}");
        Ok(value)
    }

    /// Run a named command (`pop`, `swap`, `clear`, `sum`, `sqrt`, `pow`,
    /// `reciprocal`) through the function registry.
    pub fn command(&mut self, name: &str) -> Result<f64, CalcError> {
        // `reciprocal` is the presentation-facing name for recip().
        let name = if name.eq_ignore_ascii_case("reciprocal") {
            "recip"
        } else {
            name
        };
        if !self.processor.functions().is_valid(name) {
            let err = CalcError::UnknownFunction(name.to_string());
            self.last_error = Some(err.to_string());
            return Err(err);
        }
        self.eval(&format!("{}()", name.to_lowercase()))
    }

    /// Undo the most recent recorded input.
    ///
    /// Restores the stack snapshot taken before that input ran and returns
    /// the undone line.
    pub fn undo(&mut self) -> Result<String, CalcError> {
        let result = self.undo_inner();
        self.note(&result);
        result
    }

    fn undo_inner(&mut self) -> Result<String, CalcError> {
        let (snapshot, input) = self.history.pop()?;
        self.processor.restore_stack(&snapshot);
        debug!("undo {input:?}");
        Ok(input)
    }

    fn note<T>(&mut self, result: &Result<T, CalcError>) {
        match result {
            Ok(_) => self.last_error = None,
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    /// Read-only view of the stack contents, bottom first, top last.
    pub fn stack(&self) -> &[f64] {
        self.processor.stack().as_slice()
    }

    /// The most recent error text, cleared by the next successful
    /// operation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True iff an input can be undone.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// The undo history, for persistence.
    pub fn history(&self) -> &SynchronizedHistory {
        &self.history
    }

    /// Capture the history for saving.
    pub fn export_history(&self) -> HistoryRecord {
        HistoryRecord::from_history(&self.history)
    }

    /// Replace the history with a loaded record.
    pub fn import_history(&mut self, record: HistoryRecord) -> Result<(), CalcError> {
        self.history = record.into_history()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_records_history() {
        let mut session = Session::new();
        assert_eq!(session.eval("3 4 +").unwrap(), 7.0);
        assert_eq!(session.stack(), &[7.0]);
        assert!(session.can_undo());
    }

    #[test]
    fn failed_eval_records_nothing() {
        let mut session = Session::new();
        assert!(session.eval("bogus").is_err());
        assert!(!session.can_undo());
        assert!(session.last_error().unwrap().contains("bogus"));
    }

    #[test]
    fn undo_restores_previous_stack() {
        let mut session = Session::new();
        session.eval("1 2 3").unwrap();
        session.eval("+").unwrap();
        assert_eq!(session.stack(), &[1.0, 5.0]);

        assert_eq!(session.undo().unwrap(), "+");
        assert_eq!(session.stack(), &[1.0, 2.0, 3.0]);

        assert_eq!(session.undo().unwrap(), "1 2 3");
        assert_eq!(session.stack(), &[] as &[f64]);
    }

    #[test]
    fn undo_empty_history_errors() {
        let mut session = Session::new();
        assert_eq!(session.undo(), Err(CalcError::HistoryIsEmpty));
        assert!(session.last_error().is_some());
    }

    #[test]
    fn success_clears_last_error() {
        let mut session = Session::new();
        let _ = session.eval("bogus");
        assert!(session.last_error().is_some());
        session.eval("1").unwrap();
        assert!(session.last_error().is_none());
    }

    #[test]
    fn commands_dispatch_through_registry() {
        let mut session = Session::new();
        session.eval("1 2 3").unwrap();
        assert_eq!(session.command("sum").unwrap(), 6.0);
        assert_eq!(session.stack(), &[6.0]);

        assert_eq!(session.command("reciprocal").unwrap(), 1.0 / 6.0);
        // recip is read-only.
        assert_eq!(session.stack(), &[6.0]);
    }

    #[test]
    fn unknown_command_errors() {
        let mut session = Session::new();
        assert_eq!(
            session.command("cube"),
            Err(CalcError::UnknownFunction("cube".to_string()))
        );
    }

    #[test]
    fn commands_are_undoable() {
        let mut session = Session::new();
        session.eval("1 2").unwrap();
        session.command("swap").unwrap();
        assert_eq!(session.stack(), &[2.0, 1.0]);

        assert_eq!(session.undo().unwrap(), "swap()");
        assert_eq!(session.stack(), &[1.0, 2.0]);
    }

    #[test]
    fn blank_input_is_not_recorded() {
        let mut session = Session::new();
        session.eval("5").unwrap();
        assert_eq!(session.eval("   ").unwrap(), 5.0);
        // Only the real input is in the history.
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn history_export_import_round_trips() {
        let mut session = Session::new();
        session.eval("1 2").unwrap();
        session.eval("+").unwrap();

        let record = session.export_history();
        let mut fresh = Session::new();
        fresh.import_history(record).unwrap();
        assert_eq!(fresh.history().len(), 2);
        assert!(fresh.can_undo());
    }
}
