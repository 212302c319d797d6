//! rpncalc: a postfix (RPN) expression engine with undoable history.
//!
//! Input flows through a fixed pipeline:
//!
//! ```text
//! raw text → Parser → tokens → Processor → result + mutated Stack
//!               ↑                  ↑
//!        registries validate   registries dispatch
//! ```
//!
//! Successful inputs are recorded in a [`SynchronizedHistory`], a pair of
//! bounded histories (stack snapshots and input lines) kept in lock-step by
//! a two-phase push/pop, so they can be undone atomically. The
//! [`Session`] facade ties the pieces together for a presentation layer.
//!
//! # Example
//!
//! ```
//! use rpncalc::Session;
//!
//! let mut session = Session::new();
//! assert_eq!(session.eval("3 4 +").unwrap(), 7.0);
//! assert_eq!(session.stack(), &[7.0]);
//!
//! session.undo().unwrap();
//! assert!(session.stack().is_empty());
//! ```

pub mod error;
pub mod function;
pub mod history;
pub mod operator;
pub mod parse;
pub mod persist;
pub mod processor;
pub mod registry;
pub mod session;
pub mod stack;
pub mod token;

pub use error::{CalcError, StoreError};
pub use function::Function;
pub use history::{DEFAULT_MAX_ENTRIES, History, SynchronizedHistory};
pub use operator::Operator;
pub use parse::Parser;
pub use persist::{HistoryRecord, HistoryStore, JsonFileStore};
pub use processor::Processor;
pub use registry::{FunctionRegistry, OperatorRegistry};
pub use session::Session;
pub use stack::Stack;
pub use token::Token;

/// Evaluate a single line against a fresh stack and return its result.
///
/// Convenience for one-shot use; for stateful evaluation with undo, use
/// [`Session`].
pub fn eval(input: &str) -> Result<f64, CalcError> {
    let mut processor = Processor::new();
    processor.eval(input)
}
