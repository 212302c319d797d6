//! Symbol tables mapping input text to executable behavior.
//!
//! Two registries back the parser and the processor: operator symbols are
//! matched exactly, function names are lower-cased on both register and
//! query. Registering a key twice silently replaces the previous entry.
//! There is no unregister; in practice both registries are built once at
//! processor construction and never change.

use std::collections::HashMap;

use crate::error::CalcError;
use crate::function::Function;
use crate::operator::Operator;

/// Registry of operator symbols. Lookups are exact-match.
#[derive(Clone, Debug, Default)]
pub struct OperatorRegistry {
    entries: HashMap<String, Operator>,
}

impl OperatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry preloaded with the built-in operators.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for operator in Operator::ALL {
            registry.register(operator);
        }
        registry
    }

    /// Register an operator under its symbol, replacing any previous entry.
    pub fn register(&mut self, operator: Operator) {
        self.entries.insert(operator.symbol().to_string(), operator);
    }

    /// Look up an operator by symbol.
    pub fn get(&self, symbol: &str) -> Result<Operator, CalcError> {
        self.entries
            .get(symbol)
            .copied()
            .ok_or_else(|| CalcError::UnknownOperator(symbol.to_string()))
    }

    /// Check whether a symbol is registered.
    pub fn is_valid(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }
}

/// Registry of function names. Keys are lower-cased on register and query.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    entries: HashMap<String, Function>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry preloaded with the built-in functions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for function in Function::ALL {
            registry.register(function);
        }
        registry
    }

    /// Register a function under its name, replacing any previous entry.
    pub fn register(&mut self, function: Function) {
        self.entries
            .insert(function.name().to_lowercase(), function);
    }

    /// Look up a function by name, case-insensitively.
    pub fn get(&self, name: &str) -> Result<Function, CalcError> {
        self.entries
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| CalcError::UnknownFunction(name.to_string()))
    }

    /// Check whether a name is registered, case-insensitively.
    pub fn is_valid(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }
}
