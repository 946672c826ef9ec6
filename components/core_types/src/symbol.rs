//! Symbol primitive
//!
//! Symbols are unique tokens. Two symbols are the same only when they were
//! produced by the same call to [`Symbol::new`], whatever their descriptions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A unique symbolic token with an optional description
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Create a new unique symbol
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        Symbol {
            id,
            description: description.map(str::to_string),
        }
    }

    /// Create a symbol without a description (`Symbol()`)
    pub fn anonymous() -> Self {
        Symbol::new(None)
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
