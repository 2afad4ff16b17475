//! Error handling and result types for TreeMap operations.

/// Error type for tree map operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeMapError {
    /// Key not found in the map.
    KeyNotFound,
    /// Cursor used in a state that does not permit the operation.
    InvalidCursor(String),
    /// Internal red-black invariant violation.
    CorruptedTree(String),
}

impl TreeMapError {
    /// Create an InvalidCursor error with context
    pub fn invalid_cursor(operation: &str, state: &str) -> Self {
        Self::InvalidCursor(format!("cannot {} {}", operation, state))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: impl std::fmt::Display) -> Self {
        Self::CorruptedTree(format!("{}: {}", component, details))
    }

    /// Check if this error is a cursor-state error
    pub fn is_cursor_error(&self) -> bool {
        matches!(self, Self::InvalidCursor(_))
    }
}

impl std::fmt::Display for TreeMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeMapError::KeyNotFound => write!(f, "Key not found in map"),
            TreeMapError::InvalidCursor(msg) => write!(f, "Invalid cursor state: {}", msg),
            TreeMapError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for TreeMapError {}

/// Result type for tree map operations that may fail.
pub type TreeResult<T> = Result<T, TreeMapError>;
