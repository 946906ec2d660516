//! Repository error types
//!
//! Structured errors for repository operations, allowing fine-grained
//! handling and meaningful error messages at the HTTP boundary.

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Listing all records
    List,
    /// Finding a single record by identifier
    FindById,
    /// Creating a new record
    Create,
    /// Updating an existing record
    Update,
    /// Deleting a record
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Record was not found
    NotFound,
    /// Failed to reach the backing store
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Serialization or deserialization error
    SerializationError,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::SerializationError => write!(f, "serialization_error"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The identifier of the record involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_id: None,
        }
    }

    /// Create a "not found" error with the record identifier
    pub fn not_found(entity_id: impl Into<String>) -> Self {
        Self {
            operation: RepositoryOperation::FindById,
            kind: RepositoryErrorKind::NotFound,
            message: "Record not found".to_string(),
            entity_id: Some(entity_id.into()),
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::List,
            RepositoryErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a timeout error
    pub fn timeout(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Timeout, message)
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref entity_id) = self.entity_id {
            write!(f, " [{}]", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}
