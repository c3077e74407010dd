use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a command can fail. The Display text is the message shown to
/// the user; the interactive loop prints it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Syntax(String),

    #[error("Table '{0}' does not exist")]
    UnknownTable(String),

    #[error("Table '{0}' already exists")]
    TableAlreadyExists(String),

    #[error("Invalid column spec: {0}")]
    InvalidColumnSpec(String),

    #[error("Duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("Expected {expected} values but got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Expected {expected} but got '{got}'")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("Bad {kind} clause. Use: <column> = <value>")]
    MalformedClause { kind: &'static str },

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
