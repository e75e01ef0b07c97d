use thiserror::Error;

/// Raised when a record constructor rejects its inputs, or when a
/// collaborator fails while the management descriptor is being assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectionError {
    #[error("Invalid attribute {attribute}: {reason}")]
    InvalidAttribute { attribute: String, reason: String },

    #[error("Invalid operation {operation}: {reason}")]
    InvalidOperation { operation: String, reason: String },

    #[error("Invalid descriptor for {name}: {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error(
        "Operation {operation} declares {declared} parameters but {recovered} names were recovered"
    )]
    ParameterCountMismatch {
        operation: String,
        declared: usize,
        recovered: usize,
    },

    #[error("Attribute {attribute} has conflicting {role} methods: {first} and {second}")]
    DuplicateAccessor {
        attribute: String,
        role: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    ParameterNames(#[from] ParameterNamesError),
}

/// Failure while probing a marker for one of its members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("{annotation_type} has no member named {member}")]
    NoSuchMember {
        annotation_type: String,
        member: String,
    },

    #[error("Member {member} of {annotation_type} is not accessible")]
    Inaccessible {
        annotation_type: String,
        member: String,
    },

    #[error("Invoking {member} on {annotation_type} failed: {message}")]
    Invocation {
        annotation_type: String,
        member: String,
        message: String,
    },
}

/// Parameter names could not be recovered for a method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterNamesError {
    #[error("No parameter name debug information for {method}")]
    NoDebugInfo { method: String },

    #[error("Local variable table of {method} has no entry for slot {slot}")]
    MissingSlot { method: String, slot: u16 },

    #[error("{method} declares {declared} parameters but debug information names {recorded}")]
    CountMismatch {
        method: String,
        declared: usize,
        recorded: usize,
    },
}
