use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutTag(String),

    #[error("malformed {tag} data: expected at least {expected} values, got {actual}")]
    MalformedInputData {
        tag: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {field}: {value}")]
    InvalidPhysicalValue { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
