/// Type alias for Result with anyhow::Error as the error type.
/// Per-candidate failures are recovered from inside the use cases; this alias
/// is for the errors that do escape to the caller.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
