//! Common result types.

/// Error type used across the crate.
pub type Err = anyhow::Error;
/// Result with the crate error type.
pub type Res<T> = Result<T, Err>;
/// Result carrying no value.
pub type Void = Res<()>;
