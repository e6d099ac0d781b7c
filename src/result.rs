use crate::error::Error as ChiefErr;

/// `Result` with the crate's [`Error`](crate::Error).
pub type Result<T> = std::result::Result<T, ChiefErr>;
