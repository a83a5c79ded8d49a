use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    /// The background LED strip task could not be spawned.
    #[cfg(not(feature = "host"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// The rasterized message needs more bitmap columns than were reserved.
    #[display("message needs {required} bitmap columns but capacity is {capacity}")]
    MessageTooWide {
        /// Columns the message needs (characters × (glyph width + 1)).
        required: usize,
        /// Columns the bitmap can hold.
        capacity: usize,
    },
}

#[cfg(not(feature = "host"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
