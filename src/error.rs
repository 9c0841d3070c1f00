use thiserror::Error;

/// Errors raised by the store, the models and the photo codec.
///
/// A visit pointing at a project that does not exist is not an error;
/// the detail view simply comes back without a project.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was empty. Raised before the store is touched.
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Stored photo bytes could not be read as an image.
    #[error("could not decode photo: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
