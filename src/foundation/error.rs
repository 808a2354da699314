use std::path::PathBuf;

/// Convenience result type used across pixelgrad.
pub type PixelResult<T> = Result<T, PixelError>;

/// Error taxonomy for the conversion pipeline.
///
/// Every variant is fatal: the pipeline stops at the first error and nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum PixelError {
    /// Invalid user-provided configuration (missing paths and the like).
    #[error("config error: {0}")]
    Config(String),

    /// The input image could not be opened.
    #[error("file open error '{path}': {source}")]
    Open {
        /// Input path as given.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not a recognized or decodable raster image.
    #[error("image decode error: {0}")]
    Decode(String),

    /// The output document could not be created.
    #[error("output file create fail '{path}': {source}")]
    Create {
        /// Output path after suffix normalization.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing the document failed after the output was created.
    ///
    /// The output file may be left truncated.
    #[error("output write error '{path}': {source}")]
    Write {
        /// Output path after suffix normalization.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

impl PixelError {
    /// Build a [`PixelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PixelError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
