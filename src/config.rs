use std::path::{Path, PathBuf};

use crate::foundation::core::AlphaMode;
use crate::foundation::error::{PixelError, PixelResult};

/// Suffix every output path ends with.
pub const OUTPUT_SUFFIX: &str = ".html";

/// Everything one conversion needs, validated once up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Source image (JPEG, PNG, or any other format the decoder recognizes).
    pub image: PathBuf,
    /// Destination document, always ending in [`OUTPUT_SUFFIX`].
    pub output: PathBuf,
    /// Color channel reduction for translucent pixels.
    pub alpha: AlphaMode,
}

impl ConvertConfig {
    /// Validate both paths and normalize the output suffix.
    ///
    /// Touches no files.
    pub fn new(image: impl Into<PathBuf>, output: impl Into<PathBuf>) -> PixelResult<Self> {
        let image = image.into();
        let output = output.into();
        if image.as_os_str().is_empty() {
            return Err(PixelError::config("image path not specified"));
        }
        if output.as_os_str().is_empty() {
            return Err(PixelError::config("output path not specified"));
        }

        Ok(Self {
            image,
            output: normalize_output_path(&output),
            alpha: AlphaMode::default(),
        })
    }

    /// Override the alpha handling.
    pub fn with_alpha(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Append [`OUTPUT_SUFFIX`] unless `path` already ends with it. Idempotent.
///
/// The check is a plain, case-sensitive suffix match: `page.HTML` becomes `page.HTML.html`.
pub fn normalize_output_path(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(OUTPUT_SUFFIX) {
        return path.to_path_buf();
    }
    let mut s = path.as_os_str().to_owned();
    s.push(OUTPUT_SUFFIX);
    PathBuf::from(s)
}
