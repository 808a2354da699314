//! pixelgrad turns a raster image into a static HTML page.
//!
//! Every pixel becomes one CSS `radial-gradient(...)` layer in a single `background-image`
//! declaration, so the browser paints the picture one 1px circle at a time.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `path -> PixelGrid` (format detected from the file contents)
//! 2. **Encode**: `PixelGrid -> GradientStop*` in row-major order
//! 3. **Write**: stops wrapped in a fixed HTML/CSS template and streamed to the output file
//!
//! [`convert`] runs all three steps for a [`ConvertConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod encode;
mod foundation;
mod pipeline;

pub use assets::decode::{PixelGrid, decode_bytes, decode_image, load_image};
pub use config::{ConvertConfig, OUTPUT_SUFFIX, normalize_output_path};
pub use encode::document::{DocumentStats, render_document, write_document};
pub use encode::gradient::{GradientStop, STOP_SEPARATOR, encode_stops, stops, write_stops};
pub use encode::sink::DocumentSink;
pub use foundation::core::{AlphaMode, Rgba8};
pub use foundation::error::{PixelError, PixelResult};
pub use pipeline::{ConvertReport, convert};
