//! Image filter pipeline.
//!
//! Each request carries a chain of named operations that map directly onto
//! `image` crate primitives. The service decodes the upload, applies the
//! chain in order, and writes the result as a PNG with a generated name.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors from the image pipeline
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Invalid operations list: {0}")]
    InvalidOperations(String),

    #[error("Failed to write image: {0}")]
    Write(String),
}

/// A single filter operation, e.g. `{"op": "blur", "sigma": 2.0}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ImageOperation {
    Grayscale,
    Invert,
    Blur { sigma: f32 },
    Brighten { value: i32 },
    Contrast { value: f32 },
    FlipHorizontal,
    FlipVertical,
    Rotate90,
    Rotate180,
    Rotate270,
    Thumbnail { width: u32, height: u32 },
}

/// Result of a pipeline run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedImage {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Parse the `operations` form field (a JSON array of operation objects)
pub fn parse_operations(raw: &str) -> Result<Vec<ImageOperation>, ImageError> {
    serde_json::from_str(raw).map_err(|e| ImageError::InvalidOperations(e.to_string()))
}

/// Apply a chain of operations to a decoded image
pub fn apply_operations(image: DynamicImage, operations: &[ImageOperation]) -> DynamicImage {
    operations.iter().fold(image, |img, op| match op {
        ImageOperation::Grayscale => img.grayscale(),
        ImageOperation::Invert => {
            let mut inverted = img;
            inverted.invert();
            inverted
        }
        ImageOperation::Blur { sigma } => img.blur(*sigma),
        ImageOperation::Brighten { value } => img.brighten(*value),
        ImageOperation::Contrast { value } => img.adjust_contrast(*value),
        ImageOperation::FlipHorizontal => img.fliph(),
        ImageOperation::FlipVertical => img.flipv(),
        ImageOperation::Rotate90 => img.rotate90(),
        ImageOperation::Rotate180 => img.rotate180(),
        ImageOperation::Rotate270 => img.rotate270(),
        ImageOperation::Thumbnail { width, height } => img.thumbnail(*width, *height),
    })
}

/// Decode uploaded bytes, run the operation chain, and write the result
/// into `output_dir` as a UUID-named PNG
pub fn process_image(
    bytes: &[u8],
    operations: &[ImageOperation],
    output_dir: &Path,
) -> Result<ProcessedImage, ImageError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;

    info!(
        "Processing image: {}x{}, {} operation(s)",
        decoded.width(),
        decoded.height(),
        operations.len()
    );

    let result = apply_operations(decoded, operations);

    std::fs::create_dir_all(output_dir).map_err(|e| ImageError::Write(e.to_string()))?;
    let output_path = output_dir.join(format!("{}.png", Uuid::new_v4()));
    result
        .save(&output_path)
        .map_err(|e| ImageError::Write(e.to_string()))?;

    info!("Image written to {:?}", output_path);

    Ok(ProcessedImage {
        output_path,
        width: result.width(),
        height: result.height(),
    })
}
