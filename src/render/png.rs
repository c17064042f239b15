use std::io::Cursor;
use std::path::Path;

use crate::foundation::error::{RandomartError, RandomartResult};
use crate::render::pipeline::FrameRGBA;

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> RandomartResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| {
            RandomartError::encode(format!(
                "buffer of {} bytes does not hold a {}x{} RGBA image",
                frame.data.len(),
                frame.width,
                frame.height
            ))
        })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| RandomartError::encode(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Write a frame to `path` as PNG, creating parent directories as needed.
pub fn save_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> RandomartResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            RandomartError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| RandomartError::encode(format!("write png '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), "generated");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
