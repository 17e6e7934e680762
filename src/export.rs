use std::path::Path;

use anyhow::Context;

use crate::compose::SlateFrame;
use crate::error::{SlaterError, SlaterResult};

/// Extensions accepted by the save path, shared with the save dialog filter.
pub const EXPORT_EXTENSIONS: &[&str] = &["jpg", "png", "tif"];

/// Encode a rendered slate to `path`. The extension picks the format; an
/// unrecognized extension fails before anything touches the filesystem.
pub fn write_slate(frame: &SlateFrame, path: &Path) -> SlaterResult<()> {
    let format = format_for_extension(path)?;

    let result = match format {
        // Premultiplied RGB is already the composite over black, which is
        // what a flattened JPEG should contain.
        image::ImageFormat::Jpeg => {
            let rgb = premul_to_rgb8(&frame.data);
            image::save_buffer_with_format(
                path,
                &rgb,
                frame.width,
                frame.height,
                image::ColorType::Rgb8,
                format,
            )
        }
        _ => {
            let mut rgba = frame.data.clone();
            if frame.premultiplied {
                unpremultiply_rgba8_in_place(&mut rgba);
            }
            image::save_buffer_with_format(
                path,
                &rgba,
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                format,
            )
        }
    };

    result
        .with_context(|| format!("write slate '{}'", path.display()))
        .map_err(|e| SlaterError::export(format!("{e:#}")))
}

fn format_for_extension(path: &Path) -> SlaterResult<image::ImageFormat> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => Ok(image::ImageFormat::Jpeg),
        "png" => Ok(image::ImageFormat::Png),
        "tif" | "tiff" => Ok(image::ImageFormat::Tiff),
        _ => Err(SlaterError::export(format!(
            "unsupported slate extension '{}' (expected jpg, png or tif)",
            path.display()
        ))),
    }
}

fn premul_to_rgb8(premul: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(premul.len() / 4 * 3);
    for px in premul.chunks_exact(4) {
        rgb.extend_from_slice(&px[0..3]);
    }
    rgb
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
