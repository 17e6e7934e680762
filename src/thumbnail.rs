use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::imageops::FilterType;

use crate::error::{SlaterError, SlaterResult};
use crate::layout;

/// Decoded raster image in premultiplied RGBA8 form, already scaled to the
/// region it will be drawn into.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Load and prepare a thumbnail: decode, scale to the fixed 500x280 region,
/// premultiply. Failures are `ImageLoad` errors; the caller keeps whatever
/// thumbnail it had.
pub fn load_thumbnail(path: &Path) -> SlaterResult<PreparedImage> {
    load_scaled(path, layout::THUMB_WIDTH, layout::THUMB_HEIGHT)
        .map_err(|e| SlaterError::image_load(format!("thumbnail '{}': {e:#}", path.display())))
}

/// Load the background template scaled to the full canvas.
pub fn load_background(path: &Path) -> SlaterResult<PreparedImage> {
    load_scaled(path, layout::CANVAS_WIDTH, layout::CANVAS_HEIGHT)
        .map_err(|e| SlaterError::image_load(format!("background '{}': {e:#}", path.display())))
}

fn load_scaled(path: &Path, width: u32, height: u32) -> anyhow::Result<PreparedImage> {
    let bytes = std::fs::read(path).context("read image file")?;
    decode_scaled(&bytes, width, height)
}

/// Decode image bytes and scale to exact target dimensions. Aspect ratio is
/// not preserved; slots have fixed sizes.
pub fn decode_scaled(bytes: &[u8], width: u32, height: u32) -> anyhow::Result<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image")?;
    let rgba = dyn_img
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgba8();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn png_bytes(pixel: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba(pixel));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn decode_scales_to_target_and_premultiplies() {
        let prepared = decode_scaled(&png_bytes([100, 50, 200, 128]), 500, 280).unwrap();
        assert_eq!(prepared.width, 500);
        assert_eq!(prepared.height, 280);
        assert_eq!(prepared.rgba8_premul.len(), 500 * 280 * 4);

        // Uniform source, so any pixel carries the premultiplied value.
        let px = &prepared.rgba8_premul[0..4];
        assert_eq!(px[3], 128);
        assert_eq!(px[0], ((100u16 * 128 + 127) / 255) as u8);
    }

    #[test]
    fn undecodable_bytes_are_rejected() {
        assert!(decode_scaled(b"not an image", 8, 8).is_err());
    }

    #[test]
    fn missing_path_is_an_image_load_error() {
        let err = load_thumbnail(Path::new("/nonexistent/missing.jpg")).unwrap_err();
        assert!(matches!(err, SlaterError::ImageLoad(_)));
        assert!(err.to_string().contains("missing.jpg"));
    }
}
