use std::io::Cursor;
use std::path::Path;

use slater::{
    SHOW_TITLE_PLACEHOLDER, SlateConfig, SlateDocument, SlateField, SlateFields, SlaterError,
    SlateTheme,
};

fn theme() -> SlateTheme {
    SlateTheme::load(None, None).unwrap()
}

fn document() -> SlateDocument {
    SlateDocument::new(SlateFields::new(&SlateConfig::default()), theme())
}

fn write_test_image(path: &Path, pixel: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(64, 48, image::Rgba(pixel));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, buf).unwrap();
}

/// Byte range of one canvas row inside a frame, for region assertions.
fn row_bytes(frame: &slater::SlateFrame, y: u32) -> &[u8] {
    let stride = (frame.width * 4) as usize;
    &frame.data[y as usize * stride..(y as usize + 1) * stride]
}

#[test]
fn set_field_writes_through_verbatim() {
    let mut doc = document();
    doc.set_field(SlateField::Shot, "sq010_sh0400");
    doc.set_field(SlateField::Notes, "hero pass, approved");
    assert_eq!(doc.fields().shot, "sq010_sh0400");
    assert_eq!(doc.fields().notes, "hero pass, approved");
}

#[test]
fn unedited_title_reads_the_placeholder() {
    let doc = document();
    assert_eq!(doc.fields().show_title, SHOW_TITLE_PLACEHOLDER);
}

#[test]
fn render_is_deterministic_for_identical_state() {
    let mut doc = document();
    doc.set_field(SlateField::ShowTitle, "NIGHT SHIFT");
    doc.set_field(SlateField::FrameRange, "1001-1096");

    let first = doc.render().unwrap();
    let second = doc.render().unwrap();
    assert_eq!(first.width, second.width);
    assert_eq!(first.data, second.data);
}

#[test]
fn confirmed_title_changes_the_title_region() {
    let doc_theme = theme();
    if !doc_theme.has_font() {
        // No discoverable font on this host; glyph assertions don't apply.
        return;
    }

    let mut doc = SlateDocument::new(SlateFields::new(&SlateConfig::default()), doc_theme);
    let before = doc.render().unwrap();
    doc.set_field(SlateField::ShowTitle, "NIGHT SHIFT");
    let after = doc.render().unwrap();

    // Title slot occupies rows around y=330..390 on the fixed template.
    let changed = (330..390).any(|y| row_bytes(&before, y) != row_bytes(&after, y));
    assert!(changed, "title region should differ after confirm_show");
}

#[test]
fn failed_thumbnail_load_retains_the_previous_thumbnail() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("valid.png");
    write_test_image(&good, [200, 40, 40, 255]);

    let mut doc = document();
    doc.set_thumbnail(&good).unwrap();
    let loaded = doc.thumbnail().unwrap().rgba8_premul.clone();
    let rendered = doc.render().unwrap();

    let err = doc
        .set_thumbnail(&dir.path().join("missing.jpg"))
        .unwrap_err();
    assert!(matches!(err, SlaterError::ImageLoad(_)));

    let retained = doc.thumbnail().unwrap();
    assert_eq!(*retained.rgba8_premul, *loaded);
    assert_eq!(doc.render().unwrap().data, rendered.data);
}

#[test]
fn thumbnail_is_scaled_to_the_fixed_region() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thumb.png");
    write_test_image(&path, [10, 200, 10, 255]);

    let mut doc = document();
    doc.set_thumbnail(&path).unwrap();
    let thumb = doc.thumbnail().unwrap();
    assert_eq!((thumb.width, thumb.height), (500, 280));

    // The thumbnail region carries the image color instead of the panel.
    let frame = doc.render().unwrap();
    let row = row_bytes(&frame, 100);
    let px = &row[(700 * 4)..(700 * 4 + 4)];
    assert!(px[1] > 150, "expected thumbnail green at (700, 100), got {px:?}");
}

#[test]
fn configured_background_must_decode() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bgslate.png");
    std::fs::write(&bogus, b"not an image").unwrap();

    let err = SlateTheme::load(None, Some(&bogus)).unwrap_err();
    assert!(matches!(err, SlaterError::ImageLoad(_)));
}

#[test]
fn release_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thumb.png");
    write_test_image(&path, [1, 2, 3, 255]);

    let mut doc = document();
    doc.set_thumbnail(&path).unwrap();
    doc.release();
    assert!(doc.thumbnail().is_none());
    doc.release();
    assert!(doc.thumbnail().is_none());

    // The document still renders (placeholder state) after release.
    doc.render().unwrap();
}
