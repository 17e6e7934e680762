//! CPU compositor for the slate template: background, thumbnail (or
//! placeholder panel), and text slots rasterized into one RGBA8 frame.

use std::path::Path;
use std::sync::Arc;

use vello_cpu::kurbo::{Affine, Rect};

use crate::error::{SlaterError, SlaterResult};
use crate::fields::SlateFields;
use crate::layout::{self, palette};
use crate::text::{self, TextBrushRgba8, TextLayoutEngine};
use crate::thumbnail::{self, PreparedImage};

/// One rendered slate. `data` is row-major premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct SlateFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Immutable render inputs resolved once at startup: font bytes and the
/// optional background template.
#[derive(Clone, Debug)]
pub struct SlateTheme {
    font_bytes: Option<Arc<Vec<u8>>>,
    background: Option<PreparedImage>,
}

impl SlateTheme {
    /// Resolve the theme. An explicitly configured font or background path
    /// must load; absent configuration falls back to a system-font probe and
    /// a solid background fill.
    pub fn load(
        font_source: Option<&Path>,
        background_source: Option<&Path>,
    ) -> SlaterResult<Self> {
        let font_bytes = text::resolve_font_bytes(font_source)?.map(Arc::new);
        let background = background_source
            .map(thumbnail::load_background)
            .transpose()?;
        Ok(Self {
            font_bytes,
            background,
        })
    }

    /// Whether text layers will be drawn. Fontless hosts still get the panel
    /// and image layers.
    pub fn has_font(&self) -> bool {
        self.font_bytes.is_some()
    }
}

/// Composite one slate frame. Pure function of its inputs: identical fields,
/// thumbnail and theme yield byte-identical output.
pub fn compose_slate(
    fields: &SlateFields,
    thumb: Option<&PreparedImage>,
    theme: &SlateTheme,
) -> SlaterResult<SlateFrame> {
    let width_u16: u16 = layout::CANVAS_WIDTH
        .try_into()
        .map_err(|_| SlaterError::validation("canvas width exceeds u16"))?;
    let height_u16: u16 = layout::CANVAS_HEIGHT
        .try_into()
        .map_err(|_| SlaterError::validation("canvas height exceeds u16"))?;

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    ctx.set_paint_transform(Affine::IDENTITY);

    // Background layer covers the full canvas, so no explicit clear is needed.
    match &theme.background {
        Some(bg) => draw_image(&mut ctx, bg, 0.0, 0.0)?,
        None => fill_rect(
            &mut ctx,
            palette::BACKGROUND,
            Rect::new(
                0.0,
                0.0,
                f64::from(layout::CANVAS_WIDTH),
                f64::from(layout::CANVAS_HEIGHT),
            ),
        ),
    }

    let thumb_rect = Rect::new(
        layout::THUMB_X,
        layout::THUMB_Y,
        layout::THUMB_X + f64::from(layout::THUMB_WIDTH),
        layout::THUMB_Y + f64::from(layout::THUMB_HEIGHT),
    );

    let mut engine = TextLayoutEngine::new();
    let font = theme
        .font_bytes
        .as_ref()
        .map(|bytes| {
            vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                0,
            )
        });

    match thumb {
        Some(img) => draw_image(&mut ctx, img, layout::THUMB_X, layout::THUMB_Y)?,
        None => {
            fill_rect(&mut ctx, palette::THUMB_PANEL, thumb_rect);
            if let (Some(font), Some(bytes)) = (&font, &theme.font_bytes) {
                let label = engine.layout_plain(
                    layout::THUMB_PLACEHOLDER,
                    bytes,
                    layout::THUMB_PLACEHOLDER_SIZE,
                    TextBrushRgba8::from_rgba(palette::THUMB_TEXT),
                    None,
                )?;
                let (label_w, label_h) = text::measure(&label);
                let x = layout::THUMB_X
                    + ((f64::from(layout::THUMB_WIDTH) - label_w).max(0.0)) / 2.0;
                let y = layout::THUMB_Y
                    + ((f64::from(layout::THUMB_HEIGHT) - label_h).max(0.0)) / 2.0;
                draw_layout(&mut ctx, font, &label, x, y);
            }
        }
    }

    if let (Some(font), Some(bytes)) = (&font, &theme.font_bytes) {
        let title = engine.layout_plain(
            &fields.show_title,
            bytes,
            layout::TITLE_SIZE,
            TextBrushRgba8::from_rgba(palette::TITLE),
            Some(layout::TITLE_WIDTH as f32),
        )?;
        let (title_w, _) = text::measure(&title);
        let x = layout::TITLE_X + (layout::TITLE_WIDTH - title_w).max(0.0);
        draw_layout(&mut ctx, font, &title, x, layout::TITLE_Y);
    }

    for row in layout::ROWS {
        fill_rect(
            &mut ctx,
            palette::VALUE_PANEL,
            Rect::new(
                layout::VALUE_X,
                row.y,
                layout::VALUE_X + row.value_width,
                row.y + layout::ROW_HEIGHT,
            ),
        );

        let (Some(font), Some(bytes)) = (&font, &theme.font_bytes) else {
            continue;
        };

        let caption = engine.layout_plain(
            row.caption,
            bytes,
            layout::ROW_TEXT_SIZE,
            TextBrushRgba8::from_rgba(palette::CAPTION),
            None,
        )?;
        let (caption_w, _) = text::measure(&caption);
        let x = layout::CAPTION_X + (layout::CAPTION_WIDTH - caption_w).max(0.0);
        draw_layout(&mut ctx, font, &caption, x, row.y + 2.0);

        let value = fields.get(row.field);
        if value.is_empty() {
            continue;
        }
        let value_layout = engine.layout_plain(
            value,
            bytes,
            layout::ROW_TEXT_SIZE,
            TextBrushRgba8::from_rgba(palette::VALUE_TEXT),
            Some((row.value_width - layout::ROW_TEXT_INSET * 2.0) as f32),
        )?;
        draw_layout(
            &mut ctx,
            font,
            &value_layout,
            layout::VALUE_X + layout::ROW_TEXT_INSET,
            row.y + 2.0,
        );
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(SlateFrame {
        width: layout::CANVAS_WIDTH,
        height: layout::CANVAS_HEIGHT,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn fill_rect(ctx: &mut vello_cpu::RenderContext, rgba: [u8; 4], rect: Rect) {
    ctx.set_transform(Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
    ctx.fill_rect(&rect);
}

fn draw_image(
    ctx: &mut vello_cpu::RenderContext,
    img: &PreparedImage,
    x: f64,
    y: f64,
) -> SlaterResult<()> {
    let paint = image_paint(img)?;
    ctx.set_transform(Affine::translate((x, y)));
    ctx.set_paint(paint);
    ctx.fill_rect(&Rect::new(
        0.0,
        0.0,
        f64::from(img.width),
        f64::from(img.height),
    ));
    Ok(())
}

fn image_paint(img: &PreparedImage) -> SlaterResult<vello_cpu::Image> {
    let w: u16 = img
        .width
        .try_into()
        .map_err(|_| SlaterError::validation("image width exceeds u16"))?;
    let h: u16 = img
        .height
        .try_into()
        .map_err(|_| SlaterError::validation("image height exceeds u16"))?;
    if img.rgba8_premul.len() != img.width as usize * img.height as usize * 4 {
        return Err(SlaterError::validation("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(img.width as usize * img.height as usize);
    for px in img.rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
    x: f64,
    y: f64,
) {
    ctx.set_transform(Affine::translate((x, y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}
