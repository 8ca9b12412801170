//! Pixel rendering surface for oxtheme figures, backed by tiny-skia.
//!
//! Text is shaped with rustybuzz and filled from the glyph outlines of a
//! [`FontFace`] supplied by the caller. Without a face, text is skipped.
use std::path::Path;
use std::sync::Arc;
use std::{fmt, io};

use oxtheme_base::render::{self, HAlign, VAlign};
use oxtheme_base::{ColorU8, geom};
use tiny_skia::{self, FillRule, Mask, Pixmap, PixmapMut};

/// Errors raised while encoding or writing a raster image
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Encoding(String),
    Font(ttf_parser::FaceParsingError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<ttf_parser::FaceParsingError> for Error {
    fn from(err: ttf_parser::FaceParsingError) -> Self {
        Error::Font(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Encoding(err) => write!(f, "Encoding error: {}", err),
            Error::Font(err) => write!(f, "Font error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// Pixel encodings a [`PxlSurface`] can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Tiff,
    Jpeg,
    /// Raw, non-premultiplied RGBA bytes, row by row, without header
    Rgba,
}

/// A font face loaded in memory, shared between surfaces
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    index: u32,
}

impl FontFace {
    /// Wrap font file bytes, checking that face `index` parses
    pub fn from_data(data: impl Into<Arc<[u8]>>, index: u32) -> Result<Self, Error> {
        let data = data.into();
        ttf_parser::Face::parse(&data, index)?;
        Ok(FontFace { data, index })
    }

    /// Load the first face of a TTF/OTF file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = std::fs::read(path)?;
        FontFace::from_data(data, 0)
    }
}

#[derive(Debug, Clone)]
pub struct PxlSurface {
    pixmap: Pixmap,
    state: State,
    font: Option<FontFace>,
}

impl PxlSurface {
    /// Create a surface of `width` × `height` pixels.
    /// Returns `None` if either dimension is zero or too large.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        let state = State::new(width, height);
        Some(Self {
            pixmap,
            state,
            font: None,
        })
    }

    /// Use `font` to rasterize text
    pub fn with_font(self, font: FontFace) -> Self {
        Self {
            font: Some(font),
            ..self
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.pixmap
            .save_png(path)
            .map_err(|err| Error::Encoding(err.to_string()))
    }

    /// Encode the pixels in `format` and write them to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P, format: RasterFormat) -> Result<(), Error> {
        match format {
            RasterFormat::Png => self.save_png(path),
            RasterFormat::Tiff => {
                self.to_rgba_image()?
                    .save_with_format(path, image::ImageFormat::Tiff)?;
                Ok(())
            }
            RasterFormat::Jpeg => {
                let rgb = image::DynamicImage::ImageRgba8(self.to_rgba_image()?).to_rgb8();
                rgb.save_with_format(path, image::ImageFormat::Jpeg)?;
                Ok(())
            }
            RasterFormat::Rgba => {
                std::fs::write(path, self.rgba_bytes())?;
                Ok(())
            }
        }
    }

    /// Non-premultiplied RGBA bytes
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            bytes.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        bytes
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn to_rgba_image(&self) -> Result<image::RgbaImage, Error> {
        image::RgbaImage::from_raw(self.width(), self.height(), self.rgba_bytes())
            .ok_or_else(|| Error::Encoding("pixel buffer does not match image size".to_string()))
    }
}

#[derive(Debug, Clone)]
struct State {
    width: u32,
    height: u32,
    transform: geom::Transform,
    clips: Vec<Mask>,
    warned_no_font: bool,
}

impl State {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: geom::Transform::identity(),
            clips: Vec::new(),
            warned_no_font: false,
        }
    }

    fn prepare(&mut self, viewport: &geom::Rect) {
        let sx = self.width as f32 / viewport.width();
        let sy = self.height as f32 / viewport.height();
        self.transform =
            geom::Transform::from_scale(sx, sy).pre_translate(-viewport.x(), -viewport.y());
    }

    fn fill(&mut self, px: &mut PixmapMut<'_>, fill: render::Paint) {
        match fill {
            render::Paint::Solid(color) => px.fill(ts_color(color)),
        }
    }

    fn draw_path(&mut self, px: &mut PixmapMut<'_>, path: &render::Path) {
        let transform = path
            .transform
            .map(|t| t.post_concat(self.transform))
            .unwrap_or(self.transform);

        if let Some(fill) = path.fill {
            let mut paint = tiny_skia::Paint::default();
            ts_fill(fill, &mut paint);
            px.fill_path(
                path.path,
                &paint,
                FillRule::Winding,
                transform,
                self.clips.last(),
            );
        }
        if let Some(stroke) = path.stroke {
            let mut paint = tiny_skia::Paint::default();
            let stroke = ts_stroke(stroke, &mut paint);
            px.stroke_path(path.path, &paint, &stroke, transform, self.clips.last());
        }
    }

    fn draw_text(&mut self, px: &mut PixmapMut<'_>, text: &render::Text, font: Option<&FontFace>) {
        let Some(font) = font else {
            if !self.warned_no_font {
                log::warn!("no font face supplied to the pixel surface, text is not rendered");
                self.warned_no_font = true;
            }
            return;
        };
        let Some(face) = rustybuzz::Face::from_slice(&font.data, font.index) else {
            log::warn!("font face {} could not be parsed", font.index);
            return;
        };
        let Some(path) = shape_text(&face, text) else {
            return;
        };

        let transform = geom::Transform::from_translate(text.pos.x, text.pos.y)
            .pre_rotate(-text.rotation)
            .post_concat(self.transform);

        let mut paint = tiny_skia::Paint::default();
        ts_fill(render::Paint::Solid(text.color), &mut paint);
        px.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            transform,
            self.clips.last(),
        );
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        let transform = clip
            .transform
            .map(|t| t.post_concat(self.transform))
            .unwrap_or(self.transform);
        let Some(path) = clip.rect.to_path() else {
            return;
        };
        let mask = match self.clips.last() {
            Some(current) => {
                let mut mask = current.clone();
                mask.intersect_path(&path, FillRule::Winding, true, transform);
                Some(mask)
            }
            None => Mask::new(self.width, self.height).map(|mut mask| {
                mask.fill_path(&path, FillRule::Winding, true, transform);
                mask
            }),
        };
        if let Some(mask) = mask {
            self.clips.push(mask);
        }
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }
}

impl render::Surface for PxlSurface {
    fn prepare(&mut self, viewport: &geom::Rect) {
        self.state.prepare(viewport)
    }

    fn fill(&mut self, fill: render::Paint) {
        let mut px = self.pixmap.as_mut();
        self.state.fill(&mut px, fill)
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut px = self.pixmap.as_mut();
        self.state.draw_path(&mut px, path)
    }

    fn draw_text(&mut self, text: &render::Text) {
        let mut px = self.pixmap.as_mut();
        self.state.draw_text(&mut px, text, self.font.as_ref())
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        self.state.push_clip(clip)
    }

    fn pop_clip(&mut self) {
        self.state.pop_clip()
    }
}

/// Shape a line of text and build its outline, anchored at the origin
/// according to the text alignment. Y grows downwards.
fn shape_text(face: &rustybuzz::Face, text: &render::Text) -> Option<geom::Path> {
    let mut buffer = rustybuzz::UnicodeBuffer::new();
    buffer.push_str(text.text);
    buffer.guess_segment_properties();
    let glyphs = rustybuzz::shape(face, &[], buffer);

    let scale = text.font_size / face.units_per_em() as f32;
    let width: f32 = glyphs
        .glyph_positions()
        .iter()
        .map(|p| p.x_advance as f32 * scale)
        .sum();
    let ascender = face.ascender() as f32 * scale;
    let descender = face.descender() as f32 * scale;

    let mut pen = match text.h_align {
        HAlign::Left => 0.0,
        HAlign::Center => -width / 2.0,
        HAlign::Right => -width,
    };
    let baseline = match text.v_align {
        VAlign::Top => ascender,
        VAlign::Center => (ascender + descender) / 2.0,
        VAlign::Baseline => 0.0,
        VAlign::Bottom => descender,
    };

    let mut str_pb = geom::PathBuilder::new();
    let mut gl_pb = geom::PathBuilder::new();

    for (info, pos) in glyphs.glyph_infos().iter().zip(glyphs.glyph_positions()) {
        {
            let mut builder = Outliner(&mut gl_pb);
            face.outline_glyph(ttf_parser::GlyphId(info.glyph_id as u16), &mut builder);
        }
        let ts = geom::Transform::from_row(
            scale,
            0.0,
            0.0,
            -scale,
            pen + pos.x_offset as f32 * scale,
            baseline - pos.y_offset as f32 * scale,
        );
        gl_pb = match gl_pb.finish().and_then(|path| path.transform(ts)) {
            Some(path) => {
                str_pb.push_path(&path);
                path.clear()
            }
            None => geom::PathBuilder::new(),
        };
        pen += pos.x_advance as f32 * scale;
    }

    str_pb.finish()
}

struct Outliner<'a>(&'a mut geom::PathBuilder);

impl ttf_parser::OutlineBuilder for Outliner<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

fn ts_color(color: ColorU8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

fn ts_fill(fill: render::Paint, paint: &mut tiny_skia::Paint) {
    match fill {
        render::Paint::Solid(color) => paint.set_color(ts_color(color)),
    }
    paint.anti_alias = true;
}

fn ts_stroke(stroke: render::Stroke, paint: &mut tiny_skia::Paint) -> tiny_skia::Stroke {
    paint.anti_alias = true;
    paint.set_color(ts_color(stroke.color));

    let mut ts = tiny_skia::Stroke {
        width: stroke.width,
        ..Default::default()
    };

    match stroke.pattern {
        render::LinePattern::Solid => (),
        render::LinePattern::Dash(dash) => {
            let array = dash.iter().map(|d| d * stroke.width).collect();
            ts.dash = tiny_skia::StrokeDash::new(array, 0.0);
        }
    }
    ts
}

#[cfg(test)]
mod tests {
    use oxtheme_base::render::Surface;

    use super::*;

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(PxlSurface::new(0, 10).is_none());
        assert!(PxlSurface::new(10, 0).is_none());
    }

    #[test]
    fn viewport_maps_to_pixels() {
        // 72pt square on a 300px surface: 1 inch at 300 dpi
        let mut surface = PxlSurface::new(300, 300).unwrap();
        surface.prepare(&geom::Rect::from_xywh(0.0, 0.0, 72.0, 72.0));
        surface.fill(render::Paint::Solid(oxtheme_base::color::WHITE));
        surface.draw_rect(&render::Rect {
            rect: geom::Rect::from_xywh(36.0, 36.0, 36.0, 36.0),
            fill: Some(render::Paint::Solid(ColorU8::from_html(b"#002147"))),
            stroke: None,
            transform: None,
        });
        let px = surface.into_pixmap();
        let top_left = px.pixel(10, 10).unwrap();
        assert_eq!((top_left.red(), top_left.green(), top_left.blue()), (255, 255, 255));
        let bottom_right = px.pixel(250, 250).unwrap();
        assert_eq!(
            (bottom_right.red(), bottom_right.green(), bottom_right.blue()),
            (0, 33, 71)
        );
    }

    #[test]
    fn text_without_font_is_skipped() {
        let mut surface = PxlSurface::new(50, 50).unwrap();
        surface.prepare(&geom::Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
        surface.fill(render::Paint::Solid(oxtheme_base::color::WHITE));
        let family = vec!["sans-serif".to_string()];
        surface.draw_text(&render::Text {
            text: "Oxford",
            pos: geom::Point::from_xy(25.0, 25.0),
            font_size: 12.0,
            font_family: &family,
            color: oxtheme_base::color::BLACK,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            rotation: 0.0,
        });
        let bytes = surface.rgba_bytes();
        assert!(bytes.iter().all(|b| *b == 255));
    }

    #[test]
    fn invalid_font_data_is_rejected() {
        assert!(matches!(
            FontFace::from_data(vec![0u8; 16], 0),
            Err(Error::Font(_))
        ));
    }
}
