//! Drawing of a [`Figure`] onto a [`render::Surface`].
//!
//! Drawing acts in two phases:
//!  - preparation: [`Drawing::prepare`] lays out the figure in points and returns a [`PreparedFigure`],
//!    which caches the primitives to draw.
//!  - drawing: [`PreparedFigure::draw`] sends the primitives to the surface.
//!
//! Text is not shaped at preparation. Its extents are estimated from the font size,
//! which is enough to compute a tight bounding box.
use oxtheme_base::color::ColorU8;
use oxtheme_base::geom;
use oxtheme_base::render::{self, HAlign, Surface, VAlign};

use crate::figure::{Axes, Figure};
use crate::missing_params;
use crate::rc::RcParams;

mod ticks;

/// Extension trait to prepare a figure for drawing
pub trait Drawing {
    /// Lay out the figure.
    /// The resulting [`PreparedFigure`] can be drawn multiple times on different surfaces.
    fn prepare(&self) -> PreparedFigure;

    /// Convenience method to prepare and draw a figure in one step.
    /// The surface must already be prepared with its viewport.
    fn draw<S>(&self, surface: &mut S, transparent: bool)
    where
        S: Surface + ?Sized,
    {
        self.prepare().draw(surface, transparent);
    }
}

impl Drawing for Figure {
    fn prepare(&self) -> PreparedFigure {
        let mut ctx = Ctx::new(self);
        for (idx, axes) in self.all_axes().iter().enumerate() {
            let rect = ctx.axes_rect(idx, self.all_axes().len());
            ctx.setup_axes(axes, &rect);
        }
        for text in self.texts() {
            ctx.items.push(Item::Text(TextItem {
                text: text.text.clone(),
                pos: geom::Point::from_xy(text.x * ctx.size.width(), (1.0 - text.y) * ctx.size.height()),
                font_size: text.font_size,
                color: text.color.with_opacity(text.opacity),
                h_align: text.h_align,
                v_align: text.v_align,
                rotation: 0.0,
            }));
        }
        if let Some(title) = self.suptitle() {
            let rc = self.rc();
            ctx.items.push(Item::Text(TextItem {
                text: title.to_string(),
                pos: geom::Point::from_xy(ctx.size.width() / 2.0, 0.02 * ctx.size.height()),
                font_size: rc.figure_title_font_size(),
                color: rc.text_color,
                h_align: HAlign::Center,
                v_align: VAlign::Top,
                rotation: 0.0,
            }));
        }
        ctx.finish()
    }
}

/// A figure laid out in points, ready to be drawn
#[derive(Debug, Clone)]
pub struct PreparedFigure {
    size: geom::Size,
    background: ColorU8,
    font_family: Vec<String>,
    items: Vec<Item>,
}

#[derive(Debug, Clone)]
enum Item {
    Rect {
        rect: geom::Rect,
        fill: Option<ColorU8>,
        stroke: Option<(ColorU8, f32)>,
        background: bool,
    },
    Path {
        path: geom::Path,
        fill: Option<ColorU8>,
        stroke: Option<(ColorU8, f32)>,
    },
    Text(TextItem),
    PushClip(geom::Rect),
    PopClip,
}

#[derive(Debug, Clone)]
struct TextItem {
    text: String,
    pos: geom::Point,
    font_size: f32,
    color: ColorU8,
    h_align: HAlign,
    v_align: VAlign,
    rotation: f32,
}

impl TextItem {
    /// Estimated extents, rotation included
    fn bbox(&self) -> geom::Rect {
        let chars = self.text.chars().count() as f32;
        let w = missing_params::CHAR_WIDTH_RATIO * self.font_size * chars;
        let h = self.font_size;
        let x = match self.h_align {
            HAlign::Left => 0.0,
            HAlign::Center => -w / 2.0,
            HAlign::Right => -w,
        };
        let y = match self.v_align {
            VAlign::Top => 0.0,
            VAlign::Center => -h / 2.0,
            VAlign::Baseline => -0.8 * h,
            VAlign::Bottom => -h,
        };
        let rect = geom::Rect::from_xywh(self.pos.x + x, self.pos.y + y, w, h);
        if self.rotation == 0.0 {
            rect
        } else {
            rect.transform(&geom::Transform::from_rotate_at(
                -self.rotation,
                self.pos.x,
                self.pos.y,
            ))
        }
    }

    fn width(&self) -> f32 {
        self.bbox().width()
    }
}

impl PreparedFigure {
    /// Size of the figure in points
    pub fn size(&self) -> geom::Size {
        self.size
    }

    /// The figure area, in points
    pub fn figure_rect(&self) -> geom::Rect {
        geom::Rect::from_size(self.size)
    }

    /// Smallest rectangle enclosing everything drawn, backgrounds excepted.
    /// Falls back to the figure area for an empty figure.
    pub fn tight_bbox(&self) -> geom::Rect {
        let mut bbox: Option<geom::Rect> = None;
        let mut clip_depth = 0;
        for item in &self.items {
            let item_bbox = match item {
                Item::PushClip(_) => {
                    clip_depth += 1;
                    None
                }
                Item::PopClip => {
                    clip_depth -= 1;
                    None
                }
                _ if clip_depth > 0 => None,
                Item::Rect {
                    background: true, ..
                } => None,
                Item::Rect { rect, stroke, .. } => {
                    Some(rect.outset(stroke.map(|(_, w)| w / 2.0).unwrap_or(0.0)))
                }
                Item::Path { path, stroke, .. } => {
                    let b = path.bounds();
                    let rect = geom::Rect::from_xywh(b.left(), b.top(), b.width(), b.height());
                    Some(rect.outset(stroke.map(|(_, w)| w / 2.0).unwrap_or(0.0)))
                }
                Item::Text(text) if text.text.is_empty() => None,
                Item::Text(text) => Some(text.bbox()),
            };
            bbox = geom::Rect::unite_opt(bbox.as_ref(), item_bbox.as_ref());
        }
        bbox.unwrap_or_else(|| self.figure_rect())
    }

    /// Draw onto `surface`, which must already be prepared with its viewport.
    /// With `transparent`, the figure and axes backgrounds are not painted.
    pub fn draw<S>(&self, surface: &mut S, transparent: bool)
    where
        S: Surface + ?Sized,
    {
        if !transparent {
            surface.fill(render::Paint::Solid(self.background));
        }
        for item in &self.items {
            match item {
                Item::Rect {
                    background: true, ..
                } if transparent => (),
                Item::Rect {
                    rect, fill, stroke, ..
                } => surface.draw_rect(&render::Rect {
                    rect: *rect,
                    fill: fill.map(render::Paint::Solid),
                    stroke: stroke.map(solid_stroke),
                    transform: None,
                }),
                Item::Path { path, fill, stroke } => surface.draw_path(&render::Path {
                    path,
                    fill: fill.map(render::Paint::Solid),
                    stroke: stroke.map(solid_stroke),
                    transform: None,
                }),
                Item::Text(text) => surface.draw_text(&render::Text {
                    text: &text.text,
                    pos: text.pos,
                    font_size: text.font_size,
                    font_family: &self.font_family,
                    color: text.color,
                    h_align: text.h_align,
                    v_align: text.v_align,
                    rotation: text.rotation,
                }),
                Item::PushClip(rect) => surface.push_clip(&render::Clip {
                    rect,
                    transform: None,
                }),
                Item::PopClip => surface.pop_clip(),
            }
        }
    }
}

fn solid_stroke((color, width): (ColorU8, f32)) -> render::Stroke<'static> {
    render::Stroke {
        color,
        width,
        pattern: render::LinePattern::Solid,
    }
}

struct Ctx<'a> {
    rc: &'a RcParams,
    size: geom::Size,
    items: Vec<Item>,
}

/// Data range of an axis, with its mapping to figure coordinates
#[derive(Debug, Clone, Copy)]
struct Scale {
    start: f64,
    end: f64,
    pt_start: f32,
    pt_end: f32,
}

impl Scale {
    fn map(&self, v: f64) -> f32 {
        let ratio = (v - self.start) / (self.end - self.start);
        self.pt_start + ratio as f32 * (self.pt_end - self.pt_start)
    }
}

impl<'a> Ctx<'a> {
    fn new(fig: &'a Figure) -> Self {
        Ctx {
            rc: fig.rc(),
            size: fig.size_pt(),
            items: Vec::new(),
        }
    }

    fn finish(self) -> PreparedFigure {
        PreparedFigure {
            size: self.size,
            background: self.rc.figure_face_color,
            font_family: self.rc.font_families(),
            items: self.items,
        }
    }

    /// Rectangle of the axes `idx` out of `count`, stacked vertically
    fn axes_rect(&self, idx: usize, count: usize) -> geom::Rect {
        const HSPACE: f32 = 0.2;
        let (w, h) = (self.size.width(), self.size.height());
        let left = missing_params::AXES_LEFT * w;
        let right = missing_params::AXES_RIGHT * w;
        let top = (1.0 - missing_params::AXES_TOP) * h;
        let bottom = (1.0 - missing_params::AXES_BOTTOM) * h;
        let n = count as f32;
        let row_h = (bottom - top) / (n + HSPACE * (n - 1.0));
        let y = top + idx as f32 * row_h * (1.0 + HSPACE);
        geom::Rect::from_xywh(left, y, right - left, row_h)
    }

    fn push_text(&mut self, text: TextItem) {
        if !text.text.is_empty() {
            self.items.push(Item::Text(text));
        }
    }

    fn push_stroke(&mut self, pb: geom::PathBuilder, color: ColorU8, width: f32) {
        if let Some(path) = pb.finish() {
            self.items.push(Item::Path {
                path,
                fill: None,
                stroke: Some((color, width)),
            });
        }
    }

    fn setup_axes(&mut self, axes: &Axes, rect: &geom::Rect) {
        let rc = self.rc;
        let (x0, x1) = data_bounds(axes.lines().iter().flat_map(|l| l.points().map(|p| p.0)));
        let (y0, y1) = data_bounds(axes.lines().iter().flat_map(|l| l.points().map(|p| p.1)));
        let x_scale = Scale {
            start: x0,
            end: x1,
            pt_start: rect.left(),
            pt_end: rect.right(),
        };
        let y_scale = Scale {
            start: y0,
            end: y1,
            pt_start: rect.bottom(),
            pt_end: rect.top(),
        };
        let (x_ticks, x_step) = ticks::locate(x0, x1);
        let (y_ticks, y_step) = ticks::locate(y0, y1);

        self.items.push(Item::Rect {
            rect: *rect,
            fill: Some(rc.axes_face_color),
            stroke: None,
            background: true,
        });

        if rc.axes_grid {
            let mut pb = geom::PathBuilder::new();
            for x in x_ticks.iter().map(|t| x_scale.map(*t)) {
                pb.move_to(x, rect.top());
                pb.line_to(x, rect.bottom());
            }
            for y in y_ticks.iter().map(|t| y_scale.map(*t)) {
                pb.move_to(rect.left(), y);
                pb.line_to(rect.right(), y);
            }
            self.push_stroke(pb, rc.grid_color, missing_params::GRID_WIDTH);
        }

        self.items.push(Item::PushClip(*rect));
        for line in axes.lines() {
            let mut pb = geom::PathBuilder::new();
            let mut pen_down = false;
            for (x, y) in line.points() {
                if !(x.is_finite() && y.is_finite()) {
                    pen_down = false;
                    continue;
                }
                let (x, y) = (x_scale.map(x), y_scale.map(y));
                if pen_down {
                    pb.line_to(x, y);
                } else {
                    pb.move_to(x, y);
                    pen_down = true;
                }
            }
            self.push_stroke(pb, line.color(), line.width());
        }
        self.items.push(Item::PopClip);

        self.items.push(Item::Rect {
            rect: *rect,
            fill: None,
            stroke: Some((rc.edge_color, missing_params::AXES_SPINE_WIDTH)),
            background: false,
        });

        // x ticks and labels
        let mut pb = geom::PathBuilder::new();
        let label_y = rect.bottom() + missing_params::TICK_SIZE + missing_params::TICK_LABEL_MARGIN;
        for t in &x_ticks {
            let x = x_scale.map(*t);
            pb.move_to(x, rect.bottom());
            pb.line_to(x, rect.bottom() + missing_params::TICK_SIZE);
            self.push_text(TextItem {
                text: ticks::format(*t, x_step),
                pos: geom::Point::from_xy(x, label_y),
                font_size: rc.xtick_font_size(),
                color: rc.xtick_color,
                h_align: HAlign::Center,
                v_align: VAlign::Top,
                rotation: 0.0,
            });
        }
        self.push_stroke(pb, rc.xtick_color, missing_params::TICK_WIDTH);

        // y ticks and labels
        let mut pb = geom::PathBuilder::new();
        let label_x = rect.left() - missing_params::TICK_SIZE - missing_params::TICK_LABEL_MARGIN;
        let mut label_w: f32 = 0.0;
        for t in &y_ticks {
            let y = y_scale.map(*t);
            pb.move_to(rect.left() - missing_params::TICK_SIZE, y);
            pb.line_to(rect.left(), y);
            let text = TextItem {
                text: ticks::format(*t, y_step),
                pos: geom::Point::from_xy(label_x, y),
                font_size: rc.ytick_font_size(),
                color: rc.ytick_color,
                h_align: HAlign::Right,
                v_align: VAlign::Center,
                rotation: 0.0,
            };
            label_w = label_w.max(text.width());
            self.push_text(text);
        }
        self.push_stroke(pb, rc.ytick_color, missing_params::TICK_WIDTH);

        if let Some(label) = axes.x_label() {
            self.push_text(TextItem {
                text: label.to_string(),
                pos: geom::Point::from_xy(
                    rect.center_x(),
                    label_y + rc.xtick_font_size() + missing_params::LABEL_MARGIN,
                ),
                font_size: rc.label_font_size(),
                color: rc.label_color,
                h_align: HAlign::Center,
                v_align: VAlign::Top,
                rotation: 0.0,
            });
        }
        if let Some(label) = axes.y_label() {
            self.push_text(TextItem {
                text: label.to_string(),
                pos: geom::Point::from_xy(
                    label_x - label_w - missing_params::LABEL_MARGIN,
                    rect.center_y(),
                ),
                font_size: rc.label_font_size(),
                color: rc.label_color,
                h_align: HAlign::Center,
                v_align: VAlign::Bottom,
                rotation: 90.0,
            });
        }
        if let Some(title) = axes.title() {
            self.push_text(TextItem {
                text: title.to_string(),
                pos: geom::Point::from_xy(rect.center_x(), rect.top() - missing_params::TITLE_MARGIN),
                font_size: rc.title_font_size(),
                color: rc.text_color,
                h_align: HAlign::Center,
                v_align: VAlign::Bottom,
                rotation: 0.0,
            });
        }
        if axes.has_legend() {
            self.setup_legend(axes, rect);
        }
    }

    /// Legend in the top right corner of the axes
    fn setup_legend(&mut self, axes: &Axes, rect: &geom::Rect) {
        let rc = self.rc;
        let pad = missing_params::LEGEND_PADDING;
        let spacing = missing_params::LEGEND_SPACING;
        let sample_len = missing_params::LEGEND_SAMPLE_LEN;
        let fs = rc.legend_font_size();

        let entries: Vec<_> = axes
            .lines()
            .iter()
            .filter_map(|l| l.label().map(|label| (l, label)))
            .collect();
        let text_w = entries
            .iter()
            .map(|(_, label)| {
                missing_params::CHAR_WIDTH_RATIO * fs * label.chars().count() as f32
            })
            .fold(0.0, f32::max);
        let n = entries.len() as f32;
        let w = 3.0 * pad + sample_len + text_w;
        let h = 2.0 * pad + n * fs + (n - 1.0) * spacing;
        let frame = geom::Rect::from_xywh(rect.right() - pad - w, rect.top() + pad, w, h);

        if rc.legend.frame_on {
            let path = if rc.legend.fancy_box {
                rounded_rect(&frame, 0.2 * fs)
            } else {
                frame.to_path()
            };
            if let Some(path) = path {
                self.items.push(Item::Path {
                    path,
                    fill: Some(rc.legend.face_color.with_opacity(rc.legend.frame_alpha)),
                    stroke: Some((rc.legend.edge_color, missing_params::LEGEND_BORDER_WIDTH)),
                });
            }
        }

        for (i, (line, label)) in entries.into_iter().enumerate() {
            let y = frame.top() + pad + i as f32 * (fs + spacing) + fs / 2.0;
            let x = frame.left() + pad;
            let mut pb = geom::PathBuilder::new();
            pb.move_to(x, y);
            pb.line_to(x + sample_len, y);
            self.push_stroke(pb, line.color(), line.width());
            self.push_text(TextItem {
                text: label.to_string(),
                pos: geom::Point::from_xy(x + sample_len + pad, y),
                font_size: fs,
                color: rc.text_color,
                h_align: HAlign::Left,
                v_align: VAlign::Center,
                rotation: 0.0,
            });
        }
    }
}

/// Range of the finite values, with 5% margins.
/// Defaults to `0..1` if there is no finite value.
fn data_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values.filter(|v| v.is_finite()) {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });
    }
    let Some((min, max)) = bounds else {
        return (0.0, 1.0);
    };
    if min == max {
        let d = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return (min - d, max + d);
    }
    let margin = (max - min) * 0.05;
    (min - margin, max + margin)
}

fn rounded_rect(rect: &geom::Rect, radius: f32) -> Option<geom::Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let (l, t, rt, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let mut pb = geom::PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.quad_to(rt, t, rt, t + r);
    pb.line_to(rt, b - r);
    pb.quad_to(rt, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.quad_to(l, b, l, b - r);
    pb.line_to(l, t + r);
    pb.quad_to(l, t, l + r, t);
    pb.close();
    pb.finish()
}
