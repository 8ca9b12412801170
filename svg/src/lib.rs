//! SVG rendering surface for oxtheme figures.
use std::io;
use std::path::Path;

use oxtheme_base::geom::{self, Transform};
use oxtheme_base::render::{self, HAlign, Surface, VAlign};
use svg::Node;
use svg::node::element;

/// A surface that builds an SVG document in memory
///
/// The document is sized in points, so a figure of 3.5 inches is 252pt wide
/// whatever the resolution asked for the export.
pub struct SvgSurface {
    doc: svg::Document,
    origin: (f32, f32),
    clip_num: u32,
    group_stack: Vec<element::Group>,
}

impl SvgSurface {
    /// Create a new surface of `width` × `height` points
    pub fn new(width: f32, height: f32) -> Self {
        let doc = svg::Document::new()
            .set("width", format!("{width}pt"))
            .set("height", format!("{height}pt"));
        SvgSurface {
            doc,
            origin: (0.0, 0.0),
            clip_num: 0,
            group_stack: vec![],
        }
    }

    pub fn save_svg<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        self.close_groups();
        svg::save(path, &self.doc)
    }

    pub fn write<W>(&mut self, dest: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.close_groups();
        svg::write(dest, &self.doc)
    }

    fn close_groups(&mut self) {
        while !self.group_stack.is_empty() {
            self.pop_clip();
        }
    }
}

impl Surface for SvgSurface {
    fn prepare(&mut self, viewport: &geom::Rect) {
        self.origin = (viewport.x(), viewport.y());
        self.doc.assign(
            "viewBox",
            (
                viewport.x(),
                viewport.y(),
                viewport.width(),
                viewport.height(),
            ),
        );
    }

    fn fill(&mut self, fill: render::Paint) {
        let mut node = element::Rectangle::new()
            .set("x", self.origin.0)
            .set("y", self.origin.1)
            .set("width", "100%")
            .set("height", "100%");
        assign_fill(&mut node, Some(&fill));
        self.append_node(node);
    }

    fn draw_rect(&mut self, rect: &render::Rect) {
        let mut node = rectangle_node(&rect.rect);
        assign_fill(&mut node, rect.fill.as_ref());
        assign_stroke(&mut node, rect.stroke.as_ref());
        assign_transform(&mut node, rect.transform);
        self.append_node(node);
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut node = element::Path::new();
        assign_fill(&mut node, path.fill.as_ref());
        assign_stroke(&mut node, path.stroke.as_ref());
        assign_transform(&mut node, path.transform);
        node.assign("d", path_data(path.path));
        self.append_node(node);
    }

    fn draw_text(&mut self, text: &render::Text) {
        let mut node = element::Text::new(text.text)
            .set("x", text.pos.x)
            .set("y", text.pos.y)
            .set("font-size", text.font_size)
            .set("font-family", font_family(text.font_family))
            .set("fill", text.color.html());
        if let Some(opacity) = text.color.opacity() {
            node.assign("fill-opacity", opacity);
        }
        match text.h_align {
            HAlign::Left => (),
            HAlign::Center => node.assign("text-anchor", "middle"),
            HAlign::Right => node.assign("text-anchor", "end"),
        }
        match text.v_align {
            VAlign::Baseline => (),
            VAlign::Top => node.assign("dominant-baseline", "hanging"),
            VAlign::Center => node.assign("dominant-baseline", "central"),
            VAlign::Bottom => node.assign("dominant-baseline", "text-after-edge"),
        }
        if text.rotation != 0.0 {
            node.assign(
                "transform",
                format!("rotate({} {} {})", -text.rotation, text.pos.x, text.pos.y),
            );
        }
        self.append_node(node);
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        let clip_id = self.bump_clip_id();
        let clip_id_url = format!("url(#{})", clip_id);
        let mut rect_node = rectangle_node(clip.rect);
        assign_transform(&mut rect_node, clip.transform);
        let node = element::ClipPath::new()
            .set("id", clip_id)
            .add(rect_node);
        self.append_node(node);
        self.group_stack
            .push(element::Group::new().set("clip-path", clip_id_url));
    }

    fn pop_clip(&mut self) {
        if let Some(g) = self.group_stack.pop() {
            self.append_node(g);
        }
    }
}

impl SvgSurface {
    fn append_node<T>(&mut self, node: T)
    where
        T: Node,
    {
        match self.group_stack.last_mut() {
            Some(group) => group.append(node),
            None => self.doc.append(node),
        }
    }

    fn bump_clip_id(&mut self) -> String {
        self.clip_num += 1;
        format!("oxtheme-clip{}", self.clip_num)
    }
}

fn font_family(families: &[String]) -> String {
    families
        .iter()
        .map(|f| {
            if f.contains(' ') {
                format!("'{f}'")
            } else {
                f.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn assign_transform<N>(node: &mut N, transform: Option<&geom::Transform>)
where
    N: Node,
{
    if let Some(Transform {
        sx,
        kx,
        ky,
        sy,
        tx,
        ty,
    }) = transform
    {
        node.assign(
            "transform",
            format!("matrix({sx} {ky} {kx} {sy} {tx} {ty})"),
        );
    }
}

fn assign_fill<N>(node: &mut N, fill: Option<&render::Paint>)
where
    N: Node,
{
    if let Some(render::Paint::Solid(color)) = fill {
        node.assign("fill", color.html());
        if let Some(opacity) = color.opacity() {
            node.assign("fill-opacity", opacity);
        }
    } else {
        node.assign("fill", "none");
    }
}

fn assign_stroke<N>(node: &mut N, stroke: Option<&render::Stroke>)
where
    N: Node,
{
    if let Some(stroke) = stroke {
        let w = stroke.width;
        node.assign("stroke", stroke.color.html());
        node.assign("stroke-width", w);
        if let Some(opacity) = stroke.color.opacity() {
            node.assign("stroke-opacity", opacity);
        }
        match stroke.pattern {
            render::LinePattern::Solid => (),
            render::LinePattern::Dash(dash) => {
                let array: Vec<f32> = dash.iter().map(|d| d * w).collect();
                node.assign("stroke-dasharray", array)
            }
        }
    } else {
        node.assign("stroke", "none");
    }
}

fn path_data(path: &geom::Path) -> element::path::Data {
    let mut data = element::path::Data::new();
    for segment in path.segments() {
        match segment {
            geom::PathSegment::MoveTo(p) => {
                data = data.move_to((p.x, p.y));
            }
            geom::PathSegment::LineTo(p) => {
                data = data.line_to((p.x, p.y));
            }
            geom::PathSegment::QuadTo(p1, p2) => {
                data = data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y));
            }
            geom::PathSegment::CubicTo(p1, p2, p3) => {
                data = data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y));
            }
            geom::PathSegment::Close => {
                data = data.close();
            }
        }
    }
    data
}

fn rectangle_node(rect: &geom::Rect) -> element::Rectangle {
    element::Rectangle::new()
        .set("x", rect.x())
        .set("y", rect.y())
        .set("width", rect.width())
        .set("height", rect.height())
}

#[cfg(test)]
mod tests {
    use oxtheme_base::ColorU8;
    use oxtheme_base::geom::Point;

    use super::*;

    fn to_string(surface: &mut SvgSurface) -> String {
        let mut buf = Vec::new();
        surface.write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn document_is_sized_in_points() {
        let mut surface = SvgSurface::new(252.0, 180.0);
        surface.prepare(&geom::Rect::from_xywh(0.0, 0.0, 252.0, 180.0));
        let svg = to_string(&mut surface);
        assert!(svg.contains("width=\"252pt\""));
        assert!(svg.contains("height=\"180pt\""));
        assert!(svg.contains("viewBox=\"0 0 252 180\""));
    }

    #[test]
    fn text_node_attributes() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        let family = vec!["Arial".to_string(), "DejaVu Sans".to_string()];
        surface.draw_text(&render::Text {
            text: "University of Oxford",
            pos: Point::from_xy(98.0, 98.0),
            font_size: 10.0,
            font_family: &family,
            color: ColorU8::from_html(b"#D9D8D6").with_opacity(0.5),
            h_align: HAlign::Right,
            v_align: VAlign::Bottom,
            rotation: 0.0,
        });
        let svg = to_string(&mut surface);
        assert!(svg.contains("University of Oxford"));
        assert!(svg.contains("fill=\"#d9d8d6\""));
        assert!(svg.contains("fill-opacity=\"0.5"));
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("font-family=\"Arial, 'DejaVu Sans'\""));
    }

    #[test]
    fn unbalanced_clip_is_closed_on_write() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        let rect = geom::Rect::from_xywh(10.0, 10.0, 50.0, 50.0);
        surface.push_clip(&render::Clip {
            rect: &rect,
            transform: None,
        });
        let svg = to_string(&mut surface);
        assert!(svg.contains("clip-path=\"url(#oxtheme-clip1)\""));
    }
}
