use oxtheme::drawing::Drawing;
use oxtheme::render::Surface;
use oxtheme::{Context, ThemeParams, color};
use oxtheme_pxl::PxlSurface;
use oxtheme_svg::SvgSurface;

use crate::*;

fn has_pixel(pixmap: &tiny_skia::Pixmap, rgb: [u8; 3]) -> bool {
    pixmap.pixels().iter().any(|px| {
        px.alpha() == 255 && [px.red(), px.green(), px.blue()] == rgb
    })
}

#[test]
fn series_follow_the_cycle() {
    let mut ctx = Context::new();
    let params = ThemeParams::default().with_color_cycle(["coral", "#00FF00"]);
    let (mut fig, ax) = ctx.make_styled_figure((4.0, 3.0), &params).unwrap();
    let axes = fig.axes_mut(ax);
    axes.plot(&[0.0, 1.0], &[0.0, 0.0]).set_width(4.0);
    axes.plot(&[0.0, 1.0], &[1.0, 1.0]).set_width(4.0);

    let prepared = fig.prepare();
    let mut pxl = PxlSurface::new(288, 216).unwrap();
    pxl.prepare(&prepared.figure_rect());
    prepared.draw(&mut pxl, false);
    let pixmap = pxl.into_pixmap();

    let coral = color::resolve_color_u8("coral").unwrap();
    assert!(has_pixel(&pixmap, coral.rgb()));
    assert!(has_pixel(&pixmap, [0, 255, 0]));
}

#[test]
fn first_series_is_oxford_blue() {
    let fig = sample_figure((4.0, 3.0));
    let prepared = fig.prepare();
    let mut pxl = PxlSurface::new(576, 432).unwrap();
    pxl.prepare(&prepared.figure_rect());
    prepared.draw(&mut pxl, false);
    let pixmap = pxl.into_pixmap();

    let blue = color::resolve_color_u8("oxford_blue").unwrap();
    assert!(has_pixel(&pixmap, blue.rgb()));
}

#[test]
fn svg_text_attributes() {
    let fig = sample_figure((4.0, 3.0));
    let prepared = fig.prepare();
    let mut svg = SvgSurface::new(288.0, 216.0);
    svg.prepare(&prepared.figure_rect());
    prepared.draw(&mut svg, false);
    let mut buf = Vec::new();
    svg.write(&mut buf).unwrap();
    let svg = String::from_utf8(buf).unwrap();

    assert!(svg.contains(">Waves<"));
    assert!(svg.contains(">sin<"));
    assert!(svg.contains(">cos<"));
    // oxford_blue text
    assert!(svg.contains("fill=\"#002147\""));
    assert!(svg.contains("rotate(-90"));
    assert!(svg.contains("Arial"));
}
