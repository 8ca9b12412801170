use oxtheme::branding::{self, Branding};
use oxtheme::export::{self, BBox, Format, SaveOptions};
use oxtheme::{Error, get_journal_profile};

use crate::*;

fn figure_opts(format: Format) -> SaveOptions {
    SaveOptions::default()
        .with_format(format)
        .with_bbox(BBox::Figure)
}

#[test]
fn png_extension_is_appended() {
    let dir = out_dir();
    let fig = sample_figure((3.5, 2.5));
    let path = export::save_figure(&fig, dir.path().join("plot"), &SaveOptions::default()).unwrap();
    assert_eq!(path, dir.path().join("plot.png"));
    assert!(path.exists());
}

#[test]
fn png_extension_is_not_duplicated() {
    let dir = out_dir();
    let fig = sample_figure((3.5, 2.5));
    let path =
        export::save_figure(&fig, dir.path().join("plot.png"), &SaveOptions::default()).unwrap();
    assert_eq!(path, dir.path().join("plot.png"));
    assert!(path.exists());
    assert!(!dir.path().join("plot.png.png").exists());
}

#[test]
fn png_size_follows_resolution() {
    let dir = out_dir();
    let fig = sample_figure((3.5, 2.5));
    let opts = figure_opts(Format::Png).with_dpi(100);
    let path = export::save_figure(&fig, dir.path().join("plot"), &opts).unwrap();

    let pixmap = tiny_skia::Pixmap::load_png(&path).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (350, 250));

    // the corner is figure background
    let px = pixmap.pixel(0, 0).unwrap();
    assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 255, 255, 255));
}

#[test]
fn png_transparent() {
    let dir = out_dir();
    let fig = sample_figure((3.5, 2.5));
    let opts = figure_opts(Format::Png).with_dpi(100).with_transparent(true);
    let path = export::save_figure(&fig, dir.path().join("plot"), &opts).unwrap();

    let pixmap = tiny_skia::Pixmap::load_png(&path).unwrap();
    assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
}

#[test]
fn tight_bbox_is_smaller_than_figure() {
    let dir = out_dir();
    let fig = sample_figure((6.0, 4.0));
    let opts = SaveOptions::default().with_dpi(72);
    let path = export::save_figure(&fig, dir.path().join("tight"), &opts).unwrap();

    let pixmap = tiny_skia::Pixmap::load_png(&path).unwrap();
    assert!(pixmap.width() < 6 * 72);
    assert!(pixmap.height() < 4 * 72);
}

#[test]
fn tiff_and_jpeg() {
    let dir = out_dir();
    let fig = sample_figure((2.0, 1.5));

    let path =
        export::save_figure(&fig, dir.path().join("plot"), &figure_opts(Format::Tiff)).unwrap();
    assert_eq!(path, dir.path().join("plot.tiff"));
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (600, 450));

    for format in [Format::Jpg, Format::Jpeg] {
        let opts = figure_opts(format).with_dpi(50);
        let path = export::save_figure(&fig, dir.path().join("plot"), &opts).unwrap();
        assert_eq!(path.extension().unwrap(), format.extension());
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (100, 75));
    }
}

#[test]
fn raw_rgba_bytes() {
    let dir = out_dir();
    let fig = sample_figure((2.0, 1.0));
    for format in [Format::Raw, Format::Rgba] {
        let opts = figure_opts(format).with_dpi(72);
        let path = export::save_figure(&fig, dir.path().join("plot"), &opts).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 144 * 72 * 4);
        assert_eq!(&bytes[..4], &[255, 255, 255, 255]);
    }
}

#[test]
fn svg_holds_watermark() {
    let dir = out_dir();
    let mut fig = sample_figure((3.5, 2.5));
    let branding = Branding::enabled().with_text("Oxford Primary Care - DRAFT");
    branding::add_branding(&mut fig, &branding).unwrap();

    let path = export::save_figure(&fig, dir.path().join("plot"), &figure_opts(Format::Svg))
        .unwrap();
    assert_eq!(path, dir.path().join("plot.svg"));
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Oxford Primary Care - DRAFT"));
    assert!(svg.contains("Waves"));
    assert!(svg.contains("252pt"));
}

#[test]
fn formats_without_backend() {
    let dir = out_dir();
    let fig = sample_figure((3.5, 2.5));
    for format in [Format::Pdf, Format::Eps, Format::Ps, Format::Pgf] {
        match export::save_figure(&fig, dir.path().join("plot"), &figure_opts(format)) {
            Err(Error::NoBackend(f)) => assert_eq!(f, format),
            other => panic!("unexpected result: {other:?}"),
        }
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unsupported_format_name() {
    match "bmp".parse::<Format>() {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("svg, tiff")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn journal_profile_export() {
    let dir = out_dir();
    let profile = get_journal_profile("NATURE").unwrap();
    assert_eq!(profile.format, Format::Svg);

    let mut ctx = oxtheme::Context::new();
    let (mut fig, ax) = ctx
        .make_styled_figure(profile.size, &ThemeParams::default())
        .unwrap();
    fig.axes_mut(ax).plot(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]);

    let opts = SaveOptions::from_profile(&profile);
    let path = export::save_figure(&fig, dir.path().join("nature_fig"), &opts).unwrap();
    assert_eq!(path, dir.path().join("nature_fig.svg"));
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("width=\"252pt\""));
    assert!(svg.contains("height=\"180pt\""));
}
