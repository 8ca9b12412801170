use oxtheme::rc::FontSize;
use oxtheme::{BaseStyle, Context, Error, RcParams, ThemeParams, color, palette};

#[test]
fn palette_as_cycle() {
    let mut ctx = Context::new();
    let cycle = palette::get_palette("health", None).unwrap();
    let params = ThemeParams::default().with_color_cycle(cycle.iter().copied());
    ctx.apply_theme(&params).unwrap();

    let expected: Vec<oxtheme::ColorU8> = cycle.iter().map(|hex| hex.parse().unwrap()).collect();
    assert_eq!(ctx.rc().color_cycle, expected);
}

#[test]
fn presets_then_reset() {
    let mut ctx = Context::new();
    for name in oxtheme::preset::names() {
        ctx.apply_preset(name).unwrap();
        assert_eq!(
            ctx.rc().text_color,
            color::resolve_color_u8("oxford_blue").unwrap()
        );
    }
    ctx.reset_theme();
    assert_eq!(ctx.rc(), &RcParams::default());
}

#[test]
fn failed_apply_is_atomic() {
    let mut ctx = Context::new();
    ctx.apply_preset("print").unwrap();
    let before = ctx.rc().clone();

    let invalid = [
        ThemeParams::default().with_font_scale(0.0),
        ThemeParams::default().with_font_scale(-1.0),
        ThemeParams::default().with_color_cycle(Vec::<String>::new()),
        ThemeParams::default().with_color_cycle(["oxford_blue", "no_such_color"]),
    ];
    for params in &invalid {
        assert!(ctx.apply_theme(params).is_err());
        assert_eq!(ctx.rc(), &before);
        assert!(ctx.preview_config(params).is_err());
        assert_eq!(ctx.rc(), &before);
    }
}

#[test]
fn unknown_color_in_cycle() {
    let mut ctx = Context::new();
    let params = ThemeParams::default().with_color_cycle(["no_such_color"]);
    match ctx.apply_theme(&params) {
        Err(Error::UnknownColor { name, valid }) => {
            assert_eq!(name, "no_such_color");
            assert!(valid.contains(&"oxford_blue"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn talk_base_style_is_larger() {
    let mut ctx = Context::new();
    let paper = ctx.preview_config(&ThemeParams::default()).unwrap();
    let talk = ctx
        .preview_config(&ThemeParams::default().with_base_style(BaseStyle::Talk))
        .unwrap();
    assert!(talk.font_size > paper.font_size);
    assert!(talk.title_font_size() > paper.title_font_size());
    assert!(talk.line_width > paper.line_width);
    assert_eq!(ctx.rc(), &RcParams::default());
}

#[test]
fn named_sizes_follow_scale() {
    let mut ctx = Context::new();
    ctx.apply_theme(&ThemeParams::default().with_base_style(BaseStyle::Default))
        .unwrap();
    let base = ctx.rc().clone();
    ctx.apply_theme(
        &ThemeParams::default()
            .with_base_style(BaseStyle::Default)
            .with_font_scale(2.0),
    )
    .unwrap();
    let scaled = ctx.rc();
    assert_eq!(scaled.font_size, 2.0 * base.font_size);
    assert!(matches!(base.label_size, FontSize::Named(_)));
    assert_eq!(scaled.label_font_size(), 2.0 * base.label_font_size());
}

#[test]
fn styled_figure_captures_config() {
    let mut ctx = Context::new();
    let (fig, _) = ctx
        .make_styled_figure((3.5, 2.5), &ThemeParams::default().with_font_scale(1.5))
        .unwrap();
    ctx.reset_theme();
    assert_ne!(fig.rc(), ctx.rc());
    assert!(matches!(
        ctx.make_styled_figure((0.0, 2.5), &ThemeParams::default()),
        Err(Error::InvalidConfig(_))
    ));
}
