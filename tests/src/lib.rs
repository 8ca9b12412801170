#![cfg(test)]

use oxtheme::{Figure, ThemeParams};
use tempfile::TempDir;

mod export;
mod render;
mod theme;

fn out_dir() -> TempDir {
    tempfile::tempdir().expect("Should create a temporary directory")
}

/// A themed figure of `size` inches with two labeled series, legend and title
fn sample_figure(size: (f32, f32)) -> Figure {
    let mut ctx = oxtheme::Context::new();
    let (mut fig, ax) = ctx
        .make_styled_figure(size, &ThemeParams::default())
        .unwrap();
    let x: Vec<f64> = (0..=20).map(|i| i as f64 / 2.0).collect();
    let y1: Vec<f64> = x.iter().map(|x| x.sin()).collect();
    let y2: Vec<f64> = x.iter().map(|x| x.cos()).collect();
    let axes = fig.axes_mut(ax);
    axes.plot(&x, &y1).set_label("sin");
    axes.plot(&x, &y2).set_label("cos");
    axes.set_title("Waves").set_xlabel("x").set_ylabel("y").legend();
    fig
}
