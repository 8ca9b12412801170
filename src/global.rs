//! Per-thread default [`Context`].
//!
//! The free functions of the crate root operate on this context.
//! Each thread starts with its own context, initialized with the library defaults.
//! Use a [`Context`] directly to share a configuration between threads.
use std::cell::RefCell;

use oxtheme_base::geom;

use crate::figure::{AxesId, Figure};
use crate::rc::RcParams;
use crate::theme::{Context, ThemeParams};
use crate::Result;

thread_local! {
    static CONTEXT: RefCell<Context> = RefCell::new(Context::new());
}

/// Run `f` with the context of the current thread.
///
/// # Panics
/// If `f` calls back into this module.
pub fn with_context<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    CONTEXT.with_borrow_mut(f)
}

/// Apply the theme to the context of the current thread. See [`Context::apply_theme`].
pub fn apply_theme(params: &ThemeParams) -> Result<()> {
    with_context(|ctx| ctx.apply_theme(params))
}

/// See [`Context::reset_theme`]
pub fn reset_theme() {
    with_context(|ctx| ctx.reset_theme())
}

/// See [`Context::preview_config`]
pub fn preview_config(params: &ThemeParams) -> Result<RcParams> {
    with_context(|ctx| ctx.preview_config(params))
}

/// See [`Context::apply_preset`]
pub fn apply_preset(name: &str) -> Result<()> {
    with_context(|ctx| ctx.apply_preset(name))
}

/// See [`Context::make_styled_figure`]
pub fn make_styled_figure(
    size: impl Into<geom::Size>,
    params: &ThemeParams,
) -> Result<(Figure, AxesId)> {
    let size = size.into();
    with_context(|ctx| ctx.make_styled_figure(size, params))
}

/// A copy of the current configuration
pub fn rc() -> RcParams {
    with_context(|ctx| ctx.rc().clone())
}
