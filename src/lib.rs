//! # cssgo
//!
//! Build CSS text from typed values, properties, selectors and rules
//! instead of concatenating strings.
//!
//! ## Features
//!
//! - Typed values: named and functional colours, lengths, border styles and
//!   widths, display and flex-direction keywords, z-index, urls
//! - `inherit`, `initial`, `unset`, `revert` and `auto` accepted by every
//!   property
//! - Property constructors with 1- to 4-value shorthand forms
//! - Class, id and element selectors grouped with [`Selector::or`]
//! - Compact, stable output suitable for snapshot tests
//! - `<style>` element and `style` attribute helpers in [`html`]
//!
//! ## Quick Start
//!
//! ```
//! use cssgo::{BorderStyle, NamedColor, ToCss, background_color, border3, class, el, hex, px};
//!
//! let rule = class("box").or(el("aside")).props([
//!     border3(px(1), BorderStyle::Solid, NamedColor::Black),
//!     background_color(hex(0xffffff)),
//! ]);
//!
//! assert_eq!(
//!     rule.to_css_string(),
//!     ".box, aside{border: 1px solid black;background-color: #ffffff;}"
//! );
//! ```
//!
//! ## Rendering into a sink
//!
//! Every node implements [`ToCss`] and [`std::fmt::Display`]. [`render`]
//! writes a node into any [`std::io::Write`]:
//!
//! ```
//! use cssgo::{Global, Stylesheet, id, margin2, px, render, text_color};
//!
//! let sheet = Stylesheet::new()
//!     .rule(id("main").props([margin2(px(0), px(8))]))
//!     .rule(id("footer").props([text_color(Global::Inherit)]));
//!
//! let mut out = Vec::new();
//! render(&sheet, &mut out)?;
//! assert_eq!(out, b"#main{margin: 0px 8px;}#footer{color: inherit;}");
//! # Ok::<(), cssgo::Error>(())
//! ```

pub mod error;
pub mod html;
pub mod property;
pub mod render;
pub mod rule;
pub mod selector;
pub mod values;

pub use error::{Error, Result};
pub use property::*;
pub use render::{ToCss, render, render_to_string};
pub use rule::{Rule, Stylesheet, rule};
pub use selector::{Selector, class, el, id};
pub use values::{
    Auto, BorderStyle, BorderWidth, Color, Display, FlexDirection, Global, Image, NamedColor,
    Size, Unit, Value, ZIndex, cm, em, hex, hsl, hsla, inch, mm, pc, pct, pt, px, rem, rgb, rgba,
    url, vh, vmax, vmin, vw,
};
