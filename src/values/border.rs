//! Border styles and widths.

use std::fmt::{self, Write};

use super::{Global, Size, keyword_value, shared_keywords};
use crate::render::{ToCss, display_via_to_css};

keyword_value! {
    /// Border style values.
    pub enum BorderStyle {
        None => "none",
        Hidden => "hidden",
        Solid => "solid",
        Dotted => "dotted",
        Dashed => "dashed",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

/// A border width: one of the width keywords or any size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderWidth {
    Thin,
    Medium,
    Thick,
    Length(Size),
    Global(Global),
    Auto,
}

impl BorderWidth {
    pub const KEYWORDS: &'static [BorderWidth] =
        &[BorderWidth::Thin, BorderWidth::Medium, BorderWidth::Thick];
}

impl From<Size> for BorderWidth {
    fn from(size: Size) -> Self {
        BorderWidth::Length(size)
    }
}

shared_keywords!(BorderWidth);

impl ToCss for BorderWidth {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            BorderWidth::Thin => dest.write_str("thin"),
            BorderWidth::Medium => dest.write_str("medium"),
            BorderWidth::Thick => dest.write_str("thick"),
            BorderWidth::Length(size) => size.to_css(dest),
            BorderWidth::Global(global) => global.to_css(dest),
            BorderWidth::Auto => dest.write_str("auto"),
        }
    }
}

display_via_to_css!(BorderWidth);
