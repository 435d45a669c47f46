//! Lengths and percentages.

use std::fmt::{self, Write};

use super::{Global, enum_property, shared_keywords};
use crate::render::{ToCss, display_via_to_css, write_number};

enum_property! {
    /// Length units.
    pub enum Unit {
        /// Pixels
        Px => "px",
        /// Centimeters
        Cm => "cm",
        /// Millimeters
        Mm => "mm",
        /// Inches
        In => "in",
        /// Points (1pt = 1/72 inch)
        Pt => "pt",
        /// Picas (1pc = 12pt)
        Pc => "pc",
        /// Relative to the element's font size
        Em => "em",
        /// Relative to the root font size
        Rem => "rem",
        /// Viewport width (1vw = 1% of viewport width)
        Vw => "vw",
        /// Viewport height (1vh = 1% of viewport height)
        Vh => "vh",
        /// Viewport minimum (min of vw, vh)
        Vmin => "vmin",
        /// Viewport maximum (max of vw, vh)
        Vmax => "vmax",
        Percent => "%",
    }
}

/// A size value: a number with a unit, or a shared keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    Length { value: f64, unit: Unit },
    Global(Global),
    Auto,
}

impl Size {
    pub fn new(value: impl Into<f64>, unit: Unit) -> Self {
        Size::Length {
            value: value.into(),
            unit,
        }
    }
}

shared_keywords!(Size);

impl ToCss for Size {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Size::Length { value, unit } => {
                write_number(dest, *value)?;
                unit.to_css(dest)
            }
            Size::Global(global) => global.to_css(dest),
            Size::Auto => dest.write_str("auto"),
        }
    }
}

display_via_to_css!(Size);

macro_rules! unit_constructors {
    ($($(#[$meta:meta])* $fn_name:ident => $unit:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $fn_name(value: impl Into<f64>) -> Size {
                Size::new(value, Unit::$unit)
            }
        )+
    };
}

unit_constructors! {
    /// Pixels: `px(16)` renders `16px`.
    px => Px,
    /// Centimeters: `cm(2.54)` renders `2.54cm`.
    cm => Cm,
    mm => Mm,
    /// Inches (`in` is reserved): `inch(1)` renders `1in`.
    inch => In,
    pt => Pt,
    pc => Pc,
    /// `em(1.5)` renders `1.5em`.
    em => Em,
    rem => Rem,
    vw => Vw,
    vh => Vh,
    vmin => Vmin,
    vmax => Vmax,
    /// Percentage: `pct(75.5)` renders `75.5%`.
    pct => Percent,
}
