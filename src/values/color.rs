//! Colour values: named colours and the hex / rgb / hsl functional forms.

use std::fmt::{self, Write};

use log::debug;

use super::{Global, enum_property, shared_keywords};
use crate::render::{ToCss, display_via_to_css, write_number};

enum_property! {
    /// CSS named colours, plus `transparent` and `currentcolor`.
    pub enum NamedColor {
        AliceBlue => "aliceblue",
        AntiqueWhite => "antiquewhite",
        Aqua => "aqua",
        Aquamarine => "aquamarine",
        Azure => "azure",
        Beige => "beige",
        Bisque => "bisque",
        Black => "black",
        BlanchedAlmond => "blanchedalmond",
        Blue => "blue",
        BlueViolet => "blueviolet",
        Brown => "brown",
        BurlyWood => "burlywood",
        CadetBlue => "cadetblue",
        Chartreuse => "chartreuse",
        Chocolate => "chocolate",
        Coral => "coral",
        CornflowerBlue => "cornflowerblue",
        Cornsilk => "cornsilk",
        Crimson => "crimson",
        Cyan => "cyan",
        DarkBlue => "darkblue",
        DarkCyan => "darkcyan",
        DarkGoldenRod => "darkgoldenrod",
        DarkGray => "darkgray",
        DarkGreen => "darkgreen",
        DarkGrey => "darkgrey",
        DarkKhaki => "darkkhaki",
        DarkMagenta => "darkmagenta",
        DarkOliveGreen => "darkolivegreen",
        DarkOrange => "darkorange",
        DarkOrchid => "darkorchid",
        DarkRed => "darkred",
        DarkSalmon => "darksalmon",
        DarkSeaGreen => "darkseagreen",
        DarkSlateBlue => "darkslateblue",
        DarkSlateGray => "darkslategray",
        DarkSlateGrey => "darkslategrey",
        DarkTurquoise => "darkturquoise",
        DarkViolet => "darkviolet",
        DeepPink => "deeppink",
        DeepSkyBlue => "deepskyblue",
        DimGray => "dimgray",
        DimGrey => "dimgrey",
        DodgerBlue => "dodgerblue",
        FireBrick => "firebrick",
        FloralWhite => "floralwhite",
        ForestGreen => "forestgreen",
        Fuchsia => "fuchsia",
        Gainsboro => "gainsboro",
        GhostWhite => "ghostwhite",
        Gold => "gold",
        GoldenRod => "goldenrod",
        Gray => "gray",
        Green => "green",
        GreenYellow => "greenyellow",
        Grey => "grey",
        HoneyDew => "honeydew",
        HotPink => "hotpink",
        IndianRed => "indianred",
        Indigo => "indigo",
        Ivory => "ivory",
        Khaki => "khaki",
        Lavender => "lavender",
        LavenderBlush => "lavenderblush",
        LawnGreen => "lawngreen",
        LemonChiffon => "lemonchiffon",
        LightBlue => "lightblue",
        LightCoral => "lightcoral",
        LightCyan => "lightcyan",
        LightGoldenRodYellow => "lightgoldenrodyellow",
        LightGray => "lightgray",
        LightGreen => "lightgreen",
        LightGrey => "lightgrey",
        LightPink => "lightpink",
        LightSalmon => "lightsalmon",
        LightSeaGreen => "lightseagreen",
        LightSkyBlue => "lightskyblue",
        LightSlateGray => "lightslategray",
        LightSlateGrey => "lightslategrey",
        LightSteelBlue => "lightsteelblue",
        LightYellow => "lightyellow",
        Lime => "lime",
        LimeGreen => "limegreen",
        Linen => "linen",
        Magenta => "magenta",
        Maroon => "maroon",
        MediumAquaMarine => "mediumaquamarine",
        MediumBlue => "mediumblue",
        MediumOrchid => "mediumorchid",
        MediumPurple => "mediumpurple",
        MediumSeaGreen => "mediumseagreen",
        MediumSlateBlue => "mediumslateblue",
        MediumSpringGreen => "mediumspringgreen",
        MediumTurquoise => "mediumturquoise",
        MediumVioletRed => "mediumvioletred",
        MidnightBlue => "midnightblue",
        MintCream => "mintcream",
        MistyRose => "mistyrose",
        Moccasin => "moccasin",
        NavajoWhite => "navajowhite",
        Navy => "navy",
        OldLace => "oldlace",
        Olive => "olive",
        OliveDrab => "olivedrab",
        Orange => "orange",
        OrangeRed => "orangered",
        Orchid => "orchid",
        PaleGoldenRod => "palegoldenrod",
        PaleGreen => "palegreen",
        PaleTurquoise => "paleturquoise",
        PaleVioletRed => "palevioletred",
        PapayaWhip => "papayawhip",
        PeachPuff => "peachpuff",
        Peru => "peru",
        Pink => "pink",
        Plum => "plum",
        PowderBlue => "powderblue",
        Purple => "purple",
        RebeccaPurple => "rebeccapurple",
        Red => "red",
        RosyBrown => "rosybrown",
        RoyalBlue => "royalblue",
        SaddleBrown => "saddlebrown",
        Salmon => "salmon",
        SandyBrown => "sandybrown",
        SeaGreen => "seagreen",
        SeaShell => "seashell",
        Sienna => "sienna",
        Silver => "silver",
        SkyBlue => "skyblue",
        SlateBlue => "slateblue",
        SlateGray => "slategray",
        SlateGrey => "slategrey",
        Snow => "snow",
        SpringGreen => "springgreen",
        SteelBlue => "steelblue",
        Tan => "tan",
        Teal => "teal",
        Thistle => "thistle",
        Tomato => "tomato",
        Turquoise => "turquoise",
        Violet => "violet",
        Wheat => "wheat",
        White => "white",
        WhiteSmoke => "whitesmoke",
        Yellow => "yellow",
        YellowGreen => "yellowgreen",
        Transparent => "transparent",
        CurrentColor => "currentcolor",
    }
}

/// A CSS colour value.
///
/// The `Hsl`/`Hsla`/`Rgba` constructors normalise their inputs (see [`hsl`]);
/// rendering applies the same bounds again, so a hand-built variant with an
/// out-of-range component still renders in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Named(NamedColor),
    /// 24-bit `0xRRGGBB`; higher bits are ignored.
    Hex(u32),
    Rgb(i32, i32, i32),
    Rgba(i32, i32, i32, f64),
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
    Hsla {
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    },
    Global(Global),
    Auto,
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

shared_keywords!(Color);

/// `#rrggbb`, lowercase and zero-padded.
pub fn hex(value: u32) -> Color {
    Color::Hex(value)
}

/// `rgb(r, g, b)`; channels are written as given.
pub fn rgb(r: i32, g: i32, b: i32) -> Color {
    Color::Rgb(r, g, b)
}

/// `rgba(r, g, b, a)` with `alpha` clamped to `[0, 1]`.
pub fn rgba(r: i32, g: i32, b: i32, alpha: f64) -> Color {
    Color::Rgba(r, g, b, normalize("alpha", alpha, 0.0, 1.0))
}

/// `hsl(h, s%, l%)`.
///
/// `hue` is in degrees and clamped to `[0, 360]`. `saturation` and
/// `lightness` are fractions clamped to `[0, 1]` and written as whole
/// percentages, so `hsl(200, 0.5, 0.255)` renders `hsl(200, 50%, 26%)`.
pub fn hsl(hue: impl Into<f64>, saturation: f64, lightness: f64) -> Color {
    Color::Hsl {
        hue: normalize("hue", hue.into(), 0.0, 360.0),
        saturation: normalize("saturation", saturation, 0.0, 1.0),
        lightness: normalize("lightness", lightness, 0.0, 1.0),
    }
}

/// `hsla(h, s%, l%, a)`; like [`hsl`] with `alpha` clamped to `[0, 1]`.
pub fn hsla(hue: impl Into<f64>, saturation: f64, lightness: f64, alpha: f64) -> Color {
    Color::Hsla {
        hue: normalize("hue", hue.into(), 0.0, 360.0),
        saturation: normalize("saturation", saturation, 0.0, 1.0),
        lightness: normalize("lightness", lightness, 0.0, 1.0),
        alpha: normalize("alpha", alpha, 0.0, 1.0),
    }
}

/// Clamp to `[min, max]`; NaN maps to `min`.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

fn normalize(component: &str, value: f64, min: f64, max: f64) -> f64 {
    let clamped = clamp(value, min, max);
    if clamped != value {
        debug!("{} {} out of range, clamped to {}", component, value, clamped);
    }
    clamped
}

fn write_percent<W: Write>(dest: &mut W, fraction: f64) -> fmt::Result {
    write_number(dest, (clamp(fraction, 0.0, 1.0) * 100.0).round())?;
    dest.write_char('%')
}

fn write_hsl_parts<W: Write>(
    dest: &mut W,
    hue: f64,
    saturation: f64,
    lightness: f64,
) -> fmt::Result {
    write_number(dest, clamp(hue, 0.0, 360.0))?;
    dest.write_str(", ")?;
    write_percent(dest, saturation)?;
    dest.write_str(", ")?;
    write_percent(dest, lightness)
}

impl ToCss for Color {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match *self {
            Color::Named(named) => named.to_css(dest),
            Color::Hex(value) => write!(dest, "#{:06x}", value & 0xff_ffff),
            Color::Rgb(r, g, b) => write!(dest, "rgb({}, {}, {})", r, g, b),
            Color::Rgba(r, g, b, alpha) => {
                write!(dest, "rgba({}, {}, {}, ", r, g, b)?;
                write_number(dest, clamp(alpha, 0.0, 1.0))?;
                dest.write_char(')')
            }
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                dest.write_str("hsl(")?;
                write_hsl_parts(dest, hue, saturation, lightness)?;
                dest.write_char(')')
            }
            Color::Hsla {
                hue,
                saturation,
                lightness,
                alpha,
            } => {
                dest.write_str("hsla(")?;
                write_hsl_parts(dest, hue, saturation, lightness)?;
                dest.write_str(", ")?;
                write_number(dest, clamp(alpha, 0.0, 1.0))?;
                dest.write_char(')')
            }
            Color::Global(global) => global.to_css(dest),
            Color::Auto => dest.write_str("auto"),
        }
    }
}

display_via_to_css!(Color);
