//! CSS value types.
//!
//! Every value category (colour, size, border style, ...) is its own sum
//! type, so a property constructor only accepts the category it makes sense
//! for. The global keywords and `auto` are shared variants of every
//! category. [`Value`] erases the category for the generic
//! [`prop`](crate::prop) constructor.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::render::{ToCss, display_via_to_css, write_number};

mod border;
mod color;
mod image;
mod layout;
mod size;

#[cfg(test)]
mod tests;

pub use border::{BorderStyle, BorderWidth};
pub use color::{Color, NamedColor, hex, hsl, hsla, rgb, rgba};
pub use image::{Image, url};
pub use layout::{Display, FlexDirection, ZIndex};
pub use size::{Size, Unit, cm, em, inch, mm, pc, pct, pt, px, rem, vh, vmax, vmin, vw};

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Global keywords.
///     pub enum Global {
///         Inherit => "inherit",
///         Initial => "initial",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every keyword of this type, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Look up the variant for an exact CSS keyword.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::render::ToCss for $name {
            fn to_css<W: ::std::fmt::Write>(&self, dest: &mut W) -> ::std::fmt::Result {
                dest.write_str(self.as_str())
            }
        }

        $crate::render::display_via_to_css!($name);
    };
}

/// Like `enum_property!`, but the enum also gets the `Global(Global)` and
/// `Auto` variants that every value category shares.
macro_rules! keyword_value {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A global keyword (`inherit`, `initial`, `unset`, `revert`).
            Global($crate::values::Global),
            /// The `auto` keyword.
            Auto,
        }

        impl $name {
            /// The category's own keywords, without the shared ones.
            pub const KEYWORDS: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                    $name::Global(global) => global.as_str(),
                    $name::Auto => "auto",
                }
            }

            /// Look up the value for an exact CSS keyword, shared ones included.
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    "auto" => Some($name::Auto),
                    _ => $crate::values::Global::from_css(s).map($name::Global),
                }
            }
        }

        impl $crate::render::ToCss for $name {
            fn to_css<W: ::std::fmt::Write>(&self, dest: &mut W) -> ::std::fmt::Result {
                dest.write_str(self.as_str())
            }
        }

        $crate::values::shared_keywords!($name);
        $crate::render::display_via_to_css!($name);
    };
}

/// `From<Global>` and `From<Auto>` for a value category.
macro_rules! shared_keywords {
    ($($name:ty),+ $(,)?) => {
        $(
            impl From<$crate::values::Global> for $name {
                fn from(global: $crate::values::Global) -> Self {
                    Self::Global(global)
                }
            }

            impl From<$crate::values::Auto> for $name {
                fn from(_: $crate::values::Auto) -> Self {
                    Self::Auto
                }
            }
        )+
    };
}

pub(crate) use {enum_property, keyword_value, shared_keywords};

enum_property! {
    /// Keywords valid for every CSS property.
    pub enum Global {
        Inherit => "inherit",
        Initial => "initial",
        Unset => "unset",
        Revert => "revert",
    }
}

/// The CSS `auto` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Auto;

impl ToCss for Auto {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str("auto")
    }
}

/// Any CSS value, regardless of category.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Color(Color),
    Size(Size),
    BorderStyle(BorderStyle),
    BorderWidth(BorderWidth),
    Display(Display),
    FlexDirection(FlexDirection),
    Image(Image),
    ZIndex(ZIndex),
    Global(Global),
    Auto,
    /// Unitless number.
    Number(f64),
    Integer(i64),
    /// Literal text written as given; no keyword table is consulted.
    Keyword(Cow<'static, str>),
}

impl Value {
    /// A literal keyword value, rendered verbatim.
    pub fn keyword(text: impl Into<Cow<'static, str>>) -> Self {
        Value::Keyword(text.into())
    }

    /// A unitless number (e.g. `line-height: 1.5`).
    pub fn number(value: impl Into<f64>) -> Self {
        Value::Number(value.into())
    }
}

impl ToCss for Value {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Value::Color(v) => v.to_css(dest),
            Value::Size(v) => v.to_css(dest),
            Value::BorderStyle(v) => v.to_css(dest),
            Value::BorderWidth(v) => v.to_css(dest),
            Value::Display(v) => v.to_css(dest),
            Value::FlexDirection(v) => v.to_css(dest),
            Value::Image(v) => v.to_css(dest),
            Value::ZIndex(v) => v.to_css(dest),
            Value::Global(v) => v.to_css(dest),
            Value::Auto => Auto.to_css(dest),
            Value::Number(v) => write_number(dest, *v),
            Value::Integer(v) => write!(dest, "{}", v),
            Value::Keyword(text) => dest.write_str(text),
        }
    }
}

display_via_to_css!(Auto, Value);

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}

value_from! {
    Color => Color,
    Size => Size,
    BorderStyle => BorderStyle,
    BorderWidth => BorderWidth,
    Display => Display,
    FlexDirection => FlexDirection,
    Image => Image,
    ZIndex => ZIndex,
    Global => Global,
    i64 => Integer,
}

impl From<Auto> for Value {
    fn from(_: Auto) -> Self {
        Value::Auto
    }
}

impl From<NamedColor> for Value {
    fn from(color: NamedColor) -> Self {
        Value::Color(color.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<&'static str> for Value {
    fn from(text: &'static str) -> Self {
        Value::Keyword(Cow::Borrowed(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Keyword(Cow::Owned(text))
    }
}

/// `From<source> for Option<target>` for every source that converts into
/// `target`, so positional shorthand arguments take a value or `None`.
macro_rules! optional_from {
    ($($target:ty: $($source:ty),+;)+) => {
        $($(
            impl From<$source> for Option<$target> {
                fn from(value: $source) -> Self {
                    Some(value.into())
                }
            }
        )+)+
    };
}

optional_from! {
    Size: Global, Auto;
    BorderStyle: Global, Auto;
    BorderWidth: Size, Global, Auto;
    Color: NamedColor, Global, Auto;
}
