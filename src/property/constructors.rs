//! Typed property constructors.
//!
//! Each constructor pins a property name to the value category that makes
//! sense for it, so `text_color(px(3))` does not compile.

use super::{Property, prop};
use crate::values::{
    BorderStyle, BorderWidth, Color, Display, FlexDirection, Image, Size, Value, ZIndex,
};

/// Single-value properties.
macro_rules! longhand {
    ($($(#[$meta:meta])* $fn_name:ident($ty:ty) => $css:literal;)+) => {
        $(
            $(#[$meta])*
            #[doc = concat!("\n\nRenders `", $css, ": <value>;`.")]
            pub fn $fn_name(value: impl Into<$ty>) -> Property {
                let value: $ty = value.into();
                prop($css, [Value::from(value)])
            }
        )+
    };
}

/// The 1- to 4-value forms of a box shorthand.
///
/// The 2- to 4-value forms also take `None` for a position; absent
/// positions are left out of the output.
macro_rules! shorthand {
    (
        $ty:ty => $css:literal:
        $one:ident($a:ident),
        $two:ident($b1:ident, $b2:ident),
        $three:ident($c1:ident, $c2:ident, $c3:ident),
        $four:ident($d1:ident, $d2:ident, $d3:ident, $d4:ident);
    ) => {
        #[doc = concat!("`", $css, "` with one value for every side.")]
        pub fn $one($a: impl Into<$ty>) -> Property {
            let $a: $ty = $a.into();
            sides::<$ty>($css, [Some($a)])
        }

        #[doc = concat!("`", $css, ": ", stringify!($b1), " ", stringify!($b2), ";`")]
        pub fn $two($b1: impl Into<Option<$ty>>, $b2: impl Into<Option<$ty>>) -> Property {
            sides::<$ty>($css, [$b1.into(), $b2.into()])
        }

        #[doc = concat!(
            "`", $css, ": ", stringify!($c1), " ", stringify!($c2), " ", stringify!($c3), ";`"
        )]
        pub fn $three(
            $c1: impl Into<Option<$ty>>,
            $c2: impl Into<Option<$ty>>,
            $c3: impl Into<Option<$ty>>,
        ) -> Property {
            sides::<$ty>($css, [$c1.into(), $c2.into(), $c3.into()])
        }

        #[doc = concat!(
            "`", $css, ": ", stringify!($d1), " ", stringify!($d2), " ",
            stringify!($d3), " ", stringify!($d4), ";`"
        )]
        pub fn $four(
            $d1: impl Into<Option<$ty>>,
            $d2: impl Into<Option<$ty>>,
            $d3: impl Into<Option<$ty>>,
            $d4: impl Into<Option<$ty>>,
        ) -> Property {
            sides::<$ty>($css, [$d1.into(), $d2.into(), $d3.into(), $d4.into()])
        }
    };
}

longhand! {
    /// Text colour.
    text_color(Color) => "color";
    background_color(Color) => "background-color";
    accent_color(Color) => "accent-color";
    font_size(Size) => "font-size";
    width(Size) => "width";
    height(Size) => "height";
    line_height(Size) => "line-height";
    letter_spacing(Size) => "letter-spacing";
    display(Display) => "display";
    flex_direction(FlexDirection) => "flex-direction";
    /// Takes an integer, `Auto` or a global keyword.
    z_index(ZIndex) => "z-index";
    background_image(Image) => "background-image";

    margin_top(Size) => "margin-top";
    margin_right(Size) => "margin-right";
    margin_bottom(Size) => "margin-bottom";
    margin_left(Size) => "margin-left";

    padding_top(Size) => "padding-top";
    padding_right(Size) => "padding-right";
    padding_bottom(Size) => "padding-bottom";
    padding_left(Size) => "padding-left";

    border_top_width(BorderWidth) => "border-top-width";
    border_right_width(BorderWidth) => "border-right-width";
    border_bottom_width(BorderWidth) => "border-bottom-width";
    border_left_width(BorderWidth) => "border-left-width";

    border_top_style(BorderStyle) => "border-top-style";
    border_right_style(BorderStyle) => "border-right-style";
    border_bottom_style(BorderStyle) => "border-bottom-style";
    border_left_style(BorderStyle) => "border-left-style";

    border_top_color(Color) => "border-top-color";
    border_right_color(Color) => "border-right-color";
    border_bottom_color(Color) => "border-bottom-color";
    border_left_color(Color) => "border-left-color";

    border_top_left_radius(Size) => "border-top-left-radius";
    border_top_right_radius(Size) => "border-top-right-radius";
    border_bottom_right_radius(Size) => "border-bottom-right-radius";
    border_bottom_left_radius(Size) => "border-bottom-left-radius";
}

shorthand! {
    Size => "margin":
    margin(all),
    margin2(vertical, horizontal),
    margin3(top, horizontal, bottom),
    margin4(top, right, bottom, left);
}

shorthand! {
    Size => "padding":
    padding(all),
    padding2(vertical, horizontal),
    padding3(top, horizontal, bottom),
    padding4(top, right, bottom, left);
}

shorthand! {
    BorderStyle => "border-style":
    border_style(all),
    border_style2(vertical, horizontal),
    border_style3(top, horizontal, bottom),
    border_style4(top, right, bottom, left);
}

shorthand! {
    BorderWidth => "border-width":
    border_width(all),
    border_width2(vertical, horizontal),
    border_width3(top, horizontal, bottom),
    border_width4(top, right, bottom, left);
}

shorthand! {
    Color => "border-color":
    border_color(all),
    border_color2(vertical, horizontal),
    border_color3(top, horizontal, bottom),
    border_color4(top, right, bottom, left);
}

shorthand! {
    Size => "border-radius":
    border_radius(all),
    border_radius2(top_left_bottom_right, top_right_bottom_left),
    border_radius3(top_left, top_right_bottom_left, bottom_right),
    border_radius4(top_left, top_right, bottom_right, bottom_left);
}

/// Declaration whose values all share one category; `None` positions are
/// skipped.
fn sides<T>(name: &'static str, values: impl IntoIterator<Item = Option<T>>) -> Property
where
    Value: From<T>,
{
    prop(name, values.into_iter().map(|value| value.map(Value::from)))
}

/// `border: <width>;`
pub fn border(width: impl Into<BorderWidth>) -> Property {
    let width: BorderWidth = width.into();
    prop("border", [Value::from(width)])
}

/// `border: <width> <style>;`
///
/// Either part may be `None`.
pub fn border2(
    width: impl Into<Option<BorderWidth>>,
    style: impl Into<Option<BorderStyle>>,
) -> Property {
    let width: Option<BorderWidth> = width.into();
    let style: Option<BorderStyle> = style.into();
    prop("border", [width.map(Value::from), style.map(Value::from)])
}

/// `border: <width> <style> <color>;`
///
/// Any part may be `None`, e.g. `border3(px(1), None, NamedColor::Red)`
/// renders `border: 1px red;`.
pub fn border3(
    width: impl Into<Option<BorderWidth>>,
    style: impl Into<Option<BorderStyle>>,
    color: impl Into<Option<Color>>,
) -> Property {
    let width: Option<BorderWidth> = width.into();
    let style: Option<BorderStyle> = style.into();
    let color: Option<Color> = color.into();
    prop(
        "border",
        [
            width.map(Value::from),
            style.map(Value::from),
            color.map(Value::from),
        ],
    )
}
