//! Helpers for splicing CSS into HTML output.
//!
//! Nothing here escapes its input. Rules and declarations are written as
//! they render, so a value containing `</style>` or `"` ends the element or
//! attribute early.

use std::fmt::{self, Write};

use crate::property::Property;
use crate::render::{ToCss, display_via_to_css};
use crate::rule::{Rule, Stylesheet};

/// A `<style>` element holding a list of rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleElement {
    pub rules: Stylesheet,
}

/// A ` style="..."` attribute, leading space included, ready to be written
/// straight after a tag name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleAttribute {
    pub properties: Vec<Property>,
}

/// `<style>rule rule ...</style>`
///
/// ```
/// use cssgo::{NamedColor, background_color, class, hex, text_color};
/// use cssgo::html::style_element;
///
/// let head = format!(
///     "<head>{}</head>",
///     style_element([class("foo").props([
///         text_color(NamedColor::Blue),
///         background_color(hex(0xffffff)),
///     ])])
/// );
/// assert_eq!(
///     head,
///     "<head><style>.foo{color: blue;background-color: #ffffff;}</style></head>"
/// );
/// ```
pub fn style_element(rules: impl IntoIterator<Item = Rule>) -> StyleElement {
    StyleElement {
        rules: rules.into_iter().collect(),
    }
}

/// ` style="decl;decl;"`
pub fn style_attribute(properties: impl IntoIterator<Item = Property>) -> StyleAttribute {
    StyleAttribute {
        properties: properties.into_iter().collect(),
    }
}

impl From<Stylesheet> for StyleElement {
    fn from(rules: Stylesheet) -> Self {
        Self { rules }
    }
}

impl ToCss for StyleElement {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str("<style>")?;
        self.rules.to_css(dest)?;
        dest.write_str("</style>")
    }
}

impl ToCss for StyleAttribute {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(" style=\"")?;
        for prop in &self.properties {
            prop.to_css(dest)?;
        }
        dest.write_char('"')
    }
}

display_via_to_css!(StyleElement, StyleAttribute);
