//! Selectors and selector groups.

use std::fmt::{self, Write};

use crate::property::Property;
use crate::render::{ToCss, display_via_to_css};
use crate::rule::Rule;

/// A simple selector, or a comma-separated group of them.
///
/// Names are written verbatim; nothing checks that they are valid CSS
/// identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `.name`
    Class(String),
    /// `#name`
    Id(String),
    /// `tag`
    Element(String),
    /// `a, b, c`
    Group(Vec<Selector>),
}

/// `.name`
pub fn class(name: impl Into<String>) -> Selector {
    Selector::Class(name.into())
}

/// `#name`
pub fn id(name: impl Into<String>) -> Selector {
    Selector::Id(name.into())
}

/// A bare element selector, e.g. `el("p")`.
pub fn el(tag: impl Into<String>) -> Selector {
    Selector::Element(tag.into())
}

impl Selector {
    /// Group this selector with `other`: `self, other`.
    ///
    /// Groups are flattened, so `a.or(b.or(c))` and `a.or(b).or(c)` both
    /// render `a, b, c`.
    pub fn or(self, other: Selector) -> Selector {
        let mut members = self.into_members();
        members.extend(other.into_members());
        Selector::Group(members)
    }

    /// Attach a declaration block, producing a rule.
    pub fn props(self, properties: impl IntoIterator<Item = Property>) -> Rule {
        Rule::new(self, properties)
    }

    fn into_members(self) -> Vec<Selector> {
        match self {
            Selector::Group(members) => members,
            single => vec![single],
        }
    }
}

impl ToCss for Selector {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Selector::Class(name) => {
                dest.write_char('.')?;
                dest.write_str(name)
            }
            Selector::Id(name) => {
                dest.write_char('#')?;
                dest.write_str(name)
            }
            Selector::Element(tag) => dest.write_str(tag),
            Selector::Group(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        dest.write_str(", ")?;
                    }
                    member.to_css(dest)?;
                }
                Ok(())
            }
        }
    }
}

display_via_to_css!(Selector);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_selectors() {
        assert_eq!(class("foo").to_css_string(), ".foo");
        assert_eq!(id("main").to_css_string(), "#main");
        assert_eq!(el("div").to_css_string(), "div");
    }

    #[test]
    fn test_names_are_not_validated() {
        assert_eq!(class("1 bad").to_css_string(), ".1 bad");
        assert_eq!(el("").to_css_string(), "");
    }

    #[test]
    fn test_or() {
        assert_eq!(class("foo").or(el("p")).to_css_string(), ".foo, p");
    }

    #[test]
    fn test_or_chains_flatten() {
        let right = class("a").or(el("b").or(id("c")));
        let left = class("a").or(el("b")).or(id("c"));
        assert_eq!(right.to_css_string(), ".a, b, #c");
        assert_eq!(left, right);
        assert_eq!(right, Selector::Group(vec![class("a"), el("b"), id("c")]));
    }

    #[test]
    fn test_complex_group() {
        let selector = class("foo").or(el("p").or(el("a"))).or(id("baz"));
        assert_eq!(selector.to_string(), ".foo, p, a, #baz");
    }

    #[test]
    fn test_hand_nested_group_renders_flat() {
        let selector = Selector::Group(vec![
            Selector::Group(vec![el("h1"), el("h2")]),
            class("title"),
        ]);
        assert_eq!(selector.to_css_string(), "h1, h2, .title");
    }
}
