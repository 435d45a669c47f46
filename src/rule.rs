//! Rules and stylesheets.

use std::fmt::{self, Write};

use crate::property::Property;
use crate::render::{ToCss, display_via_to_css};
use crate::selector::Selector;

/// A selector paired with its declaration block: `selector{decl;decl;}`.
///
/// Declarations are kept in order; duplicates are neither detected nor
/// merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub properties: Vec<Property>,
}

impl Rule {
    pub fn new(selector: Selector, properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            selector,
            properties: properties.into_iter().collect(),
        }
    }
}

/// Build a rule; the same as `selector.props(properties)`.
///
/// ```
/// use cssgo::{BorderStyle, NamedColor, background_color, border3, class, hex, px, rule};
///
/// let css = rule(
///     class("box"),
///     [
///         border3(px(1), BorderStyle::Solid, NamedColor::Black),
///         background_color(hex(0xffffff)),
///     ],
/// );
/// assert_eq!(
///     css.to_string(),
///     ".box{border: 1px solid black;background-color: #ffffff;}"
/// );
/// ```
pub fn rule(selector: Selector, properties: impl IntoIterator<Item = Property>) -> Rule {
    Rule::new(selector, properties)
}

impl ToCss for Rule {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        self.selector.to_css(dest)?;
        dest.write_char('{')?;
        for prop in &self.properties {
            prop.to_css(dest)?;
        }
        dest.write_char('}')
    }
}

/// An ordered list of rules, rendered back to back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule (builder style).
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for Stylesheet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl ToCss for Stylesheet {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        for rule in &self.rules {
            rule.to_css(dest)?;
        }
        Ok(())
    }
}

display_via_to_css!(Rule, Stylesheet);
