//! CSS declarations.
//!
//! A [`Property`] is either a single `name: value...;` declaration or a
//! group of properties rendered back to back, which is what an inline
//! `style` attribute or a rule body holds.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::render::{ToCss, display_via_to_css};
use crate::values::Value;

mod constructors;


pub use constructors::*;

/// A CSS declaration, or several of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// `name: v1 v2 ...;`
    Declaration {
        name: Cow<'static, str>,
        values: Vec<Value>,
    },
    /// Properties rendered one after another with no separator.
    Group(Vec<Property>),
}

impl Property {
    /// The property name, or `None` for a group.
    pub fn name(&self) -> Option<&str> {
        match self {
            Property::Declaration { name, .. } => Some(name.as_ref()),
            Property::Group(_) => None,
        }
    }

    /// Number of declarations this property renders, counting through groups.
    pub fn len(&self) -> usize {
        match self {
            Property::Declaration { .. } => 1,
            Property::Group(props) => props.iter().map(Property::len).sum(),
        }
    }

    /// True for a group that renders nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ToCss for Property {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Property::Declaration { name, values } => {
                dest.write_str(name)?;
                dest.write_char(':')?;
                for value in values {
                    dest.write_char(' ')?;
                    value.to_css(dest)?;
                }
                dest.write_char(';')
            }
            Property::Group(props) => {
                for prop in props {
                    prop.to_css(dest)?;
                }
                Ok(())
            }
        }
    }
}

display_via_to_css!(Property);

/// A declaration of any property name with any values.
///
/// `None` entries are dropped, so a positional shorthand with missing
/// sides renders only the sides given and no stray whitespace:
///
/// ```
/// use cssgo::{Value, prop, px};
///
/// let margin = prop("margin", [Some(Value::from(px(10))), Some(Value::from(px(20))), None, None]);
/// assert_eq!(margin.to_string(), "margin: 10px 20px;");
/// ```
pub fn prop<I>(name: impl Into<Cow<'static, str>>, values: I) -> Property
where
    I: IntoIterator,
    I::Item: Into<Option<Value>>,
{
    Property::Declaration {
        name: name.into(),
        values: values.into_iter().filter_map(Into::into).collect(),
    }
}

/// Concatenate several properties into one declaration block.
pub fn group_props(props: impl IntoIterator<Item = Property>) -> Property {
    Property::Group(props.into_iter().collect())
}

/// Build a declaration from values of mixed categories.
///
/// ```
/// use cssgo::{BorderStyle, NamedColor, prop, px};
///
/// let border = prop!("border", px(1), BorderStyle::Solid, NamedColor::Black);
/// assert_eq!(border.to_string(), "border: 1px solid black;");
/// ```
#[macro_export]
macro_rules! prop {
    ($name:expr $(,)?) => {
        $crate::prop($name, ::std::iter::empty::<$crate::Value>())
    };
    ($name:expr, $($value:expr),+ $(,)?) => {
        $crate::prop($name, [$($crate::Value::from($value)),+])
    };
}
