//! Image references (`url(...)`).

use std::fmt::{self, Write};

use super::{Global, shared_keywords};
use crate::render::{ToCss, display_via_to_css};

/// An image value, as taken by `background-image`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Image {
    /// `url('<path>')`; the path is written verbatim, quotes included.
    Url(String),
    None,
    Global(Global),
    Auto,
}

shared_keywords!(Image);

/// `url('path')`.
pub fn url(path: impl Into<String>) -> Image {
    Image::Url(path.into())
}

impl ToCss for Image {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            Image::Url(path) => {
                dest.write_str("url('")?;
                dest.write_str(path)?;
                dest.write_str("')")
            }
            Image::None => dest.write_str("none"),
            Image::Global(global) => global.to_css(dest),
            Image::Auto => dest.write_str("auto"),
        }
    }
}

display_via_to_css!(Image);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(url("test/example.png").to_css_string(), "url('test/example.png')");
        assert_eq!(url("").to_css_string(), "url('')");
    }

    #[test]
    fn test_url_is_not_escaped() {
        assert_eq!(url("it's.png").to_css_string(), "url('it's.png')");
    }

    #[test]
    fn test_image_keywords() {
        assert_eq!(Image::None.to_css_string(), "none");
        assert_eq!(Image::from(Global::Unset).to_css_string(), "unset");
    }
}
