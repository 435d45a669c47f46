//! Cross-category value tests.

use super::*;

#[test]
fn test_global_keywords() {
    let cases = [
        (Global::Inherit, "inherit"),
        (Global::Initial, "initial"),
        (Global::Unset, "unset"),
        (Global::Revert, "revert"),
    ];
    for (global, want) in cases {
        assert_eq!(global.to_css_string(), want);
        assert_eq!(Global::from_css(want), Some(global));
    }
    assert_eq!(Auto.to_css_string(), "auto");
}

#[test]
fn test_every_category_accepts_global_keywords() {
    for &global in Global::ALL {
        let want = global.as_str();
        let rendered = [
            Value::from(Color::from(global)),
            Value::from(Size::from(global)),
            Value::from(BorderStyle::from(global)),
            Value::from(BorderWidth::from(global)),
            Value::from(Display::from(global)),
            Value::from(FlexDirection::from(global)),
            Value::from(Image::from(global)),
            Value::from(ZIndex::from(global)),
            Value::from(global),
        ];
        for value in rendered {
            assert_eq!(value.to_css_string(), want, "{:?}", value);
        }
    }
}

#[test]
fn test_every_category_accepts_auto() {
    let rendered = [
        Value::from(Color::from(Auto)),
        Value::from(Size::from(Auto)),
        Value::from(BorderStyle::from(Auto)),
        Value::from(BorderWidth::from(Auto)),
        Value::from(Display::from(Auto)),
        Value::from(FlexDirection::from(Auto)),
        Value::from(Image::from(Auto)),
        Value::from(ZIndex::from(Auto)),
        Value::from(Auto),
    ];
    for value in rendered {
        assert_eq!(value.to_css_string(), "auto", "{:?}", value);
    }
}

#[test]
fn test_keyword_constants_render_lowercase() {
    let mut keywords: Vec<String> = Vec::new();
    keywords.extend(NamedColor::ALL.iter().map(ToCss::to_css_string));
    keywords.extend(BorderStyle::KEYWORDS.iter().map(ToCss::to_css_string));
    keywords.extend(BorderWidth::KEYWORDS.iter().map(ToCss::to_css_string));
    keywords.extend(Display::KEYWORDS.iter().map(ToCss::to_css_string));
    keywords.extend(FlexDirection::KEYWORDS.iter().map(ToCss::to_css_string));
    keywords.extend(Global::ALL.iter().map(ToCss::to_css_string));

    for keyword in &keywords {
        assert!(!keyword.is_empty());
        assert_eq!(keyword, &keyword.to_ascii_lowercase());
        assert!(
            keyword.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "unexpected character in {}",
            keyword
        );
    }
}

#[test]
fn test_named_colors_match_their_variant_names() {
    for color in NamedColor::ALL {
        let variant = format!("{:?}", color).to_ascii_lowercase();
        assert_eq!(color.as_str(), variant);
    }
}

#[test]
fn test_value_conversions() {
    assert_eq!(Value::from(NamedColor::Red).to_css_string(), "red");
    assert_eq!(Value::from(px(3)).to_css_string(), "3px");
    assert_eq!(Value::from(42).to_css_string(), "42");
    assert_eq!(Value::from(-3i64).to_css_string(), "-3");
    assert_eq!(Value::number(1.5).to_css_string(), "1.5");
    assert_eq!(Value::from("space-between").to_css_string(), "space-between");
    assert_eq!(Value::keyword(String::from("bold")).to_css_string(), "bold");
    assert_eq!(Value::from(url("a.png")).to_css_string(), "url('a.png')");
}

#[test]
fn test_display_matches_to_css() {
    let value = Value::from(hsla(200, 0.5, 0.5, 0.5));
    assert_eq!(value.to_string(), value.to_css_string());
    assert_eq!(format!("{}", NamedColor::AliceBlue), "aliceblue");
    assert_eq!(format!("{}-{}", px(1), Unit::Rem), "1px-rem");
}

#[test]
fn test_rendering_is_idempotent() {
    let value = Value::from(rgba(10, 20, 30, 0.25));
    let first = value.to_css_string();
    let second = value.to_css_string();
    assert_eq!(first, second);
    assert_eq!(first, "rgba(10, 20, 30, 0.25)");
}
