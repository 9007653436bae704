use serde::Serialize;

pub const DEFAULT_WIDTH_UNIT: &str = "px";

/// A width as given by the caller: a bare number or a CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum Width {
    Number(f64),
    Css(String),
}

impl From<f64> for Width {
    fn from(value: f64) -> Self {
        Width::Number(value)
    }
}

impl From<i32> for Width {
    fn from(value: i32) -> Self {
        Width::Number(f64::from(value))
    }
}

impl From<u32> for Width {
    fn from(value: u32) -> Self {
        Width::Number(f64::from(value))
    }
}

impl From<&str> for Width {
    fn from(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Width::Number(number),
            _ => Width::Css(value.to_string()),
        }
    }
}

impl From<String> for Width {
    fn from(value: String) -> Self {
        Width::from(value.as_str())
    }
}

/// Inline style properties pinning an element to one width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineWidth {
    pub width: String,
    #[serde(rename = "min-width")]
    pub min_width: String,
    #[serde(rename = "max-width")]
    pub max_width: String,
}

/// Fixes `width`, `min-width` and `max-width` to the same value.
///
/// Numbers get `unit` appended; CSS strings such as `50%` or `auto` are used as-is.
///
/// ```
/// use frontutils::style_width;
///
/// assert_eq!(style_width(120, "px").width, "120px");
/// assert_eq!(style_width("12.5", "rem").max_width, "12.5rem");
/// assert_eq!(style_width("50%", "px").min_width, "50%");
/// ```
pub fn style_width(width: impl Into<Width>, unit: &str) -> InlineWidth {
    let value = match width.into() {
        Width::Number(number) => format!("{number}{unit}"),
        Width::Css(css) => css,
    };
    InlineWidth {
        width: value.clone(),
        min_width: value.clone(),
        max_width: value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(style_width(200.0, DEFAULT_WIDTH_UNIT).width, "200px");
        assert_eq!(style_width("200", DEFAULT_WIDTH_UNIT).width, "200px");
    }

    #[test]
    fn all_three_properties_match() {
        let style = style_width(64, "em");
        assert_eq!(style.width, "64em");
        assert_eq!(style.min_width, "64em");
        assert_eq!(style.max_width, "64em");
    }

    #[test]
    fn css_values_pass_through() {
        assert_eq!(style_width("auto", DEFAULT_WIDTH_UNIT).width, "auto");
        assert_eq!(
            style_width(String::from("calc(100% - 2rem)"), "px").width,
            "calc(100% - 2rem)"
        );
    }

    #[test]
    fn serializes_with_css_property_names() {
        let json = serde_json::to_value(style_width(10, "px")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "width": "10px", "min-width": "10px", "max-width": "10px" })
        );
    }
}
