//! Carousel slide records.
//!
//! The carousel embed takes its slides from a JSON `list` attribute
//! authored alongside the tag. Slides are an ordered sequence; display
//! order is authored order.

use serde::{Deserialize, Serialize};

use crate::error::EmbedError;

/// One item in an image carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Image source; also the click-through target of the slide.
    pub src: String,
    /// Slide title, shown in the card body.
    pub title: String,
    /// Optional description below the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Parses the JSON payload of a carousel `list` attribute.
///
/// The payload must be a JSON array of slide objects with at least one
/// entry. An empty array is rejected: a carousel without slides has
/// nothing to navigate.
///
/// # Examples
///
/// ```
/// use mdlog_core::slides::parse_slide_list;
///
/// let slides = parse_slide_list(r#"[{"src": "/img/a.png", "title": "A"}]"#).unwrap();
/// assert_eq!(slides.len(), 1);
/// assert_eq!(slides[0].title, "A");
/// ```
pub fn parse_slide_list(raw: &str) -> Result<Vec<SlideRecord>, EmbedError> {
    let slides: Vec<SlideRecord> =
        serde_json::from_str(raw).map_err(|err| EmbedError::SlideList(err.to_string()))?;

    if slides.is_empty() {
        return Err(EmbedError::EmptySlideList);
    }

    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slides_in_authored_order() {
        let raw = r#"[
            {"src": "/img/one.png", "title": "One", "desc": "first"},
            {"src": "/img/two.png", "title": "Two"}
        ]"#;
        let slides = parse_slide_list(raw).unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].src, "/img/one.png");
        assert_eq!(slides[0].desc.as_deref(), Some("first"));
        assert_eq!(slides[1].title, "Two");
        assert_eq!(slides[1].desc, None);
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = parse_slide_list("[]").unwrap_err();
        assert!(matches!(err, EmbedError::EmptySlideList));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse_slide_list("[{").unwrap_err();
        assert!(matches!(err, EmbedError::SlideList(_)));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = parse_slide_list(r#"[{"src": "/img/a.png"}]"#).unwrap_err();
        assert!(matches!(err, EmbedError::SlideList(_)));
    }
}
