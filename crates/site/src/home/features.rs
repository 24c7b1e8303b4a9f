//! Homepage feature grid.
//!
//! The grid is a pure function of a fixed, compiled-in record list:
//! three columns (collapsing responsively), each with an icon, a
//! title, and a rich-text description.

use std::fmt::Write as _;

/// One entry in the homepage feature grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Column heading.
    pub title: String,
    /// Static graphic asset path.
    pub icon: String,
    /// Rich-text description (trusted, compiled into the build).
    pub description: String,
}

impl FeatureRecord {
    /// Creates a feature record.
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }
}

/// The stock three-feature list, in display order.
pub fn default_features() -> Vec<FeatureRecord> {
    vec![
        FeatureRecord::new(
            "Life",
            "/img/undraw_docusaurus_mountain.svg",
            "일상 및 <code> etc</code>",
        ),
        FeatureRecord::new("Tech", "/img/undraw_docusaurus_tree.svg", "기술 블로그"),
        FeatureRecord::new(
            "Project",
            "/img/undraw_docusaurus_react.svg",
            "개인 프로젝트",
        ),
    ]
}

/// Renders the feature grid. Pure; one column per record, input order.
pub fn render_features(features: &[FeatureRecord]) -> String {
    let mut html = String::with_capacity(features.len() * 256);
    html.push_str(r#"<section class="features"><div class="container"><div class="row">"#);

    for feature in features {
        html.push_str(r#"<div class="col col--4">"#);
        write!(
            html,
            r#"<div class="text--center"><img class="feature-svg" src="{}" role="img" alt="{}" /></div>"#,
            html_escape::encode_double_quoted_attribute(&feature.icon),
            html_escape::encode_double_quoted_attribute(&feature.title),
        )
        .ok();
        write!(
            html,
            r#"<div class="text--center padding-horiz--md"><h3>{}</h3><p>{}</p></div>"#,
            html_escape::encode_text(&feature.title),
            feature.description,
        )
        .ok();
        html.push_str("</div>");
    }

    html.push_str("</div></div></section>");
    html
}
