//! Home page composition.
//!
//! Assembles the page chrome (hero banner with logo, title, and
//! tagline) above the feature grid. Evaluated once per site build; no
//! state, no failure modes beyond its inputs.

/// Feature grid records and rendering.
pub mod features;

use std::fmt::Write as _;

use mdlog_core::SiteConfig;

use features::{default_features, render_features};

/// Decorative marker appended to the hero tagline.
pub const TAGLINE_MARKER: &str = " 🔥";

const HERO_AVATAR: &str = "/img/docusaurus.png";

/// Composes the home page from the site title and tagline.
///
/// # Example
///
/// ```
/// use mdlog_site::home::compose_home_page;
///
/// let page = compose_home_page("MMlog", "Minmoo's site with Dinosaurs");
/// assert!(page.contains(r#"<h1 class="hero__title">MMlog</h1>"#));
/// ```
pub fn compose_home_page(site_title: &str, tagline: &str) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str(r#"<header class="hero hero--primary"><div class="container">"#);
    write!(
        html,
        r#"<div class="avatar avatar--vertical"><img class="avatar__photo avatar__photo--xl" src="{}" alt="" /></div>"#,
        HERO_AVATAR,
    )
    .ok();
    write!(
        html,
        r#"<h1 class="hero__title">{}</h1>"#,
        html_escape::encode_text(site_title),
    )
    .ok();
    write!(
        html,
        r#"<p class="hero__subtitle">{}{}</p>"#,
        html_escape::encode_text(tagline),
        TAGLINE_MARKER,
    )
    .ok();
    html.push_str("</div></header>");

    html.push_str("<main>");
    html.push_str(&render_features(&default_features()));
    html.push_str("</main>");

    html
}

/// Composes the home page from validated site configuration.
pub fn home_page(config: &SiteConfig) -> String {
    compose_home_page(&config.title, &config.tagline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_carries_title_and_suffixed_tagline() {
        let page = compose_home_page("MMlog", "Minmoo's site with Dinosaurs");
        assert!(page.contains(r#"<h1 class="hero__title">MMlog</h1>"#));
        assert!(
            page.contains(r#"<p class="hero__subtitle">Minmoo's site with Dinosaurs 🔥</p>"#)
        );
    }

    #[test]
    fn banner_sits_above_the_feature_grid() {
        let page = compose_home_page("MMlog", "tagline");
        let header = page.find("hero__title").unwrap();
        let grid = page.find(r#"class="features""#).unwrap();
        assert!(header < grid);
        assert_eq!(page.matches(r#"class="col col--4""#).count(), 3);
    }

    #[test]
    fn hero_shows_the_avatar_logo() {
        let page = compose_home_page("A", "B");
        assert!(page.contains(r#"<img class="avatar__photo avatar__photo--xl""#));
    }

    #[test]
    fn title_markup_is_escaped() {
        let page = compose_home_page("a<b", "x & y");
        assert!(page.contains("<h1 class=\"hero__title\">a&lt;b</h1>"));
        assert!(page.contains("x &amp; y 🔥"));
    }

    #[test]
    fn home_page_reads_config_fields() {
        let yaml = "title: MMlog\ntagline: \"Minmoo's site with Dinosaurs\"\nurl: https://mmlog.ml\nfavicon: img/favicon.ico\norganizationName: minmoo\nprojectName: mmlog\n";
        let config = SiteConfig::from_yaml(yaml).unwrap();
        let page = home_page(&config);
        assert!(page.contains("MMlog"));
        assert!(page.contains("Dinosaurs 🔥"));
    }
}
