//! Image carousel embed.
//!
//! One navigable slide per record, in authored order, with progress-bar
//! pagination and prev/next navigation controls. Each slide image is
//! wrapped in an anchor that opens the slide's `src` in a new browsing
//! context. Image load failures are left to the browser's native
//! broken-image behavior.

use std::fmt::Write as _;

use mdlog_core::{EmbedError, SlideRecord};

/// Renders the carousel embed for a non-empty slide sequence.
///
/// A carousel with zero slides has nothing to navigate and is rejected
/// with [`EmbedError::EmptySlideList`].
pub fn render_carousel(slides: &[SlideRecord]) -> Result<String, EmbedError> {
    if slides.is_empty() {
        return Err(EmbedError::EmptySlideList);
    }

    // Observability only; slide-change traces are the client runtime's job.
    log::debug!("carousel initialized with {} slides", slides.len());

    let mut html = String::with_capacity(slides.len() * 256);
    html.push_str(r#"<div class="swiper" data-pagination="progressbar" data-navigation="true">"#);
    html.push_str(r#"<div class="swiper-wrapper">"#);

    for slide in slides {
        let src = html_escape::encode_double_quoted_attribute(&slide.src);
        let title = html_escape::encode_text(&slide.title);

        html.push_str(r#"<div class="swiper-slide"><div class="card">"#);
        write!(
            html,
            r#"<div class="card__image"><a href="{src}" target="_blank" rel="noopener"><img src="{src}" style="object-fit:fill;width:100%" alt="{title}" /></a></div>"#,
        )
        .ok();
        write!(
            html,
            r#"<div class="card__body" style="white-space:pre-line"><h4>{title}</h4>"#,
        )
        .ok();
        if let Some(desc) = &slide.desc {
            write!(html, "<small>{}</small>", html_escape::encode_text(desc)).ok();
        }
        html.push_str("</div></div></div>");
    }

    html.push_str("</div>");
    html.push_str(r#"<div class="swiper-pagination"></div>"#);
    html.push_str(r#"<div class="swiper-button-prev"></div>"#);
    html.push_str(r#"<div class="swiper-button-next"></div>"#);
    html.push_str("</div>");

    Ok(html)
}
