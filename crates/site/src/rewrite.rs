//! Embed rewrite pipeline.
//!
//! Runs one pass over an authored document: for every registered tag
//! the registry resolves the component and the renderer is invoked
//! with the tag's attributes, its output replacing the tag in place.
//! Tags not present in the registry are left untouched for the host
//! generator's default handling. Fenced code blocks are masked before
//! the pass so embed tags inside code examples survive verbatim.

use std::borrow::Cow;

use lol_html::errors::RewritingError;
use lol_html::html_content::{ContentType, Element};
use lol_html::{ElementContentHandlers, RewriteStrSettings, Selector, rewrite_str};

use mdlog_core::{EmbedError, parse_slide_list, protect_fences};

use crate::embeds::{aside, carousel, iframe};
use crate::registry::{EmbedKind, EmbedRegistry};

/// Rewrites all registered embed tags in `source`.
///
/// Renderer input violations (missing attributes, malformed slide
/// lists, non-absolute URLs) fail the pass; the host build surfaces
/// the error.
pub fn rewrite_embeds(source: &str, registry: &EmbedRegistry) -> Result<String, EmbedError> {
    if registry.is_empty() {
        return Ok(source.to_string());
    }

    let (masked, fences) = protect_fences(source);
    log::debug!(
        "rewriting embeds: {} registered tags, {} masked fences",
        registry.len(),
        fences.len()
    );

    let mut handlers: Vec<(Cow<'_, Selector>, ElementContentHandlers<'_>)> =
        Vec::with_capacity(registry.len());
    for (tag, kind) in registry.tags() {
        let selector: Selector = tag.parse().map_err(|err| {
            EmbedError::Rewrite(format!("cannot build a selector for tag <{tag}>: {err}"))
        })?;
        handlers.push((Cow::Owned(selector), handler_for(kind)));
    }

    let rewritten = rewrite_str(
        &masked,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )
    .map_err(unwrap_rewriting_error)?;

    Ok(fences.restore(&rewritten))
}

// The closure parameter needs an explicit type here; unlike the
// `element!` macro, building the handler pair by hand leaves rustc
// nothing to infer `el` from.
fn handler_for(kind: EmbedKind) -> ElementContentHandlers<'static> {
    match kind {
        EmbedKind::Iframe => ElementContentHandlers::default().element(|el: &mut Element<'_, '_>| {
            let raw = el
                .get_attribute("url")
                .ok_or_else(|| EmbedError::missing_attribute(el.tag_name(), "url"))?;
            let url = html_escape::decode_html_entities(&raw);
            let html = iframe::render_iframe(&url)?;
            replace_embed_tag(el, &html);
            Ok(())
        }),
        EmbedKind::Carousel => ElementContentHandlers::default().element(|el: &mut Element<'_, '_>| {
            let raw = el
                .get_attribute("list")
                .ok_or_else(|| EmbedError::missing_attribute(el.tag_name(), "list"))?;
            let json = html_escape::decode_html_entities(&raw);
            let slides = parse_slide_list(&json)?;
            let html = carousel::render_carousel(&slides)?;
            replace_embed_tag(el, &html);
            Ok(())
        }),
        EmbedKind::Aside => ElementContentHandlers::default().element(aside::restyle_aside),
    }
}

/// Swaps an embed tag for rendered HTML.
///
/// Authored embeds are often written void-style (`<swiper ... />`),
/// which the HTML parser treats as an unclosed start tag whose
/// "children" run to the end of the document. Emitting before the tag
/// and removing only the tag markup keeps that trailing content
/// intact, instead of letting `replace` swallow it.
fn replace_embed_tag(el: &mut Element<'_, '_>, html: &str) {
    el.before(html, ContentType::Html);
    el.remove_and_keep_content();
}

fn unwrap_rewriting_error(err: RewritingError) -> EmbedError {
    match err {
        RewritingError::ContentHandlerError(inner) => match inner.downcast::<EmbedError>() {
            Ok(embed) => *embed,
            Err(other) => EmbedError::Rewrite(other.to_string()),
        },
        other => EmbedError::Rewrite(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::defaults::default_registry;

    #[test]
    fn codesandbox_tag_becomes_iframe() {
        let source =
            r#"<p>demo</p><codesandbox url="https://codesandbox.io/embed/x"></codesandbox>"#;
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains(r#"<iframe src="https://codesandbox.io/embed/x""#));
        assert!(!out.contains("<codesandbox"));
        assert!(out.contains("<p>demo</p>"));
    }

    #[test]
    fn void_style_embed_keeps_trailing_content() {
        let source = "<codesandbox url=\"https://example.com/x\" />\n\nMore prose after.";
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains("<iframe"));
        assert!(out.contains("More prose after."));
    }

    #[test]
    fn swiper_tag_becomes_carousel() {
        let source = r#"<swiper list='[{"src":"/img/a.png","title":"A"},{"src":"/img/b.png","title":"B"}]'></swiper>"#;
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert_eq!(out.matches(r#"class="swiper-slide""#).count(), 2);
        assert!(out.contains(r#"href="/img/a.png""#));
        assert!(!out.contains("<swiper"));
    }

    #[test]
    fn entity_encoded_slide_list_is_decoded() {
        let source = r#"<swiper list="[{&quot;src&quot;:&quot;/img/a.png&quot;,&quot;title&quot;:&quot;A&quot;}]"></swiper>"#;
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains(r#"href="/img/a.png""#));
    }

    #[test]
    fn aside_is_restyled_in_place_with_children() {
        let source = r#"<aside type="note" title="Heads up"><p>body</p></aside>"#;
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains(r#"<aside class="aside aside--note">"#));
        assert!(out.contains(r#"<div class="aside__title">Heads up</div>"#));
        assert!(out.contains("<p>body</p>"));
        assert!(!out.contains("type=\"note\""));
    }

    #[test]
    fn mixed_embeds_rewrite_in_one_pass() {
        let source = concat!(
            r#"<codesandbox url="https://codesandbox.io/embed/x"></codesandbox>"#,
            r#"<swiper list='[{"src":"/img/a.png","title":"A"}]'></swiper>"#,
            r#"<aside type="tip"><p>body</p></aside>"#,
        );
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains("<iframe"));
        assert!(out.contains(r#"class="swiper-slide""#));
        assert!(out.contains(r#"<aside class="aside aside--tip">"#));
    }

    #[test]
    fn aside_title_markup_is_escaped() {
        let source = r#"<aside title="<b>bold</b> &amp; more"><p>body</p></aside>"#;
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains(
            r#"<div class="aside__title">&lt;b&gt;bold&lt;/b&gt; &amp; more</div>"#
        ));
        assert!(!out.contains("<b>bold</b>"));
    }

    #[test]
    fn unregistered_tags_pass_through() {
        let source = r#"<video src="/clip.mp4"></video>"#;
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn embeds_inside_code_fences_survive_verbatim() {
        let source = "Usage:\n\n```html\n<codesandbox url=\"https://example.com/x\" />\n```\n";
        let out = rewrite_embeds(source, &default_registry()).unwrap();
        assert!(out.contains("<codesandbox url=\"https://example.com/x\" />"));
        assert!(!out.contains("<iframe"));
    }

    #[test]
    fn missing_url_attribute_fails_the_pass() {
        let err = rewrite_embeds("<codesandbox></codesandbox>", &default_registry()).unwrap_err();
        assert!(
            matches!(err, EmbedError::MissingAttribute { ref tag, attr } if tag == "codesandbox" && attr == "url")
        );
    }

    #[test]
    fn relative_embed_url_fails_the_pass() {
        let err = rewrite_embeds(
            r#"<codesandbox url="/embed/x"></codesandbox>"#,
            &default_registry(),
        )
        .unwrap_err();
        assert!(matches!(err, EmbedError::InvalidUrl(_)));
    }

    #[test]
    fn empty_slide_list_fails_the_pass() {
        let err =
            rewrite_embeds("<swiper list='[]'></swiper>", &default_registry()).unwrap_err();
        assert!(matches!(err, EmbedError::EmptySlideList));
    }

    #[test]
    fn empty_registry_is_a_passthrough() {
        let source = r#"<swiper list='[]'></swiper>"#;
        let out = rewrite_embeds(source, &EmbedRegistry::new()).unwrap();
        assert_eq!(out, source);
    }
}
