//! Callout box embed.
//!
//! Unlike the iframe and carousel embeds, an aside keeps its free-form
//! children: the authored element is restyled in place. An optional
//! `type` attribute picks the callout flavor (`aside--note`,
//! `aside--tip`, ...) and an optional `title` attribute becomes a
//! heading prepended to the children. Both are consumed.

use lol_html::html_content::{ContentType, Element};

/// Derives the class list for an aside element.
pub fn aside_class(kind: Option<&str>, existing: Option<&str>) -> String {
    let mut classes = vec!["aside".to_string()];
    if let Some(kind) = kind
        && !kind.trim().is_empty()
    {
        classes.push(format!("aside--{}", kind.trim()));
    }
    if let Some(existing) = existing
        && !existing.trim().is_empty()
    {
        classes.push(existing.trim().to_string());
    }
    classes.join(" ")
}

/// Restyles an authored aside element in place.
pub fn restyle_aside(
    el: &mut Element<'_, '_>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let kind = el.get_attribute("type");
    let title = el.get_attribute("title");

    let class = aside_class(kind.as_deref(), el.get_attribute("class").as_deref());
    el.set_attribute("class", &class)?;

    if let Some(title) = title
        && !title.is_empty()
    {
        // Attribute text, so decode what the author wrote before
        // re-encoding it for the heading.
        let text = html_escape::decode_html_entities(&title);
        let heading = format!(
            r#"<div class="aside__title">{}</div>"#,
            html_escape::encode_text(&text)
        );
        el.prepend(&heading, ContentType::Html);
    }

    el.remove_attribute("type");
    el.remove_attribute("title");

    Ok(())
}
