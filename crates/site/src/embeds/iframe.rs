//! Sandboxed iframe embed.
//!
//! Renders an embedded external page in a fixed-size borderless frame.
//! The URL comes from first-party authored content, so it is taken at
//! face value once it is a syntactically valid absolute URL; scheme
//! and host are not vetted.

use std::fmt::Write as _;

use mdlog_core::{EmbedError, ensure_absolute_url};

/// Browser capabilities granted to the embedded page.
pub const IFRAME_ALLOW: &str = "accelerometer; ambient-light-sensor; camera; encrypted-media; \
     geolocation; gyroscope; hid; microphone; midi; payment; usb; vr; xr-spatial-tracking";

/// Sandbox permission set. Everything not listed, notably
/// `allow-top-navigation`, stays disallowed by omission.
pub const IFRAME_SANDBOX: &str =
    "allow-forms allow-modals allow-popups allow-presentation allow-same-origin allow-scripts";

const IFRAME_STYLE: &str = "width:100%;height:500px;border:0;border-radius:4px;overflow:hidden";

/// Renders the iframe embed for `url`.
///
/// # Example
///
/// ```
/// use mdlog_site::embeds::iframe::render_iframe;
///
/// let html = render_iframe("https://codesandbox.io/embed/demo").unwrap();
/// assert!(html.starts_with("<iframe"));
/// ```
pub fn render_iframe(url: &str) -> Result<String, EmbedError> {
    ensure_absolute_url(url)?;

    let mut html = String::with_capacity(256);
    write!(
        html,
        r#"<iframe src="{}" style="{}" allow="{}" sandbox="{}"></iframe>"#,
        html_escape::encode_double_quoted_attribute(url),
        IFRAME_STYLE,
        IFRAME_ALLOW,
        IFRAME_SANDBOX,
    )
    .ok();
    Ok(html)
}
