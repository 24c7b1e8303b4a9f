#![deny(missing_docs)]
//! mdlog site engine: embed registry, embed renderers, rewrite
//! pipeline, and home page composition.

/// Embed renderers (iframe, carousel, aside).
pub mod embeds;
/// Home page composer and feature grid.
pub mod home;
/// Tag → renderer registry.
pub mod registry;
/// Embed rewrite pipeline.
pub mod rewrite;

pub use embeds::carousel::render_carousel;
pub use embeds::iframe::{IFRAME_ALLOW, IFRAME_SANDBOX, render_iframe};
pub use home::{TAGLINE_MARKER, compose_home_page, home_page};
pub use registry::defaults::{default_registry, global};
pub use registry::{EmbedBinding, EmbedKind, EmbedRegistry, RegistryOverrides};
pub use rewrite::rewrite_embeds;
