//! Default registry seeding.
//!
//! The stock site recognizes three tags inside authored documents:
//! `codesandbox` (sandboxed iframe embed), `swiper` (image carousel),
//! and `aside` (callout box). Custom declaration lists are applied on
//! top of these defaults, with later bindings overriding earlier ones.

use once_cell::sync::Lazy;

use super::{EmbedKind, EmbedRegistry};

/// Creates the default embed registry.
///
/// # Example
///
/// ```
/// use mdlog_site::registry::defaults::default_registry;
/// use mdlog_site::registry::EmbedKind;
///
/// let registry = default_registry();
/// assert_eq!(registry.resolve("swiper"), Some(EmbedKind::Carousel));
/// ```
pub fn default_registry() -> EmbedRegistry {
    let mut registry = EmbedRegistry::new();
    registry.register("codesandbox", EmbedKind::Iframe);
    registry.register("swiper", EmbedKind::Carousel);
    registry.register("aside", EmbedKind::Aside);
    registry
}

static GLOBAL: Lazy<EmbedRegistry> = Lazy::new(default_registry);

/// The process-wide default registry, initialized once at build
/// startup and read-only thereafter.
pub fn global() -> &'static EmbedRegistry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_three_tags() {
        let registry = default_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.resolve("codesandbox"), Some(EmbedKind::Iframe));
        assert_eq!(registry.resolve("swiper"), Some(EmbedKind::Carousel));
        assert_eq!(registry.resolve("aside"), Some(EmbedKind::Aside));
    }

    #[test]
    fn unregistered_tag_is_not_found() {
        let registry = default_registry();
        assert_eq!(registry.resolve("video"), None);
        assert!(registry.require("video").is_err());
    }

    #[test]
    fn global_matches_defaults() {
        assert_eq!(global().len(), default_registry().len());
        assert_eq!(global().resolve("swiper"), Some(EmbedKind::Carousel));
    }
}
