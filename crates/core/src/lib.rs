#![deny(missing_docs)]
//! mdlog core: error taxonomy, site configuration, slide records, and
//! code-fence masking shared by the rendering engine.

/// Site configuration model and YAML loading.
pub mod config;
/// Core error types.
pub mod error;
/// Code fence masking for the rewrite pipeline.
pub mod fences;
/// Carousel slide records and slide-list parsing.
pub mod slides;
/// Absolute-URL syntax checking.
pub mod url;

pub use config::{
    Footer, FooterLink, FooterStyle, LinkGroup, LinkTarget, Logo, NavItem, NavPosition, NavTarget,
    Navbar, PrismThemes, SiteConfig,
};
pub use error::EmbedError;
pub use fences::{FenceMask, protect_fences};
pub use slides::{SlideRecord, parse_slide_list};
pub use url::ensure_absolute_url;
