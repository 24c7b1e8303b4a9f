//! Site configuration model.
//!
//! The configuration surface is consumed, not interpreted: titles,
//! navigation entries, footer link groups, and theme names are passed
//! through to the host generator and theme for display. Only presence
//! of the required metadata (and the shape of the site URL) is
//! validated here; everything else is opaque.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EmbedError;
use crate::url::ensure_absolute_url;

/// Top-level site configuration, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title, shown in the hero banner and navbar.
    pub title: String,
    /// Site tagline, shown under the hero title.
    pub tagline: String,
    /// Canonical site URL (absolute).
    pub url: String,
    /// Base path the site is served under.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Favicon asset path.
    pub favicon: String,
    /// Organization (or user) identifier.
    pub organization_name: String,
    /// Project identifier.
    pub project_name: String,
    /// Navbar configuration.
    #[serde(default)]
    pub navbar: Navbar,
    /// Footer configuration.
    #[serde(default)]
    pub footer: Footer,
    /// Syntax-highlighting theme pair.
    #[serde(default)]
    pub prism: PrismThemes,
}

/// Navbar configuration: optional branding plus link entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    /// Navbar title; falls back to the site title when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Navbar logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Navigation entries in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// A logo image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    /// Alt text for the image.
    pub alt: String,
    /// Image asset path.
    pub src: String,
}

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Visible label.
    pub label: String,
    /// Link target.
    #[serde(flatten)]
    pub target: NavTarget,
    /// Which side of the navbar the entry sits on.
    #[serde(default)]
    pub position: NavPosition,
}

/// A navbar link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavTarget {
    /// A documentation page, referenced by doc id.
    Doc {
        /// Id of the target doc.
        #[serde(rename = "docId")]
        doc_id: String,
    },
    /// An internal path.
    To {
        /// Site-relative path.
        to: String,
    },
    /// An external link.
    Href {
        /// Absolute URL.
        href: String,
    },
}

/// Navbar entry placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    /// Left-aligned (default).
    #[default]
    Left,
    /// Right-aligned.
    Right,
}

/// Footer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    /// Footer color style.
    #[serde(default)]
    pub style: FooterStyle,
    /// Link groups in display order.
    #[serde(default)]
    pub links: Vec<LinkGroup>,
    /// Copyright line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Footer color style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    /// Dark footer (default).
    #[default]
    Dark,
    /// Light footer.
    Light,
}

/// A titled group of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkGroup {
    /// Group heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<FooterLink>,
}

/// One footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    /// Visible label.
    pub label: String,
    /// Link target.
    #[serde(flatten)]
    pub target: LinkTarget,
}

/// A footer link target: internal path or external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkTarget {
    /// Site-relative path.
    To {
        /// Internal path.
        to: String,
    },
    /// External link.
    Href {
        /// Absolute URL.
        href: String,
    },
}

/// Syntax-highlighting theme pair (light/dark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismThemes {
    /// Light theme name.
    #[serde(default = "default_light_theme")]
    pub theme: String,
    /// Dark theme name.
    #[serde(default = "default_dark_theme")]
    pub dark_theme: String,
}

impl Default for PrismThemes {
    fn default() -> Self {
        Self {
            theme: default_light_theme(),
            dark_theme: default_dark_theme(),
        }
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_light_theme() -> String {
    "github".to_string()
}

fn default_dark_theme() -> String {
    "dracula".to_string()
}

impl SiteConfig {
    /// Parses and validates site configuration from YAML text.
    pub fn from_yaml(input: &str) -> Result<Self, EmbedError> {
        let config: SiteConfig =
            serde_yaml::from_str(input).map_err(|err| EmbedError::config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads site configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Checks that required metadata is present and the site URL is absolute.
    pub fn validate(&self) -> Result<(), EmbedError> {
        for (field, value) in [
            ("title", &self.title),
            ("tagline", &self.tagline),
            ("url", &self.url),
            ("baseUrl", &self.base_url),
            ("favicon", &self.favicon),
            ("organizationName", &self.organization_name),
            ("projectName", &self.project_name),
        ] {
            if value.trim().is_empty() {
                return Err(EmbedError::MissingConfig(field));
            }
        }

        ensure_absolute_url(&self.url)
    }
}
