//! Tag → renderer registry for content embeds.
//!
//! Authored documents request embeds with short tag names
//! (`codesandbox`, `swiper`, `aside`). The registry resolves a tag to
//! one of the closed set of embed components at content-compile time.
//! It is built once at the start of a site build from a fixed
//! declaration list and only read afterwards.

/// Default registry seeding.
pub mod defaults;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mdlog_core::EmbedError;

/// The closed set of embed components a tag can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedKind {
    /// Embedded external page in a sandboxed frame.
    Iframe,
    /// Image carousel with pagination and navigation.
    Carousel,
    /// Callout box wrapping free-form children.
    Aside,
}

impl EmbedKind {
    /// Resolves a component name from a declaration list. Exact match,
    /// case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Iframe" => Some(Self::Iframe),
            "Carousel" => Some(Self::Carousel),
            "Aside" => Some(Self::Aside),
            _ => None,
        }
    }

    /// The component's declaration-list name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iframe => "Iframe",
            Self::Carousel => "Carousel",
            Self::Aside => "Aside",
        }
    }
}

/// Mapping from content tag names to embed components.
///
/// Tags are unique keys; lookup is exact-match and case-sensitive.
/// Registering a tag that is already present overwrites it (last
/// registration wins), since the registry is reconstructed from a
/// declaration list on every build.
#[derive(Debug, Clone, Default)]
pub struct EmbedRegistry {
    entries: HashMap<String, EmbedKind>,
}

impl EmbedRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kind` under `tag`, overwriting any previous entry.
    pub fn register(&mut self, tag: impl Into<String>, kind: EmbedKind) {
        self.entries.insert(tag.into(), kind);
    }

    /// Resolves a tag to its component, if registered.
    pub fn resolve(&self, tag: &str) -> Option<EmbedKind> {
        self.entries.get(tag).copied()
    }

    /// Resolves a tag, signalling `UnknownTag` when nothing is
    /// registered under it. The surrounding pipeline decides whether
    /// that becomes a warning or a build failure.
    pub fn require(&self, tag: &str) -> Result<EmbedKind, EmbedError> {
        self.resolve(tag).ok_or_else(|| EmbedError::unknown_tag(tag))
    }

    /// Applies a declaration list over this registry, in order. The
    /// last binding for a given tag wins. Unknown component names are
    /// configuration errors, not content, and fail hard.
    pub fn apply(&mut self, overrides: &RegistryOverrides) -> Result<(), EmbedError> {
        for binding in &overrides.bindings {
            let kind = EmbedKind::from_name(&binding.component)
                .ok_or_else(|| EmbedError::UnknownComponent(binding.component.clone()))?;
            self.register(binding.tag.clone(), kind);
        }
        Ok(())
    }

    /// Iterates over registered (tag, component) pairs.
    pub fn tags(&self) -> impl Iterator<Item = (&str, EmbedKind)> {
        self.entries.iter().map(|(tag, kind)| (tag.as_str(), *kind))
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A declaration list of tag bindings, applied over a base registry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistryOverrides {
    /// Bindings in application order.
    pub bindings: Vec<EmbedBinding>,
}

/// One tag → component binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedBinding {
    /// Content tag name.
    pub tag: String,
    /// Component name (`Iframe`, `Carousel`, `Aside`).
    pub component: String,
}
