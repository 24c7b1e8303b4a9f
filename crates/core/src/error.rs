use thiserror::Error;

/// Errors that can occur while resolving and rendering embeds.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A tag was resolved against the registry but nothing is registered under it.
    #[error("no renderer registered for tag <{0}>")]
    UnknownTag(String),
    /// A declaration list referenced a component name that does not exist.
    #[error("unknown embed component: {0}")]
    UnknownComponent(String),
    /// An embed tag is missing an attribute its renderer requires.
    #[error("<{tag}> embed is missing required attribute `{attr}`")]
    MissingAttribute {
        /// Tag the attribute belongs to.
        tag: String,
        /// Name of the missing attribute.
        attr: &'static str,
    },
    /// A URL attribute is not a syntactically valid absolute URL.
    #[error("not an absolute URL: {0:?}")]
    InvalidUrl(String),
    /// A carousel was given zero slides.
    #[error("carousel requires at least one slide")]
    EmptySlideList,
    /// A slide list attribute failed to parse as JSON.
    #[error("slide list is not a valid JSON array of slides: {0}")]
    SlideList(String),
    /// Site configuration failed to parse.
    #[error("site configuration error: {0}")]
    Config(String),
    /// A required site configuration field is absent or empty.
    #[error("missing required site configuration field `{0}`")]
    MissingConfig(&'static str),
    /// The HTML rewriting pass itself failed.
    #[error("embed rewrite failed: {0}")]
    Rewrite(String),
    /// IO error while loading configuration or content.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmbedError {
    /// Create an unknown-tag error.
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag(tag.into())
    }

    /// Create a missing-attribute error.
    pub fn missing_attribute(tag: impl Into<String>, attr: &'static str) -> Self {
        Self::MissingAttribute {
            tag: tag.into(),
            attr,
        }
    }

    /// Create a configuration parse error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
