//! Embed renderers for the registered content tags.
//!
//! - `iframe`: sandboxed external-page embed (`codesandbox` tag).
//! - `carousel`: image carousel (`swiper` tag).
//! - `aside`: callout box restyled in place (`aside` tag).

/// Callout box restyling.
pub mod aside;
/// Image carousel rendering.
pub mod carousel;
/// Sandboxed iframe rendering.
pub mod iframe;
