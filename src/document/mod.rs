//! Search result documents, their normalized text, and relevance feedback.
//!
//! - [`Document`]: one ranked result, immutable once built.
//! - [`SearchResult`]: the raw item shape a result provider returns.
//! - [`DocumentNormalizer`]: letters/apostrophe/space text for term counting.
//! - [`RelevanceFeedback`]: the relevant / not-relevant partition of a result set.

#[allow(clippy::module_inception)]
pub mod document;
pub mod feedback;
pub mod normalizer;

pub use document::{Document, DocumentBuilder, SearchResult};
pub use feedback::{Relevance, RelevanceFeedback};
pub use normalizer::DocumentNormalizer;
