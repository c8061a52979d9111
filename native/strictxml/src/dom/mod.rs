//! DOM Module - Arena-based element tree
//!
//! The validator builds its tree here while it scans:
//! - Arena allocation for elements, never freed during a pass
//! - ElementId (u32) indices instead of parent/child pointers
//! - O(1) previous-sibling lookup via each element's sibling index

pub mod element;
pub mod tree;

pub use element::{is_name_byte, Element, ElementId, ROOT_NAME};
pub use tree::ElementTree;
