//! Validation errors
//!
//! Every variant means the same thing to a boolean caller: the document is
//! invalid. The variants only exist for diagnostics.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("document is empty")]
    Empty,

    /// A '<' arrived while the previous tag was still open (`<<a>`, `<a<b>`)
    #[error("'<' at byte {offset} while <{open}> is unterminated")]
    UnterminatedTag { offset: usize, open: String },

    /// A '>' arrived with no tag open
    #[error("stray '>' at byte {offset} outside of any tag")]
    StrayTagEnd { offset: usize },

    #[error("<{name}> closed at byte {offset} reaches depth {depth}, limit is {limit}")]
    DepthExceeded {
        offset: usize,
        name: String,
        depth: u32,
        limit: u32,
    },

    #[error("closing tag </{name}> at byte {offset} does not match <{expected}>")]
    MismatchedClose {
        offset: usize,
        name: String,
        expected: String,
    },

    /// A closer followed an opener of a different name (`<a><b></a></b>`)
    #[error("</{name}> at byte {offset} closes across unclosed <{open}>")]
    InterleavedClose {
        offset: usize,
        name: String,
        open: String,
    },

    #[error("<{name}> at byte {offset} is nested inside a tag of the same name")]
    NestedSameName { offset: usize, name: String },

    #[error("<{name}> at byte {offset} follows a sibling of the same name")]
    AdjacentSameName { offset: usize, name: String },

    #[error("<{name}> opened at byte {offset} is never closed")]
    Unclosed { offset: usize, name: String },
}

impl ValidationError {
    /// Stable identifier, used as the atom in NIF error tuples
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::UnterminatedTag { .. } => "unterminated_tag",
            ValidationError::StrayTagEnd { .. } => "stray_tag_end",
            ValidationError::DepthExceeded { .. } => "depth_exceeded",
            ValidationError::MismatchedClose { .. } => "mismatched_close",
            ValidationError::InterleavedClose { .. } => "interleaved_close",
            ValidationError::NestedSameName { .. } => "nested_same_name",
            ValidationError::AdjacentSameName { .. } => "adjacent_same_name",
            ValidationError::Unclosed { .. } => "unclosed",
        }
    }

    /// Byte offset the violation was detected at, if it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            ValidationError::Empty => None,
            ValidationError::UnterminatedTag { offset, .. }
            | ValidationError::StrayTagEnd { offset }
            | ValidationError::DepthExceeded { offset, .. }
            | ValidationError::MismatchedClose { offset, .. }
            | ValidationError::InterleavedClose { offset, .. }
            | ValidationError::NestedSameName { offset, .. }
            | ValidationError::AdjacentSameName { offset, .. }
            | ValidationError::Unclosed { offset, .. } => Some(*offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ValidationError::NestedSameName {
            offset: 3,
            name: "a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "<a> at byte 3 is nested inside a tag of the same name"
        );
        assert_eq!(ValidationError::Empty.to_string(), "document is empty");
    }

    #[test]
    fn test_kind_and_offset() {
        let err = ValidationError::StrayTagEnd { offset: 7 };
        assert_eq!(err.kind(), "stray_tag_end");
        assert_eq!(err.offset(), Some(7));
        assert_eq!(ValidationError::Empty.offset(), None);
    }
}
