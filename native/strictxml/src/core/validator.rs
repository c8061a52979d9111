//! Validator - single-pass state machine over the input bytes
//!
//! Tokenizing, tree building and rule checking happen in the same loop.
//! The cursor (`current`) is the element being read, `previous` is whatever
//! the cursor pointed at before its last move. The first violation poisons
//! the validator; there is no recovery or backtracking.
//!
//! Input may arrive in arbitrary chunks; the state between chunks is the
//! cursor plus the tree, so splitting never changes the result.

use log::{debug, trace};

use super::config::ValidatorConfig;
use super::scanner::{Scanner, TAG_CLOSE, TAG_END, TAG_START};
use crate::dom::{ElementId, ElementTree, ROOT_NAME};
use crate::error::ValidationError;

/// Streaming validator
pub struct Validator {
    config: ValidatorConfig,
    tree: ElementTree,
    /// Element presently being read or validated
    current: ElementId,
    /// Element the cursor held before its last move
    previous: Option<ElementId>,
    /// Bytes consumed across all chunks
    consumed: usize,
    /// First violation seen; sticky
    failure: Option<ValidationError>,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Validator {
            config,
            tree: ElementTree::new(),
            current: ElementTree::ROOT,
            previous: None,
            consumed: 0,
            failure: None,
        }
    }

    /// Feed the next chunk of input
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), ValidationError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let base = self.consumed;
        let mut scanner = Scanner::new(chunk);
        loop {
            // Between tags only the markers matter
            if self.tree.get(self.current).completed && !scanner.skip_to_markup() {
                break;
            }
            let offset = base + scanner.position();
            let Some(b) = scanner.next_byte() else {
                break;
            };
            if let Err(err) = self.step(b, offset) {
                debug!("document rejected: {}", err);
                self.consumed = base + scanner.position();
                self.failure = Some(err.clone());
                return Err(err);
            }
        }

        self.consumed = base + chunk.len();
        Ok(())
    }

    /// End of input: valid only if every tag returned the cursor to the root
    pub fn finish(self) -> Result<(), ValidationError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        if self.consumed == 0 {
            return Err(ValidationError::Empty);
        }
        if self.current != ElementTree::ROOT {
            let open = self.tree.get(self.current);
            let err = ValidationError::Unclosed {
                offset: open.offset,
                name: open.name.clone(),
            };
            debug!("document rejected: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Total bytes consumed so far
    #[inline]
    pub fn bytes_consumed(&self) -> usize {
        self.consumed
    }

    /// Number of tag occurrences seen (the root is not counted)
    #[inline]
    pub fn element_count(&self) -> usize {
        self.tree.len() - 1
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    fn step(&mut self, b: u8, offset: usize) -> Result<(), ValidationError> {
        match b {
            TAG_START => self.start_tag(offset),
            TAG_CLOSE => {
                self.close_marker();
                Ok(())
            }
            TAG_END => self.end_tag(offset),
            _ => {
                // Off-grammar bytes are dropped, not errors
                self.tree.get_mut(self.current).push_name_byte(b);
                Ok(())
            }
        }
    }

    fn start_tag(&mut self, offset: usize) -> Result<(), ValidationError> {
        let current = self.tree.get(self.current);
        if !current.completed {
            return Err(ValidationError::UnterminatedTag {
                offset,
                open: current.name.clone(),
            });
        }

        // After a closer the cursor already sits on the parent, so new tags
        // attach to the root or to the parent of the current tag.
        let depth = current.depth.saturating_add(1);
        let parent = current.parent.unwrap_or(ElementTree::ROOT);
        let child = self.tree.create_child(parent, depth, offset);
        trace!("tag at byte {} depth {}", offset, depth);

        self.move_to(child);
        Ok(())
    }

    fn close_marker(&mut self) {
        // '/' in top-level text
        if self.current == ElementTree::ROOT {
            return;
        }

        let differs = self.previous_name() != self.tree.get(self.current).name;
        let elem = self.tree.get_mut(self.current);
        elem.close_tag = true;
        if differs {
            elem.self_close_tag = true;
        }
    }

    fn end_tag(&mut self, offset: usize) -> Result<(), ValidationError> {
        if self.current == ElementTree::ROOT {
            return Err(ValidationError::StrayTagEnd { offset });
        }

        let id = self.current;
        let elem = self.tree.get_mut(id);
        elem.completed = true;
        if elem.is_closer() {
            self.end_closer(id)
        } else {
            self.end_opener(id)
        }
    }

    fn end_closer(&mut self, id: ElementId) -> Result<(), ValidationError> {
        let limit = self.config.depth_limit();
        let elem = self.tree.get_mut(id);
        elem.depth = elem.depth.saturating_sub(1);

        let elem = self.tree.get(id);
        trace!("</{}> depth {}", elem.name, elem.depth);
        if elem.depth > limit {
            return Err(ValidationError::DepthExceeded {
                offset: elem.offset,
                name: elem.name.clone(),
                depth: elem.depth,
                limit,
            });
        }

        let expected = self.previous_name();
        if !elem.self_close_tag && expected != elem.name {
            return Err(ValidationError::MismatchedClose {
                offset: elem.offset,
                name: elem.name.clone(),
                expected: expected.to_string(),
            });
        }

        // <a><b></a></b>
        if let Some(sib) = self.tree.previous_sibling(id) {
            let sib = self.tree.get(sib);
            if !sib.is_closer() && sib.name != elem.name {
                return Err(ValidationError::InterleavedClose {
                    offset: elem.offset,
                    name: elem.name.clone(),
                    open: sib.name.clone(),
                });
            }
        }

        let parent = elem.parent.unwrap_or(ElementTree::ROOT);
        self.move_to(parent);
        Ok(())
    }

    fn end_opener(&self, id: ElementId) -> Result<(), ValidationError> {
        let elem = self.tree.get(id);
        trace!("<{}> depth {}", elem.name, elem.depth);

        let parent = self.tree.get(elem.parent.unwrap_or(ElementTree::ROOT));
        if elem.name == parent.name {
            return Err(ValidationError::NestedSameName {
                offset: elem.offset,
                name: elem.name.clone(),
            });
        }

        if let Some(sib) = self.tree.previous_sibling(id) {
            if self.tree.get(sib).name == elem.name {
                return Err(ValidationError::AdjacentSameName {
                    offset: elem.offset,
                    name: elem.name.clone(),
                });
            }
        }
        Ok(())
    }

    #[inline]
    fn move_to(&mut self, id: ElementId) {
        self.previous = Some(self.current);
        self.current = id;
    }

    fn previous_name(&self) -> &str {
        match self.previous {
            Some(id) => &self.tree.get(id).name,
            None => ROOT_NAME,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}
