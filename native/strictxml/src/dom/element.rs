//! Element representation
//!
//! Uses ElementId (u32) for compact references into the validator's arena.

/// Compact element identifier (index into arena)
pub type ElementId = u32;

/// Name given to the synthetic root element
pub const ROOT_NAME: &str = "root";

/// One tag occurrence (opening, closing or self-closing) in the document tree
#[derive(Debug, Clone)]
pub struct Element {
    /// Parent element (None for the synthetic root)
    pub parent: Option<ElementId>,
    /// Child elements in document order
    pub children: Vec<ElementId>,
    /// Position of this element within its parent's children
    pub sibling_index: usize,
    /// Tag name accumulated so far (ASCII letters, digits and '-')
    pub name: String,
    /// Nesting level; reconciled (decremented) when a closer completes
    pub depth: u32,
    /// A '/' has been seen for this element
    pub close_tag: bool,
    /// The '/' belongs to an opening tag (`<name/>`)
    pub self_close_tag: bool,
    /// The terminating '>' has been consumed
    pub completed: bool,
    /// Byte offset of the opening '<' (0 for the root)
    pub offset: usize,
}

impl Element {
    /// Create the synthetic root: depth 0, already completed
    pub fn root() -> Self {
        Element {
            parent: None,
            children: Vec::new(),
            sibling_index: 0,
            name: ROOT_NAME.to_string(),
            depth: 0,
            close_tag: false,
            self_close_tag: false,
            completed: true,
            offset: 0,
        }
    }

    /// Create an element whose '<' was just consumed
    pub fn open(parent: ElementId, depth: u32, offset: usize) -> Self {
        Element {
            parent: Some(parent),
            children: Vec::new(),
            sibling_index: 0,
            name: String::new(),
            depth,
            close_tag: false,
            self_close_tag: false,
            completed: false,
            offset,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_closer(&self) -> bool {
        self.close_tag
    }

    /// Append a byte to the name if it is a name character and the tag is still open.
    /// Returns whether the byte was taken.
    #[inline]
    pub fn push_name_byte(&mut self, b: u8) -> bool {
        if self.completed || !is_name_byte(b) {
            return false;
        }
        self.name.push(b as char);
        true
    }
}

/// ASCII letters, digits and hyphen
#[inline]
pub fn is_name_byte(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_creation() {
        let root = Element::root();
        assert!(root.is_root());
        assert!(root.completed);
        assert_eq!(root.depth, 0);
        assert_eq!(root.name, "root");
    }

    #[test]
    fn test_open_element() {
        let elem = Element::open(0, 1, 4);
        assert_eq!(elem.parent, Some(0));
        assert!(!elem.completed);
        assert!(!elem.is_closer());
        assert_eq!(elem.offset, 4);
        assert!(elem.name.is_empty());
    }

    #[test]
    fn test_name_bytes_filtered() {
        let mut elem = Element::open(0, 1, 0);
        for &b in b"my-Tag_2 x:y" {
            elem.push_name_byte(b);
        }
        assert_eq!(elem.name, "my-Tag2xy");

        elem.completed = true;
        assert!(!elem.push_name_byte(b'z'));
        assert_eq!(elem.name, "my-Tag2xy");
    }
}
