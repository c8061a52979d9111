//! Arena-backed element tree
//!
//! Elements are appended and never removed, so an index is a stable handle
//! for the lifetime of one validation pass.

use super::element::{Element, ElementId};

/// Arena of elements; index 0 is always the synthetic root
#[derive(Debug)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl ElementTree {
    /// Id of the synthetic root
    pub const ROOT: ElementId = 0;

    /// Create a tree holding only the synthetic root
    pub fn new() -> Self {
        let mut elements = Vec::with_capacity(64);
        elements.push(Element::root());
        ElementTree { elements }
    }

    /// Get an element by ID
    #[inline]
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id as usize]
    }

    /// Get a mutable element by ID
    #[inline]
    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id as usize]
    }

    /// Create a new open element at `depth` and link it as the last child of `parent`
    pub fn create_child(&mut self, parent: ElementId, depth: u32, offset: usize) -> ElementId {
        let child_id = self.elements.len() as ElementId;
        let mut child = Element::open(parent, depth, offset);

        let siblings = &mut self.elements[parent as usize].children;
        child.sibling_index = siblings.len();
        siblings.push(child_id);

        self.elements.push(child);
        child_id
    }

    /// The sibling immediately before `id` in its parent's children
    pub fn previous_sibling(&self, id: ElementId) -> Option<ElementId> {
        let elem = self.get(id);
        let parent = self.get(elem.parent?);
        elem.sibling_index
            .checked_sub(1)
            .map(|i| parent.children[i])
    }

    /// Number of elements, including the root
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over the children of an element in document order
    pub fn children(&self, id: ElementId) -> impl Iterator<Item = &Element> + '_ {
        self.get(id).children.iter().map(move |&c| self.get(c))
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_root() {
        let tree = ElementTree::new();
        assert_eq!(tree.len(), 1);
        assert!(tree.get(ElementTree::ROOT).is_root());
        assert_eq!(tree.previous_sibling(ElementTree::ROOT), None);
    }

    #[test]
    fn test_create_child_links_parent() {
        let mut tree = ElementTree::new();
        let a = tree.create_child(ElementTree::ROOT, 1, 0);
        let b = tree.create_child(ElementTree::ROOT, 1, 3);

        assert_eq!(tree.get(ElementTree::ROOT).children, vec![a, b]);
        assert_eq!(tree.get(b).parent, Some(ElementTree::ROOT));
        assert_eq!(tree.get(b).sibling_index, 1);
        assert_eq!(tree.children(ElementTree::ROOT).count(), 2);
    }

    #[test]
    fn test_previous_sibling() {
        let mut tree = ElementTree::new();
        let a = tree.create_child(ElementTree::ROOT, 1, 0);
        let b = tree.create_child(ElementTree::ROOT, 1, 3);
        let nested = tree.create_child(b, 2, 6);

        assert_eq!(tree.previous_sibling(a), None);
        assert_eq!(tree.previous_sibling(b), Some(a));
        assert_eq!(tree.previous_sibling(nested), None);
    }
}
