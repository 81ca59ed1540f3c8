//! Element tree for pointer hit testing.
//!
//! The page registers every element it draws, children after their parents,
//! so the last element containing a point is the innermost one.

use ratatui::layout::{Position, Rect};

/// Index of an element inside a [`HitMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// What an element is. Only buttons and links are interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Page,
    Nav,
    Section,
    Block,
    Text,
    Button,
    Link,
}

impl ElementKind {
    pub fn is_interactive(self) -> bool {
        matches!(self, ElementKind::Button | ElementKind::Link)
    }
}

#[derive(Debug, Clone)]
struct Element<A> {
    kind: ElementKind,
    area: Rect,
    parent: Option<ElementId>,
    action: Option<A>,
}

/// Elements drawn in the last frame, with parent links and optional actions.
#[derive(Debug, Clone)]
pub struct HitMap<A = ()> {
    elements: Vec<Element<A>>,
}

impl<A> Default for HitMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> HitMap<A> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Forget every element; called at the start of each frame.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Register an element and return its id.
    pub fn push(
        &mut self,
        kind: ElementKind,
        area: Rect,
        parent: Option<ElementId>,
        action: Option<A>,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            kind,
            area,
            parent,
            action,
        });
        id
    }

    /// The innermost element containing the cell at `(x, y)`.
    pub fn target_at(&self, x: u16, y: u16) -> Option<ElementId> {
        let position = Position::new(x, y);
        self.elements
            .iter()
            .rposition(|element| element.area.contains(position))
            .map(ElementId)
    }

    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.elements.get(id.0).map(|e| e.kind)
    }

    pub fn area(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id.0).map(|e| e.area)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id.0).and_then(|e| e.parent)
    }

    pub fn action(&self, id: ElementId) -> Option<&A> {
        self.elements.get(id.0).and_then(|e| e.action.as_ref())
    }

    /// The element itself followed by each of its ancestors.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.elements.get(id.0).map(|_| id), |&current| {
            self.parent(current)
        })
    }

    /// The nearest button or link that is `id` or contains it.
    pub fn interactive_ancestor(&self, id: ElementId) -> Option<ElementId> {
        self.ancestors(id)
            .find(|&a| self.kind(a).is_some_and(ElementKind::is_interactive))
    }

    /// Whether `id` is a button or link, or is nested inside one.
    pub fn is_within_interactive(&self, id: ElementId) -> bool {
        self.interactive_ancestor(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (HitMap<&'static str>, ElementId, ElementId, ElementId) {
        let mut map = HitMap::new();
        let page = map.push(ElementKind::Page, Rect::new(0, 0, 40, 20), None, None);
        let button = map.push(
            ElementKind::Button,
            Rect::new(5, 5, 12, 1),
            Some(page),
            Some("resume"),
        );
        let label = map.push(ElementKind::Text, Rect::new(7, 5, 8, 1), Some(button), None);
        (map, page, button, label)
    }

    #[test]
    fn test_target_is_innermost() {
        let (map, page, button, label) = sample();
        assert_eq!(map.target_at(8, 5), Some(label));
        assert_eq!(map.target_at(5, 5), Some(button));
        assert_eq!(map.target_at(0, 0), Some(page));
        assert_eq!(map.target_at(50, 50), None);
    }

    #[test]
    fn test_nested_text_counts_as_interactive() {
        let (map, page, button, label) = sample();
        assert!(map.is_within_interactive(label));
        assert!(map.is_within_interactive(button));
        assert!(!map.is_within_interactive(page));
        assert_eq!(map.interactive_ancestor(label), Some(button));
        assert_eq!(map.action(button), Some(&"resume"));
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let (map, page, button, label) = sample();
        let chain: Vec<_> = map.ancestors(label).collect();
        assert_eq!(chain, vec![label, button, page]);
    }

    #[test]
    fn test_clear() {
        let (mut map, ..) = sample();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.target_at(8, 5), None);
    }
}
