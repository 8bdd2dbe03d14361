//! # `ElementId`s
//!
//! [`ElementId`]s are unique identifiers for nodes in the thread-local
//! [document](crate::document). Every accessor goes through the document
//! storage, so an id stays cheap to copy and never borrows the tree.

use peniko::kurbo::Size;
use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::{
    document::{DOCUMENT, NodeKind},
    style::{InlineStyle, Position},
};

new_key_type! {
    /// A small unique identifier for a node in the document.
    ///
    /// Ids of removed nodes are never reused; every accessor treats a stale
    /// id as an empty, detached node.
    pub struct ElementId;
}

impl ElementId {
    /// Check if this id still names a node in the document.
    pub fn is_valid(&self) -> bool {
        DOCUMENT.with_borrow(|d| d.nodes.contains_key(*self))
    }

    /// Check if this id names a live element, as opposed to a text node or a
    /// removed node.
    pub fn is_element(&self) -> bool {
        DOCUMENT.with_borrow(|d| matches!(d.nodes.get(*self), Some(NodeKind::Element { .. })))
    }

    /// The lowercase tag name, or `None` for text nodes and stale ids.
    pub fn tag(&self) -> Option<String> {
        DOCUMENT.with_borrow(|d| match d.nodes.get(*self) {
            Some(NodeKind::Element { tag }) => Some(tag.clone()),
            _ => None,
        })
    }

    /// The content of a text node.
    pub fn text(&self) -> Option<String> {
        DOCUMENT.with_borrow(|d| match d.nodes.get(*self) {
            Some(NodeKind::Text(text)) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn parent(&self) -> Option<ElementId> {
        DOCUMENT.with_borrow(|d| d.parent.get(*self).copied().flatten())
    }

    /// Append `child` as the last child of this node, detaching it from its
    /// previous parent first.
    ///
    /// Appending to a text node, or appending a node to itself or one of its
    /// descendants, is ignored.
    pub fn append_child(&self, child: ElementId) {
        if *self == child || child.contains(*self) {
            return;
        }
        DOCUMENT.with_borrow_mut(|d| {
            if !matches!(d.nodes.get(*self), Some(NodeKind::Element { .. }))
                || !d.nodes.contains_key(child)
            {
                return;
            }
            d.detach(child);
            if let Some(children) = d.children.get_mut(*self) {
                children.push(child);
            }
            d.parent.insert(child, Some(*self));
        });
    }

    /// Remove this node and its whole subtree from the document.
    pub fn remove(&self) {
        let children = DOCUMENT.with_borrow(|d| d.children.get(*self).cloned().unwrap_or_default());
        for child in children {
            child.remove();
        }
        DOCUMENT.with_borrow_mut(|d| {
            d.detach(*self);
            // SecondaryMaps don't auto-clean when the primary key goes away
            d.children.remove(*self);
            d.parent.remove(*self);
            d.id_attr.remove(*self);
            d.classes.remove(*self);
            d.sizes.remove(*self);
            d.styles.remove(*self);
            d.nodes.remove(*self);
        });
    }

    /// Whether `other` is this node or one of its descendants.
    pub fn contains(&self, other: ElementId) -> bool {
        let mut current = Some(other);
        while let Some(id) = current {
            if id == *self {
                return true;
            }
            current = id.parent();
        }
        false
    }

    /// The element children of this node in document order. Text nodes are
    /// skipped.
    pub fn children(&self) -> Vec<ElementId> {
        DOCUMENT.with_borrow(|d| d.element_children(*self).collect())
    }

    /// Every child of this node, text nodes included.
    pub fn child_nodes(&self) -> Vec<ElementId> {
        DOCUMENT.with_borrow(|d| d.children.get(*self).cloned().unwrap_or_default())
    }

    pub fn child_count(&self) -> usize {
        DOCUMENT.with_borrow(|d| d.element_children(*self).count())
    }

    /// The element child at `index`, counting elements only.
    pub fn child(&self, index: usize) -> Option<ElementId> {
        DOCUMENT.with_borrow(|d| d.element_children(*self).nth(index))
    }

    pub fn id_attr(&self) -> Option<String> {
        DOCUMENT.with_borrow(|d| d.id_attr.get(*self).cloned())
    }

    pub fn set_id_attr(&self, id: impl Into<String>) {
        let id = id.into();
        DOCUMENT.with_borrow_mut(|d| {
            if d.nodes.contains_key(*self) {
                d.id_attr.insert(*self, id);
            }
        });
    }

    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        DOCUMENT.with_borrow_mut(|d| {
            if !d.nodes.contains_key(*self) {
                return;
            }
            if let Some(classes) = d.classes.entry(*self) {
                let classes = classes.or_insert_with(SmallVec::new);
                if !classes.contains(&class) {
                    classes.push(class);
                }
            }
        });
    }

    pub fn has_class(&self, class: &str) -> bool {
        DOCUMENT.with_borrow(|d| {
            d.classes
                .get(*self)
                .is_some_and(|classes| classes.iter().any(|c| c == class))
        })
    }

    /// The rendered width and height of this element.
    ///
    /// Stale ids and text nodes measure as [`Size::ZERO`].
    pub fn size(&self) -> Size {
        DOCUMENT.with_borrow(|d| d.sizes.get(*self).copied().unwrap_or(Size::ZERO))
    }

    /// Set the rendered size the layout reads for this element.
    pub fn set_size(&self, size: impl Into<Size>) {
        let size = size.into();
        DOCUMENT.with_borrow_mut(|d| {
            if d.nodes.contains_key(*self) {
                d.sizes.insert(*self, size);
            }
        });
    }

    /// A copy of the inline style of this element.
    pub fn style(&self) -> InlineStyle {
        DOCUMENT.with_borrow(|d| d.styles.get(*self).copied().unwrap_or_default())
    }

    pub fn set_position(&self, position: Option<Position>) {
        self.update_style(|s| s.position = position);
    }

    pub fn set_left(&self, left: Option<f64>) {
        self.update_style(|s| s.left = left);
    }

    pub fn set_top(&self, top: Option<f64>) {
        self.update_style(|s| s.top = top);
    }

    pub fn set_height(&self, height: Option<f64>) {
        self.update_style(|s| s.height = height);
    }

    /// Every call counts as one style write, even if the value is unchanged.
    fn update_style(&self, f: impl FnOnce(&mut InlineStyle)) {
        DOCUMENT.with_borrow_mut(|d| {
            if !d.nodes.contains_key(*self) {
                return;
            }
            if let Some(entry) = d.styles.entry(*self) {
                f(entry.or_default());
                d.style_writes += 1;
            }
        });
    }
}
