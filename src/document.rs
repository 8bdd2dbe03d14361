//! The thread-local element tree that layouts read sizes from and write
//! styles to.
//!
//! The document always has a root `html` element. Elements created with
//! [`create_element`] start detached and only become visible to
//! [`query_selector`] once appended somewhere below [`root`].

use std::cell::RefCell;

use peniko::kurbo::Size;
use slotmap::{SecondaryMap, SlotMap};
use smallvec::SmallVec;

use crate::{
    id::ElementId,
    selector::{SelectorError, SelectorList},
    style::InlineStyle,
};

thread_local! {
    pub(crate) static DOCUMENT: RefCell<DocumentStorage> = RefCell::new(DocumentStorage::new());
}

pub(crate) enum NodeKind {
    Element { tag: String },
    Text(String),
}

pub(crate) struct DocumentStorage {
    pub(crate) root: ElementId,
    pub(crate) nodes: SlotMap<ElementId, NodeKind>,
    pub(crate) children: SecondaryMap<ElementId, Vec<ElementId>>,
    // the parent of a node, `None` while detached
    pub(crate) parent: SecondaryMap<ElementId, Option<ElementId>>,
    pub(crate) id_attr: SecondaryMap<ElementId, String>,
    pub(crate) classes: SecondaryMap<ElementId, SmallVec<[String; 2]>>,
    pub(crate) sizes: SecondaryMap<ElementId, Size>,
    pub(crate) styles: SecondaryMap<ElementId, InlineStyle>,
    pub(crate) style_writes: u64,
}

impl DocumentStorage {
    fn new() -> Self {
        let mut storage = Self {
            root: ElementId::default(),
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            id_attr: SecondaryMap::new(),
            classes: SecondaryMap::new(),
            sizes: SecondaryMap::new(),
            styles: SecondaryMap::new(),
            style_writes: 0,
        };
        storage.root = storage.insert(NodeKind::Element {
            tag: "html".to_string(),
        });
        storage
    }

    /// Empty the tree in place. Clearing the slot map bumps every slot
    /// version, so old ids never alias the new root or later nodes.
    fn reset(&mut self) {
        self.nodes.clear();
        self.children.clear();
        self.parent.clear();
        self.id_attr.clear();
        self.classes.clear();
        self.sizes.clear();
        self.styles.clear();
        self.style_writes = 0;
        self.root = self.insert(NodeKind::Element {
            tag: "html".to_string(),
        });
    }

    fn insert(&mut self, kind: NodeKind) -> ElementId {
        let id = self.nodes.insert(kind);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, None);
        id
    }

    /// Unlink `id` from its parent's child list.
    pub(crate) fn detach(&mut self, id: ElementId) {
        if let Some(Some(parent)) = self.parent.get(id).copied()
            && let Some(children) = self.children.get_mut(parent)
        {
            children.retain(|c| *c != id);
        }
        if let Some(parent) = self.parent.get_mut(id) {
            *parent = None;
        }
    }

    pub(crate) fn element_children(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .copied()
            .filter(|child| matches!(self.nodes.get(*child), Some(NodeKind::Element { .. })))
    }

    /// Every element reachable from the root in document (pre-)order,
    /// starting with the root itself.
    fn descendants(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            let len = stack.len();
            stack.extend(self.element_children(id));
            stack[len..].reverse();
        }
        out
    }
}

/// The root `html` element of this thread's document.
pub fn root() -> ElementId {
    DOCUMENT.with_borrow(|d| d.root)
}

/// Create a detached element with the given tag name.
pub fn create_element(tag: &str) -> ElementId {
    DOCUMENT.with_borrow_mut(|d| {
        d.insert(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
        })
    })
}

/// Create a detached text node. Text nodes can't be layout targets and are
/// skipped when enumerating children.
pub fn create_text(text: &str) -> ElementId {
    DOCUMENT.with_borrow_mut(|d| d.insert(NodeKind::Text(text.to_string())))
}

/// The first element in document order matching `selector`.
pub fn query_selector(selector: &str) -> Result<Option<ElementId>, SelectorError> {
    let list = SelectorList::parse(selector)?;
    let candidates = DOCUMENT.with_borrow(|d| d.descendants());
    Ok(candidates.into_iter().find(|id| list.matches(*id)))
}

/// Every element in document order matching `selector`.
pub fn query_selector_all(selector: &str) -> Result<Vec<ElementId>, SelectorError> {
    let list = SelectorList::parse(selector)?;
    let candidates = DOCUMENT.with_borrow(|d| d.descendants());
    Ok(candidates.into_iter().filter(|id| list.matches(*id)).collect())
}

/// The number of inline style writes made on this thread's document.
///
/// Callers compare two readings to find out whether anything in between
/// touched element styles.
pub fn style_writes() -> u64 {
    DOCUMENT.with_borrow(|d| d.style_writes)
}

/// Drop every node and start over with a fresh root. Ids handed out before
/// the call become stale.
pub fn clear() {
    DOCUMENT.with_borrow_mut(|d| d.reset());
}
