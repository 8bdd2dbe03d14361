//! Testing utilities for Floem Columns layouts.
//!
//! This crate builds throwaway documents for layout tests and drives
//! viewport resizes without a real window.
//!
//! # Example
//!
//! ```rust
//! use floem_columns_test::prelude::*;
//!
//! let harness = HeadlessHarness::new(800.0).with_children([(100.0, 10.0), (100.0, 20.0)]);
//! let columns = Columns::new(harness.container(), [SizeConfig::new(2, 5.0)]).unwrap();
//!
//! assert_eq!(harness.offsets(), vec![Some(Point::new(0.0, 0.0)), Some(Point::new(105.0, 0.0))]);
//! assert_eq!(harness.container_height(), Some(20.0));
//! # drop(columns);
//! ```

use floem_columns::kurbo::{Point, Size};
use floem_columns::{ElementId, InlineStyle, document, viewport};

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{HeadlessHarness, WriteTracker, init_tracing};
    pub use floem_columns::kurbo::{Point, Size};
    pub use floem_columns::{
        ColumnLayout, Columns, ElementId, Error, InlineStyle, Position, SizeConfig, Target,
        TargetError, document, viewport,
    };
}

/// Install a `tracing` subscriber that honours `RUST_LOG`, once per process.
///
/// Later calls, and calls after another subscriber was installed, do
/// nothing.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh document holding one `div.grid` container below the root.
///
/// Creating a harness clears this thread's document, so element ids from
/// an earlier harness become stale.
pub struct HeadlessHarness {
    container: ElementId,
}

impl HeadlessHarness {
    /// Create a harness with the viewport at `width` pixels wide.
    pub fn new(width: f64) -> Self {
        document::clear();
        let container = document::create_element("div");
        container.add_class("grid");
        document::root().append_child(container);
        let harness = Self { container };
        harness.resize(width);
        harness
    }

    /// Append one child per `(width, height)` pair.
    pub fn with_children(self, sizes: impl IntoIterator<Item = (f64, f64)>) -> Self {
        for size in sizes {
            self.push_child(size);
        }
        self
    }

    /// Append a child with the given rendered size and return it.
    pub fn push_child(&self, (width, height): (f64, f64)) -> ElementId {
        let child = document::create_element("div");
        child.add_class("item");
        child.set_size(Size::new(width, height));
        self.container.append_child(child);
        child
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The element child at `index`.
    ///
    /// # Panics
    /// Panics if the container has fewer children.
    pub fn child(&self, index: usize) -> ElementId {
        self.container
            .child(index)
            .unwrap_or_else(|| panic!("container has no child at index {index}"))
    }

    pub fn children(&self) -> Vec<ElementId> {
        self.container.children()
    }

    /// Resize the viewport width, keeping its height.
    pub fn resize(&self, width: f64) {
        let height = viewport::size().height;
        viewport::resize(Size::new(width, height));
    }

    /// The `left`/`top` written on each child, `None` where either is unset.
    pub fn offsets(&self) -> Vec<Option<Point>> {
        self.children()
            .iter()
            .map(|child| {
                let style = child.style();
                Some(Point::new(style.left?, style.top?))
            })
            .collect()
    }

    pub fn container_height(&self) -> Option<f64> {
        self.container.style().height
    }

    /// The inline styles of the container and then every child.
    pub fn styles(&self) -> Vec<InlineStyle> {
        std::iter::once(self.container)
            .chain(self.children())
            .map(|id| id.style())
            .collect()
    }
}

/// Counts style writes made to the document since it was created or last
/// reset.
///
/// # Example
///
/// ```rust
/// use floem_columns_test::prelude::*;
///
/// let tracker = WriteTracker::new();
/// let el = document::create_element("div");
/// el.set_top(Some(3.0));
/// assert_eq!(tracker.writes(), 1);
/// ```
pub struct WriteTracker {
    start: u64,
}

impl Default for WriteTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl WriteTracker {
    pub fn new() -> Self {
        Self {
            start: document::style_writes(),
        }
    }

    /// Number of style writes since the tracker was created or reset.
    pub fn writes(&self) -> u64 {
        document::style_writes().saturating_sub(self.start)
    }

    pub fn was_written(&self) -> bool {
        self.writes() > 0
    }

    pub fn reset(&mut self) {
        self.start = document::style_writes();
    }
}
