use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use peniko::kurbo::Size;
use tracing::{debug, trace, warn};

use crate::{
    document,
    error::{Result, TargetError},
    id::ElementId,
    layout::ColumnLayout,
    responsive::{SizeConfig, resolve},
    style::Position,
    viewport::{self, ListenerId},
};

/// What a [`Columns`] layout is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Resolved with [`document::query_selector`] when the layout is created.
    Selector(String),
    /// Used as is, as long as it is a live element.
    Element(ElementId),
}

impl Target {
    /// The element this target designates right now.
    pub fn resolve(&self) -> Result<ElementId, TargetError> {
        match self {
            Target::Selector(selector) => document::query_selector(selector)
                .map_err(|source| TargetError::Selector {
                    selector: selector.clone(),
                    source,
                })?
                .ok_or_else(|| TargetError::NoMatch(selector.clone())),
            Target::Element(id) if id.is_element() => Ok(*id),
            Target::Element(id) => Err(TargetError::Unrecognized(*id)),
        }
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Target::Element(id)
    }
}

struct ColumnsState {
    container: ElementId,
    sizes: Vec<SizeConfig>,
}

impl ColumnsState {
    /// Run one layout pass against the current viewport width.
    fn update(&self) -> f64 {
        let width = viewport::width();
        let Some(config) = resolve(width, &self.sizes) else {
            self.container.set_height(Some(0.0));
            return 0.0;
        };
        let layout = ColumnLayout::measure(config, self.container);
        layout.apply(self.container);
        trace!(
            width,
            columns = config.columns,
            gutter = config.gutter,
            children = layout.origins.len(),
            height = layout.height,
            "columns laid out"
        );
        layout.height
    }

    fn reset(&self) {
        self.container.set_height(None);
        self.container.set_position(None);
        for child in self.container.children() {
            child.set_top(None);
            child.set_left(None);
            child.set_position(None);
        }
    }
}

/// A responsive masonry layout over the children of one container.
///
/// Creating a `Columns` makes the container `position: relative` and every
/// child `position: absolute`, lays the children out for the current
/// viewport width and re-lays them out on every viewport resize until the
/// layout is [detached](Columns::detach) or dropped.
///
/// ```rust
/// use floem_columns::{Columns, SizeConfig, document, viewport};
///
/// let grid = document::create_element("div");
/// grid.add_class("grid");
/// document::root().append_child(grid);
/// for height in [10.0, 20.0, 10.0, 30.0] {
///     let card = document::create_element("div");
///     card.set_size((100.0, height));
///     grid.append_child(card);
/// }
///
/// let columns = Columns::new(
///     ".grid",
///     [SizeConfig::new(1, 5.0), SizeConfig::new(2, 5.0).min(600.0)],
/// )?;
/// assert_eq!(grid.style().height, Some(55.0));
///
/// viewport::resize((400.0, 600.0));
/// assert_eq!(grid.style().height, Some(85.0));
///
/// columns.destroy();
/// assert!(grid.style().is_empty());
/// # Ok::<(), floem_columns::Error>(())
/// ```
pub struct Columns {
    state: Rc<ColumnsState>,
    listener: Cell<Option<ListenerId>>,
}

impl Columns {
    /// Attach a layout to `target` using the given size configs.
    ///
    /// `sizes` should be ordered by ascending `min` with the fallback first;
    /// it isn't validated. The only error is a target that doesn't resolve
    /// to an element.
    pub fn new(target: impl Into<Target>, sizes: impl Into<Vec<SizeConfig>>) -> Result<Self> {
        let container = target.into().resolve()?;
        let sizes = sizes.into();
        if sizes.is_empty() {
            warn!(?container, "columns created without any size config");
        }

        container.set_position(Some(Position::Relative));
        for child in container.children() {
            child.set_position(Some(Position::Absolute));
        }

        let state = Rc::new(ColumnsState { container, sizes });
        state.update();

        let weak: Weak<ColumnsState> = Rc::downgrade(&state);
        let listener = viewport::add_resize_listener(Rc::new(move |_: Size| {
            if let Some(state) = weak.upgrade() {
                state.update();
            }
        }));
        debug!(?container, ?listener, "columns attached");

        Ok(Self {
            state,
            listener: Cell::new(Some(listener)),
        })
    }

    /// The element whose children are laid out.
    pub fn container(&self) -> ElementId {
        self.state.container
    }

    /// The size configs this layout resolves against.
    pub fn sizes(&self) -> &[SizeConfig] {
        &self.state.sizes
    }

    /// The config a layout pass would use at the current viewport width.
    pub fn active_config(&self) -> Option<&SizeConfig> {
        resolve(viewport::width(), &self.state.sizes)
    }

    /// Whether the layout still follows viewport resizes.
    pub fn is_attached(&self) -> bool {
        self.listener.get().is_some()
    }

    /// Lay the children out again for the current viewport width and return
    /// the container height that was applied.
    ///
    /// This works after [`reset`](Self::reset) and [`detach`](Self::detach)
    /// too; it only writes `left`, `top` and `height`, so it doesn't restore
    /// the positioning `reset` cleared.
    pub fn update(&self) -> f64 {
        self.state.update()
    }

    /// Clear every style the layout wrote: `height` and `position` on the
    /// container, `top`, `left` and `position` on each child.
    ///
    /// The resize subscription is kept, so the next resize lays the children
    /// out again.
    pub fn reset(&self) -> &Self {
        self.state.reset();
        debug!(container = ?self.state.container, "columns reset");
        self
    }

    /// Stop following viewport resizes. Detaching twice is a no-op.
    pub fn detach(&self) -> &Self {
        if let Some(listener) = self.listener.take() {
            viewport::remove_resize_listener(listener);
            debug!(container = ?self.state.container, ?listener, "columns detached");
        }
        self
    }

    /// [`reset`](Self::reset), then [`detach`](Self::detach).
    pub fn destroy(&self) -> &Self {
        self.reset().detach()
    }
}

impl Drop for Columns {
    fn drop(&mut self) {
        // a layout held in another thread local may outlive the viewport
        if let Some(listener) = self.listener.take() {
            viewport::release_resize_listener(listener);
        }
    }
}
