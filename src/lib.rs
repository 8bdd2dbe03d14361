//! # Floem Columns
//! Floem Columns arranges the children of a container into responsive masonry columns and
//! re-flows them whenever the viewport width changes.
//!
//! ## Example
//! ```rust
//! use floem_columns::{Columns, SizeConfig, document, responsive::breakpoints, viewport};
//!
//! let gallery = document::create_element("section");
//! gallery.set_id_attr("gallery");
//! document::root().append_child(gallery);
//! for (width, height) in [(200.0, 120.0), (200.0, 80.0), (200.0, 160.0)] {
//!     let photo = document::create_element("img");
//!     photo.set_size((width, height));
//!     gallery.append_child(photo);
//! }
//!
//! viewport::resize((1280.0, 800.0));
//! let columns = Columns::new(
//!     "#gallery",
//!     [
//!         SizeConfig::new(1, 10.0),
//!         SizeConfig::new(2, 16.0).min(breakpoints::MD),
//!         SizeConfig::new(3, 24.0).min(breakpoints::XL),
//!     ],
//! )?;
//! assert_eq!(gallery.child(2).unwrap().style().left, Some(448.0));
//! assert_eq!(columns.update(), 160.0);
//! # Ok::<(), floem_columns::Error>(())
//! ```
//!
//! ## Layout
//! Every pass picks the active [`SizeConfig`] with [`resolve`]: the entry with the largest `min`
//! not above the viewport width, or the first entry when none qualifies. Children are then dealt
//! round-robin into `columns` columns by index, stacked top to bottom with `gutter` between them.
//! Each column starts `gutter` to the right of the previous one, which is as wide as the last child
//! placed in it. The container gets the height of its tallest column.
//!
//! [`ColumnLayout`] exposes the computation on its own, without touching any element.
//!
//! ## Document and viewport
//! Layouts run against a headless, thread-local [`document`] and [`viewport`]. Hosts mirror their
//! element sizes into the document and forward window resizes to [`viewport::resize`]; every
//! resize re-lays out every attached [`Columns`] synchronously.

mod columns;
pub mod document;
mod error;
mod id;
pub mod layout;
pub mod responsive;
pub mod selector;
pub mod style;
pub mod viewport;

pub use columns::{Columns, Target};
pub use error::{Error, Result, TargetError};
pub use id::ElementId;
pub use layout::ColumnLayout;
pub use responsive::{SizeConfig, resolve};
#[cfg(feature = "serde")]
pub use responsive::parse_sizes;
pub use style::{InlineStyle, Position, StyleProp};

pub use peniko::kurbo;
