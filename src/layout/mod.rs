//! Column layout computation.
//!
//! [`ColumnLayout::compute`] is a pure function of a [`SizeConfig`] and the
//! children's rendered sizes; [`ColumnLayout::apply`] writes the result onto
//! a container and its children.

use peniko::kurbo::{Point, Size};
use smallvec::SmallVec;

use crate::{id::ElementId, responsive::SizeConfig};

/// The result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Offset of every child relative to the container, by child index.
    /// Empty when the config has no columns.
    pub origins: Vec<Point>,
    /// Stacked height of each column that received a child. Columns past
    /// the number of children are empty and left out.
    pub column_heights: SmallVec<[f64; 4]>,
    /// Height of the tallest column, never below zero.
    pub height: f64,
}

impl ColumnLayout {
    /// Distribute `sizes` round-robin into `config.columns` columns.
    ///
    /// Child `j` goes into column `j % columns`, stacked under the previous
    /// member of that column with `gutter` in between. A column starts
    /// `gutter` to the right of the previous one, which is as wide as the
    /// *last* child placed in it. An empty column keeps the width of the
    /// last child seen in any earlier column, which only matters for columns
    /// that have no members and so place nothing.
    pub fn compute(config: &SizeConfig, sizes: &[Size]) -> Self {
        let columns = config.columns;
        let gutter = config.gutter;

        // without columns nothing is placed
        let placed = if columns == 0 { 0 } else { sizes.len() };
        let mut origins = vec![Point::ZERO; placed];
        let mut column_heights = SmallVec::new();
        let mut height = 0.0_f64;
        let mut element_width = 0.0;
        let mut offset_x = 0.0;

        // columns at or past `sizes.len()` stay empty
        for column in 0..columns.min(sizes.len()) {
            let mut offset_y = 0.0;
            for index in (column..sizes.len()).step_by(columns) {
                origins[index] = Point::new(offset_x, offset_y);
                offset_y += sizes[index].height + gutter;
                element_width = sizes[index].width;
            }
            offset_x += element_width + gutter;

            // drop the gutter after the last member
            offset_y -= gutter;
            column_heights.push(offset_y);
            if offset_y > height {
                height = offset_y;
            }
        }

        Self {
            origins,
            column_heights,
            height,
        }
    }

    /// Measure the children of `container` and compute their layout.
    pub fn measure(config: &SizeConfig, container: ElementId) -> Self {
        let sizes: Vec<Size> = container.children().iter().map(|c| c.size()).collect();
        Self::compute(config, &sizes)
    }

    pub fn origin(&self, index: usize) -> Option<Point> {
        self.origins.get(index).copied()
    }

    /// Write `left`/`top` onto each child of `container` and `height` onto
    /// the container. Children beyond the computed ones are left alone.
    pub fn apply(&self, container: ElementId) {
        for (child, origin) in container.children().into_iter().zip(&self.origins) {
            child.set_left(Some(origin.x));
            child.set_top(Some(origin.y));
        }
        container.set_height(Some(self.height));
    }
}
