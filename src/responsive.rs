//! Width breakpoints and the column configurations attached to them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common width breakpoints in pixels, usable as [`SizeConfig::min`] values.
pub mod breakpoints {
    pub const SM: f64 = 576.0;
    pub const MD: f64 = 768.0;
    pub const LG: f64 = 992.0;
    pub const XL: f64 = 1200.0;
    pub const XXL: f64 = 1400.0;
}

/// The column count and gutter used from a minimum viewport width upwards.
///
/// A config without `min` is a fallback. Lists of configs are expected in
/// ascending `min` order with the fallback first:
///
/// ```rust
/// use floem_columns::{SizeConfig, responsive::breakpoints};
///
/// let sizes = [
///     SizeConfig::new(1, 10.0),
///     SizeConfig::new(2, 15.0).min(breakpoints::MD),
///     SizeConfig::new(4, 20.0).min(breakpoints::XL),
/// ];
/// assert_eq!(floem_columns::resolve(800.0, &sizes), Some(&sizes[1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeConfig {
    /// Inclusive minimum viewport width for this config.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub min: Option<f64>,
    pub columns: usize,
    /// Spacing between columns and between stacked elements in a column.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gutter: f64,
}

impl SizeConfig {
    pub const fn new(columns: usize, gutter: f64) -> Self {
        Self {
            min: None,
            columns,
            gutter,
        }
    }

    pub const fn min(mut self, width: f64) -> Self {
        self.min = Some(width);
        self
    }
}

/// Pick the config for a viewport `width`: the last entry whose `min` is set
/// and not greater than `width`, or the first entry when none qualifies.
///
/// The first entry is returned even if its own `min` exceeds `width`.
/// `None` only for an empty list.
pub fn resolve(width: f64, sizes: &[SizeConfig]) -> Option<&SizeConfig> {
    sizes
        .iter()
        .rev()
        .find(|size| size.min.is_some_and(|min| min <= width))
        .or_else(|| sizes.first())
}

/// Read a list of configs from JSON, e.g.
/// `[{"columns": 1, "gutter": 10}, {"min": 768, "columns": 2, "gutter": 20}]`.
#[cfg(feature = "serde")]
pub fn parse_sizes(json: &str) -> serde_json::Result<Vec<SizeConfig>> {
    serde_json::from_str(json)
}
