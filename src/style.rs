//! Inline positioning styles.
//!
//! Only the properties a column layout writes are modelled. `None` means the
//! property is unset and the element falls back to its inherited or default
//! value.

use std::fmt;

/// The CSS `position` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Static,
    Relative,
    Absolute,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names one of the properties in an [`InlineStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Position,
    Left,
    Top,
    Height,
}

impl StyleProp {
    pub const ALL: [StyleProp; 4] = [
        StyleProp::Position,
        StyleProp::Left,
        StyleProp::Top,
        StyleProp::Height,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StyleProp::Position => "position",
            StyleProp::Left => "left",
            StyleProp::Top => "top",
            StyleProp::Height => "height",
        }
    }
}

/// The inline style of one element. Lengths are in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InlineStyle {
    pub position: Option<Position>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub height: Option<f64>,
}

impl InlineStyle {
    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        *self == InlineStyle::default()
    }

    pub fn is_set(&self, prop: StyleProp) -> bool {
        match prop {
            StyleProp::Position => self.position.is_some(),
            StyleProp::Left => self.left.is_some(),
            StyleProp::Top => self.top.is_some(),
            StyleProp::Height => self.height.is_some(),
        }
    }

    /// The value of `prop` as CSS text, e.g. `12.5px`.
    pub fn value(&self, prop: StyleProp) -> Option<String> {
        match prop {
            StyleProp::Position => self.position.map(|p| p.as_str().to_string()),
            StyleProp::Left => self.left.map(px),
            StyleProp::Top => self.top.map(px),
            StyleProp::Height => self.height.map(px),
        }
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Renders the set properties as a CSS declaration block body, in
/// `position`, `left`, `top`, `height` order.
impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for prop in StyleProp::ALL {
            if let Some(value) = self.value(prop) {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}: {value};", prop.name())?;
                first = false;
            }
        }
        Ok(())
    }
}
