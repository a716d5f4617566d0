//! Style records for tables.
//!
//! Every field is optional; an unset field inherits from the enclosing scope
//! during cascading (see [`cascade`]).

pub mod cascade;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub use cascade::{Cascade, equals, inherit, style_change};

use cascade::{changed_value, inherit_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Auto,
    Tiny,
    Small,
    Normal,
    Large,
    Huge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Font attributes of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl TextStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: TextSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Cascade for TextStyle {
    fn merge_fields(&self, parent: &Self) -> Self {
        Self {
            color: inherit_value(&self.color, &parent.color),
            size: inherit_value(&self.size, &parent.size),
            family: inherit_value(&self.family, &parent.family),
        }
    }

    fn change_fields(&self, parent: &Self) -> Self {
        Self {
            color: changed_value(&self.color, &parent.color),
            size: changed_value(&self.size, &parent.size),
            family: changed_value(&self.family, &parent.family),
        }
    }
}

/// Stroke used for table frames and cell borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl LineStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Cascade for LineStyle {
    fn merge_fields(&self, parent: &Self) -> Self {
        Self {
            color: inherit_value(&self.color, &parent.color),
            width: inherit_value(&self.width, &parent.width),
        }
    }

    fn change_fields(&self, parent: &Self) -> Self {
        Self {
            color: changed_value(&self.color, &parent.color),
            width: changed_value(&self.width, &parent.width),
        }
    }
}

/// Nested form of the alignment pair carried flat on [`TableStyle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAlign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlign>,
}

impl CellAlign {
    #[must_use]
    pub fn new(horizontal: Option<HorizontalAlign>, vertical: Option<VerticalAlign>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Cascade for CellAlign {
    fn merge_fields(&self, parent: &Self) -> Self {
        Self {
            horizontal: inherit_value(&self.horizontal, &parent.horizontal),
            vertical: inherit_value(&self.vertical, &parent.vertical),
        }
    }

    fn change_fields(&self, parent: &Self) -> Self {
        Self {
            horizontal: changed_value(&self.horizontal, &parent.horizontal),
            vertical: changed_value(&self.vertical, &parent.vertical),
        }
    }
}

/// Style attached to a table, column, row or cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Arc<TextStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Arc<LineStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Arc<LineStyle>>,
}

impl TableStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = Some(align);
        self
    }

    #[must_use]
    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Replaces both alignment fields, including unsetting them.
    #[must_use]
    pub fn with_align(mut self, align: CellAlign) -> Self {
        self.horizontal_align = align.horizontal;
        self.vertical_align = align.vertical;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = Some(Arc::new(font));
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: LineStyle) -> Self {
        self.border = Some(Arc::new(border));
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: LineStyle) -> Self {
        self.frame = Some(Arc::new(frame));
        self
    }

    #[must_use]
    pub fn align(&self) -> CellAlign {
        CellAlign::new(self.horizontal_align, self.vertical_align)
    }

    #[must_use]
    pub fn font_color(&self) -> Option<Color> {
        self.font.as_ref().and_then(|font| font.color)
    }

    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Cascade for TableStyle {
    fn merge_fields(&self, parent: &Self) -> Self {
        Self {
            background_color: inherit_value(&self.background_color, &parent.background_color),
            horizontal_align: inherit_value(&self.horizontal_align, &parent.horizontal_align),
            vertical_align: inherit_value(&self.vertical_align, &parent.vertical_align),
            font: inherit(self.font.as_ref(), parent.font.as_ref()),
            border: inherit(self.border.as_ref(), parent.border.as_ref()),
            frame: inherit(self.frame.as_ref(), parent.frame.as_ref()),
        }
    }

    fn change_fields(&self, parent: &Self) -> Self {
        Self {
            background_color: changed_value(&self.background_color, &parent.background_color),
            horizontal_align: changed_value(&self.horizontal_align, &parent.horizontal_align),
            vertical_align: changed_value(&self.vertical_align, &parent.vertical_align),
            font: style_change(self.font.as_ref(), parent.font.as_ref()),
            border: style_change(self.border.as_ref(), parent.border.as_ref()),
            frame: style_change(self.frame.as_ref(), parent.frame.as_ref()),
        }
    }
}
