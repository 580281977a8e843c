//! Panel specifications
//!
//! A panel spec describes one kind of rectangular piece the customer wants
//! cut, together with how many copies are needed and which of its edges
//! receive edge-banding tape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grain direction requested for a panel
///
/// Carried through for reporting; the optimizer does not rotate panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainAlignment {
    /// No grain preference
    None,
    /// Grain runs along the panel width
    Horizontal,
    /// Grain runs along the panel length
    Vertical,
}

impl Default for GrainAlignment {
    fn default() -> Self {
        Self::None
    }
}

impl fmt::Display for GrainAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Which panel edges receive edge banding
///
/// Left and right edges run along the panel length; top and bottom edges
/// run along the panel width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgingSpec {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgingSpec {
    /// Band every edge
    pub fn all() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }

    /// True when no edge is banded
    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }

    /// Compact side code such as "LRT", or "None"
    pub fn sides_code(&self) -> String {
        let code: String = [
            (self.left, 'L'),
            (self.right, 'R'),
            (self.top, 'T'),
            (self.bottom, 'B'),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, c)| *c)
        .collect();

        if code.is_empty() {
            "None".to_string()
        } else {
            code
        }
    }
}

/// One line of a cut list: a rectangle, a quantity and its finishing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Panel width in mm
    pub width: f64,
    /// Panel length in mm
    pub length: f64,
    /// Number of identical copies
    pub quantity: u32,
    #[serde(default)]
    pub edging: EdgingSpec,
    #[serde(default)]
    pub alignment: GrainAlignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PanelSpec {
    /// Create a plain panel spec with no label and no edging
    pub fn new(width: f64, length: f64, quantity: u32) -> Self {
        Self {
            width,
            length,
            quantity,
            edging: EdgingSpec::default(),
            alignment: GrainAlignment::default(),
            label: None,
            notes: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_edging(mut self, edging: EdgingSpec) -> Self {
        self.edging = edging;
        self
    }

    /// Area of a single copy in mm²
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Area of all copies in mm²
    pub fn total_area(&self) -> f64 {
        self.area() * f64::from(self.quantity)
    }

    /// Banded edge length of a single copy in mm
    pub fn edge_length(&self) -> f64 {
        let mut total = 0.0;
        if self.edging.left {
            total += self.length;
        }
        if self.edging.right {
            total += self.length;
        }
        if self.edging.top {
            total += self.width;
        }
        if self.edging.bottom {
            total += self.width;
        }
        total
    }

    /// Banded edge length of all copies in mm
    pub fn total_edge_length(&self) -> f64 {
        self.edge_length() * f64::from(self.quantity)
    }

    /// Label to show for this panel, falling back to "Panel N" (1-based)
    pub fn display_label(&self, index: usize) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Panel {}", index + 1),
        }
    }
}
