//! Built-in email layouts.
//!
//! Each layout is a pure function from [`TemplateData`] to an HTML fragment
//! with inline styles. The editor surface and the preview pane both render
//! through [`render_builtin`], so the two can never drift apart.

mod classic;
mod minimal;
mod modern;
mod promotional;
mod styles;
mod welcome;

use crate::error::RenderError;
use mailcraft_core::TemplateData;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five code-defined layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinLayout {
    /// Gradient header newsletter; the fallback for unresolvable ids
    #[default]
    Modern,
    /// Bordered business letter
    Classic,
    /// Typography-first layout with a testimonial
    Minimal,
    /// Sale announcement with feature tiles
    Promotional,
    /// Onboarding email with numbered steps
    Welcome,
}

impl BuiltinLayout {
    /// Every built-in layout, in picker order.
    pub const ALL: [BuiltinLayout; 5] = [
        Self::Modern,
        Self::Classic,
        Self::Minimal,
        Self::Promotional,
        Self::Welcome,
    ];

    /// Stable identifier, e.g. `"modern"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
            Self::Promotional => "promotional",
            Self::Welcome => "welcome",
        }
    }

    /// Display name for the template picker.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Modern => "Modern Newsletter",
            Self::Classic => "Classic Business",
            Self::Minimal => "Minimal Clean",
            Self::Promotional => "Promotional Sale",
            Self::Welcome => "Welcome Series",
        }
    }

    /// One-line description for the template picker.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Modern => "Clean, contemporary design with gradient header",
            Self::Classic => "Traditional professional layout with borders",
            Self::Minimal => "Simple, elegant design with focus on content",
            Self::Promotional => "Eye-catching design for sales and promotions",
            Self::Welcome => "Perfect for onboarding new subscribers",
        }
    }

    /// Picker category.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::Modern => "Newsletter",
            Self::Classic => "Business",
            Self::Minimal => "Minimal",
            Self::Promotional => "Marketing",
            Self::Welcome => "Onboarding",
        }
    }
}

impl fmt::Display for BuiltinLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BuiltinLayout {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.id() == s)
            .ok_or_else(|| RenderError::UnknownLayout(s.to_string()))
    }
}

/// Render a built-in layout against `data`.
///
/// Deterministic: identical arguments always produce byte-identical output.
#[must_use]
pub fn render_builtin(layout: BuiltinLayout, data: &TemplateData) -> String {
    match layout {
        BuiltinLayout::Modern => modern::render(data),
        BuiltinLayout::Classic => classic::render(data),
        BuiltinLayout::Minimal => minimal::render(data),
        BuiltinLayout::Promotional => promotional::render(data),
        BuiltinLayout::Welcome => welcome::render(data),
    }
}
