//! Viewport framing for on-screen previews.
//!
//! Previews show the resolver output directly, without the export
//! document wrapper, scaled to approximate the target device.

use crate::error::RenderError;
use crate::resolver::resolve;
use crate::template_id::TemplateId;
use mailcraft_core::{CustomTemplate, TemplateData};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height of a preview card.
const FRAME_HEIGHT: &str = "300px";

/// Target device for a preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Full-width desktop view
    #[default]
    Desktop,
    /// 768px tablet view
    Tablet,
    /// 375px phone view
    Mobile,
}

impl Viewport {
    /// Every viewport, widest first.
    pub const ALL: [Viewport; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];

    /// CSS max-width of the frame.
    #[must_use]
    pub fn max_width(self) -> &'static str {
        match self {
            Self::Desktop => "100%",
            Self::Tablet => "768px",
            Self::Mobile => "375px",
        }
    }

    /// Scale transform applied to the frame.
    #[must_use]
    pub fn scale(self) -> f32 {
        match self {
            Self::Desktop => 1.0,
            Self::Tablet => 0.9,
            Self::Mobile => 0.8,
        }
    }

    /// Base font size of the rendered content.
    #[must_use]
    pub fn font_size(self) -> &'static str {
        match self {
            Self::Desktop | Self::Tablet => "14px",
            Self::Mobile => "12px",
        }
    }

    /// Zoom applied to the rendered content.
    #[must_use]
    pub fn zoom(self) -> f32 {
        match self {
            Self::Desktop => 0.6,
            Self::Tablet => 0.8,
            Self::Mobile => 0.7,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Viewport {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|viewport| viewport.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownViewport(s.to_string()))
    }
}

/// A rendered fragment together with its viewport framing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    /// Device being previewed
    pub viewport: Viewport,
    /// Resolver output, unwrapped
    pub fragment: String,
}

impl PreviewFrame {
    /// Inline style of the outer card.
    #[must_use]
    pub fn frame_style(&self) -> String {
        format!(
            "max-width: {}; transform: scale({}); transform-origin: top left; height: {FRAME_HEIGHT}; overflow: hidden;",
            self.viewport.max_width(),
            self.viewport.scale(),
        )
    }

    /// Inline style of the content wrapper.
    #[must_use]
    pub fn content_style(&self) -> String {
        format!(
            "font-size: {}; line-height: 1.4; zoom: {};",
            self.viewport.font_size(),
            self.viewport.zoom(),
        )
    }

    /// Framed markup, ready to drop into a page.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            r#"<div style="{}"><div style="{}">{}</div></div>"#,
            self.frame_style(),
            self.content_style(),
            self.fragment,
        )
    }
}

/// Render `template_id` for an on-screen preview at `viewport`.
#[must_use]
pub fn render_preview(
    template_id: &TemplateId,
    data: &TemplateData,
    custom_templates: &[CustomTemplate],
    viewport: Viewport,
) -> PreviewFrame {
    PreviewFrame {
        viewport,
        fragment: resolve(template_id, data, custom_templates),
    }
}
