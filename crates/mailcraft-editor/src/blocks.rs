//! Drag-and-drop block palette.

use mailcraft_core::TemplateData;
use serde::{Deserialize, Serialize};

/// Palette group a block is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockCategory {
    /// Text, media and spacing primitives
    Basic,
    /// Social profile links
    Social,
    /// Structural sections
    Layout,
}

/// A snippet the user can drop into the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable id
    pub id: String,
    /// Palette label
    pub label: String,
    /// Palette group
    pub category: BlockCategory,
    /// Markup inserted on drop
    pub content: String,
}

impl Block {
    fn new(id: &str, label: &str, category: BlockCategory, content: String) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            category,
            content,
        }
    }
}

/// The standard palette, branded with `data`.
#[must_use]
pub fn default_blocks(data: &TemplateData) -> Vec<Block> {
    use BlockCategory::{Basic, Layout, Social};

    let links = &data.social_links;
    vec![
        Block::new(
            "text",
            "Text",
            Basic,
            r#"<div style="padding: 10px; font-family: Arial, sans-serif;">Insert your text here</div>"#
                .to_string(),
        ),
        Block::new(
            "heading",
            "Heading",
            Basic,
            r#"<h2 style="margin: 0; padding: 10px; font-family: Arial, sans-serif; color: #333;">Your Heading</h2>"#
                .to_string(),
        ),
        Block::new(
            "image",
            "Image",
            Basic,
            r#"<img src="https://via.placeholder.com/300x200" style="width: 100%; height: auto; display: block;" alt="Image"/>"#
                .to_string(),
        ),
        Block::new(
            "button",
            "Button",
            Basic,
            format!(
                r##"<a href="#" style="display: inline-block; padding: 12px 24px; background-color: {}; color: white; text-decoration: none; border-radius: 4px; font-weight: bold; font-family: Arial, sans-serif;">Click Me</a>"##,
                data.primary_color
            ),
        ),
        Block::new(
            "divider",
            "Divider",
            Basic,
            r#"<hr style="border: none; height: 1px; background-color: #e5e7eb; margin: 20px 0;">"#
                .to_string(),
        ),
        Block::new(
            "spacer",
            "Spacer",
            Basic,
            r#"<div style="height: 30px;"></div>"#.to_string(),
        ),
        Block::new(
            "social-links",
            "Social Links",
            Social,
            format!(
                r#"<div style="text-align: center; padding: 20px;">
  <a href="{}" style="display: inline-block; margin: 0 10px; padding: 8px; background-color: #3b5998; color: white; text-decoration: none; border-radius: 4px;">Facebook</a>
  <a href="{}" style="display: inline-block; margin: 0 10px; padding: 8px; background-color: #1da1f2; color: white; text-decoration: none; border-radius: 4px;">Twitter</a>
  <a href="{}" style="display: inline-block; margin: 0 10px; padding: 8px; background-color: #e4405f; color: white; text-decoration: none; border-radius: 4px;">Instagram</a>
</div>"#,
                links.facebook, links.twitter, links.instagram
            ),
        ),
        Block::new(
            "footer",
            "Footer",
            Layout,
            format!(
                r#"<footer style="background-color: #f8f9fa; padding: 20px; text-align: center; font-size: 12px; color: #666; font-family: Arial, sans-serif;">
  <p style="margin: 0;">{}</p>
</footer>"#,
                data.footer_text
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_and_groups() {
        let blocks = default_blocks(&TemplateData::default());
        let ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            ["text", "heading", "image", "button", "divider", "spacer", "social-links", "footer"]
        );
        assert_eq!(blocks[6].category, BlockCategory::Social);
        assert_eq!(blocks[7].category, BlockCategory::Layout);
        assert!(blocks[..6].iter().all(|b| b.category == BlockCategory::Basic));
    }

    #[test]
    fn test_blocks_follow_template_data() {
        let data = TemplateData {
            primary_color: "#abcdef".to_string(),
            footer_text: "Bye".to_string(),
            ..TemplateData::default()
        };
        let blocks = default_blocks(&data);
        assert!(blocks[3].content.contains("background-color: #abcdef"));
        assert!(blocks[6].content.contains(&data.social_links.facebook));
        assert!(blocks[7].content.contains("<p style=\"margin: 0;\">Bye</p>"));
    }
}
