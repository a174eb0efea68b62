//! The shared record of branding and content every layout renders.
//!
//! Exactly one [`TemplateData`] exists per editing session. The sidebar form
//! mutates it through [`TemplateDataPatch`] merges; renderers only read it.

use serde::{Deserialize, Serialize};

/// Canonical branding and content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateData {
    /// Main heading
    pub heading: String,
    /// Line under the heading
    pub subheading: String,
    /// Company display name
    pub company_name: String,
    /// Logo image URL
    #[serde(rename = "companyLogo", alias = "companyLogoUrl")]
    pub company_logo_url: String,
    /// Primary brand color, conventionally a hex string
    pub primary_color: String,
    /// Secondary brand color, conventionally a hex string
    pub secondary_color: String,
    /// Call-to-action label
    pub button_text: String,
    /// Call-to-action target
    pub button_url: String,
    /// Footer copy
    pub footer_text: String,
    /// Social profile URLs
    pub social_links: SocialLinks,
    /// Body content
    pub content: Content,
}

impl Default for TemplateData {
    fn default() -> Self {
        Self {
            heading: "Welcome to Our Newsletter".to_string(),
            subheading: "Stay updated with our latest news and exclusive offers".to_string(),
            company_name: "Your Company".to_string(),
            company_logo_url: "https://via.placeholder.com/200x60/007cba/ffffff?text=LOGO"
                .to_string(),
            primary_color: "#007cba".to_string(),
            secondary_color: "#333333".to_string(),
            button_text: "Get Started Today".to_string(),
            button_url: "https://example.com".to_string(),
            footer_text: "© 2024 Your Company. All rights reserved. You received this email \
                          because you subscribed to our newsletter."
                .to_string(),
            social_links: SocialLinks::default(),
            content: Content::default(),
        }
    }
}

impl TemplateData {
    /// Merge a patch into this record.
    ///
    /// Only fields present in the patch change. Nested groups
    /// (`social_links`, `content`) are replaced as a whole.
    pub fn apply(&mut self, patch: TemplateDataPatch) {
        let TemplateDataPatch {
            heading,
            subheading,
            company_name,
            company_logo_url,
            primary_color,
            secondary_color,
            button_text,
            button_url,
            footer_text,
            social_links,
            content,
        } = patch;

        if let Some(v) = heading {
            self.heading = v;
        }
        if let Some(v) = subheading {
            self.subheading = v;
        }
        if let Some(v) = company_name {
            self.company_name = v;
        }
        if let Some(v) = company_logo_url {
            self.company_logo_url = v;
        }
        if let Some(v) = primary_color {
            self.primary_color = v;
        }
        if let Some(v) = secondary_color {
            self.secondary_color = v;
        }
        if let Some(v) = button_text {
            self.button_text = v;
        }
        if let Some(v) = button_url {
            self.button_url = v;
        }
        if let Some(v) = footer_text {
            self.footer_text = v;
        }
        if let Some(v) = social_links {
            self.social_links = v;
        }
        if let Some(v) = content {
            self.content = v;
        }
    }
}

/// Social profile URLs keyed by platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    /// Facebook page
    pub facebook: String,
    /// Twitter profile
    pub twitter: String,
    /// Instagram profile
    pub instagram: String,
    /// LinkedIn page
    pub linkedin: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: "https://facebook.com/yourcompany".to_string(),
            twitter: "https://twitter.com/yourcompany".to_string(),
            instagram: "https://instagram.com/yourcompany".to_string(),
            linkedin: "https://linkedin.com/company/yourcompany".to_string(),
        }
    }
}

/// Body content of the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    /// Main paragraph
    pub main_text: String,
    /// Ordered feature bullet points
    pub features: Vec<String>,
    /// Customer quote
    pub testimonial: Testimonial,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            main_text: "We're excited to share our latest updates and exclusive content with \
                        you. Our team has been working hard to bring you the best experience \
                        possible."
                .to_string(),
            features: vec![
                "Premium content access".to_string(),
                "Exclusive member benefits".to_string(),
                "24/7 customer support".to_string(),
                "Regular updates and news".to_string(),
            ],
            testimonial: Testimonial::default(),
        }
    }
}

/// A customer quote with attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    /// Quote body
    pub text: String,
    /// Who said it
    pub author: String,
    /// Their role
    pub position: String,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            text: "This service has completely transformed how we do business. Highly \
                   recommended!"
                .to_string(),
            author: "John Smith".to_string(),
            position: "CEO, Tech Corp".to_string(),
        }
    }
}

/// Partial update to [`TemplateData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct TemplateDataPatch {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub company_name: Option<String>,
    #[serde(rename = "companyLogo", alias = "companyLogoUrl")]
    pub company_logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub footer_text: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub content: Option<Content>,
}
