//! The fixed set of placeholder tokens custom templates can reference.

use mailcraft_core::TemplateData;
use std::fmt;

/// A recognised `{{name}}` placeholder.
///
/// Nested template data (social links, main text) is flattened into this
/// single namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{{companyName}}`
    CompanyName,
    /// `{{companyLogo}}`
    CompanyLogo,
    /// `{{heading}}`
    Heading,
    /// `{{subheading}}`
    Subheading,
    /// `{{mainText}}`
    MainText,
    /// `{{buttonText}}`
    ButtonText,
    /// `{{buttonUrl}}`
    ButtonUrl,
    /// `{{primaryColor}}`
    PrimaryColor,
    /// `{{secondaryColor}}`
    SecondaryColor,
    /// `{{footerText}}`
    FooterText,
    /// `{{facebookUrl}}`
    FacebookUrl,
    /// `{{twitterUrl}}`
    TwitterUrl,
    /// `{{instagramUrl}}`
    InstagramUrl,
    /// `{{linkedinUrl}}`
    LinkedinUrl,
}

impl Placeholder {
    /// Every placeholder, in variables-guide order.
    pub const ALL: [Placeholder; 14] = [
        Self::CompanyName,
        Self::CompanyLogo,
        Self::Heading,
        Self::Subheading,
        Self::MainText,
        Self::FooterText,
        Self::ButtonText,
        Self::ButtonUrl,
        Self::PrimaryColor,
        Self::SecondaryColor,
        Self::FacebookUrl,
        Self::TwitterUrl,
        Self::InstagramUrl,
        Self::LinkedinUrl,
    ];

    /// Variable name as written between the braces.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::CompanyLogo => "companyLogo",
            Self::Heading => "heading",
            Self::Subheading => "subheading",
            Self::MainText => "mainText",
            Self::ButtonText => "buttonText",
            Self::ButtonUrl => "buttonUrl",
            Self::PrimaryColor => "primaryColor",
            Self::SecondaryColor => "secondaryColor",
            Self::FooterText => "footerText",
            Self::FacebookUrl => "facebookUrl",
            Self::TwitterUrl => "twitterUrl",
            Self::InstagramUrl => "instagramUrl",
            Self::LinkedinUrl => "linkedinUrl",
        }
    }

    /// Look up a placeholder by its exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The full token text, e.g. `{{heading}}`.
    #[must_use]
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }

    /// Current value of this placeholder in `data`.
    #[must_use]
    pub fn value(self, data: &TemplateData) -> &str {
        match self {
            Self::CompanyName => &data.company_name,
            Self::CompanyLogo => &data.company_logo_url,
            Self::Heading => &data.heading,
            Self::Subheading => &data.subheading,
            Self::MainText => &data.content.main_text,
            Self::ButtonText => &data.button_text,
            Self::ButtonUrl => &data.button_url,
            Self::PrimaryColor => &data.primary_color,
            Self::SecondaryColor => &data.secondary_color,
            Self::FooterText => &data.footer_text,
            Self::FacebookUrl => &data.social_links.facebook,
            Self::TwitterUrl => &data.social_links.twitter,
            Self::InstagramUrl => &data.social_links.instagram,
            Self::LinkedinUrl => &data.social_links.linkedin,
        }
    }

    /// Short description for the variables guide.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::CompanyName => "Your company name",
            Self::CompanyLogo => "Company logo URL",
            Self::Heading => "Main email heading",
            Self::Subheading => "Email subheading",
            Self::MainText => "Main email content",
            Self::ButtonText => "Button text",
            Self::ButtonUrl => "Button URL",
            Self::PrimaryColor => "Primary brand color",
            Self::SecondaryColor => "Secondary brand color",
            Self::FooterText => "Footer text",
            Self::FacebookUrl => "Facebook page URL",
            Self::TwitterUrl => "Twitter profile URL",
            Self::InstagramUrl => "Instagram profile URL",
            Self::LinkedinUrl => "LinkedIn page URL",
        }
    }

    /// Example value for the variables guide.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::CompanyName => "Acme Corp",
            Self::CompanyLogo => "https://example.com/logo.png",
            Self::Heading => "Welcome to Our Newsletter",
            Self::Subheading => "Stay updated with our latest news",
            Self::MainText => "We're excited to share...",
            Self::ButtonText => "Get Started",
            Self::ButtonUrl => "https://example.com",
            Self::PrimaryColor => "#007cba",
            Self::SecondaryColor => "#333333",
            Self::FooterText => "© 2024 Your Company",
            Self::FacebookUrl => "https://facebook.com/company",
            Self::TwitterUrl => "https://twitter.com/company",
            Self::InstagramUrl => "https://instagram.com/company",
            Self::LinkedinUrl => "https://linkedin.com/company",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}
