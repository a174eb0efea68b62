//! Inline style table shared by the built-in layouts.

use mailcraft_core::TemplateData;

pub(super) const CONTAINER: &str =
    "font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; background-color: white;";
pub(super) const CONTENT: &str = "padding: 30px 20px;";
pub(super) const FOOTER: &str = "background-color: #f8f9fa; padding: 20px; text-align: center; \
                                 border-top: 1px solid #e9ecef; font-size: 12px; color: #6c757d;";
pub(super) const SOCIAL_LINK: &str = "display: inline-block; margin: 0 5px; padding: 8px 12px; \
                                      color: white; text-decoration: none; border-radius: 4px; \
                                      font-size: 12px;";

pub(super) const FACEBOOK_BLUE: &str = "#3b5998";
pub(super) const TWITTER_BLUE: &str = "#1da1f2";
pub(super) const INSTAGRAM_PINK: &str = "#e4405f";
pub(super) const LINKEDIN_BLUE: &str = "#0077b5";

/// Call-to-action button style in the primary brand color.
pub(super) fn button(data: &TemplateData) -> String {
    format!(
        "display: inline-block; padding: 15px 30px; background-color: {}; color: white; \
         text-decoration: none; border-radius: 5px; font-weight: bold; font-size: 16px;",
        data.primary_color
    )
}

/// A single social badge link.
pub(super) fn social_link(url: &str, color: &str, label: &str) -> String {
    format!(r#"<a href="{url}" style="{SOCIAL_LINK} background-color: {color};">{label}</a>"#)
}

/// Facebook, Twitter and Instagram badges, with LinkedIn when `labels` has a fourth entry.
pub(super) fn social_row(data: &TemplateData, labels: &[&str]) -> String {
    let links = [
        (data.social_links.facebook.as_str(), FACEBOOK_BLUE),
        (data.social_links.twitter.as_str(), TWITTER_BLUE),
        (data.social_links.instagram.as_str(), INSTAGRAM_PINK),
        (data.social_links.linkedin.as_str(), LINKEDIN_BLUE),
    ];
    links
        .iter()
        .zip(labels)
        .map(|((url, color), label)| social_link(url, color, label))
        .collect::<Vec<_>>()
        .join("\n      ")
}
