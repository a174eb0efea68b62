//! Email-safe document assembly and export artifacts.

use crate::error::{RenderError, Result};
use mailcraft_core::TemplateData;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

/// MIME type of exported documents.
pub const EXPORT_MIME_TYPE: &str = "text/html";

fn doctype_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<!DOCTYPE[^>]*>").expect("Invalid doctype regex"))
}

fn title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<title\b[^>]*>.*?</title\s*>|<title\b[^>]*>|</title\s*>")
            .expect("Invalid title regex")
    })
}

/// Remove document-level markup: any doctype, and title elements or stray title tags.
fn strip_document_markup(input: &str) -> String {
    let without_doctype = doctype_regex().replace_all(input, "");
    title_regex().replace_all(&without_doctype, "").into_owned()
}

/// Wrap a rendered fragment in a complete email-client-safe document.
///
/// The fragment and stylesheet are inserted as-is apart from any `<!DOCTYPE>`
/// or `<title>` markup they carry, so the output has exactly one of each.
/// `body_css` lands in the single `<style>` block between the client resets
/// and the responsive rules.
#[must_use]
pub fn assemble(body_html: &str, body_css: &str, data: &TemplateData) -> String {
    let body = strip_document_markup(body_html);
    let body_css = strip_document_markup(body_css);
    let title = escape_html(&format!("{} - {}", data.heading, data.company_name));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <title>{title}</title>
    <style>
        /* Reset styles for email clients */
        body, table, td, p, a, li, blockquote {{ -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }}
        table, td {{ mso-table-lspace: 0pt; mso-table-rspace: 0pt; }}
        img {{ -ms-interpolation-mode: bicubic; border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; }}

        /* Client-specific styles */
        .ExternalClass {{ width: 100%; }}
        .ExternalClass, .ExternalClass p, .ExternalClass span, .ExternalClass font, .ExternalClass td, .ExternalClass div {{ line-height: 100%; }}

        /* Outlook specific */
        table {{ border-collapse: collapse; }}

        /* Custom styles */
        {body_css}

        /* Mobile responsive */
        @media only screen and (max-width: 600px) {{
            .mobile-center {{ text-align: center !important; }}
            .mobile-full-width {{ width: 100% !important; }}
            .mobile-padding {{ padding: 15px !important; }}
            .mobile-font-size {{ font-size: 16px !important; }}
        }}

        /* Dark mode support */
        @media (prefers-color-scheme: dark) {{
            .dark-mode-bg {{ background-color: #1a1a1a !important; }}
            .dark-mode-text {{ color: #ffffff !important; }}
        }}
    </style>
</head>
<body style="margin: 0; padding: 0; background-color: #f4f4f4; font-family: Arial, sans-serif;">
    <table role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%">
        <tr>
            <td align="center" style="padding: 20px 0;">
                {body}
            </td>
        </tr>
    </table>
</body>
</html>"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Download filename for an export of `template_id` taken at `unix_millis`.
#[must_use]
pub fn export_file_name(template_id: &str, unix_millis: i64) -> String {
    format!("{template_id}-email-template-{unix_millis}.html")
}

/// An assembled document ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename
    pub file_name: String,
    /// Always [`EXPORT_MIME_TYPE`]
    pub mime_type: &'static str,
    /// Full document text
    pub contents: String,
}

impl ExportArtifact {
    /// Package `contents` for `template_id`, stamped with the current time.
    #[must_use]
    pub fn new(template_id: &str, contents: String) -> Self {
        Self::with_timestamp(template_id, contents, chrono::Utc::now().timestamp_millis())
    }

    /// Package `contents` with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(template_id: &str, contents: String, unix_millis: i64) -> Self {
        Self {
            file_name: export_file_name(template_id, unix_millis),
            mime_type: EXPORT_MIME_TYPE,
            contents,
        }
    }

    /// Write the artifact into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        let write_err = |source: std::io::Error| RenderError::Write {
            path: path.display().to_string(),
            source,
        };

        std::fs::create_dir_all(dir).map_err(write_err)?;
        debug!(dir = %dir.display(), "export directory ready");
        std::fs::write(&path, &self.contents).map_err(write_err)?;
        info!(path = %path.display(), bytes = self.contents.len(), "exported template");
        Ok(path)
    }
}
