use super::styles::{self, CONTAINER, CONTENT, FOOTER};
use mailcraft_core::TemplateData;

pub(super) fn render(data: &TemplateData) -> String {
    let rows: String = data
        .content
        .features
        .iter()
        .map(|feature| {
            format!(
                "\n      <tr>\n        <td style=\"padding: 12px 15px; border: 1px solid #ddd;\">✓ {feature}</td>\n      </tr>"
            )
        })
        .collect();

    format!(
        r#"<div style="{CONTAINER} border: 2px solid {primary};">
  <header style="background-color: white; padding: 30px 20px; text-align: center; border-bottom: 2px solid {primary};">
    <img src="{logo}" alt="{company}" style="max-height: 50px; margin-bottom: 15px;">
    <h1 style="margin: 0; color: {primary}; font-size: 28px;">{heading}</h1>
    <p style="margin: 10px 0 0 0; color: {secondary}; font-size: 16px;">{subheading}</p>
  </header>
  <section style="{CONTENT}">
    <p style="font-size: 16px;"><strong>Dear Valued Customer,</strong></p>
    <p style="color: #666; line-height: 1.6; margin: 20px 0;">{main_text}</p>
    <table style="width: 100%; border-collapse: collapse; margin: 25px 0;">
      <tr style="background-color: #f8f9fa;">
        <td style="padding: 15px; border: 1px solid #ddd; font-weight: bold;">Benefits Include:</td>
      </tr>{rows}
    </table>
    <div style="text-align: center; margin: 35px 0;">
      <a href="{button_url}" style="{button_style}">{button_text}</a>
    </div>
    <p style="margin-top: 30px;">Best regards,<br><strong>The {company} Team</strong></p>
  </section>
  <footer style="{FOOTER} background-color: #f8f9fa; border-top: 2px solid {primary};">
    <p style="margin: 0 0 10px 0;">{footer_text}</p>
    <div>
      {social}
    </div>
  </footer>
</div>"#,
        primary = data.primary_color,
        secondary = data.secondary_color,
        logo = data.company_logo_url,
        company = data.company_name,
        heading = data.heading,
        subheading = data.subheading,
        main_text = data.content.main_text,
        button_url = data.button_url,
        button_style = styles::button(data),
        button_text = data.button_text,
        social = styles::social_row(data, &["FB", "TW", "IG", "LI"]),
        footer_text = data.footer_text,
    )
}
