use super::styles::{self, CONTAINER, CONTENT, FOOTER};
use mailcraft_core::TemplateData;

pub(super) fn render(data: &TemplateData) -> String {
    let features: String = data
        .content
        .features
        .iter()
        .map(|feature| format!(r#"<li style="margin-bottom: 8px;">{feature}</li>"#))
        .collect();

    format!(
        r#"<div style="{CONTAINER}">
  <header style="background: linear-gradient(135deg, {primary}, {secondary}); color: white; padding: 40px 20px; text-align: center;">
    <img src="{logo}" alt="{company}" style="max-height: 60px; margin-bottom: 20px;">
    <h1 style="margin: 0; font-size: 32px; font-weight: 300;">{heading}</h1>
    <p style="margin: 15px 0 0 0; font-size: 18px; opacity: 0.9;">{subheading}</p>
  </header>
  <section style="{CONTENT}">
    <p style="color: #666; line-height: 1.6; font-size: 16px; margin: 0 0 25px 0;">{main_text}</p>
    <div style="background: #f8f9fa; padding: 25px; margin: 30px 0; border-radius: 8px; border-left: 4px solid {primary};">
      <h3 style="margin: 0 0 15px 0; color: {secondary};">What you get:</h3>
      <ul style="margin: 0; padding-left: 20px; color: #666;">{features}</ul>
    </div>
    <div style="text-align: center; margin: 40px 0;">
      <a href="{button_url}" style="{button_style}">{button_text}</a>
    </div>
  </section>
  <footer style="{FOOTER}">
    <div style="margin-bottom: 15px;">
      {social}
    </div>
    <p style="margin: 0;">{footer_text}</p>
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
        social = styles::social_row(data, &["Facebook", "Twitter", "Instagram", "LinkedIn"]),
        footer_text = data.footer_text,
    )
}
