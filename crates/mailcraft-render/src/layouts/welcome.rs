use super::styles::{self, CONTAINER, CONTENT, FOOTER};
use mailcraft_core::TemplateData;

pub(super) fn render(data: &TemplateData) -> String {
    let steps: String = data
        .content
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            format!(
                r#"
      <div style="display: flex; align-items: center; margin: 15px 0; padding: 15px; background: #f8f9fa; border-radius: 8px;">
        <div style="background: {primary}; color: white; width: 30px; height: 30px; border-radius: 50%; display: flex; align-items: center; justify-content: center; margin-right: 15px; font-weight: bold;">{step}</div>
        <p style="margin: 0; color: #666;">{feature}</p>
      </div>"#,
                primary = data.primary_color,
                step = index + 1,
            )
        })
        .collect();

    format!(
        r#"<div style="{CONTAINER}">
  <header style="background-color: {primary}; color: white; padding: 40px 20px; text-align: center;">
    <img src="{logo}" alt="{company}" style="max-height: 60px; margin-bottom: 25px;">
    <h1 style="margin: 0; font-size: 30px;">👋 {heading}</h1>
    <p style="margin: 15px 0 0 0; font-size: 18px; opacity: 0.9;">{subheading}</p>
  </header>
  <section style="{CONTENT}">
    <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 25px; border-radius: 10px; margin: 25px 0;">
      <h2 style="margin: 0 0 15px 0; font-size: 24px;">Welcome to the family! 🎉</h2>
      <p style="margin: 0; opacity: 0.9;">{main_text}</p>
    </div>
    <h3 style="color: {secondary}; margin: 30px 0 20px 0;">Here's what happens next:</h3>
    <div style="margin: 25px 0;">{steps}
    </div>
    <div style="text-align: center; margin: 40px 0;">
      <a href="{button_url}" style="{button_style}">{button_text}</a>
    </div>
    <div style="background: #e8f5e8; padding: 20px; border-radius: 8px; border-left: 4px solid #28a745; margin: 30px 0;">
      <p style="margin: 0; color: #155724;"><strong>Need help?</strong> We're here for you! Reply to this email or contact our support team.</p>
    </div>
  </section>
  <footer style="{FOOTER}">
    <p style="margin: 0 0 15px 0;">Follow us for updates:</p>
    <div style="margin-bottom: 15px;">
      {social}
    </div>
    <p style="margin: 0; font-size: 11px; color: #999;">{footer_text}</p>
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
        social = styles::social_row(data, &["Facebook", "Twitter", "Instagram"]),
        footer_text = data.footer_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_from_one() {
        let data = TemplateData::default();
        let html = render(&data);
        for step in 1..=data.content.features.len() {
            assert!(html.contains(&format!("font-weight: bold;\">{step}</div>")));
        }
        assert!(!html.contains("font-weight: bold;\">0</div>"));
    }

    #[test]
    fn test_wave_prefixed_heading() {
        let data = TemplateData {
            heading: "Hello".to_string(),
            ..TemplateData::default()
        };
        assert!(render(&data).contains("👋 Hello</h1>"));
    }
}
