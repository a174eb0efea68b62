use super::styles::{self, CONTAINER, CONTENT, FOOTER};
use mailcraft_core::TemplateData;

const MAX_TILES: usize = 3;

pub(super) fn render(data: &TemplateData) -> String {
    let tiles: String = data
        .content
        .features
        .iter()
        .take(MAX_TILES)
        .map(|feature| {
            format!(
                r#"
      <div style="flex: 1; padding: 20px; margin: 0 10px; background: #f8f9fa; border-radius: 8px;">
        <div style="font-size: 24px; margin-bottom: 10px;">✨</div>
        <p style="margin: 0; font-size: 14px; color: #666;">{feature}</p>
      </div>"#
            )
        })
        .collect();

    format!(
        r#"<div style="{CONTAINER}">
  <header style="background: linear-gradient(45deg, #ff6b6b, #ee5a24); color: white; padding: 40px 20px; text-align: center; position: relative;">
    <div style="background: rgba(255,255,255,0.1); padding: 10px 20px; border-radius: 25px; display: inline-block; margin-bottom: 20px; font-size: 14px; font-weight: bold;">🎉 SPECIAL OFFER</div>
    <h1 style="margin: 0; font-size: 36px; font-weight: bold; text-shadow: 2px 2px 4px rgba(0,0,0,0.3);">{heading}</h1>
    <p style="margin: 15px 0 0 0; font-size: 20px; opacity: 0.95;">{subheading}</p>
  </header>
  <section style="{CONTENT}">
    <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; border-radius: 10px; text-align: center; margin: 30px 0;">
      <h2 style="margin: 0 0 15px 0; font-size: 28px;">Limited Time Offer!</h2>
      <p style="margin: 0; font-size: 18px; opacity: 0.9;">{main_text}</p>
    </div>
    <div style="display: flex; justify-content: space-around; margin: 30px 0; text-align: center;">{tiles}
    </div>
    <div style="text-align: center; margin: 40px 0;">
      <a href="{button_url}" style="display: inline-block; padding: 20px 40px; background: linear-gradient(45deg, #ff6b6b, #ee5a24); color: white; text-decoration: none; border-radius: 50px; font-weight: bold; font-size: 18px; text-transform: uppercase; letter-spacing: 1px; box-shadow: 0 4px 15px rgba(255,107,107,0.4);">{button_text}</a>
    </div>
  </section>
  <footer style="{FOOTER} background: #2c3e50; color: white;">
    <div style="margin-bottom: 15px;">
      {social}
    </div>
    <p style="margin: 0; color: #bdc3c7;">{footer_text}</p>
  </footer>
</div>"#,
        heading = data.heading,
        subheading = data.subheading,
        main_text = data.content.main_text,
        button_url = data.button_url,
        button_text = data.button_text,
        social = styles::social_row(data, &["📘", "🐦", "📷"]),
        footer_text = data.footer_text,
    )
}
