use super::styles::CONTAINER;
use mailcraft_core::TemplateData;

// No logo and no social links; the testimonial is unique to this layout.
pub(super) fn render(data: &TemplateData) -> String {
    let testimonial = &data.content.testimonial;

    format!(
        r#"<div style="{CONTAINER}">
  <header style="padding: 50px 30px; text-align: center; border-bottom: 3px solid {primary};">
    <h1 style="margin: 0; font-weight: 300; color: {secondary}; font-size: 36px; letter-spacing: -1px;">{heading}</h1>
    <p style="margin: 20px 0 0 0; color: #666; font-size: 18px;">{subheading}</p>
  </header>
  <section style="padding: 60px 30px;">
    <p style="font-size: 18px; line-height: 1.8; color: {secondary}; margin: 0 0 40px 0;">{main_text}</p>
    <div style="text-align: center; margin: 50px 0;">
      <a href="{button_url}" style="display: inline-block; padding: 18px 40px; background-color: {secondary}; color: white; text-decoration: none; font-size: 16px; letter-spacing: 1px; text-transform: uppercase;">{button_text}</a>
    </div>
    <div style="border-left: 3px solid {primary}; padding-left: 25px; margin: 40px 0; font-style: italic;">
      <p style="margin: 0; font-size: 16px; color: #666;">"{quote}"</p>
      <p style="margin: 15px 0 0 0; font-size: 14px; color: #999;">— {author}, {position}</p>
    </div>
  </section>
  <footer style="padding: 40px 30px; text-align: center; border-top: 1px solid #eee;">
    <p style="margin: 0 0 20px 0; font-size: 12px; color: #999;">{footer_text}</p>
  </footer>
</div>"#,
        primary = data.primary_color,
        secondary = data.secondary_color,
        heading = data.heading,
        subheading = data.subheading,
        main_text = data.content.main_text,
        button_url = data.button_url,
        button_text = data.button_text,
        quote = testimonial.text,
        author = testimonial.author,
        position = testimonial.position,
        footer_text = data.footer_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_attribution() {
        let html = render(&TemplateData::default());
        assert!(html.contains("— John Smith, CEO, Tech Corp"));
        assert!(html.contains("\"This service has completely transformed"));
    }

    #[test]
    fn test_no_logo_or_social_links() {
        let data = TemplateData::default();
        let html = render(&data);
        assert!(!html.contains("<img"));
        assert!(!html.contains(&data.social_links.facebook));
    }

    #[test]
    fn test_plain_footer() {
        let html = render(&TemplateData::default());
        assert!(html.contains(
            r#"<footer style="padding: 40px 30px; text-align: center; border-top: 1px solid #eee;">"#
        ));
        assert!(!html.contains("#f8f9fa"));
    }
}
