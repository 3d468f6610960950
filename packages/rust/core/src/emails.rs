//! Outreach email drafts, one per contact.

use leadbase_shared::{Contact, Settings};

/// Render the outreach draft for a contact using the current settings.
pub fn render_email(contact: &Contact, settings: &Settings) -> String {
    format!(
        "Email: {email}
Subject Line: {company} Investment Opportunity - Hillside Ventures Inquiry
Content:

Hi {first}!

I'm {analyst}, an analyst at a student-run venture firm at the University of Connecticut. Our check sizes range from $25,000 to $50,000. In our research, {company} stood out due to your impactful value proposition.

We'd love to learn more about traction and if you're currently fundraising. Would you be open to a quick call in the next few weeks?

Looking forward to connecting!

Best,
{analyst}
",
        email = contact.email,
        company = contact.company_name,
        first = contact.first_name,
        analyst = settings.sourcing_analyst,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_carries_analyst_and_subject() {
        let contact = Contact {
            contact_name: "John Smith".into(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            quality_level: "Prospect".into(),
            company_name: "Acme Inc".into(),
            industry: String::new(),
            email: "john.smith@acme.com".into(),
        };
        let settings = Settings {
            sourcing_analyst: "Jane Doe".into(),
            ..Default::default()
        };

        let draft = render_email(&contact, &settings);
        assert!(draft.contains("Email: john.smith@acme.com"));
        assert!(draft.contains(
            "Subject Line: Acme Inc Investment Opportunity - Hillside Ventures Inquiry"
        ));
        assert!(draft.contains("Hi John!"));
        assert!(draft.contains("I'm Jane Doe"));
        assert!(draft.trim_end().ends_with("Jane Doe"));
    }

    #[test]
    fn identical_inputs_render_identical_drafts() {
        let contact = Contact {
            contact_name: "Unknown Contact".into(),
            first_name: "Unknown".into(),
            last_name: "Contact".into(),
            quality_level: "Prospect".into(),
            company_name: "Unknown Company".into(),
            industry: String::new(),
            email: "contact@unknown.com".into(),
        };
        let settings = Settings::default();
        // Drafts dedup by exact text equality, so rendering must be stable.
        assert_eq!(
            render_email(&contact, &settings),
            render_email(&contact, &settings)
        );
    }
}
