//! Email-draft concatenation and the in-memory ZIP bundle.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::FileOptions;

use leadbase_shared::{Company, Contact, LeadbaseError, PipelineDeal, Result};

use crate::tabular::{COMPANY_COLUMNS, CONTACT_COLUMNS, PIPELINE_COLUMNS, render_table};

/// Width of the rule line between email drafts.
const SEPARATOR_WIDTH: usize = 50;

/// Concatenate email drafts separated by a rule line.
/// Empty input yields an empty string.
pub fn render_email_templates(templates: &[String]) -> String {
    let separator = format!("\n\n{}\n\n", "-".repeat(SEPARATOR_WIDTH));
    templates.join(&separator)
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// Accumulated sequences to bundle; borrowed from a store snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BundleInput<'a> {
    pub contacts: &'a [Contact],
    pub companies: &'a [Company],
    pub deals: &'a [PipelineDeal],
    pub email_templates: &'a [String],
}

impl BundleInput<'_> {
    fn is_empty(&self) -> bool {
        self.contacts.is_empty()
            && self.companies.is_empty()
            && self.deals.is_empty()
            && self.email_templates.is_empty()
    }
}

/// Build the downloadable ZIP bundle in memory: three CSV files plus the
/// concatenated email drafts. An entirely empty store is a defined failure.
pub fn build_bundle(input: &BundleInput) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(LeadbaseError::Export(
            "no data available for download".into(),
        ));
    }

    let contacts_csv = render_table(input.contacts, &CONTACT_COLUMNS)?;
    let companies_csv = render_table(input.companies, &COMPANY_COLUMNS)?;
    let pipelines_csv = render_table(input.deals, &PIPELINE_COLUMNS)?;
    let templates_txt = render_email_templates(input.email_templates);

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let entry_opts = FileOptions::default();

    let entries: [(&str, &str); 4] = [
        ("contacts.csv", &contacts_csv),
        ("companies.csv", &companies_csv),
        ("pipelines.csv", &pipelines_csv),
        ("email_templates.txt", &templates_txt),
    ];

    for (name, content) in entries {
        writer
            .start_file(name, entry_opts)
            .map_err(|e| LeadbaseError::Export(format!("{name}: {e}")))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| LeadbaseError::Export(format!("{name}: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| LeadbaseError::Export(e.to_string()))?;

    let bytes = cursor.into_inner();
    debug!(
        contacts = input.contacts.len(),
        companies = input.companies.len(),
        deals = input.deals.len(),
        drafts = input.email_templates.len(),
        bundle_bytes = bytes.len(),
        "bundle assembled"
    );

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_input<'a>(
        contacts: &'a [Contact],
        templates: &'a [String],
    ) -> BundleInput<'a> {
        BundleInput {
            contacts,
            companies: &[],
            deals: &[],
            email_templates: templates,
        }
    }

    #[test]
    fn empty_templates_render_empty_string() {
        assert_eq!(render_email_templates(&[]), "");
    }

    #[test]
    fn single_template_has_no_separator() {
        let out = render_email_templates(&["draft one".into()]);
        assert_eq!(out, "draft one");
    }

    #[test]
    fn templates_are_separated_by_rule_line() {
        let out = render_email_templates(&["draft one".into(), "draft two".into()]);
        let separator = format!("\n\n{}\n\n", "-".repeat(50));
        assert_eq!(out, format!("draft one{separator}draft two"));
    }

    #[test]
    fn empty_store_is_a_defined_failure() {
        let input = sample_input(&[], &[]);
        let err = build_bundle(&input).unwrap_err();
        assert!(err.to_string().contains("no data"));
    }

    #[test]
    fn bundle_contains_all_four_entries() {
        let contacts = vec![Contact {
            contact_name: "John Smith".into(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            quality_level: "Prospect".into(),
            company_name: "Acme Inc".into(),
            industry: String::new(),
            email: "john.smith@acme.com".into(),
        }];
        let templates = vec!["Email: john.smith@acme.com".to_string()];
        let bytes = build_bundle(&sample_input(&contacts, &templates)).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "contacts.csv",
                "companies.csv",
                "pipelines.csv",
                "email_templates.txt"
            ]
        );

        let mut contacts_csv = String::new();
        archive
            .by_name("contacts.csv")
            .unwrap()
            .read_to_string(&mut contacts_csv)
            .unwrap();
        assert!(contacts_csv.starts_with("Contact Name,"));
        assert!(contacts_csv.contains("john.smith@acme.com"));

        // Empty sequences still produce header-only CSVs in the bundle.
        let mut companies_csv = String::new();
        archive
            .by_name("companies.csv")
            .unwrap()
            .read_to_string(&mut companies_csv)
            .unwrap();
        assert_eq!(companies_csv, "Company Name,Website\n");
    }
}
