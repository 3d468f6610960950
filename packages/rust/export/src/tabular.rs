//! Delimited-text rendering with fixed column orders.

use leadbase_shared::{Company, Contact, LeadbaseError, PipelineDeal, Result};

/// Column order for `contacts.csv`.
pub const CONTACT_COLUMNS: [&str; 7] = [
    "Contact Name",
    "First Name",
    "Last Name",
    "Prospect Quality Level",
    "Company Name",
    "Industry",
    "Email",
];

/// Column order for `companies.csv`.
pub const COMPANY_COLUMNS: [&str; 2] = ["Company Name", "Website"];

/// Column order for `pipelines.csv`.
///
/// `Contact Email` is carried by the record but not exported here; the
/// downstream sheet keeps the founder under `Contact Name` and `Contact`.
pub const PIPELINE_COLUMNS: [&str; 10] = [
    "Deal Name",
    "Company Name",
    "Contact Name",
    "Sub-Pipeline",
    "Description",
    "Stage",
    "Industry Vertical",
    "Investment Cycle",
    "Contact",
    "Sourcing Analyst",
];

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Column-name projection for exportable records.
///
/// Unknown columns render as empty strings; record fields absent from a
/// column list are simply not emitted.
pub trait TabularRecord {
    fn field(&self, column: &str) -> &str;
}

impl TabularRecord for Contact {
    fn field(&self, column: &str) -> &str {
        match column {
            "Contact Name" => &self.contact_name,
            "First Name" => &self.first_name,
            "Last Name" => &self.last_name,
            "Prospect Quality Level" => &self.quality_level,
            "Company Name" => &self.company_name,
            "Industry" => &self.industry,
            "Email" => &self.email,
            _ => "",
        }
    }
}

impl TabularRecord for Company {
    fn field(&self, column: &str) -> &str {
        match column {
            "Company Name" => &self.company_name,
            "Website" => &self.website,
            _ => "",
        }
    }
}

impl TabularRecord for PipelineDeal {
    fn field(&self, column: &str) -> &str {
        match column {
            "Deal Name" => &self.deal_name,
            "Company Name" => &self.company_name,
            "Contact Name" => &self.contact_name,
            "Contact Email" => &self.contact_email,
            "Sub-Pipeline" => &self.sub_pipeline,
            "Description" => &self.description,
            "Stage" => &self.stage,
            "Industry Vertical" => &self.industry_vertical,
            "Investment Cycle" => &self.investment_cycle,
            "Contact" => &self.contact,
            "Sourcing Analyst" => &self.sourcing_analyst,
            _ => "",
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render records as delimited text: header row plus one row per record.
/// Empty input still yields the header row.
pub fn render_table<T: TabularRecord>(records: &[T], columns: &[&str]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns)
        .map_err(|e| LeadbaseError::Export(e.to_string()))?;

    for record in records {
        writer
            .write_record(columns.iter().map(|column| record.field(column)))
            .map_err(|e| LeadbaseError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LeadbaseError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| LeadbaseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            contact_name: "John Smith".into(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            quality_level: "Prospect".into(),
            company_name: "Acme Inc".into(),
            industry: String::new(),
            email: "john.smith@acme.com".into(),
        }
    }

    #[test]
    fn empty_input_renders_header_only() {
        let out = render_table::<Contact>(&[], &CONTACT_COLUMNS).unwrap();
        assert_eq!(
            out,
            "Contact Name,First Name,Last Name,Prospect Quality Level,Company Name,Industry,Email\n"
        );
    }

    #[test]
    fn renders_one_row_per_record() {
        let out = render_table(&[contact()], &CONTACT_COLUMNS).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "John Smith,John,Smith,Prospect,Acme Inc,,john.smith@acme.com"
        );
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let company = Company {
            company_name: "Acme, Inc".into(),
            website: "acme.com".into(),
        };
        let out = render_table(&[company], &COMPANY_COLUMNS).unwrap();
        assert!(out.contains("\"Acme, Inc\",acme.com"));
    }

    #[test]
    fn pipeline_projection_drops_contact_email() {
        let deal = PipelineDeal {
            deal_name: "Acme Inc".into(),
            company_name: "Acme Inc".into(),
            contact_name: "John Smith".into(),
            contact_email: "john.smith@acme.com".into(),
            sub_pipeline: "HV STEM".into(),
            description: "Orchard robots".into(),
            stage: "1. Source".into(),
            industry_vertical: String::new(),
            investment_cycle: String::new(),
            contact: "John Smith".into(),
            sourcing_analyst: "Jane Doe".into(),
        };
        let out = render_table(&[deal], &PIPELINE_COLUMNS).unwrap();
        assert!(!out.contains("john.smith@acme.com"));
        assert!(out.contains("John Smith"));
    }

    #[test]
    fn unknown_column_renders_empty() {
        let out = render_table(&[contact()], &["Email", "Not A Column"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Email,Not A Column");
        assert_eq!(lines[1], "john.smith@acme.com,");
    }
}
