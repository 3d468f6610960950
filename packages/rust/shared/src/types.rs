//! Core domain records for Leadbase lead extraction.

use serde::{Deserialize, Serialize};

/// Company name used when every extraction strategy fails.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Contact name used when a profile page lists no founders.
pub const UNKNOWN_CONTACT: &str = "Unknown Contact";

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// A founder contact extracted from one profile page.
///
/// At most one Contact is produced per document: only the first discovered
/// founder is used, and a placeholder named [`UNKNOWN_CONTACT`] stands in
/// when none is found. Records are never mutated after creation; the store
/// only appends and removes them whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_name: String,
    pub first_name: String,
    pub last_name: String,
    pub quality_level: String,
    pub company_name: String,
    pub industry: String,
    pub email: String,
}

impl Contact {
    /// Identity key for deduplication: (contact_name, email, company_name).
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.contact_name, &self.email, &self.company_name)
    }
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// A company extracted from one profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_name: String,
    pub website: String,
}

impl Company {
    /// Identity key for deduplication: (company_name, website).
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.company_name, &self.website)
    }
}

// ---------------------------------------------------------------------------
// PipelineDeal
// ---------------------------------------------------------------------------

/// A sourcing-pipeline deal derived from the same founder/company data as
/// the page's [`Contact`].
///
/// The founder name is carried under both `contact_name` and `contact` for
/// backward-compatible display in downstream sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDeal {
    pub deal_name: String,
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub sub_pipeline: String,
    pub description: String,
    pub stage: String,
    pub industry_vertical: String,
    pub investment_cycle: String,
    pub contact: String,
    pub sourcing_analyst: String,
}

impl PipelineDeal {
    /// Identity key for deduplication: (deal_name, company_name, contact_name).
    ///
    /// `contact_email` is deliberately not part of the key, unlike
    /// [`Contact::dedup_key`]. The two record types keep separate identity
    /// rules on purpose.
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.deal_name, &self.company_name, &self.contact_name)
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Ambient sourcing configuration applied to every processed document.
///
/// One global value lives in the store for the lifetime of the process;
/// there is no per-document override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub prospect_quality_level: String,
    pub sub_pipeline: String,
    pub stage: String,
    pub industry_vertical: String,
    pub industry: String,
    pub sourcing_analyst: String,
    pub investment_cycle: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prospect_quality_level: "Prospect".into(),
            sub_pipeline: "HV STEM".into(),
            stage: "1. Source".into(),
            industry_vertical: String::new(),
            industry: String::new(),
            sourcing_analyst: String::new(),
            investment_cycle: String::new(),
        }
    }
}

/// A partial settings update: omitted fields retain their prior values,
/// unrecognized keys in the wire form are ignored by serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prospect_quality_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_pipeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_vertical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourcing_analyst: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_cycle: Option<String>,
}

impl SettingsUpdate {
    /// Apply this update in place, leaving omitted fields untouched.
    pub fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.prospect_quality_level {
            settings.prospect_quality_level = v;
        }
        if let Some(v) = self.sub_pipeline {
            settings.sub_pipeline = v;
        }
        if let Some(v) = self.stage {
            settings.stage = v;
        }
        if let Some(v) = self.industry_vertical {
            settings.industry_vertical = v;
        }
        if let Some(v) = self.industry {
            settings.industry = v;
        }
        if let Some(v) = self.sourcing_analyst {
            settings.sourcing_analyst = v;
        }
        if let Some(v) = self.investment_cycle {
            settings.investment_cycle = v;
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.prospect_quality_level.is_none()
            && self.sub_pipeline.is_none()
            && self.stage.is_none()
            && self.industry_vertical.is_none()
            && self.industry.is_none()
            && self.sourcing_analyst.is_none()
            && self.investment_cycle.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.prospect_quality_level, "Prospect");
        assert_eq!(settings.sub_pipeline, "HV STEM");
        assert_eq!(settings.stage, "1. Source");
        assert_eq!(settings.sourcing_analyst, "");
    }

    #[test]
    fn settings_update_retains_omitted_fields() {
        let mut settings = Settings::default();
        let update = SettingsUpdate {
            sourcing_analyst: Some("Jane Doe".into()),
            industry: Some("Robotics".into()),
            ..Default::default()
        };
        update.apply(&mut settings);

        assert_eq!(settings.sourcing_analyst, "Jane Doe");
        assert_eq!(settings.industry, "Robotics");
        // Untouched fields keep their defaults.
        assert_eq!(settings.sub_pipeline, "HV STEM");
        assert_eq!(settings.stage, "1. Source");
    }

    #[test]
    fn settings_update_ignores_unknown_keys() {
        let update: SettingsUpdate = serde_json::from_str(
            r#"{"sourcing_analyst": "Jane Doe", "not_a_setting": "ignored"}"#,
        )
        .expect("deserialize update");
        assert_eq!(update.sourcing_analyst.as_deref(), Some("Jane Doe"));
        assert!(update.stage.is_none());
    }

    #[test]
    fn contact_key_includes_email_deal_key_does_not() {
        let contact = Contact {
            contact_name: "John Smith".into(),
            first_name: "John".into(),
            last_name: "Smith".into(),
            quality_level: "Prospect".into(),
            company_name: "Acme Inc".into(),
            industry: String::new(),
            email: "john.smith@acme.com".into(),
        };
        assert_eq!(
            contact.dedup_key(),
            ("John Smith", "john.smith@acme.com", "Acme Inc")
        );

        let deal = PipelineDeal {
            deal_name: "Acme Inc".into(),
            company_name: "Acme Inc".into(),
            contact_name: "John Smith".into(),
            contact_email: "john.smith@acme.com".into(),
            sub_pipeline: "HV STEM".into(),
            description: String::new(),
            stage: "1. Source".into(),
            industry_vertical: String::new(),
            investment_cycle: String::new(),
            contact: "John Smith".into(),
            sourcing_analyst: String::new(),
        };
        assert_eq!(deal.dedup_key(), ("Acme Inc", "Acme Inc", "John Smith"));
    }
}
