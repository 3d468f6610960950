//! Record building: extracted fields + ambient settings → normalized records.

use std::sync::LazyLock;

use regex::Regex;

use leadbase_extract::ExtractedProfile;
use leadbase_shared::{Company, Contact, PipelineDeal, Settings, UNKNOWN_CONTACT};

/// Domain used when a profile page carries no website at all.
const UNKNOWN_DOMAIN: &str = "unknown.com";

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());
static WWW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^www\.").unwrap());

// ---------------------------------------------------------------------------
// Name and domain parsing
// ---------------------------------------------------------------------------

/// Split a full name into (first, last).
///
/// One token → (token, ""); two → (first, second); three or more → the
/// first token and everything else joined. Multi-part first names are
/// knowingly misparsed by this rule.
pub fn split_name(full_name: &str) -> (String, String) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => (String::new(), String::new()),
        [only] => ((*only).to_string(), String::new()),
        [first, last] => ((*first).to_string(), (*last).to_string()),
        [first, rest @ ..] => ((*first).to_string(), rest.join(" ")),
    }
}

/// Extract the bare domain from a website value: lowercase, strip the
/// scheme and `www.`, and keep the part before the first path separator.
/// Empty input yields the literal `unknown.com`.
pub fn parse_domain(website: &str) -> String {
    if website.is_empty() {
        return UNKNOWN_DOMAIN.to_string();
    }

    let lowered = website.to_lowercase();
    let stripped = SCHEME_RE.replace(&lowered, "");
    let stripped = WWW_RE.replace(&stripped, "");

    stripped.split('/').next().unwrap_or_default().to_string()
}

// ---------------------------------------------------------------------------
// Founder selection
// ---------------------------------------------------------------------------

/// The one person a document contributes a Contact for.
#[derive(Debug, Clone)]
pub struct FounderLead {
    pub contact_name: String,
    pub first_name: String,
    pub last_name: String,
}

/// Pick the document's lead founder. Only the first founder is used;
/// additional founders are discarded.
pub fn lead_founder(founders: &[String]) -> Option<FounderLead> {
    let founder = founders.first()?;
    let (first_name, last_name) = split_name(founder);
    Some(FounderLead {
        contact_name: founder.clone(),
        first_name,
        last_name,
    })
}

/// Placeholder used when a page lists no founders.
pub fn placeholder_founder() -> FounderLead {
    FounderLead {
        contact_name: UNKNOWN_CONTACT.to_string(),
        first_name: "Unknown".to_string(),
        last_name: "Contact".to_string(),
    }
}

/// Placeholder address for the placeholder contact.
pub fn placeholder_email(domain: &str) -> String {
    format!("contact@{domain}")
}

// ---------------------------------------------------------------------------
// Record building
// ---------------------------------------------------------------------------

/// The three records one processed document yields.
#[derive(Debug, Clone)]
pub struct LeadRecords {
    pub contact: Contact,
    pub company: Company,
    pub deal: PipelineDeal,
}

/// Combine extracted fields, the selected founder, the resolved email, and
/// current settings into the document's records.
pub fn build_records(
    profile: &ExtractedProfile,
    founder: &FounderLead,
    email: &str,
    settings: &Settings,
) -> LeadRecords {
    let contact = Contact {
        contact_name: founder.contact_name.clone(),
        first_name: founder.first_name.clone(),
        last_name: founder.last_name.clone(),
        quality_level: settings.prospect_quality_level.clone(),
        company_name: profile.company_name.clone(),
        industry: settings.industry.clone(),
        email: email.to_string(),
    };

    let company = Company {
        company_name: profile.company_name.clone(),
        website: profile.website.clone(),
    };

    let deal = PipelineDeal {
        deal_name: profile.company_name.clone(),
        company_name: profile.company_name.clone(),
        contact_name: founder.contact_name.clone(),
        contact_email: email.to_string(),
        sub_pipeline: settings.sub_pipeline.clone(),
        description: profile.description.clone(),
        stage: settings.stage.clone(),
        industry_vertical: settings.industry_vertical.clone(),
        investment_cycle: settings.investment_cycle.clone(),
        contact: founder.contact_name.clone(),
        sourcing_analyst: settings.sourcing_analyst.clone(),
    };

    LeadRecords {
        contact,
        company,
        deal,
    }
}
