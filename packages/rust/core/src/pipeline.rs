//! Document processing pipeline: decode → extract → enrich → build →
//! preview, and the commit-time confirm.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use leadbase_enrich::EnrichClient;
use leadbase_shared::{LeadbaseError, Result};

use crate::emails;
use crate::records;
use crate::store::{LeadBatch, LeadStore, StoreTotals};

/// Result of processing one document: the not-yet-stored records plus the
/// store's current counts. The store itself is not mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub file_name: String,
    pub preview: LeadBatch,
    pub totals: StoreTotals,
}

/// Process one uploaded document into a preview of new records.
///
/// Enrichment is resolved before any store access, so the bounded external
/// call can never stall a store lock. Extraction itself cannot fail — the
/// extractors degrade to documented fallbacks — so the only error paths
/// here are input-format problems.
#[instrument(skip_all, fields(file = %file_name))]
pub async fn process_file(
    file_name: &str,
    bytes: &[u8],
    store: &LeadStore,
    enricher: &EnrichClient,
) -> Result<ProcessOutcome> {
    if !leadbase_extract::is_supported_file(file_name) {
        return Err(LeadbaseError::input(format!(
            "unsupported file type: {file_name}"
        )));
    }

    let text = leadbase_extract::decode_document(bytes);

    // The DOM tree is not Send; extract everything before awaiting.
    let profile = {
        let doc = leadbase_extract::parse_document(&text);
        leadbase_extract::extract_profile(&doc)
    };

    info!(
        company = %profile.company_name,
        founders = profile.founders.len(),
        "profile extracted"
    );

    let settings = store.settings();
    let domain = records::parse_domain(&profile.website);

    let (founder, email) = match records::lead_founder(&profile.founders) {
        Some(founder) => {
            let email = enricher
                .lookup_email(&founder.first_name, &founder.last_name, &domain)
                .await;
            (founder, email)
        }
        None => (
            records::placeholder_founder(),
            records::placeholder_email(&domain),
        ),
    };

    let lead = records::build_records(&profile, &founder, &email, &settings);
    let draft = emails::render_email(&lead.contact, &settings);

    let batch = LeadBatch {
        contacts: vec![lead.contact],
        companies: vec![lead.company],
        deals: vec![lead.deal],
        email_templates: vec![draft],
    };

    let preview = store.preview(&batch);
    let totals = store.totals();

    Ok(ProcessOutcome {
        file_name: file_name.to_string(),
        preview,
        totals,
    })
}

/// Commit a (possibly user-edited) preview. Records that became duplicates
/// since the preview was taken are dropped by the confirming pass.
pub fn confirm_batch(batch: &LeadBatch, store: &LeadStore) -> StoreTotals {
    store.confirm(batch)
}
