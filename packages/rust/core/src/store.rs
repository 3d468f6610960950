//! Process-wide accumulation store.
//!
//! One mutex guards the four record sequences and the ambient settings, and
//! every logical operation takes it exactly once. That makes each mutation
//! (append-batch, clear-all, remove-last, settings update) and each
//! preview read atomic and serializable relative to the others: a confirm
//! can never dedup against a store state that is mid-clear. Nothing under
//! the lock performs I/O — enrichment runs before any store call.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use leadbase_shared::{Company, Contact, PipelineDeal, Settings, SettingsUpdate};

use crate::dedup::{is_duplicate, same_company, same_contact, same_deal, same_template};

// ---------------------------------------------------------------------------
// Batches and totals
// ---------------------------------------------------------------------------

/// Records extracted from one document, or a preview of the not-yet-stored
/// subset of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadBatch {
    pub contacts: Vec<Contact>,
    pub companies: Vec<Company>,
    pub deals: Vec<PipelineDeal>,
    pub email_templates: Vec<String>,
}

impl LeadBatch {
    /// True when every sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
            && self.companies.is_empty()
            && self.deals.is_empty()
            && self.email_templates.is_empty()
    }
}

/// Per-sequence counts of the accumulated result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreTotals {
    pub contacts: usize,
    pub companies: usize,
    pub deals: usize,
    pub email_templates: usize,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct StoreInner {
    contacts: Vec<Contact>,
    companies: Vec<Company>,
    deals: Vec<PipelineDeal>,
    email_templates: Vec<String>,
    settings: Settings,
}

impl StoreInner {
    fn totals(&self) -> StoreTotals {
        StoreTotals {
            contacts: self.contacts.len(),
            companies: self.companies.len(),
            deals: self.deals.len(),
            email_templates: self.email_templates.len(),
        }
    }

    /// The subset of `batch` not already present, each sequence filtered
    /// independently under its own key rule.
    fn filter_new(&self, batch: &LeadBatch) -> LeadBatch {
        LeadBatch {
            contacts: batch
                .contacts
                .iter()
                .filter(|c| !is_duplicate(*c, &self.contacts, same_contact))
                .cloned()
                .collect(),
            companies: batch
                .companies
                .iter()
                .filter(|c| !is_duplicate(*c, &self.companies, same_company))
                .cloned()
                .collect(),
            deals: batch
                .deals
                .iter()
                .filter(|d| !is_duplicate(*d, &self.deals, same_deal))
                .cloned()
                .collect(),
            email_templates: batch
                .email_templates
                .iter()
                .filter(|t| !is_duplicate(*t, &self.email_templates, same_template))
                .cloned()
                .collect(),
        }
    }
}

/// Shared, process-lifetime result set. All state is lost on restart.
#[derive(Debug)]
pub struct LeadStore {
    inner: Mutex<StoreInner>,
}

impl LeadStore {
    /// Create a store with the given startup settings and empty sequences.
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                settings,
                ..Default::default()
            }),
        }
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.inner.lock().settings.clone()
    }

    /// Apply a partial settings update; returns the resulting settings.
    pub fn update_settings(&self, update: SettingsUpdate) -> Settings {
        let mut inner = self.inner.lock();
        update.apply(&mut inner.settings);
        debug!(settings = ?inner.settings, "settings updated");
        inner.settings.clone()
    }

    /// Current per-sequence counts.
    pub fn totals(&self) -> StoreTotals {
        self.inner.lock().totals()
    }

    /// Preview pass: the subset of `batch` that is new against the store's
    /// current contents. Read-only — nothing is committed.
    pub fn preview(&self, batch: &LeadBatch) -> LeadBatch {
        self.inner.lock().filter_new(batch)
    }

    /// Confirming pass: re-check `batch` against the store state *now* and
    /// append the still-new subset. Filter and append happen under one
    /// lock acquisition, so the commit is all-or-nothing relative to any
    /// concurrent clear or other confirm.
    pub fn confirm(&self, batch: &LeadBatch) -> StoreTotals {
        let mut inner = self.inner.lock();
        let fresh = inner.filter_new(batch);

        inner.contacts.extend(fresh.contacts);
        inner.companies.extend(fresh.companies);
        inner.deals.extend(fresh.deals);
        inner.email_templates.extend(fresh.email_templates);

        let totals = inner.totals();
        info!(
            contacts = totals.contacts,
            companies = totals.companies,
            deals = totals.deals,
            email_templates = totals.email_templates,
            "batch confirmed"
        );
        totals
    }

    /// Empty all four sequences. Settings are untouched.
    pub fn clear_all(&self) {
        let mut inner = self.inner.lock();
        inner.contacts.clear();
        inner.companies.clear();
        inner.deals.clear();
        inner.email_templates.clear();
        info!("store cleared");
    }

    /// Pop the last element of each sequence independently. A pop on an
    /// already-empty sequence is a no-op and does not block the others.
    pub fn remove_last(&self) -> StoreTotals {
        let mut inner = self.inner.lock();
        inner.contacts.pop();
        inner.companies.pop();
        inner.deals.pop();
        inner.email_templates.pop();
        inner.totals()
    }

    /// Clone out the full sequences for export.
    pub fn export_snapshot(&self) -> LeadBatch {
        let inner = self.inner.lock();
        LeadBatch {
            contacts: inner.contacts.clone(),
            companies: inner.companies.clone(),
            deals: inner.deals.clone(),
            email_templates: inner.email_templates.clone(),
        }
    }
}
