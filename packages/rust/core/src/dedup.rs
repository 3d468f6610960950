//! Membership decisions for candidate records against accumulated sets.
//!
//! One generic rule serves every record type: a candidate is a duplicate
//! iff some existing record matches it on every field of the type's key.
//! The same key-equality functions feed both the processing-time preview
//! pass and the commit-time confirming pass, so the two can never diverge.

use leadbase_shared::{Company, Contact, PipelineDeal};

/// True iff some existing record matches the candidate under `same_key`.
pub fn is_duplicate<T>(
    candidate: &T,
    existing: &[T],
    same_key: impl Fn(&T, &T) -> bool,
) -> bool {
    existing.iter().any(|record| same_key(candidate, record))
}

/// Key equality for contacts: (contact_name, email, company_name).
pub fn same_contact(a: &Contact, b: &Contact) -> bool {
    a.dedup_key() == b.dedup_key()
}

/// Key equality for companies: (company_name, website).
pub fn same_company(a: &Company, b: &Company) -> bool {
    a.dedup_key() == b.dedup_key()
}

/// Key equality for deals: (deal_name, company_name, contact_name).
/// The enriched `contact_email` is deliberately not compared.
pub fn same_deal(a: &PipelineDeal, b: &PipelineDeal) -> bool {
    a.dedup_key() == b.dedup_key()
}

/// Email templates have no key fields; identity is the whole text.
pub fn same_template(a: &String, b: &String) -> bool {
    a == b
}
