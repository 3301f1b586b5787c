//! Provider identity resolution from the company profile.

use claims_model::{BillingProvider, CompanyRecord, Submitter};

use crate::error::{AssembleError, Result};

/// Billing-specific field, falling back to the general company field.
fn fallback(specific: Option<&String>, general: Option<&String>) -> String {
    specific
        .or(general)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Resolve the billing provider block from the company profile.
///
/// NPI, Tax ID, and taxonomy have no fallback and no default; their
/// absence is a hard precondition failure reported before any assembly.
pub fn billing_provider(company: &CompanyRecord) -> Result<BillingProvider> {
    let mut missing = Vec::new();
    if company.npi.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("npi".to_string());
    }
    if company.tax_id.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("tax_id".to_string());
    }
    if company
        .taxonomy_code
        .as_deref()
        .is_none_or(|v| v.trim().is_empty())
    {
        missing.push("taxonomy_code".to_string());
    }
    if !missing.is_empty() {
        return Err(AssembleError::IncompleteProviderProfile { missing });
    }

    Ok(BillingProvider {
        npi: company.npi.clone().unwrap_or_default(),
        tax_id: company.tax_id.clone().unwrap_or_default(),
        taxonomy_code: company.taxonomy_code.clone().unwrap_or_default(),
        name: company
            .billing_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| company.name.clone()),
        address: fallback(company.billing_address.as_ref(), company.address.as_ref()),
        city: fallback(company.billing_city.as_ref(), company.city.as_ref()),
        state: fallback(company.billing_state.as_ref(), company.state.as_ref()),
        zip: fallback(company.billing_zip.as_ref(), company.zip.as_ref()),
        phone: fallback(company.billing_phone.as_ref(), company.phone.as_ref()),
    })
}

/// Build the submitter identity from the company profile and resolved
/// provider.
pub fn submitter(company: &CompanyRecord, provider: &BillingProvider) -> Submitter {
    Submitter {
        name: provider.name.clone(),
        identifier: provider.npi.clone(),
        contact_name: fallback(
            company.billing_contact_name.as_ref(),
            company.contact_name.as_ref(),
        ),
        contact_phone: provider.phone.clone(),
        contact_email: fallback(
            company.billing_contact_email.as_ref(),
            company.contact_email.as_ref(),
        ),
    }
}
