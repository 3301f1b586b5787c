//! Deterministic output file naming.
//!
//! Repeated exports of the same input must produce the same name so files
//! are easy to correlate with audit log entries.

/// What the file covers: one claim or a multi-claim export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileScope<'a> {
    /// Single-claim submission, named by claim number.
    Claim(&'a str),
    /// Multi-claim export, named by claim count.
    Batch(usize),
}

/// Placeholder when the company name sanitizes to nothing.
const FALLBACK_COMPANY: &str = "COMPANY";

/// Derive the output file name from the sanitized company name and scope.
pub fn file_name(company_name: &str, scope: FileScope<'_>) -> String {
    let mut company = sanitize(company_name);
    if company.is_empty() {
        company = FALLBACK_COMPANY.to_string();
    }
    match scope {
        FileScope::Claim(claim_number) => {
            format!("{company}_{}_837P.edi", sanitize(claim_number))
        }
        FileScope::Batch(claim_count) => {
            format!("{company}_BATCH_{claim_count}CLAIMS_837P.edi")
        }
    }
}

/// Uppercase, ASCII alphanumerics kept, every other run collapsed to one
/// underscore.
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_uppercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_and_uppercases() {
        assert_eq!(sanitize("Sunrise Home Care, LLC"), "SUNRISE_HOME_CARE_LLC");
        assert_eq!(sanitize("  A&B  Care  "), "A_B_CARE");
    }

    #[test]
    fn unusable_company_name_falls_back_to_placeholder() {
        assert_eq!(
            file_name("", FileScope::Claim("CLM-1001")),
            "COMPANY_CLM_1001_837P.edi"
        );
        assert_eq!(
            file_name("***", FileScope::Batch(2)),
            "COMPANY_BATCH_2CLAIMS_837P.edi"
        );
    }

    #[test]
    fn single_claim_name() {
        assert_eq!(
            file_name("Sunrise Home Care", FileScope::Claim("CLM-1001")),
            "SUNRISE_HOME_CARE_CLM_1001_837P.edi"
        );
    }

    #[test]
    fn batch_name_uses_claim_count() {
        assert_eq!(
            file_name("Sunrise Home Care", FileScope::Batch(3)),
            "SUNRISE_HOME_CARE_BATCH_3CLAIMS_837P.edi"
        );
    }

    #[test]
    fn naming_is_stable_across_calls() {
        let a = file_name("Sunrise Home Care", FileScope::Batch(2));
        let b = file_name("Sunrise Home Care", FileScope::Batch(2));
        assert_eq!(a, b);
    }
}
