use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Billing status of a claim, owned by the claim-record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Draft,
    Ready,
    Submitted,
    Rejected,
    Denied,
}

impl ClaimStatus {
    /// States from which a single-claim submission attempt may start.
    /// Rejected and denied claims re-enter the pipeline for corrections.
    pub fn is_submittable(self) -> bool {
        matches!(
            self,
            ClaimStatus::Draft | ClaimStatus::Ready | ClaimStatus::Rejected | ClaimStatus::Denied
        )
    }

    /// States eligible for a multi-claim export. Stricter than single
    /// submission: previously rejected claims must be reworked one at a
    /// time, not swept into a payer batch.
    pub fn is_exportable(self) -> bool {
        matches!(self, ClaimStatus::Draft | ClaimStatus::Ready)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::Draft => "DRAFT",
            ClaimStatus::Ready => "READY",
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::Denied => "DENIED",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "DRAFT" => Ok(ClaimStatus::Draft),
            "READY" => Ok(ClaimStatus::Ready),
            "SUBMITTED" => Ok(ClaimStatus::Submitted),
            "REJECTED" => Ok(ClaimStatus::Rejected),
            "DENIED" => Ok(ClaimStatus::Denied),
            _ => Err(ModelError::UnknownStatus(value.to_string())),
        }
    }
}

/// Outcome of one dispatch attempt, independent of the claim's own status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchStatus {
    Pending,
    Transmitted,
    Error,
}

impl DispatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchStatus::Pending => "PENDING",
            DispatchStatus::Transmitted => "TRANSMITTED",
            DispatchStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target clearinghouse for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Clearinghouse {
    Generic,
    Availity,
    OfficeAlly,
}

impl Clearinghouse {
    pub fn as_str(self) -> &'static str {
        match self {
            Clearinghouse::Generic => "GENERIC",
            Clearinghouse::Availity => "AVAILITY",
            Clearinghouse::OfficeAlly => "OFFICE_ALLY",
        }
    }
}

impl fmt::Display for Clearinghouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim frequency for the submission: first pass, correction, or void.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionType {
    #[default]
    Original,
    Corrected,
    Void,
}

impl SubmissionType {
    /// Claim frequency code carried in the claim segment (837P CLM05-3).
    pub fn frequency_code(self) -> &'static str {
        match self {
            SubmissionType::Original => "1",
            SubmissionType::Corrected => "7",
            SubmissionType::Void => "8",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submittable_states() {
        assert!(ClaimStatus::Draft.is_submittable());
        assert!(ClaimStatus::Ready.is_submittable());
        assert!(ClaimStatus::Rejected.is_submittable());
        assert!(ClaimStatus::Denied.is_submittable());
        assert!(!ClaimStatus::Submitted.is_submittable());
    }

    #[test]
    fn exportable_is_stricter_than_submittable() {
        assert!(ClaimStatus::Draft.is_exportable());
        assert!(ClaimStatus::Ready.is_exportable());
        assert!(!ClaimStatus::Rejected.is_exportable());
        assert!(!ClaimStatus::Denied.is_exportable());
        assert!(!ClaimStatus::Submitted.is_exportable());
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ClaimStatus::Draft,
            ClaimStatus::Ready,
            ClaimStatus::Submitted,
            ClaimStatus::Rejected,
            ClaimStatus::Denied,
        ] {
            assert_eq!(status.as_str().parse::<ClaimStatus>().unwrap(), status);
        }
        assert!("PAID".parse::<ClaimStatus>().is_err());
    }
}
