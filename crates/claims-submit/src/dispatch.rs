//! Clearinghouse dispatch boundary.
//!
//! One pluggable interface with a single concrete implementation (the
//! generic file-export path) and an explicit not-supported outcome for
//! the named clearinghouses that have no integration yet. Adding a real
//! integration means adding an implementation here, not touching the
//! lifecycle manager.

use claims_edi::EdiFile;
use claims_model::Clearinghouse;

/// Result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// File handed off; acknowledgement id recorded when available.
    Transmitted { acknowledgement_id: Option<String> },
    /// No integration exists for this clearinghouse; the submission
    /// record stays pending and the claim status is left unchanged.
    NotSupported { clearinghouse: Clearinghouse },
    /// Transport-level failure on an implemented path.
    Failed { message: String },
}

/// One clearinghouse transport.
pub trait ClearinghouseDispatch {
    fn clearinghouse(&self) -> Clearinghouse;
    fn dispatch(&self, file: &EdiFile) -> DispatchOutcome;
}

/// The implemented path: the encoded file is staged for download or
/// pickup rather than pushed over a network. Acknowledgement is derived
/// from the file name so the outcome stays deterministic.
#[derive(Debug, Default)]
pub struct GenericFileDispatch;

impl ClearinghouseDispatch for GenericFileDispatch {
    fn clearinghouse(&self) -> Clearinghouse {
        Clearinghouse::Generic
    }

    fn dispatch(&self, file: &EdiFile) -> DispatchOutcome {
        DispatchOutcome::Transmitted {
            acknowledgement_id: Some(format!("ACK-{}", file.file_name)),
        }
    }
}

/// Stub for clearinghouses without an integration.
#[derive(Debug)]
pub struct UnsupportedDispatch {
    clearinghouse: Clearinghouse,
}

impl ClearinghouseDispatch for UnsupportedDispatch {
    fn clearinghouse(&self) -> Clearinghouse {
        self.clearinghouse
    }

    fn dispatch(&self, _file: &EdiFile) -> DispatchOutcome {
        DispatchOutcome::NotSupported {
            clearinghouse: self.clearinghouse,
        }
    }
}

/// Resolve the dispatch implementation for a clearinghouse.
pub fn dispatcher_for(clearinghouse: Clearinghouse) -> Box<dyn ClearinghouseDispatch> {
    match clearinghouse {
        Clearinghouse::Generic => Box::new(GenericFileDispatch),
        Clearinghouse::Availity | Clearinghouse::OfficeAlly => {
            Box::new(UnsupportedDispatch { clearinghouse })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> EdiFile {
        EdiFile {
            file_name: "AGENCY_CLM_1001_837P.edi".to_string(),
            content: "ISA*~\n".to_string(),
        }
    }

    #[test]
    fn generic_dispatch_transmits_with_derived_ack() {
        let outcome = GenericFileDispatch.dispatch(&file());
        assert_eq!(
            outcome,
            DispatchOutcome::Transmitted {
                acknowledgement_id: Some("ACK-AGENCY_CLM_1001_837P.edi".to_string()),
            }
        );
    }

    #[test]
    fn named_clearinghouses_are_not_supported() {
        for clearinghouse in [Clearinghouse::Availity, Clearinghouse::OfficeAlly] {
            let outcome = dispatcher_for(clearinghouse).dispatch(&file());
            assert_eq!(outcome, DispatchOutcome::NotSupported { clearinghouse });
        }
    }
}
