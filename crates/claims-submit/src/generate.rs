//! Draft generation from scheduled-service records.
//!
//! Best-effort per client: a client missing billing identifiers is
//! skipped with a recorded reason and processing continues. This is a
//! draft-creation step, not a transmission step, so partial failure is
//! tolerated.

use std::collections::BTreeMap;

use claims_assemble::draft_from_live;
use claims_model::ScheduledService;

use crate::error::Result;
use crate::store::ClaimStore;
use crate::types::{CreatedClaim, GenerateReport, SkippedClient};

/// Create draft claims from completed scheduled services, one claim per
/// client covering all of that client's rows.
pub fn generate_from_services<S: ClaimStore>(
    store: &mut S,
    services: &[ScheduledService],
) -> Result<GenerateReport> {
    // Group by client; BTreeMap keeps the processing order stable.
    let mut by_client: BTreeMap<String, Vec<ScheduledService>> = BTreeMap::new();
    for service in services {
        by_client
            .entry(service.client_id.clone())
            .or_default()
            .push(service.clone());
    }

    let mut report = GenerateReport::default();
    for (client_id, services) in by_client {
        let client = match store.client(&client_id) {
            Ok(client) => client,
            Err(error) => {
                tracing::warn!(client = %client_id, %error, "skipping client");
                report.skipped.push(SkippedClient {
                    client_id,
                    reason: error.to_string(),
                });
                continue;
            }
        };

        let identity = store.allocate_identity();
        match draft_from_live(&client, &services, identity) {
            Ok(claim) => {
                report.created.push(CreatedClaim {
                    claim_id: claim.id.clone(),
                    claim_number: claim.claim_number.clone(),
                    client_id: claim.client_id.clone(),
                    total_amount: claim.total_amount,
                    line_count: claim.lines.len(),
                });
                store.insert_claim(claim)?;
            }
            Err(error) => {
                tracing::warn!(client = %client_id, %error, "skipping client");
                report.skipped.push(SkippedClient {
                    client_id,
                    reason: error.to_string(),
                });
            }
        }
    }

    tracing::info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "draft generation finished"
    );
    Ok(report)
}
