// ============================================================================
// Seed File Parsing
// ============================================================================
//
// The local repository starts from a JSON document holding every collection
// the external API would serve. These helpers read and sanity-check it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

use super::{BillingDocument, Client, MaintenanceOrder, TechnicianWithUser, WorkOrder};

/// Every collection the local repository serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub technicians: Vec<TechnicianWithUser>,
    #[serde(default)]
    pub work_orders: Vec<WorkOrder>,
    #[serde(default)]
    pub maintenance_orders: Vec<MaintenanceOrder>,
    #[serde(default)]
    pub estimates: Vec<BillingDocument>,
    #[serde(default)]
    pub invoices: Vec<BillingDocument>,
}

fn ensure_unique<I, K>(collection: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        if let Some(dup) = seen.replace(id) {
            anyhow::bail!("Duplicate id {} in '{}'", dup, collection);
        }
    }
    Ok(())
}

fn validate_seed(seed: &SeedData) -> Result<()> {
    ensure_unique("clients", seed.clients.iter().map(|c| c.id))?;
    ensure_unique("technicians", seed.technicians.iter().map(|t| t.id))?;
    ensure_unique("workOrders", seed.work_orders.iter().map(|w| w.id))?;
    ensure_unique(
        "maintenanceOrders",
        seed.maintenance_orders.iter().map(|m| m.id),
    )?;
    ensure_unique("estimates", seed.estimates.iter().map(|d| d.id))?;
    ensure_unique("invoices", seed.invoices.iter().map(|d| d.id))?;
    Ok(())
}

/// Parse a seed document from a JSON string.
///
/// Ids must be unique within each collection. Work order and maintenance order
/// ids may overlap each other; schedule items key on `(type, id)`.
pub fn parse_seed_json_str(json: &str) -> Result<SeedData> {
    let seed: SeedData =
        serde_json::from_str(json).context("Failed to deserialize seed JSON using Serde")?;
    validate_seed(&seed)?;
    Ok(seed)
}

/// Read and parse a seed document from disk.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed_json_str(&content).with_context(|| format!("Invalid seed file {}", path.display()))
}
