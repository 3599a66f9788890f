//! Dump command handler

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Result};
use serde_json::{json, Value};

use tzx::cli::DumpKind;
use tzx::tzdb::sort_policy;
use tzx::{Config, TzDatabase};

use super::load_database;

/// Print decoded records as pretty JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    dir: Option<PathBuf>,
    kind: DumpKind,
    name: Option<&str>,
    sorted: bool,
    config: &Config,
) -> Result<()> {
    let mut db = load_database(dir, config)?;
    if sorted {
        db.policies.values_mut().for_each(|rules| sort_policy(rules));
    }

    let value = select(&db, kind, name)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Build the JSON value for the requested map, or one entry of it.
fn select(db: &TzDatabase, kind: DumpKind, name: Option<&str>) -> Result<Value> {
    let Some(name) = name else {
        return Ok(match kind {
            DumpKind::All => serde_json::to_value(db)?,
            DumpKind::Zones => serde_json::to_value(&db.zones)?,
            DumpKind::Policies => serde_json::to_value(&db.policies)?,
            DumpKind::Links => serde_json::to_value(&db.links)?,
        });
    };

    let mut found = BTreeMap::new();
    if matches!(kind, DumpKind::All | DumpKind::Zones) {
        if let Some(eras) = db.zones.get(name) {
            found.insert("zone", serde_json::to_value(eras)?);
        }
    }
    if matches!(kind, DumpKind::All | DumpKind::Policies) {
        if let Some(rules) = db.policies.get(name) {
            found.insert("policy", serde_json::to_value(rules)?);
        }
    }
    if matches!(kind, DumpKind::All | DumpKind::Links) {
        if let Some(target) = db.links.get(name) {
            found.insert("link", json!(target));
        }
    }

    if found.is_empty() {
        bail!("No entry named '{}'", name);
    }
    Ok(json!({ name: found }))
}
