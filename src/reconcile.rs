// src/reconcile.rs

//! Inventory-to-HCL reconciliation
//!
//! Joins inventory hosts to compatibility-list entries on a normalized
//! (model, CPU) key. Lookup is exact first; when that misses, a relaxed
//! pass scans keys in insertion order and accepts the first one with the
//! same model whose CPU text overlaps the host's as a substring in either
//! direction. Hosts with no match at all are emitted as `Blocked` —
//! conservative for upgrade planning, never optimistic.
//!
//! Several HCL entries can share a key (same chassis, different firmware
//! rows); the first entry encountered wins, so the multi-map preserves
//! insertion order.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::classify::SupportStatus;
use crate::model::{HclEntry, InventoryEntry, ReportRow};

static CLOCK_SUFFIX_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)@\s*[\d.]+\s*ghz").unwrap());

/// Normalized (model, CPU) join key. Non-unique across HCL entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub model: String,
    pub cpu: String,
}

impl MatchKey {
    pub fn new(model: &str, cpu: &str) -> MatchKey {
        MatchKey {
            model: norm_model(model),
            cpu: norm_cpu(cpu),
        }
    }
}

/// Normalize model text: collapse whitespace, trim, lowercase.
pub fn norm_model(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize CPU text: strip registered-trademark glyphs and their ASCII
/// parenthetical forms, drop any `@ <number> GHz` clock clause, then
/// collapse whitespace, trim, and lowercase.
pub fn norm_cpu(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let stripped = s.replace('\u{ae}', "").replace("(R)", "").replace("(r)", "");
    let without_clock = CLOCK_SUFFIX_RE.replace_all(&stripped, "");
    without_clock
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Insertion-ordered multi-map from `MatchKey` to HCL entries.
///
/// "First" is always first-inserted, which keeps both the exact lookup and
/// the relaxed scan deterministic across runs.
pub struct HclIndex<'a> {
    entries: &'a [HclEntry],
    order: Vec<MatchKey>,
    by_key: HashMap<MatchKey, Vec<usize>>,
}

impl<'a> HclIndex<'a> {
    pub fn build(entries: &'a [HclEntry]) -> HclIndex<'a> {
        let mut order = Vec::new();
        let mut by_key: HashMap<MatchKey, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            let key = MatchKey::new(&entry.model, &entry.cpu_model);
            let slot = by_key.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                Vec::new()
            });
            slot.push(idx);
        }
        HclIndex {
            entries,
            order,
            by_key,
        }
    }

    /// First entry inserted under exactly this key.
    pub fn exact(&self, key: &MatchKey) -> Option<&'a HclEntry> {
        self.by_key
            .get(key)
            .and_then(|idxs| idxs.first())
            .map(|&i| &self.entries[i])
    }

    /// Relaxed fallback: first key (in insertion order) with the same
    /// model whose CPU is a substring of the probe's CPU or vice versa.
    pub fn relaxed(&self, key: &MatchKey) -> Option<&'a HclEntry> {
        self.order
            .iter()
            .find(|k| {
                k.model == key.model && (key.cpu.contains(&k.cpu) || k.cpu.contains(&key.cpu))
            })
            .and_then(|k| self.exact(k))
    }

    /// Exact match, then relaxed fallback.
    pub fn lookup(&self, key: &MatchKey) -> Option<&'a HclEntry> {
        self.exact(key).or_else(|| self.relaxed(key))
    }
}

/// Reconcile inventory hosts against the HCL entry set.
///
/// With an inventory, each host yields exactly one row: the matched
/// entry's code name, releases, and status when a match exists (preferring
/// the entry's model/CPU text unless empty), or a `Blocked` row with empty
/// code name and releases when nothing matches. Without an inventory, the
/// HCL is projected directly with empty host names.
pub fn reconcile(
    entries: &[HclEntry],
    inventory: Option<&[InventoryEntry]>,
) -> Vec<ReportRow> {
    let Some(hosts) = inventory else {
        return entries
            .iter()
            .map(|e| ReportRow {
                name: String::new(),
                model: e.model.clone(),
                cpu_model: e.cpu_model.clone(),
                code_name: e.code_name.clone(),
                supported_releases: e.supported_releases.clone(),
                status: e.status,
            })
            .collect();
    };

    let index = HclIndex::build(entries);
    hosts
        .iter()
        .map(|host| {
            let key = MatchKey::new(&host.model, &host.cpu_model);
            match index.lookup(&key) {
                Some(entry) => ReportRow {
                    name: host.name.clone(),
                    model: prefer(&entry.model, &host.model),
                    cpu_model: prefer(&entry.cpu_model, &host.cpu_model),
                    code_name: entry.code_name.clone(),
                    supported_releases: entry.supported_releases.clone(),
                    status: entry.status,
                },
                None => ReportRow {
                    name: host.name.clone(),
                    model: host.model.clone(),
                    cpu_model: host.cpu_model.clone(),
                    code_name: String::new(),
                    supported_releases: String::new(),
                    status: SupportStatus::Blocked,
                },
            }
        })
        .collect()
}

fn prefer(hcl_text: &str, inventory_text: &str) -> String {
    if hcl_text.is_empty() {
        inventory_text.to_string()
    } else {
        hcl_text.to_string()
    }
}
