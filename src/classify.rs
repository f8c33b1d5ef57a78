// src/classify.rs

//! Readiness and vendor classification
//!
//! Both classifiers are pure functions over free-text fields. The
//! readiness rule is deliberately one-sided: the only path to `Ok` is a
//! literal occurrence of the target release marker in the supported
//! releases text. Everything else (8.x-only, deprecated, not listed,
//! empty) is `Blocked` from an upgrade-planning perspective.

use serde::Serialize;

/// Release marker classified as installable by default.
pub const DEFAULT_TARGET_MARKER: &str = "ESXi 9.0";

/// Upgrade readiness verdict for a hardware/CPU pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SupportStatus {
    #[serde(rename = "OK")]
    Ok,
    Blocked,
}

impl SupportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SupportStatus::Ok => "OK",
            SupportStatus::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw "supported releases" string against a target marker.
///
/// `Ok` iff a case-insensitive match for the marker is present after
/// non-breaking spaces are treated as ordinary spaces. Absence, ambiguity,
/// or any other marker is `Blocked`. Total over all inputs.
pub fn classify_support(releases: &str, marker: &str) -> SupportStatus {
    if releases.is_empty() {
        return SupportStatus::Blocked;
    }
    let text = releases.replace('\u{a0}', " ").to_lowercase();
    if text.trim().contains(&marker.to_lowercase()) {
        SupportStatus::Ok
    } else {
        SupportStatus::Blocked
    }
}

/// Hardware vendor, derived from model text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vendor {
    Dell,
    Cisco,
    #[serde(rename = "HPE / HP")]
    Hpe,
    Lenovo,
    #[serde(rename = "VMware")]
    Vmware,
    Other,
}

impl Vendor {
    /// Fixed display and grouping order for report sections.
    pub const ALL: [Vendor; 6] = [
        Vendor::Dell,
        Vendor::Cisco,
        Vendor::Hpe,
        Vendor::Lenovo,
        Vendor::Vmware,
        Vendor::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Dell => "Dell",
            Vendor::Cisco => "Cisco",
            Vendor::Hpe => "HPE / HP",
            Vendor::Lenovo => "Lenovo",
            Vendor::Vmware => "VMware",
            Vendor::Other => "Other",
        }
    }

    /// Classify a model string by prefix, first matching rule wins:
    /// Dell (including VxRail appliances) -> Cisco -> HPE/HP -> Lenovo ->
    /// VMware -> Other.
    pub fn from_model(model: &str) -> Vendor {
        if model.is_empty() {
            return Vendor::Other;
        }
        let m = model.to_lowercase();
        if m.starts_with("dell") || m.contains("vxrail") {
            Vendor::Dell
        } else if m.starts_with("cisco") {
            Vendor::Cisco
        } else if m.starts_with("hpe") || m.starts_with("hewlett") || m.starts_with("hp ") {
            Vendor::Hpe
        } else if m.starts_with("lenovo") {
            Vendor::Lenovo
        } else if m.starts_with("vmware") {
            Vendor::Vmware
        } else {
            Vendor::Other
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
