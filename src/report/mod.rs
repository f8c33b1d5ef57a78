// src/report/mod.rs

//! Static HTML report rendering
//!
//! Consumes a finished `ReportDataset` and assembles a single
//! self-contained document: embedded CSS, optional base64 banner, summary
//! pies, per-vendor detail tables, and the full reconciled inventory
//! appendix. The pipeline has no dependency on this module; it is a pure
//! consumer.

mod pie;
mod style;

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::classify::{SupportStatus, Vendor};
use crate::model::{HclEntry, ReportRow};
use crate::pipeline::ReportDataset;

pub use pie::pie_svg;

/// Escape text for HTML element and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Embed an image file as a `data:` URI, guessing the MIME type from the
/// extension. Unreadable or missing files are skipped silently; a missing
/// banner never blocks the report.
pub fn image_data_uri(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    let bytes = std::fs::read(path).ok()?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    };
    Some(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

fn row_class(status: SupportStatus) -> &'static str {
    match status {
        SupportStatus::Ok => "ok-row",
        SupportStatus::Blocked => "blocked-row",
    }
}

fn sidebar() -> &'static str {
    r##"
      <nav class="sidebar" aria-label="Contents">
        <h3>Contents</h3>
        <a href="#overview">Report Overview</a>
        <a href="#lifecycle">VMware vSphere 8 Lifecycle and Upgrade Planning</a>
        <a href="#summary">Hardware Compatibility Guide Support Summary</a>
        <a href="#detail">Per-entry Detail (by Vendor)</a>
        <a href="#appendix">Appendix: Full Inventory</a>
      </nav>
    "##
}

fn overview_section() -> String {
    let mut s = String::new();
    s.push_str("<section id=\"overview\">");
    s.push_str("<h2>Report Overview</h2>");
    s.push_str(
        r#"
    With the release of VMware Cloud Foundation (VCF) 9.0,
    one of the pre-checks is to confirm hardware compatibility. This report provides a current snapshot of compatibility
    based on inventory extracted from VCF Operations and verified against the official
    <a href="https://compatibilityguide.broadcom.com/" target="_blank">Broadcom Hardware Compatibility Guide</a>.
    "#,
    );
    s.push_str(
        r#"
    <div class="callout">
      <b>Important context:</b><br>
      The Broadcom Compatibility Guide (BCG) has recently been updated to include a preliminary set of devices for VCF 9.0.
      This is a company first, as the BCG is typically only released at GA, which can make planning hardware refresh more difficult.<br><br>
      It is very important to understand that VMware/Broadcom <b>does not certify hardware or I/O devices</b>.
      OEM partners ultimately decide which devices to certify for each release, and they may choose not to re-certify devices
      for reasons such as earlier end-of-sales or end-of-life support. This is not unique to VCF 9.0, and it applies both pre- and post-acquisition of VMware.<br><br>
    </div>
    <p>
      <b>Note:</b> This is a point-in-time view. The Broadcom Compatibility Guide is updated frequently.
      It remains the customer's responsibility to validate the hardware status directly against the official guide prior to upgrades or procurement.
      <br><br>
      References: <a href="https://compatibilityguide.broadcom.com/" target="_blank">Broadcom Compatibility Guide</a> &nbsp;|&nbsp;
      <a href="https://knowledge.broadcom.com/external/article/318697" target="_blank">KB 318697</a> &nbsp;|&nbsp;
      <a href="https://knowledge.broadcom.com/external/article/391170" target="_blank">KB 391170</a>
    </p>
    "#,
    );
    s.push_str("</section>");
    s
}

fn lifecycle_section() -> &'static str {
    r#"<section id="lifecycle">
    <h2>VMware vSphere 8 Lifecycle and Upgrade Planning</h2>
    <div class="callout">
      VMware vSphere 8.0 (released 11 October 2022) follows VMware's standard lifecycle policy:<br>
      &bull; <b>End of General Support (EoGS):</b> 11 October 2027<br>
      &bull; <b>End of Technical Guidance (EoTG):</b> 11 October 2029<br><br>
    </div>
    </section>"#
}

fn legend(label: &str, ok: usize, blocked: usize, pct_ok: &str, total_label: &str) -> String {
    format!(
        r#"
      <div class="legend2" aria-label="{label}">
        <div><span class="chip ok"></span> OK: <b>{ok}</b> ({pct_ok})</div>
        <div><span class="chip blocked"></span> Blocked: <b>{blocked}</b></div>
        <div>{total_label}: <b>{}</b></div>
      </div>
    "#,
        ok + blocked
    )
}

fn summary_section(dataset: &ReportDataset) -> String {
    let counts = dataset.hcl_counts;
    let mut s = String::new();
    s.push_str("<section id=\"summary\">");
    s.push_str("<h2>Hardware Compatibility Guide Support Summary</h2>");
    s.push_str(
        r#"
    This section summarises installation readiness for <b>vSphere 9.0</b> using the Broadcom Compatibility Guide.
    <i>OK</i> means the server/CPU combination appears as installable on ESXi 9.0 in the guide.
    <i>Blocked</i> means the guide caps support at ESXi 8.x or the CPU family is discontinued in 9.x, so the installer will block.
    If a system does not show as OK, treat it as not ready for VCF 9.0 until confirmed otherwise with your OEM or the guide.
    "#,
    );
    s.push_str("<div class='kpi'>");
    s.push_str(&pie_svg(counts.ok, counts.blocked, 160.0));
    s.push_str(&legend(
        "Summary figures",
        counts.ok,
        counts.blocked,
        &counts.percent_ok(),
        "Total hardware models analysed",
    ));
    s.push_str("</div>");
    s.push_str("</section>");
    s
}

fn entry_table(entries: &[&HclEntry]) -> String {
    let mut s = String::new();
    s.push_str(
        "<table><thead><tr>\
         <th>Model</th><th>CPU Model</th><th>Code Name</th><th>Supported Releases</th><th>Status</th>\
         </tr></thead><tbody>",
    );
    for e in entries {
        s.push_str(&format!(
            "<tr class='{}'><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row_class(e.status),
            escape(&e.model),
            escape(&e.cpu_model),
            escape(&e.code_name),
            escape(&e.supported_releases),
            e.status
        ));
    }
    s.push_str("</tbody></table>");
    s
}

fn detail_section(dataset: &ReportDataset) -> String {
    let mut s = String::new();
    s.push_str("<section id=\"detail\">");
    s.push_str("<h2>Detail by Vendor</h2>");
    for vendor in Vendor::ALL {
        let mut items: Vec<&HclEntry> = dataset
            .entries
            .iter()
            .filter(|e| e.vendor == vendor)
            .collect();
        if items.is_empty() {
            continue;
        }
        items.sort_by(|a, b| {
            (a.model.as_str(), a.cpu_model.as_str()).cmp(&(b.model.as_str(), b.cpu_model.as_str()))
        });
        s.push_str(&format!("<div class='vendor-title'>{vendor}</div>"));
        s.push_str(&entry_table(&items));
    }
    s.push_str("</section>");
    s
}

fn appendix_row(row: &ReportRow) -> String {
    format!(
        "<tr class='{}'><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        row_class(row.status),
        escape(&row.name),
        escape(&row.model),
        escape(&row.cpu_model),
        escape(&row.code_name),
        escape(&row.supported_releases),
        row.status
    )
}

fn appendix_section(dataset: &ReportDataset) -> String {
    let counts = dataset.inventory_counts;
    let mut s = String::new();
    s.push_str("<section id=\"appendix\">");
    s.push_str("<h2>Appendix: Full Inventory with Server Names</h2>");
    s.push_str(
        r#"
    This appendix lists the full server inventory extracted from VCF Operations, matched against the Broadcom Compatibility Guide where possible.
    The chart below summarises the percentage of servers in the inventory that support vSphere 9.0 (OK) versus those that do not (Blocked).
    "#,
    );
    s.push_str("<div class='kpi'>");
    s.push_str(&pie_svg(counts.ok, counts.blocked, 160.0));
    s.push_str(&legend(
        "Inventory summary",
        counts.ok,
        counts.blocked,
        &counts.percent_ok(),
        "Total in inventory",
    ));
    s.push_str("</div>");

    s.push_str(
        "<table><thead><tr>\
         <th>Name</th><th>Model</th><th>CPU Model</th><th>Code Name</th><th>Supported Releases</th><th>Status</th>\
         </tr></thead><tbody>",
    );
    for row in &dataset.rows {
        s.push_str(&appendix_row(row));
    }
    s.push_str("</tbody></table>");
    s.push_str("</section>");
    s
}

/// Render the complete report document.
pub fn render_report(
    dataset: &ReportDataset,
    banner: Option<&str>,
    generated_by: Option<&str>,
) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html><html><head><meta charset='utf-8'>");
    html.push_str(
        "<title>VCF 9.0 Hardware Compatibility &mdash; Hardware Compatibility Guide Snapshot</title>",
    );
    html.push_str(style::CSS);
    html.push_str("</head><body>");

    if let Some(uri) = banner {
        html.push_str(&format!("<img class='banner' src='{uri}' alt='Cover'>"));
    }

    html.push_str("<div class='layout'>");
    html.push_str(sidebar());
    html.push_str("<main class='content'>");
    html.push_str(
        "<h1>VCF 9.0 Hardware Compatibility &mdash; Hardware Compatibility Guide Snapshot</h1>",
    );
    html.push_str(&overview_section());
    html.push_str(lifecycle_section());
    html.push_str(&summary_section(dataset));
    html.push_str(&detail_section(dataset));
    html.push_str(&appendix_section(dataset));

    let generated_when = chrono::Local::now().format("%d %B %Y, %H:%M");
    let attribution = generated_by.map_or(String::new(), |who| {
        format!(" &nbsp;|&nbsp; Generated by {}", escape(who))
    });
    html.push_str(&format!(
        "<div class=\"footer tiny\">Generated: {generated_when}{attribution}</div>"
    ));
    html.push_str("</main></div>");
    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusCounts;

    fn dataset() -> ReportDataset {
        let entries = vec![
            HclEntry {
                model: "Dell R750".to_string(),
                cpu_model: "Xeon Gold 6338".to_string(),
                code_name: "Ice Lake".to_string(),
                supported_releases: "ESXi 8.0, ESXi 9.0".to_string(),
                status: SupportStatus::Ok,
                vendor: Vendor::Dell,
            },
            HclEntry {
                model: "Cisco UCS C220 M4".to_string(),
                cpu_model: "Xeon E5-2680 v4".to_string(),
                code_name: "Broadwell".to_string(),
                supported_releases: "ESXi 8.0".to_string(),
                status: SupportStatus::Blocked,
                vendor: Vendor::Cisco,
            },
        ];
        let rows = vec![ReportRow {
            name: "esx-01 & friends".to_string(),
            model: "Dell R750".to_string(),
            cpu_model: "Xeon Gold 6338".to_string(),
            code_name: "Ice Lake".to_string(),
            supported_releases: "ESXi 8.0, ESXi 9.0".to_string(),
            status: SupportStatus::Ok,
        }];
        ReportDataset {
            target_marker: "ESXi 9.0".to_string(),
            hcl_counts: StatusCounts::tally(entries.iter().map(|e| e.status)),
            inventory_counts: StatusCounts::tally(rows.iter().map(|r| r.status)),
            entries,
            rows,
        }
    }

    #[test]
    fn test_document_structure() {
        let html = render_report(&dataset(), None, Some("Platform Team"));
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.ends_with("</body></html>"));
        for anchor in ["#overview", "#lifecycle", "#summary", "#detail", "#appendix"] {
            assert!(html.contains(anchor), "missing anchor {anchor}");
        }
        assert!(html.contains("Generated by Platform Team"));
    }

    #[test]
    fn test_vendor_sections_in_fixed_order() {
        let html = render_report(&dataset(), None, None);
        let dell = html.find("<div class='vendor-title'>Dell</div>").unwrap();
        let cisco = html.find("<div class='vendor-title'>Cisco</div>").unwrap();
        assert!(dell < cisco);
        // No Lenovo entries, so no Lenovo section.
        assert!(!html.contains("<div class='vendor-title'>Lenovo</div>"));
    }

    #[test]
    fn test_row_tinting() {
        let html = render_report(&dataset(), None, None);
        assert!(html.contains("ok-row"));
        assert!(html.contains("blocked-row"));
    }

    #[test]
    fn test_cell_text_escaped() {
        let html = render_report(&dataset(), None, None);
        assert!(html.contains("esx-01 &amp; friends"));
    }

    #[test]
    fn test_banner_embedded_when_present() {
        let html = render_report(&dataset(), Some("data:image/png;base64,AAAA"), None);
        assert!(html.contains("<img class='banner' src='data:image/png;base64,AAAA'"));
        let without = render_report(&dataset(), None, None);
        assert!(!without.contains("class='banner'"));
    }

    #[test]
    fn test_image_data_uri_missing_file() {
        assert!(image_data_uri(Path::new("/nonexistent/cover.png")).is_none());
    }

    #[test]
    fn test_image_data_uri_mime_from_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cover.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();
        let uri = image_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }
}
