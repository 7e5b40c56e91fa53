//! HTML report generation.
//!
//! This module assembles the human-readable report around the per-section
//! fragments produced by [`StructuralRenderer`].
//!
//! # Page Layout
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────┐
//! │ nav      │ header: target | generated on ...    │
//! │ Summary  │ Summary card: Section | Status       │
//! │ Section1 │ Section1 card                        │
//! │ Section2 │ Section2 card                        │
//! │ ...      │ footer: © year brand | target        │
//! └──────────┴──────────────────────────────────────┘
//! ```
//!
//! The navigation, summary and body passes iterate the result tree in the
//! same order, so every nav link resolves to the card with the matching
//! `id`.

use crate::error::Result;
use crate::models::{ResultTree, SectionStatus};
use crate::render::StructuralRenderer;
use crate::utils::{escape, prepare_parent_dir, readable_label};
use chrono::{Datelike, Local, NaiveDateTime};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, error, info, instrument};

const STYLESHEET: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            display: flex;
            background-color: #f0f2f5;
            color: #2c3e50;
        }
        nav {
            width: 240px;
            background: #1d3557;
            color: #fff;
            min-height: 100vh;
            padding: 2rem 1rem;
            position: fixed;
        }
        nav h2 { font-size: 1.5rem; margin-bottom: 2rem; text-align: center; }
        nav ul { list-style: none; }
        nav ul li { margin: 1rem 0; }
        nav ul li a {
            color: #fff;
            text-decoration: none;
            font-size: 1rem;
            display: block;
            padding: 0.6rem;
            border-radius: 6px;
            transition: background 0.3s ease;
        }
        nav ul li a:hover { background: #457b9d; }
        main { margin-left: 240px; padding: 2rem; flex: 1; }
        header {
            background: #fff;
            padding: 1.5rem;
            margin-bottom: 2rem;
            border-radius: 8px;
            box-shadow: 0px 4px 12px rgba(0,0,0,0.1);
        }
        header h1 { font-size: 2rem; margin-bottom: 0.5rem; }
        header p { color: #6b7280; }
        .card {
            background: #fff;
            border-radius: 8px;
            padding: 1.5rem;
            margin-bottom: 1.5rem;
            box-shadow: 0px 4px 10px rgba(0,0,0,0.08);
        }
        h2 { font-size: 1.3rem; margin-bottom: 1rem; color: #1d3557; }
        table { width: 100%; border-collapse: collapse; font-size: 0.95rem; }
        table th, table td { border: 1px solid #e2e8f0; padding: 0.75rem; text-align: left; }
        table th { background: #f1f5f9; font-weight: 600; }
        .badge { padding: 0.4rem 0.7rem; border-radius: 5px; font-size: 0.8rem; font-weight: bold; }
        .success { background-color: #d1fae5; color: #065f46; }
        .fail { background-color: #fee2e2; color: #991b1b; }
        .sub-card {
            background: #f9fafb;
            border: 1px solid #e5e7eb;
            border-radius: 6px;
            padding: 0.8rem;
            margin-bottom: 0.6rem;
        }
        footer { text-align: center; font-size: 0.85rem; color: #6b7280; margin-top: 2rem; }
"#;

/// Builds the complete HTML document for one result tree.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    brand: String,
    renderer: StructuralRenderer,
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new("Rapid Recon")
    }
}

impl DocumentAssembler {
    /// Create an assembler that labels the page chrome with `brand`.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            renderer: StructuralRenderer,
        }
    }

    /// Assemble the report, stamping it with the current local time.
    pub fn assemble(&self, target: &str, tree: &ResultTree) -> String {
        self.assemble_at(target, tree, Local::now().naive_local())
    }

    /// Assemble the report with a fixed generation timestamp.
    ///
    /// The same timestamp is used in the header and, as a year, in the
    /// footer. An empty tree still yields a complete page.
    pub fn assemble_at(&self, target: &str, tree: &ResultTree, generated: NaiveDateTime) -> String {
        let target = escape(target);
        let brand = escape(&self.brand);
        let mut html = String::with_capacity(8 * 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("    <title>{brand} Report - {target}</title>\n"));
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str("    <style>");
        html.push_str(STYLESHEET);
        html.push_str("    </style>\n</head>\n<body>\n\n");

        self.push_navigation(&mut html, &brand, tree);

        html.push_str("<main>\n    <header>\n        <h1>🛡️ Recon Report</h1>\n");
        html.push_str(&format!(
            "        <p>Target: <strong>{target}</strong> | Generated on {}</p>\n",
            generated.format("%Y-%m-%d %H:%M:%S")
        ));
        html.push_str("    </header>\n\n");

        self.push_summary(&mut html, tree);
        self.push_sections(&mut html, tree);

        html.push_str(&format!(
            "<footer>\n        &copy; {} {brand} | Report generated for <strong>{target}</strong>\n    </footer>\n",
            generated.year()
        ));
        html.push_str("</main>\n\n</body>\n</html>");

        debug!(sections = tree.len(), bytes = html.len(), "Assembled HTML report");
        html
    }

    fn push_navigation(&self, html: &mut String, brand: &str, tree: &ResultTree) {
        html.push_str(&format!("<nav>\n    <h2>{brand}</h2>\n    <ul>\n"));
        html.push_str("        <li><a href=\"#summary\">📋 Summary</a></li>");
        for section in tree.keys() {
            html.push_str(&format!(
                "<li><a href='#{}'>{}</a></li>",
                escape(section),
                escape(&readable_label(section))
            ));
        }
        html.push_str("</ul>\n</nav>\n\n");
    }

    fn push_summary(&self, html: &mut String, tree: &ResultTree) {
        html.push_str("    <div class=\"card\" id=\"summary\">\n        <h2>📋 Summary</h2>\n");
        html.push_str("        <table>\n            <tr><th>Section</th><th>Status</th></tr>");
        for (section, body) in tree {
            let status = SectionStatus::of(body);
            html.push_str(&format!(
                "<tr><td>{}</td><td><span class='badge {}'>{} {}</span></td></tr>",
                escape(&readable_label(section)),
                status.badge_class(),
                status.icon(),
                status.label()
            ));
        }
        html.push_str("</table></div>");
    }

    fn push_sections(&self, html: &mut String, tree: &ResultTree) {
        for (section, body) in tree {
            html.push_str(&format!(
                "<div class=\"card\" id=\"{}\">\n        <h2>📂 {}</h2>\n        ",
                escape(section),
                escape(&readable_label(section))
            ));
            self.renderer.render_into(body, html);
            html.push_str("\n    </div>");
        }
    }
}

/// Assemble the HTML report for `target` and write it to `path`.
///
/// Missing parent directories are created and an existing file is
/// overwritten. Failures are logged and swallowed; the caller always gets
/// control back.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn write_html_report(assembler: &DocumentAssembler, target: &str, tree: &ResultTree, path: &Path) {
    match try_write_html_report(assembler, target, tree, path) {
        Ok(()) => info!(path = %path.display(), "HTML report saved"),
        Err(e) => error!(error = %e, "Failed to generate HTML report"),
    }
}

fn try_write_html_report(
    assembler: &DocumentAssembler,
    target: &str,
    tree: &ResultTree,
    path: &Path,
) -> Result<()> {
    prepare_parent_dir(path)?;
    let html = assembler.assemble(target, tree);

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NO_DATA;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn tree(value: Value) -> ResultTree {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 6)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap()
    }

    fn assemble(value: Value) -> String {
        DocumentAssembler::default().assemble_at("example.com", &tree(value), fixed_time())
    }

    #[test]
    fn test_ports_scenario() {
        let html = assemble(json!({"ports": {"open": [80, 443], "note": null}}));

        assert!(html.contains("<li><a href='#ports'>Ports</a></li>"));
        assert!(html.contains(
            "<tr><td>Ports</td><td><span class='badge success'>✔️ Collected</span></td></tr>"
        ));
        assert!(html.contains("<div class=\"card\" id=\"ports\">"));
        assert!(html.contains("<tr><td>open</td><td><ul><li>80</li><li>443</li></ul></td></tr>"));
        assert!(html.contains(&format!("<tr><td>note</td><td>{NO_DATA}</td></tr>")));
    }

    #[test]
    fn test_empty_tree_still_produces_chrome() {
        let html = assemble(json!({}));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<li><a href=\"#summary\">📋 Summary</a></li></ul>"));
        assert!(html.contains("<tr><th>Section</th><th>Status</th></tr></table></div>"));
        assert_eq!(html.matches("<div class=\"card\"").count(), 1);
    }

    #[test]
    fn test_one_nav_entry_and_summary_row_per_section_in_order() {
        let input: ResultTree = serde_json::from_str(
            r#"{"whois": {"registrar": "x"}, "dns_records": [], "open_ports": [22], "subdomains": null}"#,
        )
        .unwrap();
        let html = DocumentAssembler::default().assemble_at("t", &input, fixed_time());

        assert_eq!(html.matches("<li><a href='#").count(), 4);
        let summary_start = html.find("id=\"summary\"").unwrap();
        let summary_end = summary_start + html[summary_start..].find("</table></div>").unwrap();
        assert_eq!(html[summary_start..summary_end].matches("<tr><td>").count(), 4);

        let nav: Vec<usize> = ["#whois", "#dns_records", "#open_ports", "#subdomains"]
            .iter()
            .map(|anchor| html.find(anchor).unwrap())
            .collect();
        assert!(nav.windows(2).all(|w| w[0] < w[1]));

        let bodies: Vec<usize> = ["id=\"whois\"", "id=\"dns_records\"", "id=\"open_ports\"", "id=\"subdomains\""]
            .iter()
            .map(|anchor| html.find(anchor).unwrap())
            .collect();
        assert!(bodies.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_missing_sections_get_fail_badge() {
        let html = assemble(json!({"dns_records": [], "subdomains": null, "ssl": ""}));
        assert_eq!(html.matches("<span class='badge fail'>⚠️ Missing</span>").count(), 3);
        assert!(html.contains("<tr><td>Dns Records</td>"));
    }

    #[test]
    fn test_timestamp_and_footer_year() {
        let html = assemble(json!({"a": 1}));
        assert!(html.contains("Generated on 2025-05-06 14:30:05"));
        assert!(html.contains("&copy; 2025 Rapid Recon | Report generated for <strong>example.com</strong>"));
    }

    #[test]
    fn test_target_label_is_escaped() {
        let html = DocumentAssembler::default().assemble_at(
            "<script>alert(1)</script>",
            &tree(json!({"<b>": "<i>x</i>"})),
            fixed_time(),
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
        assert!(html.contains("Target: <strong>&lt;script&gt;alert(1)&lt;/script&gt;</strong>"));
    }

    #[test]
    fn test_custom_brand() {
        let html = DocumentAssembler::new("Night Owl").assemble_at("t", &tree(json!({})), fixed_time());
        assert!(html.contains("<title>Night Owl Report - t</title>"));
        assert!(html.contains("<nav>\n    <h2>Night Owl</h2>"));
    }

    #[test]
    fn test_write_html_report_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/report.html");

        write_html_report(&DocumentAssembler::default(), "example.com", &tree(json!({"a": 1})), &path);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("id=\"a\""));
    }

    #[test]
    fn test_write_html_report_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("report.html");

        write_html_report(&DocumentAssembler::default(), "t", &tree(json!({})), &path);
        assert!(!path.exists());
    }
}
