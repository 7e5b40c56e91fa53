//! Structure-to-markup rendering of arbitrarily shaped result data.
//!
//! The renderer knows nothing about what a section means. It inspects the
//! runtime [`Shape`] of each value and picks one of five fixed branches:
//!
//! | Shape | Markup |
//! |-------|--------|
//! | Mapping | `<table>` of key/value rows, values rendered recursively |
//! | Record list | one `sub-card` per record, values flattened to text |
//! | Generic list | `<ul>` with one flattened `<li>` per element |
//! | Absent | the [`NO_DATA`] badge |
//! | Scalar | escaped text |
//!
//! Only the scaffolding tags are literal markup. Every key and value is
//! passed through [`escape`] before it is appended.

use crate::models::Shape;
use crate::utils::escape;
use serde_json::Value;

/// Fragment emitted for every `null`, wherever it appears.
pub const NO_DATA: &str = "<span class='badge fail'>No Data</span>";

/// Appends the markup for a value to a shared buffer.
pub trait Render {
    fn render_into(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl Render for Value {
    fn render_into(&self, out: &mut String) {
        match Shape::of(self) {
            Shape::Mapping(map) => {
                out.push_str("<table><tr><th>Key</th><th>Value</th></tr>");
                for (key, value) in map {
                    out.push_str("<tr><td>");
                    out.push_str(&escape(key));
                    out.push_str("</td><td>");
                    value.render_into(out);
                    out.push_str("</td></tr>");
                }
                out.push_str("</table>");
            }
            Shape::RecordList(records) => {
                for record in records.iter().filter_map(Value::as_object) {
                    out.push_str("<div class='sub-card'>");
                    for (key, value) in record {
                        out.push_str("<strong>");
                        out.push_str(&escape(key));
                        out.push_str("</strong>: ");
                        push_flat(value, out);
                        out.push_str("<br>");
                    }
                    out.push_str("</div>");
                }
            }
            Shape::GenericList(items) => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    push_flat(item, out);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            Shape::Absent => out.push_str(NO_DATA),
            Shape::Scalar(value) => out.push_str(&escape(&stringify(value))),
        }
    }
}

/// Renders result data without any knowledge of section semantics.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralRenderer;

impl StructuralRenderer {
    /// Render one value to a standalone fragment.
    pub fn render(&self, value: &Value) -> String {
        value.render()
    }

    /// Append the fragment for `value` to `out`.
    pub fn render_into(&self, value: &Value, out: &mut String) {
        value.render_into(out);
    }
}

/// Text form of a value for flat contexts.
///
/// Strings are used verbatim. Everything else, nested containers
/// included, uses its compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Record fields and list items are never rendered structurally.
fn push_flat(value: &Value, out: &mut String) {
    if value.is_null() {
        out.push_str(NO_DATA);
    } else {
        out.push_str(&escape(&stringify(value)));
    }
}
