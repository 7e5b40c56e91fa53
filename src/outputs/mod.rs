//! Output generation for the structured dump and the HTML report.
//!
//! Both writers read the same result tree and write to their own path, so
//! they can run in either order or concurrently.
//!
//! # Submodules
//!
//! - [`json`]: Writes the raw result tree as pretty-printed JSON
//! - [`html`]: Assembles and writes the navigable HTML report
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── report.json   # structured dump
//! └── report.html   # human-readable report
//! ```

pub mod html;
pub mod json;

pub use html::{write_html_report, DocumentAssembler};
pub use json::write_dump;
