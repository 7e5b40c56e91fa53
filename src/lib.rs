//! # Recon Report
//!
//! Turns the result tree produced by reconnaissance collection tasks into
//! two durable artifacts: a pretty-printed JSON dump and a self-contained,
//! navigable HTML report.
//!
//! ## Architecture
//!
//! 1. **Classification**: [`models::Shape`] picks a render branch per value
//! 2. **Rendering**: [`render::StructuralRenderer`] maps a value to markup
//! 3. **Assembly**: [`outputs::DocumentAssembler`] wraps per-section
//!    fragments in navigation, summary and footer chrome
//! 4. **Output**: [`outputs::write_dump`] and [`outputs::write_html_report`]
//!    write the artifacts, logging instead of failing

pub mod config;
pub mod error;
pub mod models;
pub mod outputs;
pub mod render;
pub mod utils;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use models::{ResultTree, SectionStatus, Shape};
pub use outputs::{write_dump, write_html_report, DocumentAssembler};
pub use render::{Render, StructuralRenderer};
