//! # entropy-export
//!
//! Writes the Entropy landing page as static files:
//!
//! - `index.html` - the full page rendered for one theme
//! - `styles.css` - the site stylesheet
//! - everything under the configured assets directory (hero images etc.)
//!
//! ```rust,no_run
//! use entropy_export::{ExportConfig, export_site};
//!
//! let summary = export_site(&ExportConfig::default())?;
//! println!("{} files", summary.files.len());
//! # Ok::<(), entropy_export::ExportError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;

pub use config::{ExportConfig, LoadedConfig, Overrides};
pub use error::ExportError;
pub use export::{ExportSummary, export_site};
