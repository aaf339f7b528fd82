//! Export configuration: CLI flags layered over an optional TOML file.
//!
//! ```toml
//! [export]
//! out_dir = "dist"
//! theme = "dark"
//! assets_dir = "public"
//! ```
//!
//! Precedence is flag > file > default. Relative paths in the file are
//! resolved against the file's own directory.

use std::fs;
use std::path::{Path, PathBuf};

use entropy_site::Theme;
use serde::Deserialize;

use crate::error::ExportError;

/// Output directory when neither flag nor file sets one
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    export: ExportTable,
}

/// `[export]` table as written in the file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportTable {
    pub out_dir: Option<PathBuf>,
    pub theme: Option<String>,
    pub assets_dir: Option<PathBuf>,
}

/// A parsed config file and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub export: ExportTable,
}

impl LoadedConfig {
    /// Read and parse `path`.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let text = fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse config text; `path` is used for error messages and relative paths.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ExportError> {
        let file: FileConfig = toml::from_str(text).map_err(|source| ExportError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            export: file.export,
        })
    }

    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub out_dir: Option<PathBuf>,
    pub theme: Option<Theme>,
    pub assets_dir: Option<PathBuf>,
}

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub theme: Theme,
    pub assets_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            theme: Theme::default(),
            assets_dir: None,
        }
    }
}

impl ExportConfig {
    /// Merge CLI overrides with an optional config file.
    pub fn resolve(overrides: Overrides, file: Option<&LoadedConfig>) -> Result<Self, ExportError> {
        let defaults = Self::default();

        let file_theme = file
            .and_then(|f| f.export.theme.as_deref().map(|raw| (f, raw)))
            .map(|(f, raw)| {
                raw.parse::<Theme>().map_err(|source| ExportError::InvalidTheme {
                    path: f.path.clone(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            out_dir: overrides
                .out_dir
                .or_else(|| file_path(file, |t| t.out_dir.as_ref()))
                .unwrap_or(defaults.out_dir),
            theme: overrides.theme.or(file_theme).unwrap_or(defaults.theme),
            assets_dir: overrides
                .assets_dir
                .or_else(|| file_path(file, |t| t.assets_dir.as_ref())),
        })
    }
}

/// Path picked from the file's `[export]` table, joined onto the file's directory.
fn file_path(
    file: Option<&LoadedConfig>,
    pick: impl Fn(&ExportTable) -> Option<&PathBuf>,
) -> Option<PathBuf> {
    file.and_then(|f| pick(&f.export).map(|p| f.base_dir().join(p)))
}
