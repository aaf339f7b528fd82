use std::io;
use std::path::PathBuf;

use entropy_site::ThemeParseError;

/// Everything that can go wrong while loading config or writing the site.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid theme in {}: {source}", .path.display())]
    InvalidTheme {
        path: PathBuf,
        #[source]
        source: ThemeParseError,
    },

    #[error("assets path {} is not a directory", .0.display())]
    MissingAssets(PathBuf),

    #[error(
        "output directory {} overlaps assets directory {}",
        .out.display(),
        .assets.display()
    )]
    AssetsOverlapOutput { assets: PathBuf, out: PathBuf },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ExportError::Io { path, source }
    }
}
