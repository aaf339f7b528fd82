use std::fs;
use std::path::{Path, PathBuf};

use entropy_site::render_page_linked;
use entropy_site::styles::SITE_CSS;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::ExportConfig;
use crate::error::ExportError;

pub const INDEX_FILE: &str = "index.html";
pub const STYLES_FILE: &str = "styles.css";

/// What an export run wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
    /// Total bytes written
    pub bytes: u64,
}

impl ExportSummary {
    fn record(&mut self, path: PathBuf, bytes: u64) {
        debug!(path = %path.display(), bytes, "wrote file");
        self.files.push(path);
        self.bytes += bytes;
    }
}

/// Render the page and write it, the stylesheet and any static assets to
/// `config.out_dir`.
///
/// `index.html` links `styles.css` rather than inlining it. Assets are
/// copied first so the generated files always win over same-named asset
/// files. The output directory may not be, or sit inside, the assets
/// directory; that is rejected before anything is written.
pub fn export_site(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    if let Some(assets) = &config.assets_dir {
        if !assets.is_dir() {
            return Err(ExportError::MissingAssets(assets.clone()));
        }
        check_overlap(assets, &config.out_dir)?;
    }

    let out = &config.out_dir;
    fs::create_dir_all(out).map_err(ExportError::io(out))?;

    let mut summary = ExportSummary::default();

    if let Some(assets) = &config.assets_dir {
        copy_assets(assets, out, &mut summary)?;
    }

    let html = render_page_linked(config.theme, STYLES_FILE);
    write_file(&out.join(INDEX_FILE), html.as_bytes(), &mut summary)?;
    write_file(&out.join(STYLES_FILE), SITE_CSS.as_bytes(), &mut summary)?;

    info!(
        out_dir = %out.display(),
        theme = %config.theme,
        files = summary.files.len(),
        bytes = summary.bytes,
        "export complete"
    );
    Ok(summary)
}

fn write_file(path: &Path, contents: &[u8], summary: &mut ExportSummary) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(ExportError::io(path))?;
    summary.record(path.to_path_buf(), contents.len() as u64);
    Ok(())
}

fn check_overlap(assets: &Path, out: &Path) -> Result<(), ExportError> {
    let assets_abs = assets.canonicalize().map_err(ExportError::io(assets))?;
    let out_abs = resolve_existing(out)?;
    if out_abs.starts_with(&assets_abs) {
        return Err(ExportError::AssetsOverlapOutput {
            assets: assets.to_path_buf(),
            out: out.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonical form of `path`, which may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing tail appended.
fn resolve_existing(path: &Path) -> Result<PathBuf, ExportError> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(ExportError::io(path))?
            .join(path)
    };

    let mut tail = Vec::new();
    let mut cursor = path.as_path();
    loop {
        if cursor.exists() {
            let mut resolved = cursor.canonicalize().map_err(ExportError::io(cursor))?;
            resolved.extend(tail.iter().rev());
            return Ok(resolved);
        }
        match (cursor.parent(), cursor.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                cursor = parent;
            }
            _ => return Ok(path),
        }
    }
}

fn copy_assets(assets: &Path, out: &Path, summary: &mut ExportSummary) -> Result<(), ExportError> {
    for entry in WalkDir::new(assets).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(assets).to_path_buf();
            ExportError::Io {
                path,
                source: err.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(assets) else {
            continue;
        };
        let target = out.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(ExportError::io(parent))?;
        }
        let bytes = fs::copy(entry.path(), &target).map_err(ExportError::io(entry.path()))?;
        summary.record(target, bytes);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entropy_site::Theme;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config(out: &Path, theme: Theme, assets: Option<PathBuf>) -> ExportConfig {
        ExportConfig {
            out_dir: out.to_path_buf(),
            theme,
            assets_dir: assets,
        }
    }

    #[test]
    fn writes_index_and_styles() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        let summary = export_site(&config(&out, Theme::Light, None)).unwrap();

        assert_eq!(summary.files, vec![out.join(INDEX_FILE), out.join(STYLES_FILE)]);
        let html = fs::read_to_string(out.join(INDEX_FILE)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("/hero-image-light.jpeg"));
        assert!(html.contains("href=\"styles.css\""));
        assert!(!html.contains("<style>"));
        assert_eq!(fs::read_to_string(out.join(STYLES_FILE)).unwrap(), SITE_CSS);
        assert_eq!(summary.bytes, (html.len() + SITE_CSS.len()) as u64);
    }

    #[test]
    fn copies_assets_with_relative_paths() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("public");
        fs::create_dir_all(assets.join("img")).unwrap();
        fs::write(assets.join("hero-image-dark.png"), b"png").unwrap();
        fs::write(assets.join("img/logo.svg"), b"<svg/>").unwrap();
        let out = tmp.path().join("dist");

        let summary = export_site(&config(&out, Theme::Dark, Some(assets))).unwrap();

        assert_eq!(fs::read(out.join("hero-image-dark.png")).unwrap(), b"png");
        assert_eq!(fs::read(out.join("img/logo.svg")).unwrap(), b"<svg/>");
        assert_eq!(summary.files.len(), 4);
    }

    #[test]
    fn generated_files_override_assets() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("public");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join(INDEX_FILE), "stale").unwrap();
        let out = tmp.path().join("dist");

        export_site(&config(&out, Theme::Dark, Some(assets))).unwrap();

        let html = fs::read_to_string(out.join(INDEX_FILE)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn missing_assets_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let missing = tmp.path().join("nope");

        let err = export_site(&config(&out, Theme::Dark, Some(missing.clone()))).unwrap_err();

        assert!(matches!(err, ExportError::MissingAssets(ref p) if *p == missing));
        assert!(!out.exists());
    }

    #[test]
    fn assets_file_instead_of_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("public");
        fs::write(&file, b"not a dir").unwrap();

        let err = export_site(&config(&tmp.path().join("dist"), Theme::Dark, Some(file))).unwrap_err();

        assert!(matches!(err, ExportError::MissingAssets(_)));
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn out_dir_equal_to_assets_is_rejected_and_assets_survive() {
        let tmp = TempDir::new().unwrap();
        let public = tmp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("hero-image-dark.png"), b"PNGDATA").unwrap();

        let err = export_site(&config(&public, Theme::Dark, Some(public.clone()))).unwrap_err();

        assert!(matches!(err, ExportError::AssetsOverlapOutput { .. }));
        assert_eq!(fs::read(public.join("hero-image-dark.png")).unwrap(), b"PNGDATA");
        assert!(!public.join(INDEX_FILE).exists());
    }

    #[test]
    fn out_dir_equal_to_assets_through_dot_segment_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let public = tmp.path().join("public");
        fs::create_dir_all(public.join("img")).unwrap();

        let out = public.join("img").join("..");
        let err = export_site(&config(&out, Theme::Dark, Some(public))).unwrap_err();

        assert!(matches!(err, ExportError::AssetsOverlapOutput { .. }));
    }

    #[test]
    fn out_dir_inside_assets_is_rejected_before_writing() {
        let tmp = TempDir::new().unwrap();
        let public = tmp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("a.png"), b"a").unwrap();
        let out = public.join("dist");

        let err = export_site(&config(&out, Theme::Dark, Some(public))).unwrap_err();

        assert!(matches!(err, ExportError::AssetsOverlapOutput { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn sibling_dir_with_shared_prefix_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let public = tmp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("a.png"), b"a").unwrap();
        let out = tmp.path().join("public-dist");

        let summary = export_site(&config(&out, Theme::Dark, Some(public))).unwrap();

        assert_eq!(summary.files.len(), 3);
        assert_eq!(fs::read(out.join("a.png")).unwrap(), b"a");
    }
}
