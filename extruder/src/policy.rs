//! Destination naming
//!
//! An extruded sheet can overwrite its source, go to an explicit path, or
//! land next to the source under a suffixed name
//! (`tiles.png` -> `tiles_ext.png`).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix of the historical `<name>_ext.<ext>` output naming.
pub const LEGACY_SUFFIX: &str = "_ext";

/// Where an extrusion run writes its result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputPolicy {
    /// Replace the source file
    #[default]
    InPlace,
    /// Write to the given path
    Explicit(PathBuf),
    /// Write next to the source as `<stem><suffix>.<ext>`
    Suffixed(String),
}

impl OutputPolicy {
    /// The historical `<name>_ext.<ext>` naming.
    pub fn legacy() -> Self {
        OutputPolicy::Suffixed(LEGACY_SUFFIX.to_string())
    }

    /// Pick a policy from command-line style options.
    ///
    /// An explicit destination wins over a suffix; with neither the
    /// source is replaced.
    pub fn from_options(destination: Option<PathBuf>, suffix: Option<String>) -> Self {
        match (destination, suffix) {
            (Some(path), _) => OutputPolicy::Explicit(path),
            (None, Some(suffix)) => OutputPolicy::Suffixed(suffix),
            (None, None) => OutputPolicy::InPlace,
        }
    }

    /// Compute the destination path for `source`.
    pub fn resolve(&self, source: &Path) -> PathBuf {
        match self {
            OutputPolicy::InPlace => source.to_path_buf(),
            OutputPolicy::Explicit(path) => path.clone(),
            OutputPolicy::Suffixed(suffix) => {
                let mut name = source
                    .file_stem()
                    .map(|s| s.to_os_string())
                    .unwrap_or_else(OsString::new);
                name.push(suffix);
                if let Some(ext) = source.extension() {
                    name.push(".");
                    name.push(ext);
                }
                source.with_file_name(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_place() {
        let src = Path::new("art/tiles.png");
        assert_eq!(OutputPolicy::InPlace.resolve(src), src);
    }

    #[test]
    fn test_explicit() {
        let policy = OutputPolicy::Explicit(PathBuf::from("out/sheet.png"));
        assert_eq!(
            policy.resolve(Path::new("art/tiles.png")),
            Path::new("out/sheet.png")
        );
    }

    #[test]
    fn test_legacy_suffix() {
        let policy = OutputPolicy::legacy();
        assert_eq!(
            policy.resolve(Path::new("art/tiles.png")),
            Path::new("art/tiles_ext.png")
        );
        assert_eq!(
            policy.resolve(Path::new("tiles.v2.png")),
            Path::new("tiles.v2_ext.png")
        );
        assert_eq!(policy.resolve(Path::new("tiles")), Path::new("tiles_ext"));
    }

    #[test]
    fn test_from_options_precedence() {
        assert_eq!(
            OutputPolicy::from_options(Some("a.png".into()), Some("_x".into())),
            OutputPolicy::Explicit("a.png".into())
        );
        assert_eq!(
            OutputPolicy::from_options(None, Some("_x".into())),
            OutputPolicy::Suffixed("_x".into())
        );
        assert_eq!(OutputPolicy::from_options(None, None), OutputPolicy::InPlace);
    }
}
