//! A single extrusion run: read, extrude, write.

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::policy::OutputPolicy;
use extruder_core::{ImageFormat, Pix};
use extruder_io::{IoError, format_from_path, is_writable, read_image, write_image_to};
use extruder_transform::{TileGrid, extrude, validate_tile_size};
use std::fs::{self, Permissions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Parameters of one extrusion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Tile width as given by the user; checked before use
    pub tile_width: i64,
    /// Tile height as given by the user; checked before use
    pub tile_height: i64,
    /// Source tile sheet
    pub source: PathBuf,
    /// Where the result goes
    pub policy: OutputPolicy,
    /// Output encoding; inferred from the destination extension if `None`
    pub format: Option<ImageFormat>,
}

impl Job {
    /// Overwrite `source` in place, format taken from its extension.
    pub fn new(tile_width: i64, tile_height: i64, source: impl Into<PathBuf>) -> Self {
        Job {
            tile_width,
            tile_height,
            source: source.into(),
            policy: OutputPolicy::InPlace,
            format: None,
        }
    }

    pub fn with_policy(mut self, policy: OutputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The file that was written
    pub destination: PathBuf,
    /// The encoding it was written in
    pub format: ImageFormat,
    /// Layout of the source and extruded sheets
    pub grid: TileGrid,
}

/// Run an extrusion job.
///
/// The tile size is checked first, then the destination format, so bad
/// arguments fail before any image is decoded. The extruded sheet is
/// encoded into a temporary file next to the destination and renamed over
/// it only once encoding has succeeded.
///
/// Failures are logged through `logger` and returned.
pub fn run(job: &Job, logger: &dyn Logger) -> Result<Report> {
    let result = execute(job, logger);
    if let Err(e) = &result {
        logger.error(&format!("Error! {}", e));
    }
    result
}

fn execute(job: &Job, logger: &dyn Logger) -> Result<Report> {
    logger.info(&format!(
        "extrude {} {} {}",
        job.tile_width,
        job.tile_height,
        job.source.display()
    ));
    let (tile_width, tile_height) = validate_tile_size(job.tile_width, job.tile_height)?;

    let destination = job.policy.resolve(&job.source);
    let format = output_format(&destination, job.format)?;

    let pixs = read_image(&job.source).map_err(|source| {
        if source.is_not_found() {
            Error::SourceNotFound {
                path: job.source.clone(),
            }
        } else {
            Error::SourceUnreadable {
                path: job.source.clone(),
                source,
            }
        }
    })?;

    let grid = TileGrid::for_image(&pixs, tile_width, tile_height)?;
    logger.info(&format!(
        "source is {}x{}: {} columns x {} rows of {}x{} tiles",
        pixs.width(),
        pixs.height(),
        grid.columns(),
        grid.rows(),
        tile_width,
        tile_height
    ));

    let pixd = extrude(&pixs, tile_width, tile_height)?;
    logger.info(&format!(
        "writing {}x{} {} image to {}",
        pixd.width(),
        pixd.height(),
        format.extension(),
        destination.display()
    ));

    write_atomically(&pixd, &destination, format).map_err(|source| {
        Error::DestinationWriteFailure {
            path: destination.clone(),
            source,
        }
    })?;

    Ok(Report {
        destination,
        format,
        grid,
    })
}

/// Decide the output encoding and make sure it keeps the alpha channel.
fn output_format(destination: &Path, requested: Option<ImageFormat>) -> Result<ImageFormat> {
    let unsupported = |source| Error::UnsupportedOutput {
        path: destination.to_path_buf(),
        source,
    };

    let format = match requested {
        Some(format) => format,
        None => format_from_path(destination).map_err(unsupported)?,
    };
    if !is_writable(format) {
        return Err(unsupported(IoError::UnsupportedFormat(format!(
            "{} output cannot carry an alpha channel",
            format.extension()
        ))));
    }
    Ok(format)
}

fn write_atomically(pix: &Pix, destination: &Path, format: ImageFormat) -> extruder_io::IoResult<()> {
    // Replace the file a symlink points to, not the link itself
    let target = follow_symlink(destination);
    let destination = target.as_path();
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_image_to(pix, &mut writer, format)?;
        writer.flush()?;
    }
    if let Some(permissions) = output_permissions(destination) {
        tmp.as_file().set_permissions(permissions)?;
    }

    tmp.persist(destination).map_err(|e| IoError::Io(e.error))?;
    Ok(())
}

/// Resolve `path` to the file it names when it is a symlink.
///
/// A dangling link resolves to its target path, relative to the link's
/// directory, so the write creates the file the link expects.
fn follow_symlink(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return path.to_path_buf();
    }
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    match fs::read_link(path) {
        Ok(target) => match path.parent() {
            Some(parent) => parent.join(target),
            None => target,
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Keep the permissions of a file being replaced; new files get the
/// usual `rw-r--r--` instead of the temporary file's private mode.
fn output_permissions(destination: &Path) -> Option<Permissions> {
    fs::metadata(destination)
        .map(|meta| meta.permissions())
        .ok()
        .or_else(new_file_permissions)
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(
            output_format(Path::new("out/sheet.PNG"), None).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_output_format_override() {
        assert_eq!(
            output_format(Path::new("sheet.bin"), Some(ImageFormat::Png)).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_output_format_rejects_opaque() {
        for path in ["sheet.jpg", "sheet.bmp", "sheet", "sheet.xyz"] {
            assert!(matches!(
                output_format(Path::new(path), None),
                Err(Error::UnsupportedOutput { .. })
            ));
        }
        assert!(matches!(
            output_format(Path::new("sheet.png"), Some(ImageFormat::Gif)),
            Err(Error::UnsupportedOutput { .. })
        ));
    }

    #[test]
    fn test_job_builder() {
        let job = Job::new(16, 8, "tiles.png")
            .with_policy(OutputPolicy::legacy())
            .with_format(ImageFormat::Png);
        assert_eq!(job.policy.resolve(&job.source), Path::new("tiles_ext.png"));
        assert_eq!(job.format, Some(ImageFormat::Png));
    }

    #[cfg(unix)]
    #[test]
    fn test_follow_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.png");
        fs::write(&real, b"x").unwrap();
        let link = dir.path().join("link.png");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        assert_eq!(follow_symlink(&link), fs::canonicalize(&real).unwrap());

        // Dangling links resolve relative to their own directory
        let dangling = dir.path().join("dangling.png");
        std::os::unix::fs::symlink("later.png", &dangling).unwrap();
        assert_eq!(follow_symlink(&dangling), dir.path().join("later.png"));

        assert_eq!(follow_symlink(&real), real);
    }
}
