//! Image metadata extraction: descriptions and capture dates.
//!
//! ## Descriptions
//!
//! Derived from the filename alone via the `NN-name` convention:
//! `01-sunset_over_bay.jpg` becomes "sunset over bay". Simple, requires no
//! tooling, and consistent with how album folders are titled. Extraction is
//! total: a filename that parses down to nothing (say `01.jpg`) falls back
//! to the filename itself rather than an empty description.
//!
//! ## Capture dates
//!
//! Resolved per image, first usable source wins:
//!
//! - EXIF `DateTimeOriginal` (what the camera wrote at the shutter)
//! - EXIF `DateTime` (set by some editors on export)
//! - the file's own creation time
//!
//! Scanned images, screenshots and stripped exports routinely carry no EXIF
//! block at all, so the filesystem fallback is the normal path, not an
//! exception. Only a file that cannot be opened yields
//! [`MetadataError::Unavailable`]; callers then fall back to the creation
//! time already stored in the catalog.
//!
//! ## Batch refresh
//!
//! [`write_exif_dates`] recomputes the stored EXIF date for every image
//! directly inside one folder. It is an explicit operation (nothing runs
//! it behind a save) and idempotent: over an unchanged folder a second run
//! changes nothing. Per-file failures are counted in the outcome, never
//! propagated; one unreadable file must not sink the rest of the album.

use crate::catalog::{Catalog, FolderId, ImageId};
use crate::naming;
use chrono::{DateTime, NaiveDate, Utc};
use exif::{In, Reader as ExifReader, Tag};
use rayon::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    /// The file could not be opened or stat'ed at all.
    #[error("Metadata unavailable for {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MetadataError {
    fn unavailable(path: &Path, source: std::io::Error) -> Self {
        MetadataError::Unavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Derive a human-readable description from an image filename.
///
/// Strips the extension and any `NN-`/`NN_` ordering prefix, then converts
/// the remaining separators to single spaces:
/// - `"01-sunset_over_bay.jpg"` → `"sunset over bay"`
/// - `"plain.jpg"` → `"plain"`
/// - `"01.jpg"` → `"01.jpg"` (nothing left after parsing: keep the filename)
pub fn extract_description(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let parsed = naming::parse_entry_name(stem);
    let description = parsed
        .display_title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if description.is_empty() {
        filename.to_string()
    } else {
        description
    }
}

/// Resolve the capture date of an image file.
///
/// Reads EXIF `DateTimeOriginal`, then `DateTime`; a readable file without
/// a usable EXIF date falls back to its filesystem creation time (or
/// modification time on platforms without birth times). Only a file that
/// cannot be opened at all is an error.
pub fn extract_capture_date(path: &Path) -> Result<DateTime<Utc>, MetadataError> {
    let file = File::open(path).map_err(|e| MetadataError::unavailable(path, e))?;

    let mut reader = BufReader::new(&file);
    if let Ok(exif) = ExifReader::new().read_from_container(&mut reader)
        && let Some(date) = exif_capture_date(&exif)
    {
        return Ok(date);
    }

    // No usable EXIF: the file's own timestamps are the next best signal
    let meta = file
        .metadata()
        .map_err(|e| MetadataError::unavailable(path, e))?;
    let fallback = match meta.created() {
        Ok(created) => created,
        Err(_) => meta
            .modified()
            .map_err(|e| MetadataError::unavailable(path, e))?,
    };
    Ok(DateTime::<Utc>::from(fallback))
}

/// First usable EXIF date field, camera-written tags before editor-written.
fn exif_capture_date(exif: &exif::Exif) -> Option<DateTime<Utc>> {
    [Tag::DateTimeOriginal, Tag::DateTime]
        .into_iter()
        .find_map(|tag| {
            let field = exif.get_field(tag, In::PRIMARY)?;
            let exif::Value::Ascii(ref values) = field.value else {
                return None;
            };
            let parsed = exif::DateTime::from_ascii(values.first()?).ok()?;
            exif_to_utc(&parsed)
        })
}

/// Convert a parsed EXIF datetime to UTC. Returns `None` for nonsense
/// values like the `0000:00:00 00:00:00` some firmwares write.
fn exif_to_utc(dt: &exif::DateTime) -> Option<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())?;
    let time = date.and_hms_opt(dt.hour.into(), dt.minute.into(), dt.second.into())?;
    Some(time.and_utc())
}

/// Summary of one folder's metadata refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub folder: FolderId,
    /// Images whose stored EXIF date changed.
    pub updated: usize,
    /// Images whose stored EXIF date was already current.
    pub unchanged: usize,
    /// Images whose file could not be read; their stored date was cleared.
    pub failed: usize,
}

impl RefreshOutcome {
    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.failed
    }
}

impl fmt::Display for RefreshOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failed > 0 {
            write!(
                f,
                "{} updated, {} unchanged, {} unreadable ({} total)",
                self.updated,
                self.unchanged,
                self.failed,
                self.total()
            )
        } else {
            write!(
                f,
                "{} updated, {} unchanged ({} total)",
                self.updated,
                self.unchanged,
                self.total()
            )
        }
    }
}

/// Recompute and store the EXIF date of every image directly inside
/// `folder`.
///
/// Extraction runs on the rayon pool; results are applied to the catalog in
/// a deterministic pass afterwards. A successful extraction stores
/// `Some(date)`, an unreadable file stores `None`. Running twice over an
/// unchanged folder stores identical values and reports zero updates the
/// second time. A folder id that no longer resolves produces an all-zero
/// outcome.
pub fn write_exif_dates(catalog: &mut Catalog, folder: FolderId) -> RefreshOutcome {
    let targets: Vec<(ImageId, PathBuf)> = catalog
        .images_in(folder)
        .into_iter()
        .map(|image| (image.id, catalog.image_path(image)))
        .collect();

    let extracted: Vec<(ImageId, Result<DateTime<Utc>, MetadataError>)> = targets
        .into_par_iter()
        .map(|(id, path)| (id, extract_capture_date(&path)))
        .collect();

    let mut outcome = RefreshOutcome {
        folder,
        updated: 0,
        unchanged: 0,
        failed: 0,
    };
    for (id, result) in extracted {
        match result {
            Ok(date) => {
                if catalog.set_exif_date(id, Some(date)) {
                    outcome.updated += 1;
                } else {
                    outcome.unchanged += 1;
                }
            }
            Err(_) => {
                catalog.set_exif_date(id, None);
                outcome.failed += 1;
            }
        }
    }
    outcome
}
