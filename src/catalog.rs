//! Catalog of folders and images backing every listing operation.
//!
//! The filesystem is the source of truth; the catalog is its indexed
//! snapshot, produced by [`scan`](crate::scan) and persisted as a versioned
//! JSON document in the state directory. Queries (subfolders, images of a
//! folder, lookups by id or path) all run against this snapshot, so a
//! catalog survives the folders being slow or remote at browse time.
//!
//! Ids are positions in scan order and stay stable for the lifetime of one
//! catalog file. A re-scan may renumber everything, so anything holding a
//! [`FolderId`] across scans (a gallery page binding, say) must expect the
//! id to stop resolving and degrade rather than assume it.
//!
//! The absolute gallery root is stored in the document. Moving the gallery
//! directory invalidates the stored image paths; re-running `scan` is the
//! fix, and [`Catalog::load`] reports a version mismatch the same way when
//! the format changes between releases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the catalog file within the state directory.
const CATALOG_FILENAME: &str = "catalog.json";

/// Version of the catalog format. Bump this when record shapes change so
/// stale files get rejected with a re-scan hint instead of misparsing.
pub const CATALOG_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog version {found} not supported (expected {expected}), re-run scan")]
    Version { found: u32, expected: u32 },
}

/// Identifier of a [`Folder`] within one catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FolderId(pub u32);

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an [`ImageAsset`] within one catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directory under the gallery root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    /// Immediate parent; `None` for the gallery root itself.
    pub parent: Option<FolderId>,
    /// Path relative to the gallery root, `""` for the root folder.
    pub path: String,
    /// Final path component, `""` for the root folder.
    pub name: String,
    /// Display title: name with the ordering prefix stripped and separators
    /// converted to spaces.
    pub title: String,
}

/// An image file inside a [`Folder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: ImageId,
    /// Folder the file sits in directly.
    pub folder: FolderId,
    pub filename: String,
    /// Path relative to the gallery root, including parent folders.
    pub source_path: String,
    /// Derived once from the filename at scan time.
    pub description: String,
    /// Filesystem creation time; the modification time stands in on
    /// platforms without birth times.
    pub created_at: DateTime<Utc>,
    /// Filesystem modification time.
    pub last_edited_at: DateTime<Utc>,
    /// EXIF capture time, populated by the metadata refresh. `None` until
    /// refreshed, or when the file was unreadable during refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif_date: Option<DateTime<Utc>>,
    /// Pixel dimensions from the image header, when probing succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
}

impl ImageAsset {
    /// Effective capture timestamp: the EXIF date when one is stored, the
    /// creation time otherwise. Total, so EXIF-date sorting never panics on
    /// unrefreshed or EXIF-less images.
    pub fn capture_date(&self) -> DateTime<Utc> {
        self.exif_date.unwrap_or(self.created_at)
    }
}

/// Indexed snapshot of one gallery root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub version: u32,
    /// Absolute gallery root the catalog was scanned from.
    pub root: PathBuf,
    /// All folders in scan order (parents before children, siblings by path).
    pub folders: Vec<Folder>,
    /// All images in scan order; within one folder, filenames ascending.
    pub images: Vec<ImageAsset>,
}

impl Catalog {
    /// Create an empty catalog for a gallery root. Used by the scanner.
    pub fn new(root: PathBuf) -> Self {
        Self {
            version: CATALOG_VERSION,
            root,
            folders: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Look up a folder by id.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// The gallery root folder. `None` only for a catalog that never saw a
    /// scan.
    pub fn root_folder(&self) -> Option<&Folder> {
        self.folders.iter().find(|f| f.parent.is_none())
    }

    /// Look up a folder by its root-relative path (`""` for the root).
    pub fn folder_by_path(&self, path: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.path == path)
    }

    /// Immediate subfolders of a folder, in scan order.
    pub fn subfolders(&self, id: FolderId) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent == Some(id))
            .collect()
    }

    /// Images directly inside a folder, in scan order. Never recurses.
    pub fn images_in(&self, id: FolderId) -> Vec<&ImageAsset> {
        self.images.iter().filter(|img| img.folder == id).collect()
    }

    /// Look up an image by id.
    pub fn image(&self, id: ImageId) -> Option<&ImageAsset> {
        self.images.iter().find(|img| img.id == id)
    }

    /// Absolute path of an image file on disk.
    pub fn image_path(&self, image: &ImageAsset) -> PathBuf {
        self.root.join(&image.source_path)
    }

    /// Store an image's EXIF date. Returns whether the stored value changed,
    /// so batch refreshes can report updated vs. unchanged counts. A missing
    /// id is a no-op.
    pub fn set_exif_date(&mut self, id: ImageId, date: Option<DateTime<Utc>>) -> bool {
        match self.images.iter_mut().find(|img| img.id == id) {
            Some(image) if image.exif_date != date => {
                image.exif_date = date;
                true
            }
            _ => false,
        }
    }

    /// Load the catalog from a state directory.
    ///
    /// Unlike a disposable cache this file is authoritative, so corruption
    /// and version drift surface as errors telling the user to re-scan
    /// instead of silently presenting an empty gallery.
    pub fn load(state_dir: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(catalog_path(state_dir))?;
        let catalog: Self = serde_json::from_str(&content)?;
        if catalog.version != CATALOG_VERSION {
            return Err(CatalogError::Version {
                found: catalog.version,
                expected: CATALOG_VERSION,
            });
        }
        Ok(catalog)
    }

    /// Save the catalog into a state directory, creating it if needed.
    pub fn save(&self, state_dir: &Path) -> Result<(), CatalogError> {
        fs::create_dir_all(state_dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(catalog_path(state_dir), json)?;
        Ok(())
    }
}

/// Resolve the catalog file path for a state directory.
pub fn catalog_path(state_dir: &Path) -> PathBuf {
    state_dir.join(CATALOG_FILENAME)
}
