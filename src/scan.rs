//! Filesystem scanning and catalog generation.
//!
//! Walks a gallery root to discover album folders and their images,
//! producing the [`Catalog`] every listing operation runs against.
//!
//! ## Directory Structure
//!
//! Any directory tree works; folders become albums, images stay with the
//! folder that directly contains them:
//!
//! ```text
//! gallery/                         # Gallery root
//! ├── gallery.toml                 # Configuration (optional)
//! ├── 010-Landscapes/              # Album (ordering prefix optional)
//! │   ├── 01-dawn.jpg
//! │   ├── 02-dusk.jpg
//! │   └── 03-sunset_over_bay.jpg
//! ├── 020-Travel/                  # Album with sub-albums and own images
//! │   ├── 01-packing.jpg
//! │   ├── 010-Japan/
//! │   │   └── 01-tokyo.jpg
//! │   └── 020-Italy/
//! │       └── 01-rome.jpg
//! └── 2024_misc/                   # Empty albums are kept, not errors
//! ```
//!
//! Unlike stricter layouts, a folder may hold images and subfolders at the
//! same time. Hidden entries (leading dot) are skipped, which also keeps the
//! default state directory out of its own catalog.
//!
//! ## Determinism
//!
//! Traversal is sorted by file name, so ids, folder order, and per-folder
//! image order are identical across runs over an unchanged tree. That
//! per-folder image order is the discovery order later sorts must preserve
//! for equal keys.
//!
//! ## Errors
//!
//! A missing or non-directory root is the misconfigured-install case and
//! fails immediately. Everything else about a file is best-effort: an image
//! whose header will not parse still gets cataloged, just without
//! dimensions.

use crate::catalog::{Catalog, Folder, FolderId, ImageAsset, ImageId};
use crate::metadata;
use crate::naming;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Gallery root not found or not a directory: {0}")]
    RootNotFound(PathBuf),
}

/// Extensions treated as gallery images (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "tif", "tiff"];

/// Scan a gallery root into a fresh catalog.
///
/// Every directory becomes a [`Folder`] (empty ones included) and every
/// directly contained image file becomes an [`ImageAsset`] with filesystem
/// timestamps, a description derived from its filename, and header-probed
/// dimensions when the format allows. EXIF dates are not read here; that is
/// the metadata refresh's job.
pub fn scan(root: &Path) -> Result<Catalog, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    let root = fs::canonicalize(root)?;

    let mut catalog = Catalog::new(root.clone());
    let mut folder_ids: HashMap<PathBuf, FolderId> = HashMap::new();

    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(&root)
            .unwrap_or_else(|_| Path::new(""));

        if entry.file_type().is_dir() {
            let parent = rel.parent().and_then(|p| folder_ids.get(p)).copied();
            let name = if entry.depth() == 0 {
                String::new()
            } else {
                entry.file_name().to_string_lossy().to_string()
            };
            let id = FolderId(catalog.folders.len() as u32);
            folder_ids.insert(rel.to_path_buf(), id);
            catalog.folders.push(Folder {
                id,
                parent,
                path: rel.to_string_lossy().to_string(),
                title: folder_title(&name),
                name,
            });
        } else if entry.file_type().is_file() && is_image(entry.path()) {
            let parent_rel = rel.parent().unwrap_or_else(|| Path::new(""));
            // Parent directories are always visited first, so a miss here
            // can only mean the parent was filtered out
            let Some(&folder) = folder_ids.get(parent_rel) else {
                continue;
            };

            let meta = entry.metadata()?;
            let modified = meta.modified()?;
            let created = meta.created().unwrap_or(modified);

            let filename = entry.file_name().to_string_lossy().to_string();
            catalog.images.push(ImageAsset {
                id: ImageId(catalog.images.len() as u32),
                folder,
                source_path: rel.to_string_lossy().to_string(),
                description: metadata::extract_description(&filename),
                filename,
                created_at: DateTime::<Utc>::from(created),
                last_edited_at: DateTime::<Utc>::from(modified),
                exif_date: None,
                dimensions: image::image_dimensions(entry.path()).ok(),
            });
        }
    }

    Ok(catalog)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Display title for a folder name: ordering prefix stripped, separators to
/// spaces. Names that parse down to nothing keep the raw name.
fn folder_title(name: &str) -> String {
    let parsed = naming::parse_entry_name(name);
    if parsed.display_title.is_empty() {
        name.to_string()
    } else {
        parsed.display_title
    }
}
