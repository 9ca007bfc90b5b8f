//! Shared test utilities for the folder-gallery test suite.
//!
//! Provides a gallery-tree builder plus lookup helpers that panic with a
//! clear message on a miss, keeping tests about intent instead of plumbing.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = build_tree(&[
//!     "010-Alps/01-peak.jpg",
//!     "010-Alps/010-Winter/",
//!     "020-Sea/01-shore.jpg",
//! ]);
//! let catalog = scan(tmp.path()).unwrap();
//!
//! let alps = find_folder(&catalog, "010-Alps");
//! let peak = find_image(&catalog, alps.id, "01-peak.jpg");
//! assert_eq!(peak.description, "peak");
//! ```

use std::fs;
use tempfile::TempDir;

use crate::catalog::{Catalog, Folder, FolderId, ImageAsset};

// =========================================================================
// Fixture setup
// =========================================================================

/// Build a gallery tree in a temp directory.
///
/// Entries ending in `/` become empty directories; everything else becomes
/// a small fake image file, parent directories included. Tests get an
/// isolated tree they can mutate freely.
pub fn build_tree(spec: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for path in spec {
        if let Some(dir) = path.strip_suffix('/') {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        } else {
            let full = tmp.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, b"fake image").unwrap();
        }
    }
    tmp
}

// =========================================================================
// Catalog lookups that panic with a clear message on miss
// =========================================================================

/// Find a folder by root-relative path. Panics if not found.
pub fn find_folder<'a>(catalog: &'a Catalog, path: &str) -> &'a Folder {
    catalog.folder_by_path(path).unwrap_or_else(|| {
        let paths: Vec<&str> = catalog.folders.iter().map(|f| f.path.as_str()).collect();
        panic!("folder '{path}' not found. Available: {paths:?}")
    })
}

/// Find an image by filename within a folder. Panics if not found.
pub fn find_image<'a>(catalog: &'a Catalog, folder: FolderId, filename: &str) -> &'a ImageAsset {
    catalog
        .images_in(folder)
        .into_iter()
        .find(|i| i.filename == filename)
        .unwrap_or_else(|| {
            let names = image_filenames(catalog, folder);
            panic!("image '{filename}' not found in folder {folder}. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All image filenames directly in a folder, discovery order.
pub fn image_filenames(catalog: &Catalog, folder: FolderId) -> Vec<&str> {
    catalog
        .images_in(folder)
        .into_iter()
        .map(|i| i.filename.as_str())
        .collect()
}

/// All image descriptions directly in a folder, discovery order.
pub fn image_descriptions(catalog: &Catalog, folder: FolderId) -> Vec<&str> {
    catalog
        .images_in(folder)
        .into_iter()
        .map(|i| i.description.as_str())
        .collect()
}

// =========================================================================
// Tree shape assertions
// =========================================================================

/// Assert that the folder tree under the root matches an expected shape.
///
/// Each entry is `(title, child_titles)` for one top-level album. Use `&[]`
/// for albums without sub-albums.
///
/// ```rust
/// assert_tree_shape(&catalog, &[
///     ("Alps", &["Winter"]),
///     ("Sea", &[]),
/// ]);
/// ```
pub fn assert_tree_shape(catalog: &Catalog, expected: &[(&str, &[&str])]) {
    let root = catalog.root_folder().expect("catalog has no root folder");

    let actual: Vec<&str> = catalog
        .subfolders(root.id)
        .iter()
        .map(|f| f.title.as_str())
        .collect();
    let expected_titles: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(actual, expected_titles, "top-level album titles mismatch");

    for (title, children) in expected {
        let folder = catalog
            .subfolders(root.id)
            .into_iter()
            .find(|f| f.title == *title)
            .unwrap();
        let actual_children: Vec<&str> = catalog
            .subfolders(folder.id)
            .iter()
            .map(|f| f.title.as_str())
            .collect();
        assert_eq!(
            actual_children,
            children.to_vec(),
            "sub-albums of '{title}' mismatch"
        );
    }
}
