//! Album listings over the catalog.
//!
//! Sits between the raw [`Catalog`] and anything that renders it. Two
//! operations, both exactly one level deep:
//!
//! - [`list_albums`]: the child albums of a folder, each with the counts
//!   and cover image an overview page shows next to its title.
//! - [`list_images`]: the images directly inside one folder, sorted.
//!
//! An overview survives a stale parent id and shows an empty listing;
//! asking for the images of a folder that no longer exists is a real miss
//! and reported as [`FolderNotFound`].

use crate::catalog::{Catalog, FolderId, ImageAsset};
use crate::listing::{self, SortKey, SortOrder};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Folder not found: {0}")]
pub struct FolderNotFound(pub FolderId);

/// One row of an album overview.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumStats {
    pub folder: FolderId,
    pub title: String,
    /// Root-relative folder path.
    pub path: String,
    /// Immediate sub-albums only.
    pub sub_album_count: usize,
    /// Direct images only.
    pub image_count: usize,
    /// First image under the requested sort, if the album has any.
    pub cover: Option<ImageAsset>,
}

/// Stats for every immediate child album of `parent`.
///
/// Children come back in catalog order (the scan's name-sorted order);
/// `key` and `order` pick each album's cover, the first image a visitor
/// would see inside it. A `parent` that does not resolve yields an empty
/// Vec, the same face an album without sub-albums shows.
pub fn list_albums(
    catalog: &Catalog,
    parent: FolderId,
    key: SortKey,
    order: SortOrder,
) -> Vec<AlbumStats> {
    catalog
        .subfolders(parent)
        .into_iter()
        .filter_map(|child| album_stats(catalog, child.id, key, order))
        .collect()
}

/// Stats for one album folder, or `None` when the id does not resolve.
pub fn album_stats(
    catalog: &Catalog,
    folder: FolderId,
    key: SortKey,
    order: SortOrder,
) -> Option<AlbumStats> {
    let folder = catalog.folder(folder)?;
    Some(AlbumStats {
        folder: folder.id,
        title: folder.title.clone(),
        path: folder.path.clone(),
        sub_album_count: catalog.subfolders(folder.id).len(),
        image_count: catalog.images_in(folder.id).len(),
        cover: cover_image(catalog, folder.id, key, order),
    })
}

/// The image shown as an album's cover: first under the given sort.
fn cover_image(
    catalog: &Catalog,
    folder: FolderId,
    key: SortKey,
    order: SortOrder,
) -> Option<ImageAsset> {
    let mut images = catalog.images_in(folder);
    listing::sort_images(&mut images, key, order);
    images.into_iter().next().cloned()
}

/// All images directly inside `folder`, sorted.
///
/// Never recurses into sub-albums. An existing folder with no images is an
/// empty Vec; only an id that does not resolve is an error.
pub fn list_images<'a>(
    catalog: &'a Catalog,
    folder: FolderId,
    key: SortKey,
    order: SortOrder,
) -> Result<Vec<&'a ImageAsset>, FolderNotFound> {
    if catalog.folder(folder).is_none() {
        return Err(FolderNotFound(folder));
    }
    let mut images = catalog.images_in(folder);
    listing::sort_images(&mut images, key, order);
    Ok(images)
}
