//! Sorting and pagination for album and image listings.
//!
//! Sort settings travel as numeric codes (in config and on gallery pages) so
//! values written by earlier releases keep meaning something. Decoding is
//! deliberately forgiving: a code outside the known range falls back to the
//! first option instead of erroring, so a stale config still produces a
//! listing.
//!
//! Sorting is stable in both directions. Descending reverses the key
//! comparison, not the sorted result, so images with equal keys (common for
//! EXIF-less files sharing a filesystem timestamp) keep their discovery
//! order either way.
//!
//! Page numbers are 1-based. Requesting a page past the end is not an error:
//! the slice comes back empty but the totals still describe the full
//! collection, so navigation can render. A zero page size is rejected; that
//! is a broken caller, not a browsing dead end.

use crate::catalog::ImageAsset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort key for image listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Byte-wise filename order. The `NN-` prefix convention makes this the
    /// hand-curated order.
    Filename,
    /// Filesystem creation time.
    Created,
    /// Filesystem modification time.
    LastEdited,
    /// EXIF capture time, falling back per image to the creation time.
    ExifDate,
}

impl SortKey {
    /// Decode the 1-based option code. Unknown codes fall back to `Filename`.
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => SortKey::Created,
            3 => SortKey::LastEdited,
            4 => SortKey::ExifDate,
            _ => SortKey::Filename,
        }
    }

    /// Human-readable label for listing headers.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Filename => "filename",
            SortKey::Created => "created",
            SortKey::LastEdited => "last edited",
            SortKey::ExifDate => "EXIF date",
        }
    }
}

/// Sort direction for image listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Decode the 1-based option code. Unknown codes fall back to `Ascending`.
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    /// Human-readable label for listing headers.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// Sort images in place by the given key and direction.
///
/// The sort is stable and total: every image has a value for every key
/// (`ExifDate` substitutes the creation time when no EXIF date is stored),
/// and equal keys preserve the incoming order.
pub fn sort_images(images: &mut [&ImageAsset], key: SortKey, order: SortOrder) {
    images.sort_by(|a, b| {
        let by_key = match key {
            SortKey::Filename => a.filename.cmp(&b.filename),
            SortKey::Created => a.created_at.cmp(&b.created_at),
            SortKey::LastEdited => a.last_edited_at.cmp(&b.last_edited_at),
            SortKey::ExifDate => a.capture_date().cmp(&b.capture_date()),
        };
        match order {
            SortOrder::Ascending => by_key,
            SortOrder::Descending => by_key.reverse(),
        }
    });
}

/// Requested page size was zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid page size: {0}")]
pub struct InvalidPageSize(pub usize);

/// One page of a larger collection, with enough totals to render navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSlice<T> {
    /// Items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// Size of the whole collection, not of this page.
    pub total_items: usize,
    /// Number of pages the collection spans at this page size.
    pub total_pages: usize,
    /// 1-based page number as requested, even when past the end.
    pub page_number: usize,
    pub page_size: usize,
}

impl<T> PageSlice<T> {
    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Cut one 1-based page out of `items`.
///
/// Page numbers outside the valid range (0, or past the last page) yield an
/// empty slice with the totals intact. A zero `page_size` is an error.
pub fn paginate<T>(
    items: Vec<T>,
    page_size: usize,
    page_number: usize,
) -> Result<PageSlice<T>, InvalidPageSize> {
    if page_size == 0 {
        return Err(InvalidPageSize(page_size));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = page_number
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size));
    let page_items = match start {
        Some(start) if start < total_items => {
            items.into_iter().skip(start).take(page_size).collect()
        }
        _ => Vec::new(),
    };

    Ok(PageSlice {
        items: page_items,
        total_items,
        total_pages,
        page_number,
        page_size,
    })
}
