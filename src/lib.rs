//! # Folder Gallery
//!
//! A filesystem-backed photo gallery core. Your filesystem is the data
//! source: every directory under the gallery root is an album, images are
//! ordered and titled by their filenames, and a saved catalog makes
//! listings and page browsing cheap and reproducible.
//!
//! # Architecture: Scan Once, Read Many
//!
//! One command walks the filesystem; everything else reads the catalog it
//! produced:
//!
//! ```text
//! 1. Scan     gallery/  →  catalog.json    (filesystem → structured data)
//! 2. List     catalog   →  albums, images  (sorted, paginated views)
//! 3. Browse   catalog   →  page tree       (URLs, breadcrumbs, album stats)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the catalog is human-readable JSON you can inspect
//!   and diff between scans.
//! - **Pure read paths**: listings and page views are functions over the
//!   catalog, so unit tests exercise sorting, pagination and page
//!   resolution without touching the filesystem.
//! - **Cheap browsing**: resolving a page URL or listing an album never
//!   stats a single file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the gallery root and builds the catalog |
//! | [`catalog`] | Catalog records (folders, images) and their JSON persistence |
//! | [`config`] | `gallery.toml` loading, validation, merging and stock defaults |
//! | [`naming`] | `NNN-name` filename convention parser and URL slug sanitizer |
//! | [`metadata`] | Descriptions from filenames, capture dates from EXIF, batch refresh |
//! | [`listing`] | Sort keys, sort orders and pagination over image collections |
//! | [`index`] | Album stats and image listings over the catalog |
//! | [`gallery`] | Page tree mirroring the folder tree: URLs, breadcrumbs, album views |
//! | [`imaging`] | Thumbnail crop and preview fit geometry |
//! | [`output`] | CLI output formatting for every command |
//!
//! # Design Decisions
//!
//! ## Numeric Sort Codes
//!
//! Sort settings travel as 1-based numeric codes (`sort_option`,
//! `sort_order`) in config and on gallery pages, decoded by
//! [`listing::SortKey::from_code`] and [`listing::SortOrder::from_code`].
//! Unknown codes fall back to filename ascending instead of failing, so a
//! catalog or config written by a newer version still lists correctly on
//! an older one.
//!
//! ## Deferred EXIF Refresh
//!
//! Saving a gallery page sorted by EXIF date queues a metadata refresh of
//! its bound folder instead of reading image files inline. Page saves stay
//! fast and cannot be failed by an unreadable image; the queue is drained
//! explicitly by [`gallery::PageTree::run_pending_refreshes`] or the CLI
//! `refresh` command, and per-file failures are counted, never propagated.
//!
//! ## Drift-Tolerant Reads
//!
//! The page tree and the catalog evolve independently, so a page can
//! outlive the folder it was bound to. Every read path treats an
//! unresolvable binding as an empty result: zero counts, no cover, no
//! images. A stale page renders as a hollow container instead of an error.
//!
//! ## Non-Recursive Listings
//!
//! Album stats and image listings count direct children only. Deep trees
//! stay cheap to list, and an album's numbers always match what its own
//! page shows.
//!
//! # The Catalog File
//!
//! State is a single pretty-printed JSON file under `.folder-gallery/`,
//! carrying a format version that rejects stale files with a re-scan hint.
//! Nothing in it is precious: delete it and run `scan` again.

pub mod catalog;
pub mod config;
pub mod gallery;
pub mod imaging;
pub mod index;
pub mod listing;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
