//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (album, image) is its semantic identity, title plus
//! positional index, with filesystem paths shown as secondary context via
//! indented `Source:` lines. This makes the output readable as a content
//! inventory while still letting users trace every entry back to a file.
//!
//! # Entity Display Contract
//!
//! Every entity follows the same two-level pattern across all commands:
//!
//! 1. **Header line**: positional index + title (+ counts for albums)
//! 2. **Context lines**: indented `Source:`, `Cover:`, `Taken:`, `Render:`
//!
//! Shared helpers ([`album_header`], [`image_line`]) enforce the pattern so
//! scan, listing and browse output stay consistent for the same entities.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Albums
//! 001 Landscapes (5 photos, 1 sub-albums)
//!     Source: 010-Landscapes/
//!     001 dawn
//!         Source: 01-dawn.jpg
//!     001 Winter (2 photos)
//!         Source: 010-Landscapes/010-Winter/
//!
//! Config
//!     gallery.toml
//!
//! Indexed 2 albums, 7 images
//! ```
//!
//! ## Listings
//!
//! ```text
//! Images in Landscapes, sorted by filename ascending (page 1/2, 17 total)
//! 001 dawn
//!     Source: 010-Landscapes/01-dawn.jpg
//!     Taken: 2023-08-14 17:30:05
//!     Render: thumbnail 150x115 (crop from 153x115), preview 800x600
//! ```
//!
//! Pagination headers always carry the full totals, even when the requested
//! page is past the end and the body is empty.
//!
//! # Design
//!
//! Every `format_*` function is pure (data in, `Vec<String>` out) so tests
//! assert on exact lines without capturing stdout. The `print_*` wrappers
//! are the only functions that touch the terminal.

use crate::catalog::{Catalog, FolderId, ImageAsset};
use crate::config::{CONFIG_FILENAME, GalleryConfig};
use crate::gallery::{self, AlbumView, RenderRequest};
use crate::index::AlbumStats;
use crate::listing::{PageSlice, SortKey, SortOrder};
use crate::metadata::RefreshOutcome;

/// Format a 1-based position as a zero-padded three-digit index.
///
/// Collections larger than 999 widen naturally.
pub(crate) fn format_index(position: usize) -> String {
    format!("{position:03}")
}

/// Indentation prefix for the given nesting depth (4 spaces per level).
pub(crate) fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for an album: index, title, photo count, sub-album count.
///
/// `001 Landscapes (5 photos)` or `001 Landscapes (5 photos, 2 sub-albums)`.
pub(crate) fn album_header(
    position: usize,
    title: &str,
    image_count: usize,
    sub_album_count: usize,
) -> String {
    let mut detail = format!("{image_count} photos");
    if sub_album_count > 0 {
        detail.push_str(&format!(", {sub_album_count} sub-albums"));
    }
    format!("{} {} ({})", format_index(position), title, detail)
}

/// Header line for an image: index plus description.
///
/// An image whose description is just its filename (nothing parseable in
/// the name) renders the filename in parentheses instead.
pub(crate) fn image_line(position: usize, image: &ImageAsset) -> String {
    if image.description == image.filename {
        format!("{} ({})", format_index(position), image.filename)
    } else {
        format!("{} {}", format_index(position), image.description)
    }
}

/// Pagination header: `<label> (page N/M, T total)`.
fn page_header<T>(label: &str, slice: &PageSlice<T>) -> String {
    format!(
        "{} (page {}/{}, {} total)",
        label,
        slice.page_number,
        slice.total_pages.max(1),
        slice.total_items
    )
}

/// Absolute 1-based position of the `offset`-th item on the current page.
/// A page number of 0 counts like page one; `PageSlice` fields are public
/// and a caller-built slice need not come from `paginate`.
fn page_position<T>(slice: &PageSlice<T>, offset: usize) -> usize {
    slice.page_number.saturating_sub(1) * slice.page_size + offset + 1
}

/// One-line render summary for an image: thumbnail plan plus preview size.
fn render_summary(request: &RenderRequest) -> String {
    let thumbnail = match &request.thumbnail_crop {
        Some(crop) => format!(
            "thumbnail {}x{} (crop from {}x{})",
            request.thumbnail.0, request.thumbnail.1, crop.resize_width, crop.resize_height
        ),
        None => format!(
            "thumbnail {}x{} (dimensions unknown)",
            request.thumbnail.0, request.thumbnail.1
        ),
    };
    format!(
        "{}, preview {}x{}",
        thumbnail, request.preview.0, request.preview.1
    )
}

/// Root folder paths are empty strings; label them explicitly.
fn folder_path_label(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        format!("{path}/")
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Format the full album tree after a scan: every album with its direct
/// images, nested by depth, followed by the config file status and an
/// inventory summary.
pub fn format_scan_output(catalog: &Catalog, config_found: bool) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Albums".to_string());
    if let Some(root) = catalog.root_folder() {
        // Images sitting directly in the gallery root, outside any album
        for (i, image) in catalog.images_in(root.id).into_iter().enumerate() {
            lines.push(image_line(i + 1, image));
            lines.push(format!("{}Source: {}", indent(1), image.source_path));
        }
        append_album_lines(catalog, root.id, 0, &mut lines);
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if config_found {
        lines.push(format!("{}{}", indent(1), CONFIG_FILENAME));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }

    lines.push(String::new());
    lines.push(format!(
        "Indexed {} albums, {} images",
        catalog.folders.len().saturating_sub(1),
        catalog.images.len()
    ));
    lines
}

fn append_album_lines(catalog: &Catalog, parent: FolderId, depth: usize, lines: &mut Vec<String>) {
    for (i, folder) in catalog.subfolders(parent).into_iter().enumerate() {
        let images = catalog.images_in(folder.id);
        let sub_albums = catalog.subfolders(folder.id).len();
        lines.push(format!(
            "{}{}",
            indent(depth),
            album_header(i + 1, &folder.title, images.len(), sub_albums)
        ));
        lines.push(format!("{}Source: {}/", indent(depth + 1), folder.path));
        for (j, image) in images.into_iter().enumerate() {
            lines.push(format!("{}{}", indent(depth + 1), image_line(j + 1, image)));
            lines.push(format!("{}Source: {}", indent(depth + 2), image.filename));
        }
        append_album_lines(catalog, folder.id, depth + 1, lines);
    }
}

pub fn print_scan_output(catalog: &Catalog, config_found: bool) {
    for line in format_scan_output(catalog, config_found) {
        println!("{line}");
    }
}

// ============================================================================
// Album listing
// ============================================================================

/// Format one page of child albums with their stats and cover images.
pub fn format_album_listing(title: &str, albums: &PageSlice<AlbumStats>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(page_header(&format!("Albums under {title}"), albums));
    for (i, album) in albums.items.iter().enumerate() {
        lines.push(album_header(
            page_position(albums, i),
            &album.title,
            album.image_count,
            album.sub_album_count,
        ));
        lines.push(format!("{}Source: {}/", indent(1), album.path));
        if let Some(cover) = &album.cover {
            lines.push(format!("{}Cover: {}", indent(1), cover.filename));
        }
    }
    lines
}

pub fn print_album_listing(title: &str, albums: &PageSlice<AlbumStats>) {
    for line in format_album_listing(title, albums) {
        println!("{line}");
    }
}

// ============================================================================
// Image listing
// ============================================================================

/// Format one page of images: description header plus `Source:`, `Taken:`
/// (only when an EXIF date is stored) and `Render:` context lines.
pub fn format_image_listing(
    title: &str,
    images: &PageSlice<ImageAsset>,
    key: SortKey,
    order: SortOrder,
    config: &GalleryConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(page_header(
        &format!("Images in {title}, sorted by {} {}", key.label(), order.label()),
        images,
    ));
    append_image_rows(&mut lines, images, config);
    lines
}

fn append_image_rows(lines: &mut Vec<String>, images: &PageSlice<ImageAsset>, config: &GalleryConfig) {
    let requests = gallery::render_requests(&images.items, config);
    for (i, (image, request)) in images.items.iter().zip(&requests).enumerate() {
        lines.push(image_line(page_position(images, i), image));
        lines.push(format!("{}Source: {}", indent(1), image.source_path));
        if let Some(taken) = image.exif_date {
            lines.push(format!(
                "{}Taken: {}",
                indent(1),
                taken.format("%Y-%m-%d %H:%M:%S")
            ));
        }
        lines.push(format!("{}Render: {}", indent(1), render_summary(request)));
    }
}

pub fn print_image_listing(
    title: &str,
    images: &PageSlice<ImageAsset>,
    key: SortKey,
    order: SortOrder,
    config: &GalleryConfig,
) {
    for line in format_image_listing(title, images, key, order, config) {
        println!("{line}");
    }
}

// ============================================================================
// Browse
// ============================================================================

/// Format a resolved gallery page: breadcrumb trail, child albums with
/// their URLs, and the page's own images when it has a bound folder.
///
/// `images` is `None` for container pages without an album folder (and for
/// the front page); the image section is then omitted entirely.
pub fn format_browse_output(
    breadcrumbs: &[(String, String)],
    albums: &PageSlice<AlbumView>,
    images: Option<&PageSlice<ImageAsset>>,
    sort: (SortKey, SortOrder),
    config: &GalleryConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    if !breadcrumbs.is_empty() {
        let trail = breadcrumbs
            .iter()
            .map(|(title, _)| title.as_str())
            .collect::<Vec<_>>()
            .join(" > ");
        lines.push(format!("Breadcrumbs: {trail}"));
        lines.push(String::new());
    }

    lines.push(page_header("Albums", albums));
    for (i, album) in albums.items.iter().enumerate() {
        lines.push(album_header(
            page_position(albums, i),
            &album.title,
            album.image_count,
            album.sub_album_count,
        ));
        lines.push(format!("{}URL: {}", indent(1), album.url));
        if let Some(cover) = &album.cover {
            lines.push(format!("{}Cover: {}", indent(1), cover.filename));
        }
    }

    if let Some(images) = images {
        lines.push(String::new());
        lines.push(page_header(
            &format!("Images, sorted by {} {}", sort.0.label(), sort.1.label()),
            images,
        ));
        append_image_rows(&mut lines, images, config);
    }

    lines
}

pub fn print_browse_output(
    breadcrumbs: &[(String, String)],
    albums: &PageSlice<AlbumView>,
    images: Option<&PageSlice<ImageAsset>>,
    sort: (SortKey, SortOrder),
    config: &GalleryConfig,
) {
    for line in format_browse_output(breadcrumbs, albums, images, sort, config) {
        println!("{line}");
    }
}

// ============================================================================
// Refresh
// ============================================================================

/// Format per-folder refresh outcomes plus an overall summary line.
pub fn format_refresh_output(catalog: &Catalog, outcomes: &[RefreshOutcome]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut images = 0;
    let mut updated = 0;
    for outcome in outcomes {
        let label = match catalog.folder(outcome.folder) {
            Some(folder) => folder_path_label(&folder.path),
            None => format!("folder {}", outcome.folder),
        };
        lines.push(format!("{label}: {outcome}"));
        images += outcome.total();
        updated += outcome.updated;
    }
    lines.push(format!("Refreshed {images} images, {updated} dates updated"));
    lines
}

pub fn print_refresh_output(catalog: &Catalog, outcomes: &[RefreshOutcome]) {
    for line in format_refresh_output(catalog, outcomes) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::gallery::PageTree;
    use crate::listing::paginate;
    use crate::test_helpers::*;
    use crate::{index, scan};
    use chrono::{TimeZone, Utc};

    fn scanned(spec: &[&str]) -> Catalog {
        let tree = build_tree(spec);
        scan::scan(tree.path()).unwrap()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(999), "999");
    }

    #[test]
    fn format_index_widens_past_three_digits() {
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn indent_is_four_spaces_per_depth() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "    ");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn album_header_without_sub_albums() {
        assert_eq!(album_header(1, "Landscapes", 5, 0), "001 Landscapes (5 photos)");
    }

    #[test]
    fn album_header_with_sub_albums() {
        assert_eq!(
            album_header(12, "Landscapes", 5, 2),
            "012 Landscapes (5 photos, 2 sub-albums)"
        );
    }

    #[test]
    fn image_line_uses_the_description() {
        let catalog = scanned(&["010-Alps/01-peak.jpg"]);
        let image = find_image(&catalog, find_folder(&catalog, "010-Alps").id, "01-peak.jpg");
        assert_eq!(image_line(1, image), "001 peak");
    }

    #[test]
    fn image_line_falls_back_to_the_filename() {
        let catalog = scanned(&["010-Alps/01.jpg"]);
        let image = find_image(&catalog, find_folder(&catalog, "010-Alps").id, "01.jpg");
        assert_eq!(image_line(3, image), "003 (01.jpg)");
    }

    #[test]
    fn folder_path_label_marks_the_root() {
        assert_eq!(folder_path_label(""), "(root)");
        assert_eq!(folder_path_label("010-Alps"), "010-Alps/");
    }

    // =========================================================================
    // Scan
    // =========================================================================

    #[test]
    fn scan_output_lists_the_full_tree() {
        let catalog = scanned(&[
            "010-Alps/01-peak.jpg",
            "010-Alps/010-Winter/01-lift.jpg",
            "020-Sea/01-wave.jpg",
        ]);
        let lines = format_scan_output(&catalog, false);
        assert_eq!(
            lines,
            vec![
                "Albums".to_string(),
                "001 Alps (1 photos, 1 sub-albums)".to_string(),
                "    Source: 010-Alps/".to_string(),
                "    001 peak".to_string(),
                "        Source: 01-peak.jpg".to_string(),
                "    001 Winter (1 photos)".to_string(),
                "        Source: 010-Alps/010-Winter/".to_string(),
                "        001 lift".to_string(),
                "            Source: 01-lift.jpg".to_string(),
                "002 Sea (1 photos)".to_string(),
                "    Source: 020-Sea/".to_string(),
                "    001 wave".to_string(),
                "        Source: 01-wave.jpg".to_string(),
                String::new(),
                "Config".to_string(),
                "    (defaults)".to_string(),
                String::new(),
                "Indexed 3 albums, 3 images".to_string(),
            ]
        );
    }

    #[test]
    fn scan_output_reports_a_found_config_file() {
        let catalog = scanned(&["010-Alps/01-peak.jpg"]);
        let lines = format_scan_output(&catalog, true);
        assert!(lines.contains(&"    gallery.toml".to_string()));
        assert!(!lines.contains(&"    (defaults)".to_string()));
    }

    #[test]
    fn scan_output_shows_loose_root_images_first() {
        let catalog = scanned(&["cover.jpg", "010-Alps/01-peak.jpg"]);
        let lines = format_scan_output(&catalog, false);
        assert_eq!(lines[1], "001 cover");
        assert_eq!(lines[2], "    Source: cover.jpg");
        assert_eq!(lines[3], "001 Alps (1 photos)");
    }

    // =========================================================================
    // Album listing
    // =========================================================================

    #[test]
    fn album_listing_shows_stats_and_covers() {
        let catalog = scanned(&[
            "010-Alps/01-peak.jpg",
            "010-Alps/02-valley.jpg",
            "020-Sea/01-wave.jpg",
        ]);
        let config = GalleryConfig::default();
        let root = catalog.root_folder().unwrap().id;
        let albums = index::list_albums(&catalog, root, config.sort_key(), config.sort_direction());
        let slice = paginate(albums, config.albums_per_page(), 1).unwrap();

        let lines = format_album_listing("Holidays", &slice);
        assert_eq!(lines[0], "Albums under Holidays (page 1/1, 2 total)");
        assert_eq!(lines[1], "001 Alps (2 photos)");
        assert_eq!(lines[2], "    Source: 010-Alps/");
        assert_eq!(lines[3], "    Cover: 01-peak.jpg");
        assert_eq!(lines[4], "002 Sea (1 photos)");
    }

    #[test]
    fn album_listing_keeps_totals_on_an_empty_page() {
        let catalog = scanned(&["010-Alps/01-peak.jpg", "020-Sea/01-wave.jpg"]);
        let config = GalleryConfig::default();
        let root = catalog.root_folder().unwrap().id;
        let albums = index::list_albums(&catalog, root, config.sort_key(), config.sort_direction());
        let slice = paginate(albums, config.albums_per_page(), 9).unwrap();

        let lines = format_album_listing("Holidays", &slice);
        assert_eq!(lines, vec!["Albums under Holidays (page 9/1, 2 total)".to_string()]);
    }

    #[test]
    fn album_listing_numbers_a_zero_page_number_from_one() {
        let catalog = scanned(&["010-Alps/01-peak.jpg"]);
        let config = GalleryConfig::default();
        let root = catalog.root_folder().unwrap().id;
        let albums = index::list_albums(&catalog, root, config.sort_key(), config.sort_direction());

        // Built by hand: paginate never emits page 0 with items on it
        let slice = PageSlice {
            items: albums,
            total_items: 1,
            total_pages: 1,
            page_number: 0,
            page_size: config.albums_per_page(),
        };

        let lines = format_album_listing("Holidays", &slice);
        assert_eq!(lines[0], "Albums under Holidays (page 0/1, 1 total)");
        assert_eq!(lines[1], "001 Alps (1 photos)");
    }

    // =========================================================================
    // Image listing
    // =========================================================================

    #[test]
    fn image_listing_shows_sources_and_render_plans() {
        let catalog = scanned(&["010-Alps/01-peak.jpg", "010-Alps/02-valley.jpg"]);
        let config = GalleryConfig::default();
        let folder = find_folder(&catalog, "010-Alps").id;
        let images = index::list_images(&catalog, folder, config.sort_key(), config.sort_direction())
            .unwrap();
        let owned: Vec<ImageAsset> = images.into_iter().cloned().collect();
        let slice = paginate(owned, config.images_per_page(), 1).unwrap();

        let lines =
            format_image_listing("Alps", &slice, config.sort_key(), config.sort_direction(), &config);
        assert_eq!(lines[0], "Images in Alps, sorted by filename ascending (page 1/1, 2 total)");
        assert_eq!(lines[1], "001 peak");
        assert_eq!(lines[2], "    Source: 010-Alps/01-peak.jpg");
        // Undecodable fixture files carry no dimensions and no EXIF date
        assert_eq!(
            lines[3],
            "    Render: thumbnail 150x115 (dimensions unknown), preview 800x800"
        );
        assert_eq!(lines[4], "002 valley");
    }

    #[test]
    fn image_listing_includes_taken_line_when_dated() {
        let mut catalog = scanned(&["010-Alps/01-peak.jpg"]);
        let folder = find_folder(&catalog, "010-Alps").id;
        let image_id = find_image(&catalog, folder, "01-peak.jpg").id;
        let taken = Utc.with_ymd_and_hms(2023, 8, 14, 17, 30, 5).unwrap();
        assert!(catalog.set_exif_date(image_id, Some(taken)));

        let config = GalleryConfig::default();
        let images = index::list_images(&catalog, folder, config.sort_key(), config.sort_direction())
            .unwrap();
        let owned: Vec<ImageAsset> = images.into_iter().cloned().collect();
        let slice = paginate(owned, config.images_per_page(), 1).unwrap();

        let lines =
            format_image_listing("Alps", &slice, config.sort_key(), config.sort_direction(), &config);
        assert_eq!(lines[3], "    Taken: 2023-08-14 17:30:05");
    }

    #[test]
    fn image_listing_positions_continue_across_pages() {
        let catalog = scanned(&["010-Alps/01-peak.jpg", "010-Alps/02-valley.jpg"]);
        let config = GalleryConfig::default();
        let folder = find_folder(&catalog, "010-Alps").id;
        let images = index::list_images(&catalog, folder, config.sort_key(), config.sort_direction())
            .unwrap();
        let owned: Vec<ImageAsset> = images.into_iter().cloned().collect();
        let slice = paginate(owned, 1, 2).unwrap();

        let lines =
            format_image_listing("Alps", &slice, config.sort_key(), config.sort_direction(), &config);
        assert_eq!(lines[0], "Images in Alps, sorted by filename ascending (page 2/2, 2 total)");
        assert_eq!(lines[1], "002 valley");
    }

    // =========================================================================
    // Browse
    // =========================================================================

    #[test]
    fn browse_output_composes_breadcrumbs_albums_and_images() {
        let catalog = scanned(&[
            "010-Alps/01-peak.jpg",
            "010-Alps/010-Winter/01-lift.jpg",
        ]);
        let config = GalleryConfig::default();
        let tree = PageTree::mirror(&catalog, &config);
        let page = tree
            .pages()
            .iter()
            .find(|p| p.slug == "Alps")
            .cloned()
            .unwrap();

        let crumbs = tree.breadcrumbs(page.id, &config);
        let albums = tree.albums_page(Some(page.id), &catalog, &config, 1).unwrap();
        let images = tree.images(page.id, &catalog, &config, 1).unwrap().unwrap();

        let lines =
            format_browse_output(&crumbs, &albums, Some(&images), page.effective_sort(), &config);
        assert_eq!(lines[0], "Breadcrumbs: Alps");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Albums (page 1/1, 1 total)");
        assert_eq!(lines[3], "001 Winter (1 photos)");
        assert_eq!(lines[4], "    URL: /Alps/Winter");
        assert_eq!(lines[5], "    Cover: 01-lift.jpg");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Images, sorted by filename ascending (page 1/1, 1 total)");
        assert_eq!(lines[8], "001 peak");
    }

    #[test]
    fn browse_output_omits_images_for_container_pages() {
        let catalog = scanned(&["010-Alps/01-peak.jpg"]);
        let config = GalleryConfig::default();
        let tree = PageTree::mirror(&catalog, &config);

        let albums = tree.albums_page(None, &catalog, &config, 1).unwrap();
        let lines = format_browse_output(
            &[],
            &albums,
            None,
            (config.sort_key(), config.sort_direction()),
            &config,
        );
        assert_eq!(lines[0], "Albums (page 1/1, 1 total)");
        assert!(!lines.iter().any(|l| l.starts_with("Images")));
        assert!(!lines.iter().any(|l| l.starts_with("Breadcrumbs")));
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    #[test]
    fn refresh_output_labels_folders_and_sums_totals() {
        let catalog = scanned(&["010-Alps/01-peak.jpg", "010-Alps/02-valley.jpg"]);
        let alps = find_folder(&catalog, "010-Alps").id;
        let outcomes = vec![
            RefreshOutcome {
                folder: catalog.root_folder().unwrap().id,
                updated: 0,
                unchanged: 0,
                failed: 0,
            },
            RefreshOutcome {
                folder: alps,
                updated: 2,
                unchanged: 0,
                failed: 0,
            },
        ];

        let lines = format_refresh_output(&catalog, &outcomes);
        assert_eq!(lines[0], "(root): 0 updated, 0 unchanged (0 total)");
        assert_eq!(lines[1], "010-Alps/: 2 updated, 0 unchanged (2 total)");
        assert_eq!(lines[2], "Refreshed 2 images, 2 dates updated");
    }

    #[test]
    fn refresh_output_handles_unknown_folders() {
        let catalog = scanned(&["010-Alps/01-peak.jpg"]);
        let outcomes = vec![RefreshOutcome {
            folder: FolderId(999),
            updated: 0,
            unchanged: 0,
            failed: 0,
        }];

        let lines = format_refresh_output(&catalog, &outcomes);
        assert_eq!(lines[0], "folder 999: 0 updated, 0 unchanged (0 total)");
    }
}
