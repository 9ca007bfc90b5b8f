//! Gallery pages: the browsable tree over scanned folders.
//!
//! A [`GalleryPage`] is one node of the presented site. It binds *at most
//! one* album folder; the page tree usually mirrors the folder tree
//! ([`PageTree::mirror`]) but stays independently editable, so the two can
//! drift apart. Every read therefore re-resolves the binding against the
//! catalog at that moment and degrades to empty output (zero-stat album
//! rows, the `Ok(None)` image sentinel) instead of failing the render.
//!
//! ## Deferred metadata refresh
//!
//! A page sorted by EXIF date needs every stored EXIF date under its folder
//! to be current. Extracting those dates means opening every file, far too
//! slow to run inside a page save, so [`PageTree::write_page`] only queues
//! the bound folder. [`PageTree::run_pending_refreshes`] does the file
//! reads later (the `refresh` command is the usual runner) and per-file
//! failures stay inside the reported outcomes. A save can therefore never
//! block on, or be failed by, metadata extraction.

use crate::catalog::{Catalog, FolderId, ImageAsset};
use crate::config::GalleryConfig;
use crate::imaging::{self, CropPlan};
use crate::index;
use crate::listing::{self, InvalidPageSize, PageSlice, SortKey, SortOrder};
use crate::metadata::{self, RefreshOutcome};
use crate::naming;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a [`GalleryPage`] within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page of the gallery site.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPage {
    pub id: PageId,
    /// Parent page; `None` for pages at the site root.
    pub parent: Option<PageId>,
    pub title: String,
    /// URL segment under the parent page.
    pub slug: String,
    /// Folder whose images this page shows. Pages may stay unbound and
    /// act as pure grouping nodes.
    pub album_folder: Option<FolderId>,
    /// Sort key code, same codes as `listing.sort_option` in config.
    pub sort_option: u32,
    /// Sort direction code, same codes as `listing.sort_order`.
    pub sort_order: u32,
}

impl GalleryPage {
    /// Decoded sort for this page's listings. Unknown codes fall back the
    /// same way the config codes do.
    pub fn effective_sort(&self) -> (SortKey, SortOrder) {
        (
            SortKey::from_code(self.sort_option),
            SortOrder::from_code(self.sort_order),
        )
    }
}

/// Read-only aggregate of one child album, ready for templating.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumView {
    pub page: PageId,
    pub title: String,
    pub url: String,
    /// Direct images of the child's bound folder; 0 when unbound.
    pub image_count: usize,
    /// Immediate sub-albums of the child's bound folder; 0 when unbound.
    pub sub_album_count: usize,
    /// Cover under the child's own effective sort; `None` when unbound or
    /// the album has no images.
    pub cover: Option<ImageAsset>,
}

/// The editable tree of gallery pages, plus the pending-refresh queue fed
/// by page writes.
#[derive(Debug, Clone, Default)]
pub struct PageTree {
    pages: Vec<GalleryPage>,
    pending_refreshes: Vec<FolderId>,
}

impl PageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scaffold one page per album folder, mirroring the folder tree.
    ///
    /// The root folder itself gets no page; its children become the root
    /// pages. Every page starts bound to its folder, titled like it, with
    /// the config's sort codes. The result is a starting point; pages can
    /// be re-bound, re-parented or removed afterwards without touching the
    /// catalog.
    pub fn mirror(catalog: &Catalog, config: &GalleryConfig) -> Self {
        let mut tree = PageTree::new();
        let mut page_of: HashMap<FolderId, PageId> = HashMap::new();

        // Parent folders precede their children in catalog order
        for folder in &catalog.folders {
            let Some(folder_parent) = folder.parent else {
                continue;
            };
            let id = PageId(tree.pages.len() as u32);
            page_of.insert(folder.id, id);
            tree.pages.push(GalleryPage {
                id,
                parent: page_of.get(&folder_parent).copied(),
                title: folder.title.clone(),
                slug: page_slug(&folder.name, folder.id),
                album_folder: Some(folder.id),
                sort_option: config.listing.sort_option,
                sort_order: config.listing.sort_order,
            });
        }
        tree
    }

    pub fn pages(&self) -> &[GalleryPage] {
        &self.pages
    }

    pub fn page(&self, id: PageId) -> Option<&GalleryPage> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Pages at the site root, tree order.
    pub fn roots(&self) -> Vec<&GalleryPage> {
        self.pages.iter().filter(|p| p.parent.is_none()).collect()
    }

    /// Child pages of `id`, tree order.
    pub fn children(&self, id: PageId) -> Vec<&GalleryPage> {
        self.pages.iter().filter(|p| p.parent == Some(id)).collect()
    }

    /// Lowest id not yet in use.
    pub fn next_id(&self) -> PageId {
        PageId(self.pages.iter().map(|p| p.id.0 + 1).max().unwrap_or(0))
    }

    /// Insert or replace a page, matched by id.
    ///
    /// This is the save path: when the written page sorts by EXIF date and
    /// has a bound folder, the folder is queued for a metadata refresh. The
    /// queue is drained only explicitly; a save never waits on file reads
    /// and never observes a refresh failure.
    pub fn write_page(&mut self, page: GalleryPage) {
        let needs_refresh = matches!(page.effective_sort(), (SortKey::ExifDate, _));
        let folder = page.album_folder;

        match self.pages.iter_mut().find(|p| p.id == page.id) {
            Some(existing) => *existing = page,
            None => self.pages.push(page),
        }

        if needs_refresh
            && let Some(folder) = folder
            && !self.pending_refreshes.contains(&folder)
        {
            self.pending_refreshes.push(folder);
        }
    }

    /// Re-bind a page to a different folder, or unbind it with `None`.
    /// Returns false when the page does not exist.
    pub fn set_album_folder(&mut self, id: PageId, folder: Option<FolderId>) -> bool {
        let Some(page) = self.page(id) else {
            return false;
        };
        let mut page = page.clone();
        page.album_folder = folder;
        self.write_page(page);
        true
    }

    /// Move a page under a new parent, or to the site root with `None`.
    ///
    /// Refused (returns false) when the page or the new parent does not
    /// exist, or when the new parent sits inside the page's own subtree,
    /// which would detach the subtree into a loop.
    pub fn set_parent(&mut self, id: PageId, parent: Option<PageId>) -> bool {
        if self.page(id).is_none() {
            return false;
        }
        if let Some(new_parent) = parent
            && (self.page(new_parent).is_none() || self.subtree_ids(id).contains(&new_parent))
        {
            return false;
        }
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
            page.parent = parent;
        }
        true
    }

    /// Remove a page and its whole subtree. Returns how many pages were
    /// removed; 0 when the id is unknown.
    pub fn remove(&mut self, id: PageId) -> usize {
        if self.page(id).is_none() {
            return 0;
        }
        let doomed = self.subtree_ids(id);
        let before = self.pages.len();
        self.pages.retain(|p| !doomed.contains(&p.id));
        before - self.pages.len()
    }

    /// A page's id plus the ids of all its descendants.
    fn subtree_ids(&self, id: PageId) -> Vec<PageId> {
        let mut ids = vec![id];
        let mut next = 0;
        while next < ids.len() {
            let current = ids[next];
            ids.extend(self.children(current).iter().map(|p| p.id));
            next += 1;
        }
        ids
    }

    /// The page and its ancestors, leaf first. Stops rather than looping
    /// if `write_page` was handed a parent cycle.
    fn chain(&self, id: PageId) -> Vec<&GalleryPage> {
        let mut chain = Vec::new();
        let mut current = self.page(id);
        while let Some(page) = current
            && chain.len() <= self.pages.len()
        {
            chain.push(page);
            current = page.parent.and_then(|p| self.page(p));
        }
        chain
    }

    /// `/`-joined slug path from the site root, e.g. `/Alps/Winter`.
    /// `None` for an unknown id.
    pub fn url(&self, id: PageId) -> Option<String> {
        let chain = self.chain(id);
        if chain.is_empty() {
            return None;
        }
        let segments: Vec<&str> = chain.iter().rev().map(|p| p.slug.as_str()).collect();
        Some(format!("/{}", segments.join("/")))
    }

    /// Resolve a `/`-separated slug path like `Alps/Winter` (leading and
    /// trailing slashes are fine). Among siblings sharing a slug the first
    /// in tree order wins.
    pub fn page_by_url(&self, path: &str) -> Option<&GalleryPage> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let first = segments.next()?;
        let mut current = self
            .pages
            .iter()
            .find(|p| p.parent.is_none() && p.slug == first)?;
        for segment in segments {
            current = self
                .children(current.id)
                .into_iter()
                .find(|p| p.slug == segment)?;
        }
        Some(current)
    }

    /// Ancestor trail as `(title, url)` pairs, site root first, the page
    /// itself last. Empty when breadcrumbs are disabled in config.
    pub fn breadcrumbs(&self, id: PageId, config: &GalleryConfig) -> Vec<(String, String)> {
        if !config.show_breadcrumbs() {
            return Vec::new();
        }
        self.chain(id)
            .iter()
            .rev()
            .map(|page| (page.title.clone(), self.url(page.id).unwrap_or_default()))
            .collect()
    }

    /// One [`AlbumView`] per child page, for an album overview listing.
    ///
    /// Each view draws its stats from the *child's* own bound folder under
    /// the child's own effective sort, never from the parent's folder. A
    /// child without a binding, or whose folder no longer resolves, still
    /// gets a view, just with zero counts and no cover. An unknown
    /// `page_id` has no children, so the listing is empty.
    pub fn albums(&self, page_id: PageId, catalog: &Catalog) -> Vec<AlbumView> {
        self.children(page_id)
            .into_iter()
            .map(|child| self.album_view(child, catalog))
            .collect()
    }

    /// Album views for the root pages, for the gallery front page.
    pub fn root_albums(&self, catalog: &Catalog) -> Vec<AlbumView> {
        self.roots()
            .into_iter()
            .map(|child| self.album_view(child, catalog))
            .collect()
    }

    /// Paginated album overview under a page (`None` page id meaning the
    /// site root), sized by `listing.albums_per_page`.
    pub fn albums_page(
        &self,
        page_id: Option<PageId>,
        catalog: &Catalog,
        config: &GalleryConfig,
        page_number: usize,
    ) -> Result<PageSlice<AlbumView>, InvalidPageSize> {
        let views = match page_id {
            Some(id) => self.albums(id, catalog),
            None => self.root_albums(catalog),
        };
        listing::paginate(views, config.albums_per_page(), page_number)
    }

    fn album_view(&self, page: &GalleryPage, catalog: &Catalog) -> AlbumView {
        let (key, order) = page.effective_sort();
        let stats = page
            .album_folder
            .and_then(|folder| index::album_stats(catalog, folder, key, order));
        let (image_count, sub_album_count, cover) = match stats {
            Some(stats) => (stats.image_count, stats.sub_album_count, stats.cover),
            None => (0, 0, None),
        };

        AlbumView {
            page: page.id,
            title: page.title.clone(),
            url: self.url(page.id).unwrap_or_default(),
            image_count,
            sub_album_count,
            cover,
        }
    }

    /// The sorted, paginated image listing for a page's own bound folder,
    /// sized by `listing.images_per_page`.
    ///
    /// `Ok(None)` is the no-result sentinel: the page is unknown, has no
    /// bound folder, or the binding no longer resolves. Grouping pages
    /// render their child albums instead of images, so this is a normal
    /// outcome, not an error.
    pub fn images(
        &self,
        page_id: PageId,
        catalog: &Catalog,
        config: &GalleryConfig,
        page_number: usize,
    ) -> Result<Option<PageSlice<ImageAsset>>, InvalidPageSize> {
        let Some(page) = self.page(page_id) else {
            return Ok(None);
        };
        let Some(folder) = page.album_folder else {
            return Ok(None);
        };
        let (key, order) = page.effective_sort();
        let Ok(images) = index::list_images(catalog, folder, key, order) else {
            return Ok(None);
        };

        let owned: Vec<ImageAsset> = images.into_iter().cloned().collect();
        let slice = listing::paginate(owned, config.images_per_page(), page_number)?;
        Ok(Some(slice))
    }

    /// Folders currently queued for a metadata refresh, oldest first.
    pub fn pending_refreshes(&self) -> &[FolderId] {
        &self.pending_refreshes
    }

    /// Drain the refresh queue without running anything.
    pub fn take_pending_refreshes(&mut self) -> Vec<FolderId> {
        std::mem::take(&mut self.pending_refreshes)
    }

    /// Run the queued EXIF-date refreshes against the catalog.
    ///
    /// Each drained folder gets one [`metadata::write_exif_dates`] pass.
    /// Outcomes come back for whoever wants to log them; per-file failures
    /// are already folded in and a folder that no longer resolves is an
    /// all-zero outcome, so nothing here can fail.
    pub fn run_pending_refreshes(&mut self, catalog: &mut Catalog) -> Vec<RefreshOutcome> {
        self.take_pending_refreshes()
            .into_iter()
            .map(|folder| metadata::write_exif_dates(catalog, folder))
            .collect()
    }
}

/// URL segment for a mirrored folder: the name with ordering prefix
/// stripped, sanitized. Folders whose names sanitize away entirely get a
/// stable id-based segment.
fn page_slug(folder_name: &str, folder: FolderId) -> String {
    let parsed = naming::parse_entry_name(folder_name);
    let base = if parsed.name.is_empty() {
        folder_name
    } else {
        parsed.name.as_str()
    };
    let slug = naming::sanitize_slug(base);
    if slug.is_empty() {
        format!("album-{folder}")
    } else {
        slug
    }
}

/// Per-image render work for a listing page: what the thumbnail and
/// preview generators need to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Root-relative source path.
    pub source_path: String,
    /// Fixed thumbnail box from config.
    pub thumbnail: (u32, u32),
    /// Resize-then-crop plan filling the thumbnail box, when the source
    /// dimensions are known.
    pub thumbnail_crop: Option<CropPlan>,
    /// Aspect-preserving preview size. Unknown source dimensions request
    /// the full bounding box.
    pub preview: (u32, u32),
}

/// Compute render requests for a page of listed images.
pub fn render_requests(images: &[ImageAsset], config: &GalleryConfig) -> Vec<RenderRequest> {
    let thumbnail = config.thumbnail_size();
    let max_edge = config.preview_max_size();
    images
        .iter()
        .map(|image| RenderRequest {
            source_path: image.source_path.clone(),
            thumbnail,
            thumbnail_crop: image
                .dimensions
                .map(|dims| imaging::thumbnail_crop(dims, thumbnail)),
            preview: match image.dimensions {
                Some(dims) => imaging::fit_within(dims, max_edge),
                None => (max_edge, max_edge),
            },
        })
        .collect()
}
