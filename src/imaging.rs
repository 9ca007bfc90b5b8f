//! Pure render-size calculations.
//!
//! Everything here is arithmetic over `(width, height)` pairs, testable
//! without I/O or image data. The actual pixel work belongs to whatever
//! thumbnail/preview generator consumes the computed sizes.

/// Resize-then-crop plan that fills a fixed thumbnail box.
///
/// Resize the source to `resize_width` × `resize_height` (covers the box,
/// one dimension matching it exactly), then cut the box out at the centered
/// offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropPlan {
    pub resize_width: u32,
    pub resize_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Plan the cover-resize and centered crop for a fixed thumbnail box.
///
/// # Examples
/// ```
/// # use folder_gallery::imaging::thumbnail_crop;
/// // 1600x1200 source into the stock 150x115 box: height matches after
/// // resize, the excess width is trimmed evenly
/// let plan = thumbnail_crop((1600, 1200), (150, 115));
/// assert_eq!((plan.resize_width, plan.resize_height), (153, 115));
/// assert_eq!((plan.offset_x, plan.offset_y), (1, 0));
/// ```
pub fn thumbnail_crop(source: (u32, u32), target: (u32, u32)) -> CropPlan {
    let (resize_width, resize_height) = fill_dimensions(source, target);
    CropPlan {
        resize_width,
        resize_height,
        offset_x: (resize_width - target.0) / 2,
        offset_y: (resize_height - target.1) / 2,
    }
}

/// Calculate dimensions that completely cover a target box while keeping
/// the source aspect ratio. One dimension matches the box exactly, the
/// other meets or exceeds it.
pub fn fill_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: height matches, width exceeds
        let h = tgt_h;
        let w = (h as f64 * src_aspect).round() as u32;
        (w, h)
    } else {
        // Source is taller: width matches, height exceeds
        let w = tgt_w;
        let h = (w as f64 / src_aspect).round() as u32;
        (w, h)
    }
}

/// Bound an image to a square `max_edge` box, keeping its aspect ratio.
/// Images already inside the box pass through unchanged.
///
/// # Examples
/// ```
/// # use folder_gallery::imaging::fit_within;
/// assert_eq!(fit_within((1600, 1200), 800), (800, 600));
/// assert_eq!(fit_within((640, 480), 800), (640, 480));
/// ```
pub fn fit_within(source: (u32, u32), max_edge: u32) -> (u32, u32) {
    let (w, h) = source;
    if w.max(h) <= max_edge {
        return (w, h);
    }

    if w >= h {
        // Landscape or square: width is the longer edge
        let ratio = max_edge as f64 / w as f64;
        (max_edge, (h as f64 * ratio).round() as u32)
    } else {
        // Portrait: height is the longer edge
        let ratio = max_edge as f64 / h as f64;
        ((w as f64 * ratio).round() as u32, max_edge)
    }
}
