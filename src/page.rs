// src/page.rs
//
// Paginator: slice an ordered collection into 1-based pages.

/// Metadata for the consumer alongside the visible slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    /// Count over the whole (filtered) collection, not the slice.
    pub total: usize,
    pub pages: usize,
}

/// ceil(count / page_size); zero pages for an empty collection.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Elements at offset `(page-1)·size` through `(page-1)·size + size`.
/// A page past the end is simply empty.
pub fn slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + size).min(items.len());
    &items[start..end]
}

/* ---------------- Tests ---------------- */
