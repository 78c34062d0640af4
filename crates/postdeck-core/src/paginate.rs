//! Fixed-size page windows over a collection
//!
//! Pages are 1-based. [`paginate`] never clamps the requested page; callers
//! that own page state clamp with [`clamp_page`] first.

use std::num::NonZeroUsize;

/// Posts per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// One page of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    /// Items on the requested page
    pub visible: &'a [T],
    /// Number of pages in the whole collection; 0 when it is empty
    pub total_pages: usize,
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Clamp `page` into `[1, max(1, total_pages)]`.
///
/// An empty collection still has a page 1 to stand on.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Window `items` to `page`.
///
/// Page 0 and pages past the end yield an empty window.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> PageWindow<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let size = page_size.get();

    let visible = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(size).min(items.len());
            let end = start.saturating_add(size).min(items.len());
            &items[start..end]
        }
        None => &items[..0],
    };

    PageWindow {
        visible,
        total_pages,
    }
}
