//! Pure page math: how a list of `len` items splits into fixed-size pages.

use std::ops::Range;

/// Number of pages needed for `item_count` items, `per_page` at a time.
///
/// Zero items yield zero pages.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Index ranges of every page, in order.
///
/// `pages[i] = i*per_page .. min(i*per_page + per_page, item_count)`; every
/// range except possibly the last spans exactly `per_page` items.
pub fn split_into_pages(item_count: usize, per_page: usize) -> Vec<Range<usize>> {
    let per_page = per_page.max(1);
    (0..total_pages(item_count, per_page))
        .map(|page| {
            let start = page * per_page;
            start..(start + per_page).min(item_count)
        })
        .collect()
}
