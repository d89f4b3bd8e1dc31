/// Rows per page in both the reports table and the audit table.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number, already clamped into range.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    /// 0-based index of the first item on this page within the collection.
    pub fn offset(&self) -> usize {
        (self.number - 1) * self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ceil(total_items / page_size)`; zero items means zero pages.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Slice out page `page` (1-based). Out-of-range requests clamp to the
/// first or last page instead of failing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = page_count(items.len(), page_size);
    let number = page.clamp(1, total_pages.max(1));

    let start = ((number - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
        page_size,
    }
}

/// An entry in the page selector under a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(usize),
    Ellipsis,
}

/// Page numbers to offer around `current`, collapsing the rest into
/// ellipses. Always shows the first and last page.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageMarker> {
    let max_visible = max_visible.max(3);
    if total <= max_visible {
        return (1..=total).map(PageMarker::Number).collect();
    }

    let current = current.clamp(1, total);
    let mut pages = vec![PageMarker::Number(1)];

    if current > 3 {
        pages.push(PageMarker::Ellipsis);
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 2 {
        end = 3;
    }
    if current >= total - 1 {
        start = total - 2;
    }

    for n in start..=end {
        if !pages.contains(&PageMarker::Number(n)) {
            pages.push(PageMarker::Number(n));
        }
    }

    if current + 2 < total {
        pages.push(PageMarker::Ellipsis);
    }
    if !pages.contains(&PageMarker::Number(total)) {
        pages.push(PageMarker::Number(total));
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Number};
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 8), 0);
        assert_eq!(page_count(1, 8), 1);
        assert_eq!(page_count(8, 8), 1);
        assert_eq!(page_count(9, 8), 2);
        assert_eq!(page_count(17, 8), 3);
    }

    #[test]
    fn pages_concatenate_to_collection() {
        let items: Vec<u32> = (0..21).collect();
        let total = page_count(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(total, 3);

        let rebuilt: Vec<u32> = (1..=total)
            .flat_map(|p| paginate(&items, p, DEFAULT_PAGE_SIZE).items.to_vec())
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..21).collect();
        let page = paginate(&items, 3, 8);
        assert_eq!(page.items, &[16, 17, 18, 19, 20]);
        assert_eq!(page.offset(), 16);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (0..10).collect();

        let high = paginate(&items, 99, 8);
        assert_eq!(high.number, 2);
        assert_eq!(high.items, &[8, 9]);

        let low = paginate(&items, 0, 8);
        assert_eq!(low.number, 1);
        assert_eq!(low.items.len(), 8);
    }

    #[test]
    fn empty_collection_yields_empty_first_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 3, 8);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn window_lists_all_when_few_pages() {
        assert_eq!(page_window(2, 4, 5), vec![Number(1), Number(2), Number(3), Number(4)]);
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn window_near_start() {
        assert_eq!(
            page_window(1, 10, 5),
            vec![Number(1), Number(2), Number(3), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn window_in_middle() {
        assert_eq!(
            page_window(5, 10, 5),
            vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn window_near_end() {
        assert_eq!(
            page_window(10, 10, 5),
            vec![Number(1), Ellipsis, Number(8), Number(9), Number(10)]
        );
        assert_eq!(
            page_window(9, 10, 5),
            vec![Number(1), Ellipsis, Number(8), Number(9), Number(10)]
        );
    }
}
