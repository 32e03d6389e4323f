use crate::model::PageId;

/// Per-session page visit counts.
///
/// Pages are kept in the order they were first visited. The total is always
/// derived from the per-page counts, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionViewState {
    visits: Vec<(PageId, u32)>,
}

impl SessionViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one visit to `page`.
    ///
    /// Not idempotent: call once per navigation event, not per re-render.
    pub fn record_visit(&mut self, page: PageId) {
        match self.visits.iter_mut().find(|(visited, _)| *visited == page) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => self.visits.push((page, 1)),
        }
    }

    /// Visits recorded for `page`; zero when it was never visited.
    #[must_use]
    pub fn count(&self, page: PageId) -> u32 {
        self.visits
            .iter()
            .find(|(visited, _)| *visited == page)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum of all page counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.visits.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// Visited pages with their counts, in first-visit order.
    #[must_use]
    pub fn counts(&self) -> PageCounts<'_> {
        PageCounts {
            inner: self.visits.iter(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

/// Iterator returned by [`SessionViewState::counts`].
///
/// Reading has no side effects; call `counts()` again (or clone the iterator)
/// to walk the sequence another time.
#[derive(Clone, Debug)]
pub struct PageCounts<'a> {
    inner: std::slice::Iter<'a, (PageId, u32)>,
}

impl Iterator for PageCounts<'_> {
    type Item = (PageId, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PageCounts<'_> {}

impl<'a> IntoIterator for &'a SessionViewState {
    type Item = (PageId, u32);
    type IntoIter = PageCounts<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts()
    }
}
