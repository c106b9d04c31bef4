//! Pagination
//!
//! Page arithmetic over `[1, total]`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    First,
    Prev,
    Next,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current: 1, total: 1 }
    }
}

impl Pagination {
    /// A reported total of 0 still means one (empty) page
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current: current.max(1),
            total: total.max(1),
        }
    }

    pub fn can_prev(&self) -> bool {
        self.current > 1
    }

    pub fn can_next(&self) -> bool {
        self.current < self.total
    }

    /// Page to move to, or `None` when the move would not change the page
    pub fn target(&self, mv: PageMove) -> Option<u32> {
        let target = match mv {
            PageMove::First => 1,
            PageMove::Prev if self.can_prev() => self.current - 1,
            PageMove::Next if self.can_next() => self.current + 1,
            PageMove::Prev | PageMove::Next => return None,
            PageMove::Last => self.total,
        };
        (target != self.current).then_some(target)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_single_page() {
        let p = Pagination::default();
        assert_eq!(p.label(), "Page 1 of 1");
        assert!(!p.can_prev());
        assert!(!p.can_next());
        assert_eq!(p.target(PageMove::Next), None);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let first = Pagination::new(1, 5);
        assert_eq!(first.target(PageMove::Prev), None);
        assert_eq!(first.target(PageMove::First), None);
        assert_eq!(first.target(PageMove::Next), Some(2));
        assert_eq!(first.target(PageMove::Last), Some(5));

        let last = Pagination::new(5, 5);
        assert_eq!(last.target(PageMove::Next), None);
        assert_eq!(last.target(PageMove::Last), None);
        assert_eq!(last.target(PageMove::Prev), Some(4));
        assert_eq!(last.target(PageMove::First), Some(1));
    }

    #[test]
    fn test_zero_total_is_one_page() {
        let p = Pagination::new(1, 0);
        assert_eq!(p.label(), "Page 1 of 1");
        assert_eq!(p.target(PageMove::Last), None);
    }

    #[test]
    fn test_current_past_total_after_shrink() {
        // Results shrank under a new search; page is not auto-reset
        let p = Pagination::new(4, 2);
        assert!(!p.can_next());
        assert_eq!(p.target(PageMove::Next), None);
        assert_eq!(p.target(PageMove::Last), Some(2));
        assert_eq!(p.target(PageMove::Prev), Some(3));
    }
}
