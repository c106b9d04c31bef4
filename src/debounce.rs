//! Trailing-edge debounce
//!
//! Each `push` starts a new generation and returns its ticket. The caller waits
//! out the quiet period (a `gloo_timers` timeout in the app) and then calls
//! `settle` with the ticket; only the most recent ticket yields the value.
//! Older timers find their generation superseded and do nothing, which is the
//! same as resetting the timer on every keystroke.

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn push(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    pub fn settle(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_ticket_settles() {
        let mut debouncer = Debouncer::default();
        let tickets: Vec<u64> = ["t", "tr", "tra"].into_iter().map(|v| debouncer.push(v)).collect();

        let settled: Vec<_> = tickets.iter().filter_map(|t| debouncer.settle(*t)).collect();
        assert_eq!(settled, vec!["tra"]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_settle_is_one_shot() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.push(1);
        assert_eq!(debouncer.settle(ticket), Some(1));
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[test]
    fn test_push_after_quiet_period_settles_again() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.push("a");
        assert_eq!(debouncer.settle(first), Some("a"));

        let second = debouncer.push("ab");
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), Some("ab"));
    }
}
