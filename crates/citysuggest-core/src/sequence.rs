// crates/citysuggest-core/src/sequence.rs

/// Identifies one issued request. Tickets from the same sequencer are
/// strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// "Last request wins" arbitration for results that may complete out of
/// order.
///
/// A result is accepted only if its ticket is newer than the last one
/// accepted. Once a newer result has been applied, anything older that
/// arrives later is dropped.
#[derive(Debug, Clone, Default)]
pub struct LatestWins {
    issued: u64,
    applied: u64,
}

impl LatestWins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next ticket.
    pub fn issue(&mut self) -> QueryTicket {
        self.issued += 1;
        QueryTicket(self.issued)
    }

    /// Record `ticket` as applied if it beats the last applied one.
    ///
    /// ```rust
    /// use citysuggest_core::LatestWins;
    ///
    /// let mut seq = LatestWins::new();
    /// let first = seq.issue();
    /// let second = seq.issue();
    /// assert!(seq.accept(second));
    /// assert!(!seq.accept(first));
    /// ```
    pub fn accept(&mut self, ticket: QueryTicket) -> bool {
        if ticket.0 > self.applied && ticket.0 <= self.issued {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }

    /// Newest ticket handed out so far.
    pub fn latest(&self) -> Option<QueryTicket> {
        (self.issued > 0).then_some(QueryTicket(self.issued))
    }

    /// Whether `ticket` is the newest one issued.
    pub fn is_latest(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut seq = LatestWins::new();
        assert_eq!(seq.latest(), None);
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert_eq!(seq.latest(), Some(b));
        assert!(seq.is_latest(b));
        assert!(!seq.is_latest(a));
    }

    #[test]
    fn in_order_completions_all_apply() {
        let mut seq = LatestWins::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(seq.accept(a));
        assert!(seq.accept(b));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut seq = LatestWins::new();
        let a = seq.issue();
        let b = seq.issue();
        let c = seq.issue();
        assert!(seq.accept(c));
        assert!(!seq.accept(b));
        assert!(!seq.accept(a));
    }

    #[test]
    fn duplicate_and_foreign_tickets_are_dropped() {
        let mut seq = LatestWins::new();
        let a = seq.issue();
        assert!(seq.accept(a));
        assert!(!seq.accept(a));

        let mut other = LatestWins::new();
        other.issue();
        let foreign = other.issue();
        assert!(!seq.accept(foreign));
    }
}
