//! Stale-response protection.
//!
//! Responses commit to a cache only if they are the latest issued request of
//! their operation kind. Without this, a slow `get_all` can overwrite the
//! result of a faster one issued later (double-click, quick navigation), and
//! a response arriving after unmount would still mutate state.

use std::collections::HashMap;

/// Handle for one issued request. Hold it across the await and check it
/// before committing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    op: &'static str,
    serial: u64,
}

/// Monotonically increasing serials per operation kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestSequencer {
    latest: HashMap<&'static str, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `op`, superseding any outstanding one.
    pub fn begin(&mut self, op: &'static str) -> Ticket {
        let serial = self.latest.entry(op).or_insert(0);
        *serial += 1;
        Ticket { op, serial: *serial }
    }

    /// Whether `ticket` is still the latest issued for its operation kind.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(ticket.op).copied() == Some(ticket.serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let mut seq = RequestSequencer::new();
        let first = seq.begin("orders.get_all");
        let second = seq.begin("orders.get_all");
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
    }

    #[test]
    fn operation_kinds_are_independent() {
        let mut seq = RequestSequencer::new();
        let list = seq.begin("orders.get_all");
        let item = seq.begin("orders.get_by_id");
        assert!(seq.is_current(&list));
        assert!(seq.is_current(&item));
    }

    #[test]
    fn ticket_survives_unrelated_traffic() {
        let mut seq = RequestSequencer::new();
        let create = seq.begin("orders.create");
        for _ in 0..5 {
            seq.begin("orders.get_all");
        }
        assert!(seq.is_current(&create));
    }
}
