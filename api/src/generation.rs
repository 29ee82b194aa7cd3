use std::{cell::Cell, rc::Rc};

// monotonic request counter owned by a single view
//
// every request takes a ticket before it goes out, and a response may only be applied while
// its ticket is still the newest one.  clones share the same counter, which is what lets an
// event handler and the task it spawns agree on which request is current.  Rc is enough since
// the browser only ever runs this on one thread.
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Rc<Cell<u64>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestGeneration {
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

impl PartialEq for RequestGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latest, &other.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let generation = RequestGeneration::default();

        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_clones_share_counter() {
        let generation = RequestGeneration::default();
        let handle = generation.clone();

        let ticket = generation.issue();
        handle.issue();

        assert!(!generation.is_current(ticket));
        assert_eq!(generation, handle);
        assert_ne!(generation, RequestGeneration::default());
    }
}
