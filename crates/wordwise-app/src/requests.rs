use std::sync::atomic::{AtomicU64, Ordering};

use wordwise_types::Operation;

/// Identifies one outstanding request of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    operation: Operation,
    id: u64,
}

/// Hands out increasing tokens per operation. Only the newest token of an
/// operation may publish its response; older ones are stale.
#[derive(Debug, Default)]
pub struct RequestTracker {
    lookup: AtomicU64,
    improve: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, operation: Operation) -> &AtomicU64 {
        match operation {
            Operation::Lookup => &self.lookup,
            Operation::Improve => &self.improve,
        }
    }

    pub fn begin(&self, operation: Operation) -> RequestToken {
        let id = self.counter(operation).fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken { operation, id }
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.counter(token.operation).load(Ordering::SeqCst) == token.id
    }
}
