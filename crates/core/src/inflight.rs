//! Per-workflow in-flight tokens
//!
//! Every call of a workflow takes a new [`CallTicket`]. Starting a call
//! invalidates the tickets of earlier calls of the same workflow, so when an
//! older response resolves after a newer call started it is discarded instead
//! of overwriting the newer result.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::errors::WorkflowError;

/// Generation counter for one workflow
#[derive(Debug)]
pub struct InFlight {
    name: &'static str,
    latest: AtomicU64,
}

/// Proof that a call was started; compared against the latest generation
/// when the call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a ticket must be settled to discard stale results"]
pub struct CallTicket {
    generation: u64,
}

impl CallTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl InFlight {
    pub const fn new(name: &'static str) -> Self {
        Self { name, latest: AtomicU64::new(0) }
    }

    /// Start a call, invalidating every earlier ticket.
    pub fn begin(&self) -> CallTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        CallTicket { generation }
    }

    pub fn is_current(&self, ticket: CallTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }

    /// Pass `value` through if `ticket` is still the latest call, otherwise
    /// drop it and report [`WorkflowError::Superseded`].
    pub fn settle<T>(&self, ticket: CallTicket, value: T) -> Result<T, WorkflowError> {
        if self.is_current(ticket) {
            Ok(value)
        } else {
            debug!(
                workflow = self.name,
                generation = ticket.generation,
                latest = self.latest.load(Ordering::SeqCst),
                "discarding superseded response"
            );
            Err(WorkflowError::Superseded)
        }
    }
}
