//! End-of-iteration policies and advance outcomes

use std::fmt;

/// What an advance does once the cursor runs past its last element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndPolicy {
    /// Keep the buffer so the session can be replayed with `reset`
    #[default]
    Keep,

    /// Release the buffer; the cursor stays usable for a new session
    Consume,

    /// Release the buffer and retire the cursor itself
    DestroySelf,
}

impl EndPolicy {
    /// All policies, in lifecycle order
    pub const ALL: [EndPolicy; 3] = [
        EndPolicy::Keep,
        EndPolicy::Consume,
        EndPolicy::DestroySelf,
    ];

    /// Whether this policy gives up the buffer at exhaustion
    pub fn releases_buffer(self) -> bool {
        !matches!(self, EndPolicy::Keep)
    }
}

impl fmt::Display for EndPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndPolicy::Keep => "keep",
            EndPolicy::Consume => "consume",
            EndPolicy::DestroySelf => "destroy-self",
        };
        f.write_str(name)
    }
}

/// Outcome of a single advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advance {
    /// Cursor moved to the next element
    Moved,

    /// Cursor ran off the end; buffer kept (`Keep`)
    Exhausted,

    /// Cursor ran off the end; buffer released (`Consume`)
    Released,

    /// Cursor ran off the end and must not be used again (`DestroySelf`)
    Retired,

    /// Nothing to do: the cursor was already done
    Idle,
}

impl Advance {
    /// True if the cursor still points at an element after this advance
    #[inline]
    pub fn is_moved(self) -> bool {
        self == Advance::Moved
    }

    /// True if this advance ended the session
    #[inline]
    pub fn ended_session(self) -> bool {
        matches!(self, Advance::Exhausted | Advance::Released | Advance::Retired)
    }
}
