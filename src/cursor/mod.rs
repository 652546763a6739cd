//! Owning cursor over borrowed element references
//!
//! A session is the lifetime of one populated buffer inside a [`Cursor`]:
//! it starts at `populate` (or `reset`) and ends when an advance reaches the
//! end of the buffer. What happens at that point is chosen per call through
//! [`EndPolicy`]:
//!
//! ```text
//!            populate                 advance (in bounds)
//!   Empty ─────────────► Populated ◄──────────────────┐
//!     ▲                     │  └──────────────────────┘
//!     │                     │ advance at end
//!     │      ┌──────────────┼────────────────────┐
//!     │      ▼ Keep         ▼ Consume            ▼ DestroySelf
//!     │  Exhausted       Empty (reusable)      dropped
//!     │      │ reset
//!     │      └──────────► Populated
//!     └──── clear (any state)
//! ```

mod session;
mod policy;
mod slot;

pub use session::Cursor;
pub use policy::{Advance, EndPolicy};
pub use slot::CursorSlot;
