//! Live match runtime.
//!
//! - [`Session`] — Serialized wrapper around one match's [`Table`](crate::gameplay::Table)
//! - [`ServerMessage`] — Typed outbound wire schema
//! - [`Protocol`] — Inbound frame parsing into [`Move`]
//! - [`Outbox`] — Write half of a participant's connection
//! - [`Scheduler`] — Deferred notifications ([`Realtime`], [`Manual`])
mod message;
mod outbox;
mod participant;
mod protocol;
mod scheduler;
mod session;

pub use message::*;
pub use outbox::*;
pub use participant::*;
pub use protocol::*;
pub use scheduler::*;
pub use session::*;
