//! Player store collaborators.
//!
//! - [`Store`] — Settlement write-back interface
//! - [`Vault`] — In-memory store
//! - `postgres` — PostgreSQL store and connection (server feature)
mod store;
mod vault;
#[cfg(feature = "server")]
mod postgres;

pub use store::*;
pub use vault::*;
#[cfg(feature = "server")]
pub use postgres::*;
