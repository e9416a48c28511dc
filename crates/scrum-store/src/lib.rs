//! Application Store: the client-side authoritative snapshot of the Scrum
//! manager's collections, the session lifecycle, and the pure view layer
//! derived from both.

pub mod error;
pub mod session;
pub mod store;
pub mod view;


pub use error::{StoreError, StoreResult};
pub use session::{PersistedSession, Session, SessionStore};
pub use store::AppStore;
