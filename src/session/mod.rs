//! Per-browser session state.
//!
//! # Data Flow
//! ```text
//! POST /set_user
//!     → cookie.rs (read or mint signed session id)
//!     → SessionStore::set(id, Session)
//!
//! GET /champion/...
//!     → cookie.rs (verify signed session id)
//!     → SessionStore::get(id) → Option<Session>
//! ```
//!
//! # Design Decisions
//! - The browser only ever holds an opaque id; session data stays server side
//! - The store is an injected capability (`Arc<dyn SessionStore>`)
//! - Sessions expire `session.ttl_secs` after sign-in, in the store and in
//!   the cookie's `Max-Age` alike; a background sweep purges the leftovers
//! - Nothing is persisted

pub mod cookie;
pub mod store;

pub use cookie::SessionCookies;
pub use store::{spawn_sweeper, MemorySessionStore, SessionStore, DEFAULT_SESSION_TTL};

use serde::{Deserialize, Serialize};

use crate::region::Region;
use crate::upstream::PlayerId;

/// A resolved player bound to one browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub player_id: PlayerId,
    pub region: Region,
    pub platform_code: String,
    /// `name#tagline` as the player typed it.
    pub riot_id: String,
}
