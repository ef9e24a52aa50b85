//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (one function per route)
//!         → upstream clients, session store
//!     → pages.rs (askama templates)
//!     → error.rs (faults → 500 page)
//! ```
//!
//! # Routes
//! | Route | Method | Page |
//! |---|---|---|
//! | `/` | GET | Riot ID form |
//! | `/set_user` | POST | redirect to `/index`, or identity error |
//! | `/index` | GET | champion roster |
//! | `/champion/{short_id}/{key}` | GET | champion detail + mastery, or detail error |
//! | `/search` | GET / POST | redirect / filtered roster |
//! | `/logout` | GET | clear session, redirect to `/` |

pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;

pub use error::AppError;
pub use server::{build_router, AppState, HttpServer};
