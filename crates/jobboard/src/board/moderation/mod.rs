//! Admin-only transitions on accounts and listings, plus the admin read views.

pub mod router;
pub mod service;

pub use service::ModerationService;
