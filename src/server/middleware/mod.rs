//! Request-scoped helpers layered in front of the controllers.
//!
//! - `session` - typed access to the authenticated user stored in the session
//! - `auth` - guard that resolves the session user and checks permissions
//! - `metrics` - per-request counters and latency histograms

pub mod auth;
pub mod metrics;
pub mod session;
