//! HTTP route handlers for `bizpage`.
//!
//! - `landing`: the per-subdomain landing page and the simulated contact form
//! - `sys`: liveness probe

pub mod landing;
pub mod sys;
