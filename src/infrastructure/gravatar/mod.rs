//! Gravatar existence probe.

pub mod client;

pub use client::{DEFAULT_PROBE_TIMEOUT, GRAVATAR_BASE_URL, GravatarClient};
