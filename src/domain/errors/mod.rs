//! Domain error types.

mod probe_error;
mod store_error;

pub use probe_error::ProbeError;
pub use store_error::StoreError;
