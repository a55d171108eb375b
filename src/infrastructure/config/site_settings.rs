//! Site-wide options the binary persists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Persisted site-wide options.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Option name to value.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}
