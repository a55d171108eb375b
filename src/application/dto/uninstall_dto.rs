//! Uninstall DTOs.

/// Outcome of an uninstall cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UninstallReport {
    /// Whether the site default avatar pointed at Avataurus and was reset.
    pub default_reset: bool,
    /// Number of cached existence checks removed.
    pub removed_entries: usize,
}

impl std::fmt::Display for UninstallReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "removed {} cached checks{}",
            self.removed_entries,
            if self.default_reset {
                ", default avatar reset"
            } else {
                ""
            }
        )
    }
}
