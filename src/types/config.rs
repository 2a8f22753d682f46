//! Options for loading definition files.

/// Load configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// Accept a non-numeric width the way `atoi` does (leading digits, otherwise 0) instead of rejecting the line
    pub lenient_width: bool,
    /// Log a warning when a definition replaces a known type
    pub warn_on_redefinition: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            lenient_width: false,
            warn_on_redefinition: true,
        }
    }
}

impl LoadConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set lenient width parsing
    pub fn with_lenient_width(mut self, lenient: bool) -> Self {
        self.lenient_width = lenient;
        self
    }

    /// Set whether redefinitions are logged
    pub fn with_warn_on_redefinition(mut self, warn: bool) -> Self {
        self.warn_on_redefinition = warn;
        self
    }
}
