//! Bridge adapter configuration.

use std::time::Duration;

/// Default per-call timeout for bridge requests.
///
/// UI automation is slow but not this slow; a call still pending after 30
/// seconds means a wedged terminal window, not a busy one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the terminal automation bridge adapter.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the local bridge process.
    pub endpoint: String,
    /// Path of the desktop terminal executable, forwarded on connect.
    /// Empty lets the bridge attach to an already running instance.
    pub exe_path: String,
    /// Drive order-entry fields by keystrokes instead of clipboard paste.
    pub type_keys: bool,
    /// Per-call HTTP timeout.
    pub timeout: Duration,
}

impl BridgeConfig {
    /// Create a configuration for the given bridge endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            exe_path: String::new(),
            type_keys: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the terminal executable path.
    #[must_use]
    pub fn with_exe_path(mut self, exe_path: impl Into<String>) -> Self {
        self.exe_path = exe_path.into();
        self
    }

    /// Turn keystroke entry on or off.
    #[must_use]
    pub const fn with_type_keys(mut self, type_keys: bool) -> Self {
        self.type_keys = type_keys;
        self
    }

    /// Set the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = BridgeConfig::new("http://127.0.0.1:18611");
        assert_eq!(config.endpoint, "http://127.0.0.1:18611");
        assert_eq!(config.exe_path, "");
        assert!(config.type_keys);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builders_override_defaults() {
        let config = BridgeConfig::new("http://127.0.0.1:18611")
            .with_exe_path("C:/ths/xiadan.exe")
            .with_type_keys(false)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.exe_path, "C:/ths/xiadan.exe");
        assert!(!config.type_keys);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
