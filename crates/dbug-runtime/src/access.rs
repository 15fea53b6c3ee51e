use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Who gets to see the dock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccessRule {
    #[default]
    All,
    /// Client address must be listed.
    Ip { allow: Vec<String> },
    /// Authenticated user id must be listed.
    User { ids: Vec<u64> },
}

impl AccessRule {
    pub fn permits(&self, request: &RequestInfo) -> bool {
        match self {
            AccessRule::All => true,
            AccessRule::Ip { allow } => request
                .client_ip
                .as_deref()
                .is_some_and(|ip| allow.iter().any(|allowed| allowed == ip)),
            AccessRule::User { ids } => request.user_id.is_some_and(|id| ids.contains(&id)),
        }
    }
}

/// What the host knows about the current response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// Host runs in debug mode.
    pub debug: bool,
    /// The response is an HTML document.
    pub html: bool,
    pub client_ip: Option<String>,
    pub user_id: Option<u64>,
}

impl Default for RequestInfo {
    fn default() -> Self {
        Self {
            debug: false,
            html: true,
            client_ip: None,
            user_id: None,
        }
    }
}

impl RequestInfo {
    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }
}

/// Base rules: debug-mode requirement first, then the access rule.
pub fn is_allowed(config: &Config, request: &RequestInfo) -> bool {
    if config.only_debug && !request.debug {
        return false;
    }
    config.access.permits(request)
}
