use std::fmt;
use std::str::FromStr;

/// Authentication methods a consumer can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthType {
    ApiKey,
    TlsCert,
}

impl AuthType {
    pub const ALL: [AuthType; 2] = [AuthType::ApiKey, AuthType::TlsCert];

    /// Identifier carried as the toggle input's value.
    pub fn identifier(self) -> &'static str {
        match self {
            AuthType::ApiKey => "api_key",
            AuthType::TlsCert => "tls_cert",
        }
    }

    /// Element id of the detail sub-panel for this method.
    pub fn panel_id(self) -> String {
        format!("auth-{}", self.identifier())
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown authentication type '{0}'")]
pub struct UnknownAuthType(pub String);

impl FromStr for AuthType {
    type Err = UnknownAuthType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthType::ALL
            .into_iter()
            .find(|auth| auth.identifier() == s.trim())
            .ok_or_else(|| UnknownAuthType(s.to_string()))
    }
}
