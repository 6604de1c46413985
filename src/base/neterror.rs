use thiserror::Error;

/// Success code shared by every net operation that reports an `int` result.
pub const OK: i32 = 0;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetError {
    #[error("Access denied")]
    AccessDenied,
    #[error("Invalid URL")]
    InvalidUrl,

    // Cookie Policy Errors (custom codes starting at -10000)
    /// The rejected ordinal is `None` when the error was rebuilt from its code.
    #[error("Invalid cookie policy mode{}", describe_mode(.0))]
    InvalidCookiePolicyMode(Option<i32>),
    #[error("Invalid cookie policy config: {message}")]
    InvalidConfig { message: String },

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

fn describe_mode(value: &Option<i32>) -> String {
    value.map(|v| format!(": {}", v)).unwrap_or_default()
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::AccessDenied => -10,
            NetError::InvalidUrl => -300,

            NetError::InvalidCookiePolicyMode(_) => -10000,
            NetError::InvalidConfig { .. } => -10001,
            NetError::Unknown(code) => *code,
        }
    }

    /// Create an invalid cookie policy mode error for a rejected ordinal.
    pub fn invalid_mode(value: i32) -> Self {
        NetError::InvalidCookiePolicyMode(Some(value))
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        NetError::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -10 => NetError::AccessDenied,
            -300 => NetError::InvalidUrl,

            -10000 => NetError::InvalidCookiePolicyMode(None),
            -10001 => NetError::invalid_config(""),
            _ => NetError::Unknown(code),
        }
    }
}

impl From<serde_json::Error> for NetError {
    fn from(err: serde_json::Error) -> Self {
        NetError::invalid_config(err.to_string())
    }
}

impl From<url::ParseError> for NetError {
    fn from(_: url::ParseError) -> Self {
        NetError::InvalidUrl
    }
}
