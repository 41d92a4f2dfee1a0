use crate::{error::Error, Result};

pub const URL_VAR: &str = "GERRIT_URL";
pub const USERNAME_VAR: &str = "GERRIT_USERNAME";
pub const PASSWORD_VAR: &str = "GERRIT_PASSWORD";

/// Where the server lives and how to authenticate against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the server, e.g. `https://review.example.com/`.
    pub url: String,
    pub username: Option<String>,
    /// HTTP password generated in the user's settings on the server.
    pub password: Option<String>,
}

impl Config {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Reads `GERRIT_URL`, `GERRIT_USERNAME` and `GERRIT_PASSWORD`. Only the
    /// URL is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Ok(Self {
            url: non_empty(URL_VAR).ok_or(Error::MissingConfig(URL_VAR))?,
            username: non_empty(USERNAME_VAR),
            password: non_empty(PASSWORD_VAR),
        })
    }

    /// Username and password, when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.username.as_deref()?, self.password.as_deref()?))
    }
}
