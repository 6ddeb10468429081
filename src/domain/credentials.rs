//! Credential domain types
//!
//! Provides the validated user id / API key pair used to authenticate
//! against the SMS API.

use crate::config::Config;
use crate::error::DomainError;
use std::fmt;

/// Required length of a Free Mobile user id
pub const USERID_LENGTH: usize = 8;

/// User id and API key pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    userid: String,
    apikey: String,
}

impl Credentials {
    /// Validate setup parameters and build credentials
    ///
    /// Parameters are checked in order: `userid` first, then `apikey`.
    pub fn new(userid: Option<&str>, apikey: Option<&str>) -> Result<Self, DomainError> {
        let userid = required("userid", userid)?;
        if userid.chars().count() != USERID_LENGTH {
            return Err(DomainError::InvalidUserId);
        }
        let apikey = required("apikey", apikey)?;

        Ok(Self {
            userid: userid.to_string(),
            apikey: apikey.to_string(),
        })
    }

    /// Read credentials from persisted configuration
    ///
    /// Returns `None` when either field is absent or empty. Stored values
    /// are otherwise taken as-is.
    pub fn from_config(config: &Config) -> Option<Self> {
        match (config.userid.as_deref(), config.apikey.as_deref()) {
            (Some(userid), Some(apikey)) if !userid.is_empty() && !apikey.is_empty() => {
                Some(Self {
                    userid: userid.to_string(),
                    apikey: apikey.to_string(),
                })
            }
            _ => None,
        }
    }

    /// User id
    pub fn userid(&self) -> &str {
        &self.userid
    }

    /// API key
    pub fn apikey(&self) -> &str {
        &self.apikey
    }

    /// API key with everything but the first two characters hidden
    pub fn masked_apikey(&self) -> String {
        mask(&self.apikey)
    }

    /// Configuration holding exactly these credentials
    pub fn to_config(&self) -> Config {
        Config {
            userid: Some(self.userid.clone()),
            apikey: Some(self.apikey.clone()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("userid", &self.userid)
            .field("apikey", &self.masked_apikey())
            .finish()
    }
}

/// Hide a secret, keeping its first two characters
pub fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(2).collect();
    let hidden = secret.chars().count().saturating_sub(2);
    format!("{}{}", visible, "*".repeat(hidden))
}

fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, DomainError> {
    match value {
        None => Err(DomainError::MissingParameter(name.to_string())),
        Some("") => Err(DomainError::InvalidParameter {
            name: name.to_string(),
            value: String::new(),
        }),
        Some(v) => Ok(v),
    }
}
