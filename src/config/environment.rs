// Start of file: /src/config/environment.rs

// * Environment configuration, read once at startup.
// * App Service injects PORT / WEBSITES_PORT; everything else has a default.

use std::{borrow::Cow, collections::HashMap, ffi::{OsStr, OsString}};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

const PRODUCTION: &str = "production";

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Reads the process environment.
    // * Only reads .env if ENVIRONMENT isn't "production" (any case).
    pub fn load() -> Result<Self> {
        let environment: Option<OsString> = std::env::var_os("ENVIRONMENT");
        if !environment.as_deref().and_then(OsStr::to_str).is_some_and(is_production_name) {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = utf8_vars(std::env::vars_os());
        Self::from_vars(&vars)
    }

    /// Builds the configuration from a key/value map, falling back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| {
            vars.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        // ? PORT wins over WEBSITES_PORT when both are set
        let port_var: Option<(&str, &str)> = ["PORT", "WEBSITES_PORT"]
            .into_iter()
            .find_map(|key| get_var(key).map(|value| (key, value)));

        let port: u16 = match port_var {
            Some((key, value)) => value
                .parse()
                .with_context(|| format!("Invalid {key} value: {value:?}"))?,
            None => DEFAULT_PORT,
        };

        let default_timeout_seconds: u64 = get_var("DEFAULT_TIMEOUT_SECONDS")
            .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT);

        if default_timeout_seconds == 0 {
            bail!("DEFAULT_TIMEOUT_SECONDS must be greater than zero");
        }

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.to_ascii_lowercase()))
                .unwrap_or(Cow::Borrowed(DEFAULT_ENVIRONMENT)),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port,

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds,
        })
    }

    pub fn is_production(&self) -> bool {
        is_production_name(&self.environment)
    }

    /// `host:port`, as handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_production_name(environment: &str) -> bool {
    environment.trim().eq_ignore_ascii_case(PRODUCTION)
}

// ? Non-UTF-8 entries can't be any of our keys, so they are skipped instead of panicking
fn utf8_vars<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}


// End of file: /src/config/environment.rs
