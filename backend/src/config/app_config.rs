use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OWNER_NAME: &str = "Sujeet Kumar";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Read-only settings injected into the relay at startup.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub smtp_host: String,
    pub email_user: String,
    pub email_pass: String,
    pub recipient_email: String,
    pub shared_secret: String,
    pub owner_name: String,
    pub send_timeout: Duration,
    pub trust_forwarded_for: bool,
    pub sentry_dsn: Option<String>,
}

// Keeps credentials out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("smtp_host", &self.smtp_host)
            .field("email_user", &self.email_user)
            .field("recipient_email", &self.recipient_email)
            .field("owner_name", &self.owner_name)
            .field("send_timeout", &self.send_timeout)
            .field("trust_forwarded_for", &self.trust_forwarded_for)
            .field("sentry_enabled", &self.sentry_dsn.is_some())
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source, so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let send_timeout = match lookup("MAIL_SEND_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "MAIL_SEND_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_SEND_TIMEOUT_SECS),
        };

        // Only enable behind a reverse proxy that overwrites the header.
        let trust_forwarded_for = match lookup("TRUST_FORWARDED_FOR") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" => false,
                "1" | "true" | "yes" => true,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TRUST_FORWARDED_FOR",
                        value: raw,
                    })
                }
            },
            None => false,
        };

        Ok(Config {
            port,
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            email_user: required("EMAIL_USER")?,
            email_pass: required("EMAIL_PASS")?,
            recipient_email: required("RECIPIENT_EMAIL")?,
            shared_secret: required("JWT_SECRET")?,
            owner_name: lookup("OWNER_NAME").unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            send_timeout,
            trust_forwarded_for,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
        })
    }
}
