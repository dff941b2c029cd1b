use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
/// Every five minutes, on the minute.
const DEFAULT_BATTERY_AUDIT_CRON: &str = "0 */5 * * * *";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub battery_audit_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            battery_audit_cron: std::env::var("BATTERY_AUDIT_CRON")
                .unwrap_or_else(|_| DEFAULT_BATTERY_AUDIT_CRON.to_string()),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    const ENV_EXAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/.env.example");

    fn env_example() -> HashMap<String, String> {
        dotenvy::from_filename_iter(ENV_EXAMPLE)
            .unwrap()
            .map(|item| item.unwrap())
            .collect()
    }

    /// Tests that `.env.example` lists every variable `Config::from_env` reads.
    ///
    /// Expected: all four variables present, with the defaults used when unset
    #[test]
    fn env_example_lists_every_variable() {
        let vars = env_example();

        assert!(vars["DATABASE_URL"].starts_with("sqlite://"));
        assert_eq!(vars["HOST"], super::DEFAULT_HOST);
        assert_eq!(vars["PORT"], super::DEFAULT_PORT.to_string());
        assert_eq!(vars["BATTERY_AUDIT_CRON"], super::DEFAULT_BATTERY_AUDIT_CRON);
    }
}
