use std::env;

use auth::AuthConfig;
use auth::SecretError;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    pub expiration_seconds: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}

/// Initial administrator account, provisioned at startup.
#[derive(Deserialize, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ATTENDANCE_JWT__SECRET, ATTENDANCE_SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: ATTENDANCE_JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("ATTENDANCE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }

    /// Build the token subsystem configuration.
    ///
    /// # Errors
    /// * `Empty` - No signing secret configured
    /// * `InvalidTtl` - Non-positive token lifetime
    pub fn auth_config(&self) -> Result<AuthConfig, SecretError> {
        AuthConfig::from_parts(self.jwt.secret.as_bytes(), self.jwt.expiration_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expiration_seconds: i64) -> Config {
        Config {
            server: ServerConfig { http_port: 3000 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_seconds,
            },
            admin: AdminConfig {
                email: "admin@example.com".to_string(),
                password: "Admin123!".to_string(),
                display_name: "Administrador".to_string(),
            },
        }
    }

    #[test]
    fn test_auth_config_requires_secret() {
        assert_eq!(
            config("", 3600).auth_config().unwrap_err(),
            SecretError::Empty
        );
        assert_eq!(
            config("secret", 0).auth_config().unwrap_err(),
            SecretError::InvalidTtl(0)
        );

        let auth = config("secret", 60).auth_config().unwrap();
        assert_eq!(auth.token_ttl_seconds, 60);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let printed = format!("{:?}", config("top-secret", 60));
        assert!(!printed.contains("top-secret"));
        assert!(!printed.contains("Admin123!"));
    }
}
