use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
    #[serde(default)]
    pub sendgrid: SendGridConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expires_in: i64,  // seconds
    pub refresh_token_expires_in: i64, // seconds
}

/// Admin credentials live in configuration, never in source. The hash is a
/// bcrypt digest of the admin password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StripeConfig {
    #[serde(default)]
    pub secret_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SendGridConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub from_email: String,
    /// Operations inbox notified of claim decisions, if set.
    #[serde(default)]
    pub ops_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// Exact origin to allow. None or "*" allows any origin.
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_toml() -> anyhow::Result<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| anyhow::anyhow!("Failed to parse {config_path}: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // No config file: build entirely from environment variables.
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                let database_url = get_env("DATABASE_URL").ok_or_else(|| {
                    anyhow::anyhow!("DATABASE_URL is not set and no {config_path} was found")
                })?;

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    jwt: JwtConfig {
                        secret: get_env("JWT_SECRET")
                            .unwrap_or_else(|| "change-me-in-production".to_string()),
                        access_token_expires_in: get_env_parse("JWT_ACCESS_EXPIRES_IN", 7200i64),
                        refresh_token_expires_in: get_env_parse(
                            "JWT_REFRESH_EXPIRES_IN",
                            2_592_000i64,
                        ),
                    },
                    admin: AdminConfig {
                        email: get_env("ADMIN_EMAIL").unwrap_or_default(),
                        password_hash: get_env("ADMIN_PASSWORD_HASH").unwrap_or_default(),
                    },
                    stripe: StripeConfig {
                        secret_key: get_env("STRIPE_SECRET_KEY").unwrap_or_default(),
                    },
                    sendgrid: SendGridConfig {
                        api_key: get_env("SENDGRID_API_KEY").unwrap_or_default(),
                        from_email: get_env("SENDGRID_FROM_EMAIL")
                            .unwrap_or_else(|| "noreply@par3challenge.com".to_string()),
                        ops_email: get_env("OPS_NOTIFY_EMAIL"),
                    },
                    cors: CorsConfig {
                        allowed_origin: get_env("CORS_ALLOWED_ORIGIN"),
                    },
                }
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Failed to read {config_path}: {e}"));
            }
        };

        // Environment overrides apply even when the file exists.
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            config.jwt.secret = v;
        }
        if let Ok(v) = env::var("JWT_ACCESS_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            config.jwt.access_token_expires_in = n;
        }
        if let Ok(v) = env::var("JWT_REFRESH_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            config.jwt.refresh_token_expires_in = n;
        }
        if let Ok(v) = env::var("ADMIN_EMAIL") {
            config.admin.email = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD_HASH") {
            config.admin.password_hash = v;
        }
        if let Ok(v) = env::var("STRIPE_SECRET_KEY") {
            config.stripe.secret_key = v;
        }
        if let Ok(v) = env::var("SENDGRID_API_KEY") {
            config.sendgrid.api_key = v;
        }
        if let Ok(v) = env::var("SENDGRID_FROM_EMAIL") {
            config.sendgrid.from_email = v;
        }
        if let Ok(v) = env::var("OPS_NOTIFY_EMAIL") {
            config.sendgrid.ops_email = Some(v);
        }
        if let Ok(v) = env::var("CORS_ALLOWED_ORIGIN") {
            config.cors.allowed_origin = Some(v);
        }

        Ok(config)
    }
}
