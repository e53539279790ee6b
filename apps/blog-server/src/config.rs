//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::database::DatabaseConfig;
use blog_infra::JwtConfig;
use blog_infra::auth::DEFAULT_JWT_SECRET;

const DEFAULT_CLUSTER_HOST: &str = "cluster0.tye2x.mongodb.net";
const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://blog-website-4e728.web.app",
    "https://blog-website-4e728.firebaseapp.com",
];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    /// Production mode: token cookies are marked `Secure`.
    pub production: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let production = lookup("NODE_ENV")
            .or_else(|| lookup("RUST_ENV"))
            .map(|v| v == "production" || v == "prod")
            .unwrap_or(false);

        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: lookup("JWT_SECRET").unwrap_or(defaults.secret),
            expiration_hours: lookup("JWT_EXPIRATION_HOURS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.expiration_hours),
            issuer: lookup("JWT_ISSUER").unwrap_or(defaults.issuer),
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|list| parse_origins(&list))
            .unwrap_or_else(|| DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect());

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database: Self::database_config(&lookup),
            jwt,
            production,
            cors_allowed_origins,
        }
    }

    /// `MONGODB_URI` wins; otherwise an Atlas SRV URI is assembled from
    /// `DB_USER` / `DB_PASSWORD`. With neither, there is no database.
    fn database_config(lookup: &impl Fn(&str) -> Option<String>) -> Option<DatabaseConfig> {
        let uri = lookup("MONGODB_URI").or_else(|| {
            let user = lookup("DB_USER")?;
            let password = lookup("DB_PASSWORD")?;
            let host =
                lookup("DB_CLUSTER_HOST").unwrap_or_else(|| DEFAULT_CLUSTER_HOST.to_string());
            Some(format!(
                "mongodb+srv://{user}:{password}@{host}/?retryWrites=true&w=majority&appName=Cluster0"
            ))
        })?;

        Some(DatabaseConfig {
            uri,
            database: lookup("DB_NAME").unwrap_or_else(|| "blogDB".to_string()),
            app_name: "blog-server".to_string(),
            connect_timeout: Duration::from_secs(
                lookup("DB_CONNECT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        })
    }

    /// Log configuration that is fine for development but not for production.
    pub fn warn_insecure_defaults(&self) {
        if self.jwt.secret == DEFAULT_JWT_SECRET {
            if self.production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }
    }
}

/// Split a comma list of origins. Credentialed CORS cannot use a wildcard,
/// so `*` entries are dropped.
fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .filter(|origin| {
            let wildcard = origin.contains('*');
            if wildcard {
                tracing::error!(
                    origin = %origin,
                    "Ignoring wildcard CORS origin; credentialed requests need explicit origins"
                );
            }
            !wildcard
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.port, 5000);
        assert!(config.database.is_none());
        assert!(!config.production);
        assert_eq!(config.jwt.expiration_hours, 10);
        assert_eq!(config.cors_allowed_origins.len(), 3);
    }

    #[test]
    fn test_database_uri_from_credentials() {
        let config = config_from(&[("DB_USER", "blog"), ("DB_PASSWORD", "pw")]);

        let database = config.database.unwrap();
        assert!(database.uri.starts_with("mongodb+srv://blog:pw@cluster0.tye2x.mongodb.net/"));
        assert_eq!(database.database, "blogDB");
    }

    #[test]
    fn test_explicit_uri_wins() {
        let config = config_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("DB_USER", "blog"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "testDB"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(database.uri, "mongodb://localhost:27017");
        assert_eq!(database.database, "testDB");
    }

    #[test]
    fn test_production_flag_and_origins() {
        let config = config_from(&[
            ("NODE_ENV", "production"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example/, https://b.example"),
            ("PORT", "8080"),
        ]);

        assert!(config.production);
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_wildcard_origins_are_dropped() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "*, https://a.example, https://*.example")]);

        assert_eq!(config.cors_allowed_origins, vec!["https://a.example".to_string()]);
    }
}
