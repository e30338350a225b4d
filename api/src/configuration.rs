//! The hierarchical application configuration, loaded from
//! `base.yaml` / `<profile>.yaml` / environment overlay by `sd_server`.
use jsonwebtoken::{DecodingKey, EncodingKey};
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::net::{SocketAddr, TcpListener};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub rbac: RbacConfig,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub ip: std::net::IpAddr,
    pub base_url: String,
}

impl ServerConfig {
    pub fn listener(&self) -> Result<TcpListener, std::io::Error> {
        let addr = SocketAddr::new(self.ip, self.port);
        TcpListener::bind(addr)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub require_ssl: bool,
}

impl DatabaseConfig {
    pub fn connection_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
        .host(&self.host)
        .username(&self.username)
        .password(self.password.expose_secret())
        .port(self.port)
        .ssl_mode(ssl_mode)
        .database(&self.database_name)
    }

    pub async fn get_pool(&self) -> Result<sqlx::PgPool, sqlx::Error> {
        sqlx::PgPool::connect_with(self.connection_options()).await
    }
}

/// OIDC issuer details plus the HMAC secret used to mint/verify locally
/// signed test tokens when no identity provider is reachable (dev/test
/// profiles only).
#[derive(serde::Deserialize, Clone, Debug)]
pub struct AuthConfig {
    pub oidc_issuer_url: String,
    pub oidc_client_id: String,
    pub oidc_client_secret: Secret<String>,
    pub oidc_realm: String,
    pub hmac_test_secret: Secret<String>,
    #[serde(default)]
    pub allow_local_tokens: bool,
}

impl AuthConfig {
    pub fn local_encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.hmac_test_secret.expose_secret().as_bytes())
    }

    pub fn local_decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.hmac_test_secret.expose_secret().as_bytes())
    }
}

/// Group-name-to-role mapping, configurable with sensible defaults.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct RbacConfig {
    #[serde(default = "default_admin_group")]
    pub admin_group: String,
    #[serde(default = "default_operator_group")]
    pub operator_group: String,
    #[serde(default = "default_creator_group")]
    pub creator_group: String,
}

impl Default for RbacConfig {
    fn default() -> Self {
        RbacConfig {
            admin_group: default_admin_group(),
            operator_group: default_operator_group(),
            creator_group: default_creator_group(),
        }
    }
}

fn default_admin_group() -> String {
    "sd_admins".to_string()
}
fn default_operator_group() -> String {
    "sd_operators".to_string()
}
fn default_creator_group() -> String {
    "sd_creators".to_string()
}
