//! Verifies OIDC-issued JWTs against the issuer's JSON Web Key Set,
//! refetched and cached for a short TTL so every request doesn't pay a
//! network round trip, in the same `reqwest` + `jsonwebtoken` idiom
//! `auth::oidc`'s authorization-code flow already uses.
use super::Claims;
use crate::configuration::AuthConfig;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Header as JwtHeader, Validation};
use sd_core::error::{CoreError, CoreResult};
use std::sync::RwLock;
use std::time::{Duration, Instant};

#[derive(Debug, serde::Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

#[derive(Debug, serde::Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

struct Cached {
    fetched_at: Instant,
    keys: Vec<Jwk>,
}

const CACHE_TTL: Duration = Duration::from_secs(300);

pub struct JwksClient {
    http: reqwest::Client,
    jwks_url: String,
    cache: RwLock<Option<Cached>>,
}

impl JwksClient {
    pub fn new(issuer_url: &str) -> Self {
        JwksClient {
            http: reqwest::Client::new(),
            jwks_url: format!("{}/protocol/openid-connect/certs", issuer_url.trim_end_matches('/')),
            cache: RwLock::new(None),
        }
    }

    /// Constructor used by [`crate::blueprint::api_blueprint`] to derive
    /// the process-lifetime JWKS cache from the loaded [`AuthConfig`].
    pub fn from_config(auth_config: &AuthConfig) -> Self {
        JwksClient::new(&auth_config.oidc_issuer_url)
    }

    async fn keys(&self) -> CoreResult<Vec<Jwk>> {
        if let Some(cached) = self.cache.read().unwrap().as_ref() {
            if cached.fetched_at.elapsed() < CACHE_TTL {
                return Ok(clone_keys(&cached.keys));
            }
        }
        let jwk_set: JwkSet = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|_| CoreError::Unauthorized)?
            .json()
            .await
            .map_err(|_| CoreError::Unauthorized)?;
        let keys = clone_keys(&jwk_set.keys);
        *self.cache.write().unwrap() = Some(Cached {
            fetched_at: Instant::now(),
            keys: jwk_set.keys,
        });
        Ok(keys)
    }

    /// Verifies `token`'s signature against the matching JWK (by `kid`),
    /// and its `iss`/`aud` claims against the configured issuer/client
    /// id.
    pub async fn verify(
        &self,
        token: &str,
        header: &JwtHeader,
        auth_config: &AuthConfig,
    ) -> CoreResult<Claims> {
        let kid = header.kid.as_deref().ok_or(CoreError::Unauthorized)?;
        let keys = self.keys().await?;
        let key = keys
            .iter()
            .find(|k| k.kid == kid)
            .ok_or(CoreError::Unauthorized)?;
        let decoding_key = DecodingKey::from_rsa_components(&key.n, &key.e)
            .map_err(|_| CoreError::Unauthorized)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&auth_config.oidc_client_id]);
        validation.set_issuer(&[&auth_config.oidc_issuer_url]);

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| CoreError::Unauthorized)
    }
}

fn clone_keys(keys: &[Jwk]) -> Vec<Jwk> {
    keys.iter()
        .map(|k| Jwk {
            kid: k.kid.clone(),
            n: k.n.clone(),
            e: k.e.clone(),
        })
        .collect()
}
