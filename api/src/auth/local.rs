//! Locally-signed HS256 test tokens (`auth.allow_local_tokens`), used by
//! the integration test suite and local development in place of a real
//! identity provider. Claims share the `{sub, groups, exp}` shape every
//! claims source in this crate produces, so `resolve_actor` doesn't need
//! to know which signing path a token came from.
use super::Claims;
use crate::configuration::AuthConfig;
use crate::telemetry::spawn_blocking_with_tracing;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use sd_core::error::{CoreError, CoreResult};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Mint a token for `sub` with the given group memberships, valid for one
/// hour. Used by test fixtures, not by any production code path.
pub fn encode_test_token(
    sub: &str,
    groups: Vec<String>,
    auth_config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: sub.to_string(),
        groups,
        exp: seconds_from_now(3600),
    };
    let header = Header {
        alg: ALGORITHM,
        ..Default::default()
    };
    encode(&header, &claims, &auth_config.local_encoding_key())
}

fn seconds_from_now(secs: u64) -> u64 {
    let expiry_time =
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap() + Duration::from_secs(secs);
    expiry_time.as_secs()
}

/// Verifies a locally-signed token. HMAC verification is the one
/// CPU-bound step on the auth path, so it runs on a blocking thread with
/// the current tracing span re-attached.
pub async fn verify(token: &str, auth_config: &AuthConfig) -> CoreResult<Claims> {
    let token = token.to_string();
    let decoding_key = auth_config.local_decoding_key();
    spawn_blocking_with_tracing(move || {
        let validation = Validation::new(ALGORITHM);
        decode::<Claims>(&token, &decoding_key, &validation).map(|data| data.claims)
    })
    .await
    .map_err(|_| CoreError::Unauthorized)?
    .map_err(|_| CoreError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn config() -> AuthConfig {
        AuthConfig {
            oidc_issuer_url: "https://idp.example.com/realms/sd".to_string(),
            oidc_client_id: "status-dashboard".to_string(),
            oidc_client_secret: Secret::new("unused".to_string()),
            oidc_realm: "sd".to_string(),
            hmac_test_secret: Secret::new("test-only-secret".to_string()),
            allow_local_tokens: true,
        }
    }

    #[tokio::test]
    async fn encodes_and_verifies_a_round_trip() {
        let config = config();
        let token = encode_test_token(
            "user-a",
            vec!["sd_creators".to_string()],
            &config,
        )
        .unwrap();
        let claims = verify(&token, &config).await.unwrap();
        assert_eq!(claims.sub, "user-a");
        assert_eq!(claims.groups, vec!["sd_creators".to_string()]);
    }

    #[tokio::test]
    async fn rejects_a_token_signed_with_a_different_secret() {
        let config = config();
        let token = encode_test_token("user-a", vec![], &config).unwrap();
        let mut other = config;
        other.hmac_test_secret = Secret::new("a-different-secret".to_string());
        assert!(verify(&token, &other).await.is_err());
    }
}
