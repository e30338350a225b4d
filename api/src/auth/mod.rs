//! Auth resolution: bearer-token verification producing the
//! [`sd_core::types::Actor`] the RBAC policy consumes. The core crate
//! never sees a token — only the `{user_id, groups[]}` pair this module
//! extracts from it.
pub mod jwks;
pub mod local;
pub mod oidc;

use crate::configuration::{AuthConfig, RbacConfig};
use pavex::http::HeaderMap;
use sd_core::error::{CoreError, CoreResult};
use sd_core::types::{Actor, Role};

/// Claims common to both the OIDC-issued JWT and the locally-signed test
/// token: a subject and the group memberships role mapping is derived
/// from.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub groups: Vec<String>,
    pub exp: u64,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(pavex::http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::trim)
}

/// Maps group memberships to a role, preferring the highest-privilege
/// match. A token that decodes successfully but carries none of the
/// configured groups is treated the same as an anonymous caller for RBAC
/// purposes — see DESIGN.md for why the "absent token" and "unprivileged
/// token" cases aren't collapsed any further upstream.
pub fn role_from_groups(groups: &[String], rbac: &RbacConfig) -> Role {
    if groups.iter().any(|g| g == &rbac.admin_group) {
        Role::Admin
    } else if groups.iter().any(|g| g == &rbac.operator_group) {
        Role::Operator
    } else if groups.iter().any(|g| g == &rbac.creator_group) {
        Role::Creator
    } else {
        Role::Anonymous
    }
}

/// Resolves the [`Actor`] for an incoming request. Returns
/// `Actor::anonymous` when no `Authorization` header is present;
/// returns [`CoreError::Unauthorized`] when one is present but invalid.
/// Route handlers that require authentication check `actor.role` after
/// the fact — this function never denies a request by itself, it only
/// resolves identity.
pub async fn resolve_actor(
    headers: &HeaderMap,
    auth_config: &AuthConfig,
    rbac_config: &RbacConfig,
    jwks_client: &jwks::JwksClient,
) -> CoreResult<Actor> {
    let Some(token) = bearer_token(headers) else {
        return Ok(Actor::anonymous());
    };

    let header = jsonwebtoken::decode_header(token).map_err(|_| CoreError::Unauthorized)?;

    let claims = match header.alg {
        jsonwebtoken::Algorithm::HS256 if auth_config.allow_local_tokens => {
            local::verify(token, auth_config).await?
        }
        _ => jwks_client.verify(token, &header, auth_config).await?,
    };

    Ok(Actor {
            user_id: claims.sub,
            role: role_from_groups(&claims.groups, rbac_config),
    })
}
