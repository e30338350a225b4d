//! The OAuth2/OIDC authorization-code-with-PKCE flow: `GET
//! /auth/login`, `GET /auth/callback`, `POST /auth/token`, `POST
//! /auth/logout`. No server-side session is kept — the `state`
//! parameter carries everything a later request (possibly handled by a
//! different worker, ) needs to resume the flow.
use crate::configuration::{AuthConfig, ServerConfig};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use pavex::extract::body::JsonBody;
use pavex::extract::query::QueryParams;
use pavex::http::header::LOCATION;
use pavex::response::{body::Json, Response};
use sha2::{Digest, Sha256};

#[derive(Debug, serde::Deserialize)]
pub struct LoginQuery {
    /// PKCE `code_challenge` computed by the caller (S256 over its own
    /// `code_verifier`, which never leaves the caller).
    pub code_challenge: String,
    /// Where `GET /auth/callback` should send the browser once the
    /// identity provider redirects back to us.
    pub callback_url: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct StateParam {
    code_challenge: String,
    callback_url: String,
}

fn encode_state(state: &StateParam) -> Result<String, OidcError> {
    let json = serde_json::to_vec(state).map_err(|_| OidcError::MalformedState)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_state(raw: &str) -> Result<StateParam, OidcError> {
    let bytes = URL_SAFE_NO_PAD
    .decode(raw)
    .map_err(|_| OidcError::MalformedState)?;
    serde_json::from_slice(&bytes).map_err(|_| OidcError::MalformedState)
}

/// `GET /auth/login`: redirects the browser to the identity provider's
/// authorization endpoint, forwarding the caller-supplied PKCE challenge
/// inside `state` so `GET /auth/callback` can hand it back unchanged.
pub fn login(
    query: QueryParams<LoginQuery>,
    auth_config: &AuthConfig,
    server_config: &ServerConfig,
) -> Result<Response, OidcError> {
    let state = StateParam {
        code_challenge: query.0.code_challenge.clone(),
        callback_url: query.0.callback_url,
    };
    let encoded_state = encode_state(&state)?;
    let redirect_uri = format!("{}/auth/callback", server_config.base_url);

    let mut url = url::Url::parse(&format!(
            "{}/protocol/openid-connect/auth",
            auth_config.oidc_issuer_url.trim_end_matches('/')
    ))
    .map_err(|_| OidcError::MalformedState)?;
    url.query_pairs_mut()
    .append_pair("client_id", &auth_config.oidc_client_id)
    .append_pair("response_type", "code")
    .append_pair("scope", "openid profile email")
    .append_pair("redirect_uri", &redirect_uri)
    .append_pair("state", &encoded_state)
    .append_pair("code_challenge", &state.code_challenge)
    .append_pair("code_challenge_method", "S256");

    Ok(Response::see_other().insert_header(LOCATION, url.as_str()))
}

#[derive(Debug, serde::Deserialize)]
pub struct CallbackQuery {
    pub code: String,
    pub state: String,
}

/// `GET /auth/callback`: the identity provider lands the browser here
/// with an authorization code; we forward both the code and the
/// untouched `state` to the caller's own `callback_url`, which then
/// calls `POST /auth/token` to complete the exchange (it alone holds the
/// PKCE `code_verifier`).
pub fn callback(query: QueryParams<CallbackQuery>) -> Result<Response, OidcError> {
    let state = decode_state(&query.0.state)?;
    let mut redirect =
    url::Url::parse(&state.callback_url).map_err(|_| OidcError::MalformedState)?;
    redirect
    .query_pairs_mut()
    .append_pair("code", &query.0.code)
    .append_pair("state", &query.0.state);
    Ok(Response::see_other().insert_header(LOCATION, redirect.as_str()))
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub code: String,
    pub code_verifier: String,
    pub state: String,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, serde::Deserialize)]
struct ProviderTokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// `POST /auth/token`: exchanges the authorization code for an access
/// token. Re-derives the PKCE challenge from the caller's `code_verifier`
/// and checks it against the one embedded in `state` before ever
/// contacting the identity provider — belt and braces, since the
/// provider performs the canonical check too.
pub async fn token(
    body: JsonBody<TokenRequest>,
    auth_config: &AuthConfig,
    server_config: &ServerConfig,
    http_client: &reqwest::Client,
) -> Result<Response, OidcError> {
    let TokenRequest {
        code,
        code_verifier,
        state,
    } = body.0;
    let state = decode_state(&state)?;

    let mut hasher = Sha256::new();
    hasher.update(code_verifier.as_bytes());
    let computed_challenge = URL_SAFE_NO_PAD.encode(hasher.finalize());
    if computed_challenge != state.code_challenge {
        return Err(OidcError::PkceMismatch);
    }

    let redirect_uri = format!("{}/auth/callback", server_config.base_url);
    let token_url = format!(
        "{}/protocol/openid-connect/token",
        auth_config.oidc_issuer_url.trim_end_matches('/')
    );

    let response = http_client
    .post(&token_url)
    .form(&[
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", auth_config.oidc_client_id.as_str()),
            (
                "client_secret",
                secrecy::ExposeSecret::expose_secret(&auth_config.oidc_client_secret),
            ),
            ("code_verifier", code_verifier.as_str()),
    ])
    .send()
    .await
    .map_err(|_| OidcError::ProviderUnreachable)?;

    if !response.status().is_success() {
        return Err(OidcError::ProviderRejectedCode);
    }

    let parsed: ProviderTokenResponse = response
    .json()
    .await
    .map_err(|_| OidcError::ProviderRejectedCode)?;

    let body = TokenResponse {
        access_token: parsed.access_token,
        token_type: parsed.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: parsed.expires_in.unwrap_or(3600),
    };
    Json::new(body)
    .map(|json| Response::ok().set_typed_body(json))
    .map_err(|_| OidcError::ProviderRejectedCode)
}

/// `POST /auth/logout`: there is no server-side session to tear down
/// ( design note) — this exists purely so clients have a single place
/// to call, matching the identity provider's end-session semantics.
pub fn logout() -> pavex::http::StatusCode {
    pavex::http::StatusCode::NO_CONTENT
}

#[derive(Debug, thiserror::Error)]
pub enum OidcError {
    #[error("malformed OIDC state parameter")]
    MalformedState,
    #[error("PKCE code_verifier does not match the original challenge")]
    PkceMismatch,
    #[error("identity provider unreachable")]
    ProviderUnreachable,
    #[error("identity provider rejected the authorization code")]
    ProviderRejectedCode,
}

impl OidcError {
    pub fn into_response(&self) -> Response {
        match self {
            OidcError::MalformedState => Response::bad_request(),
            OidcError::PkceMismatch => Response::unauthorized(),
            OidcError::ProviderUnreachable => Response::internal_server_error(),
            OidcError::ProviderRejectedCode => Response::unauthorized(),
        }
        .set_typed_body(format!("{self}"))
    }
}
