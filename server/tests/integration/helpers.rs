//! Spins up a full `sd_server` instance against a real Postgres database
//! for HTTP-level tests, the way `TestApi` does in the teacher's own
//! `realworld` example app. Requires a reachable database — point
//! `APP_DATABASE__HOST` / `APP_DATABASE__PORT` / `APP_DATABASE__USERNAME`
//! at one, or rely on the `dev.yaml` defaults plus the env overrides set
//! below.
use pavex::hyper::Server;
use sd_api::auth::local::encode_test_token;
use sd_api::configuration::Config;
use sd_server::configuration::load_configuration;
use server_sdk::{build_application_state, run};
use std::sync::Once;

static ENV_SETUP: Once = Once::new();

/// Test-only credentials, set once per process. A real deployment
/// supplies these through the environment; tests do the same so
/// `dev.yaml` never has to carry a secret.
fn ensure_test_env() {
    ENV_SETUP.call_once(|| {
        std::env::set_var("APP_SERVER__PORT", "0");
        std::env::set_var("APP_DATABASE__PASSWORD", "password");
        std::env::set_var("APP_AUTH__OIDC_CLIENT_SECRET", "unused-in-tests");
        std::env::set_var("APP_AUTH__HMAC_TEST_SECRET", "integration-test-hmac-secret");
    });
}

pub struct TestApi {
    pub api_address: String,
    pub api_client: reqwest::Client,
    pub auth_config: sd_api::configuration::AuthConfig,
}

impl TestApi {
    pub async fn spawn() -> Self {
        ensure_test_env();
        let config = Self::get_config();

        sqlx::migrate!("../api/migrations")
            .run(&config.database.get_pool().await.expect("Failed to connect to the test database"))
            .await
            .expect("Failed to run database migrations");

        let auth_config = config.auth.clone();
        let application_state = build_application_state(config.clone())
            .await
            .expect("Failed to build the application state");

        let tcp_listener = config
            .server
            .listener()
            .expect("Failed to bind the server TCP listener");
        let address = tcp_listener
            .local_addr()
            .expect("The server TCP listener doesn't have a local socket address");
        let server_builder = Server::from_tcp(tcp_listener).expect("Failed to build a hyper Server");

        tokio::spawn(async move {
            run(server_builder, application_state)
                .await
                .expect("Failed to launch API server");
        });

        TestApi {
            api_address: format!("http://{}:{}", config.server.ip, address.port()),
            api_client: reqwest::Client::new(),
            auth_config,
        }
    }

    fn get_config() -> Config {
        load_configuration().expect("Failed to load test configuration")
    }

    pub fn token_for(&self, sub: &str, groups: &[&str]) -> String {
        encode_test_token(
            sub,
            groups.iter().map(|g| g.to_string()).collect(),
            &self.auth_config,
        )
        .expect("Failed to mint a local test token")
    }

    pub async fn post_json(
        &self,
        path: &str,
        token: Option<&str>,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        let mut req = self
            .api_client
            .post(format!("{}{path}", self.api_address))
            .json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req.send().await.expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> reqwest::Response {
        let mut req = self.api_client.get(format!("{}{path}", self.api_address));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req.send().await.expect("Failed to execute request.")
    }

    pub async fn patch_json(
        &self,
        path: &str,
        token: Option<&str>,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        let mut req = self
            .api_client
            .patch(format!("{}{path}", self.api_address))
            .json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req.send().await.expect("Failed to execute request.")
    }
}
