//! Structured logging: a per-request root span recorded by a `pavex`
//! middleware, plus `spawn_blocking_with_tracing` for the one CPU-bound
//! step on the request path (HMAC verification of locally signed test
//! tokens, see `auth::local`).
use pavex::http::Version;
use pavex::middleware::Next;
use pavex::request::RequestHead;
use pavex::response::Response;
use std::borrow::Cow;
use std::future::IntoFuture;
use tokio::task::JoinHandle;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// The top-level logical span for an incoming request, carrying the
/// method/flavor/user-agent up front and `http.status_code` filled in
/// once the response is produced.
pub struct RootSpan(tracing::Span);

impl RootSpan {
    pub fn new(request_head: &RequestHead) -> Self {
        let user_agent = request_head
            .headers
            .get("User-Agent")
            .map(|h| h.to_str().unwrap_or_default())
            .unwrap_or_default();

        let span = tracing::info_span!(
            "HTTP request",
            http.method = %request_head.method,
            http.flavor = %http_flavor(request_head.version),
            http.user_agent = %user_agent,
            http.status_code = tracing::field::Empty,
        );
        Self(span)
    }

    pub fn record_status_code(&self, status: u16) {
        self.0.record("http.status_code", status);
    }
}

fn http_flavor(version: Version) -> Cow<'static, str> {
    match version {
        Version::HTTP_09 => "0.9".into(),
        Version::HTTP_10 => "1.0".into(),
        Version::HTTP_11 => "1.1".into(),
        Version::HTTP_2 => "2.0".into(),
        Version::HTTP_3 => "3.0".into(),
        other => format!("{other:?}").into(),
    }
}

/// Logging middleware: wraps every request in its [`RootSpan`] and
/// records the final status code once the handler chain completes.
pub async fn logger<T>(root_span: RootSpan, next: Next<T>) -> Response
where
    T: IntoFuture<Output = Response>,
{
    let response = next.into_future().await;
    root_span.record_status_code(response.status().as_u16());
    response
}

/// Builds the `tracing` subscriber: bunyan-formatted JSON lines on the
/// given sink, filtered by `RUST_LOG` (defaulting to `default_level`).
pub fn get_subscriber<Sink>(
    name: String,
    default_level: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> tracing_subscriber::fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs the given subscriber as the global default and redirects the
/// `log` facade into `tracing`.
pub fn init_telemetry(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error> {
    tracing_log::LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

/// Spawn a blocking task without losing the current `tracing` span — used
/// for the HMAC verification of locally signed test tokens, the one
/// CPU-bound step on the request path.
pub fn spawn_blocking_with_tracing<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let current_span = tracing::Span::current();
    tokio::task::spawn_blocking(move || current_span.in_scope(f))
}
