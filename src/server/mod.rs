use axum::{
    http::{HeaderValue, Method},
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::config::ServerSettings;
use crate::storage::ContactStore;
use crate::{Error, Result};

pub mod routes;

/// Server state shared by every handler
pub struct AppState {
    pub store: Mutex<ContactStore>,
}

impl AppState {
    pub fn new(store: ContactStore) -> Self {
        Self { store: Mutex::new(store) }
    }
}

/// CORS for a single origin with credentials allowed
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| Error::Config(format!("invalid allowed origin {:?}: {}", allowed_origin, e)))?;

    Ok(CorsLayer::new()
        // echoed only when the request origin matches
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn build_router(state: Arc<AppState>, allowed_origin: &str) -> Result<Router> {
    let api = Router::new()
        .route("/test", get(routes::test_api))
        .route("/contacts", get(routes::list_contacts).post(routes::create_contact))
        .route("/contacts/{id}", put(routes::update_contact).delete(routes::delete_contact))
        .layer(cors_layer(allowed_origin)?);

    Ok(Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn start_server(settings: &ServerSettings) -> anyhow::Result<()> {
    let store = ContactStore::open(&settings.database)?;
    tracing::info!("Opened {:?} ({} contacts)", settings.database, store.count()?);

    let state = Arc::new(AppState::new(store));
    let app = build_router(state, &settings.allowed_origin)?;

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {} (allowed origin {})", addr, settings.allowed_origin);
    crate::ui::header(&format!("Server running at http://{}", addr));

    axum::serve(listener, app).await?;

    Ok(())
}
