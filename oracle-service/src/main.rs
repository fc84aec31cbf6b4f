use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use oracle_client::{OracleClient, OracleError, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
struct AppState {
    client: Arc<OracleClient>,
}

#[derive(Debug, Deserialize)]
struct ConnectionsRequest {
    from: String,
    to: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "oracle_service=debug,oracle_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("ORACLE_API_KEY")
        .map_err(|_| anyhow::anyhow!("ORACLE_API_KEY not set"))?;

    let app_state = AppState {
        client: Arc::new(OracleClient::new(api_key)),
    };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/connections", post(find_connections))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;

    info!("Server running on http://0.0.0.0:3000");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn find_connections(
    State(state): State<AppState>,
    Json(request): Json<ConnectionsRequest>,
) -> Result<Json<Response>, (StatusCode, Json<Value>)> {
    info!("Connections request: {:?}", request);

    match state
        .client
        .find_connections(&request.from, &request.to)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(OracleError::InvalidQuery(errors)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        )),
        Err(err) => {
            error!("Failed to reach the oracle: {}", err);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            ))
        }
    }
}
