mod feeds;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mapview::{MapApp, MapOptions, Viewport};

const DEFAULT_QUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";
const DEFAULT_PLATES_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

#[derive(Clone)]
pub struct AppState {
    pub map: Arc<MapApp>,
    pub http: reqwest::Client,
    pub quake_feed_url: String,
    pub plates_feed_url: String,
    pub feed_max_bytes: usize,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("MAP_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9200".to_string())
        .parse()
        .expect("invalid MAP_ADDR");

    let options = MapOptions {
        viewport: Viewport::world(),
        default_basemap: env::var("MAP_DEFAULT_BASEMAP").unwrap_or_else(|_| "terrain".to_string()),
        mapbox_token: env::var("MAPBOX_TOKEN").unwrap_or_default(),
    };

    let state = AppState {
        map: Arc::new(MapApp::new(options)),
        http: reqwest::Client::new(),
        quake_feed_url: env::var("QUAKE_FEED_URL")
            .unwrap_or_else(|_| DEFAULT_QUAKE_FEED_URL.to_string()),
        plates_feed_url: env::var("PLATES_FEED_URL")
            .unwrap_or_else(|_| DEFAULT_PLATES_FEED_URL.to_string()),
        feed_max_bytes: env_var_usize("FEED_MAX_BYTES", 8 * 1024 * 1024),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/map/config", get(feeds::get_map_config))
        .route("/legend.json", get(feeds::get_legend))
        .route("/layers/earthquakes.json", get(feeds::get_earthquake_layer))
        .route("/layers/plates.json", get(feeds::get_plate_layer))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("map server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

fn env_var_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
