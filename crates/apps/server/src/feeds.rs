use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use mapview::{build_plate_layer, build_quake_layer, MapApp, PlateLayerDoc, QuakeLayerDoc};
use quakefeed::{parse_earthquakes, parse_plate_boundaries};
use symbology::{legend_rows, LegendRow};

use crate::AppState;

fn api_error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message.into() })))
}

/// Map bootstrap document: viewport, basemaps, overlays, controls, legend.
pub async fn get_map_config(State(state): State<AppState>) -> Json<MapApp> {
    Json((*state.map).clone())
}

pub async fn get_legend() -> Json<Vec<LegendRow>> {
    Json(legend_rows())
}

pub async fn get_earthquake_layer(
    State(state): State<AppState>,
) -> Result<Json<QuakeLayerDoc>, (StatusCode, Json<Value>)> {
    let text = fetch_feed_text(&state, &state.quake_feed_url).await?;
    let quakes = parse_earthquakes(&text).map_err(|e| {
        warn!("earthquake feed parse failed: {e}");
        api_error(
            StatusCode::BAD_GATEWAY,
            format!("Earthquake feed unusable: {e}"),
        )
    })?;

    Ok(Json(build_quake_layer(&quakes)))
}

pub async fn get_plate_layer(
    State(state): State<AppState>,
) -> Result<Json<PlateLayerDoc>, (StatusCode, Json<Value>)> {
    let text = fetch_feed_text(&state, &state.plates_feed_url).await?;
    let boundaries = parse_plate_boundaries(&text).map_err(|e| {
        warn!("plate feed parse failed: {e}");
        api_error(StatusCode::BAD_GATEWAY, format!("Plate feed unusable: {e}"))
    })?;

    Ok(Json(build_plate_layer(&boundaries)))
}

/// One upstream attempt, no retry. A failed fetch fails this layer's
/// request and nothing else; the other overlay is served independently.
async fn fetch_feed_text(
    state: &AppState,
    url: &str,
) -> Result<String, (StatusCode, Json<Value>)> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Only http(s) feed URLs are allowed",
        ));
    }

    let resp = state
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("Feed fetch failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(api_error(
            StatusCode::BAD_GATEWAY,
            format!("Upstream HTTP {}", status.as_u16()),
        ));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| api_error(StatusCode::BAD_GATEWAY, format!("Feed read failed: {e}")))?;

    if bytes.len() > state.feed_max_bytes {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Feed payload too large (max {} bytes)", state.feed_max_bytes),
        ));
    }

    String::from_utf8(bytes.to_vec()).map_err(|_| {
        api_error(
            StatusCode::BAD_GATEWAY,
            "Feed response was not valid UTF-8",
        )
    })
}
