//! HTTP API consumed by the weather page

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::{
    config::AppConfig,
    directory,
    models::WeatherSnapshot,
    station::{Station, Status},
    synth,
    upstream::{self, FetchOutcome},
};

/// Shared application state behind the router
pub struct AppState {
    pub config: AppConfig,
    pub station: Mutex<Station>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            station: Mutex::new(Station::new(directory::DEFAULT_CITY)),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/state", get(get_state))
        .route("/select", post(select_city))
        .route("/retry", post(retry_selection))
        .route("/weather", get(proxy_weather))
        .with_state(state)
}

#[derive(Deserialize)]
struct CityQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct CitiesReply {
    cities: Vec<&'static str>,
    popular: Vec<&'static str>,
}

/// Filter the directory. An empty or missing query returns the full list;
/// hiding the dropdown for an empty search box is the page's concern.
async fn get_cities(Query(query): Query<CityQuery>) -> Json<CitiesReply> {
    Json(CitiesReply {
        cities: directory::filter(&query.q),
        popular: directory::POPULAR_CITIES.to_vec(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateReply {
    selected_city: String,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<WeatherSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

fn state_reply(station: &Station) -> StateReply {
    StateReply {
        selected_city: station.selected_city().to_string(),
        status: station.status(),
        snapshot: station.snapshot().cloned(),
        error: station.error_message(),
    }
}

async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateReply> {
    let station = state.station.lock().await;
    Json(state_reply(&station))
}

#[derive(Deserialize)]
struct SelectRequest {
    city: String,
}

/// Select a city and synthesize a fresh snapshot for it
async fn select_city(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<StateReply>, StatusCode> {
    if !directory::contains(&request.city) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(run_selection(&state, request.city).await)
}

/// Re-run synthesis for the currently selected city (the "Try Again" button)
async fn retry_selection(State(state): State<Arc<AppState>>) -> Json<StateReply> {
    let city = state.station.lock().await.selected_city().to_string();
    run_selection(&state, city).await
}

/// The loading -> delay -> synthesize -> apply flow shared by select and
/// retry. The sleep emulates network latency; if a newer selection arrives
/// while this one is suspended, the result is returned to its caller but
/// does not overwrite the newer state.
#[tracing::instrument(skip(state, city), fields(city = %city))]
async fn run_selection(state: &AppState, city: String) -> Json<StateReply> {
    let ticket = state.station.lock().await.begin(&city);

    tokio::time::sleep(Duration::from_millis(state.config.synth.delay_ms)).await;
    let snapshot = synth::synthesize(&city);

    let mut station = state.station.lock().await;
    if station.complete(ticket, snapshot.clone()) {
        Json(state_reply(&station))
    } else {
        Json(StateReply {
            selected_city: city,
            status: Status::Loaded,
            snapshot: Some(snapshot),
            error: None,
        })
    }
}

#[derive(Deserialize)]
struct ProxyParams {
    lat: Option<String>,
    lon: Option<String>,
}

/// Proxy one current-weather call to the upstream provider. Answers 400
/// when either coordinate is missing, the upstream's status with a generic
/// body when it errors, and 500 on any other failure.
async fn proxy_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProxyParams>,
) -> (StatusCode, Json<Value>) {
    let (lat, lon) = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Latitude and longitude are required." })),
            );
        }
    };

    match upstream::fetch_current_weather(&state.config.upstream, &lat, &lon).await {
        Ok(FetchOutcome::Success(body)) => (StatusCode::OK, Json(body)),
        Ok(FetchOutcome::Failed(status)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(json!({ "error": "Failed to fetch weather data." })),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Weather proxy call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error." })),
            )
        }
    }
}
