//! HTTP surface: the weather and tides handlers.
//!
//! Each handler is a thin walk through the request pipeline: normalize,
//! resolve, fetch, fall back, shape. A request that resolves nothing gets a
//! 200 listing of the available stations rather than an error; degraded
//! upstreams are folded into alternate success shapes; only genuinely
//! unexpected failures escape as [`ApiError`] (500).
//!
//! CORS is permissive: these are public read-only endpoints consumed from
//! browsers.

use axum::extract::{Query, State};
use axum::http::{header, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::cptec::WaveForecast;
use crate::error::ApiError;
use crate::state::AppState;
use crate::{fallback, report, resolve, slug, stations};

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(weather))
        .route("/tides", get(tides))
        .route("/status", get(status))
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "API running" }))
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    city: Option<String>,
    beach: Option<String>,
    days: Option<String>,
}

async fn weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Response, ApiError> {
    let beach = query.beach.as_deref().filter(|s| !s.is_empty());
    let city_param = query.city.as_deref().filter(|s| !s.is_empty());
    let days = query.days.as_deref().filter(|s| !s.is_empty()).unwrap_or("1");

    // Beach takes precedence over city when both are supplied
    let city_key = if let Some(beach) = beach {
        resolve::city_for_beach(stations::BEACH_TO_CITY, &slug::slugify(beach))
    } else if let Some(city) = city_param {
        resolve::city(stations::CITIES, &slug::slugify(city)).map(|c| c.slug)
    } else {
        None
    };

    let Some(city_key) = city_key else {
        return Ok(Json(weather_targets()).into_response());
    };

    let Some(city) = stations::city_by_slug(city_key) else {
        let slugs: Vec<&str> = stations::CITIES.iter().map(|c| c.slug).collect();
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "error": "Cidade não encontrada",
                "available_cities": slugs,
            })),
        )
            .into_response());
    };

    tracing::info!(city = city.name, code = city.code, days, "fetching wave forecast");

    match state.cptec.wave_forecast(city.code, days).await? {
        WaveForecast::Waves(bulletin) => {
            let city_name = bulletin
                .cidade
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(city.name);
            let state_name = bulletin
                .estado
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("PE");

            Ok(Json(json!({
                "success": true,
                "source": "cptec_ondas",
                "city": city_name,
                "state": state_name,
                "city_code": city.code,
                "updated_at": bulletin.atualizado_em,
                "forecast_days": bulletin.ondas.len(),
                "waves": report::shape_waves(&bulletin),
                "beach_conditions": beach.map(|b| report::beach_conditions(&bulletin, b)),
            }))
            .into_response())
        }
        WaveForecast::Forecast(data) => Ok(Json(json!({
            "success": true,
            "source": "cptec_forecast",
            "city": city.name,
            "city_code": city.code,
            "data": data,
            "note": "Dados de previsão geral (ondas não disponíveis)",
        }))
        .into_response()),
        WaveForecast::Unavailable => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "Dados meteorológicos não disponíveis para esta cidade",
                "city": city.name,
                "city_code": city.code,
            })),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
struct TidesQuery {
    beach: Option<String>,
    port: Option<String>,
    date: Option<String>,
}

async fn tides(
    State(state): State<AppState>,
    Query(query): Query<TidesQuery>,
) -> Result<Response, ApiError> {
    let beach = query.beach.as_deref().filter(|s| !s.is_empty());
    let port_param = query.port.as_deref().filter(|s| !s.is_empty());

    let port = if let Some(beach) = beach {
        resolve::port_for_beach(stations::BEACH_TO_PORT, &slug::beach_slug(beach))
            .and_then(stations::port_by_slug)
    } else if let Some(port) = port_param {
        resolve::port(stations::PORTS, &slug::slugify(port))
    } else {
        None
    };

    let Some(port) = port else {
        return Ok(Json(tide_targets()).into_response());
    };

    let date = query
        .date
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Utc::now().date_naive().to_string());

    tracing::info!(port = port.name, date = %date, "fetching tide table");

    match state.tabuamare.tide_table(port.name, &date).await {
        Ok(data) => Ok(Json(json!({
            "success": true,
            "source": "tabuamare",
            "port": port.name,
            "port_coordinates": { "lat": port.lat, "lon": port.lon },
            "date": date,
            "beach": beach,
            "data": data,
        }))
        .into_response()),
        Err(err) => {
            tracing::info!(error = %err, "tabuamare unavailable, using calculated tides");

            let target: NaiveDate = date.parse()?;
            let tides = fallback::approximate(target);

            Ok(Json(json!({
                "success": true,
                "source": "calculated",
                "port": port.name,
                "port_coordinates": { "lat": port.lat, "lon": port.lon },
                "date": date,
                "beach": beach,
                "tides": tides,
                "disclaimer": "Dados calculados por modelo simplificado. Para navegação, consulte a Marinha do Brasil.",
            }))
            .into_response())
        }
    }
}

/// The "available options" listing for an unresolved weather request.
fn weather_targets() -> Value {
    let cities: Vec<Value> = stations::CITIES
        .iter()
        .map(|c| json!({ "slug": c.slug, "name": c.name, "code": c.code }))
        .collect();

    let beaches: Vec<Value> = stations::BEACH_TO_CITY
        .iter()
        .map(|(beach, city)| {
            json!({
                "beach": beach,
                "city": stations::city_by_slug(city).map_or(*city, |c| c.name),
            })
        })
        .collect();

    json!({
        "success": true,
        "message": "Use ?city=recife ou ?beach=boa-viagem para obter dados meteorológicos",
        "available_cities": cities,
        "available_beaches": beaches,
    })
}

/// The "available options" listing for an unresolved tides request.
fn tide_targets() -> Value {
    let ports: Vec<Value> = stations::PORTS
        .iter()
        .map(|p| {
            json!({
                "slug": p.slug,
                "name": p.name,
                "coordinates": { "lat": p.lat, "lon": p.lon },
            })
        })
        .collect();

    let mapping: serde_json::Map<String, Value> = stations::BEACH_TO_PORT
        .iter()
        .map(|(beach, port)| ((*beach).to_string(), json!(port)))
        .collect();

    json!({
        "success": true,
        "message": "Use ?beach=boa-viagem ou ?port=recife para obter dados de marés",
        "available_ports": ports,
        "beach_port_mapping": mapping,
        "note": "API de tábua de marés externa - dados calculados baseados em modelos",
    })
}
