//! End-to-end tests for the two endpoints, driving the router directly and
//! pointing the upstream clients at in-process mock servers.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use praiamar_lib::config::{Config, ServerConfig, UpstreamConfig};
use praiamar_lib::routes;
use praiamar_lib::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Base URL that refuses connections immediately.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn test_config(brasilapi_base: &str, tabuamare_base: &str) -> Config {
    Config {
        server: ServerConfig {
            bind: "127.0.0.1:0".to_string(),
        },
        upstream: UpstreamConfig {
            brasilapi_base: brasilapi_base.to_string(),
            tabuamare_base: tabuamare_base.to_string(),
            timeout_secs: 2,
        },
    }
}

fn app(config: &Config) -> Router {
    routes::router(AppState::new(config).unwrap())
}

/// Serve a mock upstream on an ephemeral port, returning its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn sample_bulletin() -> Value {
    json!({
        "cidade": "Recife",
        "estado": "PE",
        "atualizado_em": "2024-12-15",
        "ondas": [
            {
                "data": "15/12/2024",
                "dados_ondas": [
                    {
                        "vento": 10.0,
                        "direcao_vento": "E",
                        "direcao_vento_desc": "Leste",
                        "altura_onda": 0.3,
                        "direcao_onda": "ESE",
                        "direcao_onda_desc": "Lés-sudeste",
                        "agitacao": "Fraco",
                        "hora": "00Z"
                    },
                    {
                        "vento": 22.0,
                        "direcao_vento": "SE",
                        "direcao_vento_desc": "Sudeste",
                        "altura_onda": 1.2,
                        "direcao_onda": "SE",
                        "direcao_onda_desc": "Sudeste",
                        "agitacao": "Moderado",
                        "hora": "12Z"
                    }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn weather_without_parameters_lists_available_stations() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
    assert_eq!(body["available_cities"].as_array().unwrap().len(), 9);
    assert_eq!(body["available_beaches"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn weather_unknown_beach_lists_available_stations() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather?beach=atlantida-perdida").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("waves").is_none());
    assert!(body["available_cities"].is_array());
}

#[tokio::test]
async fn weather_success_shapes_bulletin() {
    let upstream = spawn_upstream(Router::new().route(
        "/cptec/v1/ondas/{code}/{days}",
        get(|| async { Json(sample_bulletin()) }),
    ))
    .await;

    let config = test_config(&upstream, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather?city=recife&days=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "cptec_ondas");
    assert_eq!(body["city"], "Recife");
    assert_eq!(body["state"], "PE");
    assert_eq!(body["city_code"], 241);
    assert_eq!(body["forecast_days"], 1);

    let conditions = body["waves"][0]["conditions"].as_array().unwrap();
    assert_eq!(conditions.len(), 2);
    assert_eq!(conditions[0]["time"], "00Z");
    assert_eq!(conditions[0]["wind_speed_kmh"], 10.0);
    assert_eq!(
        conditions[0]["recommendation"],
        "Excelente para banho e atividades aquáticas leves"
    );

    // no beach parameter, so no beach summary
    assert!(body["beach_conditions"].is_null());
}

#[tokio::test]
async fn weather_beach_parameter_builds_beach_summary() {
    let upstream = spawn_upstream(Router::new().route(
        "/cptec/v1/ondas/{code}/{days}",
        get(|| async { Json(sample_bulletin()) }),
    ))
    .await;

    let config = test_config(&upstream, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather?beach=boa-viagem").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "cptec_ondas");

    // midday 12Z sample drives the summary
    let summary = &body["beach_conditions"]["summary"];
    assert_eq!(body["beach_conditions"]["beach"], "boa-viagem");
    assert_eq!(summary["sea_state"], "Moderado");
    assert_eq!(summary["wave_height"], "1.2m");
}

#[tokio::test]
async fn weather_degrades_to_general_forecast() {
    let upstream = spawn_upstream(
        Router::new()
            .route(
                "/cptec/v1/ondas/{code}/{days}",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/cptec/v1/cidade/{code}",
                get(|| async { Json(json!({ "clima": [{ "data": "2024-12-15" }] })) }),
            ),
    )
    .await;

    let config = test_config(&upstream, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather?city=recife&days=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "cptec_forecast");
    assert_eq!(body["city"], "Recife");
    assert_eq!(body["city_code"], 241);
    assert!(body["note"].is_string());
    assert_eq!(body["data"]["clima"][0]["data"], "2024-12-15");
}

#[tokio::test]
async fn weather_with_both_upstreams_down_is_503() {
    let upstream = spawn_upstream(
        Router::new()
            .route(
                "/cptec/v1/ondas/{code}/{days}",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/cptec/v1/cidade/{code}",
                get(|| async { StatusCode::BAD_GATEWAY }),
            ),
    )
    .await;

    let config = test_config(&upstream, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather?city=recife").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["city"], "Recife");
    assert_eq!(body["city_code"], 241);
}

#[tokio::test]
async fn weather_connect_failure_is_500() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/weather?city=recife").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn tides_without_parameters_lists_ports() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/tides").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
    assert_eq!(body["available_ports"].as_array().unwrap().len(), 3);
    assert_eq!(body["beach_port_mapping"].as_object().unwrap().len(), 19);
    assert!(body.get("tides").is_none());
}

#[tokio::test]
async fn tides_unknown_beach_lists_ports() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/tides?beach=unknown-xyz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(body.get("tides").is_none());
}

#[tokio::test]
async fn tides_fall_back_to_calculated_model() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/tides?port=tamandare&date=2024-12-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "calculated");
    assert_eq!(body["port"], "Tamandaré");
    assert_eq!(body["date"], "2024-12-15");
    assert!(body["disclaimer"].is_string());

    let tides = body["tides"].as_array().unwrap();
    assert_eq!(tides.len(), 4);
    let highs = tides.iter().filter(|t| t["type"] == "high").count();
    assert_eq!(highs, 2);
}

#[tokio::test]
async fn tides_beach_resolves_to_nearest_port() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) =
        get_json(app(&config), "/tides?beach=praia-de-carneiros&date=2024-12-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "calculated");
    assert_eq!(body["port"], "Tamandaré");
    assert_eq!(body["beach"], "praia-de-carneiros");
}

#[tokio::test]
async fn tides_upstream_payload_passes_through() {
    let upstream = spawn_upstream(Router::new().route(
        "/tides",
        get(|| async { Json(json!({ "table": [1, 2, 3] })) }),
    ))
    .await;

    let config = test_config(UNREACHABLE, &upstream);
    let (status, body) = get_json(app(&config), "/tides?port=recife&date=2024-12-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "tabuamare");
    assert_eq!(body["port"], "Porto do Recife");
    assert_eq!(body["data"]["table"], json!([1, 2, 3]));
    assert!(body.get("tides").is_none());
}

#[tokio::test]
async fn tides_invalid_date_on_calculated_path_is_500() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/tides?port=recife&date=not-a-date").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Data inválida"));
}

#[tokio::test]
async fn status_endpoint_answers_ok() {
    let config = test_config(UNREACHABLE, UNREACHABLE);
    let (status, body) = get_json(app(&config), "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let config = test_config(UNREACHABLE, UNREACHABLE);

    let response = app(&config)
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/weather")
                .header("origin", "https://praias.example")
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
