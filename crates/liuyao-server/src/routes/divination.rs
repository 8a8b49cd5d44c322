//! Divination (起卦) Routes
//!
//! HTTP handlers that delegate to DivinationService for the casting itself.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDateTime;

use liuyao::{parse_civil_time, parse_line_specs, DivinationRequest, DomainError, TrigramNames};

use crate::models::{
    DivinationResponse, DivinationType, EnhancedDivinationRequest,
    LegacyDivinationResponse, TimeDivinationRequest,
};
use crate::AppState;

/// Map a domain failure to an HTTP status
fn domain_error(e: DomainError) -> (StatusCode, String) {
    if e.is_client_error() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else {
        tracing::warn!("Divination failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An internal error occurred: {}", e),
        )
    }
}

fn target_time(raw: Option<&str>) -> Result<Option<NaiveDateTime>, (StatusCode, String)> {
    raw.filter(|s| !s.trim().is_empty())
        .map(parse_civil_time)
        .transpose()
        .map_err(domain_error)
}

/// Build the domain request for an enhanced payload
fn to_domain_request(
    payload: EnhancedDivinationRequest,
) -> Result<DivinationRequest, (StatusCode, String)> {
    let at = target_time(payload.target_time.as_deref())?;

    let request = match payload.divination_type {
        DivinationType::Time => DivinationRequest::Time { at },
        DivinationType::Manual => {
            let lines = payload
                .manual_yaos
                .map(|specs| parse_line_specs(specs.as_slice()))
                .transpose()
                .map_err(domain_error)?;
            DivinationRequest::Manual { lines, at }
        }
        DivinationType::Name => DivinationRequest::Name {
            names: TrigramNames {
                upper_original: payload.upper_original,
                lower_original: payload.lower_original,
                upper_changed: payload.upper_changed,
                lower_changed: payload.lower_changed,
            },
            at,
        },
    };

    Ok(request)
}

/// Time-based divination (legacy)
#[utoipa::path(
    post,
    path = "/divination",
    request_body = TimeDivinationRequest,
    responses(
        (status = 200, description = "Divination cast", body = LegacyDivinationResponse),
        (status = 400, description = "Invalid target_time"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Divination"
)]
pub async fn create_divination(
    State(state): State<AppState>,
    Json(payload): Json<TimeDivinationRequest>,
) -> Result<Json<LegacyDivinationResponse>, (StatusCode, String)> {
    let at = target_time(payload.target_time.as_deref())?;

    let result = state
        .divination_service
        .divine(DivinationRequest::Time { at })
        .map_err(domain_error)?;

    Ok(Json(LegacyDivinationResponse::from(&result)))
}

/// Divination in time, manual or name mode
#[utoipa::path(
    post,
    path = "/enhanced-divination",
    request_body = EnhancedDivinationRequest,
    responses(
        (status = 200, description = "Divination cast", body = DivinationResponse),
        (status = 400, description = "Missing or invalid input for the selected mode"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Divination"
)]
pub async fn create_enhanced_divination(
    State(state): State<AppState>,
    Json(payload): Json<EnhancedDivinationRequest>,
) -> Result<Json<DivinationResponse>, (StatusCode, String)> {
    let request = to_domain_request(payload)?;

    let result = state
        .divination_service
        .divine(request)
        .map_err(domain_error)?;

    Ok(Json(DivinationResponse::from(&result)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/divination", post(create_divination))
        .route("/enhanced-divination", post(create_enhanced_divination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        let app = crate::app(AppState::new());
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_time_divination() {
        let (status, body) = post_json(
            "/enhanced-divination",
            json!({"divination_type": "time", "target_time": "2024-02-10T12:00:00"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: DivinationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.divination_type, DivinationType::Time);
        assert_eq!(response.original.binary, "011101");
        assert_eq!(response.original.name, "山水蒙");
        assert_eq!(response.changed.name, "山地剥");
        assert_eq!(response.moving_lines, vec![2]);
        assert_eq!(response.query_time.pillars.year, "甲辰");
        assert_eq!(response.query_time.lunar_label, "2024年1月1日 12时");
        assert_eq!(response.original.lines.len(), 6);
        assert_eq!(response.original.lines[0].spirit, "青龙");
    }

    #[tokio::test]
    async fn test_manual_divination() {
        let (status, body) = post_json(
            "/enhanced-divination",
            json!({
                "divination_type": "manual",
                "target_time": "2024-02-10T12:00:00",
                "manual_yaos": ["solid", "broken moving", "solid", "broken", "solid moving", "broken"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: DivinationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.original.binary, "101010");
        assert_eq!(response.changed.binary, "111000");
        assert_eq!(response.moving_lines, vec![2, 5]);
    }

    #[tokio::test]
    async fn test_manual_divination_missing_lines() {
        let (status, _) = post_json(
            "/enhanced-divination",
            json!({"divination_type": "manual", "target_time": "2024-02-10T12:00:00"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            "/enhanced-divination",
            json!({
                "divination_type": "manual",
                "target_time": "2024-02-10T12:00:00",
                "manual_yaos": ["solid", "wobbly", "solid", "broken", "solid", "broken"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_name_divination() {
        let (status, body) = post_json(
            "/enhanced-divination",
            json!({
                "divination_type": "name",
                "target_time": "2024-02-10T12:00:00",
                "upper_original": "乾",
                "lower_original": "坤",
                "upper_changed": "坤",
                "lower_changed": "乾"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: DivinationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.original.binary, "000111");
        assert_eq!(response.changed.binary, "111000");
        assert_eq!(response.moving_lines, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_name_divination_missing_field() {
        let (status, body) = post_json(
            "/enhanced-divination",
            json!({"divination_type": "name", "upper_original": "乾"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8_lossy(&body).contains("lower_original"));
    }

    #[tokio::test]
    async fn test_legacy_divination() {
        let (status, body) =
            post_json("/divination", json!({"target_time": "2024-02-10T12:00:00"})).await;
        assert_eq!(status, StatusCode::OK);

        let response: LegacyDivinationResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.hexagram.original, "山水蒙");
        assert_eq!(response.hexagram.moving_line, 2);
        assert_eq!(response.hexagram.house, "离宫");
    }

    #[tokio::test]
    async fn test_invalid_and_out_of_range_time() {
        let (status, _) = post_json("/divination", json!({"target_time": "soon"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            post_json("/divination", json!({"target_time": "1800-01-01T00:00:00"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
