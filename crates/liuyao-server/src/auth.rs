//! Simple API Key Authentication (Bearer Token or X-API-Key)

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

/// Header accepted as an alternative to `Authorization: Bearer`
pub const API_KEY_HEADER: &str = "x-api-key";

/// API Key from secrets
static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Initialize the API key
pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

/// Get the API key
fn get_api_key() -> Option<&'static str> {
    API_KEY.get().map(|s| s.as_str())
}

/// Check request headers against the expected key; `None` disables the check
pub fn authorize(headers: &HeaderMap, expected: Option<&str>) -> Result<(), StatusCode> {
    let api_key = match expected {
        Some(key) if !key.is_empty() => key,
        _ => return Ok(()),
    };

    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let x_api_key = headers.get(API_KEY_HEADER).and_then(|h| h.to_str().ok());

    let token = match (bearer, x_api_key) {
        (Some(header), _) if header.starts_with("Bearer ") => &header[7..],
        (_, Some(key)) => key,
        (Some(_), None) => {
            tracing::warn!("Invalid Authorization header format");
            return Err(StatusCode::UNAUTHORIZED);
        }
        (None, None) => {
            tracing::warn!("Missing API key");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if token == api_key {
        Ok(())
    } else {
        tracing::warn!("Invalid API key attempted");
        Err(StatusCode::UNAUTHORIZED)
    }
}

/// Authentication middleware
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    authorize(request.headers(), get_api_key())?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_disabled_without_key() {
        assert!(authorize(&HeaderMap::new(), None).is_ok());
        assert!(authorize(&HeaderMap::new(), Some("")).is_ok());
    }

    #[test]
    fn test_bearer_and_x_api_key() {
        let key = Some("secret");
        assert!(authorize(&headers(&[("authorization", "Bearer secret")]), key).is_ok());
        assert!(authorize(&headers(&[("x-api-key", "secret")]), key).is_ok());
        assert_eq!(
            authorize(&headers(&[("authorization", "Bearer wrong")]), key),
            Err(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            authorize(&headers(&[("authorization", "Basic secret")]), key),
            Err(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(authorize(&HeaderMap::new(), key), Err(StatusCode::UNAUTHORIZED));
    }
}
