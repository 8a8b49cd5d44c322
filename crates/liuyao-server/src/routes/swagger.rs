//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    DivinationResponse, DivinationType, EnhancedDivinationRequest, HexagramResponse,
    HexagramSummary, LegacyDivinationResponse, LineResponse, LunarResponse, PillarsResponse,
    QueryTimeResponse, TimeDivinationRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::divination::create_divination,
        super::divination::create_enhanced_divination,
    ),
    info(
        title = "Liu Yao API",
        version = "0.2.0",
        description = "六爻 (Liu Yao) - Six-line hexagram divination API\n\nCasts an original hexagram (本卦) and its changed hexagram (变卦) from a moment, six hand-cast lines or four trigram names.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Divination", description = "Divination (起卦) - Hexagram casting and annotation"),
    ),
    components(
        schemas(
            // Requests
            DivinationType,
            TimeDivinationRequest,
            EnhancedDivinationRequest,
            // Responses
            PillarsResponse,
            LunarResponse,
            QueryTimeResponse,
            LineResponse,
            HexagramResponse,
            DivinationResponse,
            HexagramSummary,
            LegacyDivinationResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_divination_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/divination"));
        assert!(doc.paths.paths.contains_key("/enhanced-divination"));
    }
}
