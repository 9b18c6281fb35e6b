use axum::Json;

use crate::models::catalog_models::{
    product_features, product_specs, ApiResponse, Feature, HealthInfo, SpecCategory,
};

pub async fn health_check() -> Json<ApiResponse<HealthInfo>> {
    Json(ApiResponse::message_with_data(
        "NOVA API is running",
        HealthInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "healthy".to_string(),
        },
    ))
}

pub async fn get_features() -> Json<ApiResponse<Vec<Feature>>> {
    Json(ApiResponse::data(product_features()))
}

pub async fn get_specs() -> Json<ApiResponse<Vec<SpecCategory>>> {
    Json(ApiResponse::data(product_specs()))
}
