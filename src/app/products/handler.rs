//! 商品 HTTP 处理器
//!
//! 每个处理器都是无状态的请求/响应映射：提取路径、查询或请求体参数，
//! 调用仓储，把结果映射成状态码和 JSON。路由表在 [`routes`] 中显式注册。

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::model::Product;
use super::repository::ProductRepository;
use crate::core::error::ApiError;

/// 应用状态：仓储通过构造注入，处理器只持有 trait 对象
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProductRepository>,
}

/// 查询参数 `?productName=...&price=...`，两者都可省略
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub product_name: Option<String>,
    pub price: Option<f64>,
}

/// 商品路由表
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/products", get(find_all).post(save_new_product))
        .route("/api/v1/products/bulk", post(bulk_insert))
        .route("/api/v1/products/findByPrice/:price", get(find_by_price))
        .route(
            "/api/v1/products/findByPriceOrName",
            get(find_by_price_or_name),
        )
        .route("/api/v1/products/findByName", get(find_by_name))
        .route(
            "/api/v1/products/:id",
            get(find_by_id).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Product not found for this id :: {}", id))
}

/// GET /api/v1/products
async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.repository.find_all().await?;
    Ok(Json(products))
}

/// POST /api/v1/products
async fn save_new_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let saved = state.repository.save(product).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/products/:id
async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PUT /api/v1/products/:id
///
/// 全字段覆盖更新：加载已有记录，用请求体逐字段覆盖后保存。
/// 主键沿用已有记录，请求体里的 `productId` 被忽略。
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(incoming): Json<Product>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let mut existing = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    existing.overwrite_from(incoming);
    let saved = state.repository.save(existing).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// POST /api/v1/products/bulk
async fn bulk_insert(
    State(state): State<AppState>,
    Json(products): Json<Vec<Product>>,
) -> Result<(StatusCode, Json<Vec<Product>>), ApiError> {
    let saved = state.repository.save_all(products).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/products/:id
///
/// 显式检查记录是否存在，缺失时返回 404 而不是静默成功。
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let product = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.repository.delete(&product).await?;
    Ok(Json(json!({ "deleted": true })))
}

/// GET /api/v1/products/findByPrice/:price
async fn find_by_price(
    State(state): State<AppState>,
    Path(price): Path<f64>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .repository
        .find_by_price_greater_than_equal(price)
        .await?;
    Ok(Json(products))
}

/// GET /api/v1/products/findByPriceOrName?productName=&price=
///
/// 两个参数都可省略：名称缺省为空串，价格缺省为 0.0，按字面值匹配。
async fn find_by_price_or_name(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let name = query.product_name.unwrap_or_default();
    let price = query.price.unwrap_or(0.0);
    let products = state
        .repository
        .find_by_product_name_or_price(&name, price)
        .await?;
    Ok(Json(products))
}

/// GET /api/v1/products/findByName?productName=
///
/// 只按名称做子串匹配；`price` 参数接受但不参与查询。
async fn find_by_name(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let name = query.product_name.unwrap_or_default();
    let products = state.repository.find_by_product_name_like(&name).await?;
    Ok(Json(products))
}
