use axum::{
    extract::{rejection::JsonRejection, Multipart, Path, Query, State},
    Json,
};
use itertools::Itertools;
use shopapp_proto::dto::{CategoryDto, FieldViolation, PageQuery, ValidateDto};

use super::{multipart::ProductForm, SharedServerState};

use crate::{Error, Result};

fn ensure_valid(violations: Vec<FieldViolation>) -> Result<()> {
    if violations.is_empty() {
        return Ok(());
    }
    log::warn!(
        "Rejected fields: {}",
        violations.iter().map(|v| &v.field).unique().join(", ")
    );
    Err(Error::Validation(violations))
}

pub async fn get_all_categories(Query(query): Query<PageQuery>) -> String {
    log::debug!("list categories: {:?}", query);
    format!("All categories in page: {}", query.page)
}

pub async fn create_category(
    payload: std::result::Result<Json<CategoryDto>, JsonRejection>,
) -> Result<&'static str> {
    let Json(dto) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    ensure_valid(dto.violations())?;

    log::info!("Category added: {:?}", dto.name);
    Ok("Category added")
}

pub async fn update_category(Path(id): Path<i64>) -> String {
    format!("Category updated with id: {}", id)
}

pub async fn delete_category(Path(id): Path<i64>) -> String {
    format!("Category deleted with id: {}", id)
}

pub async fn get_all_products(Query(query): Query<PageQuery>) -> &'static str {
    log::debug!("list products: {:?}", query);
    "All products"
}

pub async fn get_product_by_id(Path(id): Path<String>) -> String {
    format!("Product with id {}", id)
}

pub async fn create_product(
    State(state): State<SharedServerState>,
    multipart: Multipart,
) -> Result<&'static str> {
    let form = ProductForm::from_multipart(multipart).await?;

    let mut violations = form.binding_violations;
    violations.extend(form.product.violations());
    ensure_valid(violations)?;

    let stored = state.ingestor.ingest_all(form.files).await?;
    log::info!(
        "Product {:?} created with {} image(s): [{}]",
        form.product.name,
        stored.len(),
        stored.iter().join(", ")
    );
    Ok("Product created")
}

pub async fn delete_product(Path(id): Path<i64>) -> String {
    format!("Product deleted with id {}", id)
}
