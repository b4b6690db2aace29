//! Product inventory endpoints

use actix_web::{web, HttpResponse};
use ps_core::repositories::{ProductRepository, UserRepository};
use ps_shared::PageParams;
use serde::Deserialize;
use validator::Validate;

use super::parse_id;
use crate::app::AppState;
use crate::dto::product::ProductRequest;
use crate::handlers::{handle_domain_error, validation_error_response};

/// Raw paging parameters; unparsable values fall back to the defaults
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Handler for GET /api/products?limit&offset
///
/// # Response
///
/// ```json
/// { "items": [...], "total": 42, "limit": 20, "offset": 0 }
/// ```
pub async fn list_products<U, P>(
    state: web::Data<AppState<U, P>>,
    query: web::Query<ListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let page = PageParams::from_query(query.limit.as_deref(), query.offset.as_deref());

    match state.product_service.list(page).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/products
pub async fn create_product<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<ProductRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.product_service.create(request.into()).await {
        Ok(product) => HttpResponse::Created().json(product),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/products/{id}
pub async fn get_product<U, P>(
    state: web::Data<AppState<U, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.product_service.get(id).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PUT /api/products/{id}
///
/// Full overwrite: the body carries every mutable field.
pub async fn update_product<U, P>(
    state: web::Data<AppState<U, P>>,
    path: web::Path<String>,
    request: web::Json<ProductRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.product_service.update(id, request.into()).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/products/{id}
pub async fn delete_product<U, P>(
    state: web::Data<AppState<U, P>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.product_service.delete(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => handle_domain_error(e),
    }
}
