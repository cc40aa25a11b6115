use crate::{
    models::{Category, CategoryUpdate},
    services::category_service,
    store::{DeleteAck, DocumentStore, InsertAck, UpdateAck},
    utils::AppError,
};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{Map, Value};

/// GET /category - Lists every category
#[utoipa::path(
    get,
    path = "/category",
    tag = "Categories",
    responses(
        (status = 200, description = "Every category, in insertion order", body = Vec<Category>)
    )
)]
#[get("/category")]
pub async fn list_categories(
    store: web::Data<dyn DocumentStore>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /category - Listing categories");
    let categories = category_service::list_categories(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /category/{id} - Finds a category by ObjectId (null when missing)
#[utoipa::path(
    get,
    path = "/category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ObjectId (hex)")),
    responses(
        (status = 200, description = "The category, or null", body = Category),
        (status = 400, description = "Malformed ObjectId")
    )
)]
#[get("/category/{id}")]
pub async fn get_category(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔍 GET /category/{}", id);

    let category = category_service::get_category(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// POST /category - Stores the payload as sent
#[utoipa::path(
    post,
    path = "/category",
    tag = "Categories",
    request_body = Category,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertAck),
        (status = 400, description = "Body is not an object or has mistyped fields")
    )
)]
#[post("/category")]
pub async fn create_category(
    store: web::Data<dyn DocumentStore>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    log::info!("📝 POST /category - Creating category");
    log::debug!("{:?}", payload);

    let ack = category_service::create_category(store.get_ref(), payload).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PUT /category/{id} - Sets name and photoUrl, creating the category when missing
#[utoipa::path(
    put,
    path = "/category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ObjectId (hex)")),
    request_body = CategoryUpdate,
    responses(
        (status = 200, description = "Upsert acknowledgment", body = UpdateAck),
        (status = 400, description = "Malformed ObjectId or mistyped fields")
    )
)]
#[put("/category/{id}")]
pub async fn update_category(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
    body: web::Json<CategoryUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("✏️ PUT /category/{}", id);
    log::debug!("{:?}", body);

    let ack = category_service::update_category(store.get_ref(), &id, &body).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /category/{id} - Removes at most one category
#[utoipa::path(
    delete,
    path = "/category/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ObjectId (hex)")),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAck),
        (status = 400, description = "Malformed ObjectId")
    )
)]
#[delete("/category/{id}")]
pub async fn delete_category(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /category/{}", id);

    let ack = category_service::delete_category(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(ack))
}
