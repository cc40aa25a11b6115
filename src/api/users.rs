use crate::{
    models::{User, UserUpdate},
    services::user_service,
    store::{DeleteAck, DocumentStore, InsertAck, UpdateAck},
    utils::AppError,
};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{Map, Value};

/// GET /users - Lists every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every user, in insertion order", body = Vec<User>)
    )
)]
#[get("/users")]
pub async fn list_users(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /users - Listing users");
    let users = user_service::list_users(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /user/{uid} - Finds a user by uid (null when missing)
#[utoipa::path(
    get,
    path = "/user/{uid}",
    tag = "Users",
    params(("uid" = String, Path, description = "Externally issued user id")),
    responses(
        (status = 200, description = "The user, or null", body = User)
    )
)]
#[get("/user/{uid}")]
pub async fn get_user(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uid = path.into_inner();
    log::info!("🔍 GET /user/{}", uid);

    let user = user_service::get_user(store.get_ref(), &uid).await?;
    log::debug!("{}", user);
    Ok(HttpResponse::Ok().json(user))
}

/// POST /users - Stores the payload as sent
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertAck),
        (status = 400, description = "Body is not an object or has mistyped fields")
    )
)]
#[post("/users")]
pub async fn create_user(
    store: web::Data<dyn DocumentStore>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    log::info!("📝 POST /users - Creating user");
    log::debug!("{:?}", payload);

    let ack = user_service::create_user(store.get_ref(), payload).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PUT /user/{uid} - Sets the whitelisted fields, creating the user when missing
#[utoipa::path(
    put,
    path = "/user/{uid}",
    tag = "Users",
    params(("uid" = String, Path, description = "Externally issued user id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Upsert acknowledgment", body = UpdateAck),
        (status = 400, description = "Mistyped fields")
    )
)]
#[put("/user/{uid}")]
pub async fn update_user(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
    body: web::Json<UserUpdate>,
) -> Result<HttpResponse, AppError> {
    let uid = path.into_inner();
    log::info!("✏️ PUT /user/{}", uid);
    log::debug!("{:?}", body);

    let ack = user_service::update_user(store.get_ref(), &uid, &body).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /user/{uid} - Removes at most one user
#[utoipa::path(
    delete,
    path = "/user/{uid}",
    tag = "Users",
    params(("uid" = String, Path, description = "Externally issued user id")),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAck)
    )
)]
#[delete("/user/{uid}")]
pub async fn delete_user(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uid = path.into_inner();
    log::info!("🗑️ DELETE /user/{}", uid);

    let ack = user_service::delete_user(store.get_ref(), &uid).await?;
    Ok(HttpResponse::Ok().json(ack))
}
