use crate::{
    models::{Book, BookUpdate},
    services::book_service,
    store::{DeleteAck, DocumentStore, InsertAck, UpdateAck},
    utils::AppError,
};
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{Map, Value};

/// GET /book - Lists every book
#[utoipa::path(
    get,
    path = "/book",
    tag = "Books",
    responses(
        (status = 200, description = "Every book, in insertion order", body = Vec<Book>)
    )
)]
#[get("/book")]
pub async fn list_books(store: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /book - Listing books");
    let books = book_service::list_books(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(books))
}

/// GET /book/{id} - Finds a book by ObjectId (null when missing)
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ObjectId (hex)")),
    responses(
        (status = 200, description = "The book, or null", body = Book),
        (status = 400, description = "Malformed ObjectId")
    )
)]
#[get("/book/{id}")]
pub async fn get_book(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔍 GET /book/{}", id);

    let book = book_service::get_book(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(book))
}

/// POST /book - Stores the payload as sent; `category` is not checked
#[utoipa::path(
    post,
    path = "/book",
    tag = "Books",
    request_body = Book,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertAck),
        (status = 400, description = "Body is not an object or has mistyped fields")
    )
)]
#[post("/book")]
pub async fn create_book(
    store: web::Data<dyn DocumentStore>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    log::info!("📝 POST /book - Creating book");
    log::debug!("{:?}", payload);

    let ack = book_service::create_book(store.get_ref(), payload).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// PUT /book/{id} - Sets the nine whitelisted fields, creating the book when missing
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ObjectId (hex)")),
    request_body = BookUpdate,
    responses(
        (status = 200, description = "Upsert acknowledgment", body = UpdateAck),
        (status = 400, description = "Malformed ObjectId or mistyped fields")
    )
)]
#[put("/book/{id}")]
pub async fn update_book(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
    body: web::Json<BookUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("✏️ PUT /book/{}", id);
    log::debug!("{:?}", body);

    let ack = book_service::update_book(store.get_ref(), &id, &body).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /book/{id} - Removes at most one book
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "Books",
    params(("id" = String, Path, description = "Book ObjectId (hex)")),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAck),
        (status = 400, description = "Malformed ObjectId")
    )
)]
#[delete("/book/{id}")]
pub async fn delete_book(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /book/{}", id);

    let ack = book_service::delete_book(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

#[cfg(test)]
mod tests {
    use crate::api::configure;
    use crate::api::test_support::memory_store;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn dune() -> Value {
        json!({
            "name": "Dune",
            "author": "Frank Herbert",
            "photoUrl": "dune.png",
            "pageCount": 412,
            "rating": 4.7,
            "category": "64b7f0c2a1b2c3d4e5f60718",
            "publisher": "Chilton",
            "yearOfPublishing": 1965,
            "synopsis": "Spice.",
            "isbn": "978-0441013593"
        })
    }

    #[actix_web::test]
    async fn test_created_book_is_superset_of_payload() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post().uri("/book").set_json(dune()).to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let id = ack["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri(&format!("/book/{}", id)).to_request();
        let book: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(book["_id"], json!(id));
        for (key, value) in dune().as_object().unwrap() {
            assert_eq!(&book[key], value, "field {}", key);
        }
    }

    #[actix_web::test]
    async fn test_update_keeps_fields_outside_whitelist() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post().uri("/book").set_json(dune()).to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let id = ack["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/book/{}", id))
            .set_json(json!({ "rating": 5.0, "isbn": "overwritten?" }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["matchedCount"], 1);
        assert_eq!(ack["modifiedCount"], 1);

        let req = test::TestRequest::get().uri(&format!("/book/{}", id)).to_request();
        let book: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(book["rating"], 5.0);
        assert_eq!(book["isbn"], "978-0441013593");
        assert_eq!(book["author"], Value::Null);
    }

    #[actix_web::test]
    async fn test_put_same_values_as_created_is_not_a_modification() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let book = json!({
            "name": "Dune",
            "author": "Frank Herbert",
            "photoUrl": "dune.png",
            "pageCount": 412,
            "rating": 4,
            "category": "64b7f0c2a1b2c3d4e5f60718",
            "publisher": "Chilton",
            "yearOfPublishing": 1965,
            "synopsis": "Spice."
        });
        let req = test::TestRequest::post().uri("/book").set_json(&book).to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let id = ack["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/book/{}", id))
            .set_json(&book)
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["matchedCount"], 1);
        assert_eq!(ack["modifiedCount"], 0);
    }

    #[actix_web::test]
    async fn test_mistyped_update_is_bad_request() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/book/64b7f0c2a1b2c3d4e5f60718")
            .set_json(json!({ "pageCount": "lots" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/book").to_request();
        let books: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(books.is_empty());
    }
}
