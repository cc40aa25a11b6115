pub mod books;
pub mod categories;
pub mod health;
pub mod root;
pub mod swagger;
pub mod users;

use crate::utils::AppError;
use actix_web::web;

/// Malformed or non-object JSON bodies become `AppError::InvalidRequest`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}

/// Route table. Expects a `web::Data<dyn DocumentStore>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(root::index)
        .service(health::health_check)
        // Users
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        // Categories
        .service(categories::list_categories)
        .service(categories::get_category)
        .service(categories::create_category)
        .service(categories::update_category)
        .service(categories::delete_category)
        // Books
        .service(books::list_books)
        .service(books::get_book)
        .service(books::create_book)
        .service(books::update_book)
        .service(books::delete_book);
}
