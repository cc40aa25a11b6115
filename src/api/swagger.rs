use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Online Book Shop API",
        version = "1.0.0",
        description = "CRUD endpoints over the users, category and book collections.\n\nEvery successful call answers 200: a missing document is returned as `null` and deletes report `deletedCount`."
    ),
    paths(
        // Health
        crate::api::root::index,
        crate::api::health::health_check,

        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Categories
        crate::api::categories::list_categories,
        crate::api::categories::get_category,
        crate::api::categories::create_category,
        crate::api::categories::update_category,
        crate::api::categories::delete_category,

        // Books
        crate::api::books::list_books,
        crate::api::books::get_book,
        crate::api::books::create_book,
        crate::api::books::update_book,
        crate::api::books::delete_book,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::User,
            crate::models::UserUpdate,
            crate::models::Category,
            crate::models::CategoryUpdate,
            crate::models::Book,
            crate::models::BookUpdate,
            crate::store::InsertAck,
            crate::store::UpdateAck,
            crate::store::DeleteAck,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database health."),
        (name = "Users", description = "Users keyed by their externally issued uid."),
        (name = "Categories", description = "Book categories keyed by ObjectId."),
        (name = "Books", description = "Books keyed by ObjectId. The category field is a loose reference."),
    )
)]
pub struct ApiDoc;
