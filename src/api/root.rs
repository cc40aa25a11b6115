use actix_web::{get, HttpResponse, Responder};

pub const LIVENESS_MESSAGE: &str = "Online book shop Server is Up & Running";

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Liveness message", body = String, content_type = "text/plain")
    )
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}
