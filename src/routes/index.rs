use actix_web::HttpResponse;

#[tracing::instrument(
    "Serving greeting page"
)]
pub async fn index() -> HttpResponse{
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<p> Hello World</p>")
}

#[tracing::instrument(
    "Checking if api is online"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().body("Working")
}
