use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    message: &'static str,
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK",
        message: "Backend server is running",
    })
}
