use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use serde_json::json;

use villa_perez_client::{ApiClient, ApiConfig, SessionStore};

/// A canned Villa Perez backend bound to an ephemeral port. Handlers mirror
/// the real API's quirks: envelope-wrapped villas, bare-array bookings,
/// drifting field names, and an unavailable-dates endpoint that errors for
/// one unit so fail-open paths get exercised.
pub struct TestBackend {
    pub base_url: String,
}

impl TestBackend {
    pub fn client(&self) -> (ApiClient, Arc<SessionStore>) {
        let session = Arc::new(SessionStore::new());
        let config = ApiConfig::with_base_url(&self.base_url);
        let client = ApiClient::new(&config, session.clone());
        (client, session)
    }
}

pub async fn spawn_backend() -> TestBackend {
    let _ = env_logger::builder().is_test(true).try_init();

    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test port");
    let port = listener
        .local_addr()
        .expect("test listener has no address")
        .port();

    let server = HttpServer::new(|| {
        App::new()
            .route("/api/login", web::post().to(login))
            .route("/api/logout", web::post().to(logout))
            .route("/api/villas", web::get().to(list_villas))
            .route("/api/villas/{id}", web::get().to(villa_by_id))
            .route("/api/unavailable-dates", web::get().to(unavailable_dates))
            .route("/api/bookings", web::get().to(list_bookings))
            .route("/api/bookings", web::post().to(create_booking))
            .route("/api/bookings/{id}", web::delete().to(cancel_booking))
            .route("/api/notifications", web::get().to(list_notifications))
            .route(
                "/api/notifications/mark-all-read",
                web::patch().to(mark_notification_read),
            )
            .route(
                "/api/notifications/{id}/read",
                web::patch().to(mark_notification_read),
            )
            .route(
                "/api/reschedule-requests",
                web::post().to(submit_reschedule),
            )
            .route(
                "/api/reschedule-requests/booking/{id}",
                web::get().to(reschedule_requests_for_booking),
            )
            .route("/api/feedback", web::post().to(submit_feedback))
            .route("/api/user", web::get().to(current_user))
            .route("/api/users/{id}", web::patch().to(update_user))
            .route("/api/announcements", web::get().to(announcements))
            .route("/api/echo-auth", web::get().to(echo_auth))
    })
    .listen(listener)
    .expect("failed to listen on test port")
    .workers(1)
    .run();

    actix_web::rt::spawn(server);

    TestBackend {
        base_url: format!("http://127.0.0.1:{}", port),
    }
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(body: web::Json<LoginBody>) -> impl Responder {
    if body.email == "maria@example.com" && body.password == "secret1" {
        // older deployments call the field auth_token
        HttpResponse::Ok().json(json!({"auth_token": "tok-live"}))
    } else {
        HttpResponse::Unauthorized().json(json!({"message": "Invalid credentials"}))
    }
}

async fn logout() -> impl Responder {
    HttpResponse::Ok().finish()
}

async fn list_villas() -> impl Responder {
    // unit 3 uses the current field names, unit 9 the legacy ones
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": [
            {
                "id": 3,
                "name": "Rose Villa",
                "type": "Room",
                "description": "Garden view room",
                "price": 2600,
                "image": "/storage/rose.jpg",
                "maxGuests": 4,
                "amenities": ["WiFi", "Aircon"],
                "status": "Available"
            },
            {
                "rc_id": 9,
                "name": "Orchid Cottage",
                "type": "cottage",
                "description": "Poolside cottage",
                "price_per_night": 1800,
                "image_url": "https://cdn.example.com/orchid.jpg",
                "capacity": 6,
                "status": "Available"
            },
            {
                "id": 12,
                "name": "Fiesta Pavilion",
                "type": "party-space",
                "price": 8000,
                "maxGuests": 40,
                "status": "Maintenance"
            }
        ]
    }))
}

async fn villa_by_id() -> impl Responder {
    // the deployed backend predates the single-villa endpoint
    HttpResponse::NotFound().json(json!({"message": "Not found"}))
}

#[derive(Debug, Deserialize)]
struct UnavailableQuery {
    rc_id: i64,
}

async fn unavailable_dates(query: web::Query<UnavailableQuery>) -> impl Responder {
    match query.rc_id {
        3 => HttpResponse::Ok().json(json!({
            "success": true,
            "unavailable_dates": ["2025-06-11"]
        })),
        7 => HttpResponse::InternalServerError().json(json!({"message": "calendar offline"})),
        _ => HttpResponse::Ok().json(json!({
            "success": true,
            "unavailable_dates": []
        })),
    }
}

async fn list_bookings() -> impl Responder {
    HttpResponse::Ok().json(json!([
        {
            "id": 17,
            "rc_id": 3,
            "name": "Maria Perez",
            "contact": "+63 917 555 0199",
            "check_in": "2025-06-10 14:00:00",
            "check_out": "2025-06-13 11:00:00",
            "pax": 2,
            "status": "approved"
        }
    ]))
}

async fn create_booking(body: web::Json<serde_json::Value>) -> impl Responder {
    if body.get("rc_id").and_then(|v| v.as_i64()) == Some(99) {
        return HttpResponse::UnprocessableEntity()
            .json(json!({"message": "The selected villa/cottage does not exist."}));
    }
    HttpResponse::Ok().json(json!({"id": 101, "message": "Booking created"}))
}

async fn cancel_booking() -> impl Responder {
    HttpResponse::Ok().json(json!({"message": "Booking cancelled"}))
}

async fn list_notifications() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": [
            {
                "id": 12,
                "user_id": 5,
                "title": "Booking approved",
                "message": "See you on June 10!",
                "type": "booking",
                "status": "unread",
                "created_at": "2025-06-01 09:00:00"
            }
        ]
    }))
}

async fn mark_notification_read() -> impl Responder {
    // the real endpoint answers 200 with no body
    HttpResponse::Ok().finish()
}

async fn submit_reschedule(body: web::Json<serde_json::Value>) -> impl Responder {
    let carries_house_times = body
        .get("new_check_in")
        .and_then(|v| v.as_str())
        .is_some_and(|v| v.ends_with("14:00:00"))
        && body
            .get("new_check_out")
            .and_then(|v| v.as_str())
            .is_some_and(|v| v.ends_with("11:00:00"));
    if !carries_house_times {
        return HttpResponse::UnprocessableEntity()
            .json(json!({"message": "Malformed reschedule dates"}));
    }
    HttpResponse::Ok().json(json!({"message": "Reschedule request submitted"}))
}

async fn reschedule_requests_for_booking() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": [
            {
                "id": 31,
                "booking_id": 17,
                "new_check_in": "2025-07-01 14:00:00",
                "new_check_out": "2025-07-04 11:00:00",
                "reason": "Typhoon forecast",
                "status": "pending"
            }
        ]
    }))
}

async fn submit_feedback(body: web::Json<serde_json::Value>) -> impl Responder {
    match body.get("rating").and_then(|v| v.as_u64()) {
        Some(1..=5) => HttpResponse::Ok().json(json!({"message": "Feedback submitted"})),
        _ => HttpResponse::UnprocessableEntity().json(json!({"message": "Invalid rating"})),
    }
}

async fn update_user(
    path: web::Path<i64>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "id": path.into_inner(),
        "name": body.get("name").cloned().unwrap_or_default(),
        "email": body.get("email").cloned().unwrap_or_default(),
        "phone": body.get("phone").cloned()
    }))
}

async fn current_user(req: HttpRequest) -> impl Responder {
    if req.headers().get("Authorization").is_none() {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthenticated."}));
    }
    HttpResponse::Ok().json(json!({
        "id": 5,
        "name": "Maria Perez",
        "email": "maria@example.com",
        "phone": "+63 917 555 0199"
    }))
}

async fn announcements(req: HttpRequest) -> impl Responder {
    // the public endpoint must be called without credentials
    if req.headers().get("Authorization").is_some() {
        return HttpResponse::InternalServerError()
            .json(json!({"message": "unexpected credentials on public endpoint"}));
    }
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": [
            {
                "id": 1,
                "title": "Pool reopening",
                "content": "The lagoon pool reopens June 1.",
                "is_active": true,
                "priority": 2,
                "created_at": "2025-05-20 08:00:00"
            }
        ]
    }))
}

async fn echo_auth(req: HttpRequest) -> impl Responder {
    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());
    HttpResponse::Ok().json(json!({ "authorization": authorization }))
}
