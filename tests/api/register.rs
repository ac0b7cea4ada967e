use serde_json::Value;
use wiremock::matchers::{
    method,
    path,
};
use wiremock::{
    Mock,
    ResponseTemplate,
};

use crate::helpers::*;

#[actix_rt::test]
async fn register_returns_a_201_with_the_normalized_record() {
    let test_app = spawn_app().await;

    let response = test_app.register(&jane()).await;

    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Successfully registered for Intro to Rust! A confirmation email has been sent to \
         jane@x.com."
    );
    assert!(body["data"]["id"].is_i64());
    assert_eq!(body["data"]["student_name"], "Jane");
    assert_eq!(body["data"]["student_email"], "jane@x.com");
    assert_eq!(body["data"]["workshop_name"], "Intro to Rust");
    assert_eq!(body["data"]["mode"], "Online");
    assert!(body["data"]["registration_date"].is_string());
}

#[actix_rt::test]
async fn register_stores_a_normalized_row() {
    let test_app = spawn_app().await;

    test_app
        .register(&serde_json::json!({
            "student_name": "  Jane ",
            "student_email": " JANE@X.COM ",
            "workshop_name": " Intro to Rust",
            "mode": "Offline"
        }))
        .await;

    let (student_name, email, workshop_name, mode): (String, String, String, String) =
        sqlx::query_as(
            r#"SELECT "studentName", "emailId", "workshopName", "workshopMode"
               FROM workshop_registrations"#,
        )
        .fetch_one(&test_app.pool)
        .await
        .expect("Failed to fetch saved registration");
    assert_eq!(student_name, "Jane");
    assert_eq!(email, "jane@x.com");
    assert_eq!(workshop_name, "Intro to Rust");
    assert_eq!(mode, "Offline");
}

#[actix_rt::test]
async fn registered_id_is_returned_by_the_email_lookup() {
    let test_app = spawn_app().await;

    let created: Value = test_app.register(&jane()).await.json().await.unwrap();
    let response = test_app.registration_by_email("jane@x.com").await;

    assert_eq!(200, response.status().as_u16());
    let found: Value = response.json().await.unwrap();
    assert_eq!(found["data"]["id"], created["data"]["id"]);
    assert_eq!(found["data"]["mode"], "Online");
    assert_eq!(found["data"]["student_email"], "jane@x.com");
}

#[actix_rt::test]
async fn register_returns_a_400_with_missing_field() {
    let test_app = spawn_app().await;
    let invalid_data = vec![
        (serde_json::json!({}), "empty body"),
        (
            serde_json::json!({"student_email": "jane@x.com", "workshop_name": "Rust", "mode": "Online"}),
            "missing name",
        ),
        (
            serde_json::json!({"student_name": "Jane", "workshop_name": "Rust", "mode": "Online"}),
            "missing email",
        ),
        (
            serde_json::json!({"student_name": "Jane", "student_email": "jane@x.com", "mode": "Online"}),
            "missing workshop",
        ),
        (
            serde_json::json!({"student_name": "Jane", "student_email": "jane@x.com", "workshop_name": "Rust"}),
            "missing mode",
        ),
        (
            serde_json::json!({"student_name": " ", "student_email": "jane@x.com", "workshop_name": "Rust", "mode": "Online"}),
            "blank name",
        ),
    ];
    for (body, error_message) in invalid_data {
        let response = test_app.register(&body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "Registration with invalid body with {} did not fail",
            error_message
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required");
    }
    assert_eq!(0, test_app.stored_registration_count().await);
}

#[actix_rt::test]
async fn register_returns_a_400_with_invalid_email() {
    let test_app = spawn_app().await;
    let mut body = jane();
    body["student_email"] = "not-an-email".into();

    let response = test_app.register(&body).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email format");
    assert_eq!(0, test_app.stored_registration_count().await);
}

#[actix_rt::test]
async fn register_returns_a_400_with_invalid_mode() {
    let test_app = spawn_app().await;
    for mode in &["online", "hybrid", "OFFLINE"] {
        let mut body = jane();
        body["mode"] = (*mode).into();

        let response = test_app.register(&body).await;

        assert_eq!(400, response.status().as_u16(), "mode {} was accepted", mode);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Invalid workshop mode");
    }
    assert_eq!(0, test_app.stored_registration_count().await);
}

#[actix_rt::test]
async fn register_returns_a_400_for_malformed_json() {
    let test_app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(&format!("{}/api/register", test_app.address))
        .header("Content-Type", "application/json")
        .body("{\"student_name\": ")
        .send()
        .await
        .expect("Fail to execute post request");

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_rt::test]
async fn duplicate_submissions_create_distinct_rows() {
    let test_app = spawn_app().await;

    let first: Value = test_app.register(&jane()).await.json().await.unwrap();
    let second: Value = test_app.register(&jane()).await.json().await.unwrap();

    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(2, test_app.stored_registration_count().await);
}

#[actix_rt::test]
async fn register_sends_a_confirmation_email() {
    let test_app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path("/v3.1/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    test_app.register(&jane()).await;

    let requests = wait_for_email_requests(&test_app.email_server, 1).await;
    assert_eq!(1, requests.len());
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let message = &body["Messages"][0];
    assert_eq!(message["To"][0]["Email"], "jane@x.com");
    assert_eq!(
        message["Subject"],
        "Workshop Registration Confirmation - Intro to Rust"
    );
    assert!(message["HTMLPart"]
        .as_str()
        .unwrap()
        .contains("meeting link"));
}

#[actix_rt::test]
async fn register_succeeds_when_the_email_transport_fails() {
    let test_app = spawn_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test_app.email_server)
        .await;

    let response = test_app.register(&jane()).await;

    assert_eq!(201, response.status().as_u16());
    wait_for_email_requests(&test_app.email_server, 1).await;
    assert_eq!(1, test_app.stored_registration_count().await);
}

#[actix_rt::test]
async fn register_returns_a_500_when_the_pool_is_exhausted() {
    let test_app = spawn_app_with(|c| {
        c.database.max_db_connections = 1;
        c.database.acquire_timeout_seconds = 1;
    })
    .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test_app.email_server)
        .await;

    let held_connection = test_app
        .app_pool
        .acquire()
        .await
        .expect("error acquiring the only connection");
    let response = test_app.register(&jane()).await;
    drop(held_connection);

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "An unexpected error occurred during registration. Please try again."
    );
    assert_eq!(0, test_app.stored_registration_count().await);
}
