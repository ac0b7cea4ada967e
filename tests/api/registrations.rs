use serde_json::Value;

use crate::helpers::*;

#[actix_rt::test]
async fn listing_an_empty_store_returns_no_registrations() {
    let test_app = spawn_app().await;

    let response = test_app.list_registrations().await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[actix_rt::test]
async fn listing_returns_most_recent_registrations_first() {
    let test_app = spawn_app().await;
    for workshop in &["First", "Second", "Third"] {
        let mut body = jane();
        body["workshop_name"] = (*workshop).into();
        assert_eq!(201, test_app.register(&body).await.status().as_u16());
    }

    let body: Value = test_app.list_registrations().await.json().await.unwrap();

    assert_eq!(body["count"], 3);
    let workshops: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|registration| registration["workshop_name"].as_str().unwrap())
        .collect();
    assert_eq!(workshops, vec!["Third", "Second", "First"]);
}

#[actix_rt::test]
async fn lookup_by_email_is_case_insensitive() {
    let test_app = spawn_app().await;
    let mut body = jane();
    body["student_email"] = "A@B.com".into();
    test_app.register(&body).await;

    let response = test_app.registration_by_email("a@b.com").await;
    assert_eq!(200, response.status().as_u16());
    let found: Value = response.json().await.unwrap();
    assert_eq!(found["data"]["student_email"], "a@b.com");

    let response = test_app.registration_by_email("A@B.COM").await;
    assert_eq!(200, response.status().as_u16());
}

#[actix_rt::test]
async fn lookup_of_unknown_email_returns_a_404() {
    let test_app = spawn_app().await;

    let response = test_app.registration_by_email("nobody@x.com").await;

    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No registration found for this email");
}

#[actix_rt::test]
async fn lookup_without_email_returns_a_400() {
    let test_app = spawn_app().await;

    for endpoint in &["/api/registration", "/api/registration/"] {
        let response = send_get_request(&format!("{}{}", test_app.address, endpoint)).await;

        assert_eq!(400, response.status().as_u16(), "{} did not fail", endpoint);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Email parameter is required");
    }
}

#[actix_rt::test]
async fn lookup_returns_the_earliest_duplicate() {
    let test_app = spawn_app().await;
    let first: Value = test_app.register(&jane()).await.json().await.unwrap();
    let mut second = jane();
    second["workshop_name"] = "Advanced Rust".into();
    test_app.register(&second).await;

    let found: Value = test_app
        .registration_by_email("jane@x.com")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(found["data"]["id"], first["data"]["id"]);
}
