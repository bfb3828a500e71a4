use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::helpers::spawn_app;

#[tokio::test]
async fn find_leads_scores_each_result() {
    let app = spawn_app("unused").await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", "plumbers in Fresno, CA"))
        .and(query_param("key", "google-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"name": "Acme Plumbing", "rating": 4.5, "url": "http://acme.co"}
            ],
            "status": "OK"
        })))
        .expect(1)
        .mount(&app.external)
        .await;

    let response = app
        .get("/find-leads?state=CA&city=Fresno&sector=plumbers")
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"leads": [{"name": "Acme Plumbing", "rating": 4.5, "leadScore": 100 - 14}]})
    );
}

#[tokio::test]
async fn find_leads_marks_unrated_results() {
    let app = spawn_app("unused").await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"name": "New Pipes"},
                {"name": "Old Pipes", "rating": 3.0}
            ]
        })))
        .mount(&app.external)
        .await;

    let response = app.get("/find-leads?state=CA&city=Fresno&sector=plumbers").await;

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["leads"],
        json!([
            {"name": "New Pipes", "rating": "N/A", "leadScore": 0},
            {"name": "Old Pipes", "rating": 3.0, "leadScore": 0}
        ])
    );
}

#[tokio::test]
async fn find_leads_without_results_list_is_bad_request() {
    let app = spawn_app("unused").await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error_message": "The provided API key is invalid.",
            "status": "REQUEST_DENIED"
        })))
        .mount(&app.external)
        .await;

    let response = app.get("/find-leads?state=CA&city=Fresno&sector=plumbers").await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "No results found"}));
}

#[tokio::test]
async fn find_leads_reports_upstream_failure() {
    let app = spawn_app("unused").await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&app.external)
        .await;

    let response = app.get("/find-leads?state=CA&city=Fresno&sector=plumbers").await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to fetch leads"}));
}

#[tokio::test]
async fn find_leads_requires_all_query_parameters() {
    let app = spawn_app("unused").await;
    let test_cases = vec![
        ("city=Fresno&sector=plumbers", "missing state"),
        ("state=CA&sector=plumbers", "missing city"),
        ("state=CA&city=Fresno", "missing sector"),
        ("", "missing everything"),
    ];

    for (query, description) in test_cases {
        let response = app.get(&format!("/find-leads?{}", query)).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the query was {}.",
            description
        );
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }
}
