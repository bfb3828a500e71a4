use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{spawn_app, spawn_app_with_failing_completion, TestApp};

async fn serve_page(app: &TestApp, page_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .expect(1)
        .mount(&app.external)
        .await;
}

#[tokio::test]
async fn scrape_and_summarize_returns_snapshot_and_summary() {
    let faq = r#"{"@context": "https://schema.org", "@type": "FAQPage"}"#;
    let app = spawn_app(faq).await;
    serve_page(
        &app,
        "/shop",
        r#"<html><body>
            <h2>Our shop</h2>
            <img src="front.jpg" alt="Storefront">
            <img src="map.png">
        </body></html>"#,
    )
    .await;

    let response = app
        .post_json("/scrape-and-summarize", &json!({"url": app.page_url("/shop")}))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "");
    assert_eq!(body["h1Tags"], json!([]));
    assert_eq!(body["imgCount"], 2);
    assert_eq!(body["imgAlts"], json!(["Storefront", null]));
    assert!(body.get("metaDescription").is_none());
    assert_eq!(body["summary"], faq);

    let calls = app.completion_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.contains("FAQ"));
    assert_eq!(
        calls[0].1,
        "Title: . H1 Tags: . Alt Tags: Storefront, . Meta Description: . Please summarize."
    );
}

#[tokio::test]
async fn scrape_schema_keeps_well_formed_blocks() {
    let app = spawn_app("Use an Organization block with a logo.").await;
    serve_page(
        &app,
        "/about",
        r#"<html><head>
            <title>About</title>
            <script type="application/ld+json">{"@type": "Organization",</script>
            <script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
        </head><body></body></html>"#,
    )
    .await;

    let response = app
        .post_json("/scrape-schema", &json!({"url": app.page_url("/about")}))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "schemaScripts": [{"@type": "Organization", "name": "Acme"}],
            "summary": "Use an Organization block with a logo."
        })
    );
    assert_eq!(
        app.completion_calls()[0].1,
        r#"Scraped Schema: [{"@type":"Organization","name":"Acme"}]."#
    );
}

#[tokio::test]
async fn failed_fetch_skips_enrichment() {
    let app = spawn_app("unused").await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&app.external)
        .await;

    for endpoint in ["/scrape-schema", "/scrape-and-summarize"] {
        let response = app
            .post_json(endpoint, &json!({"url": app.page_url("/gone")}))
            .await;

        assert_eq!(500, response.status().as_u16());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Something went wrong"}));
    }

    assert!(app.completion_calls().is_empty());
}

#[tokio::test]
async fn completion_failure_after_successful_scrape_is_generic() {
    let app = spawn_app_with_failing_completion().await;
    serve_page(&app, "/home", "<title>Home</title><h1>Welcome</h1>").await;

    let response = app
        .post_json("/scrape-and-summarize", &json!({"url": app.page_url("/home")}))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Something went wrong"}));
}
