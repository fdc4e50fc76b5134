//! End-to-end tests from a mocked GitHub API through the router.

mod support;

use std::io::Cursor;

use axum::http::StatusCode;
use calamine::{Data, Reader, Xlsx};
use readyboard::{OctocrabRepositoryGateway, PersonalAccessToken};
use serde_json::json;
use support::{body_bytes, body_text, router_for, send};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> OctocrabRepositoryGateway {
    let token = PersonalAccessToken::new("ghp_example").expect("token should be valid");
    OctocrabRepositoryGateway::for_token(Some(&token), &server.uri())
        .expect("gateway should build")
}

async fn mount_labels(server: &MockServer, number: u64, labels: &[&str]) {
    let body: Vec<_> = labels
        .iter()
        .map(|name| json!({ "id": 1, "name": name, "color": "ededed" }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/repos/acme/api/issues/{number}/labels")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_open_pulls(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/api/pulls"))
        .and(query_param("state", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "number": 42,
                "title": "Fix bug",
                "html_url": "https://github.com/acme/api/pull/42",
                "user": { "login": "alice" }
            },
            {
                "number": 43,
                "title": "Refactor",
                "html_url": "https://github.com/acme/api/pull/43",
                "user": { "login": "bob" }
            }
        ])))
        .mount(server)
        .await;
    mount_labels(server, 42, &["ready for review"]).await;
    mount_labels(server, 43, &["wip"]).await;
}

#[tokio::test]
async fn spreadsheet_reflects_labelled_pull_requests() {
    let server = MockServer::start().await;
    mount_open_pulls(&server).await;

    let response = send(
        router_for(gateway_for(&server)),
        "GET",
        "/ready-for-review?download=excel",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).expect("workbook should open");
    let range = workbook
        .worksheet_range("Sheet1")
        .expect("Sheet1 should exist");

    let row: Vec<Option<&Data>> = (0..4).map(|column| range.get_value((1, column))).collect();
    assert_eq!(
        row,
        vec![
            Some(&Data::Float(42.0)),
            Some(&Data::String("Fix bug".to_owned())),
            Some(&Data::String(
                "https://github.com/acme/api/pull/42".to_owned()
            )),
            Some(&Data::String("alice".to_owned())),
        ]
    );
    assert_eq!(range.height(), 2, "only the labelled PR is exported");
}

#[tokio::test]
async fn releases_page_resolves_tag_commits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "v2.0.0", "commit": { "sha": "bbb" } },
            { "name": "v1.0.0", "commit": { "sha": "aaa" } }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/api/commits/bbb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "bbb",
            "commit": { "message": "Second release" },
            "author": { "login": "carol" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/api/commits/aaa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "aaa",
            "commit": { "message": "First release" },
            "author": null
        })))
        .mount(&server)
        .await;

    let response = send(router_for(gateway_for(&server)), "GET", "/releases").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    let second = html.find("v2.0.0").expect("v2.0.0 should be listed");
    let first = html.find("v1.0.0").expect("v1.0.0 should be listed");
    assert!(second < first, "tags keep the listing order");
    assert!(html.contains("carol"));
    assert!(html.contains("Unknown"));
}

#[tokio::test]
async fn overview_scans_master_pull_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "api", "full_name": "acme/api" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/api/pulls"))
        .and(query_param("base", "master"))
        .and(query_param("sort", "created"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "number": 42,
                "title": "Fix bug",
                "html_url": "https://github.com/acme/api/pull/42",
                "user": { "login": "alice" }
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    mount_labels(&server, 42, &["ready for review"]).await;

    let response = send(router_for(gateway_for(&server)), "GET", "/ready-for-reviews").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"href="/ready-for-review/api""#));
}

#[tokio::test]
async fn rejected_credentials_become_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/api/pulls"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;

    let response = send(router_for(gateway_for(&server)), "GET", "/ready-for-review").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn encoded_repository_path_never_reaches_github() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let response = send(
        router_for(gateway_for(&server)),
        "GET",
        "/ready-for-review/api%2Fcollaborators%2Fmallory",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let received = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert!(received.is_empty(), "no GitHub call expected, got {received:?}");
}
