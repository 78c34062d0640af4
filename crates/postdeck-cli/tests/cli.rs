//! End-to-end runs of the `postdeck` binary against a mock endpoint.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn posts_body(count: u32) -> serde_json::Value {
    let posts: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Post {i}"),
                "publishDate": "2020-06-15T08:00:00Z",
                "summary": "summary",
                "author": { "name": "Linus", "avatar": "https://example.com/l.png" },
                "categories": [ { "id": 1, "name": if i <= 4 { "Technology" } else { "Lifestyle" } } ]
            })
        })
        .collect();
    json!({ "posts": posts })
}

async fn posts_server(count: u32) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts_body(count)))
        .mount(&server)
        .await;
    server
}

fn postdeck(args: Vec<String>) -> assert_cmd::assert::Assert {
    Command::cargo_bin("postdeck")
        .unwrap()
        .args(args)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .assert()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_once_json_view() {
    let server = posts_server(12).await;
    let endpoint = format!("{}/api/posts", server.uri());

    let assert = tokio::task::spawn_blocking(move || {
        postdeck(vec![
            "--once".into(),
            "--output".into(),
            "json".into(),
            "--endpoint".into(),
            endpoint,
            "--page".into(),
            "3".into(),
        ])
    })
    .await
    .unwrap();

    let stdout = String::from_utf8(assert.success().get_output().stdout.clone()).unwrap();
    let view: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(view["status"], "ready");
    assert_eq!(view["currentPage"], 3);
    assert_eq!(view["totalPages"], 3);
    assert_eq!(view["visible"].as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_once_text_with_query() {
    let server = posts_server(12).await;
    let endpoint = format!("{}/api/posts", server.uri());

    let assert = tokio::task::spawn_blocking(move || {
        postdeck(vec![
            "--once".into(),
            "--endpoint".into(),
            endpoint,
            "--query".into(),
            "TECH".into(),
        ])
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("4 Results"))
        .stdout(predicate::str::contains("Post 4"))
        .stdout(predicate::str::contains("Post 5").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_piped_commands_apply_after_slow_load() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(posts_body(12))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    let endpoint = format!("{}/api/posts", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("postdeck")
            .unwrap()
            .args(["--output", "json", "--endpoint", endpoint.as_str()])
            .env("RUST_LOG", "off")
            .write_stdin("next\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    })
    .await
    .unwrap();

    let stdout = String::from_utf8(output).unwrap();
    let views: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(views.first().unwrap()["status"], "loading");
    let last = views.last().unwrap();
    assert_eq!(last["status"], "ready");
    assert_eq!(last["currentPage"], 2);
}

#[test]
fn test_once_unreachable_endpoint_fails() {
    postdeck(vec![
        "--once".into(),
        "--endpoint".into(),
        "http://127.0.0.1:1/api/posts".into(),
    ])
    .failure()
    .stderr(predicate::str::contains("Failed to load posts: network error"));
}

#[test]
fn test_zero_page_size_rejected() {
    postdeck(vec!["--once".into(), "--page-size".into(), "0".into()])
        .failure()
        .stderr(predicate::str::contains("page_size must be at least 1"));
}
