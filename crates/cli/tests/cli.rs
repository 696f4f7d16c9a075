// ABOUTME: Integration tests for the komik CLI binary.
// ABOUTME: Runs subcommands against an httpmock upstream and checks JSON output and exit codes.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;

fn komik_cmd() -> Command {
    Command::cargo_bin("komik").unwrap()
}

fn next_page(data: serde_json::Value) -> String {
    format!(
        r#"<html><body><script id="__NEXT_DATA__" type="application/json">{}</script></body></html>"#,
        json!({"props": {"pageProps": {"data": data}}})
    )
}

#[test]
fn genres_prints_builtin_list() {
    komik_cmd()
        .arg("genres")
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"name":"Action","slug":"action"}"#));
}

#[test]
fn detail_prints_canonical_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/solo-leveling-bahasa-indonesia");
        then.status(200).body(next_page(json!({
            "title": "Solo Leveling",
            "thumbnail": "thumbnail/solo.jpg",
            "rating": {"value": "9.1", "member": 12},
            "genres": [{"name": "Action"}]
        })));
    });

    komik_cmd()
        .args(["detail", "solo-leveling", "--compact"])
        .args(["--base-url", &server.base_url()])
        .args(["--cover-origin", "https://covers.komik.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"Solo Leveling""#))
        .stdout(predicate::str::contains(
            r#""thumbnail":"https://covers.komik.test/thumbnail/solo.jpg""#,
        ))
        .stdout(predicate::str::contains(r#""genres":["Action"]"#));

    mock.assert();
}

#[test]
fn missing_detail_exits_with_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nope-bahasa-indonesia");
        then.status(200)
            .body(r#"<script id="__NEXT_DATA__">{"props":{"pageProps":{"statusCode":404}}}</script>"#);
    });

    komik_cmd()
        .args(["detail", "nope", "--base-url", &server.base_url()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn upstream_failure_exits_with_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(503);
    });

    komik_cmd()
        .args(["latest", "--base-url", &server.base_url()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("upstream unavailable"));
}

#[test]
fn chapter_reports_resolved_variant() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/x-bahasa-indonesia/chapter-01");
        then.status(200)
            .body(next_page(json!({"title": "X 1", "images": ["chapter/x/01/1.jpg"]})));
    });
    server.mock(|when, then| {
        when.method(GET).path("/x-bahasa-indonesia/chapter-1");
        then.status(404);
    });

    komik_cmd()
        .args(["chapter", "x", "1", "--compact"])
        .args(["--base-url", &server.base_url()])
        .args(["--image-origin", "https://img.komik.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""chapterNumber":"01""#))
        .stdout(predicate::str::contains(
            "https://img.komik.test/storage/chapter/x/01/1.jpg",
        ))
        .stdout(predicate::str::contains(r#""degraded":false"#));
}

#[test]
fn list_passes_page_and_search() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/komik-list")
            .query_param("page", "2")
            .query_param("name", "solo");
        then.status(200).body(next_page(json!({
            "comics": [{"title": "Solo Leveling", "slug": "solo-leveling-bahasa-indonesia"}],
            "current_page": 2,
            "total_pages": 5
        })));
    });

    komik_cmd()
        .args(["list", "--page", "2", "--search", "solo", "--compact"])
        .args(["--base-url", &server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""currentPage":2"#))
        .stdout(predicate::str::contains(r#""totalPages":5"#))
        .stdout(predicate::str::contains(r#""slug":"solo-leveling""#));

    mock.assert();
}
