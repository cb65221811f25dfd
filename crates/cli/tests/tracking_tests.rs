//! End-to-end tracking tests against a mocked SerpApi.
//!
//! # Invariants
//! - One request per keyword, in file order
//! - Failed keywords are absent from the CSV; the rest keep their order
//! - The default output path carries the run's UTC date

mod common;

use common::{configured_cmd, mock_keyword, read_rows, search_body, write_keywords};
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_failed_keyword_is_skipped() {
    let server = MockServer::start().await;
    mock_keyword(
        &server,
        "crm software",
        ResponseTemplate::new(200).set_body_json(search_body(&[
            "https://other.org/",
            "https://www.example.com/crm",
        ])),
    )
    .await;
    mock_keyword(&server, "broken keyword", ResponseTemplate::new(500)).await;
    mock_keyword(
        &server,
        "unrelated",
        ResponseTemplate::new(200).set_body_json(search_body(&["https://other.org/"])),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    write_keywords(
        dir.path(),
        &["crm software", "", "broken keyword", "  unrelated  "],
    );

    configured_cmd(dir.path(), &server)
        .args(["--output", "out/ranks.csv"])
        .assert()
        .success();

    let rows = read_rows(&dir.path().join("out/ranks.csv"));
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        vec!["keyword", "rank", "url", "search_volume", "timestamp"]
    );

    assert_eq!(rows[1][0], "crm software");
    assert_eq!(rows[1][1], "2");
    assert_eq!(rows[1][2], "https://www.example.com/crm");
    assert_eq!(rows[1][3], "5000");
    assert!(rows[1][4].ends_with('Z'));

    assert_eq!(rows[2][0], "unrelated");
    assert_eq!(rows[2][1], "");
    assert_eq!(rows[2][2], "");
    assert_eq!(rows[2][3], "5000");
}

#[tokio::test]
async fn test_default_output_path_is_dated() {
    let server = MockServer::start().await;
    mock_keyword(
        &server,
        "kw",
        ResponseTemplate::new(200).set_body_json(search_body(&["https://example.com/"])),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    write_keywords(dir.path(), &["kw"]);

    let before = chrono::Utc::now().date_naive();
    configured_cmd(dir.path(), &server).assert().success();
    let after = chrono::Utc::now().date_naive();

    let candidates = [before, after].map(|date| {
        dir.path().join(format!(
            "results/keyword_rankings_{}.csv",
            date.format("%Y-%m-%d")
        ))
    });
    let written = candidates
        .iter()
        .find(|path| path.exists())
        .expect("dated output file not found");

    let rows = read_rows(written);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "1");
}

#[tokio::test]
async fn test_empty_keyword_file_writes_header_only() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_keywords(dir.path(), &["", "   "]);

    configured_cmd(dir.path(), &server)
        .args(["--output", "ranks.csv"])
        .assert()
        .success();

    let rows = read_rows(&dir.path().join("ranks.csv"));
    assert_eq!(rows.len(), 1);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_custom_keywords_path() {
    let server = MockServer::start().await;
    mock_keyword(
        &server,
        "custom",
        ResponseTemplate::new(200).set_body_json(search_body(&[])),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lists")).unwrap();
    std::fs::write(dir.path().join("lists/seo.txt"), "custom\n").unwrap();

    configured_cmd(dir.path(), &server)
        .args(["--keywords", "lists/seo.txt", "--output", "ranks.csv"])
        .assert()
        .success();

    let rows = read_rows(&dir.path().join("ranks.csv"));
    assert_eq!(rows[1][0], "custom");
}
