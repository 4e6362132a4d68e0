mod common;

use assetrank::{commands, RunConfig};
use common::{host_scores, ScanDir};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_example_records_score_as_documented() {
    let scan = ScanDir::with_input(indoc! {r#"
        {"url":"https://admin.example.com","host":"admin.example.com","status_code":403,"tech":["jenkins","Nginx"]}
        {"url":"https://example.com","host":"example.com","status_code":200,"tech":[]}
        {"host":"api.internal.example.com","status_code":401}
    "#});

    let summary = commands::run(&RunConfig::new(scan.path())).unwrap();
    assert_eq!(summary.prioritized, 3);

    let output = scan.read_output();
    assert_eq!(output[0]["priority_score"], json!(70));
    assert_eq!(
        output[0]["priority_tags"],
        json!(["keyword:admin", "status:403", "tech:jenkins"])
    );
    assert_eq!(output[1]["priority_score"], json!(55));
    assert_eq!(
        output[1]["priority_tags"],
        json!(["keyword:internal", "status:401"])
    );
    assert_eq!(output[2]["priority_score"], json!(0));
    assert_eq!(output[2]["priority_tags"], json!([]));
}

#[test]
fn test_malformed_lines_are_dropped() {
    let scan = ScanDir::with_input(indoc! {r#"
        {"host":"one.example.com","status_code":500}

        not-json
        {"host":"two.example.com","status_code":401}
    "#});

    let summary = commands::run(&RunConfig::new(scan.path())).unwrap();
    assert_eq!(summary.prioritized, 2);
    assert_eq!(summary.skipped, 2);

    assert_eq!(
        host_scores(&scan.read_output()),
        vec![
            ("two.example.com".to_string(), 25),
            ("one.example.com".to_string(), 15),
        ]
    );
}

#[test]
fn test_equal_scores_keep_input_positions() {
    let mut lines: Vec<String> = (0..9)
        .map(|i| format!(r#"{{"host":"node{i}.example.com"}}"#))
        .collect();
    lines[3] = r#"{"host":"jira.example.com","status_code":403}"#.to_string();
    lines[7] = r#"{"host":"gitlab.example.com","status_code":403}"#.to_string();
    let scan = ScanDir::with_input(&lines.join("\n"));

    commands::run(&RunConfig::new(scan.path())).unwrap();

    let ranked = host_scores(&scan.read_output());
    assert_eq!(ranked[0], ("jira.example.com".to_string(), 50));
    assert_eq!(ranked[1], ("gitlab.example.com".to_string(), 50));
    let tail: Vec<_> = ranked[2..].iter().map(|(host, _)| host.as_str()).collect();
    assert_eq!(
        tail,
        vec![
            "node0.example.com",
            "node1.example.com",
            "node2.example.com",
            "node4.example.com",
            "node5.example.com",
            "node6.example.com",
            "node8.example.com",
        ]
    );
}

#[test]
fn test_unknown_fields_pass_through_in_order() {
    let scan = ScanDir::with_input(
        r#"{"timestamp":"2024-01-01T00:00:00Z","port":"8443","url":"https://vpn.example.com:8443","host":"vpn.example.com","status_code":401,"tech":["IIS"],"webserver":"Microsoft-IIS/10.0","cdn":false}"#,
    );

    commands::run(&RunConfig::new(scan.path())).unwrap();

    let content = std::fs::read_to_string(scan.output_path()).unwrap();
    let expected = indoc! {r#"
        [
          {
            "timestamp": "2024-01-01T00:00:00Z",
            "port": "8443",
            "url": "https://vpn.example.com:8443",
            "host": "vpn.example.com",
            "status_code": 401,
            "tech": [
              "IIS"
            ],
            "webserver": "Microsoft-IIS/10.0",
            "cdn": false,
            "priority_score": 75,
            "priority_tags": [
              "keyword:vpn",
              "status:401",
              "tech:IIS"
            ]
          }
        ]"#};
    assert_eq!(content, expected);
}

#[test]
fn test_mistyped_records_are_skipped() {
    let scan = ScanDir::with_input(indoc! {r#"
        {"host":"ok.example.com","status_code":403}
        {"host":42}
        {"host":"bad.example.com","tech":"php"}
        [1,2]
    "#});

    let summary = commands::run(&RunConfig::new(scan.path())).unwrap();
    assert_eq!(summary.prioritized, 1);
    assert_eq!(summary.skipped, 3);
    assert_eq!(
        host_scores(&scan.read_output()),
        vec![("ok.example.com".to_string(), 20)]
    );
}

#[test]
fn test_empty_input_writes_empty_array() {
    let scan = ScanDir::with_input("");
    let summary = commands::run(&RunConfig::new(scan.path())).unwrap();
    assert_eq!(summary.prioritized, 0);
    assert_eq!(summary.top_score, None);
    assert_eq!(std::fs::read_to_string(scan.output_path()).unwrap(), "[]");
}

#[test]
fn test_missing_input_leaves_no_output() {
    let scan = ScanDir::empty();
    let err = commands::run(&RunConfig::new(scan.path())).unwrap_err();
    assert!(err.is_missing_input());
    assert!(err.to_string().ends_with("httpx.json not found"));
    assert!(!scan.output_path().exists());
}
