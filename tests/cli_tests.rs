use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{dutylog, dutylog_isolated, fixture, temp_config, temp_out};

#[test]
fn test_classify_prints_categories() {
    dutylog_isolated("classify")
        .args([
            "classify",
            "Sleeper Berth",
            "On Duty (not driving)",
            "Driving",
            "gibberish",
        ])
        .assert()
        .success()
        .stdout(contains("sleeper-berth"))
        .stdout(contains("on-duty-not-driving"))
        .stdout(contains("driving"))
        .stdout(contains("\"gibberish\"").and(contains("off-duty")));
}

#[test]
fn test_classify_requires_a_status() {
    dutylog_isolated("classify_empty")
        .arg("classify")
        .assert()
        .failure();
}

#[test]
fn test_show_all_days() {
    dutylog_isolated("show_all")
        .args(["show", &fixture("trip.json"), "--no-color"])
        .assert()
        .success()
        .stdout(contains("Trip: 3 day(s), 3 stop(s)"))
        .stdout(contains("Day 1  ·  03/03/2025  ·  Chicago, United States → St. Louis, United States"))
        .stdout(contains("Day 2"))
        .stdout(contains("Day 3"))
        .stdout(contains("Noon"))
        .stdout(contains("07h 30m"))
        .stdout(contains("24h 00m"))
        .stdout(contains("\x1b").not());
}

#[test]
fn test_show_single_day() {
    dutylog_isolated("show_day")
        .args(["show", &fixture("trip.json"), "--day", "2", "--no-color"])
        .assert()
        .success()
        .stdout(contains("Day 2"))
        .stdout(contains("Day 1").not())
        .stdout(contains("04h 00m"))
        .stdout(contains("20h 00m"));
}

#[test]
fn test_show_unknown_day_fails() {
    dutylog_isolated("show_unknown_day")
        .args(["show", &fixture("trip.json"), "--day", "9"])
        .assert()
        .failure()
        .stderr(contains("No day '9'"));
}

#[test]
fn test_show_reads_stdin() {
    dutylog_isolated("show_stdin")
        .args(["show", "-", "--no-color"])
        .write_stdin(r#"[{"day": "Mon", "events": [{"status": "driving", "start": 6, "end": 12}]}]"#)
        .assert()
        .success()
        .stdout(contains("Day Mon"))
        .stdout(contains("06h 00m"));
}

#[test]
fn test_show_rejects_scalar_document() {
    dutylog_isolated("show_scalar")
        .args(["show", "-"])
        .write_stdin("42")
        .assert()
        .failure()
        .stderr(contains("Invalid input document"));
}

#[test]
fn test_show_rejects_empty_logs() {
    dutylog_isolated("show_empty")
        .args(["show", "-"])
        .write_stdin(r#"{"route": null, "stops": [], "eld_logs": []}"#)
        .assert()
        .failure()
        .stderr(contains("no ELD logs"));
}

#[test]
fn test_show_missing_file_fails() {
    dutylog_isolated("show_missing")
        .args(["show", "/definitely/not/here/trip.json"])
        .assert()
        .failure()
        .stderr(contains("cannot read"));
}

#[test]
fn test_export_json() {
    let out = temp_out("export_json", "json");

    dutylog_isolated("export_json")
        .args([
            "export",
            &fixture("trip.json"),
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["stops"], 3);
    assert_eq!(doc["days"].as_array().map(Vec::len), Some(3));

    let day2 = &doc["days"][1];
    assert_eq!(day2["day"], "2");
    let driving = &day2["rows"][2];
    assert_eq!(driving["category"], "driving");
    assert_eq!(driving["segments"][0]["start"], 22.0);
    assert_eq!(driving["segments"][0]["end"], 24.0);
    assert_eq!(driving["segments"][1]["start"], 0.0);
    assert_eq!(driving["segments"][1]["end"], 2.0);
    assert_eq!(driving["geometry"][1]["leftPercent"], 0.0);
    assert_eq!(day2["total_hours"], 24.0);

    // malformed interval on day 3 is dropped
    let day3 = &doc["days"][2];
    assert_eq!(day3["rows"][2]["segments"].as_array().map(Vec::len), Some(0));
    assert_eq!(day3["rows"][1]["total_hours"], 8.0);
}

#[test]
fn test_export_uses_default_format_from_config() {
    let out = temp_out("export_default_format", "json");

    dutylog_isolated("export_default_format")
        .args(["export", &fixture("trip.json"), "--file", &out, "--day", "1"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"leftPercent\""));
    assert!(content.contains("\"from\": \"Chicago, United States\""));
}

#[test]
fn test_export_csv() {
    let out = temp_out("export_csv", "csv");

    dutylog_isolated("export_csv")
        .args(["export", &fixture("trip.json"), "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("day,row,category,start,end,duration,leftPercent,widthPercent")
    );
    // day 1: 7 segments, day 2: 3, day 3: 2
    assert_eq!(lines.count(), 12);
    assert!(content.contains("2,3,driving,22.0,24.0,2.0"));
}

#[test]
fn test_export_svg() {
    let out = temp_out("export_svg", "svg");

    dutylog_isolated("export_svg")
        .args(["export", &fixture("trip.json"), "--format", "svg", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported svg");
    assert!(content.starts_with("<svg"));
    assert_eq!(content.matches(r#"class="log-sheet""#).count(), 3);
    assert!(content.contains(r#"class="segment sleeper-berth""#));
}

#[test]
fn test_export_pdf() {
    let out = temp_out("export_pdf", "pdf");

    dutylog_isolated("export_pdf")
        .args(["export", &fixture("trip.json"), "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("3 page(s)"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_text_has_no_ansi() {
    let out = temp_out("export_text", "txt");

    dutylog_isolated("export_text")
        .args(["export", &fixture("trip.json"), "--format", "text", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported text");
    assert!(content.contains("3. Driving"));
    assert!(!content.contains('\x1b'));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let out = temp_out("export_overwrite", "json");
    fs::write(&out, "keep me").expect("seed file");

    dutylog_isolated("export_overwrite")
        .args(["export", &fixture("trip.json"), "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--force"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    dutylog_isolated("export_overwrite_force")
        .args(["export", &fixture("trip.json"), "--file", &out, "--force"])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_config("init_print");

    dutylog()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    dutylog()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timeline_width: 48"))
        .stdout(contains("default_format: json"))
        .stdout(contains("page_size: letter"));

    // second init without --force refuses
    dutylog()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    dutylog()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_values_change_output() {
    let cfg = temp_config("config_values");
    fs::write(&cfg, "show_totals: false\ndefault_format: csv\n").expect("write config");
    let out = temp_out("config_values", "csv");

    dutylog()
        .args(["--config", &cfg, "show", &fixture("trip.json"), "--no-color"])
        .assert()
        .success()
        .stdout(contains("Mid - Mid").not());

    dutylog()
        .args(["--config", &cfg, "export", &fixture("trip.json"), "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("day,row,category"));
}

#[test]
fn test_invalid_config_fails() {
    let cfg = temp_config("config_invalid");
    fs::write(&cfg, "timeline_width: 10\n").expect("write config");

    dutylog()
        .args(["--config", &cfg, "show", &fixture("trip.json")])
        .assert()
        .failure()
        .stderr(contains("timeline_width"));

    fs::write(&cfg, "timeline_width: [oops\n").expect("write config");

    dutylog()
        .args(["--config", &cfg, "classify", "driving"])
        .assert()
        .failure()
        .stderr(contains("YAML error"));
}
