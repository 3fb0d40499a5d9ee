#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SHEET: &str = "\
Name,Google Rating,Google Reviews,Age of company,No.of projects completed,Discounts,Any Awards won?
Acme Interiors,4.5,50,3,20.0,Yes,Top Firm 2023
Blank Studio,5,0,,,  ,
Legacy Homes,4,200,10,75,,Best Designer 2010
Messy Data,great,lots,old,many,10% off,
";

const COMPANIES: &str = r#"{"companies": [
    {"name": "Acme Interiors", "type": ["Residential"], "availableCities": ["Bengaluru"]},
    {"name": "Blueprint", "type": ["Commercial"], "availableCities": ["Mumbai"]},
    {"name": "Corner Studio", "type": ["Commercial", "Residential"], "availableCities": ["Bengaluru"]},
    {"type": ["Residential"], "availableCities": ["Pune"]}
]}"#;

/// Runs the binary inside `dir` with an isolated HOME so no global config leaks in.
fn inty_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("inty").expect("binary should compile");
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn read_output(path: &Path) -> String {
    let content = fs::read_to_string(path).expect("scored file should exist");
    content.trim_start_matches('\u{feff}').to_string()
}

#[test]
fn score_writes_default_output_with_score_column() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.csv"), SHEET).expect("sheet should write");

    inty_in(dir.path())
        .arg("score")
        .arg("companies.csv")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Scoring completed! File saved as Interior_Companies_Scored.csv",
        ));

    let raw = fs::read(dir.path().join("Interior_Companies_Scored.csv"))
        .expect("scored file should exist");
    assert!(raw.starts_with(b"\xEF\xBB\xBF"), "output should carry a BOM");

    let content = read_output(&dir.path().join("Interior_Companies_Scored.csv"));
    let lines = content.lines().collect::<Vec<_>>();
    assert!(lines[0].ends_with(",Any Awards won?,Score"));
    assert!(lines[1].ends_with(",1.95"));
    assert!(lines[2].ends_with(",0"));
    assert!(lines[3].ends_with(",2.05"));
    assert!(lines[4].ends_with(",0.5"));
}

#[test]
fn score_top_ranks_companies() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.csv"), SHEET).expect("sheet should write");

    inty_in(dir.path())
        .args(["score", "companies.csv", "-o", "out/scored.csv", "--top", "2"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1. Legacy Homes (2.05)"))
        .stdout(predicate::str::contains("2. Acme Interiors (1.95)"))
        .stdout(predicate::str::contains("Blank Studio").not());

    assert!(dir.path().join("out/scored.csv").exists());
}

#[test]
fn score_json_report_is_machine_readable() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.csv"), SHEET).expect("sheet should write");

    let output = inty_in(dir.path())
        .args(["score", "companies.csv", "--format", "json", "--top", "1"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(report["rows"], 4);
    assert_eq!(report["top"][0]["name"], "Legacy Homes");
}

#[test]
fn score_accepts_json_dataset_with_configured_columns() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("companies.json"),
        r#"{"companies": [
            {"name": "Acme", "googleRating": 4.5, "googleReviews": 50, "ageOfCompany": "3",
             "projectsCompleted": 20, "discountsOfferTimeline": "Yes", "anyAwardWon": "Top Firm 2023"}
        ]}"#,
    )
    .expect("dataset should write");
    fs::write(
        dir.path().join("inty.toml"),
        r#"
[columns]
rating = "googleRating"
reviews = "googleReviews"
age = "ageOfCompany"
projects = "projectsCompleted"
discounts = "discountsOfferTimeline"
awards = "anyAwardWon"
name = "name"

[output]
scored_file = "ranked.csv"
score_column = "inty_score"
"#,
    )
    .expect("config should write");

    inty_in(dir.path())
        .args(["score", "companies.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("ranked.csv"));

    let content = read_output(&dir.path().join("ranked.csv"));
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("name,googleRating,googleReviews,ageOfCompany,projectsCompleted,discountsOfferTimeline,anyAwardWon,inty_score")
    );
    assert_eq!(
        lines.next(),
        Some("Acme,4.5,50,3,20,Yes,Top Firm 2023,1.95")
    );
}

/// Writes the company sheet as a workbook with numeric cells typed as numbers.
fn write_workbook(path: &Path, sheet: &str) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).expect("sheet name should be valid");
    let header = [
        "Name",
        "Google Rating",
        "Google Reviews",
        "Age of company",
        "No.of projects completed",
        "Discounts",
        "Any Awards won?",
    ];
    for (col, title) in header.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *title)
            .expect("header should write");
    }
    let rows: [(&str, [f64; 4], &str, &str); 2] = [
        ("Acme Interiors", [4.5, 50.0, 3.0, 20.0], "Yes", "Top Firm 2023"),
        ("Legacy Homes", [4.0, 200.0, 10.0, 75.0], "", "Best Designer 2010"),
    ];
    for (index, (name, numbers, discounts, awards)) in rows.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, *name).expect("cell should write");
        for (offset, value) in numbers.iter().enumerate() {
            worksheet
                .write_number(row, offset as u16 + 1, *value)
                .expect("cell should write");
        }
        if !discounts.is_empty() {
            worksheet
                .write_string(row, 5, *discounts)
                .expect("cell should write");
        }
        worksheet.write_string(row, 6, *awards).expect("cell should write");
    }
    workbook.save(path).expect("workbook should save");
}

#[test]
fn score_reads_interior_companies_sheet_from_workbook() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_workbook(&dir.path().join("IW_Company_Detail.xlsx"), "Interior Companies");

    inty_in(dir.path())
        .args(["score", "IW_Company_Detail.xlsx"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Scoring completed! File saved as Interior_Companies_Scored.csv",
        ));

    let content = read_output(&dir.path().join("Interior_Companies_Scored.csv"));
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(",Any Awards won?,Score"));
    assert_eq!(lines[1], "Acme Interiors,4.5,50,3,20,Yes,Top Firm 2023,1.95");
    assert!(lines[2].ends_with(",2.05"));
}

#[test]
fn score_reads_workbook_sheet_named_on_command_line() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_workbook(&dir.path().join("companies.xlsx"), "Sheet1");

    inty_in(dir.path())
        .args(["score", "companies.xlsx", "--sheet", "Sheet1", "--top", "1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1. Legacy Homes (2.05)"));
}

#[test]
fn score_reports_missing_workbook_sheet() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_workbook(&dir.path().join("companies.xlsx"), "Sheet1");

    inty_in(dir.path())
        .args(["score", "companies.xlsx"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "sheet \"Interior Companies\" not found",
        ));
}

#[test]
fn score_reports_missing_input() {
    let dir = TempDir::new().expect("temp dir should be created");

    inty_in(dir.path())
        .args(["score", "absent.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn quiet_score_prints_nothing() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.csv"), SHEET).expect("sheet should write");

    inty_in(dir.path())
        .args(["-q", "score", "companies.csv"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_defaults_to_residential_in_bengaluru() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.json"), COMPANIES).expect("listing should write");

    inty_in(dir.path())
        .args(["list", "companies.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Total companies: 4"))
        .stdout(predicate::str::contains("Companies in Bengaluru: 2"))
        .stdout(predicate::str::contains(
            "Companies in Bengaluru offering Residential services: 2",
        ))
        .stdout(predicate::str::contains("1. Acme Interiors"))
        .stdout(predicate::str::contains("2. Corner Studio"));
}

#[test]
fn list_service_first_counts_commercial() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.json"), COMPANIES).expect("listing should write");

    inty_in(dir.path())
        .args([
            "list",
            "companies.json",
            "--service",
            "Commercial",
            "--service-first",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Companies offering Commercial services: 2",
        ))
        .stdout(predicate::str::contains(
            "Companies in Bengaluru offering Commercial services: 1",
        ))
        .stdout(predicate::str::contains("List of commercial companies:"))
        .stdout(predicate::str::contains("1. Blueprint"));
}

#[test]
fn list_reports_invalid_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.json"), "{not json").expect("file should write");

    inty_in(dir.path())
        .args(["list", "companies.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("json error"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("companies.json"), COMPANIES).expect("listing should write");
    fs::write(
        dir.path().join("inty.toml"),
        "[scoring]\nrecent_award_keywords = []\n",
    )
    .expect("config should write");

    inty_in(dir.path())
        .args(["list", "companies.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("recent_award_keywords"));
}
