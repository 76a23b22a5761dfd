#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn solcat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("solcat").unwrap();
    cmd.current_dir(dir.path()).env("SOLCAT_ROOT", dir.path());
    cmd
}

fn init_catalog(dir: &TempDir) {
    solcat(dir).arg("init").assert().success();
}

fn new_solution(dir: &TempDir, provider: &str, category: &str, slug: &str) {
    solcat(dir)
        .args(["solution", "new", provider, category, slug])
        .assert()
        .success();
}

fn write_metadata(dir: &TempDir, provider: &str, category: &str, slug: &str, body: &str) {
    let path = dir
        .path()
        .join("providers")
        .join(provider)
        .join(category)
        .join(slug);
    std::fs::create_dir_all(&path).unwrap();
    std::fs::write(path.join("metadata.yml"), body).unwrap();
}

// ---------------------------------------------------------------------------
// solcat init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    solcat(&dir).arg("init").assert().success();

    assert!(dir.path().join("providers").is_dir());
    assert!(dir.path().join("catalogs/providers").is_dir());
    assert!(dir.path().join("catalogs/categories").is_dir());
    assert!(dir.path().join("exports").is_dir());
    assert!(dir.path().join("catalog.yaml").exists());
    assert!(dir.path().join("schema/metadata.schema.json").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    solcat(&dir).arg("init").assert().success();
    solcat(&dir).arg("init").assert().success();
}

#[test]
fn init_preserves_existing_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.yaml"), "name: custom-name\n").unwrap();
    solcat(&dir).arg("init").assert().success();

    let content = std::fs::read_to_string(dir.path().join("catalog.yaml")).unwrap();
    assert!(content.contains("custom-name"));
}

// ---------------------------------------------------------------------------
// solcat solution new / list / show
// ---------------------------------------------------------------------------

#[test]
fn solution_new_and_list() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    solcat(&dir)
        .args([
            "solution", "new", "aws", "analytics", "lakehouse", "--name", "Lakehouse",
        ])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("providers/aws/analytics/lakehouse/metadata.yml")
        .exists());

    solcat(&dir)
        .args(["solution", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lakehouse"));
}

#[test]
fn solution_new_duplicate_fails() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    new_solution(&dir, "aws", "analytics", "lakehouse");
    solcat(&dir)
        .args(["solution", "new", "aws", "analytics", "lakehouse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn solution_new_invalid_slug_fails() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    solcat(&dir)
        .args(["solution", "new", "aws", "analytics", "BAD SLUG"])
        .assert()
        .failure();
}

#[test]
fn solution_show() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    write_metadata(
        &dir,
        "azure",
        "vdi",
        "avd",
        "solution_name: Azure Virtual Desktop\nstatus: active\ntags: [desktop]\n",
    );

    solcat(&dir)
        .args(["solution", "show", "azure", "vdi", "avd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Azure Virtual Desktop"))
        .stdout(predicate::str::contains("active"));
}

#[test]
fn solution_list_filters_by_provider() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");
    new_solution(&dir, "azure", "vdi", "avd");

    solcat(&dir)
        .args(["solution", "list", "--provider", "aws"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lakehouse"))
        .stdout(predicate::str::contains("avd").not());
}

// ---------------------------------------------------------------------------
// solcat scan
// ---------------------------------------------------------------------------

#[test]
fn scan_reports_counts() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");
    new_solution(&dir, "azure", "vdi", "avd");

    solcat(&dir)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 solution(s) across 2 provider(s)"));
}

#[test]
fn scan_skips_malformed_metadata() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "good");
    write_metadata(&dir, "aws", "analytics", "bad", "solution_name: [unclosed\n");

    solcat(&dir)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 1 file(s)"));
}

#[test]
fn scan_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");

    let output = solcat(&dir).args(["scan", "-j"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["solution_count"], 1);
    assert_eq!(parsed["solutions"][0]["provider"], "aws");
}

#[test]
fn scan_outside_a_catalog_fails() {
    let dir = TempDir::new().unwrap();
    solcat(&dir)
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("solcat init"));
}

// ---------------------------------------------------------------------------
// solcat generate / catalog show
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_master_and_partial_catalogs() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");
    new_solution(&dir, "aws", "vdi", "workspaces");
    new_solution(&dir, "azure", "vdi", "avd");

    solcat(&dir).arg("generate").assert().success();

    assert!(dir.path().join("CATALOG.yml").exists());
    assert!(dir.path().join("catalogs/providers/aws.yml").exists());
    assert!(dir.path().join("catalogs/providers/azure.yml").exists());
    assert!(dir.path().join("catalogs/categories/analytics.yml").exists());
    assert!(dir.path().join("catalogs/categories/vdi.yml").exists());

    let master: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(dir.path().join("CATALOG.yml")).unwrap())
            .unwrap();
    assert_eq!(master["solution_count"], serde_yaml::Value::from(3));
    assert_eq!(master["provider_count"], serde_yaml::Value::from(2));
}

#[test]
fn generate_honors_output_dir() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");

    let out = dir.path().join("build");
    solcat(&dir)
        .args(["generate", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.join("CATALOG.yml").exists());
    assert!(out.join("catalogs/providers/aws.yml").exists());
    assert!(!dir.path().join("CATALOG.yml").exists());
}

#[test]
fn catalog_show_roundtrips_generated_counts() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");
    new_solution(&dir, "azure", "vdi", "avd");
    solcat(&dir).arg("generate").assert().success();

    solcat(&dir)
        .args(["catalog", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 solution(s), 2 provider(s)"));
}

#[test]
fn catalog_show_without_generate_fails() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);

    solcat(&dir)
        .args(["catalog", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("solcat generate"));
}

// ---------------------------------------------------------------------------
// solcat stats
// ---------------------------------------------------------------------------

#[test]
fn stats_breaks_down_by_dimension() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    write_metadata(
        &dir,
        "aws",
        "analytics",
        "lakehouse",
        "solution_name: Lakehouse\nstatus: active\ncomplexity: high\ntags: [data]\n",
    );
    write_metadata(&dir, "azure", "vdi", "avd", "solution_name: AVD\n");

    let output = solcat(&dir).args(["stats", "-j"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["solution_count"], 2);
    assert_eq!(parsed["by_status"]["active"], 1);
    assert_eq!(parsed["by_status"]["draft"], 1);
    assert_eq!(parsed["by_complexity"]["high"], 1);
    assert_eq!(parsed["by_tag"]["data"], 1);
}

// ---------------------------------------------------------------------------
// solcat export
// ---------------------------------------------------------------------------

#[test]
fn export_csv_row_count_matches_solutions() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");
    new_solution(&dir, "azure", "vdi", "avd");

    solcat(&dir).args(["export", "csv"]).assert().success();

    let csv = std::fs::read_to_string(dir.path().join("exports/solutions.csv")).unwrap();
    // header + one row per solution
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().next().unwrap().starts_with("provider,category,solution"));
}

#[test]
fn export_json_is_a_flat_array() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");

    solcat(&dir).args(["export", "json"]).assert().success();

    let data = std::fs::read_to_string(dir.path().join("exports/solutions.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn export_honors_output_flag() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");

    let out = dir.path().join("custom.csv");
    solcat(&dir)
        .args(["export", "csv", "--output", out.to_str().unwrap()])
        .assert()
        .success();
    assert!(out.exists());
}

// ---------------------------------------------------------------------------
// solcat validate
// ---------------------------------------------------------------------------

#[test]
fn validate_clean_tree_succeeds() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");

    solcat(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("all clean"));
}

#[test]
fn validate_flags_provider_mismatch() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    write_metadata(
        &dir,
        "aws",
        "analytics",
        "lakehouse",
        "solution_name: Lakehouse\nprovider: gcp\n",
    );

    solcat(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("declared provider 'gcp'"));
}

#[test]
fn validate_flags_unknown_fields() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    write_metadata(
        &dir,
        "aws",
        "analytics",
        "lakehouse",
        "solution_name: Lakehouse\nowner: nobody\n",
    );

    solcat(&dir).arg("validate").assert().failure();
}

#[test]
fn validate_without_schema_fails() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    std::fs::remove_file(dir.path().join("schema/metadata.schema.json")).unwrap();

    solcat(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema file not found"));
}

// ---------------------------------------------------------------------------
// solcat provider
// ---------------------------------------------------------------------------

#[test]
fn provider_list_counts_solutions() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");
    new_solution(&dir, "aws", "vdi", "workspaces");
    new_solution(&dir, "azure", "vdi", "avd");

    let output = solcat(&dir).args(["provider", "list", "-j"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["provider"], "aws");
    assert_eq!(parsed[0]["solution_count"], 2);
    assert_eq!(parsed[1]["provider"], "azure");
}

#[test]
fn provider_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    init_catalog(&dir);
    new_solution(&dir, "aws", "analytics", "lakehouse");

    solcat(&dir)
        .args(["provider", "show", "gcp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider not found"));
}
