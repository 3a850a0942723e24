//! End-to-end runs of the command line binary on temporary files.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn cvrp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_u-cvrp"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs")
}

fn path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn test_solve_writes_routes() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "prob.csv");
    let solution = path(&dir, "soln.csv");
    fs::write(&problem, "0,0,10\n1,0,5\n2,0,6\n10,10,3\n").expect("write problem");

    let out = cvrp(&["solve", "--input", &problem, "--output", &solution]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&solution).expect("solution"),
        "1.000000,0.000000,5\n2.000000,0.000000,6,10.000000,10.000000,3\n"
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("prob\t3\t2\t"));
}

#[test]
fn test_solve_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "prob.csv");
    fs::write(&problem, "0,0,10\n3,4,10\n").expect("write problem");

    let out = cvrp(&["solve", "-i", &problem]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "3.000000,4.000000,10\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("prob\t1\t1\t"));
}

#[test]
fn test_solve_json_summary_with_routes_on_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "prob.csv");
    fs::write(&problem, "0,0,10\n1,0,5\n2,0,6\n10,10,3\n").expect("write problem");

    let out = cvrp(&["solve", "-i", &problem, "--json"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "1.000000,0.000000,5\n2.000000,0.000000,6,10.000000,10.000000,3\n"
    );
    let summary: serde_json::Value = serde_json::from_slice(&out.stderr).expect("json");
    assert_eq!(summary["routes"], 2);
    assert_eq!(summary["feasible"], true);
}

#[test]
fn test_generate_solve_verify() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "rand00200prob.csv");
    let solution = path(&dir, "rand00200soln.csv");
    let svg = path(&dir, "rand00200soln.svg");

    assert!(cvrp(&["generate", "-n", "200", "--seed", "4", "-o", &problem]).status.success());
    assert!(cvrp(&["solve", "-i", &problem, "-o", &solution, "--svg-solution", &svg, "--json"])
        .status
        .success());
    assert!(Path::new(&svg).exists());

    let out = cvrp(&["verify", "--problem", &problem, "--solution", &solution]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("OK"));
}

#[test]
fn test_verify_reports_violations() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "prob.csv");
    let solution = path(&dir, "soln.csv");
    fs::write(&problem, "0,0,10\n1,0,5\n2,0,6\n10,10,3\n").expect("write problem");
    fs::write(&solution, "1,0,5,2,0,6\n").expect("write solution");

    let out = cvrp(&["verify", "-p", &problem, "-s", &solution]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAIL route 0 is over capacity: load 11 > 10"));
    assert!(stdout.contains("FAIL customer 3 is not visited"));
}

#[test]
fn test_malformed_problem_fails() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "prob.csv");
    fs::write(&problem, "0,0,10\n1,x,5\n").expect("write problem");

    let out = cvrp(&["solve", "-i", &problem]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}

#[test]
fn test_bench_json() {
    let dir = TempDir::new().expect("temp dir");
    let problem = path(&dir, "prob.csv");
    fs::write(&problem, "0,0,10\n1,0,5\n2,0,6\n10,10,3\n").expect("write problem");

    let out = cvrp(&["bench", "-i", &problem, "-n", "3", "--json"]);
    assert!(out.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(reports[0]["problem"], "prob");
    assert_eq!(reports[0]["iterations"], 3);
    assert_eq!(reports[0]["size"], 3);
    let baseline = reports[0]["baseline_cost"].as_f64().expect("number");
    let cost = reports[0]["outcome"]["cost"].as_f64().expect("number");
    assert!(baseline >= cost);
}
