use std::path::Path;

use cribbage_cli::exit_code;
use cribbage_cli::run;
use serial_test::serial;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn sim_to(path: &Path, matches: &str, seed: &str) -> (i32, String, String) {
    run_args(&[
        "cribbage",
        "sim",
        "--matches",
        matches,
        "--seed",
        seed,
        "--strategy",
        "random",
        "--output",
        &path.to_string_lossy(),
    ])
}

fn stats_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stats prints JSON")
}

#[test]
#[serial]
fn sim_then_stats_agree_on_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    let (code, out, err) = sim_to(&path, "4", "77");
    assert_eq!(code, exit_code::SUCCESS, "stderr: {err}");

    let body = out.strip_prefix("Simulated: 4 matches\n").unwrap();
    let sim: serde_json::Value = serde_json::from_str(body).unwrap();

    let (code, out, err) = run_args(&["cribbage", "stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, exit_code::SUCCESS, "stderr: {err}");
    let stats = stats_json(&out);
    assert_eq!(stats["matches"], 4);
    assert_eq!(stats["wins"], sim["wins"]);
    assert_eq!(stats["average_rounds"], sim["average_rounds"]);
    assert_eq!(stats["corrupted"], 0);
}

#[test]
#[serial]
fn compressed_records_are_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs").join("sim.jsonl.zst");
    let (code, _, err) = sim_to(&path, "3", "5");
    assert_eq!(code, exit_code::SUCCESS, "stderr: {err}");

    // a directory input picks up the compressed file
    let (code, out, err) =
        run_args(&["cribbage", "stats", "--input", &dir.path().to_string_lossy()]);
    assert_eq!(code, exit_code::SUCCESS, "stderr: {err}");
    assert_eq!(stats_json(&out)["matches"], 3);
}

#[test]
#[serial]
fn same_seed_records_the_same_matches() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonl");
    let b = dir.path().join("b.jsonl");
    assert_eq!(sim_to(&a, "2", "123").0, exit_code::SUCCESS);
    assert_eq!(sim_to(&b, "2", "123").0, exit_code::SUCCESS);

    let strip = |p: &Path| -> Vec<serde_json::Value> {
        std::fs::read_to_string(p)
            .unwrap()
            .lines()
            .map(|l| {
                let mut v: serde_json::Value = serde_json::from_str(l).unwrap();
                let obj = v.as_object_mut().unwrap();
                obj.remove("ts");
                obj.remove("match_id");
                v
            })
            .collect()
    };
    assert_eq!(strip(&a), strip(&b));
}

#[test]
#[serial]
fn interrupted_sim_exits_130_and_keeps_finished_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    unsafe {
        std::env::set_var("CRIBBAGE_SIM_BREAK_AFTER", "1");
    }
    let (code, out, _) = sim_to(&path, "3", "8");
    unsafe {
        std::env::remove_var("CRIBBAGE_SIM_BREAK_AFTER");
    }
    assert_eq!(code, exit_code::INTERRUPTED);
    assert!(out.contains("Interrupted: saved 1/3"));

    let (code, out, _) = run_args(&["cribbage", "stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(stats_json(&out)["matches"], 1);
}

#[test]
#[serial]
fn tampered_record_fails_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    assert_eq!(sim_to(&path, "1", "4").0, exit_code::SUCCESS);

    let line = std::fs::read_to_string(&path).unwrap();
    let mut rec: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    rec["winner"] = serde_json::json!("nobody");
    std::fs::write(&path, format!("{}\n", rec)).unwrap();

    let (code, out, err) = run_args(&["cribbage", "stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("Unknown winner nobody"));
    assert_eq!(stats_json(&out)["matches"], 0);
}

#[test]
fn stats_on_missing_file_is_an_error() {
    let (code, out, err) = run_args(&["cribbage", "stats", "--input", "does/not/exist.jsonl"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(out.is_empty());
    assert!(err.contains("Failed to read"));
}
