//! End-to-end checks of the `equity` command through `equisim_cli::run`.

mod helpers;

use helpers::{CliRunner, pct_on_line};
use serde_json::Value;

#[test]
fn pocket_aces_are_a_big_favourite() {
    let res = CliRunner::new().run(&["equity", "--cards", "AsAh", "--iterations", "4000", "--seed", "42"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let win = pct_on_line(&res.stdout, "Win:");
    assert!(win > 75.0, "AA should win over 75%, got {win}");
}

#[test]
fn seven_deuce_offsuit_is_an_underdog() {
    let res = CliRunner::new().run(&["equity", "--cards", "7c2d", "--iterations", "4000", "--seed", "42"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let win = pct_on_line(&res.stdout, "Win:");
    assert!(win < 45.0, "72o should win under 45%, got {win}");
}

#[test]
fn report_lists_hand_iterations_and_three_percentages() {
    let res = CliRunner::new().run(&["equity", "--cards", "kdqd", "--iterations", "1000", "--seed", "5"]);
    assert_eq!(res.exit_code, 0);
    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(lines[0], "Hand: [Kd Qd]");
    assert_eq!(lines[1], "Iterations: 1000 (seed 5, 1 worker)");

    let sum = pct_on_line(&res.stdout, "Win:")
        + pct_on_line(&res.stdout, "Loss:")
        + pct_on_line(&res.stdout, "Tie:");
    assert!((sum - 100.0).abs() <= 0.02, "percentages sum to {sum}");
    for label in ["Win:", "Loss:", "Tie:"] {
        let line = res.stdout.lines().find(|l| l.starts_with(label)).unwrap();
        let digits = line.trim_end_matches('%').rsplit('.').next().unwrap();
        assert_eq!(digits.len(), 2, "two decimals expected in {line:?}");
    }
}

#[test]
fn same_seed_same_output() {
    let cli = CliRunner::new();
    let args = ["equity", "--cards", "JhTh", "--iterations", "700", "--seed", "2024", "--workers", "3"];
    let a = cli.run(&args);
    let b = cli.run(&args);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.contains("(seed 2024, 3 workers)"));
}

#[test]
fn card_flag_aliases_are_equivalent() {
    let cli = CliRunner::new();
    let base = cli.run(&["equity", "--cards", "9s8s", "--iterations", "600", "--seed", "1"]);
    let dashed = cli.run(&["equity", "--your-cards", "9s8s", "--iterations", "600", "--seed", "1"]);
    let underscored = cli.run(&["equity", "--your_cards", "9s8s", "--iterations", "600", "--seed", "1"]);
    assert_eq!(base.exit_code, 0);
    assert_eq!(base.stdout, dashed.stdout);
    assert_eq!(base.stdout, underscored.stdout);
}

#[test]
fn json_report_is_machine_readable() {
    let res = CliRunner::new().run(&[
        "equity", "--cards", "AsKs", "--iterations", "900", "--seed", "77", "--json",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let v: Value = serde_json::from_str(&res.stdout).expect("valid json");
    assert_eq!(v["cards"], "AsKs");
    assert_eq!(v["iterations"], 900);
    assert_eq!(v["seed"], 77);
    let total = v["player_wins"].as_u64().unwrap()
        + v["opponent_wins"].as_u64().unwrap()
        + v["ties"].as_u64().unwrap();
    assert_eq!(total, 900);
    assert!(v["win_pct"].as_f64().unwrap() > 50.0);
}

#[test]
fn short_runs_warn_but_still_report() {
    let res = CliRunner::new().run(&["equity", "--cards", "AsKd", "--iterations", "100", "--seed", "3"]);
    assert_eq!(res.exit_code, 0);
    assert!(
        res.stderr
            .contains("WARNING: Number of iterations is less than 500. Results may be inaccurate."),
        "stderr={}",
        res.stderr
    );
    assert!(res.stdout.contains("Iterations: 100"));
}

#[test]
fn single_iteration_is_allowed() {
    let res = CliRunner::new().run(&["equity", "--cards", "2c3c", "--iterations", "1", "--seed", "9"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let sum = pct_on_line(&res.stdout, "Win:")
        + pct_on_line(&res.stdout, "Loss:")
        + pct_on_line(&res.stdout, "Tie:");
    assert_eq!(sum, 100.0);
}

#[test]
fn json_cards_match_the_text_report() {
    let cli = CliRunner::new();
    let res = cli.run(&["equity", "--cards", "ah 2c", "--iterations", "500", "--seed", "8", "--json"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let v: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["cards"], "Ah2c");

    let text = cli.run(&["equity", "--cards", "ah 2c", "--iterations", "500", "--seed", "8"]);
    assert!(text.stdout.starts_with("Hand: [Ah 2c]\n"));
}

#[test]
fn maximum_worker_count_finishes() {
    let max = usize::MAX.to_string();
    let res = CliRunner::new().run(&[
        "equity", "--cards", "AsKd", "--iterations", "20", "--seed", "1", "--workers", &max,
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let sum = pct_on_line(&res.stdout, "Win:")
        + pct_on_line(&res.stdout, "Loss:")
        + pct_on_line(&res.stdout, "Tie:");
    assert!((sum - 100.0).abs() <= 0.02);
}
