use std::io::Cursor;

use super::*;
use crate::model::verdict::Verdict;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).unwrap()
}

fn common_of(cli: &Cli) -> &CommonArgs {
    match &cli.command {
        Commands::Score { common, .. } | Commands::Session { common, .. } => common,
    }
}

#[test]
fn test_parse_score_defaults() {
    let cli = parse(&["certcalc", "score"]);
    match &cli.command {
        Commands::Score {
            dev_fundamentals,
            test_debug_deploy,
            ..
        } => {
            assert_eq!(*dev_fundamentals, 50.0);
            assert_eq!(*test_debug_deploy, 50.0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    let config = SessionConfig::from_args(common_of(&cli));
    assert_eq!(config.seed, SeedSource::Default);
    assert_eq!(config.format, ReportFormat::Text);
    assert_eq!(config.profile.question_count, 60);
}

#[test]
fn test_parse_score_flags() {
    let cli = parse(&[
        "certcalc",
        "score",
        "--dev-fundamentals",
        "-5",
        "--questions",
        "65",
        "--no-seed",
        "--format",
        "json",
    ]);
    let config = SessionConfig::from_args(common_of(&cli));
    assert_eq!(config.seed, SeedSource::Empty);
    assert_eq!(config.format, ReportFormat::Json);
    assert_eq!(config.profile.question_count, 65);
}

#[test]
fn test_seed_conflicts_with_no_seed() {
    let res = Cli::try_parse_from(["certcalc", "session", "--seed", "a.json", "--no-seed"]);
    assert!(res.is_err());
}

#[test]
fn test_session_seed_file_source() {
    let cli = parse(&["certcalc", "-v", "session", "--seed", "history.json"]);
    assert_eq!(cli.verbose, 1);
    let config = SessionConfig::from_args(common_of(&cli));
    assert_eq!(config.seed, SeedSource::File(PathBuf::from("history.json")));
}

#[test]
fn test_session_script_end_to_end() {
    let script = "\
# all categories at 75
set devFundamentals 75
set processAuto 75
set userInterface 75
set testDebugDeploy 75
submit
delete 2
bogus command
set devFundamentals abc
set security 90
delete 2
show
";
    let mut session = CalculatorSession::new(ScoringProfile::default());
    let mut out = Vec::new();
    run_session_script(&mut session, Cursor::new(script), &mut out, ReportFormat::Text).unwrap();

    let ids: Vec<u64> = session.history().attempts().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(session.scores().dev_fundamentals, 75.0);
    assert_eq!(session.verdict(), Some(Verdict::Pass));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Attempt 4: score 75.000000, correct 45/60, incorrect 15"));
    assert!(!text.contains("Attempt 2:"));
    assert!(text.contains("Good job"));
}

#[test]
fn test_session_script_json_show() {
    let mut session = CalculatorSession::with_seed(ScoringProfile::default(), Vec::new());
    let mut out = Vec::new();
    run_session_script(
        &mut session,
        Cursor::new("submit\nshow\n"),
        &mut out,
        ReportFormat::Json,
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(value["verdict"], "fail");
    assert_eq!(value["attempts"][0]["id"], 1);
}

fn config(seed: SeedSource) -> SessionConfig {
    SessionConfig {
        profile: ScoringProfile::default(),
        seed,
        format: ReportFormat::Text,
    }
}

#[test]
fn test_build_session_seed_sources() {
    let default = config(SeedSource::Default).build_session().unwrap();
    assert_eq!(default.history().len(), 3);
    let empty = config(SeedSource::Empty).build_session().unwrap();
    assert_eq!(empty.history().len(), 0);
    assert!(matches!(
        config(SeedSource::File(PathBuf::from(
            "/nonexistent/certcalc/seed.json"
        )))
        .build_session(),
        Err(InputError::Io { .. })
    ));
}

#[test]
fn test_score_flags_reject_non_finite_text() {
    for bad in ["NaN", "inf", "-inf", "abc"] {
        let res = Cli::try_parse_from(["certcalc", "score", "--dev-fundamentals", bad]);
        assert!(res.is_err(), "accepted {bad}");
    }
    let res = Cli::try_parse_from(["certcalc", "score", "--user-interface", "inf"]);
    assert!(res.is_err());
}

#[test]
fn test_score_flags_share_session_coercion() {
    let cli = parse(&["certcalc", "score", "--dev-fundamentals", " 72.5 "]);
    match cli.command {
        Commands::Score {
            dev_fundamentals,
            process_automation,
            ..
        } => {
            assert_eq!(dev_fundamentals, 72.5);
            assert_eq!(process_automation, 50.0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_run_score_records_passing_attempt() {
    let mut out = Vec::new();
    let outcome = run_score(
        &config(SeedSource::Default),
        CategoryScores::new(75.0, 75.0, 75.0, 75.0),
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome.attempt.id, 4);
    assert_eq!(outcome.attempt.score, 75.0);
    assert_eq!(outcome.verdict, Verdict::Pass);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Certification score: 75.000000"));
    assert!(text.contains("Attempt 4: score 75.000000, correct 45/60, incorrect 15"));
    assert!(text.contains("Good job"));
}

#[test]
fn test_run_score_json_failing_attempt() {
    let mut cfg = config(SeedSource::Empty);
    cfg.format = ReportFormat::Json;
    let mut out = Vec::new();
    let outcome = run_score(&cfg, CategoryScores::new(60.0, 60.0, 60.0, 60.0), &mut out).unwrap();
    assert_eq!(outcome.verdict, Verdict::Fail);
    assert_eq!(outcome.attempt.id, 1);

    let value: serde_json::Value = serde_json::from_str(String::from_utf8(out).unwrap().trim()).unwrap();
    assert_eq!(value["verdict"], "fail");
    assert_eq!(value["show_resources"], true);
    assert_eq!(value["attempts"].as_array().unwrap().len(), 1);
}

#[test]
fn test_run_score_huge_negative_category() {
    let mut out = Vec::new();
    let outcome = run_score(
        &config(SeedSource::Empty),
        CategoryScores::new(-1e300, 50.0, 50.0, 50.0),
        &mut out,
    )
    .unwrap();
    assert_eq!(outcome.verdict, Verdict::Fail);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(&format!("correct {}/60", i64::MIN)));
    assert!(text.contains(&format!("incorrect {}", i64::MAX)));
}

#[test]
fn test_session_script_huge_negative_category() {
    let mut session = CalculatorSession::with_seed(ScoringProfile::default(), Vec::new());
    let mut out = Vec::new();
    run_session_script(
        &mut session,
        Cursor::new("set devFundamentals -1e300\nsubmit\nshow\nshow\n"),
        &mut out,
        ReportFormat::Text,
    )
    .unwrap();

    assert_eq!(session.verdict(), Some(Verdict::Fail));
    let views = session.attempt_views();
    assert_eq!(views[0].counts.correct, i64::MIN);
    assert_eq!(views[0].counts.incorrect, i64::MAX);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Attempt 1:").count(), 2);
}
