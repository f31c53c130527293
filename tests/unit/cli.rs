use super::*;
use std::io::Cursor;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parse_select_command() {
    let cli = parse_args(args(&["select", "main.dart", "12"])).unwrap();
    assert_eq!(cli.settings, None);
    assert_eq!(
        cli.command,
        Command::Select {
            file: PathBuf::from("main.dart"),
            offset: 12
        }
    );
}

#[test]
fn parse_settings_flag_in_either_form() {
    let cli = parse_args(args(&["--settings", "s.json", "hint", "a.dart", "3"])).unwrap();
    assert_eq!(cli.settings, Some(PathBuf::from("s.json")));

    let cli = parse_args(args(&["block", "a.dart", "3", "--settings=t.json"])).unwrap();
    assert_eq!(cli.settings, Some(PathBuf::from("t.json")));
    assert_eq!(
        cli.command,
        Command::Block {
            file: PathBuf::from("a.dart"),
            offset: 3
        }
    );
}

#[test]
fn parse_replay_command() {
    let cli = parse_args(args(&["replay", "edits.jsonl"])).unwrap();
    assert_eq!(
        cli.command,
        Command::Replay {
            edits: PathBuf::from("edits.jsonl")
        }
    );
}

#[test]
fn parse_rejects_bad_usage() {
    assert!(parse_args(args(&[])).is_err());
    assert!(parse_args(args(&["select", "a.dart"])).is_err());
    assert!(parse_args(args(&["select", "a.dart", "-1"])).is_err());
    assert!(parse_args(args(&["format", "a.dart"])).is_err());
    assert!(parse_args(args(&["hint", "a.dart", "1", "--settings"])).is_err());
}

#[test]
fn replay_flushes_disjoint_batches() {
    let log = "\
{\"offset\":10,\"old_len\":0,\"new_len\":1}
{\"offset\":11,\"old_len\":0,\"new_len\":1}

{\"offset\":40,\"old_len\":0,\"new_len\":1}
";
    let mut out = Vec::new();
    let flushed = replay(Cursor::new(log), &mut out).unwrap();
    assert_eq!(flushed, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "flush @10 -0 +2\nflush @40 -0 +1\n");
}

#[test]
fn replay_reports_bad_line() {
    let log = "{\"offset\":1,\"old_len\":0,\"new_len\":1}\nnot json\n";
    let mut out = Vec::new();
    let err = replay(Cursor::new(log), &mut out).unwrap_err();
    assert!(matches!(err, CliError::Replay { line: 2, .. }));
}

#[test]
fn select_session_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("call.dart");
    std::fs::write(&file, "foo(bar, baz)").unwrap();

    let session = open_session(&file, &ScanSettings::default()).unwrap();
    assert_eq!(session.select_at(4).len, 8);
    assert!(matches!(
        open_session(&dir.path().join("absent.dart"), &ScanSettings::default()),
        Err(CliError::Io(_))
    ));
}
