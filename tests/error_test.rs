//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use pse_triage::clipboard::{copy_evaluation, copy_report, ClipboardSink, CopyOutcome};
use pse_triage::config::{resolve_table, Config};
use pse_triage::error::TriageError;
use pse_triage::render::JsonReport;
use pse_triage_common::{InputSet, Metadata, RuleTable};
use tempfile::tempdir;

struct Unavailable;

impl ClipboardSink for Unavailable {
    fn set_text(&mut self, _text: &str) -> Result<(), String> {
        Err("clipboard not available".into())
    }
}

/// 存在しないルールファイル
#[test]
fn test_rules_file_not_found() {
    let result = resolve_table(None, Some(std::path::Path::new("/nonexistent/rules.json")), &Config::default());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        TriageError::Common(pse_triage_common::Error::Io(_))
    ));
}

/// 検証に失敗するルールファイル
#[test]
fn test_rules_file_invalid_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("rules.json");

    let mut table = RuleTable::threshold();
    table.outcomes.pop();
    std::fs::write(&path, table.to_json_pretty().unwrap()).unwrap();

    let err = resolve_table(None, Some(&path), &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        TriageError::Common(pse_triage_common::Error::InvalidTable(_))
    ));
}

/// 未知のテーブル名
#[test]
fn test_unknown_table_name() {
    let err = resolve_table(Some("legacy"), None, &Config::default()).unwrap_err();
    let display = format!("{}", err);
    assert!(display.contains("legacy"));
}

/// 設定ファイルが壊れている
#[test]
fn test_broken_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, TriageError::JsonParse(_)));
}

/// threshold はクリップボード失敗をエラーとして通知
#[test]
fn test_threshold_clipboard_failure_is_error() {
    let table = RuleTable::threshold();
    let mut out = Vec::new();
    let err = copy_report(&mut Unavailable, "text", table.clipboard_fallback, &mut out).unwrap_err();
    assert!(format!("{}", err).contains("複製失敗"));
}

/// narrative は代替出力で成功扱い
#[test]
fn test_narrative_clipboard_failure_falls_back() {
    let table = RuleTable::narrative();
    let mut out = Vec::new();
    let outcome = copy_report(&mut Unavailable, "text", table.clipboard_fallback, &mut out).unwrap();
    assert_eq!(outcome, CopyOutcome::Fallback);
}

/// JSON出力と代替出力を分けると標準出力はJSONのまま
#[test]
fn test_json_output_stays_parseable_on_fallback() {
    let table = RuleTable::narrative();
    let inputs = InputSet::new()
        .with("processInvolved", "yes")
        .with("release", "minor");
    let eval = table.evaluate(&inputs);
    let meta = Metadata::default();

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let report = JsonReport::new(&table, &inputs, &eval, &meta);
    serde_json::to_writer_pretty(&mut stdout, &report).unwrap();
    let outcome = copy_evaluation(&mut Unavailable, &table, &eval, &meta, &mut stderr).unwrap();

    assert_eq!(outcome, CopyOutcome::Fallback);
    let parsed: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(parsed["table"], "narrative");
    let fallback = String::from_utf8(stderr).unwrap();
    assert!(fallback.contains("分級結果"));
    assert!(fallback.contains("請手動複製"));
}

/// TriageErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TriageError::Config("測試".to_string()),
        TriageError::Clipboard("no display".to_string()),
        TriageError::Interaction("not a terminal".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: TriageError = io_err.into();

    assert!(matches!(err, TriageError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = pse_triage_common::Error::UnknownTable("legacy".to_string());
    let err: TriageError = common_err.into();

    assert!(matches!(err, TriageError::Common(_)));
    assert_eq!(format!("{}", err), "Unknown rule table: legacy");
}
