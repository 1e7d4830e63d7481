//! クリップボード出力
//!
//! システムクリップボードが使えない環境（SSH、ヘッドレス等）では、
//! テーブルの設定に応じて標準出力へ代替出力するかエラーにする。

use crate::error::{Result, TriageError};
use pse_triage_common::{compose_for, Evaluation, Metadata, RuleTable, COPY_FAILED_MESSAGE};
use std::io::Write;

/// 書き込み先
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> std::result::Result<(), String>;
}

/// arboard によるシステムクリップボード
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> std::result::Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}

/// 複製結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// クリップボードへ複製した
    Copied,
    /// 代替出力した
    Fallback,
}

/// 判定結果テキストを複製
///
/// `allow_fallback` が真ならクリップボード失敗時に `out` へ書き出して成功扱い。
pub fn copy_report(
    sink: &mut dyn ClipboardSink,
    text: &str,
    allow_fallback: bool,
    out: &mut dyn Write,
) -> Result<CopyOutcome> {
    match sink.set_text(text) {
        Ok(()) => {
            tracing::debug!(bytes = text.len(), "report copied to clipboard");
            Ok(CopyOutcome::Copied)
        }
        Err(e) if allow_fallback => {
            tracing::warn!(error = %e, "clipboard unavailable, writing report to fallback output");
            writeln!(out, "----- 請手動複製 -----")?;
            writeln!(out, "{}", text)?;
            writeln!(out, "----------------------")?;
            Ok(CopyOutcome::Fallback)
        }
        Err(e) => Err(TriageError::Clipboard(format!("{} ({})", COPY_FAILED_MESSAGE, e))),
    }
}

/// 判定結果を表の書式で組み立てて複製
pub fn copy_evaluation(
    sink: &mut dyn ClipboardSink,
    table: &RuleTable,
    eval: &Evaluation,
    meta: &Metadata,
    out: &mut dyn Write,
) -> Result<CopyOutcome> {
    let text = compose_for(table, eval, meta);
    copy_report(sink, &text, table.clipboard_fallback, out)
}

/// 代替出力の書き込み先
///
/// JSON出力時は標準出力をJSONのみに保つため標準エラーへ書く。
pub fn fallback_output(json: bool) -> Box<dyn Write> {
    if json {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    }
}
