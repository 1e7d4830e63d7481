//! クリップボード用の判定結果テキスト
//!
//! 貼り付け先で既に使われている書式なので、行の順序とラベルは変えないこと。

use crate::rules::{ReportLayout, RuleTable};
use crate::types::{Evaluation, Metadata};

/// 複製完了の表示ラベル
pub const COPY_ACK_LABEL: &str = "✔️ 已複製";

/// 複製完了ラベルの表示時間（ミリ秒）
pub const COPY_ACK_MS: u32 = 2000;

/// 複製失敗の通知文
pub const COPY_FAILED_MESSAGE: &str = "複製失敗";

fn or_dash(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-"
    } else {
        trimmed
    }
}

/// 書式を指定して組み立て
pub fn compose(layout: ReportLayout, eval: &Evaluation, meta: &Metadata) -> String {
    match layout {
        ReportLayout::Brief => format!(
            "[API 754 判定結果]\n等級: {}\n說明: {}\n關鍵因子: {}",
            eval.outcome.badge,
            eval.outcome.title,
            eval.tags.join(", ")
        ),
        ReportLayout::Detailed => [
            "【製程安全事件分級】".to_string(),
            format!("事件名稱: {}", or_dash(&meta.event_name)),
            format!("發生地點: {}", or_dash(&meta.event_location)),
            format!("發生時間: {}", or_dash(&meta.event_time)),
            format!("通報人: {}", or_dash(&meta.reporter)),
            format!("分級結果: {}（{}）", eval.outcome.badge, eval.outcome.title),
            format!("觸發條件: {}", eval.tags.join("、")),
            format!("事件摘要: {}", eval.summary_text()),
        ]
        .join("\n"),
    }
}

/// テーブルの書式で組み立て
pub fn compose_for(table: &RuleTable, eval: &Evaluation, meta: &Metadata) -> String {
    compose(table.report, eval, meta)
}
