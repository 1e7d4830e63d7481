//! 端末向けの判定結果表示

use pse_triage_common::{completion_percent, Evaluation, InputSet, Metadata, RuleTable};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

/// 進捗バー（`████░░░░ 50%`）
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = (percent as usize * BAR_WIDTH + 50) / 100;
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// 判定結果ブロック
pub fn render_evaluation(table: &RuleTable, eval: &Evaluation, meta: &Metadata) -> String {
    let mut lines = vec![
        format!("■ {}  [{}]", eval.outcome.title, eval.outcome.badge),
        format!("  {}", eval.summary_text()),
        format!("  標籤: {}", eval.tags.join(" | ")),
    ];
    if table.tracks_metadata {
        lines.push(format!(
            "  事件資訊完成度: {}",
            progress_bar(completion_percent(meta))
        ));
    }
    lines.join("\n")
}

/// 選択内容の一覧（表示ラベル付き）
pub fn render_selections(table: &RuleTable, inputs: &InputSet) -> String {
    table
        .fields
        .iter()
        .map(|field| {
            let shown = inputs
                .get(&field.name)
                .map(|v| field.option_label(v).unwrap_or(v))
                .unwrap_or("（未選擇）");
            format!("  {}: {}", field.label, shown)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON出力
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub table: &'a str,
    pub inputs: &'a InputSet,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl<'a> JsonReport<'a> {
    pub fn new(table: &'a RuleTable, inputs: &'a InputSet, evaluation: &'a Evaluation, meta: &'a Metadata) -> Self {
        let tracked = table.tracks_metadata;
        Self {
            table: &table.name,
            inputs,
            evaluation,
            metadata: tracked.then_some(meta),
            progress: tracked.then(|| completion_percent(meta)),
        }
    }
}
