//! 対話式の分級入力
//!
//! フォームと同じ順でラジオグループを1つずつ選択させ、
//! 選択のたびに判定を再計算する。

use crate::error::{Result, TriageError};
use crate::render;
use chrono::Local;
use dialoguer::{Confirm, Input, Select};
use pse_triage_common::{FieldSpec, InputSet, Metadata, RuleTable, Section};

/// 未選択の選択肢
pub const UNSELECTED_LABEL: &str = "（未選擇）";

/// 選択肢の表示ラベル（先頭は未選択）
pub fn option_items(field: &FieldSpec) -> Vec<String> {
    std::iter::once(UNSELECTED_LABEL.to_string())
        .chain(field.options.iter().map(|o| o.label.clone()))
        .collect()
}

/// 選択インデックスをトークンへ（0は未選択）
pub fn selection_from_index(field: &FieldSpec, index: usize) -> Option<&str> {
    index
        .checked_sub(1)
        .and_then(|i| field.options.get(i))
        .map(|o| o.value.as_str())
}

/// この項目を尋ねるか
///
/// 非製程と判定済みの間は後果セクションを無効にする。
pub fn should_ask(table: &RuleTable, field: &FieldSpec, inputs: &InputSet) -> bool {
    field.section != Section::Consequence || !table.is_non_process(inputs)
}

/// 対話的に選択値を集める
pub fn prompt_inputs(table: &RuleTable) -> Result<InputSet> {
    let mut inputs = InputSet::new();

    for field in &table.fields {
        if !should_ask(table, field, &inputs) {
            tracing::debug!(field = %field.name, "skipped while classified as non-process");
            continue;
        }

        let index = Select::new()
            .with_prompt(&field.label)
            .items(&option_items(field))
            .default(0)
            .interact()
            .map_err(|e| TriageError::Interaction(e.to_string()))?;

        match selection_from_index(field, index) {
            Some(value) => inputs.select(field.name.as_str(), value),
            None => inputs.clear_field(&field.name),
        }

        let eval = table.evaluate(&inputs);
        println!("  → {} [{}]", eval.outcome.title, eval.outcome.badge);
    }

    if table.is_non_process(&inputs) {
        println!("  → 非製程事件，已略過後果項目");
    }

    Ok(inputs)
}

/// 事件情報を対話的に入力
pub fn prompt_metadata(default_reporter: Option<&str>) -> Result<Metadata> {
    let mut meta = Metadata::default();
    let now = Local::now().format("%Y-%m-%d %H:%M").to_string();

    let prompts: [(&str, &str, Option<&str>); 4] = [
        ("eventName", "事件名稱", None),
        ("eventLocation", "發生地點", None),
        ("eventTime", "發生時間", Some(now.as_str())),
        ("reporter", "通報人", default_reporter),
    ];

    for (field, label, default) in prompts {
        let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        let value = input
            .interact_text()
            .map_err(|e| TriageError::Interaction(e.to_string()))?;
        meta.set(field, value.trim());
        println!(
            "  事件資訊完成度: {}",
            render::progress_bar(pse_triage_common::completion_percent(&meta))
        );
    }

    Ok(meta)
}

/// 複製するか確認
pub fn confirm_copy(default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt("複製判定結果到剪貼簿？")
        .default(default)
        .interact()
        .map_err(|e| TriageError::Interaction(e.to_string()))
}
