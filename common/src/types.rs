//! 判定に使う型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - InputSet: ラジオ選択の現在値（フィールド名 → 選択トークン）
//! - Metadata: 事件情報の自由記述欄
//! - Tier / Outcome: 分級結果
//! - Evaluation: 1回の再計算で得られる表示用スナップショット

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分級結果（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NonProcess,
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::NonProcess, Tier::Tier1, Tier::Tier2, Tier::Tier3];

    /// 表示スタイル（CSSクラス）
    pub fn style_class(&self) -> &'static str {
        match self {
            Tier::NonProcess => "occupational",
            Tier::Tier1 => "tier1",
            Tier::Tier2 => "tier2",
            Tier::Tier3 => "tier3",
        }
    }
}

/// ラジオ選択の集合
///
/// キーが一意なのでフィールドごとに選択値は最大1つ。
/// 空文字の選択は「未選択」と同じ扱い。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputSet {
    values: BTreeMap<String, String>,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を選択（空値は選択解除）
    pub fn select(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    /// ビルダー形式で値を選択
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.select(field, value);
        self
    }

    pub fn clear_field(&mut self, field: &str) {
        self.values.remove(field);
    }

    /// 全選択を解除（リセット）
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// 選択値。未選択ならNone
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = InputSet::new();
        for (k, v) in iter {
            set.select(k, v);
        }
        set
    }
}

/// 事件情報（自由記述、検証なし）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub event_name: String,
    pub event_location: String,
    pub event_time: String,
    pub reporter: String,
}

impl Metadata {
    /// 入力欄の名前
    pub const FIELDS: [&'static str; 4] = ["eventName", "eventLocation", "eventTime", "reporter"];

    /// 欄名で値を取得
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "eventName" => Some(&self.event_name),
            "eventLocation" => Some(&self.event_location),
            "eventTime" => Some(&self.event_time),
            "reporter" => Some(&self.reporter),
            _ => None,
        }
    }

    /// 欄名で値を設定。未知の欄名はfalse
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "eventName" => &mut self.event_name,
            "eventLocation" => &mut self.event_location,
            "eventTime" => &mut self.event_time,
            "reporter" => &mut self.reporter,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn values(&self) -> [&str; 4] {
        [
            &self.event_name,
            &self.event_location,
            &self.event_time,
            &self.reporter,
        ]
    }
}

/// 分級結果の表示データ（静的な参照データ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub tier: Tier,
    /// 識別子（non_pse / occupational / tier1 ...）
    pub key: String,
    pub title: String,
    pub badge: String,
    /// スタイル区分（CSSクラス名）
    pub style: String,
    #[serde(default)]
    pub summary: String,
}

/// 1回の再計算結果
///
/// 分級・タグ・摘要は常に同じ入力から同時に計算される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub outcome: Outcome,
    pub tags: Vec<String>,
    /// 事件摘要（摘要ルールを持つテーブルのみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// 非製程判定（結果欄の後果セクションを無効表示にする）
    pub non_process: bool,
}

impl Evaluation {
    /// 表示用の本文（摘要があれば摘要、なければ静的説明）
    pub fn summary_text(&self) -> &str {
        self.narrative.as_deref().unwrap_or(&self.outcome.summary)
    }
}
