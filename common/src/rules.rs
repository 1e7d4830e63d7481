//! 判定ルールテーブル
//!
//! 分級・タグ・摘要をすべてデータ（行の並び）として持つ。
//! 組み込みテーブルは `presets` モジュール、カスタムテーブルはJSONから読み込む。
//!
//! ## 未選択の扱い
//! - `OneOf`: フィールドが選択済みかつトークンが列挙に含まれる場合のみ真。未選択は常に偽
//! - `NotOneOf`: `OneOf` の否定。未選択は常に真
//!
//! 未知のトークンは `OneOf` に一致しないため、各表のデフォルト行へ落ちる。

use crate::error::{Error, Result};
use crate::types::{Evaluation, InputSet, Outcome, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 入力に対する条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Condition {
    OneOf { field: String, values: Vec<String> },
    NotOneOf { field: String, values: Vec<String> },
    Always,
}

impl Condition {
    /// `field == value`
    pub fn is(field: &str, value: &str) -> Self {
        Self::one_of(field, &[value])
    }

    /// `field ∈ values`
    pub fn one_of(field: &str, values: &[&str]) -> Self {
        Condition::OneOf {
            field: field.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// `field ∉ values`（未選択を含む）
    pub fn not_one_of(field: &str, values: &[&str]) -> Self {
        Condition::NotOneOf {
            field: field.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn matches(&self, inputs: &InputSet) -> bool {
        match self {
            Condition::OneOf { field, values } => inputs
                .get(field)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v)),
            Condition::NotOneOf { field, values } => !inputs
                .get(field)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v)),
            Condition::Always => true,
        }
    }

    /// 参照するフィールドとトークン
    fn operands(&self) -> Option<(&str, &[String])> {
        match self {
            Condition::OneOf { field, values } | Condition::NotOneOf { field, values } => {
                Some((field.as_str(), values.as_slice()))
            }
            Condition::Always => None,
        }
    }
}

/// 分級ルール行: いずれかの条件が真なら `tier`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRule {
    pub tier: Tier,
    pub any: Vec<Condition>,
}

impl OutcomeRule {
    pub fn new(tier: Tier, any: Vec<Condition>) -> Self {
        Self { tier, any }
    }

    pub fn matches(&self, inputs: &InputSet) -> bool {
        self.any.iter().any(|c| c.matches(inputs))
    }
}

/// タグ行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRule {
    pub label: String,
    pub when: Condition,
}

impl TagRule {
    pub fn new(label: &str, when: Condition) -> Self {
        Self {
            label: label.to_string(),
            when,
        }
    }
}

/// 摘要の文行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceRule {
    pub text: String,
    pub when: Condition,
    /// 指定時はこの分級結果の場合のみ出力
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_tier: Option<Tier>,
}

impl SentenceRule {
    pub fn new(text: &str, when: Condition) -> Self {
        Self {
            text: text.to_string(),
            when,
            only_tier: None,
        }
    }

    pub fn for_tier(text: &str, tier: Tier) -> Self {
        Self {
            text: text.to_string(),
            when: Condition::Always,
            only_tier: Some(tier),
        }
    }

    fn applies(&self, inputs: &InputSet, tier: Tier) -> bool {
        self.only_tier.is_none_or(|t| t == tier) && self.when.matches(inputs)
    }
}

/// フォーム上のセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// 適用判定（製程関連か）
    Applicability,
    /// 後果
    Consequence,
}

/// ラジオの選択肢
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub value: String,
    pub label: String,
}

/// ラジオグループ定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub section: Section,
    pub options: Vec<OptionSpec>,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, section: Section, options: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            section,
            options: options
                .iter()
                .map(|(value, label)| OptionSpec {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// クリップボード出力の書式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLayout {
    /// 等級・說明・關鍵因子の4行
    Brief,
    /// 事件情報・分級・觸發條件・摘要
    Detailed,
}

/// 判定ルールテーブル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleTable {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<FieldSpec>,
    /// 優先順（先に一致した行が勝つ）
    pub rules: Vec<OutcomeRule>,
    pub default_tier: Tier,
    pub outcomes: Vec<Outcome>,
    /// 一致した場合このタグのみを返す
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_tag: Option<TagRule>,
    pub tags: Vec<TagRule>,
    pub fallback_tag: String,
    #[serde(default)]
    pub sentences: Vec<SentenceRule>,
    #[serde(default)]
    pub tracks_metadata: bool,
    pub report: ReportLayout,
    /// クリップボードAPI失敗時に代替手段で複製する
    #[serde(default)]
    pub clipboard_fallback: bool,
}

impl RuleTable {
    /// JSON文字列から読み込み（検証付き）
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 構造の検証
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidTable(format!("{}: {}", self.name, msg)));

        if self.name.trim().is_empty() {
            return invalid("name is empty".into());
        }
        if self.fallback_tag.trim().is_empty() {
            return invalid("fallback tag is empty".into());
        }

        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return invalid(format!("duplicate field `{}`", field.name));
            }
            if field.options.iter().any(|o| o.value.trim().is_empty()) {
                return invalid(format!("field `{}` has an empty option token", field.name));
            }
        }

        for tier in Tier::ALL {
            match self.outcomes.iter().filter(|o| o.tier == tier).count() {
                0 => return invalid(format!("no outcome for {:?}", tier)),
                1 => {}
                n => return invalid(format!("{} outcomes for {:?}", n, tier)),
            }
        }

        let conditions = self
            .rules
            .iter()
            .flat_map(|r| r.any.iter())
            .chain(self.tags.iter().map(|t| &t.when))
            .chain(self.exclusive_tag.iter().map(|t| &t.when))
            .chain(self.sentences.iter().map(|s| &s.when));
        for condition in conditions {
            let Some((name, values)) = condition.operands() else {
                continue;
            };
            let Some(field) = self.field(name) else {
                return invalid(format!("condition refers to unknown field `{}`", name));
            };
            if let Some(value) = values.iter().find(|v| !field.has_option(v)) {
                return invalid(format!("field `{}` has no option `{}`", name, value));
            }
        }

        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// 分級（先に一致した行が勝つ、一致なしはデフォルト）
    pub fn classify(&self, inputs: &InputSet) -> Tier {
        self.rules
            .iter()
            .find(|rule| rule.matches(inputs))
            .map(|rule| rule.tier)
            .unwrap_or(self.default_tier)
    }

    /// 分級結果の表示データ
    pub fn outcome(&self, tier: Tier) -> Outcome {
        self.outcomes
            .iter()
            .find(|o| o.tier == tier)
            .cloned()
            .unwrap_or_else(|| Outcome {
                tier,
                key: tier.style_class().to_string(),
                title: tier.style_class().to_string(),
                badge: tier.style_class().to_string(),
                style: tier.style_class().to_string(),
                summary: String::new(),
            })
    }

    /// タグ一覧（空にはならない）
    pub fn build_tags(&self, inputs: &InputSet) -> Vec<String> {
        if let Some(exclusive) = &self.exclusive_tag {
            if exclusive.when.matches(inputs) {
                return vec![exclusive.label.clone()];
            }
        }

        let mut tags: Vec<String> = self
            .tags
            .iter()
            .filter(|t| t.when.matches(inputs))
            .map(|t| t.label.clone())
            .collect();

        if tags.is_empty() {
            tags.push(self.fallback_tag.clone());
        }
        tags
    }

    /// 事件摘要（摘要ルールのないテーブルはNone）
    pub fn summarize(&self, inputs: &InputSet, tier: Tier) -> Option<String> {
        if self.sentences.is_empty() {
            return None;
        }
        let sentences: Vec<&str> = self
            .sentences
            .iter()
            .filter(|s| s.applies(inputs, tier))
            .map(|s| s.text.as_str())
            .collect();
        Some(sentences.join(" "))
    }

    pub fn is_non_process(&self, inputs: &InputSet) -> bool {
        self.classify(inputs) == Tier::NonProcess
    }

    /// 分級・タグ・摘要をまとめて再計算
    pub fn evaluate(&self, inputs: &InputSet) -> Evaluation {
        let tier = self.classify(inputs);
        Evaluation {
            outcome: self.outcome(tier),
            tags: self.build_tags(inputs),
            narrative: self.summarize(inputs, tier),
            non_process: tier == Tier::NonProcess,
        }
    }

    /// テーブルに定義されていない選択（フィールド名, 値）
    pub fn unknown_selections<'a>(&self, inputs: &'a InputSet) -> Vec<(&'a str, &'a str)> {
        inputs
            .iter()
            .filter(|(field, value)| {
                self.field(field)
                    .is_none_or(|spec| !spec.has_option(value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> RuleTable {
        RuleTable {
            name: "mini".into(),
            title: "mini".into(),
            description: String::new(),
            fields: vec![
                FieldSpec::new("a", "A", Section::Applicability, &[("yes", "是"), ("no", "否")]),
                FieldSpec::new("b", "B", Section::Consequence, &[("hi", "高"), ("lo", "低")]),
            ],
            rules: vec![
                OutcomeRule::new(Tier::NonProcess, vec![Condition::is("a", "no")]),
                OutcomeRule::new(Tier::Tier1, vec![Condition::is("b", "hi")]),
            ],
            default_tier: Tier::Tier3,
            outcomes: Tier::ALL
                .iter()
                .map(|&tier| Outcome {
                    tier,
                    key: tier.style_class().into(),
                    title: format!("{:?}", tier),
                    badge: format!("{:?}", tier),
                    style: tier.style_class().into(),
                    summary: String::new(),
                })
                .collect(),
            exclusive_tag: None,
            tags: vec![TagRule::new("高", Condition::is("b", "hi"))],
            fallback_tag: "無".into(),
            sentences: vec![],
            tracks_metadata: false,
            report: ReportLayout::Brief,
            clipboard_fallback: false,
        }
    }

    #[test]
    fn test_one_of_unselected_never_matches() {
        let c = Condition::one_of("b", &["hi", "lo"]);
        assert!(!c.matches(&InputSet::new()));
        assert!(c.matches(&InputSet::new().with("b", "lo")));
        assert!(!c.matches(&InputSet::new().with("b", "mid")));
    }

    #[test]
    fn test_not_one_of_unselected_matches() {
        let c = Condition::not_one_of("a", &["no"]);
        assert!(c.matches(&InputSet::new()));
        assert!(c.matches(&InputSet::new().with("a", "yes")));
        assert!(!c.matches(&InputSet::new().with("a", "no")));
    }

    #[test]
    fn test_first_matching_row_wins() {
        let table = two_row_table();
        let inputs = InputSet::new().with("a", "no").with("b", "hi");
        assert_eq!(table.classify(&inputs), Tier::NonProcess);
    }

    #[test]
    fn test_default_tier_when_nothing_matches() {
        let table = two_row_table();
        assert_eq!(table.classify(&InputSet::new()), Tier::Tier3);
        assert_eq!(table.classify(&InputSet::new().with("b", "unknown")), Tier::Tier3);
    }

    #[test]
    fn test_fallback_tag() {
        let table = two_row_table();
        assert_eq!(table.build_tags(&InputSet::new()), vec!["無".to_string()]);
    }

    #[test]
    fn test_summarize_none_without_sentences() {
        let table = two_row_table();
        assert_eq!(table.summarize(&InputSet::new(), Tier::Tier3), None);
    }

    #[test]
    fn test_sentence_only_tier() {
        let mut table = two_row_table();
        table.sentences = vec![
            SentenceRule::new("一。", Condition::Always),
            SentenceRule::for_tier("近失。", Tier::Tier3),
        ];
        assert_eq!(
            table.summarize(&InputSet::new(), Tier::Tier3).as_deref(),
            Some("一。 近失。")
        );
        assert_eq!(
            table.summarize(&InputSet::new(), Tier::Tier1).as_deref(),
            Some("一。")
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(two_row_table().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_outcome() {
        let mut table = two_row_table();
        table.outcomes.retain(|o| o.tier != Tier::Tier2);
        let err = table.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidTable(_)));
    }

    #[test]
    fn test_validate_unknown_condition_field() {
        let mut table = two_row_table();
        table.tags.push(TagRule::new("c", Condition::is("c", "x")));
        let err = table.validate().unwrap_err();
        assert!(format!("{}", err).contains("`c`"));
    }

    #[test]
    fn test_validate_unknown_condition_token() {
        let mut table = two_row_table();
        table.rules[1] = OutcomeRule::new(Tier::Tier1, vec![Condition::one_of("b", &["hi", "high"])]);
        let err = table.validate().unwrap_err();
        assert!(format!("{}", err).contains("`high`"));
    }

    #[test]
    fn test_from_json_rejects_typo_token() {
        let mut table = RuleTable::threshold();
        table.rules[1].any[0] = Condition::one_of("injury", &["fatality", "admission"]);
        let json = table.to_json_pretty().unwrap();
        let err = RuleTable::from_json(&json).unwrap_err();
        assert!(matches!(err, Error::InvalidTable(_)));
    }

    #[test]
    fn test_validate_duplicate_outcome() {
        let mut table = two_row_table();
        let dup = table.outcomes[1].clone();
        table.outcomes.push(dup);
        let err = table.validate().unwrap_err();
        assert!(format!("{}", err).contains("2 outcomes"));
    }

    #[test]
    fn test_validate_duplicate_field() {
        let mut table = two_row_table();
        let dup = table.fields[0].clone();
        table.fields.push(dup);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_empty_fallback() {
        let mut table = two_row_table();
        table.fallback_tag = " ".into();
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_unknown_selections() {
        let table = two_row_table();
        let inputs = InputSet::new()
            .with("a", "yes")
            .with("b", "mid")
            .with("z", "1");
        let unknown = table.unknown_selections(&inputs);
        assert_eq!(unknown, vec![("b", "mid"), ("z", "1")]);
    }

    #[test]
    fn test_condition_json_shape() {
        let json = serde_json::to_string(&Condition::is("a", "no")).unwrap();
        assert_eq!(json, r#"{"op":"oneOf","field":"a","values":["no"]}"#);
        let always: Condition = serde_json::from_str(r#"{"op":"always"}"#).unwrap();
        assert_eq!(always, Condition::Always);
    }
}
