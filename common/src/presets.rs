//! 組み込みルールテーブル
//!
//! - `threshold`: 門檻トークン方式（火災損失・人員傷害・洩漏量・社區影響）
//! - `narrative`: 事件摘要・事件情報つき方式（火災/爆炸・洩漏・傷害・財損・廠外）
//!
//! 2つのテーブルは語彙も条件も異なる独立した定義で、統合しない。

use crate::error::{Error, Result};
use crate::rules::{
    Condition, FieldSpec, OutcomeRule, ReportLayout, RuleTable, Section, SentenceRule, TagRule,
};
use crate::types::{Outcome, Tier};

/// 組み込みテーブル名
pub const BUILTIN_TABLES: [&str; 2] = ["threshold", "narrative"];

/// 既定のテーブル名
pub const DEFAULT_TABLE: &str = "threshold";

fn outcome(tier: Tier, key: &str, title: &str, badge: &str, summary: &str) -> Outcome {
    Outcome {
        tier,
        key: key.to_string(),
        title: title.to_string(),
        badge: badge.to_string(),
        style: tier.style_class().to_string(),
        summary: summary.to_string(),
    }
}

impl RuleTable {
    /// 組み込みテーブルを取得
    pub fn builtin(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "threshold" | "api754" => Some(Self::threshold()),
            "narrative" | "quick" => Some(Self::narrative()),
            _ => None,
        }
    }

    /// 組み込みテーブルを取得（未知の名前はエラー）
    pub fn load_builtin(name: &str) -> Result<Self> {
        Self::builtin(name).ok_or_else(|| Error::UnknownTable(name.to_string()))
    }

    /// 門檻トークン方式
    pub fn threshold() -> Self {
        Self {
            name: "threshold".into(),
            title: "API 754 製程安全事件分級".into(),
            description: "依火災損失、人員傷害、洩漏量與社區影響之門檻分級".into(),
            fields: vec![
                FieldSpec::new(
                    "processInvolved",
                    "是否涉及製程？",
                    Section::Applicability,
                    &[("yes", "是，涉及製程設備或物質"), ("no", "否，非製程相關")],
                ),
                FieldSpec::new(
                    "fireCost",
                    "火災 / 爆炸直接損失",
                    Section::Consequence,
                    &[
                        ("none", "無 / 低於 $2,500"),
                        ("tier2", "$2,500 ~ $100,000"),
                        ("tier1", "超過 $100,000"),
                    ],
                ),
                FieldSpec::new(
                    "injury",
                    "人員傷害",
                    Section::Consequence,
                    &[
                        ("none", "無"),
                        ("recordable", "可記錄職災"),
                        ("admission", "第三方住院"),
                        ("lti_fatality", "損失工時 / 死亡"),
                    ],
                ),
                FieldSpec::new(
                    "release",
                    "物質洩漏量",
                    Section::Consequence,
                    &[
                        ("none", "未達門檻"),
                        ("tier2", "超過 Tier 2 TQ"),
                        ("tier1", "超過 Tier 1 TQ"),
                    ],
                ),
                FieldSpec::new(
                    "community",
                    "社區影響",
                    Section::Consequence,
                    &[("none", "無"), ("tier1", "社區疏散 / 就地避難")],
                ),
            ],
            rules: vec![
                OutcomeRule::new(Tier::NonProcess, vec![Condition::is("processInvolved", "no")]),
                OutcomeRule::new(
                    Tier::Tier1,
                    vec![
                        Condition::one_of("injury", &["lti_fatality", "admission"]),
                        Condition::is("fireCost", "tier1"),
                        Condition::is("release", "tier1"),
                        Condition::is("community", "tier1"),
                    ],
                ),
                OutcomeRule::new(
                    Tier::Tier2,
                    vec![
                        Condition::is("injury", "recordable"),
                        Condition::is("fireCost", "tier2"),
                        Condition::is("release", "tier2"),
                    ],
                ),
            ],
            default_tier: Tier::Tier3,
            outcomes: vec![
                outcome(
                    Tier::NonProcess,
                    "non_pse",
                    "非製程安全事件 (Non-PSE)",
                    "Non-PSE",
                    "此事件不涉及製程，屬於一般工安事件 (Occupational Safety) 或其他類別。",
                ),
                outcome(
                    Tier::Tier1,
                    "tier1",
                    "Tier 1 重大製程事故",
                    "Tier 1 PSE",
                    "符合 Tier 1 定義：造成嚴重人員傷亡、重大財損、大量洩漏或社區影響。需立即通報並啟動最高層級調查。",
                ),
                outcome(
                    Tier::Tier2,
                    "tier2",
                    "Tier 2 顯著製程事故",
                    "Tier 2 PSE",
                    "符合 Tier 2 定義：造成可記錄職災、顯著財損或中量洩漏。需進行完整調查。",
                ),
                outcome(
                    Tier::Tier3,
                    "tier3",
                    "Tier 3 / 近失事件 (Near Miss)",
                    "Tier 3 / NM",
                    "未達 Tier 1/2 門檻，但涉及製程物質釋放或挑戰安全系統。建議作為 Tier 3 指標或近失事件追蹤。",
                ),
            ],
            exclusive_tag: Some(TagRule::new("❌ 非製程區", Condition::is("processInvolved", "no"))),
            tags: vec![
                TagRule::new("🔥 火災損失 >$100k (T1)", Condition::is("fireCost", "tier1")),
                TagRule::new("🔥 火災損失 >$2,5k (T2)", Condition::is("fireCost", "tier2")),
                TagRule::new("💀 死亡/損失工時 (T1)", Condition::is("injury", "lti_fatality")),
                TagRule::new("🏥 第三方住院 (T1)", Condition::is("injury", "admission")),
                TagRule::new("🩹 可記錄職災 (T2)", Condition::is("injury", "recordable")),
                TagRule::new("⚠️ 洩漏 > T1 TQ (T1)", Condition::is("release", "tier1")),
                TagRule::new("💧 洩漏 > T2 TQ (T2)", Condition::is("release", "tier2")),
                TagRule::new("📢 社區疏散/避難 (T1)", Condition::is("community", "tier1")),
            ],
            fallback_tag: "✅ 無重大後果".into(),
            sentences: vec![],
            tracks_metadata: false,
            report: ReportLayout::Brief,
            clipboard_fallback: false,
        }
    }

    /// 事件摘要方式
    pub fn narrative() -> Self {
        Self {
            name: "narrative".into(),
            title: "製程安全事件快速分級".into(),
            description: "依火災/爆炸、洩漏、傷害、財損與廠外影響分級並產生事件摘要".into(),
            fields: vec![
                FieldSpec::new(
                    "processInvolved",
                    "是否涉及製程？",
                    Section::Applicability,
                    &[("yes", "是"), ("no", "否")],
                ),
                FieldSpec::new(
                    "fireExplosion",
                    "是否發生火災或爆炸？",
                    Section::Consequence,
                    &[("yes", "是"), ("no", "否")],
                ),
                FieldSpec::new(
                    "release",
                    "洩漏規模",
                    Section::Consequence,
                    &[
                        ("none", "無"),
                        ("minor", "輕微（達 Tier 2 門檻）"),
                        ("major", "重大（達 Tier 1 門檻）"),
                    ],
                ),
                FieldSpec::new(
                    "injury",
                    "人員傷害",
                    Section::Consequence,
                    &[
                        ("none", "無"),
                        ("medical", "需醫療處置"),
                        ("serious", "嚴重傷害（住院 / 損失工時）"),
                        ("fatal", "死亡"),
                    ],
                ),
                FieldSpec::new(
                    "damage",
                    "財產損失",
                    Section::Consequence,
                    &[("none", "無"), ("significant", "顯著"), ("major", "重大")],
                ),
                FieldSpec::new(
                    "offsite",
                    "廠外影響",
                    Section::Consequence,
                    &[("yes", "有（疏散 / 避難 / 廠外損害）"), ("no", "無")],
                ),
            ],
            rules: vec![
                OutcomeRule::new(Tier::NonProcess, vec![Condition::is("processInvolved", "no")]),
                OutcomeRule::new(
                    Tier::Tier1,
                    vec![
                        Condition::is("fireExplosion", "yes"),
                        Condition::is("release", "major"),
                        Condition::one_of("injury", &["serious", "fatal"]),
                        Condition::is("damage", "major"),
                        Condition::is("offsite", "yes"),
                    ],
                ),
                OutcomeRule::new(
                    Tier::Tier2,
                    vec![
                        Condition::is("release", "minor"),
                        Condition::is("injury", "medical"),
                        Condition::is("damage", "significant"),
                    ],
                ),
            ],
            default_tier: Tier::Tier3,
            outcomes: vec![
                outcome(
                    Tier::NonProcess,
                    "occupational",
                    "一般職業安全事件",
                    "Occupational",
                    "非製程相關事件，依一般職業安全事件程序處理。",
                ),
                outcome(
                    Tier::Tier1,
                    "tier1",
                    "Tier 1 製程安全事件",
                    "Tier 1",
                    "達 Tier 1 門檻，須立即通報並啟動最高層級調查。",
                ),
                outcome(
                    Tier::Tier2,
                    "tier2",
                    "Tier 2 製程安全事件",
                    "Tier 2",
                    "達 Tier 2 門檻，須進行完整事故調查。",
                ),
                outcome(
                    Tier::Tier3,
                    "tier3",
                    "Tier 3 / 近失事件",
                    "Tier 3",
                    "未達 Tier 1/2 門檻，列為 Tier 3 指標或近失事件。",
                ),
            ],
            exclusive_tag: None,
            tags: vec![
                TagRule::new("非製程作業", Condition::is("processInvolved", "no")),
                TagRule::new("火災/爆炸", Condition::is("fireExplosion", "yes")),
                TagRule::new("重大洩漏", Condition::is("release", "major")),
                TagRule::new("輕微洩漏", Condition::is("release", "minor")),
                TagRule::new("醫療處置傷害", Condition::is("injury", "medical")),
                TagRule::new("嚴重傷害", Condition::is("injury", "serious")),
                TagRule::new("死亡", Condition::is("injury", "fatal")),
                TagRule::new("重大財損", Condition::is("damage", "major")),
                TagRule::new("顯著財損", Condition::is("damage", "significant")),
                TagRule::new("廠外影響", Condition::is("offsite", "yes")),
            ],
            fallback_tag: "無重大指標".into(),
            sentences: vec![
                SentenceRule::new(
                    "本事件與製程無直接關聯，依一般職業安全事件處理。",
                    Condition::is("processInvolved", "no"),
                ),
                SentenceRule::new(
                    "本事件涉及製程設備或製程物質。",
                    Condition::not_one_of("processInvolved", &["no"]),
                ),
                SentenceRule::new(
                    "現場發生火災或爆炸，須確認緊急應變已啟動。",
                    Condition::is("fireExplosion", "yes"),
                ),
                SentenceRule::new(
                    "製程物質大量洩漏，已超過 Tier 1 門檻量。",
                    Condition::is("release", "major"),
                ),
                SentenceRule::new(
                    "製程物質少量外洩，已達 Tier 2 門檻量。",
                    Condition::is("release", "minor"),
                ),
                SentenceRule::new(
                    "造成需醫療處置之人員傷害。",
                    Condition::is("injury", "medical"),
                ),
                SentenceRule::new(
                    "造成人員嚴重傷害（住院或損失工時）。",
                    Condition::is("injury", "serious"),
                ),
                SentenceRule::new("造成人員死亡。", Condition::is("injury", "fatal")),
                SentenceRule::new(
                    "事件影響範圍已擴及廠外。",
                    Condition::is("offsite", "yes"),
                ),
                SentenceRule::for_tier(
                    "未達 Tier 1/2 門檻，建議列為近失事件持續追蹤改善。",
                    Tier::Tier3,
                ),
            ],
            tracks_metadata: true,
            report: ReportLayout::Detailed,
            clipboard_fallback: true,
        }
    }
}
