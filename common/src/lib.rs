//! PSE Triage Common Library
//!
//! CLIとWeb(WASM)で共有される判定ロジック:
//! 入力（ラジオ選択）→ 分級 → タグ → 事件摘要 → クリップボード用テキスト

pub mod types;
pub mod error;
pub mod rules;
pub mod presets;
pub mod progress;
pub mod report;

pub use types::{Evaluation, InputSet, Metadata, Outcome, Tier};
pub use error::{Error, Result};
pub use rules::{Condition, FieldSpec, OptionSpec, OutcomeRule, ReportLayout, RuleTable, Section, SentenceRule, TagRule};
pub use presets::{BUILTIN_TABLES, DEFAULT_TABLE};
pub use progress::{completion_percent, filled_count};
pub use report::{compose, compose_for, COPY_ACK_LABEL, COPY_ACK_MS, COPY_FAILED_MESSAGE};
