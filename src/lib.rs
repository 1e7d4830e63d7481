//! 製程安全事件 (PSE) 分級判定ツール
//!
//! 判定ロジックは `pse-triage-common` にあり、このクレートはCLIの入出力を担う。

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod render;
