use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pse-triage")]
#[command(about = "製程安全事件 (PSE) 分級判定工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// ルールテーブルの指定
#[derive(clap::Args, Clone, Debug, Default)]
pub struct TableArgs {
    /// 組み込みテーブル名 (threshold/narrative)
    #[arg(short, long)]
    pub table: Option<String>,

    /// カスタムルールテーブル（JSON）
    #[arg(long, conflicts_with = "table")]
    pub rules: Option<PathBuf>,
}

/// 事件情報
#[derive(clap::Args, Clone, Debug, Default)]
pub struct MetadataArgs {
    /// 事件名稱
    #[arg(long)]
    pub event_name: Option<String>,

    /// 發生地點
    #[arg(long)]
    pub location: Option<String>,

    /// 發生時間
    #[arg(long)]
    pub time: Option<String>,

    /// 通報人（省略時は設定値）
    #[arg(long)]
    pub reporter: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 選択値を指定して分級
    Classify {
        #[command(flatten)]
        table: TableArgs,

        /// 選択値 (field=value)、複数指定可
        #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,

        #[command(flatten)]
        metadata: MetadataArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 判定結果をクリップボードへ複製
        #[arg(short, long)]
        copy: bool,
    },

    /// 対話的に選択して分級
    Triage {
        #[command(flatten)]
        table: TableArgs,

        /// 確認なしでクリップボードへ複製
        #[arg(short, long)]
        copy: bool,
    },

    /// 組み込みテーブルの一覧
    Tables {
        /// 指定テーブルをJSONで出力（--rules 用の雛形）
        #[arg(long, value_name = "NAME")]
        dump: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のテーブルを設定
        #[arg(long)]
        set_table: Option<String>,

        /// 既定の通報人を設定
        #[arg(long)]
        set_reporter: Option<String>,

        /// 既定で複製するか設定
        #[arg(long)]
        set_copy: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `field=value` を分解
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid assignment: {}. Use FIELD=VALUE", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("Invalid assignment: {}. Field name is empty", s));
    }
    Ok((field.to_string(), value.trim().to_string()))
}
