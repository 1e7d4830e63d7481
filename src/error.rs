use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("設定錯誤: {0}")]
    Config(String),

    #[error("複製失敗: {0}")]
    Clipboard(String),

    #[error("互動輸入錯誤: {0}")]
    Interaction(String),

    #[error("JSON解析錯誤: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] pse_triage_common::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
