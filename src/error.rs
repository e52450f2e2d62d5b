use shortlist_common::AnalysisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortlistError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PDFの履歴書が見つかりません: {0}")]
    NoResumesFound(String),

    #[error("{}", .0.notification_text())]
    Analysis(#[from] AnalysisError),

    #[error("ダウンロードに失敗: {0}")]
    Download(String),

    #[error("サーバ上にファイルがありません: {0}")]
    RemoteNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShortlistError>;
