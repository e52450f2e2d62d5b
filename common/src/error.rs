//! エラー型定義

use thiserror::Error;

/// 解析リクエストの失敗
///
/// 通信エラー・非2xx応答・JSON不正のいずれも同じ境界で扱い、
/// 利用者には `notification_text` の文言で通知する。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("{0}")]
    Transport(String),

    #[error("Analysis failed: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Parse(String),
}

impl AnalysisError {
    /// アラートに表示する文言
    pub fn notification_text(&self) -> String {
        format!("Error analyzing resume: {}", self)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Parse(e.to_string())
    }
}
