//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Candidate: サーバが返す候補者1件
//! - AnalysisResult: `/analyze` のレスポンス全体

use serde::{Deserialize, Serialize};

/// 候補者（サーバ算出値をそのまま保持する）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// アップロード時のファイル名
    pub name: String,

    /// 推定職種
    pub predicted: String,

    /// マッチ度 (0.0-1.0)
    pub score: f64,

    /// 推定の確信度 (0.0-1.0)
    pub confidence: f64,
}

/// `/analyze` のレスポンス
///
/// 並び順がそのまま順位。クライアント側で並べ替えない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub shortlisted: Vec<Candidate>,
}
