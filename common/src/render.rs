//! 解析結果の表示モデル
//!
//! Web・CLIともにこの値から描画する。並べ替えや切り詰めはしない。

use crate::types::{AnalysisResult, Candidate};
use serde::Serialize;

/// 「上位N件」表示の上限（表示件数の表記のみ。一覧は全件描画）
pub const TOP_COUNT_CAP: usize = 10;

/// 0.0-1.0 の比率をパーセント整数に丸める
pub fn percent(fraction: f64) -> u32 {
    let value = (fraction * 100.0).round();
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as u32
    }
}

/// 候補者1行分
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    /// 1始まりの順位
    pub rank: usize,
    pub name: String,
    pub predicted: String,
    pub score_percent: u32,
    /// 算出はするが現状の画面には出さない
    pub confidence_percent: u32,
}

impl CandidateRow {
    pub fn new(index: usize, candidate: &Candidate) -> Self {
        Self {
            rank: index + 1,
            name: candidate.name.clone(),
            predicted: candidate.predicted.clone(),
            score_percent: percent(candidate.score),
            confidence_percent: percent(candidate.confidence),
        }
    }

    /// "#1" 形式
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }

    /// "87%" 形式
    pub fn score_label(&self) -> String {
        format!("{}%", self.score_percent)
    }

    /// スコアバーの幅（CSS width値）
    pub fn bar_width(&self) -> String {
        format!("{}%", self.score_percent.min(100))
    }
}

/// 結果画面全体
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub job_role: String,
    /// 送信したファイル数
    pub total_resumes: usize,
    /// min(10, 候補者数)
    pub top_count: usize,
    pub rows: Vec<CandidateRow>,
}

impl ResultsView {
    pub fn project(result: &AnalysisResult, job_role: &str, total_resumes: usize) -> Self {
        let rows: Vec<CandidateRow> = result
            .shortlisted
            .iter()
            .enumerate()
            .map(|(i, c)| CandidateRow::new(i, c))
            .collect();

        Self {
            job_role: job_role.to_string(),
            total_resumes,
            top_count: rows.len().min(TOP_COUNT_CAP),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
