//! 解析結果のテキスト出力

use crate::error::Result;
use shortlist_common::ResultsView;

const BAR_WIDTH: usize = 20;

/// パーセントを固定幅のバーにする
pub fn score_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn render_text(view: &ResultsView) -> String {
    let mut out = String::new();
    out.push_str(&format!("職種: {}\n", view.job_role));
    out.push_str(&format!("履歴書数: {}\n", view.total_resumes));
    out.push_str(&format!("上位候補: {}\n", view.top_count));

    if view.is_empty() {
        out.push_str("\n候補者なし\n");
        return out;
    }

    out.push('\n');
    for row in &view.rows {
        out.push_str(&format!(
            "{:>4}  {}\n      Predicted Role: {}\n      Match Score: {:>4} {}\n",
            row.rank_label(),
            row.name,
            row.predicted,
            row.score_label(),
            score_bar(row.score_percent, BAR_WIDTH),
        ));
    }
    out
}

pub fn render_json(view: &ResultsView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
