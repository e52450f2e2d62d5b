//! 利用者への通知とコンソールログ

use shortlist_common::AnalysisError;

/// 解析失敗をログに残し、ブロッキングのアラートで知らせる
pub fn analysis_failed(error: &AnalysisError) {
    gloo::console::error!("analysis request failed:", format!("{:?}", error));
    alert(&error.notification_text());
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
