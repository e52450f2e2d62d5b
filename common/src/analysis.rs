//! 解析リクエストの実行
//!
//! 送信手段（fetch / reqwest）は `Transport` で差し替える。
//! 失敗はすべて `interpret_reply` か `Transport::submit` の `AnalysisError` に集約され、
//! 呼び出し側は `AnalyzeOutcome` を見て通知するだけでよい。

use crate::endpoint::{resolve_job_role, Endpoint};
use crate::error::AnalysisError;
use crate::render::ResultsView;
use crate::screen::ViewState;
use crate::selection::FileSelection;
use crate::types::AnalysisResult;

/// HTTP応答（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 応答を解析結果に変換する
///
/// 非2xxは本文をそのままメッセージにする。
pub fn interpret_reply(reply: HttpReply) -> Result<AnalysisResult, AnalysisError> {
    if !reply.is_success() {
        return Err(AnalysisError::Status {
            status: reply.status,
            body: reply.body,
        });
    }
    Ok(serde_json::from_str(&reply.body)?)
}

/// ファイル一式を1回のmultipart POSTで送る
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File;

    async fn submit(&self, url: &str, files: &[Self::File]) -> Result<HttpReply, AnalysisError>;
}

/// 実行中表示（ボタン無効化・ラベル変更・スピナー）
pub trait BusyIndicator {
    fn set_busy(&self, busy: bool);
}

/// 生存中は実行中表示。成功・失敗に関わらずdropで元に戻す
pub struct BusyGuard<'a, B: BusyIndicator + ?Sized> {
    indicator: &'a B,
}

impl<'a, B: BusyIndicator + ?Sized> BusyGuard<'a, B> {
    pub fn new(indicator: &'a B) -> Self {
        indicator.set_busy(true);
        Self { indicator }
    }
}

impl<B: BusyIndicator + ?Sized> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.indicator.set_busy(false);
    }
}

/// 解析の結末
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeOutcome {
    /// 選択が空なので何もしなかった
    Skipped,
    Shortlisted(ResultsView),
    Failed(AnalysisError),
}

impl AnalyzeOutcome {
    /// 成功時のみ結果画面へ遷移する
    pub fn apply(&self, view: &mut ViewState) {
        if let AnalyzeOutcome::Shortlisted(_) = self {
            view.show_results();
        }
    }
}

/// 選択ファイルを解析サーバに送り、結果画面の表示モデルを返す
///
/// 選択が空なら通信しない。
pub async fn run_analysis<T, B>(
    transport: &T,
    endpoint: &Endpoint,
    selection: &FileSelection<T::File>,
    job_role_input: &str,
    busy: &B,
) -> AnalyzeOutcome
where
    T: Transport,
    B: BusyIndicator + ?Sized,
{
    if selection.is_empty() {
        return AnalyzeOutcome::Skipped;
    }

    let job_role = resolve_job_role(job_role_input);
    let url = endpoint.analyze_url(&job_role);

    let _guard = BusyGuard::new(busy);
    let result = transport
        .submit(&url, selection.files())
        .await
        .and_then(interpret_reply);

    match result {
        Ok(result) => AnalyzeOutcome::Shortlisted(ResultsView::project(
            &result,
            &job_role,
            selection.len(),
        )),
        Err(e) => AnalyzeOutcome::Failed(e),
    }
}
