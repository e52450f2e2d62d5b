//! 解析サーバのURL組み立て

use url::Url;

/// 解析サーバの既定アドレス
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// multipartで全ファイルに共通のフィールド名
pub const FILES_FIELD: &str = "files";

/// 職種が未入力のときに使う値
pub const DEFAULT_JOB_ROLE: &str = "Web Developer";

/// 入力された職種。空文字のときだけ既定値（空白は入力として扱う）
pub fn resolve_job_role(input: &str) -> String {
    if input.is_empty() {
        DEFAULT_JOB_ROLE.to_string()
    } else {
        input.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
        }
    }
}

impl Endpoint {
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// `POST /analyze?job_role=...`
    pub fn analyze_url(&self, job_role: &str) -> String {
        let mut url = self.with_segments(&["analyze"]);
        url.query_pairs_mut().append_pair("job_role", job_role);
        url.to_string()
    }

    /// `GET /download/{name}`（名前はパスセグメントとしてエンコード）
    pub fn download_url(&self, name: &str) -> String {
        self.with_segments(&["download", name]).to_string()
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
