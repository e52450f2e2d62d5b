//! 解析サーバ連携（reqwest）

use crate::error::{Result, ShortlistError};
use crate::scanner::LocalFile;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use shortlist_common::{AnalysisError, Endpoint, HttpReply, Transport, FILES_FIELD};
use std::path::{Path, PathBuf};

fn transport_error(e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Transport(e.to_string())
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    verbose: bool,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client, verbose: bool) -> Self {
        Self { client, verbose }
    }
}

impl Transport for ReqwestTransport {
    type File = LocalFile;

    async fn submit(&self, url: &str, files: &[LocalFile]) -> std::result::Result<HttpReply, AnalysisError> {
        let mut form = Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| transport_error(format!("{}: {}", file.path.display(), e)))?;
            let part = Part::bytes(bytes)
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .map_err(transport_error)?;
            form = form.part(FILES_FIELD, part);
        }

        if self.verbose {
            eprintln!("[DEBUG] POST {} ({} files)", url, files.len());
        }

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        if self.verbose {
            eprintln!("[DEBUG] status {} ({} bytes)", status, body.len());
        }

        Ok(HttpReply::new(status, body))
    }
}

/// 保存先のファイル名（パス区切りは取り除く）
pub fn local_file_name(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
}

/// 候補者の元ファイルを取得して保存する
///
/// サーバは存在しないファイルにも200でJSONのエラーを返すので、JSON応答は未検出として扱う。
pub async fn download_file(
    client: &reqwest::Client,
    endpoint: &Endpoint,
    name: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let file_name = local_file_name(name)
        .ok_or_else(|| ShortlistError::Download(format!("不正なファイル名: {}", name)))?;

    let url = endpoint.download_url(name);
    let response = client.get(&url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ShortlistError::Download(format!("{} {}", status.as_u16(), body)));
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    if is_json {
        return Err(ShortlistError::RemoteNotFound(name.to_string()));
    }

    let bytes = response.bytes().await?;
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    std::fs::write(&path, &bytes)?;

    Ok(path)
}
