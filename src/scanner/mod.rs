use crate::error::{Result, ShortlistError};
use shortlist_common::SelectedFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ローカルの候補ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl LocalFile {
    /// MIMEタイプは拡張子から推定する
    pub fn inspect(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        }
    }
}

impl SelectedFile for LocalFile {
    fn name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// フォルダ内のファイルを列挙（ファイル名順）
///
/// PDF以外も返す。絞り込みは FileSelection 側で行う。
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<LocalFile>> {
    if !folder.is_dir() {
        return Err(ShortlistError::FileNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<LocalFile> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| LocalFile::inspect(e.path()))
        .collect();

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

/// コマンド引数のパスを展開する
///
/// ファイルは引数の順、フォルダはその位置に中身を展開する。
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Result<Vec<LocalFile>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_folder(path, recursive)?);
        } else if path.is_file() {
            files.push(LocalFile::inspect(path));
        } else {
            return Err(ShortlistError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(files)
}
