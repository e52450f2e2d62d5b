//! 選択ファイルのストア
//!
//! ファイル選択・ドロップのどちらの経路でも `FileSelection::accept` を通し、
//! PDF以外は黙って捨てる。

/// 受け付けるMIMEタイプ
pub const PDF_MIME: &str = "application/pdf";

/// アップロード対象として扱えるファイル
///
/// Webでは `web_sys::File`、CLIではローカルパスをラップして実装する。
pub trait SelectedFile {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
}

/// PDFなら受け付ける
pub fn is_accepted<F: SelectedFile>(file: &F) -> bool {
    file.mime_type() == PDF_MIME
}

/// 名前とMIMEタイプだけを持つファイル記述子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFile {
    pub name: String,
    pub mime_type: String,
}

impl NamedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

impl SelectedFile for NamedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// 現在のアップロード対象（選択順を保持）
///
/// 不変条件: 全要素のMIMEタイプが `application/pdf`。
#[derive(Debug, Clone)]
pub struct FileSelection<F> {
    files: Vec<F>,
}

impl<F> Default for FileSelection<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: SelectedFile> FileSelection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// PDFだけを残し、1件以上あれば選択全体を置き換える
    ///
    /// 受け付けた件数を返す。0件のときは既存の選択をそのまま残す。
    pub fn accept<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let accepted: Vec<F> = entries.into_iter().filter(|f| is_accepted(f)).collect();
        let count = accepted.len();
        if count > 0 {
            self.files = accepted;
        }
        count
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(SelectedFile::name).collect()
    }
}

impl<F> FileSelection<F> {
    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> NamedFile {
        NamedFile::new(name, PDF_MIME)
    }

    #[test]
    fn test_accept_filters_non_pdf() {
        let mut selection = FileSelection::new();
        let count = selection.accept(vec![
            pdf("a.pdf"),
            NamedFile::new("photo.png", "image/png"),
            pdf("b.pdf"),
            NamedFile::new("notes.txt", "text/plain"),
        ]);

        assert_eq!(count, 2);
        assert_eq!(selection.names(), vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_accept_keeps_relative_order() {
        let mut selection = FileSelection::new();
        selection.accept(vec![pdf("c.pdf"), pdf("a.pdf"), pdf("b.pdf")]);
        assert_eq!(selection.names(), vec!["c.pdf", "a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_accept_replaces_previous_selection() {
        let mut selection = FileSelection::new();
        selection.accept(vec![pdf("old1.pdf"), pdf("old2.pdf")]);
        selection.accept(vec![pdf("new.pdf")]);
        assert_eq!(selection.names(), vec!["new.pdf"]);
    }

    #[test]
    fn test_accept_nothing_keeps_previous_selection() {
        let mut selection = FileSelection::new();
        selection.accept(vec![pdf("keep.pdf")]);

        let count = selection.accept(vec![NamedFile::new("x.docx", "application/msword")]);
        assert_eq!(count, 0);
        assert_eq!(selection.names(), vec!["keep.pdf"]);
    }

    #[test]
    fn test_mime_match_is_exact() {
        let mut selection = FileSelection::new();
        let count = selection.accept(vec![
            NamedFile::new("upper.pdf", "APPLICATION/PDF"),
            NamedFile::new("empty.pdf", ""),
        ]);
        assert_eq!(count, 0);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = FileSelection::new();
        selection.accept(vec![pdf("a.pdf")]);
        assert_eq!(selection.len(), 1);

        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.files().is_empty());
    }
}
