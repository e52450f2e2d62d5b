//! 画面状態
//!
//! Welcome / Upload / Results の3画面は排他。表示はこの値から導出する。

use crate::selection::FileSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Upload,
    Results,
}

/// 画面の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub screen: Screen,
    /// 「Analyze」ボタンを表示するか
    pub analyze_visible: bool,
    /// 解析リクエスト実行中
    pub busy: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, screen: Screen) -> bool {
        self.screen == screen
    }

    pub fn show_welcome(&mut self) {
        self.screen = Screen::Welcome;
    }

    /// アップロード画面へ。選択ファイルとボタン表示をリセットする
    pub fn show_upload<F>(&mut self, selection: &mut FileSelection<F>) {
        self.screen = Screen::Upload;
        selection.clear();
        self.analyze_visible = false;
    }

    pub fn show_results(&mut self) {
        self.screen = Screen::Results;
    }

    /// 選択が変わったらボタン表示を追従させる
    pub fn on_selection_changed<F>(&mut self, selection: &FileSelection<F>) {
        self.analyze_visible = !selection.is_empty();
    }

    /// 実行中はボタンを押せない
    pub fn can_submit(&self) -> bool {
        self.analyze_visible && !self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{NamedFile, PDF_MIME};

    fn selection_with(names: &[&str]) -> FileSelection<NamedFile> {
        let mut selection = FileSelection::new();
        selection.accept(names.iter().map(|n| NamedFile::new(*n, PDF_MIME)));
        selection
    }

    #[test]
    fn test_starts_on_welcome() {
        let view = ViewState::new();
        assert!(view.is_visible(Screen::Welcome));
        assert!(!view.is_visible(Screen::Upload));
        assert!(!view.is_visible(Screen::Results));
    }

    #[test]
    fn test_exactly_one_screen_visible() {
        let mut view = ViewState::new();
        let mut selection = selection_with(&[]);
        let all = [Screen::Welcome, Screen::Upload, Screen::Results];

        view.show_upload(&mut selection);
        assert_eq!(all.iter().filter(|s| view.is_visible(**s)).count(), 1);
        view.show_results();
        assert_eq!(all.iter().filter(|s| view.is_visible(**s)).count(), 1);
        view.show_welcome();
        assert_eq!(all.iter().filter(|s| view.is_visible(**s)).count(), 1);
    }

    #[test]
    fn test_show_upload_resets_selection() {
        let mut view = ViewState::new();
        let mut selection = selection_with(&["a.pdf", "b.pdf"]);
        view.on_selection_changed(&selection);
        view.show_results();
        assert!(view.analyze_visible);

        view.show_upload(&mut selection);
        assert_eq!(view.screen, Screen::Upload);
        assert!(selection.is_empty());
        assert!(!view.analyze_visible);
    }

    #[test]
    fn test_selection_reveals_analyze() {
        let mut view = ViewState::new();
        let mut selection = selection_with(&[]);
        view.show_upload(&mut selection);
        assert!(!view.can_submit());

        selection.accept(vec![NamedFile::new("cv.pdf", PDF_MIME)]);
        view.on_selection_changed(&selection);
        assert!(view.analyze_visible);
        assert!(view.can_submit());

        view.busy = true;
        assert!(!view.can_submit());
    }
}
