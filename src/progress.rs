//! 解析中のスピナー表示

use indicatif::{ProgressBar, ProgressStyle};
use shortlist_common::BusyIndicator;
use std::time::Duration;

pub struct SpinnerBusy {
    bar: ProgressBar,
}

impl SpinnerBusy {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.magenta} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar }
    }

    /// 非表示（--json 出力時など）
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl BusyIndicator for SpinnerBusy {
    fn set_busy(&self, busy: bool) {
        if busy {
            self.bar.enable_steady_tick(Duration::from_millis(100));
        } else {
            self.bar.finish_and_clear();
        }
    }
}
