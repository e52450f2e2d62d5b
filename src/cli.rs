use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-shortlist")]
#[command(about = "履歴書PDFを解析サーバに送り、候補者の順位を表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書を解析して候補者一覧を表示
    Analyze {
        /// PDFファイルまたはフォルダ（PDF以外は無視）
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 職種（省略時は Web Developer）
        #[arg(short, long)]
        job_role: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 候補者の履歴書をダウンロード
    Download {
        /// 候補者名（解析結果のファイル名）
        #[arg(required = true)]
        name: String,

        /// 保存先フォルダ
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}
