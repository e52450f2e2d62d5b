//! コマンドライン引数テスト
//!
//! 接続先は固定。サーバ指定や設定の保存はできない

use clap::Parser;
use resume_shortlist::cli::{Cli, Commands};
use shortlist_common::Endpoint;
use std::path::PathBuf;

/// 接続先を変えるフラグは受け付けない
#[test]
fn test_server_flag_is_rejected() {
    let result = Cli::try_parse_from([
        "resume-shortlist",
        "--server",
        "http://example.com",
        "analyze",
        "cv.pdf",
    ]);
    assert!(result.is_err());
}

/// 設定サブコマンドは存在しない
#[test]
fn test_config_subcommand_is_rejected() {
    let result = Cli::try_parse_from(["resume-shortlist", "config", "--show"]);
    assert!(result.is_err());
}

/// 職種を省略すると空のまま渡る（既定値は解析側で補う）
#[test]
fn test_analyze_without_job_role() {
    let cli = Cli::try_parse_from(["resume-shortlist", "analyze", "a.pdf", "b.pdf"]).unwrap();
    match cli.command {
        Commands::Analyze { paths, job_role, json, recursive } => {
            assert_eq!(paths, vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
            assert_eq!(job_role, None);
            assert!(!json);
            assert!(!recursive);
        }
        _ => panic!("expected analyze"),
    }
}

/// 保存先の既定はカレントディレクトリ
#[test]
fn test_download_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["resume-shortlist", "download", "Jane Doe.pdf"]).unwrap();
    match cli.command {
        Commands::Download { name, output } => {
            assert_eq!(name, "Jane Doe.pdf");
            assert_eq!(output, PathBuf::from("."));
        }
        _ => panic!("expected download"),
    }
}

/// 環境変数があっても接続先は既定のローカルアドレス
#[test]
fn test_endpoint_ignores_environment() {
    std::env::set_var("RESUME_SHORTLIST_SERVER", "http://example.com");
    let endpoint = Endpoint::default();
    std::env::remove_var("RESUME_SHORTLIST_SERVER");

    assert_eq!(endpoint.base_url(), "http://127.0.0.1:8000");
    assert_eq!(
        endpoint.download_url("Jane Doe.pdf"),
        "http://127.0.0.1:8000/download/Jane%20Doe.pdf"
    );
}
