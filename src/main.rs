use clap::Parser;
use resume_shortlist::{cli, client, error, progress, report, scanner};
use cli::{Cli, Commands};
use error::{Result, ShortlistError};
use shortlist_common::{run_analysis, AnalyzeOutcome, Endpoint, FileSelection};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let endpoint = Endpoint::default();

    if cli.verbose {
        eprintln!("[DEBUG] サーバ: {}", endpoint.base_url());
    }

    match cli.command {
        Commands::Analyze { paths, job_role, json, recursive } => {
            if !json {
                println!("📄 resume-shortlist - 履歴書解析\n");
            }

            // 1. 入力ファイル収集（PDFのみ採用）
            let inputs = scanner::collect_inputs(&paths, recursive)?;
            let total = inputs.len();
            let mut selection = FileSelection::new();
            selection.accept(inputs);

            if cli.verbose {
                eprintln!("[DEBUG] {}件中 {}件のPDFを採用", total, selection.len());
                for name in selection.names() {
                    eprintln!("[DEBUG]   {}", name);
                }
            }

            // 2. 解析（職種が空なら既定値になる）
            let role = job_role.unwrap_or_default();
            let transport = client::ReqwestTransport::new(reqwest::Client::new(), cli.verbose);
            let busy = if json {
                progress::SpinnerBusy::hidden()
            } else {
                progress::SpinnerBusy::new(&format!("{}件の履歴書を解析中...", selection.len()))
            };

            // 3. 結果表示
            match run_analysis(&transport, &endpoint, &selection, &role, &busy).await {
                AnalyzeOutcome::Skipped => {
                    return Err(ShortlistError::NoResumesFound(
                        paths
                            .iter()
                            .map(|p| p.display().to_string())
                            .collect::<Vec<_>>()
                            .join(", "),
                    ));
                }
                AnalyzeOutcome::Failed(e) => {
                    if cli.verbose {
                        eprintln!("[DEBUG] {:?}", e);
                    }
                    return Err(e.into());
                }
                AnalyzeOutcome::Shortlisted(results) => {
                    if json {
                        println!("{}", report::render_json(&results)?);
                    } else {
                        println!("✔ 解析完了\n");
                        print!("{}", report::render_text(&results));
                    }
                }
            }
        }

        Commands::Download { name, output } => {
            println!("⬇ {} をダウンロード中...", name);
            let path = client::download_file(&reqwest::Client::new(), &endpoint, &name, &output).await?;
            println!("✔ 保存しました: {}", path.display());
        }
    }

    Ok(())
}
