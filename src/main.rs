use clap::Parser;
use tyre_labeler::{batch, cli, config, error, inspect, interactive, logging};
use tyre_labeler::controller::SessionController;
use tyre_labeler::sink::DirectorySink;
use tyre_labeler_common::SystemClock;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(cli.verbose, &config.log_filter);

    match cli.command {
        Commands::Session { output } => {
            println!("🛞 tyre-labeler - ラベリング\n");

            let output_dir = config.resolve_output_dir(output);
            println!("出力先: {}\n", output_dir.display());

            let mut controller = SessionController::new(SystemClock, DirectorySink::new(&output_dir));
            interactive::run_interactive(&mut controller).await?;

            let count = controller.session().saved_count();
            println!("\n✅ 終了 ({}件保存)", count);
        }

        Commands::Batch { manifest, output } => {
            println!("🛞 tyre-labeler - 一括ラベリング\n");

            let entries = batch::load_manifest(&manifest)?;
            println!("✔ {}件のエントリを検出\n", entries.len());

            let output_dir = config.resolve_output_dir(output);
            let mut controller = SessionController::new(SystemClock, DirectorySink::new(&output_dir));
            let report = batch::run_batch(&entries, &mut controller).await?;

            println!(
                "\n✅ 完了: {}件保存, {}件失敗 → {}",
                report.saved.len(),
                report.failed.len(),
                output_dir.display()
            );
        }

        Commands::Inspect { labels } => {
            let report = inspect::inspect_labels(&labels)?;
            inspect::print_report(&labels, &report);
        }

        Commands::Config { set_output_dir, clear_output_dir, set_log_filter, show } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(Some(dir))?;
                println!("✔ 出力ディレクトリを設定しました");
            }

            if clear_output_dir {
                config.set_output_dir(None)?;
                println!("✔ 出力ディレクトリの設定を削除しました");
            }

            if let Some(filter) = set_log_filter {
                config.set_log_filter(filter)?;
                println!("✔ ログフィルタを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  出力ディレクトリ: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定（カレント）".into())
                );
                println!("  ログフィルタ: {}", config.log_filter);
            }
        }
    }

    Ok(())
}
