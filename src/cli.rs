use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tyre-labeler")]
#[command(about = "タイヤ写真ラベリングツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話的に写真を読み込んでラベル付け
    Session {
        /// 出力ディレクトリ（画像とラベルJSONの保存先）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// マニフェストJSONに従って一括でラベル付け
    Batch {
        /// マニフェストJSONファイル
        #[arg(required = true)]
        manifest: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 保存済みのラベルJSONを確認
    Inspect {
        /// ラベルJSONファイル（tyre_dataset_labels.json）
        #[arg(required = true)]
        labels: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 出力ディレクトリの設定を削除
        #[arg(long, conflicts_with = "set_output_dir")]
        clear_output_dir: bool,

        /// ログフィルタを設定（例: info, tyre_labeler=debug）
        #[arg(long)]
        set_log_filter: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let cli = Cli::try_parse_from(["tyre-labeler", "session", "-o", "out"]).unwrap();
        match cli.command {
            Commands::Session { output } => assert_eq!(output, Some(PathBuf::from("out"))),
            _ => panic!("expected session"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_batch_with_global_verbose() {
        let cli = Cli::try_parse_from(["tyre-labeler", "batch", "m.json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Batch { .. }));
    }

    #[test]
    fn test_config_conflicting_flags() {
        let result = Cli::try_parse_from([
            "tyre-labeler",
            "config",
            "--set-output-dir",
            "a",
            "--clear-output-dir",
        ]);
        assert!(result.is_err());
    }
}
