// crates/cli/src/args.rs
use clap::{ArgAction, Parser};

/// Top-level CLI arguments parsed via clap.
///
/// Running without any flags writes the `package.json` version into every
/// compiled-in chart.
#[derive(Parser, Debug)]
#[command(
    name = "chart_sync",
    version = crate::VERSION,
    about = "Synchronize the package.json version into Helm Chart.yaml files"
)]
pub struct Args {
    /// 書き込みを行わず、バージョンの不一致のみを報告する
    #[arg(long)]
    pub check: bool,

    /// 最初のエラーで処理を中断する
    #[arg(long)]
    pub strict: bool,

    /// エラーのみを出力する
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// ログの詳細度を上げる (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
