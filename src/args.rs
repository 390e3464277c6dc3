// src/args.rs
use crate::options::MarkerColumn;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "count_deps",
    version,
    about = "依存構造コーパスの文/トークン/述語の集計ツール",
    long_about = "IN_DIR 直下の *.EXT ファイルを走査し、ファイルごとに\n\
                  「空行数 トークン行数 述語行数」を出力し、最後に合計を出力します。"
)]
pub struct Args {
    /// 入力ディレクトリ
    #[arg(value_hint = ValueHint::DirPath)]
    pub in_dir: PathBuf,

    /// 拡張子（先頭のドットなし, 例: dep）
    #[arg(value_parser = parsers::parse_extension)]
    pub ext: String,

    #[command(flatten)]
    pub marker: MarkerOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct MarkerOptions {
    /// 述語とみなすマーカー文字列
    #[arg(long, default_value = count_deps_engine::config::DEFAULT_MARKER, value_parser = parsers::parse_marker, help_heading = "マーカー")]
    pub marker: String,

    /// マーカーを探す列
    #[arg(long, value_enum, default_value = "feats", help_heading = "マーカー")]
    pub column: MarkerColumn,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 列数が足りない行を警告して読み飛ばす（既定はエラーで中断）
    #[arg(long, help_heading = "動作")]
    pub skip_malformed: bool,

    /// 並列数（0 = CPU 数）
    #[arg(short, long, default_value = "1", value_parser = parsers::parse_jobs, help_heading = "動作")]
    pub jobs: usize,

    /// ログを詳しく出力（-vv でさらに詳細）
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: u8,

    /// 警告を抑制
    #[arg(short, long, help_heading = "動作")]
    pub quiet: bool,
}
