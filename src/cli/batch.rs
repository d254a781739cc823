//! # batch 子命令 CLI 定义
//!
//! 批量将光谱文件转换为元数据 JSON（可选同时导出 CSV 数据）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input spectrum file or directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for the generated files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Glob pattern(s) for input files, comma separated
    #[arg(short, long, default_value = "*.txt")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "UVVIS_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Number of spaces used to indent the JSON output
    #[arg(long, env = "UVVIS_JSON_INDENT", default_value_t = 4)]
    pub indent: usize,

    /// Also export the spectral data of each file as CSV
    #[arg(long, default_value_t = false)]
    pub with_data: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
