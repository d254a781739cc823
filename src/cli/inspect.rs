//! # info / json 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`, `commands/json.rs`

use clap::Args;
use std::path::PathBuf;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Spectrum file in 'ASCII with header data' format
    pub file: PathBuf,

    /// Also print the raw vendor header
    #[arg(long, default_value_t = false)]
    pub header: bool,
}

/// json 子命令参数
#[derive(Args, Debug)]
pub struct JsonArgs {
    /// Spectrum file in 'ASCII with header data' format
    pub file: PathBuf,

    /// Number of spaces used to indent the JSON output
    #[arg(long, env = "UVVIS_JSON_INDENT", default_value_t = 4, conflicts_with = "compact")]
    pub indent: usize,

    /// Emit compact single-line JSON
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl JsonArgs {
    /// 实际使用的缩进（紧凑模式为 `None`）
    pub fn indent(&self) -> Option<usize> {
        if self.compact {
            None
        } else {
            Some(self.indent)
        }
    }
}
