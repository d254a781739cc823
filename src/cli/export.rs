//! # export 子命令 CLI 定义
//!
//! 导出光谱数据 (CSV / XY)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 支持的导出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with axis labels as column names
    Csv,
    /// Tab-separated x/y pairs with a commented preamble
    Xy,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xy => "xy",
        }
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Spectrum file in 'ASCII with header data' format
    pub file: PathBuf,

    /// Output file (defaults to the input name with the format's extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}

impl ExportArgs {
    /// 输出路径：未指定时与输入同名，扩展名取导出格式
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.file.with_extension(self.format.extension()),
        }
    }
}
