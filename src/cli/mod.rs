//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `info`: 显示文件头与元数据摘要
//! - `json`: 输出元数据 JSON
//! - `export`: 导出光谱数据 (CSV / XY)
//! - `batch`: 批量转换目录中的光谱文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: inspect, export, batch

pub mod batch;
pub mod export;
pub mod inspect;

use clap::{Parser, Subcommand};

/// uvvis - Ocean Insight UV-vis 光谱文件读取工具
#[derive(Parser, Debug)]
#[command(name = "uvvis")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Read Ocean Insight UV-vis spectrum files (ASCII with header data)", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the file header and a summary of the normalized metadata
    Info(inspect::InfoArgs),

    /// Print the spectrum metadata as JSON
    Json(inspect::JsonArgs),

    /// Export the spectral data to CSV or XY
    Export(export::ExportArgs),

    /// Convert many spectrum files to metadata JSON (and optionally CSV data)
    Batch(batch::BatchArgs),
}
