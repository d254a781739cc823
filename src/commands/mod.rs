//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `spectrum.rs`, `export.rs`, `batch/`, `utils/`
//! - 子模块: info, json, export, batch

pub mod batch;
pub mod export;
pub mod info;
pub mod json;

use crate::cli::Commands;
use ocean_uvvis::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Info(args) => info::execute(args),
        Commands::Json(args) => json::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}
