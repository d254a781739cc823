//! # uvvis - Ocean Insight UV-vis 光谱文件命令行工具
//!
//! ## 子命令
//! - `info`   - 显示文件头与元数据摘要
//! - `json`   - 输出元数据 JSON
//! - `export` - 导出光谱数据 (CSV / XY)
//! - `batch`  - 批量转换光谱文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   └── commands/   (命令执行逻辑)
//!         └── ocean_uvvis (解析、元数据、导出、批量处理)
//! ```

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use ocean_uvvis::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        output::print_error(&format!("{}", e));
        if e.is_file_access() {
            output::print_info("Check that the path exists and is readable, then try again");
        }
        std::process::exit(1);
    }
}
