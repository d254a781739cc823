//! # json 命令实现
//!
//! 输出光谱元数据 JSON 到标准输出或文件。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `spectrum.rs`, `utils/output.rs`

use crate::cli::inspect::JsonArgs;
use ocean_uvvis::utils::output;
use ocean_uvvis::{Result, Spectrum, UvvisError};

use std::fs;

/// 执行 json 命令
pub fn execute(args: JsonArgs) -> Result<()> {
    let spectrum = Spectrum::open(&args.file)?;
    let json = spectrum.metadata_as_json(args.indent())?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json)).map_err(|e| UvvisError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_export(&args.file.display().to_string(), &path.display().to_string());
        }
        None => println!("{}", json),
    }

    Ok(())
}
