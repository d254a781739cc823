//! # export 命令实现
//!
//! 导出单个光谱文件的数据 (CSV / XY)。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `spectrum.rs`, `export.rs`, `utils/output.rs`

use crate::cli::export::{ExportArgs, ExportFormat};
use ocean_uvvis::utils::output;
use ocean_uvvis::{export, Result, Spectrum, UvvisError};

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    let output_path = args.output_path();

    if output_path.exists() && !args.overwrite {
        return Err(UvvisError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            output_path.display()
        )));
    }

    let spectrum = Spectrum::open(&args.file)?;
    if spectrum.series().is_empty() {
        output::print_warning("No spectral data block in file; writing header only");
    }

    match args.format {
        ExportFormat::Csv => export::to_csv(&spectrum, &output_path)?,
        ExportFormat::Xy => export::to_xy(&spectrum, &output_path)?,
    }

    output::print_export(
        &args.file.display().to_string(),
        &output_path.display().to_string(),
    );
    Ok(())
}
