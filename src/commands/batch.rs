//! # batch 命令实现
//!
//! 批量读取光谱文件，为每个文件输出 `<stem>.json` 元数据
//! （`--with-data` 时同时输出 `<stem>.csv` 数据）。输出目录镜像输入目录的子目录结构。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/`, `spectrum.rs`, `export.rs`, `utils/output.rs`

use crate::cli::batch::BatchArgs;
use ocean_uvvis::batch::{BatchRunner, FileCollector, ProcessResult};
use ocean_uvvis::utils::output;
use ocean_uvvis::{export, Result, Spectrum, UvvisError};

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Converting spectrum files");

    if !args.input.exists() {
        return Err(UvvisError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    fs::create_dir_all(&args.output).map_err(|e| UvvisError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to convert", files.len()));

    let result = BatchRunner::new(args.jobs).run(&files, |path| {
        match convert_file(
            path,
            &args.input,
            &args.output,
            args.indent,
            args.with_data,
            args.overwrite,
        ) {
            Ok(status) => status,
            Err(e) => ProcessResult::Failed(path.display().to_string(), e.to_string()),
        }
    })?;

    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    output::print_done(&format!(
        "Converted {} of {} file(s) into '{}' ({} skipped, {} failed)",
        result.success,
        result.total(),
        args.output.display(),
        result.skipped,
        result.failed
    ));

    Ok(())
}

/// 输出文件的基础路径（不含扩展名）
///
/// 保留输入文件相对 `input_root` 的子目录结构，避免不同子目录中
/// 同名文件写到同一个输出上。
fn output_base(input: &Path, input_root: &Path, output_dir: &Path) -> PathBuf {
    let relative = input
        .strip_prefix(input_root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .or_else(|| input.file_name().map(Path::new))
        .unwrap_or_else(|| Path::new("spectrum"));
    output_dir.join(relative.with_extension(""))
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

/// 转换单个文件
///
/// JSON 最后写入：CSV 失败时不会留下让下次运行误判为“已完成”的 JSON。
fn convert_file(
    input: &Path,
    input_root: &Path,
    output_dir: &Path,
    indent: usize,
    with_data: bool,
    overwrite: bool,
) -> Result<ProcessResult> {
    let name = input.display().to_string();
    let base = output_base(input, input_root, output_dir);

    let json_path = with_suffix(&base, ".json");
    if json_path.exists() && !overwrite {
        return Ok(ProcessResult::Skipped(name));
    }

    let spectrum = Spectrum::open(input)?;
    let json = spectrum.metadata_as_json(Some(indent))?;

    if let Some(parent) = json_path.parent() {
        fs::create_dir_all(parent).map_err(|e| UvvisError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    if with_data {
        export::to_csv(&spectrum, &with_suffix(&base, ".csv"))?;
    }

    fs::write(&json_path, format!("{}\n", json)).map_err(|e| UvvisError::FileWriteError {
        path: json_path.display().to_string(),
        source: e,
    })?;

    Ok(ProcessResult::Success(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Data from a.txt Node\n\
XAxis mode: Wavelengths\n\
>>>>>Begin Spectral Data<<<<<\n\
200.1\t0.023\n";

    #[test]
    fn test_convert_file_writes_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.txt");
        fs::write(&input, SAMPLE).unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let first = convert_file(&input, dir.path(), &out, 2, true, false).unwrap();
        assert!(matches!(first, ProcessResult::Success(_)));
        assert!(out.join("a.json").exists());
        assert!(out.join("a.csv").exists());

        let second = convert_file(&input, dir.path(), &out, 2, false, false).unwrap();
        assert!(matches!(second, ProcessResult::Skipped(_)));

        let third = convert_file(&input, dir.path(), &out, 2, false, true).unwrap();
        assert!(matches!(third, ProcessResult::Success(_)));
    }

    #[test]
    fn test_convert_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, "Desc\ngarbage\n").unwrap();

        let err = convert_file(&input, dir.path(), dir.path(), 4, false, false).unwrap_err();
        assert!(matches!(err, UvvisError::MalformedHeaderLine { .. }));
        assert!(!dir.path().join("bad.json").exists());
    }

    #[test]
    fn test_same_stem_in_sibling_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("in");
        let out = dir.path().join("out");
        for (sub, spectrometer) in [("a", "FLMS00001"), ("b", "FLMS00002")] {
            fs::create_dir_all(root.join(sub)).unwrap();
            fs::write(
                root.join(sub).join("x.txt"),
                format!("Desc\nSpectrometer: {}\n", spectrometer),
            )
            .unwrap();
        }

        let files = FileCollector::new(root.clone()).recursive(true).collect();
        assert_eq!(files.len(), 2);

        let result = BatchRunner::new(2)
            .show_progress(false)
            .run(&files, |path| {
                convert_file(path, &root, &out, 4, false, true).unwrap_or_else(|e| {
                    ProcessResult::Failed(path.display().to_string(), e.to_string())
                })
            })
            .unwrap();
        assert_eq!(result.success, 2);

        let a = fs::read_to_string(out.join("a").join("x.json")).unwrap();
        let b = fs::read_to_string(out.join("b").join("x.json")).unwrap();
        assert!(a.contains("FLMS00001"));
        assert!(b.contains("FLMS00002"));
    }

    #[test]
    fn test_single_file_input_and_dotted_stem() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("run.1.txt");
        fs::write(&input, SAMPLE).unwrap();
        let out = dir.path().join("out");

        convert_file(&input, &input, &out, 4, false, false).unwrap();
        assert!(out.join("run.1.json").exists());
    }

    #[test]
    fn test_failed_csv_leaves_no_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.txt");
        fs::write(&input, SAMPLE).unwrap();
        let out = dir.path().join("out");
        // 以目录占住 CSV 的输出路径，使 CSV 写入失败
        fs::create_dir_all(out.join("a.csv")).unwrap();

        assert!(convert_file(&input, dir.path(), &out, 4, true, false).is_err());
        assert!(!out.join("a.json").exists());
    }
}
