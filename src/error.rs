//! # 统一错误处理模块
//!
//! 定义 ocean-uvvis 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 文件访问：`FileNotFound` / `FileReadError` / `NoPath`
//!   （调用者通常应优雅处理，例如提示换一个路径）
//! - 文件内容损坏：`MalformedHeaderLine` / `MalformedDataLine` /
//!   `InvalidHeaderValue` / `DateFormat` / `InvalidEncoding`
//! - 数据请求：`EmptySeries`
//! - 序列化：`UnencodableValue`
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// ocean-uvvis 统一错误类型
#[derive(Error, Debug)]
pub enum UvvisError {
    // ─────────────────────────────────────────────────────────────
    // 文件访问错误
    // ─────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No spectrum file given and none previously loaded")]
    NoPath,

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed header line {line}: '{content}' (expected 'Key: Value')")]
    MalformedHeaderLine { line: usize, content: String },

    #[error("Malformed data line {line}: '{content}'\nReason: {reason}")]
    MalformedDataLine {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Header '{key}' has value '{value}', expected {expected}")]
    InvalidHeaderValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Line {line} of {path} is not valid UTF-8 text")]
    InvalidEncoding { path: String, line: usize },

    #[error("Cannot parse acquisition date '{value}'\nReason: {reason}")]
    DateFormat { value: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Spectral data block is empty")]
    EmptySeries,

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("Object of type {type_name} is not JSON serializable")]
    UnencodableValue { type_name: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl UvvisError {
    /// 是否为文件访问类错误（文件不存在、无法读取、未指定路径）
    pub fn is_file_access(&self) -> bool {
        matches!(
            self,
            UvvisError::FileNotFound { .. } | UvvisError::FileReadError { .. } | UvvisError::NoPath
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, UvvisError>;
