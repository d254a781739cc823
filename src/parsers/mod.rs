//! # 解析器模块
//!
//! 提供 Ocean Insight 光谱文件的解析与文件头归一化。
//!
//! ## 依赖关系
//! - 被 `spectrum.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: ocean_ascii, header

pub mod header;
pub mod ocean_ascii;

pub use header::{normalize_header, parse_acquisition_date};
pub use ocean_ascii::{parse_ocean_content, parse_ocean_file, ParsedFile, DATA_MARKER};
