//! # ocean-uvvis - Ocean Insight UV-vis 光谱文件读取库
//!
//! 读取 "ASCII with header data" 格式的 UV-vis 光谱文件，提取并归一化文件头元数据，
//! 并以 JSON 形式输出元数据。
//!
//! ```no_run
//! use ocean_uvvis::Spectrum;
//!
//! let spectrum = Spectrum::open("absorbance_00001.txt")?;
//! println!("{}", spectrum.metadata_as_json(Some(4))?);
//! # Ok::<(), ocean_uvvis::UvvisError>(())
//! ```
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── spectrum.rs (聚合对象：路径 + 文件头 + 元数据 + 数据)
//!   │     ├── parsers/   (文件解析、文件头归一化)
//!   │     ├── models/    (数据模型、单位与坐标轴)
//!   │     └── json/      (异构 JSON 编码器)
//!   ├── export.rs   (CSV / XY 导出)
//!   ├── batch/      (批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod error;
pub mod export;
pub mod json;
pub mod models;
pub mod parsers;
pub mod spectrum;
pub mod utils;

pub use error::{Result, UvvisError};
pub use json::JsonEncoder;
pub use models::{AxisDescriptor, Metadata, SpectralSeries};
pub use spectrum::Spectrum;
