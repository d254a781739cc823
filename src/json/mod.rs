//! # 异构 JSON 编码器
//!
//! 元数据树中除了 JSON 原生类型外，还可能含有物理量、日期时间等值。
//! 这些值以 [`Opaque`] 形式挂在树上，编码时按顺序尝试转换器链，
//! 第一个成功的转换器决定其 JSON 表示；全部失败则报 `UnencodableValue`。
//!
//! ## 依赖关系
//! - 被 `models/metadata.rs`, `spectrum.rs`, `commands/` 使用
//! - 子模块: converters

pub mod converters;

use crate::error::{Result, UvvisError};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;
use std::any::Any;
use std::fmt;

/// 元数据树节点
#[derive(Debug)]
pub enum Node {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Map(IndexMap<String, Node>),
    /// JSON 无法直接表示的值，交给转换器链处理
    Opaque(Opaque),
}

impl Node {
    /// 包装任意值为不透明节点
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Node::Opaque(Opaque::new(value))
    }

    /// 按键查找（仅对 `Map` 有效）
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(map) => map.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Bool(v)
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Integer(v)
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Float(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::String(v.to_string())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::String(v)
    }
}

impl From<IndexMap<String, Node>> for Node {
    fn from(v: IndexMap<String, Node>) -> Self {
        Node::Map(v)
    }
}

/// 类型擦除的叶子值，保留类型名用于报错
pub struct Opaque {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Opaque {
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn as_any(&self) -> &dyn Any {
        self.value.as_ref()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.type_name)
    }
}

/// 转换器不接受该值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported;

/// 类型专用转换器
pub type Converter = fn(&dyn Any) -> std::result::Result<JsonValue, Unsupported>;

/// 按顺序尝试转换器链的 JSON 编码器
pub struct JsonEncoder {
    converters: Vec<Converter>,
}

impl JsonEncoder {
    /// 使用给定的转换器链（顺序即优先级）
    pub fn new(converters: Vec<Converter>) -> Self {
        JsonEncoder { converters }
    }

    /// 将节点树转换为 `serde_json::Value`
    pub fn to_value(&self, node: &Node) -> Result<JsonValue> {
        let value = match node {
            Node::Bool(b) => JsonValue::Bool(*b),
            Node::Integer(i) => JsonValue::from(*i),
            // 非有限浮点数无法用 JSON 表示，输出 null
            Node::Float(f) => JsonValue::from(*f),
            Node::String(s) => JsonValue::String(s.clone()),
            Node::Map(map) => {
                let mut object = serde_json::Map::with_capacity(map.len());
                for (key, item) in map {
                    object.insert(key.clone(), self.to_value(item)?);
                }
                JsonValue::Object(object)
            }
            Node::Opaque(opaque) => self.convert_opaque(opaque)?,
        };
        Ok(value)
    }

    /// 编码为 JSON 字符串
    ///
    /// `indent` 为 `Some(n)` 时以 n 个空格缩进输出，`None` 时输出紧凑格式。
    pub fn encode(&self, node: &Node, indent: Option<usize>) -> Result<String> {
        let value = self.to_value(node)?;

        match indent {
            None => Ok(serde_json::to_string(&value)?),
            Some(width) => {
                let indent = " ".repeat(width);
                let mut buf = Vec::new();
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                value.serialize(&mut ser)?;
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
        }
    }

    fn convert_opaque(&self, opaque: &Opaque) -> Result<JsonValue> {
        for converter in &self.converters {
            if let Ok(value) = converter(opaque.as_any()) {
                return Ok(value);
            }
        }
        Err(UvvisError::UnencodableValue {
            type_name: opaque.type_name().to_string(),
        })
    }
}

/// 默认链：物理量优先，其次日期时间
impl Default for JsonEncoder {
    fn default() -> Self {
        JsonEncoder::new(vec![
            converters::quantity_to_json,
            converters::datetime_to_json,
        ])
    }
}
