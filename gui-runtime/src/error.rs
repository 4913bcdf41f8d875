//! # Error 模块
//!
//! 定义 gui-runtime 中使用的错误类型。
//!
//! - [`LoadError`]：读取/解析 manifest 或配置文件失败，属于致命错误
//! - [`RuntimeError`]：manifest 与调用方的 page/component id 不匹配，属于逻辑错误
//!
//! 禁用开关被按下、控件不支持悬浮文本等情况不是错误，不在此处建模。

use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::{ComponentId, PageId};

/// 加载错误
#[derive(Error, Debug)]
pub enum LoadError {
    /// 文件无法读取
    #[error("无法读取文件 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 格式错误
    #[error("无法解析 JSON {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 运行时错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// manifest 文件存在但为空
    #[error("manifest 文件为空: {path}")]
    EmptyManifest { path: String },

    /// manifest 没有任何页面可供打开
    #[error("manifest '{gui_name}' 不包含任何页面")]
    NoPages { gui_name: String },

    /// manifest 不包含该页面
    #[error("页面 '{page}' 未找到")]
    PageNotFound { page: PageId },

    /// 当前页面不包含该组件
    #[error("页面 '{page}' 中未找到组件 '{component}'")]
    ComponentNotFound {
        page: PageId,
        component: ComponentId,
    },

    /// 严格模式下遇到无法识别的组件类型
    #[error("页面 '{page}' 包含未知组件类型 '{type_name}'")]
    UnknownComponentType { page: PageId, type_name: String },
}

/// gui-runtime 统一错误类型
#[derive(Error, Debug)]
pub enum GuiError {
    /// 加载错误
    #[error("加载错误: {0}")]
    Load(#[from] LoadError),

    /// 运行时错误
    #[error("运行时错误: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Result 类型别名
pub type GuiResult<T> = Result<T, GuiError>;
