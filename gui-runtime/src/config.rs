//! # Config 模块
//!
//! 解释器配置。
//!
//! ## 配置优先级
//!
//! 1. 调用方显式传入（命令行参数、宿主事件）
//! 2. 配置文件
//! 3. 默认值

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::texture::DEFAULT_TEXTURE_NAMESPACE;

/// 页面组装时遇到未知组件类型的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssemblyMode {
    /// 跳过并记录警告（兼容更新版本的导出器）
    #[default]
    Lenient,
    /// 拒绝组装
    Strict,
}

/// 解释器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// manifest 文件路径
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// 纹理命名空间前缀
    #[serde(default = "default_texture_namespace")]
    pub texture_namespace: String,

    /// 首选皮肤包
    #[serde(default)]
    pub preferred_skin_pack: Option<String>,

    /// 未知组件处理方式
    #[serde(default)]
    pub assembly_mode: AssemblyMode,

    /// 玩家消息前缀
    #[serde(default = "default_message_prefix")]
    pub message_prefix: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            texture_namespace: default_texture_namespace(),
            preferred_skin_pack: None,
            assembly_mode: AssemblyMode::default(),
            message_prefix: default_message_prefix(),
        }
    }
}

// 默认值函数
fn default_manifest_path() -> PathBuf {
    PathBuf::from("gui_manifest.json")
}

fn default_texture_namespace() -> String {
    DEFAULT_TEXTURE_NAMESPACE.to_string()
}

fn default_message_prefix() -> String {
    "[GUI] ".to_string()
}

impl InterpreterConfig {
    /// 指定 manifest 路径，其余取默认值
    pub fn with_manifest_path(path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: path.into(),
            ..Self::default()
        }
    }

    /// 从 JSON 文件加载配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 加前缀的单行玩家消息
    pub fn format_message(&self, text: &str) -> String {
        let single_line = text.lines().collect::<Vec<_>>().join(" ");
        format!("{}{}", self.message_prefix, single_line)
    }
}
