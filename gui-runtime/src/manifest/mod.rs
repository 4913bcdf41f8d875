//! # Manifest 模块
//!
//! 布局编辑器导出的 GUI 描述（`gui_manifest.json`）。
//!
//! ## 结构
//!
//! ```text
//! Manifest
//!  ├─ gui_name / size / skin_packs
//!  └─ pages[]
//!      └─ components[]   // 按 type 区分的组件记录
//! ```
//!
//! Manifest 载入后只读；每次交互都从磁盘重新读取，
//! 因此外部修改会在下次打开界面时生效。

mod component;
mod ident;
mod validate;

pub use component::{
    ButtonComponent, Component, ComponentBase, ComponentEntry, PlainComponent,
    ScrollListComponent, TexCoord, TilePos, TileSize, UnknownComponent,
};
pub use ident::{ComponentId, Ident, PageId};
pub use validate::ManifestWarning;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LoadError, RuntimeError};

/// 导出器当前写入的 manifest 版本
pub const MANIFEST_VERSION: u32 = 3;

/// 页面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 页面 id
    #[serde(rename = "page")]
    pub id: PageId,
    /// 组件（按声明顺序构建）
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

impl Page {
    pub fn new(id: impl Into<PageId>, components: Vec<ComponentEntry>) -> Self {
        Self {
            id: id.into(),
            components,
        }
    }

    /// 本页所有组件 id（声明顺序）
    pub fn component_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.iter().filter_map(ComponentEntry::id)
    }

    /// 查找组件，未找到返回 `None`
    pub fn find_component(&self, id: &ComponentId) -> Option<&Component> {
        self.components
            .iter()
            .filter_map(ComponentEntry::as_known)
            .find(|c| c.id() == id)
    }

    /// 查找组件，未找到视为逻辑错误
    pub fn component(&self, id: &ComponentId) -> Result<&Component, RuntimeError> {
        self.find_component(id)
            .ok_or_else(|| RuntimeError::ComponentNotFound {
                page: self.id.clone(),
                component: id.clone(),
            })
    }

    pub fn component_mut(&mut self, id: &ComponentId) -> Result<&mut Component, RuntimeError> {
        let page = self.id.clone();
        self.components
            .iter_mut()
            .find_map(|entry| match entry {
                ComponentEntry::Known(c) if c.id() == id => Some(c),
                _ => None,
            })
            .ok_or_else(|| RuntimeError::ComponentNotFound {
                page,
                component: id.clone(),
            })
    }
}

/// GUI manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// 格式版本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// GUI 名称（同时是纹理目录名）
    pub gui_name: String,
    /// 编辑器网格尺寸（16 或 32）
    #[serde(default = "default_grid_size")]
    pub size: u32,
    /// 可用皮肤包（有序）
    #[serde(default)]
    pub skin_packs: Vec<String>,
    /// 初始页面，缺省为第一页
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<PageId>,
    /// 页面
    #[serde(default)]
    pub pages: Vec<Page>,
}

fn default_grid_size() -> u32 {
    16
}

impl Manifest {
    /// 创建空 manifest
    pub fn new(gui_name: impl Into<String>) -> Self {
        Self {
            version: Some(MANIFEST_VERSION),
            gui_name: gui_name.into(),
            size: default_grid_size(),
            skin_packs: Vec::new(),
            start_page: None,
            pages: Vec::new(),
        }
    }

    /// 从文件加载 manifest
    ///
    /// 空文件返回 `Ok(None)`；读取或解析失败返回错误，不做部分恢复。
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 从 JSON 文本解析，空白文本返回 `Ok(None)`
    pub fn from_json_str(content: &str) -> Result<Option<Self>, serde_json::Error> {
        if content.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(content).map(Some)
    }

    /// 选择皮肤包
    ///
    /// 1. `preferred` 在列表中 → `preferred`
    /// 2. 列表非空 → 第一个
    /// 3. 列表为空 → 原样返回 `preferred`（可能为 `None`）
    pub fn pick_skin_pack(&self, preferred: Option<&str>) -> Option<String> {
        if let Some(name) = preferred {
            if self.skin_packs.iter().any(|p| p == name) {
                return Some(name.to_string());
            }
        }
        self.skin_packs
            .first()
            .cloned()
            .or_else(|| preferred.map(str::to_string))
    }

    /// 所有页面 id（声明顺序）
    pub fn page_ids(&self) -> impl Iterator<Item = &PageId> {
        self.pages.iter().map(|p| &p.id)
    }

    /// 查找页面，未找到返回 `None`
    pub fn find_page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    /// 查找页面，未找到视为逻辑错误
    pub fn page(&self, id: &PageId) -> Result<&Page, RuntimeError> {
        self.find_page(id)
            .ok_or_else(|| RuntimeError::PageNotFound { page: id.clone() })
    }

    pub fn page_mut(&mut self, id: &PageId) -> Result<&mut Page, RuntimeError> {
        self.pages
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| RuntimeError::PageNotFound { page: id.clone() })
    }

    /// 初始页面：`start_page`，否则第一页
    pub fn start_page_id(&self) -> Option<&PageId> {
        self.start_page.as_ref().or_else(|| self.page_ids().next())
    }
}
