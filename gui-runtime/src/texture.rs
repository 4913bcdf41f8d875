//! # Texture 模块
//!
//! 纹理路径约定：
//!
//! ```text
//! <namespace>/gui_creator/<gui_name>/<skin_pack>/background_page_<page_id>.png
//! <namespace>/gui_creator/<gui_name>/<skin_pack>/sheet_<sheet>.png
//! ```
//!
//! 目录名由编辑器导出时保证是安全的文件名，这里只做字符串拼接。

use crate::manifest::PageId;

/// 默认命名空间（资源包中的 `assets/minecraft/textures/gui`）
pub const DEFAULT_TEXTURE_NAMESPACE: &str = "minecraft:textures/gui";

/// 某个 GUI + 皮肤包下的纹理路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturePaths {
    root: String,
}

impl TexturePaths {
    /// 没有皮肤包时省略皮肤包目录
    pub fn new(namespace: &str, gui_name: &str, skin_pack: Option<&str>) -> Self {
        let namespace = namespace.trim_end_matches('/');
        let root = match skin_pack {
            Some(skin) => format!("{}/gui_creator/{}/{}/", namespace, gui_name, skin),
            None => format!("{}/gui_creator/{}/", namespace, gui_name),
        };
        Self { root }
    }

    /// 目录前缀（以 `/` 结尾）
    pub fn root(&self) -> &str {
        &self.root
    }

    /// 页面背景
    pub fn background(&self, page: &PageId) -> String {
        format!("{}background_page_{}.png", self.root, page)
    }

    /// 组件贴图表
    pub fn sheet(&self, sheet: u32) -> String {
        format!("{}sheet_{}.png", self.root, sheet)
    }
}
