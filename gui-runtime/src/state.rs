//! # State 模块
//!
//! 一次界面交互的全部可变状态。
//!
//! ## 设计原则
//!
//! - 不使用进程级全局变量，状态显式放在 [`GuiSession`] 中
//! - 每次打开界面都新建会话，后续事件由宿主把会话交还给解释器
//! - 会话可序列化，宿主可以在两次事件之间把它存起来

use serde::{Deserialize, Serialize};

use crate::error::RuntimeError;
use crate::manifest::{Manifest, Page, PageId};
use crate::texture::TexturePaths;

/// 界面会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSession {
    /// 本次交互载入的 manifest（开关状态在此就地修改）
    pub manifest: Manifest,
    /// 选中的皮肤包
    pub skin_pack: Option<String>,
    /// 当前页面
    pub current_page: PageId,
}

impl GuiSession {
    pub fn new(manifest: Manifest, skin_pack: Option<String>, current_page: PageId) -> Self {
        Self {
            manifest,
            skin_pack,
            current_page,
        }
    }

    /// 当前页面
    pub fn page(&self) -> Result<&Page, RuntimeError> {
        self.manifest.page(&self.current_page)
    }

    /// 当前 GUI + 皮肤包下的纹理路径
    pub fn texture_paths(&self, namespace: &str) -> TexturePaths {
        let skin_pack = self.skin_pack.as_deref();
        TexturePaths::new(namespace, &self.manifest.gui_name, skin_pack)
    }
}
