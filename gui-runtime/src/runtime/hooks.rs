//! # Hooks 模块
//!
//! 嵌入方（具体游戏脚本）的扩展点。
//!
//! - `update_manifest`：组装前修改 manifest，例如按条件解锁按钮
//! - `on_button`：在内置行为之前处理按钮，可选择接管
//! - `on_scroll_select`：接收列表选择

use crate::host::GuiHost;
use crate::manifest::{ComponentId, Manifest, PageId};

/// `on_button` 的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// 继续执行内置行为（跳转/关闭/切换）
    Continue,
    /// 已处理，跳过内置行为
    Handled,
}

/// 嵌入方扩展点，所有方法默认不做任何事
pub trait GuiHooks {
    /// 每次打开界面、组装页面之前调用
    fn update_manifest(&mut self, _manifest: &mut Manifest) {}

    /// 按钮被按下
    fn on_button(
        &mut self,
        _host: &mut dyn GuiHost,
        _page: &PageId,
        _id: &ComponentId,
    ) -> HookOutcome {
        HookOutcome::Continue
    }

    /// 列表项被选中
    fn on_scroll_select(
        &mut self,
        _host: &mut dyn GuiHost,
        _page: &PageId,
        _id: &ComponentId,
        _index: usize,
        _value: &str,
    ) {
    }
}

/// 不做任何扩展
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl GuiHooks for NoHooks {}
