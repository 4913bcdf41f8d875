//! # Host 模块
//!
//! 解释器与宿主 GUI 框架之间的接口。
//!
//! ## 设计说明
//!
//! - 解释器只通过 [`GuiHost`] 操作控件树，不依赖任何具体引擎
//! - 控件的可选能力（悬浮文本、可编辑文本）通过 [`Widget`] 上的
//!   `Option` 访问器声明，调用方按返回值判断是否支持，不支持时静默跳过
//! - [`WidgetSpec`] 描述"创建什么"，像素坐标已由解释器算好

use serde::{Deserialize, Serialize};

use crate::geometry::{PixelPoint, PixelRect};
use crate::manifest::{ComponentId, TexCoord};

/// 纹理引用：贴图表路径 + 表内原点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureRef {
    pub path: String,
    pub tex: TexCoord,
}

/// 控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Button,
    TexturedRect,
    Label,
    TextField,
    ScrollList,
    ItemSlot,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Button => "button",
            WidgetKind::TexturedRect => "textured_rect",
            WidgetKind::Label => "label",
            WidgetKind::TextField => "text_field",
            WidgetKind::ScrollList => "scroll_list",
            WidgetKind::ItemSlot => "item_slot",
        }
    }
}

/// 要创建的控件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetSpec {
    /// 可点击的按钮
    Button {
        id: ComponentId,
        rect: PixelRect,
        label: String,
        texture: Option<TextureRef>,
    },
    /// 不可交互的贴图矩形（锁定的按钮）
    TexturedRect {
        id: ComponentId,
        rect: PixelRect,
        label: String,
        texture: Option<TextureRef>,
    },
    /// 文本标签
    Label {
        id: ComponentId,
        rect: PixelRect,
        text: String,
    },
    /// 文本输入框
    TextField { id: ComponentId, rect: PixelRect },
    /// 滚动列表
    ScrollList {
        id: ComponentId,
        rect: PixelRect,
        items: Vec<String>,
    },
    /// 物品槽（以中心点定位）
    ///
    /// `id` 仅用于换页时移除，创建后不能通过 [`GuiHost::widget_mut`] 取回。
    ItemSlot { id: ComponentId, anchor: PixelPoint },
}

impl WidgetSpec {
    pub fn id(&self) -> &ComponentId {
        match self {
            WidgetSpec::Button { id, .. }
            | WidgetSpec::TexturedRect { id, .. }
            | WidgetSpec::Label { id, .. }
            | WidgetSpec::TextField { id, .. }
            | WidgetSpec::ScrollList { id, .. }
            | WidgetSpec::ItemSlot { id, .. } => id,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetSpec::Button { .. } => WidgetKind::Button,
            WidgetSpec::TexturedRect { .. } => WidgetKind::TexturedRect,
            WidgetSpec::Label { .. } => WidgetKind::Label,
            WidgetSpec::TextField { .. } => WidgetKind::TextField,
            WidgetSpec::ScrollList { .. } => WidgetKind::ScrollList,
            WidgetSpec::ItemSlot { .. } => WidgetKind::ItemSlot,
        }
    }

    /// 纹理（仅按钮与贴图矩形）
    pub fn texture(&self) -> Option<&TextureRef> {
        match self {
            WidgetSpec::Button { texture, .. } | WidgetSpec::TexturedRect { texture, .. } => {
                texture.as_ref()
            }
            _ => None,
        }
    }
}

/// 悬浮文本能力
pub trait HoverText {
    fn set_hover_text(&mut self, text: &str);
}

/// 可编辑文本能力
pub trait EditableText {
    fn set_text(&mut self, text: &str);
}

/// 宿主控件句柄
///
/// 默认不支持任何可选能力。
pub trait Widget {
    fn hover_text(&mut self) -> Option<&mut dyn HoverText> {
        None
    }

    fn editable_text(&mut self) -> Option<&mut dyn EditableText> {
        None
    }
}

/// 宿主控件树
pub trait GuiHost {
    /// 创建控件并返回其句柄
    fn add_widget(&mut self, spec: WidgetSpec) -> &mut dyn Widget;

    /// 按 id 移除控件；id 不存在时什么也不做
    fn remove_widget(&mut self, id: &ComponentId);

    /// 按 id 取回控件
    fn widget_mut(&mut self, id: &ComponentId) -> Option<&mut dyn Widget>;

    /// 设置背景纹理
    fn set_background(&mut self, texture: &str);

    /// 把控件树推送给玩家
    fn update(&mut self);

    /// 关闭界面
    fn close(&mut self);

    /// 向玩家发送单行消息
    fn send_message(&mut self, message: &str);
}
