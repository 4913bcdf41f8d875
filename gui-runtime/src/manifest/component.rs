//! # Component 模块
//!
//! manifest 中的组件记录。
//!
//! 组件按 `type` 字段区分为封闭的枚举 [`Component`]；
//! 无法识别的 `type` 不会导致整个 manifest 加载失败，而是保留为
//! [`UnknownComponent`]，由页面组装阶段决定跳过还是报错。

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::ident::{ComponentId, PageId};

/// 网格坐标（单位：格）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 网格尺寸（单位：格）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileSize {
    pub w: i32,
    pub h: i32,
}

impl TileSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// 纹理图集内的原点
///
/// 导出器写入的是贴图表（sheet）内的像素偏移，运行时原样交给宿主。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TexCoord {
    pub x: i32,
    pub y: i32,
}

impl TexCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 所有组件共有的字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentBase {
    /// 组件 id（页面内唯一）
    pub id: ComponentId,
    /// 左上角位置
    pub offset: TilePos,
    /// 占用的格子数
    pub size_tiles: TileSize,
    /// 贴图表序号（导出器从 1 开始编号）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<u32>,
    /// 基础纹理原点
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tex: Option<TexCoord>,
    /// 悬浮提示
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<String>,
    /// 文本：按钮/标签上显示，文本框中作为初始内容
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ComponentBase {
    pub fn new(id: impl Into<ComponentId>, offset: TilePos, size_tiles: TileSize) -> Self {
        Self {
            id: id.into(),
            offset,
            size_tiles,
            sheet: None,
            tex: None,
            hover_text: None,
            label: None,
        }
    }

    /// 非空的 label
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref().filter(|s| !s.is_empty())
    }

    /// 非空的悬浮提示
    pub fn hover(&self) -> Option<&str> {
        self.hover_text.as_deref().filter(|s| !s.is_empty())
    }
}

/// 按钮与开关按钮
///
/// 两种按钮共享同一组字段，区别只在于按下时是否切换 `toggled`，
/// 以及未锁定时的纹理优先级。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonComponent {
    #[serde(flatten)]
    pub base: ComponentBase,
    /// 开启态纹理
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_tex: Option<TexCoord>,
    /// 禁用/锁定态纹理
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_tex: Option<TexCoord>,
    /// 开启且锁定时的纹理
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_disabled_tex: Option<TexCoord>,
    #[serde(default)]
    pub toggled: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub locked: bool,
    /// 按下后跳转的页面
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_page: Option<PageId>,
    /// 按下后关闭界面
    #[serde(default)]
    pub close_gui: bool,
}

impl ButtonComponent {
    pub fn new(base: ComponentBase) -> Self {
        Self {
            base,
            toggle_tex: None,
            disabled_tex: None,
            toggle_disabled_tex: None,
            toggled: false,
            disabled: false,
            locked: false,
            open_page: None,
            close_gui: false,
        }
    }

    /// 锁定态纹理
    ///
    /// 开启 → `toggle_disabled_tex`，否则 → `disabled_tex`；缺失时回退到基础纹理。
    pub fn locked_texture(&self) -> Option<TexCoord> {
        let variant = if self.toggled {
            self.toggle_disabled_tex
        } else {
            self.disabled_tex
        };
        variant.or(self.base.tex)
    }

    /// 未锁定开关的纹理
    ///
    /// 优先级：禁用（且有 `disabled_tex`）> 开启（且有 `toggle_tex`）> 基础纹理。
    pub fn toggle_texture(&self) -> Option<TexCoord> {
        if self.disabled {
            if let Some(tex) = self.disabled_tex {
                return Some(tex);
            }
        }
        if self.toggled {
            if let Some(tex) = self.toggle_tex {
                return Some(tex);
            }
        }
        self.base.tex
    }
}

/// 只有公共字段的组件（标签、物品槽、文本框）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainComponent {
    #[serde(flatten)]
    pub base: ComponentBase,
}

/// 滚动列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollListComponent {
    #[serde(flatten)]
    pub base: ComponentBase,
    #[serde(default)]
    pub items: Vec<String>,
}

/// 组件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Button(ButtonComponent),
    ToggleButton(ButtonComponent),
    Label(PlainComponent),
    ItemSlot(PlainComponent),
    TextField(PlainComponent),
    ScrollList(ScrollListComponent),
}

impl Component {
    /// 所有可识别的 `type` 值
    pub const TYPE_NAMES: [&'static str; 6] = [
        "button",
        "toggle_button",
        "label",
        "item_slot",
        "text_field",
        "scroll_list",
    ];

    pub fn base(&self) -> &ComponentBase {
        match self {
            Component::Button(b) | Component::ToggleButton(b) => &b.base,
            Component::Label(c) | Component::ItemSlot(c) | Component::TextField(c) => &c.base,
            Component::ScrollList(l) => &l.base,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.base().id
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Component::Button(_) => "button",
            Component::ToggleButton(_) => "toggle_button",
            Component::Label(_) => "label",
            Component::ItemSlot(_) => "item_slot",
            Component::TextField(_) => "text_field",
            Component::ScrollList(_) => "scroll_list",
        }
    }

    /// 按钮字段（普通按钮或开关按钮）
    pub fn as_button(&self) -> Option<&ButtonComponent> {
        match self {
            Component::Button(b) | Component::ToggleButton(b) => Some(b),
            _ => None,
        }
    }
}

/// 无法识别的组件，保留原始 JSON
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownComponent {
    pub type_name: String,
    pub id: Option<ComponentId>,
    pub raw: Value,
}

/// 页面中的一条组件记录
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentEntry {
    Known(Component),
    Unknown(UnknownComponent),
}

impl ComponentEntry {
    pub fn id(&self) -> Option<&ComponentId> {
        match self {
            ComponentEntry::Known(c) => Some(c.id()),
            ComponentEntry::Unknown(u) => u.id.as_ref(),
        }
    }

    pub fn as_known(&self) -> Option<&Component> {
        match self {
            ComponentEntry::Known(c) => Some(c),
            ComponentEntry::Unknown(_) => None,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            ComponentEntry::Known(c) => c.type_name(),
            ComponentEntry::Unknown(u) => &u.type_name,
        }
    }
}

impl From<Component> for ComponentEntry {
    fn from(component: Component) -> Self {
        Self::Known(component)
    }
}

impl<'de> Deserialize<'de> for ComponentEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let type_name = raw
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| D::Error::missing_field("type"))?;

        if Component::TYPE_NAMES.contains(&type_name.as_str()) {
            // 已知类型字段错误时直接报错，不降级为未知组件
            return serde_json::from_value(raw)
                .map(ComponentEntry::Known)
                .map_err(D::Error::custom);
        }

        let id = raw
            .get("id")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok());
        let unknown = UnknownComponent { type_name, id, raw };
        Ok(ComponentEntry::Unknown(unknown))
    }
}

impl Serialize for ComponentEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ComponentEntry::Known(c) => c.serialize(serializer),
            ComponentEntry::Unknown(u) => u.raw.serialize(serializer),
        }
    }
}
