//! # Headless 模块
//!
//! 内存中的 [`GuiHost`] 实现，不依赖任何图形设备。
//!
//! 用于命令行工具和测试：记录创建的控件、背景、消息与推送次数，
//! 并可按控件类型关闭悬浮文本能力，以模拟能力不全的宿主。

use std::collections::HashSet;

use crate::host::{EditableText, GuiHost, HoverText, Widget, WidgetKind, WidgetSpec};
use crate::manifest::ComponentId;

/// 无界面控件
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessWidget {
    pub spec: WidgetSpec,
    pub hover_text: Option<String>,
    pub text: Option<String>,
    supports_hover: bool,
}

impl HeadlessWidget {
    pub fn id(&self) -> &ComponentId {
        self.spec.id()
    }

    pub fn kind(&self) -> WidgetKind {
        self.spec.kind()
    }

    /// 单行描述，便于打印和快照对比
    pub fn describe(&self) -> String {
        let mut line = format!("{} {}", self.kind().as_str(), self.id());
        match &self.spec {
            WidgetSpec::Button { rect, label, .. }
            | WidgetSpec::TexturedRect { rect, label, .. } => {
                line.push_str(&format!(" @{},{} {}x{}", rect.x, rect.y, rect.w, rect.h));
                if let Some(texture) = self.spec.texture() {
                    let file = texture.path.rsplit('/').next().unwrap_or(&texture.path);
                    line.push_str(&format!(" {}+{},{}", file, texture.tex.x, texture.tex.y));
                }
                if !label.is_empty() {
                    line.push_str(&format!(" label={}", label));
                }
            }
            WidgetSpec::Label { rect, text, .. } => {
                line.push_str(&format!(" @{},{} {}x{}", rect.x, rect.y, rect.w, rect.h));
                if !text.is_empty() {
                    line.push_str(&format!(" text={}", text));
                }
            }
            WidgetSpec::TextField { rect, .. } => {
                line.push_str(&format!(" @{},{} {}x{}", rect.x, rect.y, rect.w, rect.h));
            }
            WidgetSpec::ScrollList { rect, items, .. } => {
                line.push_str(&format!(" @{},{} {}x{}", rect.x, rect.y, rect.w, rect.h));
                line.push_str(&format!(" items={}", items.join("|")));
            }
            WidgetSpec::ItemSlot { anchor, .. } => {
                line.push_str(&format!(" @{:.1},{:.1}", anchor.x, anchor.y));
            }
        }
        if let Some(text) = &self.text {
            line.push_str(&format!(" value={}", text));
        }
        if let Some(hover) = &self.hover_text {
            line.push_str(&format!(" hover={}", hover));
        }
        line
    }
}

impl HoverText for HeadlessWidget {
    fn set_hover_text(&mut self, text: &str) {
        self.hover_text = Some(text.to_string());
    }
}

impl EditableText for HeadlessWidget {
    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

impl Widget for HeadlessWidget {
    fn hover_text(&mut self) -> Option<&mut dyn HoverText> {
        if self.supports_hover {
            Some(self)
        } else {
            None
        }
    }

    fn editable_text(&mut self) -> Option<&mut dyn EditableText> {
        match self.spec {
            WidgetSpec::TextField { .. } => Some(self),
            _ => None,
        }
    }
}

/// 无界面宿主
#[derive(Debug, Default)]
pub struct HeadlessHost {
    widgets: Vec<HeadlessWidget>,
    background: Option<String>,
    messages: Vec<String>,
    updates: usize,
    closed: bool,
    hoverless: HashSet<WidgetKind>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 让某类控件不支持悬浮文本
    pub fn without_hover_text(mut self, kind: WidgetKind) -> Self {
        self.hoverless.insert(kind);
        self
    }

    /// 当前所有控件（创建顺序）
    pub fn widgets(&self) -> &[HeadlessWidget] {
        &self.widgets
    }

    pub fn widget(&self, id: &ComponentId) -> Option<&HeadlessWidget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.widget(id).is_some()
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `update()` 被调用的次数
    pub fn update_count(&self) -> usize {
        self.updates
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// 控件树的文本表示，每个控件一行
    pub fn describe(&self) -> Vec<String> {
        self.widgets.iter().map(HeadlessWidget::describe).collect()
    }
}

impl GuiHost for HeadlessHost {
    fn add_widget(&mut self, spec: WidgetSpec) -> &mut dyn Widget {
        let supports_hover = !self.hoverless.contains(&spec.kind());
        let index = self.widgets.len();
        self.widgets.push(HeadlessWidget {
            spec,
            hover_text: None,
            text: None,
            supports_hover,
        });
        &mut self.widgets[index]
    }

    fn remove_widget(&mut self, id: &ComponentId) {
        self.widgets.retain(|w| w.id() != id);
    }

    fn widget_mut(&mut self, id: &ComponentId) -> Option<&mut dyn Widget> {
        // 物品槽创建后不可寻址
        self.widgets
            .iter_mut()
            .find(|w| w.id() == id && w.kind() != WidgetKind::ItemSlot)
            .map(|w| w as &mut dyn Widget)
    }

    fn set_background(&mut self, texture: &str) {
        self.background = Some(texture.to_string());
    }

    fn update(&mut self) {
        self.updates += 1;
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn send_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
