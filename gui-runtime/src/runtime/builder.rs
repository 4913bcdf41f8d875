//! # Builder 模块
//!
//! 将单个 [`Component`] 转换为宿主控件。
//!
//! ## 职责
//!
//! - [`widget_spec`]：纯函数，计算像素几何与纹理，产出 [`WidgetSpec`]
//! - [`build_component`]：创建控件并完成后处理（初始文本、悬浮文本）
//!
//! 物品槽创建后无法按 id 取回，其悬浮文本必须在创建时通过返回的句柄设置；
//! 其他控件统一在创建后按 id 取回再设置。

use tracing::debug;

use crate::geometry::{PixelRect, item_slot_anchor, label_rect};
use crate::host::{GuiHost, TextureRef, Widget, WidgetSpec};
use crate::manifest::{ButtonComponent, Component, ComponentBase, ComponentId, TexCoord};
use crate::texture::TexturePaths;

/// 计算组件对应的控件描述
pub fn widget_spec(component: &Component, paths: &TexturePaths) -> WidgetSpec {
    match component {
        Component::Button(button) => {
            if button.locked {
                disabled_spec(button, paths)
            } else {
                button_spec(button, button.base.tex, paths)
            }
        }
        Component::ToggleButton(button) => {
            if button.locked {
                disabled_spec(button, paths)
            } else {
                button_spec(button, button.toggle_texture(), paths)
            }
        }
        Component::Label(label) => WidgetSpec::Label {
            id: label.base.id.clone(),
            rect: label_rect(label.base.offset, label.base.size_tiles),
            text: label.base.label.clone().unwrap_or_default(),
        },
        Component::ItemSlot(slot) => WidgetSpec::ItemSlot {
            id: slot.base.id.clone(),
            anchor: item_slot_anchor(slot.base.offset, slot.base.size_tiles),
        },
        Component::TextField(field) => WidgetSpec::TextField {
            id: field.base.id.clone(),
            rect: base_rect(&field.base),
        },
        Component::ScrollList(list) => WidgetSpec::ScrollList {
            id: list.base.id.clone(),
            rect: base_rect(&list.base),
            items: list.items.clone(),
        },
    }
}

/// 创建控件并完成后处理
pub fn build_component(host: &mut dyn GuiHost, component: &Component, paths: &TexturePaths) {
    let spec = widget_spec(component, paths);
    let base = component.base();
    debug!(
        component = %base.id,
        kind = spec.kind().as_str(),
        "构建组件"
    );

    match component {
        Component::ItemSlot(_) => {
            let widget = host.add_widget(spec);
            if let Some(text) = base.hover() {
                apply_hover_text(widget, text);
            }
            // 物品槽没有按 id 的后处理
            return;
        }
        Component::TextField(_) => {
            let widget = host.add_widget(spec);
            if let Some(text) = base.label_text() {
                if let Some(editable) = widget.editable_text() {
                    editable.set_text(text);
                }
            }
        }
        _ => {
            host.add_widget(spec);
        }
    }

    if let Some(text) = base.hover() {
        set_hover_by_id(host, &base.id, text);
    }
}

/// 按 id 取回控件并设置悬浮文本；控件不存在或不支持时静默跳过
pub fn set_hover_by_id(host: &mut dyn GuiHost, id: &ComponentId, text: &str) {
    if let Some(widget) = host.widget_mut(id) {
        apply_hover_text(widget, text);
    }
}

fn apply_hover_text(widget: &mut dyn Widget, text: &str) {
    if let Some(hover) = widget.hover_text() {
        hover.set_hover_text(text);
    }
}

fn base_rect(base: &ComponentBase) -> PixelRect {
    PixelRect::from_tiles(base.offset, base.size_tiles)
}

fn texture_ref(
    base: &ComponentBase,
    tex: Option<TexCoord>,
    paths: &TexturePaths,
) -> Option<TextureRef> {
    let sheet = base.sheet?;
    Some(TextureRef {
        path: paths.sheet(sheet),
        tex: tex.unwrap_or_default(),
    })
}

fn button_spec(
    button: &ButtonComponent,
    tex: Option<TexCoord>,
    paths: &TexturePaths,
) -> WidgetSpec {
    WidgetSpec::Button {
        id: button.base.id.clone(),
        rect: base_rect(&button.base),
        label: button.base.label.clone().unwrap_or_default(),
        texture: texture_ref(&button.base, tex, paths),
    }
}

/// 锁定按钮：不可交互的贴图矩形
fn disabled_spec(button: &ButtonComponent, paths: &TexturePaths) -> WidgetSpec {
    WidgetSpec::TexturedRect {
        id: button.base.id.clone(),
        rect: base_rect(&button.base),
        label: button.base.label.clone().unwrap_or_default(),
        texture: texture_ref(&button.base, button.locked_texture(), paths),
    }
}
