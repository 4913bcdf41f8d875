//! # Input 模块
//!
//! 宿主向解释器传递的交互事件。
//!
//! 宿主一次只投递一个事件，解释器处理完毕后才会收到下一个。
//! "打开界面"不在此列，由 [`Interpreter::open`](crate::Interpreter::open) 单独处理。

use serde::{Deserialize, Serialize};

use crate::manifest::ComponentId;

/// 交互事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuiEvent {
    /// 按钮被按下
    ButtonPress { id: ComponentId },

    /// 滚动列表选中了某一项
    ScrollSelect {
        id: ComponentId,
        index: usize,
        value: String,
    },
}

impl GuiEvent {
    /// 创建按下事件
    pub fn press(id: impl Into<ComponentId>) -> Self {
        Self::ButtonPress { id: id.into() }
    }

    /// 创建选择事件
    pub fn select(id: impl Into<ComponentId>, index: usize, value: impl Into<String>) -> Self {
        Self::ScrollSelect {
            id: id.into(),
            index,
            value: value.into(),
        }
    }

    /// 事件来源组件
    pub fn id(&self) -> &ComponentId {
        match self {
            GuiEvent::ButtonPress { id } | GuiEvent::ScrollSelect { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let press = GuiEvent::press(ComponentId::Int(3));
        assert_eq!(
            press,
            GuiEvent::ButtonPress {
                id: ComponentId::Int(3)
            }
        );

        let select = GuiEvent::select("list", 1, "Sword");
        assert_eq!(select.id(), &ComponentId::from("list"));
    }

    #[test]
    fn test_event_serialization() {
        let event = GuiEvent::select(ComponentId::Int(7), 2, "Bow");
        let json = serde_json::to_string(&event).unwrap();
        let back: GuiEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
