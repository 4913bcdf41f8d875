//! # Runtime 模块
//!
//! 解释器核心，负责页面组装与交互分派。
//!
//! ## 模块结构
//!
//! - [`engine`]：解释器与事件分派
//! - [`builder`]：组件到宿主控件的转换
//! - [`hooks`]：嵌入方扩展点

pub mod builder;
pub mod engine;
pub mod hooks;

pub use builder::{build_component, widget_spec};
pub use engine::{EventOutcome, Interpreter, OpenRequest};
pub use hooks::{GuiHooks, HookOutcome, NoHooks};
