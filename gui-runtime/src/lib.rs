//! # GUI Runtime
//!
//! 布局编辑器导出的 GUI manifest 的解释器。
//!
//! ## 架构概述
//!
//! `gui-runtime` 不绑定任何图形后端。它读取 `gui_manifest.json`，
//! 把其中的组件翻译成宿主控件，并处理之后的交互事件：
//!
//! ```text
//! Host                          Interpreter
//!   │                              │
//!   │──── open(request) ─────────►│ load → skin → page → assemble
//!   │◄─── GuiSession ─────────────│
//!   │                              │
//!   │──── GuiEvent + session ────►│ handle_event()
//!   │◄─── EventOutcome ───────────│
//!   │                              │
//! ```
//!
//! 控件创建、背景设置、消息发送都通过 [`GuiHost`] trait 回调宿主。
//!
//! ## 核心类型
//!
//! - [`Manifest`]：GUI 描述（页面、组件、皮肤包）
//! - [`Interpreter`]：解释器
//! - [`GuiSession`]：一次交互的可变状态
//! - [`GuiEvent`]：宿主投递的交互事件
//! - [`GuiHost`]：宿主控件工厂
//!
//! ## 使用示例
//!
//! ```ignore
//! use gui_runtime::{GuiEvent, HeadlessHost, Interpreter, InterpreterConfig, OpenRequest};
//!
//! let mut interpreter = Interpreter::new(InterpreterConfig::with_manifest_path("gui_manifest.json"));
//! let mut host = HeadlessHost::new();
//!
//! let mut session = interpreter.open(&mut host, &OpenRequest::default())?;
//! interpreter.handle_event(&mut host, &mut session, &GuiEvent::press("btn1"))?;
//! ```
//!
//! ## 模块结构
//!
//! - [`manifest`]：manifest 数据模型、载入与校验
//! - [`geometry`]：网格到像素的换算
//! - [`texture`]：纹理路径
//! - [`host`]：宿主接口
//! - [`headless`]：内存宿主
//! - [`runtime`]：解释器
//! - [`config`]：解释器配置
//! - [`error`]：错误类型定义

pub mod config;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod input;
pub mod manifest;
pub mod runtime;
pub mod state;
pub mod texture;

// 重导出核心类型
pub use config::{AssemblyMode, InterpreterConfig};
pub use error::{GuiError, GuiResult, LoadError, RuntimeError};
pub use geometry::{PixelPoint, PixelRect, TILE_SCALE};
pub use headless::{HeadlessHost, HeadlessWidget};
pub use host::{EditableText, GuiHost, HoverText, TextureRef, Widget, WidgetKind, WidgetSpec};
pub use input::GuiEvent;
pub use manifest::{
    ButtonComponent, Component, ComponentBase, ComponentEntry, ComponentId, Ident, Manifest,
    ManifestWarning, Page, PageId, PlainComponent, ScrollListComponent, TexCoord, TilePos,
    TileSize, UnknownComponent,
};
pub use runtime::{EventOutcome, GuiHooks, HookOutcome, Interpreter, NoHooks, OpenRequest};
pub use state::GuiSession;
pub use texture::{DEFAULT_TEXTURE_NAMESPACE, TexturePaths};
