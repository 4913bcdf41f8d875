//! # Engine 模块
//!
//! 解释器核心：打开界面、组装页面、切换页面、处理交互事件。
//!
//! ## 交互模型
//!
//! ```text
//! open(host, request)            -> GuiSession
//! handle_event(host, session, e) -> EventOutcome
//! ```
//!
//! 1. `open` 从磁盘读取 manifest，选择皮肤包与初始页面，组装并推送
//! 2. 宿主保存返回的会话，之后的每个事件都连同会话一起交回
//! 3. 按钮事件按优先级分派：跳转页面 > 关闭界面 > 切换开关
//! 4. 换页是整页销毁重建；切换开关只替换被按下的那一个控件

use tracing::{debug, info, warn};

use crate::config::{AssemblyMode, InterpreterConfig};
use crate::error::{GuiResult, RuntimeError};
use crate::host::GuiHost;
use crate::input::GuiEvent;
use crate::manifest::{
    Component, ComponentEntry, ComponentId, Manifest, ManifestWarning, Page, PageId,
};
use crate::runtime::builder::build_component;
use crate::runtime::hooks::{GuiHooks, HookOutcome, NoHooks};
use crate::state::GuiSession;

/// 打开界面的请求参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenRequest {
    /// 指定初始页面，缺省为 manifest 的起始页
    pub page: Option<PageId>,
    /// 指定皮肤包，缺省使用配置中的首选皮肤包
    pub skin_pack: Option<String>,
}

impl OpenRequest {
    pub fn page(page: impl Into<PageId>) -> Self {
        Self {
            page: Some(page.into()),
            skin_pack: None,
        }
    }

    pub fn with_skin_pack(mut self, skin_pack: impl Into<String>) -> Self {
        self.skin_pack = Some(skin_pack.into());
        self
    }
}

/// 事件处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// 已切换页面
    Navigated { from: PageId, to: PageId },
    /// 已关闭界面
    Closed,
    /// 开关状态已切换
    Toggled { id: ComponentId, toggled: bool },
    /// 开关被锁定或禁用，未切换
    ToggleRejected { id: ComponentId },
    /// 列表项被选中
    Selected { id: ComponentId, index: usize },
    /// 扩展钩子已处理
    HandledByHook,
    /// 没有可执行的行为
    NoAction,
}

/// GUI manifest 解释器
///
/// 解释器本身不持有界面状态，所有状态都在 [`GuiSession`] 中。
pub struct Interpreter<K: GuiHooks = NoHooks> {
    config: InterpreterConfig,
    hooks: K,
}

impl Interpreter<NoHooks> {
    /// 创建不带扩展钩子的解释器
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            config,
            hooks: NoHooks,
        }
    }
}

impl<K: GuiHooks> Interpreter<K> {
    /// 创建带扩展钩子的解释器
    pub fn with_hooks(config: InterpreterConfig, hooks: K) -> Self {
        Self { config, hooks }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn hooks(&self) -> &K {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut K {
        &mut self.hooks
    }

    /// 打开界面
    ///
    /// 每次都从 `config.manifest_path` 重新读取 manifest；空文件视为错误。
    pub fn open(&mut self, host: &mut dyn GuiHost, request: &OpenRequest) -> GuiResult<GuiSession> {
        let path = &self.config.manifest_path;
        let Some(manifest) = Manifest::load(path)? else {
            let path = path.display().to_string();
            return Err(RuntimeError::EmptyManifest { path }.into());
        };
        self.open_manifest(host, manifest, request)
    }

    /// 用已载入的 manifest 打开界面
    pub fn open_manifest(
        &mut self,
        host: &mut dyn GuiHost,
        mut manifest: Manifest,
        request: &OpenRequest,
    ) -> GuiResult<GuiSession> {
        for warning in self.prepare_manifest(&mut manifest) {
            warn!(gui = %manifest.gui_name, warning = %warning, "Manifest 警告");
        }

        let requested = request.skin_pack.as_deref();
        let preferred = requested.or(self.config.preferred_skin_pack.as_deref());
        let skin_pack = manifest.pick_skin_pack(preferred);

        let start = manifest.start_page_id().cloned();
        let Some(page) = request.page.clone().or(start) else {
            let gui_name = manifest.gui_name.clone();
            return Err(RuntimeError::NoPages { gui_name }.into());
        };
        manifest.page(&page)?;

        info!(
            gui = %manifest.gui_name,
            page = %page,
            skin_pack = skin_pack.as_deref().unwrap_or("-"),
            "打开界面"
        );

        let session = GuiSession::new(manifest, skin_pack, page);
        self.assemble_page(host, &session)?;
        host.update();
        Ok(session)
    }

    /// 运行 `update_manifest` 钩子，返回钩子修改之后的校验警告
    fn prepare_manifest(&mut self, manifest: &mut Manifest) -> Vec<ManifestWarning> {
        self.hooks.update_manifest(manifest);
        manifest.validate()
    }

    /// 组装当前页面：设置背景，按声明顺序构建组件
    ///
    /// 不推送更新，由调用方决定何时 `update()`。
    pub fn assemble_page(&self, host: &mut dyn GuiHost, session: &GuiSession) -> GuiResult<()> {
        let page = session.page()?;
        self.check_assembly(page)?;

        let paths = session.texture_paths(&self.config.texture_namespace);
        host.set_background(&paths.background(&page.id));

        for entry in &page.components {
            match entry {
                ComponentEntry::Known(component) => build_component(host, component, &paths),
                ComponentEntry::Unknown(unknown) => {
                    warn!(
                        page = %page.id,
                        type_name = %unknown.type_name,
                        "跳过未知组件类型"
                    );
                }
            }
        }

        debug!(page = %page.id, components = page.components.len(), "页面组装完成");
        Ok(())
    }

    /// 严格模式下拒绝包含未知组件的页面
    fn check_assembly(&self, page: &Page) -> Result<(), RuntimeError> {
        if self.config.assembly_mode == AssemblyMode::Lenient {
            return Ok(());
        }
        for entry in &page.components {
            if let ComponentEntry::Unknown(unknown) = entry {
                return Err(RuntimeError::UnknownComponentType {
                    page: page.id.clone(),
                    type_name: unknown.type_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// 切换到另一页
    ///
    /// 先移除当前页的全部控件，再组装目标页并推送。
    /// 目标页不存在时不做任何修改。
    pub fn open_page(
        &self,
        host: &mut dyn GuiHost,
        session: &mut GuiSession,
        target: &PageId,
    ) -> GuiResult<()> {
        self.check_assembly(session.manifest.page(target)?)?;

        for id in session.page()?.component_ids() {
            host.remove_widget(id);
        }

        let from = std::mem::replace(&mut session.current_page, target.clone());
        debug!(from = %from, to = %target, "切换页面");

        self.assemble_page(host, session)?;
        host.update();
        Ok(())
    }

    /// 分派交互事件
    pub fn handle_event(
        &mut self,
        host: &mut dyn GuiHost,
        session: &mut GuiSession,
        event: &GuiEvent,
    ) -> GuiResult<EventOutcome> {
        match event {
            GuiEvent::ButtonPress { id } => self.on_button_press(host, session, id),
            GuiEvent::ScrollSelect { id, index, value } => {
                self.on_scroll_select(host, session, id, *index, value)
            }
        }
    }

    /// 按钮被按下
    pub fn on_button_press(
        &mut self,
        host: &mut dyn GuiHost,
        session: &mut GuiSession,
        id: &ComponentId,
    ) -> GuiResult<EventOutcome> {
        let page_id = session.current_page.clone();
        let component = session.page()?.component(id)?;
        let Some(button) = component.as_button() else {
            debug!(page = %page_id, component = %id, "非按钮组件，忽略按下事件");
            return Ok(EventOutcome::NoAction);
        };

        let is_toggle = matches!(component, Component::ToggleButton(_));
        let open_page = button.open_page.clone();
        let close_gui = button.close_gui;
        let rejection = if button.locked {
            Some("该开关已锁定")
        } else if button.disabled {
            Some("该开关已禁用")
        } else {
            None
        };

        if self.hooks.on_button(host, &page_id, id) == HookOutcome::Handled {
            return Ok(EventOutcome::HandledByHook);
        }

        if let Some(target) = open_page {
            self.open_page(host, session, &target)?;
            return Ok(EventOutcome::Navigated {
                from: page_id,
                to: target,
            });
        }

        if close_gui {
            info!(page = %page_id, component = %id, "关闭界面");
            host.close();
            return Ok(EventOutcome::Closed);
        }

        if !is_toggle {
            return Ok(EventOutcome::NoAction);
        }

        if let Some(reason) = rejection {
            host.send_message(&self.config.format_message(reason));
            return Ok(EventOutcome::ToggleRejected { id: id.clone() });
        }

        self.toggle(host, session, id)
    }

    /// 切换开关：修改会话中的 `toggled`，只重建这一个控件
    fn toggle(
        &self,
        host: &mut dyn GuiHost,
        session: &mut GuiSession,
        id: &ComponentId,
    ) -> GuiResult<EventOutcome> {
        let paths = session.texture_paths(&self.config.texture_namespace);
        let page_id = session.current_page.clone();

        let component = session.manifest.page_mut(&page_id)?.component_mut(id)?;
        let Component::ToggleButton(button) = &mut *component else {
            return Ok(EventOutcome::NoAction);
        };
        button.toggled = !button.toggled;
        let toggled = button.toggled;
        let rebuilt = component.clone();

        debug!(page = %page_id, component = %id, toggled, "切换开关");

        host.remove_widget(id);
        build_component(host, &rebuilt, &paths);
        host.update();

        Ok(EventOutcome::Toggled {
            id: id.clone(),
            toggled,
        })
    }

    /// 列表项被选中：只报告，不修改 manifest
    pub fn on_scroll_select(
        &mut self,
        host: &mut dyn GuiHost,
        session: &GuiSession,
        id: &ComponentId,
        index: usize,
        value: &str,
    ) -> GuiResult<EventOutcome> {
        let page_id = &session.current_page;
        let component = session.page()?.component(id)?;
        if !matches!(component, Component::ScrollList(_)) {
            debug!(page = %page_id, component = %id, "非列表组件，忽略选择事件");
            return Ok(EventOutcome::NoAction);
        }

        debug!(page = %page_id, component = %id, index, value, "列表选择");
        let message = format!("已选择 {} (#{})", value, index);
        host.send_message(&self.config.format_message(&message));
        self.hooks.on_scroll_select(host, page_id, id, index, value);

        Ok(EventOutcome::Selected {
            id: id.clone(),
            index,
        })
    }
}
