//! # 交互集成测试
//!
//! 测试 Interpreter → GuiHost 的完整链路：打开界面、换页、开关、关闭。
//! 使用 HeadlessHost，不依赖任何图形设备。

use std::io::Write;

use gui_runtime::{
    AssemblyMode, Component, ComponentId, EventOutcome, GuiError, GuiEvent, GuiHooks, GuiHost,
    HeadlessHost, HookOutcome, Interpreter, InterpreterConfig, Manifest, OpenRequest, PageId,
    RuntimeError, TexCoord,
};

const SHOP: &str = r#"{
    "version": 3,
    "gui_name": "shop",
    "size": 16,
    "skin_packs": ["default", "dark"],
    "pages": [
        {"page": 1, "components": [
            {"id": "btn1", "type": "button", "offset": {"x": 1, "y": 1}, "size_tiles": {"w": 2, "h": 1},
             "sheet": 1, "tex": {"x": 0, "y": 0}, "open_page": 2,
             "label": "Next", "hover_text": "Go to page 2"},
            {"id": "sound", "type": "toggle_button", "offset": {"x": 4, "y": 1}, "size_tiles": {"w": 1, "h": 1},
             "sheet": 1, "tex": {"x": 0, "y": 16}, "toggle_tex": {"x": 16, "y": 16}},
            {"id": "lock", "type": "toggle_button", "offset": {"x": 5, "y": 1}, "size_tiles": {"w": 1, "h": 1},
             "sheet": 1, "tex": {"x": 0, "y": 32}, "disabled_tex": {"x": 16, "y": 32}, "locked": true},
            {"id": "title", "type": "label", "offset": {"x": 2, "y": 3}, "size_tiles": {"w": 4, "h": 2},
             "label": "Shop"},
            {"id": "in", "type": "item_slot", "offset": {"x": 0, "y": 0}, "size_tiles": {"w": 1, "h": 1},
             "hover_text": "Input"},
            {"id": "name", "type": "text_field", "offset": {"x": 0, "y": 5}, "size_tiles": {"w": 6, "h": 1},
             "label": "Steve"},
            {"id": "list", "type": "scroll_list", "offset": {"x": 0, "y": 6}, "size_tiles": {"w": 4, "h": 4},
             "items": ["apple", "bread"]},
            {"id": "fx", "type": "sparkle", "offset": {"x": 9, "y": 9}}
        ]},
        {"page": 2, "components": [
            {"id": "close", "type": "button", "offset": {"x": 0, "y": 0}, "size_tiles": {"w": 1, "h": 1},
             "close_gui": true},
            {"id": "back", "type": "button", "offset": {"x": 1, "y": 0}, "size_tiles": {"w": 1, "h": 1},
             "open_page": 1}
        ]}
    ]
}"#;

fn shop() -> Manifest {
    Manifest::from_json_str(SHOP).unwrap().unwrap()
}

fn id(name: &str) -> ComponentId {
    ComponentId::from(name)
}

fn open_shop(
    interpreter: &mut Interpreter<impl GuiHooks>,
    host: &mut HeadlessHost,
) -> gui_runtime::GuiSession {
    interpreter
        .open_manifest(host, shop(), &OpenRequest::default())
        .unwrap()
}

/// 按下按钮跳转页面：旧控件全部移除，新页面按声明组装
#[test]
fn test_press_navigates_to_empty_page() {
    let manifest = Manifest::from_json_str(
        r#"{"size": 16, "gui_name": "g", "skin_packs": ["default"], "pages": [
            {"page": 0, "components": [
                {"id": "btn1", "type": "button", "offset": {"x": 1, "y": 1}, "size_tiles": {"w": 2, "h": 1},
                 "sheet": 0, "tex": {"x": 0, "y": 0}, "open_page": 1}
            ]},
            {"page": 1, "components": []}
        ]}"#,
    )
    .unwrap()
    .unwrap();

    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = interpreter
        .open_manifest(&mut host, manifest, &OpenRequest::default())
        .unwrap();
    assert_eq!(session.current_page, PageId::Int(0));
    assert!(host.contains(&id("btn1")));

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("btn1"))
        .unwrap();

    assert_eq!(
        outcome,
        EventOutcome::Navigated {
            from: PageId::Int(0),
            to: PageId::Int(1)
        }
    );
    assert_eq!(session.current_page, PageId::Int(1));
    assert!(host.widgets().is_empty());
    assert_eq!(
        host.background(),
        Some("minecraft:textures/gui/gui_creator/g/default/background_page_1.png")
    );
}

/// 页面组装结果
#[test]
fn test_assembled_widget_tree() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    open_shop(&mut interpreter, &mut host);

    insta::assert_debug_snapshot!(host.describe(), @r#"
    [
        "button btn1 @16,16 32x16 sheet_1.png+0,0 label=Next hover=Go to page 2",
        "button sound @64,16 16x16 sheet_1.png+0,16",
        "textured_rect lock @80,16 16x16 sheet_1.png+16,32",
        "label title @40,56 48x16 text=Shop",
        "item_slot in @-32.0,-36.8 hover=Input",
        "text_field name @0,80 96x16 value=Steve",
        "scroll_list list @0,96 64x64 items=apple|bread",
    ]
    "#);
    assert_eq!(host.update_count(), 1);
}

/// 按两次开关恢复原状态与纹理
#[test]
fn test_toggle_twice_restores_state() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);
    let before = host.widget(&id("sound")).unwrap().clone();

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("sound"))
        .unwrap();
    assert_eq!(
        outcome,
        EventOutcome::Toggled {
            id: id("sound"),
            toggled: true
        }
    );
    let on = host.widget(&id("sound")).unwrap();
    assert_eq!(on.spec.texture().unwrap().tex, TexCoord::new(16, 16));
    // 只重建被按下的控件
    assert_eq!(host.widgets().len(), 7);

    interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("sound"))
        .unwrap();
    assert_eq!(host.widget(&id("sound")).unwrap(), &before);
    let stored = session.page().unwrap().component(&id("sound")).unwrap();
    assert!(!stored.as_button().unwrap().toggled);
    assert_eq!(host.update_count(), 3);
}

/// 锁定的开关不切换，只给玩家提示
#[test]
fn test_locked_toggle_is_noop() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);
    let before = host.describe();

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("lock"))
        .unwrap();

    assert_eq!(outcome, EventOutcome::ToggleRejected { id: id("lock") });
    assert_eq!(host.describe(), before);
    assert_eq!(host.messages(), &["[GUI] 该开关已锁定".to_string()]);
    assert_eq!(host.update_count(), 1);
}

/// 未锁定但禁用的开关同样拒绝切换
#[test]
fn test_disabled_toggle_is_rejected() {
    let manifest = Manifest::from_json_str(
        r#"{"gui_name": "g", "skin_packs": ["default"], "pages": [
            {"page": 1, "components": [
                {"id": "mute", "type": "toggle_button", "offset": {"x": 0, "y": 0},
                 "size_tiles": {"w": 1, "h": 1}, "sheet": 1, "tex": {"x": 0, "y": 0},
                 "toggle_tex": {"x": 16, "y": 0}, "disabled": true}
            ]}
        ]}"#,
    )
    .unwrap()
    .unwrap();

    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = interpreter
        .open_manifest(&mut host, manifest, &OpenRequest::default())
        .unwrap();
    let before = host.describe();

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("mute"))
        .unwrap();

    assert_eq!(outcome, EventOutcome::ToggleRejected { id: id("mute") });
    assert_eq!(host.describe(), before);
    assert_eq!(host.messages(), &["[GUI] 该开关已禁用".to_string()]);
    assert_eq!(host.update_count(), 1);
    let stored = session.page().unwrap().component(&id("mute")).unwrap();
    assert!(!stored.as_button().unwrap().toggled);
}

#[test]
fn test_close_button() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = interpreter
        .open_manifest(&mut host, shop(), &OpenRequest::page(PageId::Int(2)))
        .unwrap();

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("close"))
        .unwrap();
    assert_eq!(outcome, EventOutcome::Closed);
    assert!(host.is_closed());
}

/// 非按钮组件被按下不做任何事
#[test]
fn test_press_on_label_is_ignored() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("title"))
        .unwrap();
    assert_eq!(outcome, EventOutcome::NoAction);
    assert_eq!(host.update_count(), 1);
}

#[test]
fn test_round_trip_between_pages() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);
    let first = host.describe();

    interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("btn1"))
        .unwrap();
    assert_eq!(host.widgets().len(), 2);
    assert!(!host.contains(&id("in")));

    interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("back"))
        .unwrap();
    assert_eq!(session.current_page, PageId::Int(1));
    assert_eq!(host.describe(), first);
}

/// 跳转目标不存在：报错且不移除任何控件
#[test]
fn test_open_missing_page_keeps_widgets() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);

    let err = interpreter
        .open_page(&mut host, &mut session, &PageId::Int(99))
        .unwrap_err();

    assert!(matches!(
        err,
        GuiError::Runtime(RuntimeError::PageNotFound { .. })
    ));
    assert_eq!(host.widgets().len(), 7);
    assert_eq!(session.current_page, PageId::Int(1));
}

#[test]
fn test_strict_mode_rejects_unknown_component() {
    let config = InterpreterConfig {
        assembly_mode: AssemblyMode::Strict,
        ..InterpreterConfig::default()
    };
    let mut interpreter = Interpreter::new(config);
    let mut host = HeadlessHost::new();

    let err = interpreter
        .open_manifest(&mut host, shop(), &OpenRequest::default())
        .unwrap_err();

    match err {
        GuiError::Runtime(RuntimeError::UnknownComponentType { page, type_name }) => {
            assert_eq!(page, PageId::Int(1));
            assert_eq!(type_name, "sparkle");
        }
        other => panic!("unexpected error: {other}"),
    }
    // 严格模式在构建任何控件之前拒绝
    assert!(host.widgets().is_empty());
    assert_eq!(host.update_count(), 0);
}

/// 严格模式下换页到含未知组件的页面：报错且保留当前页
#[test]
fn test_strict_open_page_keeps_widgets() {
    let config = InterpreterConfig {
        assembly_mode: AssemblyMode::Strict,
        ..InterpreterConfig::default()
    };
    let mut interpreter = Interpreter::new(config);
    let mut host = HeadlessHost::new();
    let mut session = interpreter
        .open_manifest(&mut host, shop(), &OpenRequest::page(PageId::Int(2)))
        .unwrap();
    let before = host.describe();

    let err = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("back"))
        .unwrap_err();

    assert!(matches!(
        err,
        GuiError::Runtime(RuntimeError::UnknownComponentType { .. })
    ));
    assert_eq!(host.describe(), before);
    assert_eq!(session.current_page, PageId::Int(2));
    assert_eq!(host.update_count(), 1);
}

#[test]
fn test_strict_mode_accepts_known_page() {
    let config = InterpreterConfig {
        assembly_mode: AssemblyMode::Strict,
        ..InterpreterConfig::default()
    };
    let mut interpreter = Interpreter::new(config);
    let mut host = HeadlessHost::new();

    let session = interpreter
        .open_manifest(&mut host, shop(), &OpenRequest::page(PageId::Int(2)))
        .unwrap();
    assert_eq!(session.current_page, PageId::Int(2));
    assert_eq!(host.widgets().len(), 2);
}

#[test]
fn test_requested_skin_pack() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();

    let session = interpreter
        .open_manifest(
            &mut host,
            shop(),
            &OpenRequest::default().with_skin_pack("dark"),
        )
        .unwrap();
    assert_eq!(session.skin_pack.as_deref(), Some("dark"));
    let texture = host.widget(&id("btn1")).unwrap().spec.texture();
    assert_eq!(
        texture.unwrap().path,
        "minecraft:textures/gui/gui_creator/shop/dark/sheet_1.png"
    );
}

#[test]
fn test_scroll_select_reports_value() {
    let mut interpreter = Interpreter::new(InterpreterConfig::default());
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);
    let before = session.manifest.clone();

    let event = GuiEvent::select("list", 1, "bread");
    let outcome = interpreter
        .handle_event(&mut host, &mut session, &event)
        .unwrap();

    assert_eq!(
        outcome,
        EventOutcome::Selected {
            id: id("list"),
            index: 1
        }
    );
    assert_eq!(host.messages(), &["[GUI] 已选择 bread (#1)".to_string()]);
    assert_eq!(session.manifest, before);
}

/// 记录调用并接管指定按钮的钩子
#[derive(Default)]
struct RecordingHooks {
    pressed: Vec<(PageId, ComponentId)>,
    selected: Vec<(ComponentId, usize, String)>,
    consume: Option<ComponentId>,
}

impl GuiHooks for RecordingHooks {
    fn update_manifest(&mut self, manifest: &mut Manifest) {
        // 解锁 lock 开关
        let Ok(page) = manifest.page_mut(&PageId::Int(1)) else {
            return;
        };
        if let Ok(Component::ToggleButton(button)) = page.component_mut(&id("lock")) {
            button.locked = false;
        }
    }

    fn on_button(
        &mut self,
        host: &mut dyn GuiHost,
        page: &PageId,
        id: &ComponentId,
    ) -> HookOutcome {
        self.pressed.push((page.clone(), id.clone()));
        if self.consume.as_ref() == Some(id) {
            host.send_message("hooked");
            HookOutcome::Handled
        } else {
            HookOutcome::Continue
        }
    }

    fn on_scroll_select(
        &mut self,
        _host: &mut dyn GuiHost,
        _page: &PageId,
        id: &ComponentId,
        index: usize,
        value: &str,
    ) {
        self.selected.push((id.clone(), index, value.to_string()));
    }
}

#[test]
fn test_hook_consumes_press() {
    let hooks = RecordingHooks {
        consume: Some(id("btn1")),
        ..RecordingHooks::default()
    };
    let mut interpreter = Interpreter::with_hooks(InterpreterConfig::default(), hooks);
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("btn1"))
        .unwrap();

    assert_eq!(outcome, EventOutcome::HandledByHook);
    assert_eq!(session.current_page, PageId::Int(1));
    assert_eq!(host.messages(), &["hooked".to_string()]);
    let pressed = &interpreter.hooks().pressed;
    assert_eq!(pressed, &vec![(PageId::Int(1), id("btn1"))]);
}

#[test]
fn test_hook_updates_manifest_before_assembly() {
    let hooks = RecordingHooks::default();
    let mut interpreter = Interpreter::with_hooks(InterpreterConfig::default(), hooks);
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);

    // 解锁后按普通开关构建
    assert_eq!(
        host.widget(&id("lock")).unwrap().kind(),
        gui_runtime::WidgetKind::Button
    );

    let outcome = interpreter
        .handle_event(&mut host, &mut session, &GuiEvent::press("lock"))
        .unwrap();
    assert_eq!(
        outcome,
        EventOutcome::Toggled {
            id: id("lock"),
            toggled: true
        }
    );

    let event = GuiEvent::select("list", 0, "apple");
    interpreter
        .handle_event(&mut host, &mut session, &event)
        .unwrap();
    assert_eq!(
        interpreter.hooks().selected,
        vec![(id("list"), 0, "apple".to_string())]
    );
}

/// 从磁盘打开
#[test]
fn test_open_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHOP.as_bytes()).unwrap();

    let config = InterpreterConfig {
        preferred_skin_pack: Some("dark".to_string()),
        ..InterpreterConfig::with_manifest_path(file.path())
    };
    let mut interpreter = Interpreter::new(config);
    let mut host = HeadlessHost::new();

    let request = OpenRequest::default();
    let session = interpreter.open(&mut host, &request).unwrap();
    assert_eq!(session.manifest.gui_name, "shop");
    assert_eq!(session.skin_pack.as_deref(), Some("dark"));
    assert_eq!(host.widgets().len(), 7);
}

#[test]
fn test_open_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut interpreter = Interpreter::new(InterpreterConfig::with_manifest_path(file.path()));
    let mut host = HeadlessHost::new();

    let request = OpenRequest::default();
    let err = interpreter.open(&mut host, &request).unwrap_err();
    assert!(matches!(
        err,
        GuiError::Runtime(RuntimeError::EmptyManifest { .. })
    ));
    assert_eq!(host.update_count(), 0);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gui_manifest.json");
    let mut interpreter = Interpreter::new(InterpreterConfig::with_manifest_path(path));
    let mut host = HeadlessHost::new();

    let request = OpenRequest::default();
    let err = interpreter.open(&mut host, &request).unwrap_err();
    assert!(matches!(err, GuiError::Load(_)));
}

/// 非列表组件上的选择事件：不发消息，不调用钩子
#[test]
fn test_select_on_button_is_ignored() {
    let hooks = RecordingHooks::default();
    let mut interpreter = Interpreter::with_hooks(InterpreterConfig::default(), hooks);
    let mut host = HeadlessHost::new();
    let mut session = open_shop(&mut interpreter, &mut host);

    let event = GuiEvent::select("btn1", 0, "apple");
    let outcome = interpreter
        .handle_event(&mut host, &mut session, &event)
        .unwrap();

    assert_eq!(outcome, EventOutcome::NoAction);
    assert!(host.messages().is_empty());
    assert!(interpreter.hooks().selected.is_empty());
    assert_eq!(host.update_count(), 1);
}
