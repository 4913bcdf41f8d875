//! 子命令实现

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, bail};
use gui_runtime::{
    Component, ComponentId, GuiEvent, GuiSession, HeadlessHost, Interpreter, InterpreterConfig,
    Manifest, OpenRequest, PageId, WidgetSpec,
};
use walkdir::WalkDir;

//=============================================================================
// check
//=============================================================================

/// 检查文件或目录下的所有 manifest，有任何载入失败则返回错误
pub fn check(path: &Path) -> anyhow::Result<()> {
    let files = collect_manifest_files(path)?;
    if files.is_empty() {
        eprintln!("未找到 manifest 文件（.json）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个 manifest 文件...\n", files.len());

    let mut errors = 0;
    let mut warnings = 0;
    for file in &files {
        match Manifest::load(file) {
            Ok(Some(manifest)) => {
                let found = manifest.validate();
                println!(
                    "OK    {} ({}，{} 页，{} 条警告)",
                    file.display(),
                    manifest.gui_name,
                    manifest.pages.len(),
                    found.len()
                );
                for warning in &found {
                    println!("  warning: {}", warning);
                }
                warnings += found.len();
            }
            Ok(None) => {
                println!("ERROR {} (文件为空)", file.display());
                errors += 1;
            }
            Err(e) => {
                println!("ERROR {}", e);
                errors += 1;
            }
        }
    }

    println!(
        "\n共 {} 个文件，{} 个错误，{} 条警告",
        files.len(),
        errors,
        warnings
    );

    if errors > 0 {
        bail!("manifest 检查发现错误");
    }
    Ok(())
}

/// 单个文件原样返回；目录则递归收集 `.json`，按路径排序
pub fn collect_manifest_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("路径不存在: {}", path.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

//=============================================================================
// pages
//=============================================================================

pub fn pages(path: &Path) -> anyhow::Result<()> {
    let manifest = load_manifest(path)?;
    let start = manifest.start_page_id().cloned();

    println!("{} (grid {})", manifest.gui_name, manifest.size);
    if manifest.skin_packs.is_empty() {
        println!("skin packs: -");
    } else {
        println!("skin packs: {}", manifest.skin_packs.join(", "));
    }
    for page in &manifest.pages {
        let is_start = start.as_ref() == Some(&page.id);
        let marker = if is_start { "*" } else { " " };
        println!(
            "{} page {}: {} components",
            marker,
            page.id,
            page.components.len()
        );
    }
    Ok(())
}

fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    Manifest::load(path)?.with_context(|| format!("manifest 文件为空: {}", path.display()))
}

//=============================================================================
// render
//=============================================================================

pub fn render(
    config: InterpreterConfig,
    page: Option<PageId>,
    skin: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut interpreter = Interpreter::new(config);
    let mut host = HeadlessHost::new();
    let session = interpreter.open(&mut host, &open_request(page, skin))?;

    if json {
        let specs: Vec<&WidgetSpec> = host.widgets().iter().map(|w| &w.spec).collect();
        println!("{}", serde_json::to_string_pretty(&specs)?);
    } else {
        print_tree(&host, &session);
    }
    Ok(())
}

fn open_request(page: Option<PageId>, skin: Option<String>) -> OpenRequest {
    OpenRequest {
        page,
        skin_pack: skin,
    }
}

fn print_tree(host: &HeadlessHost, session: &GuiSession) {
    println!(
        "page {} [{}]",
        session.current_page,
        session.skin_pack.as_deref().unwrap_or("-")
    );
    if let Some(background) = host.background() {
        println!("  background {}", background);
    }
    for line in host.describe() {
        println!("  {}", line);
    }
}

//=============================================================================
// replay
//=============================================================================

/// 命令行中的一步交互
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayStep {
    /// `press:ID`
    Press(ComponentId),
    /// `select:ID:INDEX`，选中值从列表项中取
    Select { id: ComponentId, index: usize },
}

impl FromStr for ReplayStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("无法解析事件 '{s}'，应为 press:ID 或 select:ID:INDEX"))?;

        match kind {
            "press" if !rest.is_empty() => Ok(ReplayStep::Press(parse_id(rest))),
            "select" => {
                let (id, index) = rest
                    .rsplit_once(':')
                    .ok_or_else(|| format!("select 事件缺少序号: '{s}'"))?;
                let index = index
                    .parse()
                    .map_err(|_| format!("无效的列表序号 '{index}'"))?;
                Ok(ReplayStep::Select {
                    id: parse_id(id),
                    index,
                })
            }
            _ => Err(format!("未知事件 '{s}'，应为 press:ID 或 select:ID:INDEX")),
        }
    }
}

impl fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayStep::Press(id) => write!(f, "press:{}", id),
            ReplayStep::Select { id, index } => write!(f, "select:{}:{}", id, index),
        }
    }
}

fn parse_id(s: &str) -> ComponentId {
    match s.parse() {
        Ok(id) => id,
        Err(never) => match never {},
    }
}

impl ReplayStep {
    /// 转换为解释器事件；select 的值从当前页的列表项中解析
    pub fn to_event(&self, session: &GuiSession) -> anyhow::Result<GuiEvent> {
        match self {
            ReplayStep::Press(id) => Ok(GuiEvent::press(id.clone())),
            ReplayStep::Select { id, index } => {
                let Component::ScrollList(list) = session.page()?.component(id)? else {
                    bail!("组件 '{}' 不是滚动列表", id);
                };
                let value = list
                    .items
                    .get(*index)
                    .with_context(|| format!("列表 '{}' 没有第 {} 项", id, index))?;
                Ok(GuiEvent::select(id.clone(), *index, value.clone()))
            }
        }
    }
}

pub fn replay(
    config: InterpreterConfig,
    page: Option<PageId>,
    skin: Option<String>,
    steps: &[ReplayStep],
) -> anyhow::Result<()> {
    let mut interpreter = Interpreter::new(config);
    let mut host = HeadlessHost::new();
    let mut session = interpreter.open(&mut host, &open_request(page, skin))?;
    print_tree(&host, &session);

    for step in steps {
        if host.is_closed() {
            println!("\n界面已关闭，忽略剩余事件");
            break;
        }

        let seen = host.messages().len();
        let event = step.to_event(&session)?;
        let outcome = interpreter
            .handle_event(&mut host, &mut session, &event)
            .with_context(|| format!("回放事件失败: {}", step))?;

        println!("\n> {} => {:?}", step, outcome);
        for message in &host.messages()[seen..] {
            println!("  message {}", message);
        }
        print_tree(&host, &session);
    }
    Ok(())
}
