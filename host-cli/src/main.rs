//! # gui-host - 无界面宿主
//!
//! 用 [`HeadlessHost`] 驱动解释器，便于在没有游戏客户端时检查 manifest。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p host-cli -- check gui/
//! cargo run -p host-cli -- pages gui_manifest.json
//! cargo run -p host-cli -- render gui_manifest.json --page 2 --skin dark
//! cargo run -p host-cli -- render gui_manifest.json --json
//! cargo run -p host-cli -- replay gui_manifest.json --event press:btn1 --event select:list:0
//! ```

mod commands;

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gui_runtime::{AssemblyMode, InterpreterConfig, PageId};
use tracing::Level;

use crate::commands::ReplayStep;

#[derive(Parser)]
#[command(name = "gui-host")]
#[command(about = "无界面宿主 - 检查、渲染并回放 GUI manifest")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 解释器配置文件（JSON）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 遇到未知组件类型时拒绝组装
    #[arg(long, global = true)]
    strict: bool,

    /// 纹理命名空间
    #[arg(long, global = true)]
    namespace: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 检查 manifest 文件或目录下的所有 .json
    Check {
        /// 文件或目录
        path: PathBuf,
    },

    /// 列出页面
    Pages {
        /// manifest 文件
        manifest: PathBuf,
    },

    /// 组装页面并打印控件树
    Render {
        /// manifest 文件
        manifest: PathBuf,

        /// 页面 id（默认：起始页）
        #[arg(short, long, value_parser = parse_page_id)]
        page: Option<PageId>,

        /// 皮肤包
        #[arg(short, long)]
        skin: Option<String>,

        /// 以 JSON 输出控件描述
        #[arg(long)]
        json: bool,
    },

    /// 依次回放交互事件，每步之后打印控件树
    Replay {
        /// manifest 文件
        manifest: PathBuf,

        /// 页面 id（默认：起始页）
        #[arg(short, long, value_parser = parse_page_id)]
        page: Option<PageId>,

        /// 皮肤包
        #[arg(short, long)]
        skin: Option<String>,

        /// 事件：`press:ID` 或 `select:ID:INDEX`，可重复
        #[arg(short, long = "event")]
        events: Vec<ReplayStep>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = real_main(cli) {
        eprintln!("gui-host error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

/// 页面 id：能解析为整数的按整数处理
fn parse_page_id(s: &str) -> Result<PageId, Infallible> {
    s.parse()
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check { path } => commands::check(path),
        Commands::Pages { manifest } => commands::pages(manifest),
        Commands::Render {
            manifest,
            page,
            skin,
            json,
        } => {
            let config = load_config(&cli, manifest)?;
            commands::render(config, page.clone(), skin.clone(), *json)
        }
        Commands::Replay {
            manifest,
            page,
            skin,
            events,
        } => {
            let config = load_config(&cli, manifest)?;
            commands::replay(config, page.clone(), skin.clone(), events)
        }
    }
}

/// 合并配置：命令行参数 > 配置文件 > 默认值
fn load_config(cli: &Cli, manifest: &Path) -> anyhow::Result<InterpreterConfig> {
    let mut config = match &cli.config {
        Some(path) => InterpreterConfig::load(path)
            .with_context(|| format!("读取配置失败: {}", path.display()))?,
        None => InterpreterConfig::default(),
    };

    config.manifest_path = manifest.to_path_buf();
    if cli.strict {
        config.assembly_mode = AssemblyMode::Strict;
    }
    if let Some(namespace) = &cli.namespace {
        config.texture_namespace = namespace.clone();
    }
    Ok(config)
}
