use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use rust_folio::core::preference::{FileThemeStore, ThemeStore};
use rust_folio::core::{Engine, HttpPostSource};
use rust_folio::{Config, Msg, UiEvent};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 指定站点目录
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成默认配置文件
    Init(InitArgs),

    /// 渲染单个路由并输出完整文档
    Render(RenderArgs),

    /// 交互式浏览：每行输入一个事件
    Browse(BrowseArgs),

    /// 查看或切换主题偏好
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// 站点名称（显示在页面标题中）
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct RenderArgs {
    /// 路由片段，例如 "#blog" 或 "#post/42"
    #[arg(default_value = "#home")]
    pub fragment: String,

    /// 博客列表搜索词
    #[arg(short, long)]
    pub search: Option<String>,

    /// 博客列表分类
    #[arg(short, long)]
    pub category: Option<String>,

    /// 博客列表页码
    #[arg(long)]
    pub page: Option<usize>,

    /// 输出文件，默认写到标准输出
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// 每次事件后写入的文档
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommands>,
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// 在浅色和深色之间切换
    Toggle,
}

/// 交互模式下的一行输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Navigate(String),
    Event(UiEvent),
    Quit,
    Help,
}

/// 解析交互模式的一行输入；无法识别时返回 `None`
///
/// 搜索词在命令后的第一个空格之后原样保留，包括首尾空白。
pub fn parse_browse_line(line: &str) -> Option<BrowseInput> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n').trim_start();
    if line.starts_with('#') {
        return Some(BrowseInput::Navigate(line.trim_end().to_string()));
    }
    let (command, raw) = line.split_once(' ').unwrap_or((line, ""));
    if command == "search" {
        return Some(BrowseInput::Event(UiEvent::input("search-input", raw)));
    }
    let command = command.trim_end();

    let input = match (command, raw.trim()) {
        ("quit" | "exit", _) => BrowseInput::Quit,
        ("help" | "?", _) => BrowseInput::Help,
        ("category", value) if !value.is_empty() => {
            BrowseInput::Event(UiEvent::change("category-filter", value))
        }
        ("page", n) => {
            let page: usize = n.parse().ok()?;
            BrowseInput::Event(UiEvent::click(format!("page-button-{}", page)))
        }
        ("submit", "contact") => BrowseInput::Event(UiEvent::submit("contact-form")),
        ("submit", "newsletter") => BrowseInput::Event(UiEvent::submit("newsletter-form")),
        ("theme", "") => BrowseInput::Event(UiEvent::click("theme-toggle")),
        ("menu", "") => BrowseInput::Event(UiEvent::click("mobile-nav-toggle")),
        ("click", target) if !target.is_empty() => BrowseInput::Event(UiEvent::click(target)),
        ("input", rest) => {
            let (target, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if target.is_empty() {
                return None;
            }
            BrowseInput::Event(UiEvent::input(target, value.trim()))
        }
        _ => return None,
    };
    Some(input)
}

const BROWSE_HELP: &str = "\
  #<page>[/<id>]        navigate (home, about, blog, post, contact)
  search <text>         type into the blog search box
  category <value>      pick a blog category
  page <n>              open a blog listing page
  submit contact|newsletter
  theme                 toggle light/dark
  menu                  toggle the mobile navigation
  click <id> | input <id> <value>
  quit";

fn open_engine(site_path: &Path) -> Result<Engine> {
    let config = Config::load(site_path).context("加载配置失败")?;
    let store = FileThemeStore::new(config.theme_path(site_path));
    Ok(Engine::new(config, Box::new(store))?)
}

async fn start_engine(site_path: &Path) -> Result<Engine> {
    let mut engine = open_engine(site_path)?;
    let source = HttpPostSource::new(&engine.config().api_url)?;
    engine.start(&source).await;
    Ok(engine)
}

fn write_document(engine: &Engine, out: Option<&Path>) -> Result<()> {
    let html = engine.document()?;
    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("写入失败: {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn print_status(engine: &Engine) {
    let page = engine.page();
    let state = engine.state();
    let mut line = format!("{} {}", "▶".bright_cyan(), page.route.to_fragment().bright_white());
    if let Some(notice) = &page.notice {
        line.push_str(&format!("  {}", notice.message().bright_red()));
    } else if page.route.page == rust_folio::PageId::Blog {
        line.push_str(&format!(
            "  {} posts, page {}/{}",
            state.filtered_len(),
            state.current_page(),
            state.page_count().max(1)
        ));
    }
    line.push_str(&format!("  [{}]", engine.theme()));
    println!("{}", line);
}

/// 执行命令
pub async fn execute(cli: Cli) -> Result<()> {
    let site_path = cli.path.clone();

    match cli.command {
        Commands::Init(args) => {
            fs::create_dir_all(&site_path)?;
            let config_path = site_path.join("_config.yml");

            // 如果配置已存在，询问用户是否覆盖
            if config_path.exists() {
                println!("_config.yml already exists. Overwrite? (y/N)");
                let mut input = String::new();
                io::stdin().read_line(&mut input)?;
                if !input.trim().eq_ignore_ascii_case("y") {
                    println!("Operation cancelled.");
                    return Ok(());
                }
            }

            let mut config = Config::default();
            if let Some(name) = args.name {
                config.user.name = name;
            }
            config.save(&config_path)?;
            info!("Initialized config at: {}", config_path.display());
        }
        Commands::Render(args) => {
            let mut engine = start_engine(&site_path).await?;
            engine.dispatch(Msg::Navigate(args.fragment));
            if let Some(search) = args.search {
                engine.dispatch(Msg::SearchChanged(search));
            }
            if let Some(category) = args.category {
                engine.dispatch(Msg::CategoryChanged(category));
            }
            if let Some(page) = args.page {
                engine.dispatch(Msg::PageSelected(page));
            }
            write_document(&engine, args.out.as_deref())?;
        }
        Commands::Browse(args) => {
            let mut engine = start_engine(&site_path).await?;
            let out = args
                .out
                .or_else(|| engine.config().output.clone())
                .unwrap_or_else(|| site_path.join("index.html"));

            write_document(&engine, Some(&out))?;
            print_status(&engine);
            println!("{}", "Type `help` for commands.".bright_black());

            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match parse_browse_line(&line) {
                    Some(BrowseInput::Quit) => break,
                    Some(BrowseInput::Help) => {
                        println!("{}", BROWSE_HELP);
                        continue;
                    }
                    Some(BrowseInput::Navigate(fragment)) => engine.dispatch(Msg::Navigate(fragment)),
                    Some(BrowseInput::Event(event)) => {
                        if !engine.handle_event(&event) {
                            println!("{}", format!("#{} does not handle that here", event.target).yellow());
                            continue;
                        }
                    }
                    None => {
                        println!("{}", format!("Unknown command: {}", line.trim()).yellow());
                        continue;
                    }
                }
                write_document(&engine, Some(&out))?;
                print_status(&engine);
            }
        }
        Commands::Theme(args) => {
            let config = Config::load(&site_path)?;
            let mut store = FileThemeStore::new(config.theme_path(&site_path));
            let mut theme = store.load();
            if let Some(ThemeCommands::Toggle) = args.command {
                theme = theme.toggled();
                store.save(theme)?;
            }
            println!("{} {}", "Theme:".bright_white(), theme.as_str().bright_green());
        }
    }

    Ok(())
}
