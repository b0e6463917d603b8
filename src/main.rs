use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 解析命令行参数
    let cli = cli::Cli::parse();

    // 打印欢迎信息
    eprintln!("{} {}", "Rust-Folio".bright_cyan(), env!("CARGO_PKG_VERSION").bright_green());
    eprintln!("{}", "A hash-routed blog and portfolio renderer".bright_white());
    eprintln!();

    // 执行命令
    if let Err(e) = cli::execute(cli).await {
        error!("Error: {}", e);

        // 打印错误链
        let mut source = e.source();
        while let Some(e) = source {
            error!("Caused by: {}", e);
            source = e.source();
        }

        std::process::exit(1);
    }

    Ok(())
}
