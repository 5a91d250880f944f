use anyhow::{Context, Result};
use clap::Parser;
use photo_report::{logger, App, Config};
use std::path::PathBuf;

/// 照片报告生成器
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 照片根目录（覆盖配置文件）
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// 输出文档路径（覆盖配置文件）
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    let args = Args::parse();

    // 加载配置
    let mut config = Config::load(args.config.as_deref()).context("加载配置失败")?;
    if let Some(root) = args.root {
        config.root_dir = root;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }

    // 初始化并运行应用
    App::initialize(config)
        .context("初始化失败")?
        .run()
        .context("生成报告失败")?;

    Ok(())
}
