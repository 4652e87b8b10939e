//! komorebi-rulegen 命令行入口
//! 不带任何参数时：下载官方规则库 → 缓存到 komorebi_rules.yaml → 生成 DefaultFilteredWindowsKomorebi.g.cs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use komorebi_rulegen::{ConfigManager, EmitStyle, RuleGenerator};

#[derive(Debug, Parser)]
#[command(name = "komorebi-rulegen", version, about = "将 komorebi 应用规则转译为 Whim 过滤器代码")]
struct CliArgs {
    /// 远程规则源地址
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// 使用本地 YAML 规则文件（不联网、不写缓存）
    #[arg(long)]
    input: Option<PathBuf>,

    /// 生成文件路径
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// 下载内容的缓存路径
    #[arg(long)]
    cache: Option<PathBuf>,

    /// HTTP 超时（秒），默认不设置
    #[arg(long)]
    timeout: Option<u64>,

    /// 使用 8 个空格缩进代替两个制表符
    #[arg(long)]
    spaces: bool,

    /// 应用名注释使用 `/// `
    #[arg(long)]
    doc_comments: bool,

    /// 输出调试日志
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let mut builder = ConfigManager::custom();
    if let Some(url) = &args.url {
        builder = builder
            .remote_url(url)
            .with_context(|| format!("无效的规则源地址：{}", url))?;
    }
    if let Some(input) = args.input {
        builder = builder.local_file(input);
    }
    if let Some(output) = args.output {
        builder = builder.output_path(output);
    }
    if let Some(cache) = args.cache {
        builder = builder.rule_cache_path(cache);
    }

    let mut style = EmitStyle::default();
    if args.spaces {
        style = style.with_spaces();
    }
    if args.doc_comments {
        style = style.with_doc_comments();
    }

    let config = builder
        .http_timeout(args.timeout)
        .style(style)
        .verbose(args.verbose)
        .build();

    RuleGenerator::new(config)
        .run()
        .await
        .context("规则代码生成失败")?;

    Ok(())
}
