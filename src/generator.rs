//! 生成流水线：加载 → 转译 → 输出

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use tracing::{debug, info};

use crate::config::GlobalConfig;
use crate::emitter::{Emitter, GenerationContext, GenerationReport};
use crate::error::RuleGenResult;
use crate::rule::{RuleDocument, RuleLoader};
use crate::translator::RuleTranslator;

/// 规则代码生成器
pub struct RuleGenerator {
    config: GlobalConfig,
    translator: RuleTranslator,
}

impl RuleGenerator {
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            config,
            translator: RuleTranslator::new(),
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 完整运行：加载规则并覆盖写出生成文件
    pub async fn run(&self) -> RuleGenResult<GenerationReport> {
        if self.config.verbose {
            debug!("当前配置：{:?}", self.config);
        }
        let loader = RuleLoader::new(&self.config)?;
        let document = loader.load(&self.config).await?;

        let output_path = &self.config.output_path;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(output_path)?;
        let report = self.render(&document, BufWriter::new(file))?;

        info!(
            "生成完成：{}，应用 {} 个，规则 {} 条（重复 {} 条）",
            output_path.display(),
            report.applications,
            report.statements,
            report.duplicates
        );
        Ok(report)
    }

    /// 将规则文档渲染到任意输出，同一输入结果逐字节一致
    pub fn render<W: Write>(&self, document: &RuleDocument, out: W) -> RuleGenResult<GenerationReport> {
        let mut ctx = GenerationContext::new();
        let mut emitter = Emitter::new(out, self.config.style.clone());

        emitter.write_header()?;
        for app in document.iter() {
            // 没有 float_identifiers 的应用不输出
            if app.float_identifiers.is_none() {
                debug!("跳过无浮动规则的应用：{}", app.name);
                continue;
            }
            let statements = self.translator.translate_app(app);
            emitter.write_app(&mut ctx, &app.name, &statements)?;
        }
        emitter.write_footer()?;

        Ok(ctx.report())
    }
}
