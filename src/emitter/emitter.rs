//! 代码输出器
//! 固定头部 → 每个应用一段注释 + 规则行 → 固定尾部

use std::io::Write;

use tracing::debug;

use super::context::{Emission, GenerationContext};
use super::template::{DUPLICATE_MARKER, DUPLICATE_PREFIX, FOOTER, HEADER};
use crate::config::EmitStyle;
use crate::error::RuleGenResult;
use crate::translator::Statement;

/// 代码输出器，可写入任意 `Write`
pub struct Emitter<W: Write> {
    out: W,
    style: EmitStyle,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, style: EmitStyle) -> Self {
        Self { out, style }
    }

    pub fn write_header(&mut self) -> RuleGenResult<()> {
        self.out.write_all(HEADER.as_bytes())?;
        Ok(())
    }

    /// 写出一个应用：空行 + 应用名注释 + 规则行
    pub fn write_app(
        &mut self,
        ctx: &mut GenerationContext,
        app_name: &str,
        statements: &[Statement],
    ) -> RuleGenResult<()> {
        write!(
            self.out,
            "\n{}{}{}\n",
            self.style.indent, self.style.comment, app_name
        )?;
        ctx.record_application();

        for statement in statements {
            self.write_statement(ctx, &statement.to_string())?;
        }
        Ok(())
    }

    /// 写出一条规则，重复规则注释掉并标注
    pub fn write_statement(&mut self, ctx: &mut GenerationContext, line: &str) -> RuleGenResult<()> {
        match ctx.record(line) {
            Emission::Fresh => writeln!(self.out, "{}{}", self.style.indent, line)?,
            Emission::Duplicate => {
                debug!("重复规则：{}", line);
                writeln!(
                    self.out,
                    "{}{}{}{}",
                    self.style.indent, DUPLICATE_PREFIX, line, DUPLICATE_MARKER
                )?
            }
        }
        Ok(())
    }

    pub fn write_footer(&mut self) -> RuleGenResult<()> {
        self.out.write_all(FOOTER.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// 取回底层输出
    pub fn into_inner(self) -> W {
        self.out
    }
}
