//! 单次生成的运行上下文
//! 整个运行期间共享的已输出规则集合（跨应用去重），运行开始时创建、结束时丢弃

use indexmap::IndexSet;

/// 规则行的输出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// 首次出现，正常输出
    Fresh,
    /// 已输出过，注释掉并标注
    Duplicate,
}

/// 生成统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// 写出的应用块数
    pub applications: usize,
    /// 写出的规则行数（含重复）
    pub statements: usize,
    /// 其中被注释掉的重复行数
    pub duplicates: usize,
}

#[derive(Debug, Default)]
pub struct GenerationContext {
    seen: IndexSet<String>,
    report: GenerationReport,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一条规则，返回其输出方式
    pub fn record(&mut self, statement: &str) -> Emission {
        self.report.statements += 1;
        if self.seen.contains(statement) {
            self.report.duplicates += 1;
            Emission::Duplicate
        } else {
            self.seen.insert(statement.to_string());
            Emission::Fresh
        }
    }

    pub fn record_application(&mut self) {
        self.report.applications += 1;
    }

    /// 按首次出现顺序的已输出规则
    pub fn seen(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }

    pub fn report(&self) -> GenerationReport {
        self.report
    }
}
