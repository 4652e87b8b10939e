//! 输出模块：负责生成文件的排版与跨应用去重
pub mod context;
pub mod emitter;
pub mod template;

pub use self::context::{Emission, GenerationContext, GenerationReport};
pub use self::emitter::Emitter;
