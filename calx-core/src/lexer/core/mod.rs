//! 流式输入基础设施：行源、字符游标与位置

pub mod cursor;
pub mod position;
pub mod source;

pub use cursor::Cursor;
pub use position::Coordinate;
pub use source::{LineSource, MemoryLines, ReaderLines};
