//! 通用工具模块
pub mod log_format;
pub mod value_kind;

pub use self::log_format::{preview_record, RecordPreview, RECORD_PREVIEW_LEN};
pub use self::value_kind::value_kind;
