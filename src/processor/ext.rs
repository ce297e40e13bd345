//! 宿主扩展处理器接口
use crate::error::ProcessResult;

/// 宿主数据接入流程调用的扩展处理器
///
/// 宿主每收到一条记录调用一次 `process`，传入符合事件数据格式的 JSON 文本，
/// 返回处理后的 JSON 文本；返回错误时由宿主决定丢弃、隔离或记录该条数据。
/// 实现必须可被多线程并发调用。
pub trait ExtProcessor: Send + Sync {
    fn process(&self, record: &str) -> ProcessResult<String>;

    fn name(&self) -> &'static str;
}
