//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Everything here writes to stderr; stdout is reserved for tokens.
//! 所有内容都写入标准错误输出；标准输出保留给 token。

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    eprintln!("\x1b[34minfo:\x1b[0m {msg}");
}
