//! zcomplete - 代码补全弹窗控制器
//!
//! 模块结构：
//! - models: 数据模型（TextBuffer, CompletionCandidate）
//! - kernel: 补全核心（子词提取、会话、接受/插入）与服务端口
//! - replay: 脚本化会话回放（供命令行使用）

pub mod kernel;
pub mod models;
pub mod replay;
