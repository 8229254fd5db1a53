use std::io;

use stud_duel_core::MalformedCommand;
use thiserror::Error;

/// 会话中的致命错误，任何一种都会结束本次会话
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("传输失败: {0}")]
    Transport(#[from] io::Error),

    #[error("指令格式错误: {0}")]
    Malformed(#[from] MalformedCommand),
}
