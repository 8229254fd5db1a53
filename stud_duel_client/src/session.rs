use stud_duel_core::{parse, step, Step};
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::transport::Transport;

/// 一次会话的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// 发送给服务器的回复数
    pub replies: usize,
    /// 收到的每一手牌的结果 (status 指令原文)
    pub hand_results: Vec<String>,
}

/// 一次对局会话：读取指令 -> 决策 -> 回复，直到收到 `done`
pub struct Session<T> {
    transport: T,
    credential: String,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, credential: impl Into<String>) -> Self {
        Session {
            transport,
            credential: credential.into(),
        }
    }

    /// 运行会话
    ///
    /// 无论正常结束还是出错，传输通道都会被关闭一次。
    /// 两者都失败时返回会话本身的错误。
    pub async fn run(&mut self) -> Result<SessionSummary, ClientError> {
        let result = self.play().await;
        let closed = self.transport.close().await;
        match (result, closed) {
            (Ok(summary), Ok(())) => Ok(summary),
            (Ok(_), Err(e)) => Err(ClientError::Transport(e)),
            (Err(e), closed) => {
                if let Err(close_err) = closed {
                    warn!("关闭连接失败: {}", close_err);
                }
                Err(e)
            }
        }
    }

    async fn play(&mut self) -> Result<SessionSummary, ClientError> {
        let mut summary = SessionSummary::default();
        loop {
            let line = self.transport.read().await?;
            debug!("<-- {}", line);

            let command = parse(&line)?;
            match step(&command, &self.credential) {
                Step::Reply(reply) => {
                    self.transport.write(&reply).await?;
                    debug!("--> {}", reply);
                    summary.replies += 1;
                }
                Step::Report(result) => {
                    println!("Hand result: {}", result);
                    info!("本手结果: {}", result);
                    summary.hand_results.push(result);
                }
                Step::Ignore(tag) => {
                    debug!("忽略未知指令: {:?}", tag);
                }
                Step::Finish => {
                    println!("Game over");
                    return Ok(summary);
                }
            }
        }
    }
}
