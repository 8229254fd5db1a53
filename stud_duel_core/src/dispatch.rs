use crate::command::Command;
use crate::strategy::{self, Action, Round};

/// 默认的登录凭证
pub const LOGIN_CREDENTIAL: &str = "AresIntrepid:Ares";

/// 处理一条指令后客户端要做的事
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// 向服务器发送一行回复
    Reply(String),
    /// 只显示，不回复
    Report(String),
    /// 忽略未知指令，附带其指令类型
    Ignore(String),
    /// 对局结束
    Finish,
}

/// 对单条指令做出响应
pub fn step(command: &Command, credential: &str) -> Step {
    match command {
        Command::Login => Step::Reply(credential.to_string()),
        Command::Bet1 { wager, hole, first_up, trailing } => {
            let round = Round::First { hole: *hole, up: *first_up };
            reply(strategy::decide(round, *wager, trailing))
        }
        Command::Bet2 { wager, hole, first_up, second_up, trailing } => {
            let round = Round::Second {
                hole: *hole,
                first_up: *first_up,
                second_up: *second_up,
            };
            reply(strategy::decide(round, *wager, trailing))
        }
        Command::Status(report) => Step::Report(report.line()),
        Command::Done => Step::Finish,
        Command::Unknown { tag } => Step::Ignore(tag.clone()),
    }
}

fn reply(action: Action) -> Step {
    Step::Reply(action.to_string())
}
