use crate::card::{Card, CardError};
use thiserror::Error;

/// 字段分隔符
pub const FIELD_SEPARATOR: char = ':';

// --- 服务器 -> 客户端 的指令 ---
// 每一行文本对应一条指令，字段之间用 `:` 分隔，第一个字段是指令类型。

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 服务器要求登录
    Login,
    /// 第一轮下注：一张底牌 + 一张明牌
    Bet1 {
        wager: Wager,
        hole: Card,
        first_up: Card,
        /// 已知字段之后的所有字段，其中包含 `up` 标记和可见牌列表
        trailing: Vec<String>,
    },
    /// 第二轮下注：一张底牌 + 两张明牌
    Bet2 {
        wager: Wager,
        hole: Card,
        first_up: Card,
        second_up: Card,
        trailing: Vec<String>,
    },
    /// 一手牌结束后的结果通知，只用于显示
    Status(StatusReport),
    /// 对局结束
    Done,
    /// 无法识别的指令类型，忽略即可
    Unknown { tag: String },
}

/// 筹码数。协议中的整数字段都是有符号的 32 位整数
pub type Chips = i32;

/// 下注轮中的筹码信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wager {
    /// 自己剩余的筹码
    pub stack: Chips,
    /// 奖池 (目前决策中不使用)
    pub pot: Chips,
    /// 当前需要跟的注
    pub current_bet: Chips,
}

/// `status` 指令的原始字段 (包括 `status` 本身)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub fields: Vec<String>,
}

impl StatusReport {
    /// 重新拼接成原始的一行文本
    pub fn line(&self) -> String {
        self.fields.join(":")
    }
}

/// 指令格式错误：缺少字段、数字或牌面无法解析
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedCommand {
    #[error("{tag} 指令缺少第 {index} 个字段 ({field})")]
    MissingField {
        tag: String,
        field: &'static str,
        index: usize,
    },
    #[error("{tag} 指令的字段 {field} 不是有效的整数: {value:?}")]
    InvalidNumber {
        tag: String,
        field: &'static str,
        value: String,
    },
    #[error("{tag} 指令的字段 {field} 无法解析: {source}")]
    InvalidCard {
        tag: String,
        field: &'static str,
        source: CardError,
    },
}

/// 解析一行指令
///
/// 按 `:` 切分，保留空字段 (这样 `status` 可以原样还原)，
/// 然后根据第一个字段分类。未知的指令类型不是错误，返回 `Command::Unknown`。
pub fn parse(line: &str) -> Result<Command, MalformedCommand> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let fields = Fields { tag: parts[0], parts: &parts };

    match fields.tag {
        "login" => Ok(Command::Login),
        "bet1" => Ok(Command::Bet1 {
            wager: fields.wager()?,
            hole: fields.card(4, "holeCard")?,
            first_up: fields.card(5, "firstUpCard")?,
            trailing: fields.rest(6),
        }),
        "bet2" => Ok(Command::Bet2 {
            wager: fields.wager()?,
            hole: fields.card(4, "holeCard")?,
            first_up: fields.card(5, "firstUpCard")?,
            second_up: fields.card(6, "secondUpCard")?,
            trailing: fields.rest(7),
        }),
        "status" => Ok(Command::Status(StatusReport {
            fields: parts.iter().map(|s| s.to_string()).collect(),
        })),
        "done" => Ok(Command::Done),
        tag => Ok(Command::Unknown { tag: tag.to_string() }),
    }
}

/// 按位置读取字段的辅助结构
struct Fields<'a> {
    tag: &'a str,
    parts: &'a [&'a str],
}

impl<'a> Fields<'a> {
    fn get(&self, index: usize, field: &'static str) -> Result<&'a str, MalformedCommand> {
        self.parts.get(index).copied().ok_or_else(|| MalformedCommand::MissingField {
            tag: self.tag.to_string(),
            field,
            index,
        })
    }

    fn number(&self, index: usize, field: &'static str) -> Result<Chips, MalformedCommand> {
        let value = self.get(index, field)?;
        value.parse().map_err(|_| MalformedCommand::InvalidNumber {
            tag: self.tag.to_string(),
            field,
            value: value.to_string(),
        })
    }

    fn card(&self, index: usize, field: &'static str) -> Result<Card, MalformedCommand> {
        self.get(index, field)?.parse().map_err(|source| MalformedCommand::InvalidCard {
            tag: self.tag.to_string(),
            field,
            source,
        })
    }

    fn wager(&self) -> Result<Wager, MalformedCommand> {
        Ok(Wager {
            stack: self.number(1, "stack")?,
            pot: self.number(2, "pot")?,
            current_bet: self.number(3, "currentBet")?,
        })
    }

    fn rest(&self, from: usize) -> Vec<String> {
        self.parts.iter().skip(from).map(|s| s.to_string()).collect()
    }
}
