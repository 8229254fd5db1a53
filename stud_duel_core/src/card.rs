use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// --- 核心数据结构定义 ---

/// 花色 (Suit)
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Suit {
    Spade,   // S
    Heart,   // H
    Diamond, // D
    Club,    // C
}

/// 点数 (Rank)
/// Ord 的派生让 Ace 默认是最大的；
/// 协议里的比较则使用 `symbol()` 返回的字符。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// 单张扑克牌 (Card)，协议中写作两个字符，例如 `AS`、`TD`
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// 无法识别的牌面字符串
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("无效的牌: {0:?}")]
pub struct CardError(pub String);

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'S' => Some(Suit::Spade),
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            _ => None,
        }
    }
}

impl Rank {
    /// 高牌: A K Q J T
    pub fn is_high(self) -> bool {
        self >= Rank::Ten
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        match c {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn is_spade(&self) -> bool {
        self.suit == Suit::Spade
    }
}

// --- 实现辅助功能 ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// 牌面必须恰好是两个字符：点数 + 花色
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => {
                let rank = Rank::from_symbol(r).ok_or_else(|| CardError(s.to_string()))?;
                let suit = Suit::from_symbol(su).ok_or_else(|| CardError(s.to_string()))?;
                Ok(Card { rank, suit })
            }
            _ => Err(CardError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

// --- 单元测试 ---
