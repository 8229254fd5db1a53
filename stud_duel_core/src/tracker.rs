use crate::card::Card;

/// 可见牌列表的起始标记
pub const UP_MARKER: &str = "up";

/// 一副牌最多 52 张
pub const MAX_VISIBLE_CARDS: usize = 52;

/// 当前下注轮中所有可见的牌 (对手明牌、公共牌)
///
/// 每一轮都从指令字段重新构建，不会保留上一轮的牌。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleCards {
    cards: Vec<Card>,
}

impl VisibleCards {
    /// 从指令字段中提取 `up` 标记之后的牌
    ///
    /// - 没有 `up` 标记时返回空列表
    /// - 空字段和无法解析的字段会被跳过
    /// - 最多保留 52 张
    pub fn from_fields(fields: &[String]) -> Self {
        let cards = fields
            .iter()
            .position(|f| f == UP_MARKER)
            .map(|idx| {
                fields[idx + 1..]
                    .iter()
                    .filter(|f| !f.is_empty())
                    .filter_map(|f| f.parse::<Card>().ok())
                    .take(MAX_VISIBLE_CARDS)
                    .collect()
            })
            .unwrap_or_default();
        VisibleCards { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn spades(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_spade())
    }
}
