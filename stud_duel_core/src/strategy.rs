//! 下注决策
//!
//! 一个纯函数：根据当前下注轮可见的信息给出 下注 / 跟注 / 弃牌。
//! 没有随机性，也不保存任何跨轮次的状态。

use crate::card::Card;
use crate::command::{Chips, Wager};
use crate::tracker::VisibleCards;
use std::fmt;

/// 每次加注的筹码数
pub const RAISE_STEP: Chips = 10;

/// 客户端的下注动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 下注，金额在 [current_bet, stack] 之间
    Bet(Chips),
    /// 跟注，金额等于 current_bet
    Call(Chips),
    Fold,
}

impl fmt::Display for Action {
    /// 协议中的回复格式。跟注也以 `bet:` 的形式发送。
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Bet(amount) | Action::Call(amount) => write!(f, "bet:{}", amount),
            Action::Fold => write!(f, "fold"),
        }
    }
}

/// 下注轮及其已知的牌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    First { hole: Card, up: Card },
    Second { hole: Card, first_up: Card, second_up: Card },
}

/// 第一轮：有对子或任一张高牌 (A K Q J T) 就下注
pub fn evaluate_round1(hole: Card, up: Card) -> bool {
    let has_pair = hole.rank == up.rank;
    let has_high_card = hole.rank.is_high() || up.rank.is_high();
    has_pair || has_high_card
}

/// 第二轮：有对子、三条，或底牌是场上最大的黑桃就下注
pub fn evaluate_round2(hole: Card, first_up: Card, second_up: Card, visible: &VisibleCards) -> bool {
    let (h, a, b) = (hole.rank, first_up.rank, second_up.rank);
    let has_pair = h == a || h == b || a == b;
    let has_three_of_a_kind = h == a && h == b;
    has_pair || has_three_of_a_kind || is_highest_visible_spade(hole, visible)
}

/// 底牌是黑桃，并且可见牌中没有点数字符更大的黑桃
///
/// 注意：比较的是点数字符的字典序而不是牌力，
/// 因此 `T`、`Q`、`K`、`J` 都被认为大于 `A`。
pub fn is_highest_visible_spade(hole: Card, visible: &VisibleCards) -> bool {
    if !hole.is_spade() {
        return false;
    }
    let hole_symbol = hole.rank.symbol();
    !visible.spades().any(|c| c.rank.symbol() > hole_symbol)
}

/// 根据是否下注的判断和筹码情况得出最终动作
///
/// - 想下注且筹码多于当前注：加注 10，不超过筹码，不低于当前注
/// - 否则只要还有筹码就跟注
/// - 没有筹码 (或筹码为负) 时弃牌
pub fn size_action(decision: bool, stack: Chips, current_bet: Chips) -> Action {
    if decision && stack > current_bet {
        let amount = current_bet.saturating_add(RAISE_STEP).min(stack).max(current_bet);
        Action::Bet(amount)
    } else if stack > 0 {
        Action::Call(current_bet)
    } else {
        Action::Fold
    }
}

/// 完整的一次决策：重建可见牌、评估手牌、确定下注额
pub fn decide(round: Round, wager: Wager, trailing: &[String]) -> Action {
    let visible = VisibleCards::from_fields(trailing);
    let decision = match round {
        Round::First { hole, up } => evaluate_round1(hole, up),
        Round::Second { hole, first_up, second_up } => {
            evaluate_round2(hole, first_up, second_up, &visible)
        }
    };
    size_action(decision, wager.stack, wager.current_bet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(token: &str) -> Card {
        token.parse().unwrap()
    }

    fn visible(tokens: &[&str]) -> VisibleCards {
        let mut fields = vec!["up".to_string()];
        fields.extend(tokens.iter().map(|s| s.to_string()));
        VisibleCards::from_fields(&fields)
    }

    fn wager(stack: Chips, current_bet: Chips) -> Wager {
        Wager { stack, pot: 0, current_bet }
    }

    // --- 第一轮 ---

    #[test]
    fn test_round1_high_cards_bet() {
        assert!(evaluate_round1(c("AS"), c("KS")));
        assert!(evaluate_round1(c("2D"), c("TC")));
    }

    #[test]
    fn test_round1_pair_bets() {
        assert!(evaluate_round1(c("4S"), c("4H")));
    }

    #[test]
    fn test_round1_low_unpaired_does_not_bet() {
        assert!(!evaluate_round1(c("2S"), c("3H")));
        assert_eq!(size_action(evaluate_round1(c("2S"), c("3H")), 50, 20), Action::Call(20));
        assert_eq!(size_action(evaluate_round1(c("2S"), c("3H")), 0, 20), Action::Fold);
    }

    // --- 第二轮 ---

    #[test]
    fn test_round2_three_of_a_kind() {
        // 可见牌中有更大的黑桃也不影响
        assert!(evaluate_round2(c("7S"), c("7H"), c("7D"), &visible(&["8S", "9S"])));
    }

    #[test]
    fn test_round2_pair_between_up_cards() {
        assert!(evaluate_round2(c("2H"), c("9C"), c("9D"), &VisibleCards::default()));
    }

    #[test]
    fn test_round2_highest_spade_without_pair() {
        assert!(evaluate_round2(c("5S"), c("2H"), c("8D"), &visible(&["3S", "4H", "KD"])));
    }

    #[test]
    fn test_round2_higher_spade_visible() {
        assert!(!evaluate_round2(c("5S"), c("2H"), c("8D"), &visible(&["3S", "9S"])));
    }

    #[test]
    fn test_round2_non_spade_hole_no_pair() {
        assert!(!evaluate_round2(c("5H"), c("2H"), c("8D"), &VisibleCards::default()));
    }

    #[test]
    fn test_highest_spade_uses_symbol_order() {
        // 按牌力 A 最大，但字符比较中 'T' > 'A'，所以 AS 不算最大黑桃
        assert!(!is_highest_visible_spade(c("AS"), &visible(&["TS"])));
        // 反过来 TS 面对 AS 仍然被认为最大
        assert!(is_highest_visible_spade(c("TS"), &visible(&["AS"])));
        // 数字字符都小于字母
        assert!(is_highest_visible_spade(c("AS"), &visible(&["9S", "2S"])));
        // 相同点数不算更大
        assert!(is_highest_visible_spade(c("QS"), &visible(&["QS"])));
    }

    // --- 下注额 ---

    #[test]
    fn test_sizing() {
        assert_eq!(size_action(true, 100, 20), Action::Bet(30));
        assert_eq!(size_action(true, 25, 20), Action::Bet(25));
        assert_eq!(size_action(true, 21, 20), Action::Bet(21));
        assert_eq!(size_action(true, 0, 0), Action::Fold);
        assert_eq!(size_action(false, 0, 20), Action::Fold);
    }

    #[test]
    fn test_negative_chip_counts() {
        // 筹码为负时无论如何都弃牌
        assert_eq!(size_action(true, -5, 20), Action::Fold);
        assert_eq!(size_action(false, -5, 20), Action::Fold);
        // 只有当前注为负：仍然下注或跟注这个数
        assert_eq!(size_action(false, 50, -5), Action::Call(-5));
        assert_eq!(size_action(true, 50, -5), Action::Bet(5));
        assert_eq!(Action::Call(-5).to_string(), "bet:-5");
    }

    #[test]
    fn test_stack_not_above_current_bet_calls() {
        assert_eq!(size_action(true, 20, 20), Action::Call(20));
        assert_eq!(size_action(true, 10, 20), Action::Call(20));
    }

    #[test]
    fn test_sizing_does_not_overflow() {
        assert_eq!(size_action(true, i32::MAX, i32::MAX - 3), Action::Bet(i32::MAX));
    }

    #[test]
    fn test_bet_amount_bounds() {
        for stack in -15..60 {
            for current_bet in -15..60 {
                match size_action(true, stack, current_bet) {
                    Action::Bet(amount) => {
                        assert!(stack > current_bet);
                        assert!(amount >= current_bet && amount <= stack);
                    }
                    Action::Call(amount) => {
                        assert!(stack > 0);
                        assert_eq!(amount, current_bet);
                    }
                    Action::Fold => assert!(stack <= 0),
                }
            }
        }
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(Action::Bet(30).to_string(), "bet:30");
        assert_eq!(Action::Call(20).to_string(), "bet:20");
        assert_eq!(Action::Fold.to_string(), "fold");
    }

    #[test]
    fn test_decide_rebuilds_visible_cards() {
        let round = Round::Second { hole: c("5S"), first_up: c("2H"), second_up: c("8D") };
        let first: Vec<String> = vec!["up".into(), "KS".into()];
        let second: Vec<String> = vec!["up".into(), "3H".into()];
        assert_eq!(decide(round, wager(100, 20), &first), Action::Call(20));
        assert_eq!(decide(round, wager(100, 20), &second), Action::Bet(30));
        assert_eq!(decide(round, wager(100, 20), &first), Action::Call(20));
    }

    #[test]
    fn test_decide_round1() {
        let round = Round::First { hole: c("AS"), up: c("KS") };
        assert_eq!(decide(round, wager(100, 20), &[]), Action::Bet(30));
        assert_eq!(decide(round, wager(0, 20), &[]), Action::Fold);
    }
}
