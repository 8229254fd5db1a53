//! # 梭哈对局客户端核心逻辑库
//!
//! 这个 `core` crate 负责解析服务器发来的文本指令、
//! 提取当前可见的牌，并计算下注 / 跟注 / 弃牌的决策。
//! 它不做任何 I/O，网络和控制台由上层的客户端负责。

mod card;
mod command;
mod dispatch;
mod strategy;
mod tracker;

pub use card::*;

pub use command::*;

pub use dispatch::*;

pub use strategy::*;

pub use tracker::*;
