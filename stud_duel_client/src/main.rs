use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stud_duel_core::LOGIN_CREDENTIAL;

mod error;
mod session;
mod transport;

use session::{Session, SessionSummary};
use transport::ConsoleTransport;

const EXAMPLES: &str = "\
示例:
  正常模式:  stud_duel_client localhost 12345
  测试模式:  stud_duel_client localhost 12345 test

测试模式下从控制台输入服务器指令，例如:
  login
  bet1:100:0:20:AS:KH:up:KH:9D
  bet2:80:40:10:7S:7H:2C:up:7H:2C:QS
  status:Ares:won:40
  done";

/// 梭哈对局客户端：连接游戏服务器，自动登录并下注
#[derive(Parser, Debug)]
#[command(name = "stud_duel_client", version, after_help = EXAMPLES)]
struct Args {
    /// 游戏服务器的地址
    host: String,

    /// 服务器端口
    port: u16,

    /// 写 `test` 则以模拟模式运行，不连接服务器
    mode: Option<String>,

    /// 登录时发送的凭证
    #[arg(long, env = "STUD_LOGIN", default_value = LOGIN_CREDENTIAL)]
    login: String,
}

impl Args {
    fn test_mode(&self) -> bool {
        self.mode
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("test"))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let summary: SessionSummary = if args.test_mode() {
        info!("以测试模式运行，从控制台读取指令");
        Session::new(ConsoleTransport::stdio(), args.login).run().await
    } else {
        let transport = transport::connect(&args.host, args.port)
            .await
            .with_context(|| format!("无法连接到 {}:{}", args.host, args.port))?;
        info!("已连接到 {}:{}", args.host, args.port);
        Session::new(transport, args.login).run().await
    }
    .context("会话异常终止")?;

    info!(
        "会话结束，共回复 {} 次，{} 手牌",
        summary.replies,
        summary.hand_results.len()
    );
    Ok(())
}
