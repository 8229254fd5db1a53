use std::io;

use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin,
    Stdout,
};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

/// 客户端与服务器之间的一行一行的收发通道
pub trait Transport {
    /// 阻塞读取一条指令
    async fn read(&mut self) -> io::Result<String>;
    /// 发送一条回复并立即刷新
    async fn write(&mut self, line: &str) -> io::Result<()>;
    /// 会话结束时调用一次
    async fn close(&mut self) -> io::Result<()>;
}

// --- 网络传输 ---

/// 以长度前缀分帧的网络通道
///
/// 每一帧是 2 字节大端长度，后面跟着 UTF-8 字节
/// (即服务器端 `writeUTF` / `readUTF` 使用的格式)。
pub struct FramedTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

pub type TcpTransport = FramedTransport<OwnedReadHalf, OwnedWriteHalf>;

/// 连接到游戏服务器
pub async fn connect(host: &str, port: u16) -> io::Result<TcpTransport> {
    let stream = TcpStream::connect((host, port)).await?;
    stream.set_nodelay(true)?;
    let (reader, writer) = stream.into_split();
    Ok(FramedTransport::new(reader, writer))
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> FramedTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        FramedTransport {
            reader: BufReader::new(reader),
            writer,
        }
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> Transport for FramedTransport<R, W> {
    async fn read(&mut self) -> io::Result<String> {
        let len = self.reader.read_u16().await?;
        let mut buf = vec![0u8; len as usize];
        self.reader.read_exact(&mut buf).await?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    async fn write(&mut self, line: &str) -> io::Result<()> {
        let len = u16::try_from(line.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("回复过长: {} 字节", line.len()),
            )
        })?;
        self.writer.write_u16(len).await?;
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await
    }

    async fn close(&mut self) -> io::Result<()> {
        self.writer.shutdown().await
    }
}

// --- 控制台模拟 ---

/// 测试模式：从控制台读入服务器指令，把回复打印出来
pub struct ConsoleTransport<R, W> {
    lines: Lines<BufReader<R>>,
    out: W,
}

pub type StdioTransport = ConsoleTransport<Stdin, Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        ConsoleTransport::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> ConsoleTransport<R, W> {
    pub fn new(input: R, out: W) -> Self {
        ConsoleTransport {
            lines: BufReader::new(input).lines(),
            out,
        }
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> Transport for ConsoleTransport<R, W> {
    async fn read(&mut self) -> io::Result<String> {
        self.out.write_all(b"Enter server command: ").await?;
        self.out.flush().await?;
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "控制台输入已关闭")),
        }
    }

    async fn write(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(format!("Client sent: {}\n", line).as_bytes()).await?;
        self.out.flush().await
    }

    async fn close(&mut self) -> io::Result<()> {
        self.out.flush().await
    }
}
