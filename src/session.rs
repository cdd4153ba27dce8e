//! Interactive read-route-print loop.
//!
//! The loop is generic over its reader and writer so the binary can hand it
//! stdin/stdout while tests feed it in-memory buffers.

use crate::commands::{messages, CommandRouter, Flow};
use crate::config::Config;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Run a session until an exit command or end of input.
///
/// Each line is decoded lossily, has its terminator stripped and is handed
/// to `router`; every reply line is written back followed by a newline.
/// Only I/O failures end the session early.
pub async fn run<R, W>(
    mut reader: R,
    mut writer: W,
    router: &mut CommandRouter,
    config: &Config,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if config.show_banner {
        for line in messages::BANNER {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
    }

    let mut buf = Vec::new();
    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, closing session");
            break;
        }

        // Bytes that are not UTF-8 become U+FFFD and route like any other text.
        let line = String::from_utf8_lossy(&buf);
        let input = line.trim_end_matches(&['\r', '\n'][..]);
        debug!(input = %input, "Read command");

        let reply = router.handle(input);
        for out in &reply.lines {
            writer.write_all(out.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        if reply.flow == Flow::Exit {
            info!("Exit requested, closing session");
            break;
        }
    }

    writer.flush().await
}
