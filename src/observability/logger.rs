//! Forwarding of child process output into the log.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Forward every line of `reader` to `tracing` as it arrives.
///
/// Lines are logged at info level as `[build] <line>`, tagged with `stream`
/// (`stdout` or `stderr`). Returns the number of lines forwarded once the
/// reader reaches end of input.
pub async fn forward_lines<R>(reader: R, stream: &'static str) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut count = 0;

    while let Some(line) = lines.next_line().await? {
        tracing::info!(stream, "[build] {}", line);
        count += 1;
    }

    Ok(count)
}
