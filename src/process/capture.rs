use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, info, warn};

use crate::config::{FAIL_MARKER, PASS_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLevel {
    Info,
    Warn,
    Debug,
}

/// Spawn a task that echoes each line of `reader` to the log and returns
/// the full text once the stream closes.
pub fn spawn_line_collector<R>(
    reader: R,
    stream: OutputStream,
    label: String,
) -> tokio::task::JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut collected = String::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => {
                    debug!("{} {:?} closed", label, stream);
                    break;
                }
                Ok(_) => {
                    let line = decode_line(&buf);
                    match classify_line(&line, stream) {
                        LineLevel::Info => info!("[{}] {}", label, line),
                        LineLevel::Warn => warn!("[{}] {}", label, line),
                        LineLevel::Debug => debug!("[{}] {}", label, line),
                    }
                    collected.push_str(&line);
                    collected.push('\n');
                }
                Err(e) => {
                    warn!("Error reading {} {:?}: {}", label, stream, e);
                    break;
                }
            }
        }

        collected
    })
}

/// Lossy UTF-8 decode of one raw line, without its `\n` / `\r\n` terminator.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Failed tests and stderr noise surface as warnings; passes stay at info.
pub fn classify_line(line: &str, stream: OutputStream) -> LineLevel {
    if line.contains(FAIL_MARKER) || line.contains("ERROR") || line.contains("Error:") {
        LineLevel::Warn
    } else if stream == OutputStream::Stderr {
        if line.contains("DEBUG") || line.contains("TRACE") {
            LineLevel::Debug
        } else {
            LineLevel::Warn
        }
    } else if line.contains(PASS_MARKER) || !line.trim().is_empty() {
        LineLevel::Info
    } else {
        LineLevel::Debug
    }
}
