//! The prompt/answer exchange over a buffered stream.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// The outcome of reading one answer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A line arrived. The terminator (`\n` or `\r\n`) is stripped;
    /// everything else, surrounding whitespace included, is preserved.
    Text(String),
    /// The read failed or the stream ended before a line arrived.
    Failed,
}

impl Answer {
    /// Collapses a failed read into the empty string.
    ///
    /// Onboarding treats the two the same way: an unreadable answer is an
    /// empty answer, and the caller's validation decides what happens next.
    pub fn into_text(self) -> String {
        match self {
            Answer::Text(text) => text,
            Answer::Failed => String::new(),
        }
    }
}

/// One side of a prompt dialogue: asks questions, reads answer lines.
///
/// Generic over the reader and writer so sessions run on split TCP halves
/// while tests run on in-memory duplexes or injected broken streams.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `"{question}: "`, flushes, and reads one answer line.
    ///
    /// A failed write or flush is logged and swallowed; the read still
    /// happens, so a peer whose inbound half is healthy can answer a
    /// prompt it never saw.
    pub async fn ask(&mut self, question: &str) -> Answer {
        let text = format!("{question}: ");
        if let Err(e) = self.writer.write_all(text.as_bytes()).await {
            tracing::warn!(error = %e, "failed to write prompt");
        }
        if let Err(e) = self.writer.flush().await {
            tracing::warn!(error = %e, "failed to flush prompt");
        }
        self.read_answer().await
    }

    /// Writes `line` followed by a newline and flushes. Failures are
    /// logged and swallowed.
    pub async fn send_line(&mut self, line: &str) {
        let text = format!("{line}\n");
        if let Err(e) = self.writer.write_all(text.as_bytes()).await {
            tracing::warn!(error = %e, "failed to write line");
        }
        if let Err(e) = self.writer.flush().await {
            tracing::warn!(error = %e, "failed to flush line");
        }
    }

    async fn read_answer(&mut self) -> Answer {
        let mut line = String::new();
        match self.reader.read_line(&mut line).await {
            // Clean end of stream before any line arrived.
            Ok(0) => Answer::Failed,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Answer::Text(line)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read answer");
                Answer::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader, ReadBuf};

    use super::*;

    /// A reader whose every poll fails, standing in for a reset peer.
    struct BrokenReader;

    impl AsyncRead for BrokenReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )))
        }
    }

    /// A writer whose every poll fails.
    struct BrokenWriter;

    impl AsyncWrite for BrokenWriter {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "broken pipe",
            )))
        }

        fn poll_flush(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "broken pipe",
            )))
        }

        fn poll_shutdown(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn ask_writes_the_prompt_and_reads_the_answer() {
        let (peer, ours) = tokio::io::duplex(256);
        let (our_read, our_write) = tokio::io::split(ours);
        let mut prompt = Prompt::new(BufReader::new(our_read), our_write);

        let (mut peer_read, mut peer_write) = tokio::io::split(peer);
        peer_write.write_all(b"alice\n").await.unwrap();

        assert_eq!(prompt.ask("Nickname").await, Answer::Text("alice".to_string()));

        let mut seen = [0u8; 10];
        peer_read.read_exact(&mut seen).await.unwrap();
        assert_eq!(&seen, b"Nickname: ");
    }

    #[tokio::test]
    async fn answers_keep_interior_and_edge_whitespace() {
        let reader = BufReader::new(&b"  lobby  \n"[..]);
        let mut prompt = Prompt::new(reader, Vec::new());

        assert_eq!(prompt.ask("Room").await, Answer::Text("  lobby  ".to_string()));
    }

    #[tokio::test]
    async fn crlf_terminators_are_stripped() {
        let reader = BufReader::new(&b"bob\r\n"[..]);
        let mut prompt = Prompt::new(reader, Vec::new());

        assert_eq!(prompt.ask("Nickname").await, Answer::Text("bob".to_string()));
    }

    #[tokio::test]
    async fn end_of_stream_is_a_failed_answer() {
        let reader = BufReader::new(&b""[..]);
        let mut prompt = Prompt::new(reader, Vec::new());

        let answer = prompt.ask("Room").await;
        assert_eq!(answer, Answer::Failed);
        assert_eq!(answer.into_text(), "");
    }

    #[tokio::test]
    async fn read_failure_is_a_failed_answer() {
        let mut prompt = Prompt::new(BufReader::new(BrokenReader), Vec::new());

        assert_eq!(prompt.ask("Room").await, Answer::Failed);
    }

    #[tokio::test]
    async fn write_failure_does_not_abort_the_read() {
        let reader = BufReader::new(&b"lobby\n"[..]);
        let mut prompt = Prompt::new(reader, BrokenWriter);

        assert_eq!(prompt.ask("Room").await, Answer::Text("lobby".to_string()));
    }

    #[tokio::test]
    async fn send_line_appends_a_newline() {
        let (peer, ours) = tokio::io::duplex(256);
        let (our_read, our_write) = tokio::io::split(ours);
        let mut prompt = Prompt::new(BufReader::new(our_read), our_write);

        prompt.send_line("Invalid room name").await;

        let (mut peer_read, _peer_write) = tokio::io::split(peer);
        let mut seen = [0u8; 18];
        peer_read.read_exact(&mut seen).await.unwrap();
        assert_eq!(&seen, b"Invalid room name\n");
    }
}
