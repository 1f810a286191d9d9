//! Per-connection onboarding: prompt for a room, then a nickname, then join.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Prompt for a room name until a non-blank one arrives
//!   2. Prompt once for a nickname, accepted verbatim
//!   3. Append the client to the room under the registry lock
//!
//! The registry lock is only taken in step 3, never across prompt I/O,
//! so a peer that stalls mid-dialogue parks its own task and nothing else.

use std::sync::Arc;

use parlor_room::Client;
use parlor_wire::Prompt;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::net::TcpStream;

use crate::server::TcpRegistry;

/// Handles one connection from accept to room join.
///
/// Never returns an error: every I/O failure on this connection is logged
/// and swallowed where it occurs, so a misbehaving peer never disturbs
/// the accept loop or other sessions. The write half moves into the
/// roster at the end, which keeps the socket open after this task is done.
pub(crate) async fn handle_connection(stream: TcpStream, registry: Arc<TcpRegistry>) {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let (room_name, nickname) = {
        let mut prompt = Prompt::new(&mut reader, &mut write_half);
        onboard(&mut prompt).await
    };

    let (client, _inbox) = Client::new(nickname, write_half);
    registry
        .open_room(&room_name, |room| room.add_client(client))
        .await;
}

/// Runs the two-step onboarding dialogue.
///
/// The room prompt repeats until the answer trims to something non-empty;
/// blank input gets the literal line `Invalid room name` before the
/// re-prompt. A failed read behaves like an empty answer, so the loop
/// also retries on I/O failure rather than giving up. The nickname prompt
/// runs exactly once and accepts whatever arrives, empty included, with
/// only the line terminator stripped.
async fn onboard<R, W>(prompt: &mut Prompt<R, W>) -> (String, String)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let room_name = loop {
        let answer = prompt.ask("Room").await.into_text();
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            prompt.send_line("Invalid room name").await;
        } else {
            break trimmed.to_string();
        }
    };

    let nickname = prompt.ask("Nickname").await.into_text();

    (room_name, nickname)
}
