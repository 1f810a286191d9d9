//! Line-oriented prompt protocol for Parlor.
//!
//! The wire format is primitive: the server writes
//! `"<Question>: "` with no trailing newline, flushes, and reads exactly
//! one line in reply. Any terminal emulator or `nc` session is a valid
//! client.
//!
//! I/O failures here are logged and swallowed, never propagated: a prompt
//! that cannot be delivered still reads, and a read that fails is an
//! explicit [`Answer::Failed`] rather than an error. The onboarding layer
//! treats a failed read exactly like an empty answer, so the retry logic
//! can be exercised by injecting broken readers in tests.

mod prompt;

pub use prompt::{Answer, Prompt};
