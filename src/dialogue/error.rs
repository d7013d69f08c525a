use std::fmt;

/// Error type for dialogue exchanges.
///
/// A single failed exchange surfaces here and is handled by the caller; it
/// never takes the process down.
#[derive(Debug)]
pub enum DialogueError {
    /// Socket-level failure (refused, reset, broken pipe).
    Io(std::io::Error),
    /// No reply arrived within the read timeout; the peer is treated as
    /// unresponsive.
    Timeout,
    /// The peer closed the connection while a reply was expected.
    ConnectionClosed,
}

impl fmt::Display for DialogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogueError::Io(err) => write!(f, "I/O error: {}", err),
            DialogueError::Timeout => write!(f, "timed out waiting for a reply"),
            DialogueError::ConnectionClosed => write!(f, "peer closed the connection"),
        }
    }
}

impl std::error::Error for DialogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DialogueError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DialogueError {
    fn from(err: std::io::Error) -> Self {
        DialogueError::Io(err)
    }
}
