use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised at the host boundary. Gameplay never fails; losing is
/// `GamePhase::Over`, not an error.
#[derive(Debug)]
pub enum FlappyError {
    /// Filesystem or terminal I/O failed
    Io(io::Error),

    /// Config file could not be parsed
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Config parsed but holds an unusable value
    Config(String),

    /// The terminal cannot host the playfield (not a TTY, or too small)
    SurfaceUnavailable { width: u16, height: u16 },

    /// A sprite file exists but is not a usable image
    Asset { path: PathBuf, reason: String },
}

impl fmt::Display for FlappyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlappyError::Io(e) => write!(f, "I/O error: {}", e),
            FlappyError::ConfigParse { path, source } => {
                write!(f, "Could not parse config {}: {}", path.display(), source)
            }
            FlappyError::Config(reason) => write!(f, "Invalid config: {}", reason),
            FlappyError::SurfaceUnavailable { width, height } => write!(
                f,
                "Drawing surface unavailable: terminal is {}x{}, need at least {}x{}",
                width,
                height,
                crate::ui::MIN_TERMINAL_WIDTH,
                crate::ui::MIN_TERMINAL_HEIGHT
            ),
            FlappyError::Asset { path, reason } => {
                write!(f, "Bad sprite {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for FlappyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlappyError::Io(e) => Some(e),
            FlappyError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for FlappyError {
    fn from(error: io::Error) -> Self {
        FlappyError::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_unavailable_message_names_size() {
        let err = FlappyError::SurfaceUnavailable {
            width: 10,
            height: 5,
        };
        assert!(err.to_string().contains("10x5"));
    }

    #[test]
    fn test_io_error_has_source() {
        let err: FlappyError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
