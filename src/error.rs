use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which stream failed to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    Input,
    Settings,
    Output,
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input-target pairs file"),
            Self::Settings => write!(f, "settings file"),
            Self::Output => write!(f, "output file"),
        }
    }
}

/// All errors that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong number of command line arguments.
    #[error("invalid number of arguments provided")]
    Usage { program: String },
    #[error("error opening {role} {}: {source}", .path.display())]
    Open {
        role: StreamRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// No samples were read, so the gradient mean is undefined.
    #[error("input contains no samples; at least one `x y` pair is required")]
    DegenerateInput,
    #[error("series lengths differ: x has {x} samples, y has {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn open(role: StreamRole, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            role,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
