use std::{fmt, io};

#[derive(Debug)]
pub enum CliError {
    Kea(kea::Error),
    Io(io::Error),
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<kea::Error> for CliError {
    fn from(e: kea::Error) -> Self {
        Self::Kea(e)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Kea(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}
