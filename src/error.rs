#[derive(Debug)]
pub enum AssimpError {
    Import(String),
}

impl std::fmt::Display for AssimpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_ref())
    }
}

impl std::error::Error for AssimpError {}

#[derive(Debug)]
pub enum Error {
    Nul(std::ffi::NulError),
    Assimp(AssimpError),
}

impl Error {
    pub fn import_message(&self) -> Option<&str> {
        match self {
            Error::Assimp(AssimpError::Import(message)) => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_ref())
    }
}

impl std::error::Error for Error {}

impl From<std::ffi::NulError> for Error {
    fn from(err: std::ffi::NulError) -> Self {
        Error::Nul(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
