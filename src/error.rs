use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid color {0:?}, expected #rgb, #rgba, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("Unknown platform {0:?}, expected \"ios\" or \"android\"")]
    UnknownPlatform(String),
    #[error("Invalid runtime version {0:?}, expected MAJOR.MINOR[.PATCH]")]
    InvalidRuntimeVersion(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
