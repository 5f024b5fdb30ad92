use thiserror::Error;

#[derive(Error, Debug)]
pub enum TacmapError {
    #[error("Viewport range must be positive, got {0}")]
    InvalidRange(f32),

    #[error("Viewport dimensions must be positive, got {0}x{1}")]
    InvalidViewport(f32, f32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    SettingsError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TacmapError>;
