use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("request set is empty — enter at least one track address")]
    Empty,

    #[error("invalid input: {0}")]
    Parse(String),

    #[error("track {track} is outside the addressable range 0..{tracks}")]
    TrackOutOfRange { track: u32, tracks: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

pub type InputResult<T> = Result<T, InputError>;
