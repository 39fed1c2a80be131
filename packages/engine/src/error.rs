use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimatorError {
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid range for {name}: [{min}, {max}]")]
    InvalidRange { name: &'static str, min: f32, max: f32 },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: f32 },

    #[error("lower respawn bound {lower} must sit below upper exit bound {upper}")]
    InvalidBounds { lower: f32, upper: f32 },

    #[error("all {pool_size} pool slots are already settled")]
    PoolExhausted { pool_size: usize },

    #[error("slot {slot} out of range (pool size {pool_size})")]
    SlotOutOfRange { slot: usize, pool_size: usize },
}

pub type Result<T> = std::result::Result<T, AnimatorError>;
