use thiserror::Error;

#[derive(Debug, Clone, Copy, Error)]
#[error("rotation command list must not be empty")]
pub struct EmptyCommands;
