pub mod cipher;
pub mod error;
pub mod record;
pub mod threshold;
