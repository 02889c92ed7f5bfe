pub mod download;
pub mod fmt;
