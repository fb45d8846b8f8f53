// Library root for the peerlink cross-service client layer

pub mod clients;
pub mod config;
pub mod core;
