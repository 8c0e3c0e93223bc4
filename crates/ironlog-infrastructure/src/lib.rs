//! Storage backends, paths and configuration loading for ironlog.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod session_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::IronlogPaths;
pub use crate::session_repository::JsonSessionRepository;
pub use crate::storage::{JsonFileStore, MemoryStore};
