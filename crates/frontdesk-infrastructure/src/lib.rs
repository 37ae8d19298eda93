pub mod config_service;
pub mod dto;
pub mod json_booking_repository;
pub mod memory_booking_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_booking_repository::JsonBookingRepository;
pub use crate::memory_booking_repository::InMemoryBookingRepository;
pub use crate::paths::FrontdeskPaths;
