//! Wires configuration, storage and the booking use case together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use frontdesk_application::BookingUseCase;
use frontdesk_core::catalog::RoomCatalog;
use frontdesk_core::error::Result;
use frontdesk_infrastructure::{ConfigService, FrontdeskPaths, JsonBookingRepository};

/// Where the desk keeps its state and the use case operating on it.
pub struct Desk {
    pub usecase: BookingUseCase,
    pub bookings_path: PathBuf,
}

/// Builds a desk rooted at `paths`.
///
/// `config` selects an explicit configuration file; `data_dir` overrides
/// the configured data directory.
pub fn build_desk(
    paths: FrontdeskPaths,
    config: Option<&Path>,
    data_dir: Option<&Path>,
) -> Result<Desk> {
    let config_service = ConfigService::new(paths);
    let mut config = config_service.load(config)?;
    if let Some(dir) = data_dir {
        config.storage.data_dir = dir.to_path_buf();
    }

    let bookings_path = config_service.paths().bookings_file(&config.storage);
    tracing::info!("[Bootstrap] Bookings file: {}", bookings_path.display());

    let repository = Arc::new(JsonBookingRepository::new(bookings_path.clone()));
    let usecase = BookingUseCase::new(Arc::new(RoomCatalog::standard()), repository);

    Ok(Desk {
        usecase,
        bookings_path,
    })
}
