//! Business logic services

pub mod equipment;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub equipment: equipment::EquipmentService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            repository,
        }
    }
}
