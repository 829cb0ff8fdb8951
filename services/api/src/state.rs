use sea_orm::DatabaseConnection;

use crate::infra::db::{DbClientRecordRepository, DbProfessionalRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn client_record_repo(&self) -> DbClientRecordRepository {
        DbClientRecordRepository {
            db: self.db.clone(),
        }
    }

    pub fn professional_repo(&self) -> DbProfessionalRepository {
        DbProfessionalRepository {
            db: self.db.clone(),
        }
    }
}
