use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::community::CommunityRepository, error::AppError, model::bump::Verification,
    util::timeout::with_timeout,
};

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> VerificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Reports whether a guild is registered and active. Read-only.
    ///
    /// # Returns
    /// - `Ok(Verification)` - Registration status, with the name when registered
    /// - `Err(AppError)` - Storage failure or timeout
    pub async fn verify(&self, external_id: u64) -> Result<Verification, AppError> {
        let repo = CommunityRepository::new(self.db);
        let community = with_timeout(self.timeout, repo.find_by_external_id(external_id)).await?;

        Ok(match community {
            Some(community) => Verification {
                registered: true,
                active: Some(community.is_active),
                name: Some(community.name),
            },
            None => Verification {
                registered: false,
                active: None,
                name: None,
            },
        })
    }
}
