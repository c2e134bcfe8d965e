//! Write gatekeeper: creation is only reachable with verified claims.

use std::sync::Arc;

use crate::auth::{Authenticator, Claims};

use super::{BlogError, Record, RecordDraft, RecordRepository, Result};

/// Guards [`RecordRepository::create`] behind an [`Authenticator`].
///
/// Authorization is binary: any valid identity may write.
#[derive(Clone)]
pub struct WriteGatekeeper {
    authenticator: Arc<dyn Authenticator>,
    repository: Arc<RecordRepository>,
}

impl WriteGatekeeper {
    pub fn new(authenticator: Arc<dyn Authenticator>, repository: Arc<RecordRepository>) -> Self {
        Self {
            authenticator,
            repository,
        }
    }

    /// Verifies `credential` and, only if it yields claims, creates the record.
    ///
    /// A missing or invalid credential fails with [`BlogError::Unauthorized`]
    /// without touching the store.
    pub async fn authorize_and_create(
        &self,
        draft: RecordDraft,
        credential: Option<&str>,
    ) -> Result<Record> {
        let claims = self.authorize(credential).await?;
        self.repository.create(draft, &claims).await
    }

    /// Verifies `credential` on its own, for callers that must reject an
    /// unauthenticated request before reading anything else from it.
    pub async fn authorize(&self, credential: Option<&str>) -> Result<Claims> {
        match self.authenticator.verify(credential).await? {
            Some(claims) => Ok(claims),
            None => {
                tracing::warn!(
                    credential_present = credential.is_some(),
                    "Rejected write without valid claims"
                );
                Err(BlogError::Unauthorized)
            }
        }
    }
}
