use crate::{
    abstract_trait::contact::ContactRepositoryTrait,
    domain::requests::contact::CreateContactRecordRequest, model::contact::Contact as ContactModel,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ContactRepository {
    db: ConnectionPool,
}

impl ContactRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepositoryTrait for ContactRepository {
    async fn create(
        &self,
        req: &CreateContactRecordRequest,
    ) -> Result<ContactModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let contact = sqlx::query_as::<_, ContactModel>(
            r#"
            INSERT INTO contacts (id, name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.subject)
        .bind(&req.message)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to store contact message from {}: {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✉️ Stored contact message {}", contact.id);
        Ok(contact)
    }
}
