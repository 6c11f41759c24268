use crate::{
    abstract_trait::contact::ContactRepositoryTrait,
    domain::requests::contact::CreateContactRecordRequest, model::contact::Contact as ContactModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: Mutex<Vec<ContactModel>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<ContactModel> {
        self.contacts.lock().await.clone()
    }
}

#[async_trait]
impl ContactRepositoryTrait for InMemoryContactStore {
    async fn create(
        &self,
        req: &CreateContactRecordRequest,
    ) -> Result<ContactModel, RepositoryError> {
        let contact = ContactModel {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            email: req.email.clone(),
            subject: req.subject.clone(),
            message: req.message.clone(),
            created_at: Utc::now(),
        };
        self.contacts.lock().await.push(contact.clone());
        Ok(contact)
    }
}
