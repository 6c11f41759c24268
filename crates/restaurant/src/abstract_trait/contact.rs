use crate::{
    domain::{
        requests::contact::{CreateContactRecordRequest, CreateContactRequest},
        response::contact::ContactConfirmation,
    },
    model::contact::Contact as ContactModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynContactRepository = Arc<dyn ContactRepositoryTrait + Send + Sync>;
pub type DynContactService = Arc<dyn ContactServiceTrait + Send + Sync>;

#[async_trait]
pub trait ContactRepositoryTrait {
    async fn create(&self, req: &CreateContactRecordRequest)
    -> Result<ContactModel, RepositoryError>;
}

#[async_trait]
pub trait ContactServiceTrait {
    async fn create(&self, req: &CreateContactRequest)
    -> Result<ContactConfirmation, ServiceError>;
}
