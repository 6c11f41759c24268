use crate::{
    domain::{
        requests::menu::{CreateMenuItemRecordRequest, CreateMenuItemRequest},
        response::menu::MenuItemResponse,
    },
    model::menu::MenuItem as MenuItemModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynMenuRepository = Arc<dyn MenuRepositoryTrait + Send + Sync>;
pub type DynMenuService = Arc<dyn MenuServiceTrait + Send + Sync>;

#[async_trait]
pub trait MenuRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<MenuItemModel>, RepositoryError>;
    async fn create(&self, req: &CreateMenuItemRecordRequest)
    -> Result<MenuItemModel, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait MenuServiceTrait {
    async fn find_all(&self) -> Result<Vec<MenuItemResponse>, ServiceError>;
    async fn create(&self, req: &CreateMenuItemRequest) -> Result<MenuItemResponse, ServiceError>;
}
