use crate::{
    abstract_trait::menu::MenuRepositoryTrait, domain::requests::menu::CreateMenuItemRecordRequest,
    model::menu::MenuItem as MenuItemModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    items: Mutex<Vec<MenuItemModel>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuRepositoryTrait for InMemoryMenuStore {
    async fn find_all(&self) -> Result<Vec<MenuItemModel>, RepositoryError> {
        let mut items = self.items.lock().await.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn create(
        &self,
        req: &CreateMenuItemRecordRequest,
    ) -> Result<MenuItemModel, RepositoryError> {
        let item = MenuItemModel {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            image: req.image.clone(),
        };
        self.items.lock().await.push(item.clone());
        Ok(item)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.items.lock().await.len() as i64)
    }
}
