use crate::{
    abstract_trait::menu::MenuRepositoryTrait, domain::requests::menu::CreateMenuItemRecordRequest,
    model::menu::MenuItem as MenuItemModel,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct MenuRepository {
    db: ConnectionPool,
}

impl MenuRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuRepositoryTrait for MenuRepository {
    async fn find_all(&self) -> Result<Vec<MenuItemModel>, RepositoryError> {
        info!("📋 Fetching menu");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, MenuItemModel>(
            r#"
            SELECT id, name, description, price, image
            FROM menus
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch menu: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} menu items", items.len());
        Ok(items)
    }

    async fn create(
        &self,
        req: &CreateMenuItemRecordRequest,
    ) -> Result<MenuItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, MenuItemModel>(
            r#"
            INSERT INTO menus (id, name, description, price, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, image
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.image)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create menu item {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created menu item {} ({})", item.name, item.id);
        Ok(item)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menus")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count menu items: {:?}", e);
                RepositoryError::from(e)
            })
    }
}
