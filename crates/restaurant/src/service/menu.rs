use crate::{
    abstract_trait::menu::{DynMenuRepository, MenuServiceTrait},
    domain::{
        requests::menu::{CreateMenuItemRecordRequest, CreateMenuItemRequest},
        response::menu::MenuItemResponse,
    },
    service::bounded,
};
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer, validation_messages},
};

use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct MenuService {
    repository: DynMenuRepository,
    storage_timeout: Duration,
    tracer: OperationTracer,
}

impl MenuService {
    pub async fn new(
        repository: DynMenuRepository,
        storage_timeout: Duration,
        metrics: Metrics,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        metrics.register("menu_service", &mut *registry.lock().await);

        Self {
            repository,
            storage_timeout,
            tracer: OperationTracer::new("menu-service", metrics),
        }
    }
}

#[async_trait]
impl MenuServiceTrait for MenuService {
    async fn find_all(&self) -> Result<Vec<MenuItemResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "find_all_menu_items",
            vec![KeyValue::new("component", "menu")],
        );

        match bounded(self.storage_timeout, "find_all_menu_items", self.repository.find_all()).await {
            Ok(items) => {
                self.tracer.success(
                    &tracing_ctx,
                    "find_all_menu_items",
                    method,
                    &format!("Found {} menu items", items.len()),
                );
                Ok(items.into_iter().map(MenuItemResponse::from).collect())
            }
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, "find_all_menu_items", method, &e.to_string());
                Err(e)
            }
        }
    }

    async fn create(&self, req: &CreateMenuItemRequest) -> Result<MenuItemResponse, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let record = match (&req.name, &req.description, req.price, &req.image) {
            (Some(name), Some(description), Some(price), Some(image)) => {
                CreateMenuItemRecordRequest {
                    name: name.trim().to_string(),
                    description: description.trim().to_string(),
                    price,
                    image: image.trim().to_string(),
                }
            }
            _ => return Err(ServiceError::validation("menu item is incomplete")),
        };

        info!("🍽️ Adding menu item {}", record.name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "create_menu_item",
            vec![
                KeyValue::new("component", "menu"),
                KeyValue::new("menu.name", record.name.clone()),
            ],
        );

        match bounded(self.storage_timeout, "create_menu_item", self.repository.create(&record)).await {
            Ok(item) => {
                self.tracer.success(
                    &tracing_ctx,
                    "create_menu_item",
                    method,
                    &format!("Menu item {} created", item.id),
                );
                Ok(MenuItemResponse::from(item))
            }
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, "create_menu_item", method, &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryMenuStore;

    async fn service() -> MenuService {
        MenuService::new(
            Arc::new(InMemoryMenuStore::new()),
            Duration::from_secs(2),
            Metrics::new(),
            Arc::new(Mutex::new(Registry::default())),
        )
        .await
    }

    #[tokio::test]
    async fn created_items_are_listed() {
        let service = service().await;

        service
            .create(&CreateMenuItemRequest {
                name: Some("Tarte Tatin".into()),
                description: Some("Caramelised apple tart".into()),
                price: Some(7.5),
                image: Some("tatin.jpg".into()),
            })
            .await
            .unwrap();

        let menu = service.find_all().await.unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].name, "Tarte Tatin");
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let err = service()
            .await
            .create(&CreateMenuItemRequest {
                name: Some("Free lunch".into()),
                description: Some("No such thing".into()),
                price: Some(-1.0),
                image: Some("none.jpg".into()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
