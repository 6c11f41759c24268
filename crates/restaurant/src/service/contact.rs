use crate::{
    abstract_trait::contact::{ContactServiceTrait, DynContactRepository},
    domain::{
        requests::contact::{CreateContactRecordRequest, CreateContactRequest},
        response::contact::ContactConfirmation,
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
use validator::Validate;

#[derive(Clone)]
pub struct ContactService {
    repository: DynContactRepository,
    storage_timeout: Duration,
    tracer: OperationTracer,
}

impl ContactService {
    pub async fn new(
        repository: DynContactRepository,
        storage_timeout: Duration,
        metrics: Metrics,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        metrics.register("contact_service", &mut *registry.lock().await);

        Self {
            repository,
            storage_timeout,
            tracer: OperationTracer::new("contact-service", metrics),
        }
    }
}

#[async_trait]
impl ContactServiceTrait for ContactService {
    async fn create(&self, req: &CreateContactRequest) -> Result<ContactConfirmation, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let (Some(name), Some(email), Some(message)) = (&req.name, &req.email, &req.message) else {
            return Err(ServiceError::validation("contact message is incomplete"));
        };

        let record = CreateContactRecordRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: req
                .subject
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            message: message.trim().to_string(),
        };

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "create_contact",
            vec![KeyValue::new("component", "contact")],
        );

        match bounded(self.storage_timeout, "create_contact", self.repository.create(&record)).await {
            Ok(contact) => {
                self.tracer.success(
                    &tracing_ctx,
                    "create_contact",
                    method,
                    &format!("Contact message {} stored", contact.id),
                );
                Ok(ContactConfirmation {
                    message: "Contact message received".to_string(),
                    contact_id: contact.id,
                })
            }
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, "create_contact", method, &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryContactStore;

    async fn service(store: Arc<InMemoryContactStore>) -> ContactService {
        ContactService::new(
            store,
            Duration::from_secs(2),
            Metrics::new(),
            Arc::new(Mutex::new(Registry::default())),
        )
        .await
    }

    #[tokio::test]
    async fn stores_a_valid_message() {
        let store = Arc::new(InMemoryContactStore::new());
        let confirmation = service(store.clone())
            .await
            .create(&CreateContactRequest {
                name: Some("Ada".into()),
                email: Some("ada@example.com".into()),
                subject: Some("   ".into()),
                message: Some("Do you cater?".into()),
            })
            .await
            .unwrap();

        let stored = store.all().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, confirmation.contact_id);
        assert_eq!(stored[0].subject, None);
    }

    #[tokio::test]
    async fn missing_email_is_rejected_before_storage() {
        let store = Arc::new(InMemoryContactStore::new());
        let err = service(store.clone())
            .await
            .create(&CreateContactRequest {
                name: Some("Ada".into()),
                message: Some("Hello".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(store.all().await.is_empty());
    }
}
