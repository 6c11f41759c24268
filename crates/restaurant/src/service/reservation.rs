use crate::{
    abstract_trait::reservation::{DynReservationRepository, ReservationServiceTrait},
    domain::{
        requests::reservation::{CreateReservationRecordRequest, CreateReservationRequest},
        response::reservation::ReservationConfirmation,
    },
    service::bounded,
};
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer, parse_datetime, validation_messages},
};

use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct ReservationService {
    repository: DynReservationRepository,
    storage_timeout: Duration,
    tracer: OperationTracer,
}

impl ReservationService {
    pub async fn new(
        repository: DynReservationRepository,
        storage_timeout: Duration,
        metrics: Metrics,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        metrics.register("reservation_service", &mut *registry.lock().await);

        Self {
            repository,
            storage_timeout,
            tracer: OperationTracer::new("reservation-service", metrics),
        }
    }

    fn to_record(req: &CreateReservationRequest) -> Result<CreateReservationRecordRequest, ServiceError> {
        let incomplete = || ServiceError::validation("reservation is incomplete");

        let date_time = req
            .date_time
            .as_deref()
            .and_then(parse_datetime)
            .ok_or_else(|| ServiceError::validation("dateTime: invalid date-time"))?;

        let trimmed = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Ok(CreateReservationRecordRequest {
            firstname: trimmed(&req.firstname).ok_or_else(incomplete)?,
            name: trimmed(&req.name),
            email: trimmed(&req.email).ok_or_else(incomplete)?,
            phone: trimmed(&req.phone),
            date_time,
            guests: req.guests.ok_or_else(incomplete)?,
        })
    }
}

#[async_trait]
impl ReservationServiceTrait for ReservationService {
    async fn create(
        &self,
        req: &CreateReservationRequest,
    ) -> Result<ReservationConfirmation, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let record = Self::to_record(req)?;

        info!(
            "📅 Reservation request for {} guests at {}",
            record.guests, record.date_time
        );

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "create_reservation",
            vec![
                KeyValue::new("component", "reservation"),
                KeyValue::new("reservation.guests", i64::from(record.guests)),
            ],
        );

        match bounded(
            self.storage_timeout,
            "create_reservation",
            self.repository.create(&record),
        )
        .await
        {
            Ok(reservation) => {
                self.tracer.success(
                    &tracing_ctx,
                    "create_reservation",
                    method,
                    &format!("Reservation {} stored", reservation.id),
                );
                Ok(ReservationConfirmation {
                    message: "Reservation confirmed".to_string(),
                    reservation_id: reservation.id,
                })
            }
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, "create_reservation", method, &e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryReservationStore;
    use chrono::{TimeZone, Utc};

    fn request() -> CreateReservationRequest {
        CreateReservationRequest {
            firstname: Some("Grace".into()),
            email: Some("grace@example.com".into()),
            date_time: Some("2026-03-14T19:30".into()),
            guests: Some(4),
            ..Default::default()
        }
    }

    async fn service(store: Arc<InMemoryReservationStore>) -> ReservationService {
        ReservationService::new(
            store,
            Duration::from_secs(2),
            Metrics::new(),
            Arc::new(Mutex::new(Registry::default())),
        )
        .await
    }

    #[tokio::test]
    async fn stores_reservation_with_parsed_time() {
        let store = Arc::new(InMemoryReservationStore::new());
        let confirmation = service(store.clone()).await.create(&request()).await.unwrap();

        let stored = store.all().await;
        assert_eq!(stored[0].id, confirmation.reservation_id);
        assert_eq!(
            stored[0].date_time,
            Utc.with_ymd_and_hms(2026, 3, 14, 19, 30, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn rejects_zero_guests_and_bad_dates() {
        let store = Arc::new(InMemoryReservationStore::new());
        let service = service(store.clone()).await;

        let zero_guests = CreateReservationRequest {
            guests: Some(0),
            ..request()
        };
        let bad_date = CreateReservationRequest {
            date_time: Some("next friday".into()),
            ..request()
        };

        for req in [zero_guests, bad_date] {
            let err = service.create(&req).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        }
        assert!(store.all().await.is_empty());
    }
}
