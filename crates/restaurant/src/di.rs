use crate::{
    abstract_trait::{
        contact::{DynContactRepository, DynContactService},
        menu::{DynMenuRepository, DynMenuService},
        order::{DynOrderCommandRepository, DynOrderIntakeService, DynOrderQueryRepository},
        reservation::{DynReservationRepository, DynReservationService},
        rollover::DynRolloverStore,
        sequence::DynSequenceStore,
    },
    repository::{
        memory::{
            InMemoryContactStore, InMemoryMenuStore, InMemoryOrderStore, InMemoryReservationStore,
            InMemoryRolloverStore, InMemorySequenceStore,
        },
        postgres::{
            ContactRepository, MenuRepository, OrderCommandRepository, OrderQueryRepository,
            PostgresRolloverStore, PostgresSequenceStore, ReservationRepository,
        },
    },
    scheduler::{DailyResetScheduler, DailyResetSchedulerDeps, ResetRetryPolicy},
    service::{
        ContactService, IssuanceGate, MenuService, OrderIntakeService, OrderIntakeServiceDeps,
        OrderNumberGenerator, ReservationService,
    },
};
use chrono::NaiveTime;
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::Metrics};
use std::{fmt, sync::Arc, time::Duration};
use tokio::sync::Mutex;

/// Storage implementations behind every service.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub sequence: DynSequenceStore,
    pub rollover: DynRolloverStore,
    pub order_command: DynOrderCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub menu: DynMenuRepository,
    pub contact: DynContactRepository,
    pub reservation: DynReservationRepository,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            sequence: Arc::new(PostgresSequenceStore::new(pool.clone())),
            rollover: Arc::new(PostgresRolloverStore::new(pool.clone())),
            order_command: Arc::new(OrderCommandRepository::new(pool.clone())),
            order_query: Arc::new(OrderQueryRepository::new(pool.clone())),
            menu: Arc::new(MenuRepository::new(pool.clone())),
            contact: Arc::new(ContactRepository::new(pool.clone())),
            reservation: Arc::new(ReservationRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self::in_memory_with(Arc::new(InMemorySequenceStore::new()))
    }

    /// In-memory stores around `sequence`, which may be snapshot-backed.
    pub fn in_memory_with(sequence: Arc<InMemorySequenceStore>) -> Self {
        let orders = Arc::new(InMemoryOrderStore::new());

        Self {
            sequence: sequence.clone(),
            rollover: Arc::new(InMemoryRolloverStore::new(orders.clone(), sequence)),
            order_command: orders.clone(),
            order_query: orders,
            menu: Arc::new(InMemoryMenuStore::new()),
            contact: Arc::new(InMemoryContactStore::new()),
            reservation: Arc::new(InMemoryReservationStore::new()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub storage_timeout: Duration,
    pub daily_reset_at: NaiveTime,
    pub reset_retry: ResetRetryPolicy,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            storage_timeout: Duration::from_millis(2000),
            daily_reset_at: NaiveTime::MIN,
            reset_retry: ResetRetryPolicy::default(),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub menu_service: DynMenuService,
    pub contact_service: DynContactService,
    pub reservation_service: DynReservationService,
    pub order_intake_service: DynOrderIntakeService,
    pub menu_repository: DynMenuRepository,
    pub scheduler: Arc<DailyResetScheduler>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("menu_service", &"DynMenuService")
            .field("contact_service", &"DynContactService")
            .field("reservation_service", &"DynReservationService")
            .field("order_intake_service", &"DynOrderIntakeService")
            .field("scheduler", &"DailyResetScheduler")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(
        deps: DependenciesInjectDeps,
        settings: ServiceSettings,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let DependenciesInjectDeps {
            sequence,
            rollover,
            order_command,
            order_query,
            menu,
            contact,
            reservation,
        } = deps;

        let ServiceSettings {
            storage_timeout,
            daily_reset_at,
            reset_retry,
        } = settings;

        // Issuance waits at most one storage deadline for a running rollover.
        let gate = IssuanceGate::new(storage_timeout);

        let order_intake_service: DynOrderIntakeService = Arc::new(
            OrderIntakeService::new(OrderIntakeServiceDeps {
                generator: OrderNumberGenerator::new(sequence, storage_timeout),
                gate: gate.clone(),
                command: order_command,
                query: order_query,
                storage_timeout,
                metrics: Metrics::new(),
                registry: registry.clone(),
            })
            .await,
        );

        let menu_service: DynMenuService = Arc::new(
            MenuService::new(menu.clone(), storage_timeout, Metrics::new(), registry.clone())
                .await,
        );

        let contact_service: DynContactService = Arc::new(
            ContactService::new(contact, storage_timeout, Metrics::new(), registry.clone()).await,
        );

        let reservation_service: DynReservationService = Arc::new(
            ReservationService::new(reservation, storage_timeout, Metrics::new(), registry).await,
        );

        let scheduler = Arc::new(DailyResetScheduler::new(DailyResetSchedulerDeps {
            store: rollover,
            gate,
            reset_at: daily_reset_at,
            storage_timeout,
            retry: reset_retry,
        }));

        Self {
            menu_service,
            contact_service,
            reservation_service,
            order_intake_service,
            menu_repository: menu,
            scheduler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            order::{OrderIntakeServiceTrait, OrderQueryRepositoryTrait},
            rollover::RolloverStoreTrait,
            sequence::SequenceStoreTrait,
        },
        domain::requests::order::CreateOrderRequest,
    };
    use async_trait::async_trait;
    use shared::errors::RepositoryError;

    struct DatabaseDown;

    #[async_trait]
    impl RolloverStoreTrait for DatabaseDown {
        async fn clear_day(&self) -> Result<u64, RepositoryError> {
            Err(RepositoryError::Unavailable("connection reset".into()))
        }
    }

    async fn container(deps: &DependenciesInjectDeps) -> DependenciesInject {
        let settings = ServiceSettings {
            reset_retry: ResetRetryPolicy {
                attempts: 2,
                initial_backoff: Duration::from_millis(1),
            },
            ..ServiceSettings::default()
        };

        DependenciesInject::new(
            deps.clone(),
            settings,
            Arc::new(Mutex::new(Registry::default())),
        )
        .await
    }

    fn soup() -> CreateOrderRequest {
        CreateOrderRequest {
            meal_name: Some("Soup".into()),
            quantity: Some(1),
            table_number: Some("3".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn failed_rollover_leaves_a_consistent_day_across_restart() {
        let sequence = Arc::new(InMemorySequenceStore::new());
        let deps = DependenciesInjectDeps::in_memory_with(sequence.clone());

        let running = container(&deps).await;
        for _ in 0..3 {
            running.order_intake_service.submit(&soup()).await.unwrap();
        }

        let broken = DependenciesInjectDeps {
            rollover: Arc::new(DatabaseDown),
            ..deps.clone()
        };
        assert!(container(&broken).await.scheduler.rollover().await.is_err());

        // Neither half of the rollover went through.
        assert_eq!(sequence.read().await.unwrap(), 3);
        assert!(deps.order_query.exists_by_order_number("000003").await.unwrap());

        // Restart over the same storage.
        let restarted = container(&deps).await;
        let next = restarted.order_intake_service.submit(&soup()).await.unwrap();
        assert_eq!(next.order_number, "000004");

        restarted.scheduler.rollover().await.unwrap();
        let first = restarted.order_intake_service.submit(&soup()).await.unwrap();
        assert_eq!(first.order_number, "000001");
    }
}
