use crate::{
    abstract_trait::order::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderIntakeServiceTrait,
    },
    domain::{
        requests::order::{CreateOrderRecordRequest, CreateOrderRequest},
        response::order::{OrderConfirmation, OrderNumberResponse, OrderResponse},
    },
    service::{
        bounded,
        issuance_gate::IssuanceGate,
        order_number::{OrderNumber, OrderNumberGenerator},
    },
};
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, OperationTracer, validation_messages},
};

use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::{info, warn};
use validator::Validate;

/// Validates an order, assigns it a number and stores it.
#[derive(Clone)]
pub struct OrderIntakeService {
    generator: OrderNumberGenerator,
    gate: IssuanceGate,
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
    storage_timeout: Duration,
    tracer: OperationTracer,
}

pub struct OrderIntakeServiceDeps {
    pub generator: OrderNumberGenerator,
    pub gate: IssuanceGate,
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub storage_timeout: Duration,
    pub metrics: Metrics,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderIntakeService {
    pub async fn new(deps: OrderIntakeServiceDeps) -> Self {
        let OrderIntakeServiceDeps {
            generator,
            gate,
            command,
            query,
            storage_timeout,
            metrics,
            registry,
        } = deps;

        metrics.register("order_intake_service", &mut *registry.lock().await);

        Self {
            generator,
            gate,
            command,
            query,
            storage_timeout,
            tracer: OperationTracer::new("order-intake-service", metrics),
        }
    }

    async fn place_order(&self, req: &CreateOrderRequest) -> Result<OrderConfirmation, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let build_record = Self::to_record(req)?;

        let _permit = self.gate.enter_intake().await?;

        let order_number = match req.order_number.as_deref() {
            Some(raw) => self.claim(raw).await?,
            None => self.generator.issue_next().await?,
        };

        let record = build_record(order_number);

        // From here on the number is consumed, even if the insert fails.
        let order = bounded(
            self.storage_timeout,
            "create_order",
            self.command.create_order(&record),
        )
        .await
        .inspect_err(|e| {
            warn!("⚠️ Order number {order_number} consumed without a stored order: {e}");
        })?;

        Ok(OrderConfirmation {
            message: "Order created successfully".to_string(),
            order_number: order.order_number.clone(),
            order: OrderResponse::from(order),
        })
    }

    /// Validated input with the number still to be filled in.
    fn to_record(
        req: &CreateOrderRequest,
    ) -> Result<impl FnOnce(OrderNumber) -> CreateOrderRecordRequest, ServiceError> {
        let missing = |field: &str| ServiceError::validation(format!("{field}: is required"));

        let meal_name = req
            .meal_name
            .as_deref()
            .map(str::trim)
            .ok_or_else(|| missing("mealName"))?
            .to_string();
        let table_number = req
            .table_number
            .as_deref()
            .map(str::trim)
            .ok_or_else(|| missing("tableNumber"))?
            .to_string();
        let quantity = req.quantity.ok_or_else(|| missing("quantity"))?;
        let side_item = req
            .side_item
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(move |order_number| CreateOrderRecordRequest {
            order_number,
            meal_name,
            side_item,
            quantity,
            table_number,
        })
    }

    /// Accepts a number handed out earlier by `generate_order_number`.
    ///
    /// Reservations are not tied to a client: any unused number up to the
    /// last issued one can be claimed, and whoever claims it first wins.
    async fn claim(&self, raw: &str) -> Result<OrderNumber, ServiceError> {
        let order_number: OrderNumber = raw
            .trim()
            .parse()
            .map_err(|e| ServiceError::validation(format!("orderNumber: {e}")))?;

        if order_number.value() > self.generator.last_issued().await? {
            return Err(ServiceError::validation(format!(
                "orderNumber: {order_number} has not been issued today"
            )));
        }

        let taken = bounded(
            self.storage_timeout,
            "exists_by_order_number",
            self.query.exists_by_order_number(&order_number.to_string()),
        )
        .await?;

        if taken {
            return Err(ServiceError::Repo(RepositoryError::Conflict(format!(
                "order number {order_number} is already used"
            ))));
        }

        Ok(order_number)
    }
}

#[async_trait]
impl OrderIntakeServiceTrait for OrderIntakeService {
    async fn submit(&self, req: &CreateOrderRequest) -> Result<OrderConfirmation, ServiceError> {
        info!(
            "🧾 Submitting order for table {}",
            req.table_number.as_deref().unwrap_or_default()
        );

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "submit_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "submit"),
                KeyValue::new(
                    "order.table_number",
                    req.table_number.clone().unwrap_or_default(),
                ),
            ],
        );

        match self.place_order(req).await {
            Ok(confirmation) => {
                self.tracer.success(
                    &tracing_ctx,
                    "submit_order",
                    method,
                    &format!("Order {} created", confirmation.order_number),
                );
                Ok(confirmation)
            }
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, "submit_order", method, &e.to_string());
                Err(e)
            }
        }
    }

    async fn generate_order_number(&self) -> Result<OrderNumberResponse, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "generate_order_number",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "generate_order_number"),
            ],
        );

        let issued = match self.gate.enter_intake().await {
            Ok(_permit) => self.generator.issue_next().await,
            Err(e) => Err(e),
        };

        match issued {
            Ok(number) => {
                self.tracer.success(
                    &tracing_ctx,
                    "generate_order_number",
                    method,
                    &format!("Reserved order number {number}"),
                );
                Ok(OrderNumberResponse {
                    order_number: number.to_string(),
                })
            }
            Err(e) => {
                self.tracer
                    .failure(&tracing_ctx, "generate_order_number", method, &e.to_string());
                Err(e)
            }
        }
    }
}
