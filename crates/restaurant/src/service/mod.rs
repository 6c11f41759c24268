pub mod contact;
pub mod issuance_gate;
pub mod menu;
pub mod order;
pub mod order_number;
pub mod reservation;

pub use self::contact::ContactService;
pub use self::issuance_gate::IssuanceGate;
pub use self::menu::MenuService;
pub use self::order::{OrderIntakeService, OrderIntakeServiceDeps};
pub use self::order_number::{OrderNumber, OrderNumberGenerator};
pub use self::reservation::ReservationService;

use shared::errors::{RepositoryError, ServiceError};
use std::{future::Future, time::Duration};
use tokio::time::timeout;

/// Runs a record-store call under the storage deadline. Repository errors
/// pass through untouched; an elapsed deadline becomes `StorageUnavailable`.
pub(crate) async fn bounded<T, F>(limit: Duration, operation: &str, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, RepositoryError>>,
{
    match timeout(limit, fut).await {
        Ok(result) => result.map_err(ServiceError::Repo),
        Err(_) => Err(ServiceError::StorageUnavailable(format!(
            "{operation} timed out after {}ms",
            limit.as_millis()
        ))),
    }
}
