use crate::{
    domain::{
        requests::reservation::{CreateReservationRecordRequest, CreateReservationRequest},
        response::reservation::ReservationConfirmation,
    },
    model::reservation::Reservation as ReservationModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynReservationRepository = Arc<dyn ReservationRepositoryTrait + Send + Sync>;
pub type DynReservationService = Arc<dyn ReservationServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReservationRepositoryTrait {
    async fn create(
        &self,
        req: &CreateReservationRecordRequest,
    ) -> Result<ReservationModel, RepositoryError>;
}

#[async_trait]
pub trait ReservationServiceTrait {
    async fn create(
        &self,
        req: &CreateReservationRequest,
    ) -> Result<ReservationConfirmation, ServiceError>;
}
