use crate::{
    abstract_trait::reservation::ReservationRepositoryTrait,
    domain::requests::reservation::CreateReservationRecordRequest,
    model::reservation::Reservation as ReservationModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: Mutex<Vec<ReservationModel>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<ReservationModel> {
        self.reservations.lock().await.clone()
    }
}

#[async_trait]
impl ReservationRepositoryTrait for InMemoryReservationStore {
    async fn create(
        &self,
        req: &CreateReservationRecordRequest,
    ) -> Result<ReservationModel, RepositoryError> {
        let reservation = ReservationModel {
            id: Uuid::new_v4(),
            firstname: req.firstname.clone(),
            name: req.name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            date_time: req.date_time,
            guests: req.guests,
            created_at: Utc::now(),
        };
        self.reservations.lock().await.push(reservation.clone());
        Ok(reservation)
    }
}
