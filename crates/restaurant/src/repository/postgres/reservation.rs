use crate::{
    abstract_trait::reservation::ReservationRepositoryTrait,
    domain::requests::reservation::CreateReservationRecordRequest,
    model::reservation::Reservation as ReservationModel,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ReservationRepository {
    db: ConnectionPool,
}

impl ReservationRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepositoryTrait for ReservationRepository {
    async fn create(
        &self,
        req: &CreateReservationRecordRequest,
    ) -> Result<ReservationModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reservation = sqlx::query_as::<_, ReservationModel>(
            r#"
            INSERT INTO reservations (id, firstname, name, email, phone, date_time, guests, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp)
            RETURNING id, firstname, name, email, phone, date_time, guests, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.firstname)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.date_time)
        .bind(req.guests)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create reservation for {} at {}: {:?}",
                req.firstname, req.date_time, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "📅 Reserved {} seats for {} at {}",
            reservation.guests, reservation.firstname, reservation.date_time
        );
        Ok(reservation)
    }
}
