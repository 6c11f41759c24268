use crate::abstract_trait::sequence::SequenceStoreTrait;
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info, warn};

/// Single-row `order_sequence` table. The row is created by the initial
/// migration, so a missing row means the schema was not migrated.
pub struct PostgresSequenceStore {
    db: ConnectionPool,
}

impl PostgresSequenceStore {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn to_sequence_value(raw: i64) -> Result<u32, RepositoryError> {
    u32::try_from(raw)
        .map_err(|_| RepositoryError::Custom(format!("order sequence holds invalid value {raw}")))
}

#[async_trait]
impl SequenceStoreTrait for PostgresSequenceStore {
    async fn read(&self) -> Result<u32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let raw = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT last_issued
            FROM order_sequence
            WHERE id = 1
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to read order sequence: {:?}", err);
            RepositoryError::from(err)
        })?;

        to_sequence_value(raw)
    }

    async fn compare_and_set(
        &self,
        expected: u32,
        new_value: u32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE order_sequence
            SET last_issued = $2
            WHERE id = 1 AND last_issued = $1
            "#,
        )
        .bind(i64::from(expected))
        .bind(i64::from(new_value))
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to advance order sequence from {expected}: {:?}", err);
            RepositoryError::from(err)
        })?;

        let stored = result.rows_affected() == 1;
        if !stored {
            warn!("⚠️ Order sequence moved away from {expected} before update");
        }

        Ok(stored)
    }

    async fn reset(&self) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        reset_sequence(&mut *conn).await
    }
}

/// Shared by the plain reset and the rollover transaction.
pub(super) async fn reset_sequence(
    conn: impl sqlx::Executor<'_, Database = sqlx::Postgres>,
) -> Result<(), RepositoryError> {
    let result = sqlx::query(
        r#"
        UPDATE order_sequence
        SET last_issued = 0
        WHERE id = 1
        "#,
    )
    .execute(conn)
    .await
    .map_err(|err| {
        error!("❌ Failed to reset order sequence: {:?}", err);
        RepositoryError::from(err)
    })?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    info!("🔄 Order sequence reset to 0");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_sequence_values() {
        assert_eq!(to_sequence_value(41).unwrap(), 41);
        assert!(matches!(
            to_sequence_value(-1),
            Err(RepositoryError::Custom(_))
        ));
        assert!(matches!(
            to_sequence_value(i64::from(u32::MAX) + 1),
            Err(RepositoryError::Custom(_))
        ));
    }
}
