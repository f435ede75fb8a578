//! SeaORM implementation of FlowRepository

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, QuerySelect,
    Statement,
};
use tracing::debug;

use crate::domain::flow::{FlowRecord, FlowRepository, NdpiInfo};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::flow_info;
use crate::shared::PageWindow;

pub struct SeaOrmFlowRepository {
    db: DatabaseConnection,
}

impl SeaOrmFlowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// The four columns the API projects out of `FLOW_INFO`.
#[derive(Debug, FromQueryResult)]
struct FlowInfoRow {
    last_seen: i64,
    src_ip: String,
    dst_ip: String,
    ndpi: Option<serde_json::Value>,
}

fn row_to_domain(row: FlowInfoRow) -> FlowRecord {
    FlowRecord {
        last_seen: row.last_seen,
        src_ip: row.src_ip,
        dst_ip: row.dst_ip,
        ndpi: NdpiInfo::from_json(row.ndpi.as_ref()),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::from(e)
}

#[async_trait]
impl FlowRepository for SeaOrmFlowRepository {
    async fn find_page(&self, window: PageWindow) -> DomainResult<Vec<FlowRecord>> {
        debug!(
            "Reading flows: offset={} limit={}",
            window.offset, window.limit
        );

        let rows = flow_info::Entity::find()
            .select_only()
            .column(flow_info::Column::LastSeen)
            .column(flow_info::Column::SrcIp)
            .column(flow_info::Column::DstIp)
            .column(flow_info::Column::Ndpi)
            .order_by_asc(flow_info::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .into_model::<FlowInfoRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
