//! `FLOW_INFO` entity, written by the flow collector

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "FLOW_INFO")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub src_ip: String,
    #[sea_orm(column_type = "Text")]
    pub dst_ip: String,
    pub src_port: i32,
    pub dst_port: i32,

    /// IP version: 4 or 6
    pub ipv: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub tcp_fingerprint: String,

    /// Transport protocol name
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub proto: String,

    #[sea_orm(nullable, column_type = "String(StringLen::N(100))")]
    pub src_country: Option<String>,
    #[sea_orm(nullable, column_type = "String(StringLen::N(100))")]
    pub dst_country: Option<String>,

    /// Autonomous system numbers
    #[sea_orm(nullable)]
    pub src_as: Option<i32>,
    #[sea_orm(nullable)]
    pub dst_as: Option<i32>,

    pub first_seen: i64,
    pub last_seen: i64,

    /// Packet count and total bytes
    pub num_pkts: i64,
    pub len_pkts: i64,

    /// nDPI classification document
    #[sea_orm(nullable, column_type = "Json")]
    pub ndpi: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
