//! Flow DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::FlowPage;
use crate::domain::FlowRecord;
use crate::interfaces::http::common::PaginatedResponse;

/// Flow API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlowInfoDto {
    pub src_ip: String,
    pub dst_ip: String,
    /// Last packet timestamp
    pub last_seen: i64,
    /// nDPI application protocol, `null` if unclassified
    pub ndpi_proto: Option<String>,
    /// nDPI protocol category, `null` if unclassified
    pub ndpi_category: Option<String>,
}

impl FlowInfoDto {
    pub fn from_domain(flow: FlowRecord) -> Self {
        Self {
            src_ip: flow.src_ip,
            dst_ip: flow.dst_ip,
            last_seen: flow.last_seen,
            ndpi_proto: flow.ndpi.proto,
            ndpi_category: flow.ndpi.category,
        }
    }
}

impl From<FlowPage> for PaginatedResponse<FlowInfoDto> {
    fn from(page: FlowPage) -> Self {
        PaginatedResponse::new(
            page.pagination,
            page.flows.into_iter().map(FlowInfoDto::from_domain).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NdpiInfo;
    use crate::shared::PaginationData;
    use serde_json::json;

    #[test]
    fn maps_classified_flow() {
        let flow = FlowRecord::new(
            1_700_000_000,
            "10.0.0.1",
            "93.184.216.34",
            NdpiInfo::new(Some("HTTP"), Some("Web")),
        );
        let dto = FlowInfoDto::from_domain(flow);
        assert_eq!(dto.ndpi_proto.as_deref(), Some("HTTP"));
        assert_eq!(dto.ndpi_category.as_deref(), Some("Web"));
    }

    #[test]
    fn unclassified_flow_serializes_nulls() {
        let flow = FlowRecord::new(5, "10.0.0.1", "10.0.0.2", NdpiInfo::default());
        let json = serde_json::to_value(FlowInfoDto::from_domain(flow)).unwrap();
        assert_eq!(
            json,
            json!({
                "src_ip": "10.0.0.1",
                "dst_ip": "10.0.0.2",
                "last_seen": 5,
                "ndpi_proto": null,
                "ndpi_category": null
            })
        );
    }

    #[test]
    fn page_keeps_order_and_pagination() {
        let pagination = PaginationData::new(4, 2).unwrap();
        let page = FlowPage {
            pagination,
            flows: vec![
                FlowRecord::new(2, "b", "x", NdpiInfo::default()),
                FlowRecord::new(1, "a", "x", NdpiInfo::default()),
            ],
        };
        let response = PaginatedResponse::<FlowInfoDto>::from(page);
        assert_eq!(response.pagination, pagination);
        let ips: Vec<&str> = response.results.iter().map(|f| f.src_ip.as_str()).collect();
        assert_eq!(ips, ["b", "a"]);
    }
}
