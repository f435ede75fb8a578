//! Flow domain entity

use serde_json::Value;

/// nDPI classification attached to a flow.
///
/// The store keeps it as a JSON document; only `proto` and `category`
/// are ever read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NdpiInfo {
    /// Detected application protocol, e.g. `HTTP`
    pub proto: Option<String>,
    /// Protocol category, e.g. `Web`
    pub category: Option<String>,
}

impl NdpiInfo {
    pub fn new(proto: Option<&str>, category: Option<&str>) -> Self {
        Self {
            proto: proto.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    /// Extract the classification from the stored JSON document.
    ///
    /// A missing document, a non-object, or non-string values all read as
    /// absent fields.
    pub fn from_json(value: Option<&Value>) -> Self {
        let field = |key: &str| {
            value
                .and_then(|v| v.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            proto: field("proto"),
            category: field("category"),
        }
    }
}

/// One observed network flow, projected to the columns the API serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    /// Last packet timestamp
    pub last_seen: i64,
    pub src_ip: String,
    pub dst_ip: String,
    pub ndpi: NdpiInfo,
}

impl FlowRecord {
    pub fn new(
        last_seen: i64,
        src_ip: impl Into<String>,
        dst_ip: impl Into<String>,
        ndpi: NdpiInfo,
    ) -> Self {
        Self {
            last_seen,
            src_ip: src_ip.into(),
            dst_ip: dst_ip.into(),
            ndpi,
        }
    }
}
