//! Flow API handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::FlowInfoDto;
use crate::application::FlowService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiResponse, EmptyData, PaginatedResponse, PaginationParams,
    ValidatedQuery,
};

/// Flow handler state
#[derive(Clone)]
pub struct FlowHandlerState {
    pub service: Arc<FlowService>,
    /// Page size used when the request omits `size`
    pub default_page_size: u32,
}

#[utoipa::path(
    get,
    path = "/flows/",
    tag = "Flows",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of flows", body = PaginatedResponse<FlowInfoDto>),
        (status = 422, description = "page/size out of bounds", body = ApiResponse<EmptyData>),
        (status = 500, description = "Flow store unavailable", body = ApiResponse<EmptyData>)
    )
)]
pub async fn list_flows(
    State(state): State<FlowHandlerState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<PaginatedResponse<FlowInfoDto>>, ApiError> {
    let pagination = params
        .resolve(state.default_page_size)
        .map_err(error_response)?;

    let page = state
        .service
        .list_page(pagination)
        .await
        .map_err(error_response)?;

    Ok(Json(page.into()))
}
