use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::application::{ServiceHandler, TeamResponse};

pub(super) async fn list_team(State(handler): State<Arc<ServiceHandler>>) -> Json<TeamResponse> {
    Json(handler.team())
}
