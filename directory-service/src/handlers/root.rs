use crate::dtos::MessageResponse;
use axum::Json;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("welcome AsOne4Health-dev"))
}
