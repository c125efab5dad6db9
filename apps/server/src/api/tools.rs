use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use globefin_ai::{AiError, MarketTool, ToolInfo};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Debug, Deserialize)]
struct ToolRequest {
    #[serde(default)]
    input: String,
}

#[derive(Debug, Serialize)]
struct ToolResponse {
    tool: &'static str,
    output: String,
}

async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Vec<ToolInfo>> {
    Json(state.tools.tools())
}

async fn invoke_tool(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolRequest>,
) -> ApiResult<Json<ToolResponse>> {
    let tool = MarketTool::from_name(&name).ok_or(AiError::ToolNotFound(name))?;
    let output = state.tools.invoke(tool, &request.input).await;
    Ok(Json(ToolResponse {
        tool: tool.display_name(),
        output,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/{name}", post(invoke_tool))
}
