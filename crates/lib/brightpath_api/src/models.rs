//! Request and response bodies for the HTTP API.

use brightpath_core::activities::ActivityInfo;
use brightpath_core::coaching::{CoachTask, Landmark, PoseSignals, SessionStats};
use serde::{Deserialize, Serialize};

/// Error body shared by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
}

// =============================================================================
// Relay
// =============================================================================

/// `POST /api/botpress/message` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub message: Option<String>,
    pub conversation_id: Option<String>,
}

/// Successful relay envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub success: bool,
    pub reply: String,
    /// Parsed upstream body, passed through untouched.
    pub data: serde_json::Value,
    pub conversation_id: String,
    pub endpoint: String,
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub greeting: String,
    pub upstream_candidates: usize,
    pub token_configured: bool,
}

// =============================================================================
// Activities
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivitiesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityListResponse {
    pub items: Vec<ActivityInfo>,
    pub total: usize,
}

// =============================================================================
// Coaching
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachTasksQuery {
    #[serde(default)]
    pub completed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachTasksResponse {
    pub difficulty: u8,
    pub tasks: Vec<CoachTask>,
}

/// `POST /api/coach/analyze` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub landmarks: Vec<Landmark>,
    pub task_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub signals: PoseSignals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_satisfied: Option<bool>,
}

/// `POST /api/coach/progress` body: the client's current totals plus the
/// outcome of the task just attempted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    #[serde(default)]
    pub stats: SessionStats,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub stats: SessionStats,
    pub feedback: String,
    pub next_task: CoachTask,
}
