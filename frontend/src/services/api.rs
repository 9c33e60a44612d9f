use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ActivityCreated, ActivityPayload, CreateGoalRequest, GoalCreated, GoalDetails, Profile,
    Progress,
};
use thiserror::Error;

use super::config::AppConfig;

/// Failure of one API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("server responded with status {0}")]
    Status(u16),
    /// The request never completed
    #[error("network error: {0}")]
    Network(String),
    /// The body could not be serialized or the response was not the
    /// expected shape
    #[error("bad payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// HTTP status of the failure, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Client for the goal service REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    /// Create a client against the default goal service location
    pub fn new() -> Self {
        Self {
            config: AppConfig::new(),
        }
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Profile of the signed-in runner
    pub async fn active_profile(&self) -> Result<Profile, ApiError> {
        let url = self.config.api_url("profiles/me");

        match Request::get(&url).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// The goal the activity flow operates against
    pub async fn active_goal(&self) -> Result<GoalDetails, ApiError> {
        let url = self.config.api_url("goals/active");

        match Request::get(&url).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Create a goal; the response carries the id of the new goal
    pub async fn create_goal(&self, request: &CreateGoalRequest) -> Result<GoalCreated, ApiError> {
        let url = self.config.api_url("goals");

        match Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Payload(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Post one activity against a goal
    pub async fn post_activity(
        &self,
        goal_id: i64,
        payload: &ActivityPayload,
    ) -> Result<ActivityCreated, ApiError> {
        let url = self.config.api_url(&format!("goals/{}/activities", goal_id));

        match Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Payload(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Progress totals for a goal
    pub async fn goal_progress(&self, goal_id: i64) -> Result<Progress, ApiError> {
        let url = self.config.api_url(&format!("goals/{}/progress", goal_id));

        match Request::get(&url).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Payload(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
