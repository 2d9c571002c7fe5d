//! Test doubles for the two outbound services.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::distance::{DistanceError, DistanceMatrixResponse, DurationProvider};
use crate::domain::TravelMode;
use crate::llm::{ChatModel, LlmError};

/// One scripted reply from [`ScriptedChatModel`].
enum Reply {
    Text(String),
    Fail,
}

/// Chat model that replays canned replies in order and records prompts.
pub struct ScriptedChatModel {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedChatModel {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful completion.
    pub fn then_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Text(text.into()));
        self
    }

    /// Queue a failed completion.
    pub fn then_fail(self) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Fail);
        self
    }

    /// `(system, user)` prompt pairs received so far.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }

    /// User prompts received so far.
    pub fn user_prompts(&self) -> Vec<String> {
        self.prompts().into_iter().map(|(_, user)| user).collect()
    }
}

impl ChatModel for ScriptedChatModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail) => Err(LlmError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::Api {
                status: 500,
                message: "no scripted reply left".to_string(),
            }),
        }
    }
}

/// Duration provider returning one canned response, recording each lookup.
pub struct FakeDurationProvider {
    response: Result<DistanceMatrixResponse, fn() -> DistanceError>,
    calls: Mutex<Vec<(String, String, TravelMode)>>,
}

impl FakeDurationProvider {
    pub fn returning(response: DistanceMatrixResponse) -> Self {
        Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: fn() -> DistanceError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(origin, destination, mode)` for every lookup so far.
    pub fn calls(&self) -> Vec<(String, String, TravelMode)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DurationProvider for FakeDurationProvider {
    async fn lookup(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<DistanceMatrixResponse, DistanceError> {
        self.calls
            .lock()
            .unwrap()
            .push((origin.to_string(), destination.to_string(), mode));

        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}

/// Canned Distance Matrix responses.
pub mod matrix {
    use crate::distance::{
        DistanceMatrixResponse, ElementStatus, MatrixElement, MatrixRow, MatrixStatus, TextValue,
    };

    fn response(
        origin: &str,
        destination: &str,
        element_status: ElementStatus,
        duration: Option<&str>,
    ) -> DistanceMatrixResponse {
        DistanceMatrixResponse {
            status: MatrixStatus::Ok,
            origin_addresses: vec![origin.to_string()],
            destination_addresses: vec![destination.to_string()],
            rows: vec![MatrixRow {
                elements: vec![MatrixElement {
                    status: element_status,
                    duration: duration.map(|text| TextValue {
                        text: text.to_string(),
                        value: 0,
                    }),
                    distance: None,
                }],
            }],
            error_message: None,
        }
    }

    /// Both places found, route found.
    pub fn resolved(duration: &str) -> DistanceMatrixResponse {
        response(
            "Boston, MA, USA",
            "New York, NY, USA",
            ElementStatus::Ok,
            Some(duration),
        )
    }

    /// Neither place found.
    pub fn unresolved() -> DistanceMatrixResponse {
        response("", "", ElementStatus::NotFound, None)
    }

    /// Both places found, no route between them.
    pub fn no_route() -> DistanceMatrixResponse {
        response(
            "Boston, MA, USA",
            "Honolulu, HI, USA",
            ElementStatus::ZeroResults,
            None,
        )
    }

    /// Resolve each place or not; a route exists only if both resolve.
    pub fn with_resolution(
        origin_ok: bool,
        destination_ok: bool,
        duration: &str,
    ) -> DistanceMatrixResponse {
        let origin = if origin_ok { "Boston, MA, USA" } else { "" };
        let destination = if destination_ok { "New York, NY, USA" } else { "" };

        if origin_ok && destination_ok {
            response(origin, destination, ElementStatus::Ok, Some(duration))
        } else {
            response(origin, destination, ElementStatus::NotFound, None)
        }
    }
}
