use reqwest::StatusCode;

// Only a `200 OK` is a success.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchOutcome {
    Success { payload: String },
    Failure { status: StatusCode, body: String },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            FetchOutcome::Success { payload } => Some(payload),
            FetchOutcome::Failure { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<String> {
        match self {
            FetchOutcome::Success { payload } => Some(payload),
            FetchOutcome::Failure { .. } => None,
        }
    }
}
