use services::{QuizFlowError, ServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Incomplete,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Incomplete => "Please fill in every field.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizFlowError> for ViewError {
    fn from(err: QuizFlowError) -> Self {
        match err {
            QuizFlowError::Login(_) => ViewError::Incomplete,
            _ => ViewError::Unknown,
        }
    }
}

impl From<ServiceError> for ViewError {
    fn from(_: ServiceError) -> Self {
        ViewError::Unknown
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_result<T, E: Into<ViewError>>(result: Result<T, E>) -> ViewState<T> {
    match result {
        Ok(data) => ViewState::Ready(data),
        Err(err) => ViewState::Error(err.into()),
    }
}
