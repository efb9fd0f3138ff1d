//! Client-side view model shared by the recommendation forms.
//!
//! A form moves `Idle -> Loading -> Success | Error` and may be resubmitted
//! from any state. Each submission gets a [`RequestTicket`]; only the most
//! recently issued ticket may change the view, so a slow response to an
//! earlier selection can never overwrite a newer one.

use crate::actions::ActionResponse;
use crate::models::Movie;

/// Shown when an envelope claims success but carries no movies.
pub const MISSING_DATA_ERROR: &str = "The response did not contain any movies.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Movie>),
    Error(String),
}

/// Sequence number handed out by [`FormView::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued (or the view was reset); the response was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct FormView {
    state: ViewState,
    issued: u64,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }

    /// Starts a submission. Previous results are cleared immediately.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = ViewState::Loading;
        RequestTicket(self.issued)
    }

    /// Applies `response` if `ticket` is still the latest request.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        response: ActionResponse<Vec<Movie>>,
    ) -> Completion {
        if ticket.0 != self.issued || self.state != ViewState::Loading {
            return Completion::Stale;
        }

        self.state = match response {
            ActionResponse {
                success: true,
                data: Some(movies),
                ..
            } => ViewState::Success(movies),
            ActionResponse { error, .. } => {
                ViewState::Error(error.unwrap_or_else(|| MISSING_DATA_ERROR.to_string()))
            }
        };
        Completion::Applied
    }

    /// Back to `Idle`. Any request still in flight becomes stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = ViewState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(titles: &[&str]) -> ActionResponse<Vec<Movie>> {
        ActionResponse::ok(titles.iter().map(|t| Movie::new(*t, "...")).collect())
    }

    #[test]
    fn test_happy_path() {
        let mut view = FormView::new();
        assert_eq!(view.state(), &ViewState::Idle);

        let ticket = view.begin();
        assert!(view.is_loading());

        assert_eq!(view.complete(ticket, movies(&["Heat"])), Completion::Applied);
        match view.state() {
            ViewState::Success(list) => assert_eq!(list[0].title, "Heat"),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_failure_shows_envelope_message() {
        let mut view = FormView::new();
        let ticket = view.begin();
        view.complete(ticket, ActionResponse::failed("Try again."));
        assert_eq!(view.state(), &ViewState::Error("Try again.".to_string()));
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let mut view = FormView::new();
        let ticket = view.begin();
        let response = ActionResponse {
            success: true,
            data: None,
            error: None,
        };
        view.complete(ticket, response);
        assert_eq!(
            view.state(),
            &ViewState::Error(MISSING_DATA_ERROR.to_string())
        );
    }

    #[test]
    fn test_last_request_wins() {
        let mut view = FormView::new();
        let thrilling = view.begin();
        let emotional = view.begin();

        // The newer request resolves first; the older one arrives late.
        assert_eq!(view.complete(emotional, movies(&["Coco"])), Completion::Applied);
        assert_eq!(view.complete(thrilling, movies(&["Tehran"])), Completion::Stale);

        match view.state() {
            ViewState::Success(list) => assert_eq!(list[0].title, "Coco"),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_stale_response_cannot_clear_loading() {
        let mut view = FormView::new();
        let first = view.begin();
        let _second = view.begin();

        assert_eq!(
            view.complete(first, ActionResponse::failed("boom")),
            Completion::Stale
        );
        assert!(view.is_loading());
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut view = FormView::new();
        let ticket = view.begin();
        view.reset();
        assert_eq!(view.complete(ticket, movies(&["Heat"])), Completion::Stale);
        assert_eq!(view.state(), &ViewState::Idle);
    }

    #[test]
    fn test_same_ticket_applies_once() {
        let mut view = FormView::new();
        let ticket = view.begin();
        assert_eq!(view.complete(ticket, movies(&["Heat"])), Completion::Applied);
        assert_eq!(view.complete(ticket, movies(&["Ronin"])), Completion::Stale);
    }
}
