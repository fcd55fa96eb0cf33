/// Proof that a fetch was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What a screen should show for its current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

/// Fetched data plus loading and error flags for one screen.
///
/// Every fetch takes a ticket; only the result carrying the newest ticket is
/// applied, so an earlier response arriving late never replaces fresher data.
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new fetch as in flight and invalidates all earlier tickets.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies a fetch result. Returns `false` and leaves the state untouched
    /// when the ticket has been superseded.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => {
                self.data = None;
                self.error = Some(message);
            }
        }
        true
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self, is_empty: impl Fn(&T) -> bool) -> ViewPhase {
        if self.loading {
            return ViewPhase::Loading;
        }
        if let Some(message) = &self.error {
            return ViewPhase::Failed(message.clone());
        }
        match &self.data {
            Some(data) if !is_empty(data) => ViewPhase::Ready,
            _ => ViewPhase::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_in_loading_phase() {
        let state: ViewState<Vec<u8>> = ViewState::new();
        assert_eq!(state.phase(|d| d.is_empty()), ViewPhase::Loading);
    }

    #[test]
    fn should_apply_result_when_ticket_is_current() {
        let mut state = ViewState::new();
        let ticket = state.begin();

        assert!(state.resolve(ticket, Ok(vec![1, 2])));
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert!(!state.is_loading());
        assert_eq!(state.phase(|d| d.is_empty()), ViewPhase::Ready);
    }

    #[test]
    fn should_discard_result_when_ticket_is_stale() {
        let mut state = ViewState::new();
        let first = state.begin();
        let second = state.begin();

        assert!(state.resolve(second, Ok(vec![2])));
        assert!(!state.resolve(first, Ok(vec![1])));
        assert_eq!(state.data(), Some(&vec![2]));
    }

    #[test]
    fn should_stay_loading_when_only_stale_result_arrived() {
        let mut state: ViewState<Vec<u8>> = ViewState::new();
        let first = state.begin();
        let _second = state.begin();

        assert!(!state.resolve(first, Err("API Error: boom".to_string())));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn should_clear_data_and_keep_message_when_fetch_fails() {
        let mut state = ViewState::new();
        let ticket = state.begin();
        state.resolve(ticket, Ok(vec![1]));

        let ticket = state.begin();
        state.resolve(ticket, Err("API Error: 500 Internal Server Error".to_string()));

        assert_eq!(state.data(), None);
        assert_eq!(
            state.phase(|d| d.is_empty()),
            ViewPhase::Failed("API Error: 500 Internal Server Error".to_string())
        );
    }

    #[test]
    fn should_report_empty_phase_when_no_items() {
        let mut state: ViewState<Vec<u8>> = ViewState::new();
        let ticket = state.begin();
        state.resolve(ticket, Ok(vec![]));

        assert_eq!(state.phase(|d| d.is_empty()), ViewPhase::Empty);
    }
}
