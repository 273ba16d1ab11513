//! End-to-end scenarios over the state machine and the fetch worker,
//! using scripted sources instead of the network.

use std::thread;
use std::time::{Duration, Instant};

use taiview::api::{AttractionSource, FetchError, FetchOutcome, FetchWorker};
use taiview::model::{ApiResponse, Attraction};
use taiview::state::{
    search_input_handler, AppState, LoadStatus, SearchState, AUTH_GUIDANCE, CONNECTIVITY_GUIDANCE,
};

fn attraction(id: u64, name: &str) -> Attraction {
    Attraction {
        id,
        name: name.to_string(),
        address: String::new(),
        introduction: String::new(),
        images: Vec::new(),
        category: Vec::new(),
        tel: None,
        open_time: None,
        url: None,
        modified: String::new(),
    }
}

fn page(names: &[&str]) -> ApiResponse {
    ApiResponse {
        data: Some(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| attraction(i as u64 + 1, name))
                .collect(),
        ),
        total: Some(names.len() as u64),
    }
}

type Outcomes = Vec<Result<ApiResponse, FetchError>>;

/// A source that answers each page with a scripted outcome, optionally
/// after a delay, so arrival order can be controlled in tests.
struct ScriptedSource {
    outcomes: Outcomes,
    delay_page: Option<(u32, Duration)>,
}

impl AttractionSource for ScriptedSource {
    fn fetch_page(&self, page: u32, _lang: &str) -> Result<ApiResponse, FetchError> {
        if let Some((delayed, by)) = self.delay_page {
            if page == delayed {
                thread::sleep(by);
            }
        }
        self.outcomes
            .get((page as usize).saturating_sub(1))
            .cloned()
            .unwrap_or(Err(FetchError::MissingData))
    }
}

fn poll_outcomes<S: AttractionSource + 'static>(
    worker: &FetchWorker<S>,
    expected: usize,
) -> Vec<FetchOutcome> {
    let deadline = Instant::now() + Duration::from_secs(2);
    let mut outcomes = Vec::new();
    while outcomes.len() < expected && Instant::now() < deadline {
        outcomes.extend(worker.poll());
        thread::sleep(Duration::from_millis(5));
    }
    outcomes
}

/// Run one load cycle: start, spawn, poll, apply.
fn run_load(state: &mut AppState, worker: &FetchWorker<ScriptedSource>) {
    let seq = state.load_started();
    worker.spawn_fetch(seq, state.page(), "zh-tw");
    for outcome in poll_outcomes(worker, 1) {
        state.apply_fetch(outcome.seq, outcome.result);
    }
}

// ===== Scenario: page 1 returns two records =====

#[test]
fn two_record_page_enters_idle_with_totals() {
    let worker = FetchWorker::new(ScriptedSource {
        outcomes: vec![Ok(page(&["Taipei 101", "Longshan Temple"]))],
        delay_page: None,
    });
    let mut state = AppState::new(1);
    run_load(&mut state, &worker);

    assert_eq!(state.status(), LoadStatus::Idle);
    assert_eq!(state.total_count(), 2);
    assert_eq!(state.filtered().len(), 2);
    assert!(!state.can_next_page(), "2 < 30 disables the next page");
}

// ===== Scenario: both transports unreachable =====

#[test]
fn cross_origin_style_failure_shows_connectivity_guidance() {
    let worker = FetchWorker::new(ScriptedSource {
        outcomes: vec![Err(FetchError::Unreachable {
            detail: "error sending request".to_string(),
        })],
        delay_page: None,
    });
    let mut state = AppState::new(1);
    run_load(&mut state, &worker);

    assert_eq!(state.status(), LoadStatus::Error);
    assert_eq!(state.error_message(), Some(CONNECTIVITY_GUIDANCE));
}

// ===== Scenario: HTTP 401 =====

#[test]
fn http_401_shows_auth_guidance() {
    let worker = FetchWorker::new(ScriptedSource {
        outcomes: vec![Err(FetchError::DirectStatus { status: 401 })],
        delay_page: None,
    });
    let mut state = AppState::new(1);
    run_load(&mut state, &worker);

    assert_eq!(state.status(), LoadStatus::Error);
    assert_eq!(state.error_message(), Some(AUTH_GUIDANCE));
}

// ===== Scenario: malformed envelope =====

#[test]
fn null_data_is_an_empty_response_error() {
    let worker = FetchWorker::new(ScriptedSource {
        outcomes: vec![Ok(ApiResponse {
            data: None,
            total: Some(3),
        })],
        delay_page: None,
    });
    let mut state = AppState::new(1);
    run_load(&mut state, &worker);

    assert_eq!(state.status(), LoadStatus::Error);
    assert!(state.error_message().unwrap().contains("EMPTY_RESPONSE"));
}

// ===== Scenario: superseded request loses the race =====

#[test]
fn slow_stale_response_cannot_overwrite_the_newer_page() {
    // Page 1 is slow; page 2 answers immediately. The user flips to page
    // 2 before page 1 lands, so the page-1 outcome arrives last and must
    // be dropped by the sequence guard.
    let worker = FetchWorker::new(ScriptedSource {
        outcomes: vec![
            Ok(page(&["Stale Spot"])),
            Ok(page(&["Fresh Spot"])),
        ],
        delay_page: Some((1, Duration::from_millis(150))),
    });
    let mut state = AppState::new(1);

    let stale_seq = state.load_started();
    worker.spawn_fetch(stale_seq, 1, "zh-tw");

    // Simulate the user flipping forward before the first load returns.
    let fresh_seq = state.load_started();
    worker.spawn_fetch(fresh_seq, 2, "zh-tw");

    for outcome in poll_outcomes(&worker, 2) {
        state.apply_fetch(outcome.seq, outcome.result);
    }

    assert_eq!(state.status(), LoadStatus::Idle);
    let names: Vec<&str> = state
        .attractions()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Fresh Spot"]);
}

// ===== Scenario: submitted search filters and hides pagination =====

#[test]
fn submitted_search_filters_page_and_hides_pagination() {
    let names: Vec<String> = (1..=30)
        .map(|i| {
            if i % 10 == 0 {
                format!("Tower 101 #{i}")
            } else {
                format!("Spot #{i}")
            }
        })
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let worker = FetchWorker::new(ScriptedSource {
        outcomes: vec![Ok(page(&name_refs))],
        delay_page: None,
    });
    let mut state = AppState::new(1);
    run_load(&mut state, &worker);
    assert!(state.pagination_visible(), "full page, no filter");

    // Type "101" and submit, the way the event loop does it.
    let mut search = search_input_handler::activate_search_input(SearchState::Inactive);
    for ch in "101".chars() {
        search = search_input_handler::handle_char_input(search, ch);
    }
    state.search = search_input_handler::submit_search(search);
    state.reset_cursor();

    assert_eq!(state.active_search_term(), Some("101"));
    assert_eq!(state.filtered().len(), 3, "three names carry 101");
    assert!(!state.pagination_visible(), "filtering hides pagination");

    // Searching never re-fetches: the loaded page is untouched.
    assert_eq!(state.attractions().len(), 30);
    assert_eq!(state.page(), 1);
}
