//! History view state: filtering, pagination and fetch bookkeeping.
//!
//! Plain data, no signals and no DOM. The view model wraps it in a
//! `RwSignal` and the components render from it.

use std::collections::BTreeSet;

use contracts::domain::a001_upload_history::UploadHistoryRecord;

use super::api::HistoryError;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Statuses the bot writes for validated files
pub const STATUS_OPTIONS: [&str; 2] = ["passed", "failed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    Month,
    Employee,
    Status,
}

/// Active filter selections; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilters {
    /// `YYYY-MM`
    pub month: Option<String>,
    pub employee: Option<String>,
    pub status: Option<String>,
}

impl HistoryFilters {
    pub fn for_month(month: impl Into<String>) -> Self {
        Self {
            month: Some(month.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, dimension: FilterDimension) -> Option<&str> {
        match dimension {
            FilterDimension::Month => self.month.as_deref(),
            FilterDimension::Employee => self.employee.as_deref(),
            FilterDimension::Status => self.status.as_deref(),
        }
    }

    fn set(&mut self, dimension: FilterDimension, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        match dimension {
            FilterDimension::Month => self.month = value,
            FilterDimension::Employee => self.employee = value,
            FilterDimension::Status => self.status = value,
        }
    }

    pub fn matches(&self, record: &UploadHistoryRecord) -> bool {
        let month_match = match &self.month {
            None => true,
            Some(month) => record.session_month().as_deref() == Some(month.as_str()),
        };
        let employee_match = match &self.employee {
            None => true,
            Some(name) => record.employee_name.as_deref() == Some(name.as_str()),
        };
        let status_match = match &self.status {
            None => true,
            Some(status) => record.validation_status == *status,
        };
        month_match && employee_match && status_match
    }
}

/// Ticket for one history request; only the newest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What the table body should show
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryTable<'a> {
    Error(&'a str),
    Empty,
    Rows(Vec<&'a UploadHistoryRecord>),
}

/// One entry of the page navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    /// Page requested on click; may be out of range for disabled links
    pub target: usize,
    pub active: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    all_history: Vec<UploadHistoryRecord>,
    /// Indices into `all_history`, ascending
    filtered: Vec<usize>,
    current_page: usize,
    filters: HistoryFilters,
    employee_options: Vec<String>,
    error: Option<String>,
    latest_request: u64,
}

impl HistoryState {
    pub fn new(filters: HistoryFilters) -> Self {
        Self {
            filters,
            current_page: 1,
            ..Self::default()
        }
    }

    pub fn all_history(&self) -> &[UploadHistoryRecord] {
        &self.all_history
    }

    pub fn filtered_history(&self) -> Vec<&UploadHistoryRecord> {
        self.filtered.iter().map(|&i| &self.all_history[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filters(&self) -> &HistoryFilters {
        &self.filters
    }

    /// Distinct employee names, sorted; empty means "No employees found"
    pub fn employee_options(&self) -> &[String] {
        &self.employee_options
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    /// Start a history request
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.latest_request += 1;
        RequestToken(self.latest_request)
    }

    /// Apply a finished request. Returns `false` when a newer request was
    /// issued meanwhile and the result was dropped.
    pub fn apply_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Vec<UploadHistoryRecord>, HistoryError>,
    ) -> bool {
        if token.0 != self.latest_request {
            return false;
        }

        match result {
            Ok(records) => {
                self.replace_history(records);
                self.error = None;
            }
            Err(HistoryError::NotASequence) => {
                self.replace_history(Vec::new());
                self.error = Some(HistoryError::NotASequence.to_string());
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn replace_history(&mut self, records: Vec<UploadHistoryRecord>) {
        self.all_history = records;
        self.employee_options = self
            .all_history
            .iter()
            .filter_map(|r| r.employee_name.as_deref())
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let selected_gone = self
            .filters
            .employee
            .as_ref()
            .is_some_and(|name| !self.employee_options.contains(name));
        if selected_gone {
            self.filters.employee = None;
        }

        self.apply_filters();
    }

    pub fn set_filter(&mut self, dimension: FilterDimension, value: Option<String>) {
        self.filters.set(dimension, value);
        self.error = None;
        self.apply_filters();
    }

    fn apply_filters(&mut self) {
        self.filtered = self
            .all_history
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filters.matches(r))
            .map(|(i, _)| i)
            .collect();
        self.current_page = 1;
    }

    /// Switch page; out-of-range requests are ignored
    pub fn change_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        self.error = None;
        true
    }

    pub fn page_records(&self) -> Vec<&UploadHistoryRecord> {
        let start = (self.current_page.saturating_sub(1) * PAGE_SIZE).min(self.filtered.len());
        let end = (start + PAGE_SIZE).min(self.filtered.len());
        self.filtered[start..end]
            .iter()
            .map(|&i| &self.all_history[i])
            .collect()
    }

    pub fn table(&self) -> HistoryTable<'_> {
        if let Some(e) = &self.error {
            return HistoryTable::Error(e);
        }
        let rows = self.page_records();
        if rows.is_empty() {
            HistoryTable::Empty
        } else {
            HistoryTable::Rows(rows)
        }
    }

    /// Previous, one link per page, Next. Empty when everything fits one page.
    pub fn pagination(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        if total <= 1 {
            return Vec::new();
        }
        let page = self.current_page;

        let mut links = Vec::with_capacity(total + 2);
        links.push(PageLink {
            label: "Previous".to_string(),
            target: page - 1,
            active: false,
            disabled: page == 1,
        });
        links.extend((1..=total).map(|n| PageLink {
            label: n.to_string(),
            target: n,
            active: n == page,
            disabled: false,
        }));
        links.push(PageLink {
            label: "Next".to_string(),
            target: page + 1,
            active: false,
            disabled: page == total,
        });
        links
    }

    /// Look a record up by id among everything fetched, not just the filtered rows
    pub fn record_by_id(&self, id: &str) -> Option<&UploadHistoryRecord> {
        self.all_history.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, date: &str, employee: Option<&str>, status: &str) -> UploadHistoryRecord {
        UploadHistoryRecord {
            id: id.to_string(),
            session_date: date.to_string(),
            employee_name: employee.map(str::to_string),
            original_name: format!("file-{}.xlsx", id),
            file_size: 1024 * id as u64,
            validation_status: status.to_string(),
            validation_errors: None,
        }
    }

    fn june_records(n: usize) -> Vec<UploadHistoryRecord> {
        (1..=n)
            .map(|i| record(i, "2024-06-10T12:00:00Z", Some("Anna"), "passed"))
            .collect()
    }

    fn loaded(filters: HistoryFilters, records: Vec<UploadHistoryRecord>) -> HistoryState {
        let mut state = HistoryState::new(filters);
        let token = state.begin_fetch();
        assert!(state.apply_fetch(token, Ok(records)));
        state
    }

    fn ids(records: &[&UploadHistoryRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_23_records_paginate_into_three_pages() {
        let mut state = loaded(HistoryFilters::for_month("2024-06"), june_records(23));

        assert_eq!(state.filtered_len(), 23);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(
            ids(&state.page_records()),
            (1..=10).map(|i| i.to_string()).collect::<Vec<_>>()
        );

        assert!(state.change_page(3));
        assert_eq!(ids(&state.page_records()), vec!["21", "22", "23"]);
    }

    #[test]
    fn test_change_page_out_of_range_is_noop() {
        let mut state = loaded(HistoryFilters::default(), june_records(23));
        assert!(state.change_page(2));

        assert!(!state.change_page(0));
        assert!(!state.change_page(4));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_change_page_with_no_records() {
        let mut state = loaded(HistoryFilters::default(), Vec::new());
        assert_eq!(state.total_pages(), 0);
        assert!(!state.change_page(1));
        assert_eq!(state.table(), HistoryTable::Empty);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = loaded(HistoryFilters::default(), june_records(23));
        state.change_page(3);

        state.set_filter(FilterDimension::Status, Some("passed".to_string()));
        assert_eq!(state.current_page(), 1);

        state.change_page(2);
        state.set_filter(FilterDimension::Status, Some("passed".to_string()));
        assert_eq!(state.current_page(), 1);

        assert!(state.change_page(3));
        state.set_filter(FilterDimension::Month, Some("2024-06".to_string()));
        assert_eq!(state.current_page(), 1);

        assert!(state.change_page(3));
        state.set_filter(FilterDimension::Employee, Some("Anna".to_string()));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered_len(), 23);
    }

    #[test]
    fn test_filters_combine() {
        let records = vec![
            record(1, "2024-06-01T08:00:00Z", Some("Anna"), "passed"),
            record(2, "2024-05-31T23:00:00Z", Some("Anna"), "passed"),
            record(3, "2024-06-02T08:00:00Z", Some("Boris"), "failed"),
            record(4, "2024-06-03T08:00:00Z", Some("Anna"), "failed"),
            record(5, "2024-06-04T08:00:00Z", None, "passed"),
        ];
        let mut state = loaded(HistoryFilters::for_month("2024-06"), records);
        assert_eq!(ids(&state.filtered_history()), vec!["1", "3", "4", "5"]);

        state.set_filter(FilterDimension::Employee, Some("Anna".to_string()));
        assert_eq!(ids(&state.filtered_history()), vec!["1", "4"]);

        state.set_filter(FilterDimension::Status, Some("failed".to_string()));
        assert_eq!(ids(&state.filtered_history()), vec!["4"]);

        state.set_filter(FilterDimension::Month, Some(String::new()));
        assert_eq!(state.filters().month, None);
        assert_eq!(ids(&state.filtered_history()), vec!["4"]);

        state.set_filter(FilterDimension::Status, None);
        assert_eq!(ids(&state.filtered_history()), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_filtering_is_idempotent_and_order_preserving() {
        let records: Vec<_> = (1..=30)
            .map(|i| {
                let status = if i % 3 == 0 { "failed" } else { "passed" };
                let employee = if i % 2 == 0 { "Anna" } else { "Boris" };
                record(i, "2024-06-10T12:00:00Z", Some(employee), status)
            })
            .collect();
        let mut state = loaded(HistoryFilters::default(), records);

        state.set_filter(FilterDimension::Status, Some("passed".to_string()));
        let first = ids(&state.filtered_history());
        state.set_filter(FilterDimension::Status, Some("passed".to_string()));
        assert_eq!(ids(&state.filtered_history()), first);

        let positions: Vec<usize> = state
            .filtered_history()
            .iter()
            .map(|r| {
                state
                    .all_history()
                    .iter()
                    .position(|a| a.id == r.id)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unknown_employee_shows_no_records() {
        let mut state = loaded(HistoryFilters::default(), june_records(23));
        state.set_filter(FilterDimension::Employee, Some("Nobody".to_string()));

        assert_eq!(state.table(), HistoryTable::Empty);
        assert!(state.pagination().is_empty());
    }

    #[test]
    fn test_unparseable_date_only_matches_without_month_filter() {
        let records = vec![record(1, "not a date", Some("Anna"), "passed")];
        let mut state = loaded(HistoryFilters::for_month("2024-06"), records);
        assert_eq!(state.filtered_len(), 0);

        state.set_filter(FilterDimension::Month, None);
        assert_eq!(state.filtered_len(), 1);
    }

    #[test]
    fn test_http_error_on_first_load_keeps_history_empty() {
        let mut state = HistoryState::new(HistoryFilters::default());
        let token = state.begin_fetch();
        assert!(state.apply_fetch(token, Err(HistoryError::Status(500))));

        assert!(state.all_history().is_empty());
        assert_eq!(state.table(), HistoryTable::Error("Failed to load history: 500"));
    }

    #[test]
    fn test_error_after_success_keeps_previous_history() {
        let mut state = loaded(HistoryFilters::default(), june_records(5));
        let token = state.begin_fetch();
        state.apply_fetch(token, Err(HistoryError::Transport("offline".to_string())));

        assert_eq!(state.all_history().len(), 5);
        assert_eq!(state.table(), HistoryTable::Error("Error loading history: offline"));

        // filter controls keep working against the old data
        state.set_filter(FilterDimension::Status, Some("passed".to_string()));
        assert!(matches!(state.table(), HistoryTable::Rows(rows) if rows.len() == 5));
    }

    #[test]
    fn test_non_sequence_clears_history() {
        let mut state = loaded(HistoryFilters::default(), june_records(5));
        let token = state.begin_fetch();
        state.apply_fetch(token, Err(HistoryError::NotASequence));

        assert!(state.all_history().is_empty());
        assert!(state.employee_options().is_empty());
        assert_eq!(
            state.table(),
            HistoryTable::Error("Invalid data format received from server.")
        );
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = HistoryState::new(HistoryFilters::default());
        let slow = state.begin_fetch();
        let fast = state.begin_fetch();

        assert!(state.apply_fetch(fast, Ok(june_records(3))));
        assert!(!state.apply_fetch(slow, Ok(june_records(12))));
        assert_eq!(state.all_history().len(), 3);
    }

    #[test]
    fn test_employee_options() {
        let records = vec![
            record(1, "2024-06-01T08:00:00Z", Some("Boris"), "passed"),
            record(2, "2024-06-01T08:00:00Z", Some("Anna"), "passed"),
            record(3, "2024-06-01T08:00:00Z", None, "passed"),
            record(4, "2024-06-01T08:00:00Z", Some(""), "passed"),
            record(5, "2024-06-01T08:00:00Z", Some("Boris"), "failed"),
        ];
        let state = loaded(HistoryFilters::default(), records);
        assert_eq!(state.employee_options(), ["Anna", "Boris"]);

        let state = loaded(HistoryFilters::default(), vec![record(1, "x", None, "passed")]);
        assert!(state.employee_options().is_empty());
    }

    #[test]
    fn test_employee_selection_survives_refresh_only_if_present() {
        let mut state = loaded(HistoryFilters::default(), june_records(3));
        state.set_filter(FilterDimension::Employee, Some("Anna".to_string()));

        let token = state.begin_fetch();
        state.apply_fetch(token, Ok(june_records(4)));
        assert_eq!(state.filters().employee.as_deref(), Some("Anna"));

        let token = state.begin_fetch();
        state.apply_fetch(
            token,
            Ok(vec![record(1, "2024-06-01T08:00:00Z", Some("Boris"), "passed")]),
        );
        assert_eq!(state.filters().employee, None);
        assert_eq!(state.filtered_len(), 1);
    }

    #[test]
    fn test_pagination_links() {
        let mut state = loaded(HistoryFilters::default(), june_records(23));
        let links = state.pagination();
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].label, "Previous");
        assert!(links[0].disabled);
        assert!(links[1].active);
        assert!(!links[4].disabled);

        state.change_page(3);
        let links = state.pagination();
        assert!(!links[0].disabled);
        assert_eq!(links[0].target, 2);
        assert!(links[3].active);
        assert_eq!(links[4].label, "Next");
        assert!(links[4].disabled);
        assert!(!state.change_page(links[4].target));

        let single = loaded(HistoryFilters::default(), june_records(10));
        assert!(single.pagination().is_empty());
    }

    #[test]
    fn test_record_lookup_ignores_filters() {
        let records = vec![
            record(1, "2024-06-01T08:00:00Z", Some("Anna"), "passed"),
            record(2, "2024-01-01T08:00:00Z", Some("Anna"), "failed"),
        ];
        let state = loaded(HistoryFilters::for_month("2024-06"), records);
        assert_eq!(state.filtered_len(), 1);
        assert_eq!(
            state.record_by_id("2").map(|r| r.validation_status.as_str()),
            Some("failed")
        );
        assert!(state.record_by_id("99").is_none());
    }
}
