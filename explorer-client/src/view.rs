use crate::models::Book;
use crate::notify::{NoticeKind, Notices};
use crate::recent::{RecentSearches, SearchStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    ResultsShown,
    DetailShown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionState {
    Loading,
    Ready(String),
    Unavailable,
}

impl DescriptionState {
    pub fn text(&self) -> &str {
        match self {
            DescriptionState::Loading => "Generating description...",
            DescriptionState::Ready(text) => text,
            DescriptionState::Unavailable => "Description not available",
        }
    }
}

/// What a result card shows. Author and year lines are omitted entirely
/// when absent, never rendered empty.
#[derive(Debug)]
pub struct CardView {
    pub cover_url: Option<String>,
    pub title: String,
    pub author_line: Option<String>,
    pub year_line: Option<String>,
}

/// The detail view. Each metadata block is None when its value is absent,
/// which hides the whole block. The description renders independently of
/// the other blocks and is replaced in place once the fetch settles.
#[derive(Debug)]
pub struct DetailView {
    pub title: String,
    pub cover_url: Option<String>,
    pub author: Option<String>,
    pub year: Option<u32>,
    pub publisher: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub description: String,
    pub permalink: String,
}

/// All mutable client state: current phase, results, selection, search
/// input, recent searches and notices. Everything the UI decides is
/// derived from here, so the whole flow tests without a terminal.
pub struct ViewState {
    phase: Phase,
    input: String,
    books: Vec<Book>,
    selected: Option<usize>,
    description: DescriptionState,
    recent: RecentSearches,
    store: Box<dyn SearchStore + Send>,
    pub notices: Notices,
}

impl ViewState {
    pub fn new(store: Box<dyn SearchStore + Send>) -> Self {
        let recent = RecentSearches::load(store.as_ref());
        Self {
            phase: Phase::Idle,
            input: String::new(),
            books: Vec::new(),
            selected: None,
            description: DescriptionState::Loading,
            recent,
            store,
            notices: Notices::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn recent_terms(&self) -> &[String] {
        self.recent.terms()
    }

    /// Populates the search input from the recent list without submitting.
    pub fn recall_recent(&mut self, index: usize) -> bool {
        match self.recent.get(index) {
            Some(term) => {
                self.input = term.to_string();
                true
            }
            None => false,
        }
    }

    /// Submits the current input. A query that is empty after trimming
    /// never reaches the network; it only raises a validation notice.
    pub fn begin_search(&mut self) -> Option<String> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.notices
                .post("Please enter a search term", NoticeKind::Error);
            return None;
        }
        self.phase = Phase::Searching;
        Some(query)
    }

    /// Applies a search outcome. Overlapping searches are not cancelled;
    /// whichever response arrives last simply overwrites this state.
    pub fn finish_search<E>(&mut self, query: &str, outcome: Result<Vec<Book>, E>) {
        match outcome {
            Ok(books) if !books.is_empty() => {
                self.recent.record(query, self.store.as_ref());
                self.notices
                    .post(format!("Found {} books", books.len()), NoticeKind::Success);
                self.books = books;
                self.phase = Phase::ResultsShown;
            }
            Ok(_) => {
                self.books.clear();
                self.phase = Phase::Idle;
                self.notices.post("No books found", NoticeKind::Error);
            }
            Err(_) => {
                self.phase = Phase::Idle;
                self.notices
                    .post("An error occurred while searching", NoticeKind::Error);
            }
        }
    }

    pub fn results_visible(&self) -> bool {
        matches!(self.phase, Phase::ResultsShown | Phase::DetailShown)
    }

    pub fn cards(&self) -> Vec<CardView> {
        self.books
            .iter()
            .map(|book| CardView {
                cover_url: book.cover_url_medium(),
                title: book.title.clone(),
                author_line: non_empty(&book.author),
                year_line: book.first_publish_year.map(|y| y.to_string()),
            })
            .collect()
    }

    /// Selects a result card, opening the detail view with the description
    /// placeholder. Returns the book so the caller can start the
    /// description fetch without blocking the rest of the rendering.
    pub fn select(&mut self, index: usize) -> Option<Book> {
        if self.phase != Phase::ResultsShown {
            return None;
        }
        let book = self.books.get(index)?.clone();
        self.selected = Some(index);
        self.description = DescriptionState::Loading;
        self.phase = Phase::DetailShown;
        Some(book)
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|i| self.books.get(i))
    }

    pub fn detail(&self) -> Option<DetailView> {
        let book = self.selected_book()?;
        Some(DetailView {
            title: book.title.clone(),
            cover_url: book.cover_url_large(),
            author: non_empty(&book.author),
            year: book.first_publish_year,
            publisher: non_empty(&book.publisher),
            subjects: if book.subjects.is_empty() {
                None
            } else {
                Some(book.subjects.clone())
            },
            description: self.description.text().to_string(),
            permalink: book.permalink(),
        })
    }

    /// Replaces the description placeholder in place. A failed fetch
    /// degrades to the fallback text; the rest of the detail view is
    /// untouched either way.
    pub fn resolve_description<E>(&mut self, outcome: Result<String, E>) {
        if self.phase != Phase::DetailShown {
            return;
        }
        self.description = match outcome {
            Ok(text) => DescriptionState::Ready(text),
            Err(_) => DescriptionState::Unavailable,
        };
    }

    pub fn dismiss(&mut self) {
        if self.phase == Phase::DetailShown {
            self.selected = None;
            self.description = DescriptionState::Loading;
            self.phase = Phase::ResultsShown;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullStore;

    impl SearchStore for NullStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _blob: &str) {}
    }

    fn state() -> ViewState {
        ViewState::new(Box::new(NullStore))
    }

    fn book(title: &str) -> Book {
        Book {
            title: title.to_string(),
            author: "Unknown".to_string(),
            first_publish_year: None,
            publisher: "Unknown".to_string(),
            subjects: Vec::new(),
            cover_id: None,
            key: "/works/OL1".to_string(),
        }
    }

    #[test]
    fn whitespace_input_stays_idle_and_raises_a_notice() {
        let mut state = state();
        state.set_input("   ");

        assert!(state.begin_search().is_none());
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.notices.visible().len(), 1);
    }

    #[test]
    fn successful_search_shows_results_and_records_the_term() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();
        assert_eq!(state.phase(), Phase::Searching);

        state.finish_search::<()>(&query, Ok(vec![book("Dune")]));
        assert_eq!(state.phase(), Phase::ResultsShown);
        assert!(state.results_visible());
        assert_eq!(state.recent_terms(), ["dune"]);
        assert_eq!(state.notices.visible()[0].message, "Found 1 books");
    }

    #[test]
    fn zero_results_returns_to_idle_with_results_hidden() {
        let mut state = state();
        state.set_input("zzqxnonexistent");
        let query = state.begin_search().unwrap();

        state.finish_search::<()>(&query, Ok(Vec::new()));
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.results_visible());
        assert!(state.recent_terms().is_empty());
        assert_eq!(state.notices.visible()[0].message, "No books found");
    }

    #[test]
    fn failed_search_returns_to_idle_with_a_generic_notice() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();

        state.finish_search(&query, Err("status 502"));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(
            state.notices.visible()[0].message,
            "An error occurred while searching"
        );
    }

    #[test]
    fn selecting_a_card_opens_the_detail_with_a_placeholder() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![book("Dune")]));

        let selected = state.select(0).unwrap();
        assert_eq!(selected.title, "Dune");
        assert_eq!(state.phase(), Phase::DetailShown);
        assert_eq!(
            state.detail().unwrap().description,
            "Generating description..."
        );
    }

    #[test]
    fn description_resolution_replaces_the_placeholder_in_place() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![book("Dune")]));
        state.select(0);

        state.resolve_description::<()>(Ok("A desert planet saga.".to_string()));
        assert_eq!(state.detail().unwrap().description, "A desert planet saga.");
    }

    #[test]
    fn description_failure_degrades_to_the_fallback_text() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![book("Dune")]));
        state.select(0);

        state.resolve_description(Err("timeout"));
        let detail = state.detail().unwrap();
        assert_eq!(detail.description, "Description not available");
        assert_eq!(detail.title, "Dune");
    }

    #[test]
    fn dismissing_the_detail_clears_the_selection() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![book("Dune")]));
        state.select(0);

        state.dismiss();
        assert_eq!(state.phase(), Phase::ResultsShown);
        assert!(state.selected_book().is_none());
        assert!(state.detail().is_none());
    }

    #[test]
    fn card_omits_author_and_year_lines_when_absent() {
        let mut state = state();
        let mut b = book("Anonymous Work");
        b.author = String::new();
        state.set_input("anything");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![b]));

        let cards = state.cards();
        assert!(cards[0].author_line.is_none());
        assert!(cards[0].year_line.is_none());
        assert!(cards[0].cover_url.is_none());
    }

    #[test]
    fn detail_hides_each_absent_metadata_block_independently() {
        let mut state = state();
        let mut b = book("Sparse");
        b.publisher = String::new();
        state.set_input("sparse");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![b]));
        state.select(0);

        let detail = state.detail().unwrap();
        assert_eq!(detail.author.as_deref(), Some("Unknown"));
        assert!(detail.publisher.is_none());
        assert!(detail.year.is_none());
        assert!(detail.subjects.is_none());
    }

    #[test]
    fn recalling_a_recent_term_fills_the_input_without_searching() {
        let mut state = state();
        state.set_input("dune");
        let query = state.begin_search().unwrap();
        state.finish_search::<()>(&query, Ok(vec![book("Dune")]));

        state.set_input("");
        assert!(state.recall_recent(0));
        assert_eq!(state.input(), "dune");
        assert_eq!(state.phase(), Phase::ResultsShown);
    }

    #[test]
    fn last_search_response_to_arrive_wins() {
        let mut state = state();
        state.set_input("first");
        let first = state.begin_search().unwrap();
        state.set_input("second");
        let second = state.begin_search().unwrap();

        state.finish_search::<()>(&second, Ok(vec![book("Second")]));
        state.finish_search::<()>(&first, Ok(vec![book("First")]));

        assert_eq!(state.cards()[0].title, "First");
    }
}
