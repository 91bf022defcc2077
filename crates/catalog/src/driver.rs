//! Fetch/search/poll orchestration.
//!
//! A [`CatalogDriver`] is one tokio task multiplexing four event sources:
//!
//! - commands from a [`CatalogHandle`] (raw search input, page changes,
//!   manual refresh),
//! - the search debounce deadline,
//! - the poll interval, re-armed whenever the query changes,
//! - completions of spawned fetches, tagged with their sequence number.
//!
//! Every state change is published as a [`CatalogSnapshot`] on a
//! `tokio::sync::watch` channel. The driver stops on
//! [`CatalogCommand::Shutdown`] or when every handle has been dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at, sleep_until};
use tracing::{debug, info};

use crate::client::CatalogSource;
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::error::FetchError;
use crate::models::MoviePage;
use crate::query::{DEFAULT_PAGE_SIZE, ListQuery};
use crate::session::{CatalogSnapshot, Session};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct CatalogOptions {
    pub page_size: u32,
    /// Quiet period before raw input becomes the committed search term
    pub debounce: Duration,
    /// Zero disables polling
    pub poll_interval: Duration,
    /// Search term committed at start, without debounce
    pub initial_search: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            initial_search: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    /// Raw search box content, debounced before it takes effect
    Input(String),
    SetPage(u32),
    /// Refetch the current query now
    Refresh,
    Shutdown,
}

/// Front side of a running [`CatalogDriver`]. Every method is synchronous so it
/// can be called from a UI thread.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    commands: mpsc::UnboundedSender<CatalogCommand>,
    snapshots: watch::Receiver<CatalogSnapshot>,
}

impl CatalogHandle {
    /// Returns `false` once the driver has stopped.
    pub fn send(&self, command: CatalogCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn input(&self, text: impl Into<String>) -> bool {
        self.send(CatalogCommand::Input(text.into()))
    }

    pub fn set_page(&self, page: u32) -> bool {
        self.send(CatalogCommand::SetPage(page))
    }

    pub fn refresh(&self) -> bool {
        self.send(CatalogCommand::Refresh)
    }

    pub fn shutdown(&self) -> bool {
        self.send(CatalogCommand::Shutdown)
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.snapshots.borrow().clone()
    }
}

type UpdateHook = Box<dyn Fn() + Send + Sync>;
type Completion = (u64, Result<MoviePage, FetchError>);

pub struct CatalogDriver<S: ?Sized> {
    source: Arc<S>,
    options: CatalogOptions,
    commands: mpsc::UnboundedReceiver<CatalogCommand>,
    snapshots: watch::Sender<CatalogSnapshot>,
    on_update: Option<UpdateHook>,
}

impl<S> CatalogDriver<S>
where
    S: CatalogSource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>, options: CatalogOptions) -> (Self, CatalogHandle) {
        let (tx_command, rx_command) = mpsc::unbounded_channel();
        let (tx_snapshot, rx_snapshot) = watch::channel(CatalogSnapshot::default());

        let driver = Self {
            source,
            options,
            commands: rx_command,
            snapshots: tx_snapshot,
            on_update: None,
        };
        let handle = CatalogHandle {
            commands: tx_command,
            snapshots: rx_snapshot,
        };
        (driver, handle)
    }

    /// Called after every published snapshot, e.g. to wake a UI up.
    pub fn on_update(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    pub async fn run(self) {
        let Self {
            source,
            options,
            mut commands,
            snapshots,
            on_update,
        } = self;

        let query = ListQuery::new(options.page_size)
            .with_search_term(options.initial_search.clone());
        let (tx_done, mut rx_done) = mpsc::unbounded_channel();

        let mut worker = Worker {
            source,
            session: Session::new(query),
            snapshots,
            on_update,
            tx_done,
            in_flight: None,
        };
        let mut debouncer = Debouncer::new(options.debounce);
        let polling = !options.poll_interval.is_zero();
        let mut poll = poll_timer(options.poll_interval);

        info!(
            page_size = options.page_size,
            poll_interval = ?options.poll_interval,
            "catalog driver started"
        );
        worker.start_fetch();

        loop {
            let debounce_deadline = debouncer.deadline();

            tokio::select! {
                command = commands.recv() => match command {
                    Some(CatalogCommand::Input(text)) => {
                        debouncer.push(text, Instant::now());
                    }
                    Some(CatalogCommand::SetPage(page)) => {
                        if worker.session.set_page(page) {
                            worker.start_fetch();
                            poll.reset();
                        }
                    }
                    Some(CatalogCommand::Refresh) => {
                        worker.start_fetch();
                        poll.reset();
                    }
                    Some(CatalogCommand::Shutdown) | None => break,
                },
                () = sleep_until(debounce_deadline.unwrap_or_else(Instant::now)),
                    if debounce_deadline.is_some() =>
                {
                    if let Some(term) = debouncer.take_ready(Instant::now())
                        && worker.session.commit_search(term)
                    {
                        worker.start_fetch();
                        poll.reset();
                    }
                }
                _ = poll.tick(), if polling => {
                    // A tick never supersedes the fetch it would repeat
                    if worker.is_fetching() {
                        debug!("poll skipped, fetch still in flight");
                    } else {
                        debug!("refreshing movie data");
                        worker.start_fetch();
                    }
                }
                Some((seq, outcome)) = rx_done.recv() => {
                    worker.finish(seq, outcome);
                }
            }
        }

        worker.abort_in_flight();
        info!("catalog driver stopped");
    }
}

fn poll_timer(period: Duration) -> Interval {
    // `interval_at` panics on a zero period; polling is gated separately
    let period = period.max(Duration::from_millis(1));
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

struct Worker<S: ?Sized> {
    source: Arc<S>,
    session: Session,
    snapshots: watch::Sender<CatalogSnapshot>,
    on_update: Option<UpdateHook>,
    tx_done: mpsc::UnboundedSender<Completion>,
    in_flight: Option<JoinHandle<()>>,
}

impl<S> Worker<S>
where
    S: CatalogSource + ?Sized + 'static,
{
    fn start_fetch(&mut self) {
        self.abort_in_flight();

        let ticket = self.session.begin_fetch();
        info!(
            seq = ticket.seq,
            page = ticket.query.page,
            term = %ticket.query.search_term,
            "fetching movies"
        );

        let source = Arc::clone(&self.source);
        let tx_done = self.tx_done.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = source.list_movies(&ticket.query).await;
            let _ = tx_done.send((ticket.seq, outcome));
        }));

        self.publish();
    }

    fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    fn finish(&mut self, seq: u64, outcome: Result<MoviePage, FetchError>) {
        if self.session.complete(seq, outcome) {
            self.in_flight = None;
            self.publish();
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.session.snapshot());
        if let Some(hook) = &self.on_update {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;
    use crate::session::FetchState;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    const MS: Duration = Duration::from_millis(1);

    /// Answers every query with one movie titled after the search term.
    #[derive(Default)]
    struct FakeSource {
        calls: Mutex<Vec<ListQuery>>,
        delays: HashMap<String, Duration>,
    }

    impl FakeSource {
        fn with_delay(mut self, term: &str, delay: Duration) -> Self {
            self.delays.insert(term.to_string(), delay);
            self
        }

        fn calls(&self) -> Vec<ListQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn list_movies(&self, query: &ListQuery) -> Result<MoviePage, FetchError> {
            self.calls.lock().unwrap().push(query.clone());

            if let Some(delay) = self.delays.get(&query.search_term) {
                sleep(*delay).await;
            }
            if query.search_term == "broken" {
                return Err(FetchError::Api("Invalid page".to_string()));
            }

            Ok(MoviePage {
                movies: vec![Movie {
                    id: u64::from(query.page),
                    title: query.search_term.clone(),
                    year: 2001,
                    rating: 6.5,
                    cover_image: String::new(),
                    genres: vec![],
                    runtime: None,
                }],
                total_count: 45,
                page: query.page,
                limit: query.limit,
            })
        }
    }

    fn start(source: Arc<FakeSource>) -> (CatalogHandle, JoinHandle<()>) {
        let (driver, handle) = CatalogDriver::new(source, CatalogOptions::default());
        (handle, tokio::spawn(driver.run()))
    }

    /// Let the driver and its fetch tasks run until they are idle
    async fn settle() {
        sleep(MS).await;
    }

    fn title(snapshot: &CatalogSnapshot) -> Option<String> {
        snapshot.movies().first().map(|m| m.title.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_on_start() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        assert_eq!(source.calls(), vec![ListQuery::default()]);
        let snapshot = handle.snapshot();
        assert!(matches!(snapshot.state, FetchState::Success(_)));
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.total_count, 45);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_until_response_arrives() {
        let source = Arc::new(FakeSource::default().with_delay("", Duration::from_secs(2)));
        let (handle, _task) = start(source.clone());
        settle().await;

        assert!(handle.snapshot().is_loading());
        sleep(Duration::from_secs(2)).await;
        assert!(!handle.snapshot().is_loading());
        assert_eq!(handle.snapshot().movies().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_burst_commits_once() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        for text in ["a", "al", "ali", "alie", "alien"] {
            handle.input(text);
            sleep(100 * MS).await;
        }
        // Last keystroke was 100ms ago
        sleep(300 * MS).await;
        assert_eq!(source.calls().len(), 1);

        sleep(200 * MS).await;
        let calls = source.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], ListQuery::default().with_search_term("alien"));

        sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls().len(), 2);
        assert_eq!(title(&handle.snapshot()).as_deref(), Some("alien"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_goes_back_to_first_page() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        handle.set_page(3);
        settle().await;
        assert_eq!(handle.snapshot().query.page, 3);

        handle.input("heat");
        sleep(600 * MS).await;

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.query.page, 1);
        assert_eq!(snapshot.query.search_term, "heat");
        assert_eq!(source.calls().last().map(|q| q.page), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_every_interval() {
        let source = Arc::new(FakeSource::default());
        let (_handle, _task) = start(source.clone());
        settle().await;
        assert_eq!(source.calls().len(), 1);

        sleep(Duration::from_secs(10)).await;
        assert_eq!(source.calls().len(), 2);

        sleep(Duration::from_secs(20)).await;
        let calls = source.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|q| *q == ListQuery::default()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_upstream_slower_than_poll_still_lands() {
        let source = Arc::new(FakeSource::default().with_delay("", Duration::from_secs(12)));
        let (handle, _task) = start(source.clone());
        settle().await;

        // The tick at 10s finds the first fetch in flight
        sleep(Duration::from_secs(13)).await;
        let snapshot = handle.snapshot();
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.movies().len(), 1);
        assert_eq!(source.calls().len(), 1);

        // Tick at 20s refetches, the one at 30s is skipped
        sleep(Duration::from_secs(20)).await;
        let snapshot = handle.snapshot();
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.movies().len(), 1);
        assert_eq!(source.calls().len(), 2);

        // Fetches at 40s, 60s and 80s; the last one landed at 92s
        sleep(Duration::from_secs(60)).await;
        let snapshot = handle.snapshot();
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.movies().len(), 1);
        assert_eq!(source.calls().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_change_rearms_poll() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        sleep(Duration::from_secs(6)).await;
        handle.set_page(2);
        settle().await;
        assert_eq!(source.calls().len(), 2);

        // Without the re-arm a tick would have fired here
        sleep(Duration::from_secs(5)).await;
        assert_eq!(source.calls().len(), 2);

        sleep(Duration::from_secs(5)).await;
        let calls = source.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_page_does_not_refetch() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        handle.set_page(1);
        settle().await;
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_search_never_lands() {
        let source = Arc::new(FakeSource::default().with_delay("slow", Duration::from_secs(3)));
        let (handle, _task) = start(source.clone());
        settle().await;

        handle.input("slow");
        sleep(600 * MS).await;
        assert!(handle.snapshot().is_loading());

        handle.input("fast");
        sleep(600 * MS).await;
        assert_eq!(title(&handle.snapshot()).as_deref(), Some("fast"));

        sleep(Duration::from_secs(4)).await;
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.query.search_term, "fast");
        assert_eq!(title(&snapshot).as_deref(), Some("fast"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_api_error_then_recovery() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        handle.input("broken");
        sleep(600 * MS).await;
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.error(), Some("Invalid page"));
        assert!(snapshot.movies().is_empty());
        assert!(snapshot.is_empty_result());

        handle.input("");
        sleep(600 * MS).await;
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.error(), None);
        assert_eq!(snapshot.movies().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_refresh() {
        let source = Arc::new(FakeSource::default());
        let (handle, _task) = start(source.clone());
        settle().await;

        handle.refresh();
        settle().await;
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_search_and_update_hook() {
        let source = Arc::new(FakeSource::default());
        let updates = Arc::new(AtomicUsize::new(0));
        let counter = updates.clone();

        let options = CatalogOptions {
            initial_search: "matrix".to_string(),
            ..Default::default()
        };
        let (driver, handle) = CatalogDriver::new(source.clone(), options);
        let driver = driver.on_update(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let _task = tokio::spawn(driver.run());
        settle().await;

        assert_eq!(source.calls()[0].search_term, "matrix");
        assert!(handle.snapshot().has_search_term());
        // Loading, then success
        assert_eq!(updates.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_poll_interval_disables_polling() {
        let source = Arc::new(FakeSource::default());
        let options = CatalogOptions {
            poll_interval: Duration::ZERO,
            ..Default::default()
        };
        let (driver, _handle) = CatalogDriver::new(source.clone(), options);
        let _task = tokio::spawn(driver.run());

        sleep(Duration::from_secs(60)).await;
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_shutdown_and_on_drop() {
        let source = Arc::new(FakeSource::default());

        let (handle, task) = start(source.clone());
        handle.shutdown();
        task.await.unwrap();
        assert!(handle.is_closed());
        assert!(!handle.refresh());

        let (handle, task) = start(source);
        drop(handle);
        task.await.unwrap();
    }
}
