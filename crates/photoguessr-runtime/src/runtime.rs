use std::sync::Arc;

use photoguessr_engine::{
    Action, Command, FetchPlan, NotificationId, PhotoId, SessionClosed, SessionState,
    resolve_image_url,
};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::{JoinHandle, JoinSet},
};
use tracing::{debug, info, warn};

use crate::{App, Ports, RuntimeConfig, RuntimeError, SeenLedger, event::RuntimeEvent};

/// Cloneable handle that feeds actions into a [`Runtime`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    events: UnboundedSender<RuntimeEvent>,
}

impl Dispatcher {
    /// Queues `action` behind everything already queued.
    pub fn dispatch(&self, action: Action) -> Result<(), RuntimeError> {
        self.send(action.into())
    }

    /// Makes [`Runtime::run`] return without closing the session.
    pub fn shutdown(&self) -> Result<(), RuntimeError> {
        self.send(RuntimeEvent::Shutdown)
    }

    fn send(&self, event: RuntimeEvent) -> Result<(), RuntimeError> {
        self.events.send(event).map_err(|_| RuntimeError::Stopped)
    }
}

/// Session effect driver.
///
/// Owns the action queue of one session. Every action is reduced by the
/// [`SessionState`] and the resulting commands are executed in order without
/// waiting for I/O: searches, ledger writes, prefetches and timers run as spawned
/// tasks, and those that complete with an action push it back onto the queue.
///
/// At most one image prefetch and one notification timer are alive at a time.
/// Both are aborted when the runtime is dropped, as are seen-photo writes that
/// [`Self::run`] did not get to drain.
pub struct Runtime {
    ports: Ports,
    config: RuntimeConfig,
    ledger: SeenLedger,
    events_tx: UnboundedSender<RuntimeEvent>,
    events_rx: UnboundedReceiver<RuntimeEvent>,
    prefetch: Option<JoinHandle<()>>,
    notification_timer: Option<JoinHandle<()>>,
    pending_writes: JoinSet<()>,
}

impl Runtime {
    #[must_use]
    pub fn new(ports: Ports, config: RuntimeConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let ledger = SeenLedger::new(Arc::clone(&ports.store));
        Self {
            ports,
            config,
            ledger,
            events_tx,
            events_rx,
            prefetch: None,
            notification_timer: None,
            pending_writes: JoinSet::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            events: self.events_tx.clone(),
        }
    }

    /// Reduces `action` and executes the resulting commands.
    ///
    /// Returns the closing summary if the session ended.
    ///
    /// Must be called within a tokio runtime.
    pub fn dispatch(&mut self, state: &mut SessionState, action: Action) -> Option<SessionClosed> {
        let mut closed = None;
        for command in state.reduce(action) {
            if let Some(summary) = self.execute(command) {
                closed = Some(summary);
            }
        }
        closed
    }

    /// Waits for the next queued action.
    ///
    /// Returns `None` once [`Dispatcher::shutdown`] has been called.
    pub async fn next_action(&mut self) -> Option<Action> {
        match self.events_rx.recv().await? {
            RuntimeEvent::Action(action) => Some(action),
            RuntimeEvent::Shutdown => None,
        }
    }

    /// Runs the session until it closes or is shut down.
    ///
    /// 1. Calls `app.init()` with a dispatcher and draws the initial state
    /// 2. Reduces queued actions one at a time, drawing after each
    /// 3. Waits up to [`RuntimeConfig::write_drain_timeout`] for seen-photo writes
    /// 4. Returns the closing summary, or `None` on shutdown
    pub async fn run<A>(&mut self, state: &mut SessionState, app: &mut A) -> Option<SessionClosed>
    where
        A: App,
    {
        app.init(self.dispatcher());
        app.draw(state);

        let mut closed = None;
        while let Some(action) = self.next_action().await {
            closed = self.dispatch(state, action);
            app.draw(state);
            if closed.is_some() {
                break;
            }
        }
        self.drain_pending_writes().await;
        closed
    }

    /// Waits for outstanding seen-photo writes, giving up after
    /// [`RuntimeConfig::write_drain_timeout`].
    pub async fn drain_pending_writes(&mut self) {
        let pending = self.pending_writes.len();
        if pending == 0 {
            return;
        }
        let timeout = self.config.write_drain_timeout;
        let writes = &mut self.pending_writes;
        let drained = tokio::time::timeout(timeout, async {
            while writes.join_next().await.is_some() {}
        })
        .await;
        if drained.is_err() {
            warn!(
                pending = self.pending_writes.len(),
                "gave up waiting for seen-photo writes"
            );
        } else {
            debug!(pending, "seen-photo writes finished");
        }
    }

    fn execute(&mut self, command: Command) -> Option<SessionClosed> {
        match command {
            Command::FetchPhotos(plan) => self.fetch_photos(plan),
            Command::PrefetchImages(image_refs) => self.prefetch_images(&image_refs),
            Command::CancelPrefetch => {
                if let Some(handle) = self.prefetch.take() {
                    debug!("cancelling image prefetch");
                    handle.abort();
                }
            }
            Command::RecordSeen(photo_id) => self.record_seen(photo_id),
            Command::StartNotificationTimer(id) => self.start_notification_timer(id),
            Command::CancelNotificationTimer => {
                if let Some(handle) = self.notification_timer.take() {
                    handle.abort();
                }
            }
            Command::CloseSession(closed) => {
                info!(final_score = closed.final_score, "session closed");
                return Some(closed);
            }
        }
        None
    }

    fn fetch_photos(&self, plan: FetchPlan) {
        let search = Arc::clone(&self.ports.search);
        let ledger = self.ledger.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let exclude = ledger.load_exclude_token().await;
            let request = plan.request(exclude);
            debug!(
                ticket = plan.ticket.0,
                lat = request.coordinate.lat(),
                long = request.coordinate.long(),
                limit = request.limit,
                ?exclude,
                "searching photos"
            );
            let result = search.search(request).await;
            match &result {
                Ok(response) => info!(
                    request_id = %response.request_id,
                    photos = response.photos.len(),
                    "photo search finished"
                ),
                Err(e) => warn!(error = %e, "photo search failed"),
            }
            // Fails only if the runtime was dropped.
            let _ = events.send(RuntimeEvent::Action(Action::FetchCompleted {
                ticket: plan.ticket,
                result,
            }));
        });
    }

    fn prefetch_images(&mut self, image_refs: &[String]) {
        let urls: Vec<String> = image_refs
            .iter()
            .map(|image_ref| resolve_image_url(&self.config.image_base_url, image_ref))
            .collect();
        debug!(images = urls.len(), "prefetching images");
        let prefetcher = Arc::clone(&self.ports.prefetcher);
        let handle = tokio::spawn(async move { prefetcher.prefetch(urls).await });
        if let Some(previous) = self.prefetch.replace(handle) {
            previous.abort();
        }
    }

    fn record_seen(&mut self, photo_id: PhotoId) {
        while self.pending_writes.try_join_next().is_some() {}
        let ledger = self.ledger.clone();
        self.pending_writes
            .spawn(async move { ledger.record(photo_id).await });
    }

    fn start_notification_timer(&mut self, id: NotificationId) {
        let ttl = self.config.notification_ttl;
        let events = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let _ = events.send(RuntimeEvent::Action(Action::NotificationExpired(id)));
        });
        if let Some(previous) = self.notification_timer.replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        for handle in [self.prefetch.take(), self.notification_timer.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
    }
}
