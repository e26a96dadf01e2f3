use crate::tui::{
    inputs::{map_event, Action},
    views::{self, RightPane},
};
use cardex_core::{
    near_end, Bookmarks, CardDetail, CatalogSource, CoreError, FetchOutcome, KeyValue, Pager,
    DEFAULT_FETCH_THRESHOLD,
};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::{mpsc, Arc};
use tokio::runtime::Runtime;

enum Msg {
    // Pager state is updated inside the shared Pager before this arrives.
    PageDone(Result<FetchOutcome, CoreError>),
    DetailDone {
        id: String,
        result: Result<CardDetail, CoreError>,
    },
    SavedChecked {
        id: String,
        saved: bool,
    },
    Toggled {
        id: String,
        result: Result<bool, CoreError>,
    },
}

pub struct TuiApp {
    source: Arc<dyn CatalogSource>,
    pager: Arc<Pager>,
    bookmarks: Arc<Bookmarks>,
    rt: Arc<Runtime>,
    tx: mpsc::Sender<Msg>,
    rx: mpsc::Receiver<Msg>,
    sel: usize,
    // Detail surface; None while the listing surface is active.
    viewing: Option<String>,
    detail: Option<CardDetail>,
    detail_error: Option<String>,
    saved: bool,
    list_error: Option<String>,
    // After a failed page fetch, wait for the next scroll input before
    // the level trigger may retry.
    hold_fetch: bool,
    // Set once a page comes back empty; the catalog has no further pages.
    exhausted: bool,
}

impl TuiApp {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        store: Arc<dyn KeyValue>,
        page_size: u32,
        rt: Arc<Runtime>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            pager: Arc::new(Pager::with_page_size(source.clone(), page_size)),
            bookmarks: Arc::new(Bookmarks::new(store)),
            source,
            rt,
            tx,
            rx,
            sel: 0,
            viewing: None,
            detail: None,
            detail_error: None,
            saved: false,
            list_error: None,
            hold_fetch: false,
            exhausted: false,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            self.drain_messages();
            self.maybe_fetch_more();

            let state = self.pager.snapshot();
            terminal.draw(|f| {
                let right = if self.viewing.is_some() {
                    if let Some(card) = &self.detail {
                        RightPane::Card {
                            card,
                            saved: self.saved,
                        }
                    } else if let Some(err) = &self.detail_error {
                        RightPane::Error(err)
                    } else {
                        RightPane::Loading
                    }
                } else {
                    RightPane::Idle
                };
                views::draw_ui(
                    f,
                    f.size(),
                    &state.items,
                    self.sel,
                    state.is_fetching,
                    self.list_error.as_deref(),
                    right,
                );
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let ev = event::read()?;
                match map_event(ev) {
                    Action::Quit => break,
                    Action::Back => {
                        if self.viewing.is_some() {
                            self.close_detail();
                        } else {
                            break;
                        }
                    }
                    Action::Up => {
                        if self.viewing.is_none() {
                            self.sel = self.sel.saturating_sub(1);
                            self.hold_fetch = false;
                        }
                    }
                    Action::Down => {
                        if self.viewing.is_none() {
                            if self.sel + 1 < self.pager.snapshot().items.len() {
                                self.sel += 1;
                            }
                            self.hold_fetch = false;
                        }
                    }
                    Action::Enter => {
                        if self.viewing.is_none() {
                            if let Some(card) = self.pager.snapshot().items.get(self.sel) {
                                self.open_detail(card.id.clone());
                            }
                        }
                    }
                    Action::ToggleSave => {
                        if self.viewing.is_some() {
                            self.toggle_save();
                        }
                    }
                    Action::None => {}
                }
            }
        }
        Ok(())
    }

    // Level trigger, evaluated every tick while the listing surface is
    // visible. Bursts collapse inside the pager's overlap guard.
    fn maybe_fetch_more(&mut self) {
        if self.viewing.is_some() || self.hold_fetch || self.exhausted {
            return;
        }
        let state = self.pager.snapshot();
        if state.is_fetching {
            return;
        }
        if near_end(
            self.sel,
            state.items.len(),
            self.pager.page_size(),
            DEFAULT_FETCH_THRESHOLD,
        ) {
            self.request_more();
        }
    }

    fn request_more(&self) {
        let pager = self.pager.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let res = pager.fetch_next_page().await;
            let _ = tx.send(Msg::PageDone(res));
        });
    }

    fn open_detail(&mut self, id: String) {
        self.viewing = Some(id.clone());
        self.detail = None;
        self.detail_error = None;
        self.saved = false;
        let source = self.source.clone();
        let bookmarks = self.bookmarks.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let result = source.detail(&id).await;
            let ok = result.is_ok();
            let _ = tx.send(Msg::DetailDone {
                id: id.clone(),
                result,
            });
            if ok {
                let saved = bookmarks.is_saved(&id).await;
                let _ = tx.send(Msg::SavedChecked { id, saved });
            }
        });
    }

    fn close_detail(&mut self) {
        self.viewing = None;
        self.detail = None;
        self.detail_error = None;
        self.saved = false;
    }

    fn toggle_save(&mut self) {
        let Some(id) = self.viewing.clone() else {
            return;
        };
        let bookmarks = self.bookmarks.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            let result = bookmarks.toggle(&id).await;
            let _ = tx.send(Msg::Toggled { id, result });
        });
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                Msg::PageDone(Ok(outcome)) => {
                    self.list_error = None;
                    if outcome == FetchOutcome::Appended(0) {
                        self.exhausted = true;
                    }
                }
                Msg::PageDone(Err(e)) => {
                    self.list_error = Some(e.to_string());
                    self.hold_fetch = true;
                }
                // Results for a card the user has already left are dropped.
                Msg::DetailDone { id, result } => {
                    if self.viewing.as_deref() != Some(id.as_str()) {
                        continue;
                    }
                    match result {
                        Ok(card) => self.detail = Some(card),
                        Err(e) => self.detail_error = Some(e.to_string()),
                    }
                }
                Msg::SavedChecked { id, saved } => {
                    if self.viewing.as_deref() == Some(id.as_str()) {
                        self.saved = saved;
                    }
                }
                Msg::Toggled { id, result } => match result {
                    Ok(now_saved) => {
                        if self.viewing.as_deref() == Some(id.as_str()) {
                            self.saved = now_saved;
                        }
                    }
                    Err(e) => {
                        // The saved indicator stays as it was.
                        tracing::warn!(error = %e, "bookmark toggle failed");
                    }
                },
            }
        }
    }
}
