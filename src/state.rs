use super::*;

pub(crate) struct State {
  base_url: String,
  browser: ListView<String>,
  deferred: VecDeque<KeyEvent>,
  message: String,
  mode: Mode,
  next_flow_id: u64,
  page: usize,
  pager: Pager,
  pager_only: bool,
  pending: Option<Flow>,
  pending_effects: Vec<Effect>,
  reading: Option<Entry>,
  should_exit: bool,
  toc: TableOfContents,
  toc_offset: usize,
  transient_message: Option<TransientMessage>,
  view_size: usize,
}

impl State {
  fn abort(&mut self) {
    if let Some(flow) = self.pending.take() {
      flow.cancel();

      info!(flow = flow.id(), dropped_keys = self.deferred.len(), "aborted");

      self.deferred.clear();
      self.transient_message = None;
      self.message = ABORTED_STATUS.into();
    }
  }

  fn apply_listing(
    &mut self,
    number: usize,
    step: isize,
    result: Result<TableOfContents, Error>,
  ) {
    match result {
      Ok(toc) => {
        let grown = if step > 0 { self.toc.len() } else { toc.len() };

        let shift = grown * step.unsigned_abs();

        self.toc_offset = if step < 0 {
          self.toc_offset.saturating_sub(shift)
        } else {
          self.toc_offset + shift
        };

        self.page = number;
        self.browser = ListView::new(toc.lines(self.toc_offset), self.view_size);
        self.toc = toc;
        self.message = DONE_LOADING_PAGE_STATUS.into();

        info!(page = number, entries = self.toc.len(), "page loaded");
      }
      Err(error) => {
        warn!(page = number, %error, "page failed to load");
        self.fail(format!("failed to load page: {error}"));
      }
    }
  }

  fn apply_thread(&mut self, entry: Entry, result: Result<Thread, Error>) {
    match result {
      Ok(thread) => {
        self.pager = Pager::new(thread.render_lines(), self.view_size);
        self.mode = Mode::Read;
        self.message = THREAD_LOADED_STATUS.into();

        info!(id = %entry.item_id, comments = thread.comments.len(), "thread loaded");

        self.pending_effects.push(Effect::Persist {
          entry: entry.clone(),
          text: thread.to_string(),
        });

        self.reading = Some(entry);
      }
      Err(error) => {
        warn!(id = %entry.item_id, %error, "thread failed to load");
        self.fail(format!("failed to load thread: {error}"));
      }
    }
  }

  fn back(&mut self) {
    if self.pager_only {
      self.should_exit = true;
    } else if self.mode == Mode::Read {
      self.mode = Mode::Browse;
      self.transient_message = None;
      self.message = Mode::Browse.status().into();
    }
  }

  /// Whether `flow` is the one still pending. Completions of cancelled or
  /// superseded flows are dropped.
  fn claim(&mut self, flow: &Flow) -> bool {
    let current = self
      .pending
      .as_ref()
      .is_some_and(|pending| pending.id() == flow.id());

    if current && flow.is_alive() {
      self.pending = None;
      true
    } else {
      debug!(flow = flow.id(), "discarding completion of a dead flow");
      false
    }
  }

  fn dispatch_action(&mut self, action: Action) {
    match (self.mode, action) {
      (_, Action::None) => {}
      (_, Action::Quit) => self.should_exit = true,
      (_, Action::Back) => self.back(),
      (_, Action::OpenInBrowser) => self.open_in_browser(),
      (Mode::Browse, Action::LoadNextPage) => self.load_page(1),
      (Mode::Browse, Action::LoadPreviousPage) => self.load_page(-1),
      (Mode::Browse, Action::ReloadPage) => self.load_page(0),
      (Mode::Browse, Action::OpenThread) => self.open_thread(),
      (Mode::Browse, Action::SelectUp) => self.browser.select_up(),
      (Mode::Browse, Action::SelectDown) => self.browser.select_down(),
      (Mode::Browse, Action::PageUp) => self.browser.page_up(),
      (Mode::Browse, Action::PageDown) => self.browser.page_down(),
      (Mode::Browse, Action::MoveStart) => self.browser.move_start(),
      (Mode::Browse, Action::MoveEnd) => self.browser.move_end(),
      (Mode::Read, Action::SelectUp) => self.pager.scroll_up(),
      (Mode::Read, Action::SelectDown) => self.pager.scroll_down(),
      (Mode::Read, Action::PageUp) => self.pager.page_up(),
      (Mode::Read, Action::PageDown) => self.pager.page_down(),
      (Mode::Read, Action::MoveStart) => self.pager.home(),
      (Mode::Read, Action::MoveEnd) => self.pager.end(),
      (
        Mode::Read,
        Action::LoadNextPage
        | Action::LoadPreviousPage
        | Action::OpenThread
        | Action::ReloadPage,
      ) => {}
    }
  }

  fn fail(&mut self, message: String) {
    self.transient_message = None;
    self.message = self.mode.status().into();
    self.set_transient_message(message);
  }

  fn finish_flow(&mut self) {
    while self.pending.is_none() && !self.should_exit {
      let Some(key) = self.deferred.pop_front() else {
        break;
      };

      self.handle_key(key);
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "event handling should start without pending effects"
    );

    match event {
      Event::Input(key) => self.handle_key(key),
      Event::InputClosed => self.should_exit = true,
      Event::Listing { flow, result } => {
        if self.claim(&flow) {
          if let FlowTarget::Page { number, step } = *flow.target() {
            self.apply_listing(number, step, result);
          }

          self.finish_flow();
        }
      }
      Event::Thread { flow, result } => {
        if self.claim(&flow) {
          if let FlowTarget::Thread(entry) = flow.target() {
            self.apply_thread(entry.clone(), result);
          }

          self.finish_flow();
        }
      }
      Event::Redraw => {}
      Event::Tick => self.update_transient_message(),
    }

    Dispatch {
      effects: mem::take(&mut self.pending_effects),
      should_exit: self.should_exit,
    }
  }

  fn handle_key(&mut self, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
      return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      self.should_exit = true;
      return;
    }

    if self.pending.is_some() {
      if key.code == KeyCode::Esc {
        self.abort();
      } else {
        self.deferred.push_back(key);
      }

      return;
    }

    self.dispatch_action(self.mode.action(key));
  }

  pub(crate) fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  pub(crate) fn load_page(&mut self, step: isize) {
    let Some(number) = self.page.checked_add_signed(step).filter(|&n| n > 0)
    else {
      return;
    };

    if self.start_flow(FlowTarget::Page { number, step }) {
      self.message = LOADING_PAGE_STATUS.into();
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(config: &Config, toc: TableOfContents) -> Self {
    Self {
      base_url: config.base_url.clone(),
      browser: ListView::new(toc.lines(0), config.view_size),
      deferred: VecDeque::new(),
      message: Mode::Browse.status().into(),
      mode: Mode::Browse,
      next_flow_id: 0,
      page: 1,
      pager: Pager::default(),
      pager_only: false,
      pending: None,
      pending_effects: Vec::new(),
      reading: None,
      should_exit: false,
      toc,
      toc_offset: 0,
      transient_message: None,
      view_size: config.view_size,
    }
  }

  fn open_in_browser(&mut self) {
    let entry = match self.mode {
      Mode::Browse => self.selected_entry(),
      Mode::Read => self.reading.as_ref(),
    };

    let Some(url) = entry.map(|entry| entry.resolved_url(&self.base_url))
    else {
      return;
    };

    self.pending_effects.push(Effect::OpenUrl { url });
  }

  fn open_thread(&mut self) {
    let Some(entry) = self.selected_entry().cloned() else {
      return;
    };

    if self.start_flow(FlowTarget::Thread(entry)) {
      self.message = LOADING_THREAD_STATUS.into();
    }
  }

  pub(crate) fn reader(config: &Config, entry: Entry, thread: &Thread) -> Self {
    let mut state = Self::new(config, TableOfContents::default());

    state.pager = Pager::new(thread.render_lines(), config.view_size);
    state.pager_only = true;
    state.mode = Mode::Read;
    state.message = Mode::Read.status().into();
    state.reading = Some(entry);

    state
  }

  pub(crate) fn screen(&self) -> Screen {
    match self.mode {
      Mode::Browse => Screen {
        body: self.browser.visible_items().to_vec(),
        message: self.message.clone(),
        pending: self.is_pending(),
        position: self
          .browser
          .selected_index()
          .map(|index| format!("{}/{}", index + 1, self.browser.len()))
          .unwrap_or_default(),
        selected: (!self.browser.is_empty()).then(|| self.browser.cursor()),
        title: format!("page {}", self.page),
      },
      Mode::Read => Screen {
        body: self.pager.current_page().to_vec(),
        message: self.message.clone(),
        pending: self.is_pending(),
        position: format!(
          "{}/{}",
          (self.pager.offset() + 1).min(self.pager.line_count()),
          self.pager.line_count()
        ),
        selected: None,
        title: self
          .reading
          .as_ref()
          .map(|entry| truncate(&entry.title, 60))
          .unwrap_or_default(),
      },
    }
  }

  fn selected_entry(&self) -> Option<&Entry> {
    self
      .browser
      .selected_index()
      .and_then(|index| self.toc.get(index))
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let previous = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.previous().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), previous));

    self.message = message;
  }

  fn start_flow(&mut self, target: FlowTarget) -> bool {
    if let Some(pending) = &self.pending {
      debug!(pending = pending.id(), ?target, "rejecting flow");
      self.set_transient_message(BUSY_STATUS.into());
      return false;
    }

    self.next_flow_id += 1;

    let flow = Flow::new(self.next_flow_id, target);

    debug!(flow = flow.id(), target = ?flow.target(), "starting flow");

    self.transient_message = None;
    self.pending = Some(flow.clone());
    self.pending_effects.push(Effect::Fetch(flow));

    true
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.previous().to_string();
        self.transient_message = None;
      }
    }
  }
}
