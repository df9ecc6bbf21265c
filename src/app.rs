use super::*;

pub(crate) struct App {
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  source: Arc<dyn Source>,
  state: State,
  store: Option<Arc<Mutex<ContentStore>>>,
}

impl App {
  async fn control_loop(&mut self, screens: &watch::Sender<Screen>) {
    while let Some(event) = self.event_rx.recv().await {
      let redraw = matches!(event, Event::Redraw);

      let dispatch = self.state.handle_event(event);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      let screen = self.state.screen();

      if redraw {
        screens.send_replace(screen);
      } else {
        screens.send_if_modified(|current| {
          if *current == screen {
            false
          } else {
            *current = screen;
            true
          }
        });
      }

      if dispatch.should_exit {
        break;
      }
    }
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Fetch(flow) => {
        let (source, sender) = (self.source.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let event = match flow.target().clone() {
            FlowTarget::Page { number, .. } => Event::Listing {
              result: source.fetch_listing_page(number).await,
              flow,
            },
            FlowTarget::Thread(entry) => Event::Thread {
              result: source
                .fetch_item(&entry)
                .await
                .and_then(|markup| parse_thread(&markup)),
              flow,
            },
          };

          let _ = sender.send(event);
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open browser");

          self
            .state
            .set_transient_message(format!("could not open link: {error}"));
        }
      },
      Effect::Persist { entry, text } => {
        let Some(store) = self.store.clone() else {
          return;
        };

        self.handle.spawn_blocking(move || {
          let result = store
            .lock()
            .map_err(|_| anyhow!("content store lock poisoned"))
            .and_then(|mut store| store.save(&entry, &text));

          match result {
            Ok(path) => debug!(path = %path.display(), "saved thread"),
            Err(error) => warn!(id = %entry.item_id, "could not save thread: {error:#}"),
          }
        });
      }
    }
  }

  pub(crate) fn new(
    source: Arc<dyn Source>,
    state: State,
    store: Option<ContentStore>,
  ) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      event_rx,
      event_tx,
      handle: Handle::current(),
      source,
      state,
      store: store.map(|store| Arc::new(Mutex::new(store))),
    }
  }

  pub(crate) async fn run(
    mut self,
    terminal: Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    let (screens, screen_rx) = watch::channel(self.state.screen());

    let renderer = self.handle.spawn(Self::render(terminal, screen_rx));

    Self::spawn_input(self.event_tx.clone())?;

    self.control_loop(&screens).await;

    drop(screens);

    renderer.await.context("renderer task failed")?
  }

  async fn render(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    mut screens: watch::Receiver<Screen>,
  ) -> Result {
    loop {
      let screen = screens.borrow_and_update().clone();

      terminal.draw(|frame| screen.draw(frame))?;

      if screens.changed().await.is_err() {
        break;
      }
    }

    Ok(())
  }

  fn spawn_input(sender: UnboundedSender<Event>) -> Result {
    std::thread::Builder::new()
      .name("input".into())
      .spawn(move || {
        loop {
          let event = match crossterm_event::poll(INPUT_POLL_INTERVAL) {
            Ok(false) => Event::Tick,
            Ok(true) => match crossterm_event::read() {
              Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                Event::Input(key)
              }
              Ok(CrosstermEvent::Resize(..)) => Event::Redraw,
              Ok(_) => continue,
              Err(error) => {
                warn!(%error, "could not read input");
                Event::InputClosed
              }
            },
            Err(error) => {
              warn!(%error, "could not poll input");
              Event::InputClosed
            }
          };

          let closed = matches!(event, Event::InputClosed);

          if sender.send(event).is_err() || closed {
            break;
          }
        }
      })
      .context("could not spawn input thread")?;

    Ok(())
  }
}
