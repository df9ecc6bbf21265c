use {
  action::Action,
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::{Arguments, Target},
  async_trait::async_trait,
  clap::Parser,
  comment::Comment,
  config::Config,
  content_store::ContentStore,
  crossterm::{
    cursor,
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  directory_source::DirectorySource,
  dispatch::Dispatch,
  document::{
    Document, attr, has_only_attr, select_all, select_one, text, text_without,
  },
  effect::Effect,
  entry::Entry,
  error::Error,
  event::Event,
  file_source::FileSource,
  flow::{Flow, FlowTarget},
  list_view::ListView,
  listing_parser::{build_from_collection, parse_entry, parse_page},
  mode::Mode,
  original_post::OriginalPost,
  pager::Pager,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
  },
  reflow::{MAX_LINE_LEN, indent, wrap_text},
  remote_source::RemoteSource,
  scraper::{ElementRef, Html, Selector},
  screen::Screen,
  serde::Deserialize,
  source::Source,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{BTreeMap, HashMap, VecDeque},
    env,
    ffi::OsString,
    fmt::{self, Display},
    fs,
    io::{self, IsTerminal, Stdout},
    mem,
    ops::Range,
    path::{Path, PathBuf},
    process,
    sync::{
      Arc, Mutex,
      atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
  },
  table_of_contents::TableOfContents,
  thread::Thread,
  thread_parser::parse_thread,
  tokio::{
    runtime::Handle,
    sync::{
      mpsc::{self, UnboundedReceiver, UnboundedSender},
      watch,
    },
  },
  tracing::{debug, info, trace, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{slug, truncate},
  viewport::Viewport,
};

mod action;
mod app;
mod arguments;
mod comment;
mod config;
mod content_store;
mod directory_source;
mod dispatch;
mod document;
mod effect;
mod entry;
mod error;
mod event;
mod file_source;
mod flow;
mod list_view;
mod listing_parser;
mod mode;
mod original_post;
mod pager;
mod reflow;
mod remote_source;
mod screen;
mod source;
mod state;
mod table_of_contents;
mod thread;
mod thread_parser;
mod transient_message;
mod utils;
mod viewport;

const HEADER: &str = "hn terminal";

const BASE_INDENT: &str = " ";

const BROWSE_STATUS: &str = "↑/k ↓/j select • enter read • ctrl+n/ctrl+p next/previous page • ctrl+r reload • o open link • q quit";

const READ_STATUS: &str =
  "↑/k ↓/j scroll • pg↑/pg↓ page • home/end • o open link • esc back • q quit";

const ABORTED_STATUS: &str = "aborted";
const BUSY_STATUS: &str = "busy: a fetch is already running";
const DONE_LOADING_PAGE_STATUS: &str = "done loading page";
const LOADING_PAGE_STATUS: &str = "loading page...";
const LOADING_THREAD_STATUS: &str = "loading thread data...";
const THREAD_LOADED_STATUS: &str = "thread loaded";

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(config: &Config) -> Result {
  let Some(path) = &config.log_file else {
    return Ok(());
  };

  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    fs::create_dir_all(parent)
      .with_context(|| format!("could not create `{}`", parent.display()))?;
  }

  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file `{}`", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!("could not initialize logging: {error}"))
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result {
  disable_raw_mode()?;

  execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let mut config = Config::load(arguments.config.as_deref())?;

  if let Some(latency_ms) = arguments.latency_ms {
    config.latency_ms = latency_ms;
  }

  initialize_logging(&config)?;

  let (source, state): (Arc<dyn Source>, State) = match arguments.target()? {
    Target::Directory(dir) => {
      let source =
        DirectorySource::open(&dir, config.page_size, config.latency())
          .with_context(|| format!("could not index `{}`", dir.display()))?;

      let toc = source
        .fetch_listing_page(1)
        .await
        .with_context(|| format!("could not list `{}`", dir.display()))?;

      (Arc::new(source), State::new(&config, toc))
    }
    Target::File(path) => {
      let source = FileSource::new(path.clone());

      let entry = source
        .fetch_listing_page(1)
        .await?
        .entries()
        .first()
        .cloned()
        .unwrap_or_default();

      let thread = parse_thread(&source.fetch_item(&entry).await?)
        .with_context(|| format!("could not read thread `{}`", path.display()))?;

      let state = State::reader(&config, entry, &thread);

      (Arc::new(source), state)
    }
    Target::Remote => {
      let source = RemoteSource::new(&config.base_url);

      let toc = source
        .fetch_listing_page(1)
        .await
        .context("could not load the first page")?;

      (Arc::new(source), State::new(&config, toc))
    }
  };

  let store = ContentStore::load(config.cache_dir.clone())
    .inspect(|store| debug!(saved = store.len(), "content store loaded"))
    .inspect_err(|error| warn!("threads will not be saved: {error:#}"))
    .ok();

  info!(view_size = config.view_size, "starting");

  let terminal = initialize_terminal()?;

  let result = App::new(source, state, store).run(terminal).await;

  restore_terminal()?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
