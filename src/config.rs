use super::*;

const CONFIG_ENV: &str = "HN_TERMINAL_CONFIG";

const DEFAULT_BASE_URL: &str = "https://news.ycombinator.com";

const DEFAULT_WINDOW: usize = 28;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) cache_dir: PathBuf,
  pub(crate) latency_ms: u64,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) page_size: usize,
  pub(crate) view_size: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.into(),
      cache_dir: dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join(env!("CARGO_PKG_NAME")),
      latency_ms: 0,
      log_file: None,
      page_size: DEFAULT_WINDOW,
      view_size: DEFAULT_WINDOW,
    }
  }
}

impl Config {
  fn default_path() -> Option<PathBuf> {
    dirs::config_dir()
      .map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("config.toml"))
  }

  pub(crate) fn latency(&self) -> Duration {
    Duration::from_millis(self.latency_ms)
  }

  pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
    match Self::locate(explicit, env::var_os(CONFIG_ENV)) {
      Some((path, true)) => Self::read(&path),
      Some((path, false)) if path.exists() => Self::read(&path),
      _ => Ok(Self::default()),
    }
  }

  fn locate(
    explicit: Option<&Path>,
    from_env: Option<OsString>,
  ) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
      return Some((path.to_path_buf(), true));
    }

    if let Some(path) = from_env.filter(|path| !path.is_empty()) {
      return Some((PathBuf::from(path), true));
    }

    Self::default_path().map(|path| (path, false))
  }

  fn read(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("could not read config `{}`", path.display()))?;

    let config = toml::from_str::<Self>(&content)
      .with_context(|| format!("invalid config `{}`", path.display()))?;

    if config.view_size == 0 || config.page_size == 0 {
      bail!(
        "invalid config `{}`: view_size and page_size must be positive",
        path.display()
      );
    }

    Ok(config)
  }
}
