use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Target {
  Directory(PathBuf),
  File(PathBuf),
  Remote,
}

#[derive(Debug, Parser)]
#[command(
  name = env!("CARGO_PKG_NAME"),
  version,
  about = "Browse Hacker News listings and comment threads in the terminal"
)]
pub(crate) struct Arguments {
  /// Config file to use instead of the default one
  #[arg(long, value_name = "FILE")]
  pub(crate) config: Option<PathBuf>,
  /// Artificial delay added to every local fetch
  #[arg(long, value_name = "MILLISECONDS")]
  pub(crate) latency_ms: Option<u64>,
  /// A directory of saved item pages, or a single saved item page
  pub(crate) path: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn target(&self) -> Result<Target> {
    let Some(path) = &self.path else {
      return Ok(Target::Remote);
    };

    let metadata = fs::metadata(path)
      .with_context(|| format!("could not open `{}`", path.display()))?;

    Ok(if metadata.is_dir() {
      Target::Directory(path.clone())
    } else {
      Target::File(path.clone())
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_path_browses_the_remote_site() {
    let arguments = Arguments::try_parse_from(["hn-terminal"]).unwrap();

    assert_eq!(arguments.target().unwrap(), Target::Remote);
  }

  #[test]
  fn paths_pick_directory_or_file_targets() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("item.html");
    fs::write(&file, "<html></html>").unwrap();

    let arguments = Arguments::try_parse_from([
      PathBuf::from("hn-terminal"),
      dir.path().to_path_buf(),
    ])
    .unwrap();
    assert_eq!(
      arguments.target().unwrap(),
      Target::Directory(dir.path().to_path_buf())
    );

    let arguments =
      Arguments::try_parse_from([PathBuf::from("hn-terminal"), file.clone()])
        .unwrap();
    assert_eq!(arguments.target().unwrap(), Target::File(file));
  }

  #[test]
  fn missing_paths_are_errors() {
    let arguments =
      Arguments::try_parse_from(["hn-terminal", "/definitely/not/here"])
        .unwrap();

    assert!(arguments.target().is_err());
  }

  #[test]
  fn flags_are_parsed() {
    let arguments = Arguments::try_parse_from([
      "hn-terminal",
      "--config",
      "custom.toml",
      "--latency-ms",
      "300",
    ])
    .unwrap();

    assert_eq!(arguments.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(arguments.latency_ms, Some(300));
    assert_eq!(arguments.path, None);
  }
}
