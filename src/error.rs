use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("could not read `{}`: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("no more pages")]
  NoMorePages,
  #[error("item not found: {0}")]
  NotFound(String),
  #[error("invalid selector `{0}`")]
  Selector(String),
  #[error("markup does not match the expected layout: {0}")]
  StructuralMismatch(String),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn io_error_names_the_path() {
    let error = Error::io(
      "pages/1.html",
      io::Error::new(io::ErrorKind::NotFound, "missing"),
    );

    assert_eq!(error.to_string(), "could not read `pages/1.html`: missing");
  }

  #[test]
  fn structural_mismatch_describes_the_layout() {
    assert_eq!(
      Error::StructuralMismatch("expected at least 3 tables, found 1".into())
        .to_string(),
      "markup does not match the expected layout: expected at least 3 tables, found 1"
    );
  }
}
