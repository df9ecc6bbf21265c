use super::*;

pub(crate) struct FileSource {
  path: PathBuf,
}

impl FileSource {
  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }

  async fn read(&self) -> Result<String, Error> {
    let data = tokio::fs::read(&self.path)
      .await
      .map_err(|source| Error::io(&self.path, source))?;

    Ok(String::from_utf8_lossy(&data).into_owned())
  }
}

#[async_trait]
impl Source for FileSource {
  async fn fetch_item(&self, _entry: &Entry) -> Result<String, Error> {
    self.read().await
  }

  async fn fetch_listing_page(
    &self,
    page: usize,
  ) -> Result<TableOfContents, Error> {
    if page != 1 {
      return Err(Error::NoMorePages);
    }

    let mut entry = parse_entry(&self.read().await?)?;

    entry.source_path = Some(self.path.clone());

    Ok(TableOfContents::new(vec![entry]))
  }
}
