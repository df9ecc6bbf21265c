use super::*;

pub(crate) struct DirectorySource {
  collection: TableOfContents,
  index: HashMap<String, PathBuf>,
  latency: Duration,
  window: usize,
}

impl DirectorySource {
  async fn delay(&self) {
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }
  }

  pub(crate) fn new(
    collection: TableOfContents,
    window: usize,
    latency: Duration,
  ) -> Self {
    let index = collection
      .entries()
      .iter()
      .filter_map(|entry| {
        entry
          .source_path
          .clone()
          .map(|path| (entry.item_id.clone(), path))
      })
      .collect();

    Self {
      collection,
      index,
      latency,
      window: window.max(1),
    }
  }

  pub(crate) fn open(
    dir: &Path,
    window: usize,
    latency: Duration,
  ) -> Result<Self, Error> {
    Ok(Self::new(build_from_collection(dir)?, window, latency))
  }

  fn page(&self, page: usize) -> Result<TableOfContents, Error> {
    let Some(start) = page.checked_sub(1).map(|index| index * self.window)
    else {
      return Err(Error::NoMorePages);
    };

    if start >= self.collection.len() {
      return Err(Error::NoMorePages);
    }

    let end = (start + self.window).min(self.collection.len());

    Ok(self.collection.entries()[start..end].iter().cloned().collect())
  }
}

#[async_trait]
impl Source for DirectorySource {
  async fn fetch_item(&self, entry: &Entry) -> Result<String, Error> {
    self.delay().await;

    let path = entry
      .source_path
      .as_ref()
      .or_else(|| self.index.get(&entry.item_id))
      .ok_or_else(|| Error::NotFound(entry.item_id.clone()))?;

    let data = tokio::fs::read(path)
      .await
      .map_err(|source| Error::io(path, source))?;

    Ok(String::from_utf8_lossy(&data).into_owned())
  }

  async fn fetch_listing_page(
    &self,
    page: usize,
  ) -> Result<TableOfContents, Error> {
    self.delay().await;
    self.page(page)
  }
}
