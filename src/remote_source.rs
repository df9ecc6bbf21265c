use super::*;

#[derive(Clone)]
pub(crate) struct RemoteSource {
  base_url: String,
  client: reqwest::Client,
}

impl RemoteSource {
  async fn get(&self, url: String) -> Result<String, Error> {
    debug!(%url, "fetching");

    Ok(
      self
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?,
    )
  }

  fn item_url(&self, id: &str) -> String {
    format!("{}/item?id={id}", self.base_url)
  }

  fn listing_url(&self, page: usize) -> String {
    format!("{}/news?p={page}", self.base_url)
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }
}

#[async_trait]
impl Source for RemoteSource {
  async fn fetch_item(&self, entry: &Entry) -> Result<String, Error> {
    if entry.item_id.is_empty() {
      return Err(Error::NotFound(entry.title.clone()));
    }

    self.get(self.item_url(&entry.item_id)).await
  }

  async fn fetch_listing_page(
    &self,
    page: usize,
  ) -> Result<TableOfContents, Error> {
    if page == 0 {
      return Err(Error::NoMorePages);
    }

    let markup = self.get(self.listing_url(page)).await?;

    parse_page(&markup)
  }
}
