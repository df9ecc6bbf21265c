use super::*;

#[async_trait]
pub(crate) trait Source: Send + Sync {
  async fn fetch_item(&self, entry: &Entry) -> Result<String, Error>;

  async fn fetch_listing_page(
    &self,
    page: usize,
  ) -> Result<TableOfContents, Error>;
}
