use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Entry {
  pub(crate) author: String,
  pub(crate) comment_count: i64,
  pub(crate) is_external: bool,
  pub(crate) item_id: String,
  pub(crate) link: String,
  pub(crate) site_tag: String,
  pub(crate) source_path: Option<PathBuf>,
  pub(crate) title: String,
}

impl Entry {
  pub(crate) fn is_listable(&self) -> bool {
    !self.title.is_empty() && !self.author.is_empty() && self.comment_count > 0
  }

  pub(crate) fn resolved_url(&self, base_url: &str) -> String {
    if self.link.starts_with("http://") || self.link.starts_with("https://") {
      self.link.clone()
    } else {
      format!("{base_url}/item?id={}", self.item_id)
    }
  }

  pub(crate) fn summary(&self, number: usize) -> String {
    format!(
      "{number:>3}. {} {} by {} [{}] [id={}]",
      self.title, self.site_tag, self.author, self.comment_count, self.item_id
    )
  }
}
