#[derive(Debug, Default)]
pub(crate) struct Pager {
  lines: Vec<String>,
  offset: usize,
  window: usize,
}

impl Pager {
  pub(crate) fn current_page(&self) -> &[String] {
    let end = (self.offset + self.window).min(self.lines.len());
    &self.lines[self.offset..end]
  }

  pub(crate) fn end(&mut self) {
    self.offset = self.max_offset();
  }

  pub(crate) fn home(&mut self) {
    self.offset = 0;
  }

  pub(crate) fn line_count(&self) -> usize {
    self.lines.len()
  }

  fn max_offset(&self) -> usize {
    self.lines.len().saturating_sub(self.window)
  }

  pub(crate) fn new(lines: Vec<String>, window: usize) -> Self {
    Self {
      lines,
      offset: 0,
      window,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset
  }

  pub(crate) fn page_down(&mut self) {
    self.offset = (self.offset + self.window).min(self.max_offset());
  }

  pub(crate) fn page_up(&mut self) {
    self.offset = self.offset.saturating_sub(self.window);
  }

  pub(crate) fn scroll_down(&mut self) {
    if self.offset < self.max_offset() {
      self.offset += 1;
    }
  }

  pub(crate) fn scroll_up(&mut self) {
    self.offset = self.offset.saturating_sub(1);
  }
}
