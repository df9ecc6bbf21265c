use super::*;

pub(crate) struct ListView<T> {
  items: Vec<T>,
  viewport: Viewport,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      viewport: Viewport::default(),
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn cursor(&self) -> usize {
    self.viewport.cursor()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn move_end(&mut self) {
    self.viewport.move_end();
  }

  pub(crate) fn move_start(&mut self) {
    self.viewport.move_start();
  }

  pub(crate) fn new(items: Vec<T>, window: usize) -> Self {
    Self {
      viewport: Viewport::new(items.len(), window),
      items,
    }
  }

  pub(crate) fn page_down(&mut self) {
    self.viewport.page_down();
  }

  pub(crate) fn page_up(&mut self) {
    self.viewport.page_up();
  }

  pub(crate) fn select_down(&mut self) {
    self.viewport.select_down();
  }

  pub(crate) fn select_up(&mut self) {
    self.viewport.select_up();
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    self.viewport.selected_index()
  }

  pub(crate) fn visible_items(&self) -> &[T] {
    &self.items[self.viewport.visible()]
  }
}
