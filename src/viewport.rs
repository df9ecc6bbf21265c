use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Viewport {
  cursor: usize,
  item_count: usize,
  offset: usize,
  window: usize,
}

impl Viewport {
  pub(crate) fn cursor(&self) -> usize {
    self.cursor
  }

  fn max_offset(&self) -> usize {
    self.item_count - self.window
  }

  pub(crate) fn move_end(&mut self) {
    let end = self.max_offset();

    if self.offset == end {
      self.cursor = self.window.saturating_sub(1);
    } else {
      self.offset = end;
    }
  }

  pub(crate) fn move_start(&mut self) {
    if self.offset == 0 {
      self.cursor = 0;
    } else {
      self.offset = 0;
    }
  }

  pub(crate) fn new(item_count: usize, window: usize) -> Self {
    Self {
      cursor: 0,
      item_count,
      offset: 0,
      window: window.min(item_count),
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

  pub(crate) fn select_down(&mut self) {
    if self.cursor >= self.window / 2
      && self.offset + self.window < self.item_count
    {
      self.offset += 1;
    } else if self.cursor + 1 < self.window {
      self.cursor += 1;
    }
  }

  pub(crate) fn select_up(&mut self) {
    if self.cursor <= self.window / 2 && self.offset > 0 {
      self.offset -= 1;
    } else if self.cursor > 0 {
      self.cursor -= 1;
    }
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (self.window > 0).then_some(self.offset + self.cursor)
  }

  pub(crate) fn visible(&self) -> Range<usize> {
    self.offset..self.offset + self.window
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_invariants(viewport: &Viewport) {
    if viewport.item_count >= viewport.window {
      assert!(viewport.offset + viewport.window <= viewport.item_count);
    }

    if viewport.window > 0 {
      assert!(viewport.cursor < viewport.window);
    } else {
      assert_eq!(viewport.cursor, 0);
      assert_eq!(viewport.offset, 0);
    }
  }

  #[test]
  fn window_shrinks_to_short_lists() {
    let viewport = Viewport::new(3, 10);

    assert_eq!(viewport.window, 3);
    assert_eq!(viewport.visible(), 0..3);
  }

  #[test]
  fn select_down_moves_the_cursor_until_the_middle_then_scrolls() {
    let mut viewport = Viewport::new(10, 4);

    viewport.select_down();
    viewport.select_down();
    assert_eq!((viewport.offset(), viewport.cursor()), (0, 2));

    viewport.select_down();
    assert_eq!((viewport.offset(), viewport.cursor()), (1, 2));

    for _ in 0..5 {
      viewport.select_down();
    }
    assert_eq!((viewport.offset(), viewport.cursor()), (6, 2));

    viewport.select_down();
    assert_eq!((viewport.offset(), viewport.cursor()), (6, 3));

    viewport.select_down();
    assert_eq!(viewport.selected_index(), Some(9));
  }

  #[test]
  fn select_up_scrolls_back_before_moving_the_cursor() {
    let mut viewport = Viewport::new(10, 4);
    viewport.move_end();
    viewport.move_end();
    assert_eq!((viewport.offset(), viewport.cursor()), (6, 3));

    viewport.select_up();
    assert_eq!((viewport.offset(), viewport.cursor()), (6, 2));

    viewport.select_up();
    assert_eq!((viewport.offset(), viewport.cursor()), (5, 2));

    for _ in 0..5 {
      viewport.select_up();
    }
    assert_eq!((viewport.offset(), viewport.cursor()), (0, 2));

    viewport.select_up();
    viewport.select_up();
    viewport.select_up();
    assert_eq!(viewport.selected_index(), Some(0));
  }

  #[test]
  fn move_start_snaps_the_window_then_the_cursor() {
    let mut viewport = Viewport::new(20, 5);

    viewport.page_down();
    viewport.select_down();
    assert_eq!((viewport.offset(), viewport.cursor()), (5, 1));

    viewport.move_start();
    assert_eq!((viewport.offset(), viewport.cursor()), (0, 1));

    viewport.move_start();
    assert_eq!((viewport.offset(), viewport.cursor()), (0, 0));
  }

  #[test]
  fn move_end_snaps_the_window_then_the_cursor() {
    let mut viewport = Viewport::new(20, 5);

    viewport.move_end();
    assert_eq!((viewport.offset(), viewport.cursor()), (15, 0));

    viewport.move_end();
    assert_eq!((viewport.offset(), viewport.cursor()), (15, 4));
    assert_eq!(viewport.selected_index(), Some(19));
  }

  #[test]
  fn paging_is_clamped() {
    let mut viewport = Viewport::new(12, 5);

    viewport.page_down();
    assert_eq!(viewport.offset(), 5);

    viewport.page_down();
    assert_eq!(viewport.offset(), 7);

    viewport.page_up();
    assert_eq!(viewport.offset(), 2);

    viewport.page_up();
    assert_eq!(viewport.offset(), 0);
  }

  #[test]
  fn empty_viewport_has_no_selection() {
    let mut viewport = Viewport::new(0, 28);

    viewport.select_down();
    viewport.select_up();
    viewport.page_down();
    viewport.page_up();
    viewport.move_end();
    viewport.move_start();

    assert_eq!(viewport.selected_index(), None);
    assert_invariants(&viewport);
  }

  #[test]
  fn invariants_hold_for_any_operation_sequence() {
    for (count, window) in [(0, 3), (1, 3), (3, 3), (7, 3), (28, 28), (50, 28), (9, 1)] {
      let mut viewport = Viewport::new(count, window);

      let mut state = 0x2545_f491_u32 ^ u32::try_from(count * 31 + window).unwrap();

      for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;

        match state % 6 {
          0 => viewport.select_up(),
          1 => viewport.select_down(),
          2 => viewport.page_up(),
          3 => viewport.page_down(),
          4 => viewport.move_start(),
          _ => viewport.move_end(),
        }

        assert_invariants(&viewport);

        if let Some(index) = viewport.selected_index() {
          assert!(index < count);
        }
      }
    }
  }
}
