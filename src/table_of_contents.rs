use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TableOfContents {
  entries: Vec<Entry>,
}

impl FromIterator<Entry> for TableOfContents {
  fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl TableOfContents {
  pub(crate) fn entries(&self) -> &[Entry] {
    &self.entries
  }

  pub(crate) fn get(&self, index: usize) -> Option<&Entry> {
    self.entries.get(index)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }

  pub(crate) fn lines(&self, offset: usize) -> Vec<String> {
    self
      .entries
      .iter()
      .enumerate()
      .map(|(index, entry)| entry.summary(offset + index + 1))
      .collect()
  }

  pub(crate) fn new(entries: Vec<Entry>) -> Self {
    Self { entries }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(id: &str) -> Entry {
    Entry {
      author: "alice".into(),
      comment_count: 3,
      item_id: id.into(),
      title: format!("Story {id}"),
      ..Entry::default()
    }
  }

  #[test]
  fn lines_are_numbered_from_the_offset() {
    let toc = TableOfContents::new(vec![entry("1"), entry("2")]);

    assert_eq!(
      toc.lines(28),
      vec![
        " 29. Story 1  by alice [3] [id=1]".to_string(),
        " 30. Story 2  by alice [3] [id=2]".to_string(),
      ]
    );
  }

  #[test]
  fn collects_from_an_iterator() {
    let toc = ["a", "b", "c"].into_iter().map(entry).collect::<TableOfContents>();

    assert_eq!(toc.len(), 3);
    assert_eq!(toc.get(1).map(|entry| entry.item_id.as_str()), Some("b"));
    assert!(!toc.is_empty());
  }
}
