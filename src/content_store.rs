use super::*;

const INDEX_FILE: &str = "index.json";

#[derive(Debug)]
pub(crate) struct ContentStore {
  dir: PathBuf,
  index: BTreeMap<String, String>,
}

impl ContentStore {
  fn ensure_dir(&self) -> Result {
    fs::create_dir_all(&self.dir)
      .with_context(|| format!("could not create `{}`", self.dir.display()))
  }

  fn file_name(entry: &Entry) -> String {
    let slug = slug(&entry.title);

    if slug.is_empty() {
      format!("{}.txt", entry.item_id)
    } else {
      format!("{}-{slug}.txt", entry.item_id)
    }
  }

  fn index_path(&self) -> PathBuf {
    self.dir.join(INDEX_FILE)
  }

  pub(crate) fn len(&self) -> usize {
    self.index.len()
  }

  pub(crate) fn load(dir: PathBuf) -> Result<Self> {
    let path = dir.join(INDEX_FILE);

    let index = if path.exists() {
      let data = fs::read(&path)
        .with_context(|| format!("could not read `{}`", path.display()))?;

      if data.is_empty() {
        BTreeMap::new()
      } else {
        serde_json::from_slice(&data)
          .with_context(|| format!("invalid index `{}`", path.display()))?
      }
    } else {
      BTreeMap::new()
    };

    Ok(Self { dir, index })
  }

  pub(crate) fn save(&mut self, entry: &Entry, text: &str) -> Result<PathBuf> {
    if entry.item_id.is_empty() {
      bail!("entry `{}` has no item id", entry.title);
    }

    self.ensure_dir()?;

    let name = Self::file_name(entry);

    let path = self.dir.join(&name);

    fs::write(&path, text)
      .with_context(|| format!("could not write `{}`", path.display()))?;

    if let Some(previous) = self.index.insert(entry.item_id.clone(), name.clone())
      && previous != name
    {
      let _ = fs::remove_file(self.dir.join(previous));
    }

    fs::write(self.index_path(), serde_json::to_vec_pretty(&self.index)?)
      .with_context(|| {
        format!("could not write `{}`", self.index_path().display())
      })?;

    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(id: &str, title: &str) -> Entry {
    Entry {
      item_id: id.into(),
      title: title.into(),
      ..Entry::default()
    }
  }

  #[test]
  fn save_writes_text_and_index() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ContentStore::load(dir.path().join("cache")).unwrap();

    let path = store
      .save(&entry("42", "Show HN: A thing!"), "thread text")
      .unwrap();

    assert_eq!(path, dir.path().join("cache").join("42-show-hn-a-thing.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "thread text");

    let reloaded = ContentStore::load(dir.path().join("cache")).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.index["42"], "42-show-hn-a-thing.txt");
  }

  #[test]
  fn renamed_titles_replace_the_old_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ContentStore::load(dir.path().to_path_buf()).unwrap();

    let old = store.save(&entry("7", "Old title"), "one").unwrap();
    let new = store.save(&entry("7", "New title"), "two").unwrap();

    assert!(!old.exists());
    assert_eq!(fs::read_to_string(new).unwrap(), "two");
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn untitled_entries_use_the_bare_id() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ContentStore::load(dir.path().to_path_buf()).unwrap();

    let path = store.save(&entry("9", "???"), "text").unwrap();

    assert_eq!(path.file_name().unwrap(), "9.txt");
  }

  #[test]
  fn entries_without_ids_are_refused() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = ContentStore::load(dir.path().to_path_buf()).unwrap();

    assert!(store.save(&entry("", "No id"), "text").is_err());
    assert!(!dir.path().join(INDEX_FILE).exists());
  }

  #[test]
  fn corrupt_indexes_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(dir.path().join(INDEX_FILE), "not json").unwrap();

    assert!(ContentStore::load(dir.path().to_path_buf()).is_err());
  }
}
