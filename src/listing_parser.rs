use super::*;

const COMMENTS_SUFFIX: &str = " comments";

const ITEM_LINK_PREFIX: &str = "item?id=";

const SCORE_ID_PREFIX: &str = "score_";

pub(crate) fn build_from_collection(dir: &Path) -> Result<TableOfContents, Error> {
  let mut paths = fs::read_dir(dir)
    .map_err(|source| Error::io(dir, source))?
    .map(|entry| entry.map(|entry| entry.path()))
    .collect::<Result<Vec<_>, _>>()
    .map_err(|source| Error::io(dir, source))?;

  paths.sort();

  let mut entries = Vec::new();

  for path in paths {
    if path.is_dir() {
      continue;
    }

    let data = fs::read(&path).map_err(|source| Error::io(&path, source))?;

    let mut entry = parse_entry(&String::from_utf8_lossy(&data))?;

    if entry.comment_count < 0 {
      debug!(path = %path.display(), "skipping page without an original post");
      continue;
    }

    entry.source_path = Some(path);

    entries.push(entry);
  }

  info!(dir = %dir.display(), entries = entries.len(), "built listing from collection");

  Ok(TableOfContents::new(entries))
}

fn parse_comment_count(text: &str) -> i64 {
  let text = text.trim();

  text
    .strip_suffix(COMMENTS_SUFFIX)
    .unwrap_or(text)
    .parse()
    .unwrap_or(0)
}

/// Reads the summary of a saved item page.
///
/// The comment count is inferred from the comment headers; the original post
/// carries one of them too, so a page without any header yields `-1`.
pub(crate) fn parse_entry(markup: &str) -> Result<Entry, Error> {
  let document = Document::parse(markup);
  let root = document.root();

  let item_link = select_one(root, r#"td.subtext a[href^="item"]"#)?;

  let href = attr(item_link, "href");

  let item_id = href.strip_prefix(ITEM_LINK_PREFIX).unwrap_or(&href).to_string();

  let title_link = title_link(root)?;

  let site_tag = site_tag(root)?;

  let headers = select_all(root, ".comhead")?.len();

  Ok(Entry {
    author: user_link(root)?.map(text).unwrap_or_default(),
    comment_count: i64::try_from(headers).unwrap_or(i64::MAX) - 1,
    is_external: !site_tag.is_empty(),
    item_id,
    link: attr(title_link, "href"),
    site_tag,
    source_path: None,
    title: title_link.map(text).unwrap_or_default(),
  })
}

/// Parses one front-page style listing.
///
/// Entries live in the third table, three rows per entry: title row,
/// subtext row, spacer row. A trailing partial group is ignored.
pub(crate) fn parse_page(markup: &str) -> Result<TableOfContents, Error> {
  let document = Document::parse(markup);

  let tables = select_all(document.root(), "table")?;

  let Some(table) = tables.get(2).copied() else {
    return Err(Error::StructuralMismatch(format!(
      "expected at least 3 tables, found {}",
      tables.len()
    )));
  };

  let rows = select_all(table, "tr")?;

  let mut entries = Vec::new();

  for group in rows.chunks_exact(3) {
    let entry = parse_rows(group[0], group[1])?;

    if entry.is_listable() {
      entries.push(entry);
    } else {
      trace!(id = %entry.item_id, "skipping unlisted entry");
    }
  }

  Ok(TableOfContents::new(entries))
}

fn parse_rows(title_row: ElementRef, subtext_row: ElementRef) -> Result<Entry, Error> {
  let score_id = attr(select_one(subtext_row, ".score")?, "id");

  let item_id = score_id
    .strip_prefix(SCORE_ID_PREFIX)
    .unwrap_or(&score_id)
    .to_string();

  let comment_count = select_all(subtext_row, "td.subtext a")?
    .last()
    .map_or(0, |link| parse_comment_count(&text(*link)));

  let title_link = title_link(title_row)?;

  let site_tag = site_tag(title_row)?;

  Ok(Entry {
    author: user_link(subtext_row)?.map(text).unwrap_or_default(),
    comment_count,
    is_external: !site_tag.is_empty(),
    item_id,
    link: attr(title_link, "href"),
    site_tag,
    source_path: None,
    title: title_link.map(text).unwrap_or_default(),
  })
}

fn site_tag(element: ElementRef) -> Result<String, Error> {
  for cell in title_cells(element)? {
    if let Some(span) = select_one(cell, "span.sitebit")? {
      return Ok(text(span).trim().to_string());
    }
  }

  Ok(String::new())
}

fn title_cells(element: ElementRef) -> Result<Vec<ElementRef>, Error> {
  Ok(
    select_all(element, "td")?
      .into_iter()
      .filter(|cell| has_only_attr(*cell, "class", "title"))
      .collect(),
  )
}

fn title_link(element: ElementRef) -> Result<Option<ElementRef>, Error> {
  for cell in title_cells(element)? {
    if let Some(link) = select_one(cell, "a")? {
      return Ok(Some(link));
    }
  }

  Ok(None)
}

fn user_link(element: ElementRef) -> Result<Option<ElementRef>, Error> {
  select_one(element, r#"td.subtext a[href*="user?id="]"#)
}
