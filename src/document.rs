use super::*;

pub(crate) struct Document {
  html: Html,
}

impl Document {
  pub(crate) fn parse(markup: &str) -> Self {
    Self {
      html: Html::parse_document(markup),
    }
  }

  pub(crate) fn root(&self) -> ElementRef<'_> {
    self.html.root_element()
  }
}

pub(crate) fn attr(element: Option<ElementRef>, key: &str) -> String {
  element
    .and_then(|element| element.value().attr(key))
    .unwrap_or_default()
    .to_string()
}

pub(crate) fn has_only_attr(element: ElementRef, key: &str, value: &str) -> bool {
  let attributes = element.value();

  attributes.attrs().count() == 1 && attributes.attr(key) == Some(value)
}

pub(crate) fn select_all<'a>(
  element: ElementRef<'a>,
  css: &str,
) -> Result<Vec<ElementRef<'a>>, Error> {
  let selector = selector(css)?;

  Ok(element.select(&selector).collect())
}

pub(crate) fn select_one<'a>(
  element: ElementRef<'a>,
  css: &str,
) -> Result<Option<ElementRef<'a>>, Error> {
  let selector = selector(css)?;

  Ok(element.select(&selector).next())
}

fn selector(css: &str) -> Result<Selector, Error> {
  Selector::parse(css).map_err(|_| Error::Selector(css.to_string()))
}

pub(crate) fn text(element: ElementRef) -> String {
  element.text().collect()
}

pub(crate) fn text_without(
  element: ElementRef,
  excluded: Option<ElementRef>,
) -> String {
  let Some(excluded) = excluded else {
    return text(element);
  };

  let excluded = excluded.id();

  element
    .descendants()
    .filter(|node| !node.ancestors().any(|ancestor| ancestor.id() == excluded))
    .filter_map(|node| node.value().as_text().map(|text| text.to_string()))
    .collect()
}
