const SLUG_MAX_CHARS: usize = 60;

pub(crate) fn slug(text: &str) -> String {
  let mut slug = String::new();

  for word in text
    .split(|ch: char| !ch.is_ascii_alphanumeric())
    .filter(|word| !word.is_empty())
  {
    if !slug.is_empty() {
      if slug.len() + 1 + word.len() > SLUG_MAX_CHARS {
        break;
      }

      slug.push('-');
    }

    slug.push_str(&word.to_ascii_lowercase());
  }

  slug.truncate(SLUG_MAX_CHARS);

  slug
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}
