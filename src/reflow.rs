pub(crate) const INDENT: &str = "    ";

pub(crate) const MAX_LINE_LEN: usize = 90;

/// Splits `line` into a head of at most `max_width` characters and the rest.
/// Breaks at the last whitespace only when it lies past the middle of the
/// window, otherwise cuts hard at `max_width`.
pub(crate) fn chop(line: &str, max_width: usize) -> (String, String) {
  let max_width = max_width.max(1);

  let chars = line.chars().collect::<Vec<char>>();

  if chars.len() < max_width {
    return (line.to_string(), String::new());
  }

  let window = &chars[..chars.len().min(max_width + 1)];

  let breakpoint = window
    .iter()
    .rposition(|ch| ch.is_whitespace())
    .filter(|&index| index > max_width / 2 && index <= max_width);

  match breakpoint {
    Some(index) => (
      chars[..index].iter().collect(),
      chars[index + 1..].iter().collect(),
    ),
    None => (
      chars[..max_width].iter().collect(),
      chars[max_width..].iter().collect(),
    ),
  }
}

pub(crate) fn chop_all(text: &str, max_width: usize) -> Vec<String> {
  if text.is_empty() {
    return vec![String::new()];
  }

  let mut lines: Vec<String> = Vec::new();
  let mut rest = text.to_string();

  while !rest.is_empty() {
    let (head, tail) = chop(&rest, max_width);

    match lines.last_mut() {
      Some(last)
        if last.chars().count() + head.chars().count() < max_width =>
      {
        last.push(' ');
        last.push_str(&head);
      }
      _ => lines.push(head),
    }

    rest = tail;
  }

  lines
}

pub(crate) fn indent(line: &str, level: usize) -> String {
  if line.is_empty() {
    String::new()
  } else {
    format!("{}{line}", INDENT.repeat(level))
  }
}

pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
  text
    .split('\n')
    .flat_map(|line| chop_all(line, max_width))
    .collect()
}
