use super::*;

const COMMENT_RULE: &str = "──────────────────────────────";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) depth: usize,
}

impl Display for Comment {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut lines = vec![format!("[{}]", self.author), String::new()];

    lines.extend(wrap_text(&self.body, MAX_LINE_LEN));

    let block = lines
      .iter()
      .map(|line| indent(line, self.depth))
      .collect::<Vec<_>>()
      .join("\n");

    write!(
      f,
      "{}\n{}",
      block.trim_end(),
      indent(COMMENT_RULE, self.depth)
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_header_body_and_rule() {
    let comment = Comment {
      author: "alice".into(),
      body: "Hello there".into(),
      depth: 0,
    };

    assert_eq!(
      comment.to_string(),
      format!("[alice]\n\nHello there\n{COMMENT_RULE}")
    );
  }

  #[test]
  fn nested_comments_are_indented_four_spaces_per_level() {
    let comment = Comment {
      author: "bob".into(),
      body: "first\n\nsecond\n\n".into(),
      depth: 2,
    };

    assert_eq!(
      comment.to_string(),
      format!(
        "        [bob]\n\n        first\n\n        second\n        {COMMENT_RULE}"
      )
    );
  }

  #[test]
  fn long_bodies_wrap_at_the_line_limit() {
    let comment = Comment {
      author: "carol".into(),
      body: "word ".repeat(60),
      depth: 1,
    };

    let rendered = comment.to_string();

    assert!(
      rendered
        .lines()
        .all(|line| line.chars().count() <= MAX_LINE_LEN + crate::reflow::INDENT.len())
    );

    assert!(rendered.lines().count() > 4);
  }
}
