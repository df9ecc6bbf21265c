use super::*;

const POST_RULE: &str = "────────────────────────────────────────";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct OriginalPost {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) link: String,
  pub(crate) title: String,
}

impl Display for OriginalPost {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "# {}", self.link)?;

    let text = format!("# {}\n[{}]\n\n{}", self.title, self.author, self.body);

    for line in wrap_text(&text, MAX_LINE_LEN) {
      writeln!(f, "{line}")?;
    }

    write!(f, "{POST_RULE}")
  }
}
