use super::*;

const NO_COMMENTS: &str = "(no comments)";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Thread {
  pub(crate) comments: Vec<Comment>,
  pub(crate) post: OriginalPost,
}

impl Thread {
  pub(crate) fn depth_anomalies(&self) -> Vec<usize> {
    (0..self.comments.len())
      .filter(|&index| {
        self.comments[index].depth > 0 && self.parent_of(index).is_none()
      })
      .collect()
  }

  pub(crate) fn parent_of(&self, index: usize) -> Option<usize> {
    let depth = self.comments.get(index)?.depth.checked_sub(1)?;

    for (candidate, comment) in self.comments[..index].iter().enumerate().rev() {
      if comment.depth == depth {
        return Some(candidate);
      }

      if comment.depth < depth {
        return None;
      }
    }

    None
  }

  pub(crate) fn render_lines(&self) -> Vec<String> {
    self.to_string().split('\n').map(str::to_string).collect()
  }
}

impl Display for Thread {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "{}", self.post)?;

    if self.comments.is_empty() {
      writeln!(f, "{NO_COMMENTS}")?;
    }

    for comment in &self.comments {
      writeln!(f, "{comment}")?;
    }

    Ok(())
  }
}
