use super::{action::Action, *};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mode {
  #[default]
  Browse,
  Read,
}

impl Mode {
  pub(crate) fn action(self, key: KeyEvent) -> Action {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match (self, key.code) {
      (_, KeyCode::Char('q' | 'Q')) if !control => Action::Quit,
      (_, KeyCode::Char('o' | 'O')) if !control => Action::OpenInBrowser,
      (_, KeyCode::Up | KeyCode::Char('k')) => Action::SelectUp,
      (_, KeyCode::Down | KeyCode::Char('j')) => Action::SelectDown,
      (_, KeyCode::PageUp) => Action::PageUp,
      (_, KeyCode::PageDown | KeyCode::Char(' ')) => Action::PageDown,
      (_, KeyCode::Char('u')) if control => Action::PageUp,
      (_, KeyCode::Char('d')) if control => Action::PageDown,
      (_, KeyCode::Home | KeyCode::Char('g')) => Action::MoveStart,
      (_, KeyCode::End | KeyCode::Char('G')) => Action::MoveEnd,
      (Mode::Browse, KeyCode::Enter | KeyCode::Char('l')) => Action::OpenThread,
      (Mode::Browse, KeyCode::Char('n')) => Action::LoadNextPage,
      (Mode::Browse, KeyCode::Char('p')) => Action::LoadPreviousPage,
      (Mode::Browse, KeyCode::Char('r')) => Action::ReloadPage,
      (Mode::Read, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h')) => {
        Action::Back
      }
      _ => Action::None,
    }
  }

  pub(crate) fn status(self) -> &'static str {
    match self {
      Mode::Browse => BROWSE_STATUS,
      Mode::Read => READ_STATUS,
    }
  }
}
