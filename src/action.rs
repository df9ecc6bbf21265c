#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  Back,
  LoadNextPage,
  LoadPreviousPage,
  MoveEnd,
  MoveStart,
  None,
  OpenInBrowser,
  OpenThread,
  PageDown,
  PageUp,
  Quit,
  ReloadPage,
  SelectDown,
  SelectUp,
}
