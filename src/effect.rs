use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  Fetch(Flow),
  OpenUrl { url: String },
  Persist { entry: Entry, text: String },
}
