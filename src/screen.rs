use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Screen {
  pub(crate) body: Vec<String>,
  pub(crate) message: String,
  pub(crate) pending: bool,
  pub(crate) position: String,
  pub(crate) selected: Option<usize>,
  pub(crate) title: String,
}

impl Screen {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let mut header = vec![
      Span::styled(
        HEADER,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
      ),
      Span::raw(" "),
      Span::styled(self.title.clone(), Style::default().fg(Color::White)),
    ];

    if !self.position.is_empty() {
      header.push(Span::styled(
        format!(" [{}]", self.position),
        Style::default().fg(Color::DarkGray),
      ));
    }

    if self.pending {
      header.push(Span::styled(
        " (esc to abort)",
        Style::default().fg(Color::DarkGray),
      ));
    }

    frame.render_widget(
      Paragraph::new(Line::from(header))
        .block(Block::default().borders(Borders::BOTTOM)),
      layout[0],
    );

    let items = self
      .body
      .iter()
      .map(|line| {
        ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::raw(line.clone()),
        ]))
      })
      .collect::<Vec<_>>();

    let mut list_state = ListState::default().with_selected(self.selected);

    let list = List::new(items)
      .highlight_style(
        Style::default()
          .fg(Color::Green)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("→");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    let status =
      Paragraph::new(self.message.clone()).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);
  }
}
