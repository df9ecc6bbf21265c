use super::*;

pub(crate) const INDENT_UNIT: usize = 40;

const NO_TEXT: &str = "(no text)";

fn parse_comment(post: ElementRef) -> Result<Comment, Error> {
  let body = match select_one(post, "span.comment")? {
    Some(container) => {
      let noise = select_one(container, r#"font[size="1"]"#)?;
      text_without(container, noise)
    }
    None => NO_TEXT.to_string(),
  };

  let width = attr(select_one(post, "img")?, "width")
    .trim()
    .parse::<usize>()
    .unwrap_or(0);

  Ok(Comment {
    author: select_one(post, "span.comhead a")?
      .map(|link| text(link).trim().to_string())
      .unwrap_or_default(),
    body,
    depth: width / INDENT_UNIT,
  })
}

fn parse_original_post(post: ElementRef) -> Result<OriginalPost, Error> {
  let title_link = select_one(post, "td.title a")?;

  let rows = select_all(post, "tr")?;

  let body = match rows.get(3) {
    Some(row) => select_all(*row, "td")?
      .get(1)
      .map(|cell| text(*cell))
      .unwrap_or_default(),
    None => String::new(),
  };

  Ok(OriginalPost {
    author: select_one(post, "td.subtext a")?
      .map(|link| text(link).trim().to_string())
      .unwrap_or_default(),
    body,
    link: attr(title_link, "href").trim().to_string(),
    title: title_link.map(text).unwrap_or_default(),
  })
}

pub(crate) fn parse_thread(markup: &str) -> Result<Thread, Error> {
  let document = Document::parse(markup);

  let posts = select_all(document.root(), "table")?
    .into_iter()
    .filter(|table| has_only_attr(*table, "border", "0"))
    .collect::<Vec<_>>();

  let Some(first) = posts.first().copied() else {
    return Err(Error::StructuralMismatch(
      "no posts found, probably not an item page".into(),
    ));
  };

  let post = parse_original_post(first)?;

  let comments = posts
    .iter()
    .skip(2)
    .map(|post| parse_comment(*post))
    .collect::<Result<Vec<_>, _>>()?;

  let thread = Thread { comments, post };

  for index in thread.depth_anomalies() {
    warn!(
      index,
      depth = thread.comments[index].depth,
      "comment is nested deeper than any preceding comment"
    );
  }

  Ok(thread)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment_table(author: &str, width: usize, body: Option<&str>) -> String {
    let body = body.map_or(String::new(), |body| {
      format!(
        r##"<span class="comment"><font color="#000000">{body}</font><p><font size="1"><u><a href="reply?id=1">reply</a></u></font></p></span>"##
      )
    });

    format!(
      r#"<tr><td><table border="0"><tr><td><img src="s.gif" height="1" width="{width}"></td><td valign="top"><center><a id="up_1"><img src="grayarrow.gif" width="10" height="10"></a></center></td><td class="default"><div><span class="comhead"><a href="user?id={author}">{author}</a> 1 hour ago | <a href="item?id=2">link</a></span></div><br>{body}</td></tr></table></td></tr>"#
    )
  }

  fn item_page(body_row: &str, comments: &str) -> String {
    format!(
      r#"
      <html><body><center>
      <table border="0" cellpadding="0" cellspacing="0" width="85%"><tr><td>
      <table border="0">
        <tr><td class="title"><a href=" https://example.com/story ">A story</a><span class="comhead"> (example.com) </span></td></tr>
        <tr><td class="subtext"><span id="score_1">5 points</span> by <a href="user?id=op">op</a> <a href="item?id=1">2 hours ago</a></td></tr>
        <tr style="height:2px"></tr>
        {body_row}
      </table>
      <br><br>
      <table border="0">{comments}</table>
      </td></tr></table>
      </center></body></html>
      "#
    )
  }

  #[test]
  fn parses_the_original_post() {
    let markup = item_page(r#"<tr><td></td><td>Post body</td></tr>"#, "");

    let thread = parse_thread(&markup).unwrap();

    assert_eq!(
      thread.post,
      OriginalPost {
        author: "op".into(),
        body: "Post body".into(),
        link: "https://example.com/story".into(),
        title: "A story".into(),
      }
    );

    assert!(thread.comments.is_empty());
  }

  #[test]
  fn missing_post_body_is_empty() {
    let thread = parse_thread(&item_page("", "")).unwrap();

    assert_eq!(thread.post.body, "");
  }

  #[test]
  fn comments_carry_author_body_and_depth() {
    let comments = format!(
      "{}{}{}",
      comment_table("alice", 0, Some("First comment")),
      comment_table("bob", 40, Some("A reply")),
      comment_table("carol", 120, None),
    );

    let thread = parse_thread(&item_page("", &comments)).unwrap();

    assert_eq!(
      thread.comments,
      vec![
        Comment {
          author: "alice".into(),
          body: "First comment".into(),
          depth: 0,
        },
        Comment {
          author: "bob".into(),
          body: "A reply".into(),
          depth: 1,
        },
        Comment {
          author: "carol".into(),
          body: NO_TEXT.into(),
          depth: 3,
        },
      ]
    );
  }

  #[test]
  fn depth_is_the_spacer_width_divided_by_the_indent_unit() {
    for width in [0, 39, 40, 79, 80, 200] {
      let markup = item_page("", &comment_table("dan", width, Some("x")));

      let thread = parse_thread(&markup).unwrap();

      assert_eq!(thread.comments[0].depth, width / INDENT_UNIT);
    }
  }

  #[test]
  fn unparsable_spacer_width_means_top_level() {
    let markup = item_page("", &comment_table("erin", 40, Some("x")))
      .replace(r#"width="40""#, r#"width="wide""#);

    let thread = parse_thread(&markup).unwrap();

    assert_eq!(thread.comments[0].depth, 0);
  }

  #[test]
  fn pages_without_posts_do_not_match() {
    let error = parse_thread("<html><body><p>oops</p></body></html>").unwrap_err();

    assert!(matches!(error, Error::StructuralMismatch(_)));
  }
}
