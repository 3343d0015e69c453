//! The small slice of markdown the page uses: bullets (nested by two-space
//! indents), `**bold**` and `[text](url)` links.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Link { text: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdLine {
    /// Nesting depth, 0 for top-level bullets and paragraphs.
    pub indent: usize,
    pub bullet: bool,
    pub spans: Vec<Span>,
}

impl MdLine {
    /// Text with markup removed.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Plain(text) | Span::Bold(text) | Span::Link { text, .. } => text.as_str(),
            })
            .collect()
    }
}

pub fn parse(source: &str) -> Vec<MdLine> {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> MdLine {
    let leading = line.len() - line.trim_start_matches(' ').len();
    let rest = line.trim_start_matches(' ');

    match rest.strip_prefix("- ").or_else(|| rest.strip_prefix("* ")) {
        Some(item) => MdLine {
            indent: leading / 2,
            bullet: true,
            spans: parse_inline(item),
        },
        None => MdLine {
            indent: 0,
            bullet: false,
            spans: parse_inline(rest),
        },
    }
}

pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**")
            && let Some(end) = after.find("**")
            && end > 0
            && let (Some(bold), Some(tail)) = (after.get(..end), after.get(end + 2..))
        {
            flush(&mut plain, &mut spans);
            spans.push(Span::Bold(bold.to_owned()));
            rest = tail;
            continue;
        }

        if let Some((link, consumed)) = rest.strip_prefix('[').and_then(parse_link) {
            flush(&mut plain, &mut spans);
            spans.push(link);
            rest = rest.get(1 + consumed..).unwrap_or_default();
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            plain.push(c);
        }
        rest = chars.as_str();
    }

    flush(&mut plain, &mut spans);
    spans
}

/// Parses `text](url)` (the part after `[`), returning the span and the
/// number of bytes consumed.
fn parse_link(after_bracket: &str) -> Option<(Span, usize)> {
    let close = after_bracket.find("](")?;
    let url_start = close + 2;
    let url_len = after_bracket.get(url_start..)?.find(')')?;
    let text = after_bracket.get(..close)?;
    let url = after_bracket.get(url_start..url_start + url_len)?;
    if text.is_empty() || url.is_empty() || text.contains('[') {
        return None;
    }
    Some((
        Span::Link {
            text: text.to_owned(),
            url: url.to_owned(),
        },
        url_start + url_len + 1,
    ))
}

fn flush(plain: &mut String, spans: &mut Vec<Span>) {
    if !plain.is_empty() {
        spans.push(Span::Plain(std::mem::take(plain)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_and_nesting() {
        let lines = parse("- **Lead:** top\n  - nested item\nParagraph");
        assert_eq!(lines.len(), 3);

        let first = lines.first().expect("first line");
        assert!(first.bullet);
        assert_eq!(first.indent, 0);
        assert_eq!(
            first.spans,
            vec![
                Span::Bold("Lead:".to_owned()),
                Span::Plain(" top".to_owned())
            ]
        );

        let nested = lines.get(1).expect("nested line");
        assert!(nested.bullet);
        assert_eq!(nested.indent, 1);
        assert_eq!(nested.plain_text(), "nested item");

        let para = lines.get(2).expect("paragraph");
        assert!(!para.bullet);
    }

    #[test]
    fn test_link() {
        let spans = parse_inline("[Connect with me on LinkedIn](https://www.linkedin.com/in/bradolton/)");
        assert_eq!(
            spans,
            vec![Span::Link {
                text: "Connect with me on LinkedIn".to_owned(),
                url: "https://www.linkedin.com/in/bradolton/".to_owned(),
            }]
        );
    }

    #[test]
    fn test_unclosed_markup_is_literal() {
        assert_eq!(
            parse_inline("a **b [c](d"),
            vec![Span::Plain("a **b [c](d".to_owned())]
        );
    }

    #[test]
    fn test_text_around_link() {
        let spans = parse_inline("see [docs](http://x) now");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans.first(), Some(&Span::Plain("see ".to_owned())));
        assert_eq!(spans.get(2), Some(&Span::Plain(" now".to_owned())));
    }
}
