use std::fmt;

use super::Params;

/// Anything that can turn a set of parameters into a URI path.
pub trait Route: fmt::Debug + Send + Sync {
    fn uri(&self, params: &Params) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unclosed `<` at byte {0}")]
    UnclosedPlaceholder(usize),
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),
    #[error("unmatched `)` at byte {0}")]
    UnmatchedClose(usize),
    #[error("{0} optional group(s) left open")]
    UnclosedGroup(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Optional(Vec<Segment>),
}

/// Route pattern such as `blog(/<year>(/page/<page>))`.
///
/// `<key>` is replaced by the percent-encoded parameter value. A `( ... )`
/// group is only written when it mentions at least one parameter and every
/// parameter it mentions has a value. Required placeholders without a value
/// render empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    pattern: String,
    segments: Vec<Segment>,
}

impl UriTemplate {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let mut stack: Vec<Vec<Segment>> = vec![Vec::new()];
        let mut literal = String::new();
        let mut chars = pattern.char_indices();

        while let Some((at, ch)) = chars.next() {
            match ch {
                '<' => {
                    let mut key = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        if next == '>' {
                            closed = true;
                            break;
                        }
                        key.push(next);
                    }
                    if !closed {
                        return Err(RouteError::UnclosedPlaceholder(at));
                    }
                    if key.is_empty() {
                        return Err(RouteError::EmptyPlaceholder(at));
                    }
                    flush_literal(&mut literal, &mut stack);
                    push_segment(&mut stack, Segment::Param(key));
                }
                '(' => {
                    flush_literal(&mut literal, &mut stack);
                    stack.push(Vec::new());
                }
                ')' => {
                    if stack.len() == 1 {
                        return Err(RouteError::UnmatchedClose(at));
                    }
                    flush_literal(&mut literal, &mut stack);
                    let group = stack.pop().unwrap_or_default();
                    push_segment(&mut stack, Segment::Optional(group));
                }
                other => literal.push(other),
            }
        }

        flush_literal(&mut literal, &mut stack);
        if stack.len() > 1 {
            return Err(RouteError::UnclosedGroup(stack.len() - 1));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments: stack.pop().unwrap_or_default(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn flush_literal(literal: &mut String, stack: &mut [Vec<Segment>]) {
    if !literal.is_empty() {
        push_segment(stack, Segment::Literal(std::mem::take(literal)));
    }
}

fn push_segment(stack: &mut [Vec<Segment>], segment: Segment) {
    if let Some(current) = stack.last_mut() {
        current.push(segment);
    }
}

struct Rendered {
    text: String,
    provided: bool,
}

/// `None` means an optional group hit a missing parameter.
fn render(segments: &[Segment], params: &Params, optional: bool) -> Option<Rendered> {
    let mut rendered = Rendered {
        text: String::new(),
        provided: false,
    };

    for segment in segments {
        match segment {
            Segment::Literal(text) => rendered.text.push_str(text),
            Segment::Param(key) => match params.get(key) {
                Some(value) => {
                    rendered.text.push_str(&urlencoding::encode(value));
                    rendered.provided = true;
                }
                None if optional => return None,
                None => {}
            },
            Segment::Optional(inner) => {
                if let Some(group) = render(inner, params, true).filter(|group| group.provided) {
                    rendered.text.push_str(&group.text);
                    rendered.provided = true;
                }
            }
        }
    }

    Some(rendered)
}

impl Route for UriTemplate {
    fn uri(&self, params: &Params) -> String {
        render(&self.segments, params, false)
            .map(|rendered| rendered.text.trim_matches('/').to_string())
            .unwrap_or_default()
    }
}
