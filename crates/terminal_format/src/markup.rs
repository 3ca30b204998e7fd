//! Inline colour markup
//!
//! Messages can embed `/name(content)/` directives to paint `content` with a
//! named style. Directives nest, parentheses inside the content are fine as
//! long as they balance, and the closing slash is optional. Malformed markup
//! is never an error: an unterminated directive simply runs to the end of the
//! input and an unknown name is painted gray.
//!
//! Nesting depth comes from the input, so both scanning and rendering keep
//! their own stacks instead of recursing.

use log::trace;

use crate::palette::Paint;

/// One piece of a scanned message, borrowing from the input.
///
/// Every `Open` is matched by a later `Close`; directives left open at the
/// end of the input are closed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied through unchanged
    Text(&'a str),

    /// Start of `/name(`
    Open(&'a str),

    /// The `)` (and optional `/`) ending the innermost open directive
    Close,
}

/// Split `input` into text runs and directive boundaries in a single pass
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    // Plain '(' still unmatched inside each open directive
    let mut open: Vec<usize> = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            // Only slice at '/', which is always a char boundary
            b'/' => {
                if let Some(name) = directive_name(&input[i..]) {
                    push_text(&mut tokens, &input[literal_start..i]);
                    tokens.push(Token::Open(name));
                    open.push(0);

                    // Skip "/name("
                    i += 1 + name.len() + 1;
                    literal_start = i;
                    continue;
                }
            }
            b'(' => {
                if let Some(depth) = open.last_mut() {
                    *depth += 1;
                }
            }
            b')' if open.last() == Some(&0) => {
                push_text(&mut tokens, &input[literal_start..i]);
                tokens.push(Token::Close);
                open.pop();

                i += 1;
                if bytes.get(i) == Some(&b'/') {
                    i += 1;
                }
                literal_start = i;
                continue;
            }
            b')' => {
                if let Some(depth) = open.last_mut() {
                    *depth -= 1;
                }
            }
            _ => {}
        }

        i += 1;
    }

    push_text(&mut tokens, &input[literal_start..]);
    tokens.extend(open.iter().map(|_| Token::Close));

    tokens
}

fn push_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
}

/// Name of the directive starting at the beginning of `rest`, if any.
///
/// A directive opens with `/`, a letter, any further letters, digits or
/// underscores, and then `(`.
fn directive_name(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'/') || !bytes.get(1).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }

    let len = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();

    match bytes.get(1 + len) {
        Some(b'(') => Some(&rest[1..1 + len]),
        _ => None,
    }
}

/// Expand every directive in `message` into styled text
pub fn parse_colors(message: &str) -> String {
    let tokens = tokenize(message);
    trace!("rendering {} markup tokens", tokens.len());
    render_styled(&tokens)
}

/// Plain text of `message` with the directive syntax removed
pub fn strip_markup(message: &str) -> String {
    tokenize(message)
        .into_iter()
        .filter_map(|token| match token {
            Token::Text(text) => Some(text),
            Token::Open(_) | Token::Close => None,
        })
        .collect()
}

fn render_styled(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    // Paint and content collected so far for each open directive
    let mut open: Vec<(Paint, String)> = Vec::new();

    for token in tokens {
        match *token {
            Token::Text(text) => current(&mut open, &mut out).push_str(text),
            Token::Open(name) => open.push((Paint::lookup(name), String::new())),
            Token::Close => {
                if let Some((paint, content)) = open.pop() {
                    let painted = paint.paint(&content);
                    current(&mut open, &mut out).push_str(&painted);
                }
            }
        }
    }

    out
}

fn current<'s>(open: &'s mut [(Paint, String)], out: &'s mut String) -> &'s mut String {
    match open.last_mut() {
        Some((_, content)) => content,
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::clear_colour;

    use Token::{Close, Open, Text};

    #[test]
    fn test_tokenize_plain_text() {
        assert_eq!(tokenize("no markup here"), vec![Text("no markup here")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_single_directive() {
        assert_eq!(
            tokenize("status: /green(ok)/ done"),
            vec![Text("status: "), Open("green"), Text("ok"), Close, Text(" done")]
        );
    }

    #[test]
    fn test_tokenize_nested_directives() {
        assert_eq!(
            tokenize("/red(a /blue(b)/ c)/"),
            vec![
                Open("red"),
                Text("a "),
                Open("blue"),
                Text("b"),
                Close,
                Text(" c"),
                Close,
            ]
        );
    }

    #[test]
    fn test_balanced_parens_in_content() {
        assert_eq!(
            tokenize("/cyan(f(x) = (1 + 2))/!"),
            vec![Open("cyan"), Text("f(x) = (1 + 2)"), Close, Text("!")]
        );
        assert_eq!(
            tokenize("/red(a (/blue(b)/) c)/"),
            vec![
                Open("red"),
                Text("a ("),
                Open("blue"),
                Text("b"),
                Close,
                Text(") c"),
                Close,
            ]
        );
    }

    #[test]
    fn test_stray_close_paren_outside_directive() {
        assert_eq!(tokenize("a) b)/"), vec![Text("a) b)/")]);
    }

    #[test]
    fn test_closing_slash_is_optional() {
        assert_eq!(
            tokenize("/red(a) b"),
            vec![Open("red"), Text("a"), Close, Text(" b")]
        );
    }

    #[test]
    fn test_unterminated_directive_runs_to_end() {
        assert_eq!(
            tokenize("x /red(abc"),
            vec![Text("x "), Open("red"), Text("abc"), Close]
        );
        assert_eq!(
            tokenize("/red(a /blue(b (c"),
            vec![Open("red"), Text("a "), Open("blue"), Text("b (c"), Close, Close]
        );
        assert_eq!(parse_colors("/red(abc"), "\x1b[31mabc\x1b[0m");
    }

    #[test]
    fn test_not_a_directive() {
        // Needs a letter right after the slash and an opening paren after the name
        assert_eq!(tokenize("a/b/c"), vec![Text("a/b/c")]);
        assert_eq!(tokenize("/1red(x)/"), vec![Text("/1red(x)/")]);
        assert_eq!(tokenize("/red (x)/"), vec![Text("/red (x)/")]);
        assert_eq!(tokenize("path /usr/bin"), vec![Text("path /usr/bin")]);
        assert_eq!(tokenize("trailing /"), vec![Text("trailing /")]);
    }

    #[test]
    fn test_name_with_digits_and_underscore() {
        assert_eq!(tokenize("/a_1(x)/"), vec![Open("a_1"), Text("x"), Close]);
    }

    #[test]
    fn test_deeply_nested_markup() {
        let open_only = "/red(".repeat(100_000);
        assert_eq!(strip_markup(&open_only), "");
        assert_eq!(parse_colors(&open_only), "");

        let tokens = tokenize(&open_only);
        assert_eq!(tokens.len(), 200_000);
        assert_eq!(tokens.last(), Some(&Close));

        let closed = format!("{}{}", "/blue(".repeat(100_000), ")/".repeat(100_000));
        assert_eq!(parse_colors(&closed), "");
        assert_eq!(tokenize(&closed).len(), 200_000);

        // Every level re-opens its style after each inner reset, so keep the
        // styled case shallow
        let styled = format!("{}x{}", "/blue(y ".repeat(200), ")/".repeat(200));
        assert_eq!(
            clear_colour(&parse_colors(&styled)),
            format!("{}x", "y ".repeat(200))
        );
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        assert_eq!(strip_markup("привет /red(мир)/ ✓"), "привет мир ✓");
        assert_eq!(
            parse_colors("/green(✓)/ готово"),
            "\x1b[32m✓\x1b[0m готово"
        );
    }

    #[test]
    fn test_parse_colors_nested() {
        let rendered = parse_colors("/red(a /blue(b)/ c)/");
        assert_eq!(rendered, "\x1b[31ma \x1b[34mb\x1b[0m\x1b[31m c\x1b[0m");
        assert_eq!(clear_colour(&rendered), "a b c");
    }

    #[test]
    fn test_unknown_colour_uses_fallback() {
        assert_eq!(parse_colors("/zzz(text)/"), Paint::FALLBACK.paint("text"));
    }

    #[test]
    fn test_empty_directive() {
        assert_eq!(parse_colors("a/red()/b"), "ab");
        assert_eq!(strip_markup("a/red()/b"), "ab");
    }

    #[test]
    fn test_strip_matches_rendered_text() {
        let messages = [
            "plain",
            "/yellow(warn)/ and /bold(/underline(both)/)/",
            "/red(a /blue(b /green(c)/)/ d)/ e",
            "/unknown(x) /cyan(f(1))/",
            "/red(open",
            "",
        ];

        for message in messages {
            assert_eq!(
                clear_colour(&parse_colors(message)),
                strip_markup(message),
                "mismatch for {:?}",
                message
            );
        }
    }
}
