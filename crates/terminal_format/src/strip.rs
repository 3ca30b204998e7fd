//! Removal of terminal escape sequences
//!
//! Styled output is made of ANSI escape sequences, whichever library produced
//! them. Stripping them gives back the text a reader would see on screen.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

const ESC: char = '\x1b';
const BEL: char = '\x07';
/// Single-character form of `ESC [`
const CSI: char = '\u{9b}';

/// Strip ANSI escape codes from `text`
///
/// Handles:
/// - CSI sequences: `\x1b[...m` (and the 8-bit `\u{9b}` introducer)
/// - OSC sequences: `\x1b]...` ended by BEL or `\x1b\`
/// - Two-character Fe sequences (`\x1b` followed by `@` to `_`)
/// - Stray `\x1b` characters
///
/// Returns `Cow::Borrowed` when there is nothing to strip.
pub fn clear_colour(text: &str) -> Cow<'_, str> {
    if !text.contains([ESC, CSI]) {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => match chars.peek() {
                Some('[') => {
                    chars.next();
                    skip_csi(&mut chars);
                }
                Some(']') => {
                    chars.next();
                    skip_osc(&mut chars);
                }
                Some(&next) if ('\x40'..='\x5f').contains(&next) => {
                    chars.next();
                }
                // Lone ESC, drop it and keep what follows
                _ => {}
            },
            CSI => skip_csi(&mut chars),
            _ => output.push(c),
        }
    }

    Cow::Owned(output)
}

/// Skip parameters and intermediates up to and including the final byte
fn skip_csi(chars: &mut Peekable<Chars<'_>>) {
    for c in chars.by_ref() {
        if ('\x40'..='\x7e').contains(&c) {
            break;
        }
    }
}

fn skip_osc(chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c == BEL {
            break;
        }
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            break;
        }
    }
}
