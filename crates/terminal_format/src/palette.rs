use ansi_term::{Colour, Style};
use strum_macros::EnumString;

/// Escape sequence every non-plain style ends with
pub const RESET: &str = "\x1b[0m";

/// Named styles that can be used in `/name(...)/` directives.
///
/// Names follow the camelCase convention (`redBright`, `bgCyan`, ...).
/// Anything not listed here is painted with [`Paint::FALLBACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Paint {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[strum(serialize = "gray", serialize = "grey", serialize = "blackBright")]
    Gray,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    #[strum(serialize = "bgGray", serialize = "bgGrey", serialize = "bgBlackBright")]
    BgGray,
    BgRedBright,
    BgGreenBright,
    BgYellowBright,
    BgBlueBright,
    BgMagentaBright,
    BgCyanBright,
    BgWhiteBright,

    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Overline,
    Inverse,
    Hidden,
    Strikethrough,
    Visible,
}

impl Paint {
    /// Style used for unknown names and for debug blocks
    pub const FALLBACK: Paint = Paint::Gray;

    /// Map a directive name to its paint, falling back to gray
    pub fn lookup(name: &str) -> Paint {
        name.parse::<Paint>().unwrap_or(Self::FALLBACK)
    }

    fn sgr(self) -> Sgr {
        match self {
            Paint::Black => Sgr::Ansi(Colour::Black.normal()),
            Paint::Red => Sgr::Ansi(Colour::Red.normal()),
            Paint::Green => Sgr::Ansi(Colour::Green.normal()),
            Paint::Yellow => Sgr::Ansi(Colour::Yellow.normal()),
            Paint::Blue => Sgr::Ansi(Colour::Blue.normal()),
            Paint::Magenta => Sgr::Ansi(Colour::Purple.normal()),
            Paint::Cyan => Sgr::Ansi(Colour::Cyan.normal()),
            Paint::White => Sgr::Ansi(Colour::White.normal()),

            // ansi_term only reaches the bright colours through the 256-colour
            // palette, so the 16-colour codes are written out directly
            Paint::Gray => Sgr::Code(90),
            Paint::RedBright => Sgr::Code(91),
            Paint::GreenBright => Sgr::Code(92),
            Paint::YellowBright => Sgr::Code(93),
            Paint::BlueBright => Sgr::Code(94),
            Paint::MagentaBright => Sgr::Code(95),
            Paint::CyanBright => Sgr::Code(96),
            Paint::WhiteBright => Sgr::Code(97),

            Paint::BgBlack => Sgr::Ansi(Style::new().on(Colour::Black)),
            Paint::BgRed => Sgr::Ansi(Style::new().on(Colour::Red)),
            Paint::BgGreen => Sgr::Ansi(Style::new().on(Colour::Green)),
            Paint::BgYellow => Sgr::Ansi(Style::new().on(Colour::Yellow)),
            Paint::BgBlue => Sgr::Ansi(Style::new().on(Colour::Blue)),
            Paint::BgMagenta => Sgr::Ansi(Style::new().on(Colour::Purple)),
            Paint::BgCyan => Sgr::Ansi(Style::new().on(Colour::Cyan)),
            Paint::BgWhite => Sgr::Ansi(Style::new().on(Colour::White)),
            Paint::BgGray => Sgr::Code(100),
            Paint::BgRedBright => Sgr::Code(101),
            Paint::BgGreenBright => Sgr::Code(102),
            Paint::BgYellowBright => Sgr::Code(103),
            Paint::BgBlueBright => Sgr::Code(104),
            Paint::BgMagentaBright => Sgr::Code(105),
            Paint::BgCyanBright => Sgr::Code(106),
            Paint::BgWhiteBright => Sgr::Code(107),

            Paint::Reset => Sgr::Code(0),
            Paint::Bold => Sgr::Ansi(Style::new().bold()),
            Paint::Dim => Sgr::Ansi(Style::new().dimmed()),
            Paint::Italic => Sgr::Ansi(Style::new().italic()),
            Paint::Underline => Sgr::Ansi(Style::new().underline()),
            Paint::Overline => Sgr::Code(53),
            Paint::Inverse => Sgr::Ansi(Style::new().reverse()),
            Paint::Hidden => Sgr::Ansi(Style::new().hidden()),
            Paint::Strikethrough => Sgr::Ansi(Style::new().strikethrough()),
            Paint::Visible => Sgr::Plain,
        }
    }

    /// Escape sequence that opens this style
    pub fn prefix(self) -> String {
        match self.sgr() {
            Sgr::Ansi(style) => style.prefix().to_string(),
            Sgr::Code(code) => format!("\x1b[{}m", code),
            Sgr::Plain => String::new(),
        }
    }

    /// Escape sequence that closes this style
    pub fn suffix(self) -> &'static str {
        match self.sgr() {
            Sgr::Plain => "",
            Sgr::Ansi(_) | Sgr::Code(_) => RESET,
        }
    }

    /// Wrap `text` in this style.
    ///
    /// `text` may already contain styled spans. Every reset inside it is
    /// followed by this style's prefix again, so the text after a nested
    /// span keeps the outer style. Line breaks close the style and reopen
    /// it on the next line.
    pub fn paint(self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let prefix = self.prefix();
        if prefix.is_empty() {
            return text.to_string();
        }
        let suffix = self.suffix();

        let reopened = text.replace(RESET, &format!("{}{}", RESET, prefix));
        let body = if reopened.contains('\n') {
            break_lines(&reopened, &prefix, suffix)
        } else {
            reopened
        };

        format!("{}{}{}", prefix, body, suffix)
    }
}

enum Sgr {
    Ansi(Style),
    Code(u8),
    /// No escape codes at all
    Plain,
}

/// Close the style before each line break and reopen it after
fn break_lines(text: &str, prefix: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len() + suffix.len());
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        if lines.peek().is_none() {
            out.push_str(line);
            break;
        }

        match line.strip_suffix('\r') {
            Some(line) => {
                out.push_str(line);
                out.push_str(suffix);
                out.push_str("\r\n");
            }
            None => {
                out.push_str(line);
                out.push_str(suffix);
                out.push('\n');
            }
        }
        out.push_str(prefix);
    }

    out
}
