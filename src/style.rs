//! The fixed catalog of comment styles.

use std::fmt;
use std::str::FromStr;

/// One horizontal band of a comment block: the left marker, the fill used
/// to pad out to the target width, and the right marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub left: &'static str,
    pub fill: &'static str,
    pub right: &'static str,
}

/// A complete comment decoration: top border, body framing, bottom border.
///
/// Fills must be a single character at render time; an empty top or bottom
/// fill omits that border row entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub top: Band,
    pub mid: Band,
    pub bot: Band,
}

/// Identifier for one of the built-in styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleId {
    /// C block comment banner: `/* ... */`.
    #[default]
    Block,
    /// Shell / Python: `# ... #`.
    Hash,
    /// SQL / Lua / Haskell: `-- ... --`.
    Dash,
    /// LaTeX / Erlang: `% ... %`.
    Percent,
}

impl StyleId {
    pub const ALL: [Self; 4] = [Self::Block, Self::Hash, Self::Dash, Self::Percent];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Hash => "hash",
            Self::Dash => "dash",
            Self::Percent => "percent",
        }
    }

    #[must_use]
    pub const fn style(self) -> CommentStyle {
        match self {
            Self::Block => CommentStyle {
                top: Band { left: "/*", fill: "*", right: "**" },
                mid: Band { left: "* ", fill: " ", right: " *" },
                bot: Band { left: "**", fill: "*", right: "*/" },
            },
            Self::Hash => CommentStyle {
                top: Band { left: "#", fill: "#", right: "#" },
                mid: Band { left: "# ", fill: " ", right: " #" },
                bot: Band { left: "#", fill: "#", right: "#" },
            },
            Self::Dash => CommentStyle {
                top: Band { left: "--", fill: "-", right: "--" },
                mid: Band { left: "-- ", fill: " ", right: " --" },
                bot: Band { left: "--", fill: "-", right: "--" },
            },
            Self::Percent => CommentStyle {
                top: Band { left: "%", fill: "%", right: "%" },
                mid: Band { left: "% ", fill: " ", right: " %" },
                bot: Band { left: "%", fill: "%", right: "%" },
            },
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style {0:?} (expected one of: block, hash, dash, percent)")]
pub struct UnknownStyle(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for id in StyleId::ALL {
            assert_eq!(id.name().parse::<StyleId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "banner".parse::<StyleId>(),
            Err(UnknownStyle("banner".to_string()))
        );
    }

    #[test]
    fn test_fills_are_single_char() {
        for id in StyleId::ALL {
            let style = id.style();
            for band in [style.top, style.mid, style.bot] {
                assert_eq!(band.fill.len(), 1, "{id}: fill {:?}", band.fill);
            }
        }
    }

    #[test]
    fn test_block_markers() {
        let style = StyleId::Block.style();
        assert_eq!((style.top.left, style.top.fill, style.top.right), ("/*", "*", "**"));
        assert_eq!((style.mid.left, style.mid.fill, style.mid.right), ("* ", " ", " *"));
        assert_eq!((style.bot.left, style.bot.fill, style.bot.right), ("**", "*", "*/"));
    }
}
