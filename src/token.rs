//! Whitespace-run tokenizer.

/// Split a line into maximal runs of whitespace and non-whitespace
/// characters, in order.
///
/// Concatenating the returned tokens reproduces the input exactly; every
/// token is non-empty and homogeneous (all whitespace or none at all).
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_whitespace = false;

    for ch in line.chars() {
        if ch.is_whitespace() != in_whitespace && !buf.is_empty() {
            tokens.push(std::mem::take(&mut buf));
        }
        in_whitespace = ch.is_whitespace();
        buf.push(ch);
    }
    if !buf.is_empty() {
        tokens.push(buf);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_alternating_runs() {
        assert_eq!(
            tokenize("  hello  world "),
            vec!["  ", "hello", "  ", "world", " "]
        );
    }

    #[test]
    fn test_single_run() {
        assert_eq!(tokenize("hello"), vec!["hello"]);
        assert_eq!(tokenize("   "), vec!["   "]);
    }

    #[test]
    fn test_concat_round_trip() {
        for s in [
            "",
            "a",
            " a ",
            "one  two\tthree ",
            "\t\t",
            "a b c d e",
            "héllo wörld",
            "α β\u{a0}γ",
            "日本 語",
        ] {
            assert_eq!(tokenize(s).concat(), s);
        }
    }

    #[test]
    fn test_tokens_homogeneous() {
        for token in tokenize(" mixed \t content  here") {
            let all_ws = token.chars().all(char::is_whitespace);
            let no_ws = !token.chars().any(char::is_whitespace);
            assert!(all_ws || no_ws, "mixed token: {token:?}");
            assert!(!token.is_empty());
        }
    }
}
