//! Box shorthand expansion
//!
//! [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
//! [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)

use super::{Spacing, SpacingBox};
use crate::context::ResolutionContext;

/// CSS-wide and box keywords that never make a valid spacing token.
const KEYWORDS: [&str; 3] = ["auto", "inherit", "initial"];

/// Split a shorthand into component values.
///
/// Splits on whitespace outside parentheses only, so
/// `calc(1rem + 5px) 20px` is two tokens, not five.
#[must_use]
pub fn split_values(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for c in s.trim().chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if c.is_ascii_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Expand a margin/padding shorthand into four sides.
///
/// "If there is only one component value, it applies to all sides.
/// If there are two values, the top and bottom margins are set to the
/// first value and the right and left margins are set to the second.
/// If there are three values, the top is set to the first value, the
/// left and right are set to the second, and the bottom is set to the
/// third. If there are four values, they apply to the top, right,
/// bottom, and left, respectively."
///
/// All or nothing: a keyword token or any token that is not a valid
/// [`Spacing`] makes the whole shorthand `None`, wherever it sits. Only
/// once every token is valid are the first four used.
#[must_use]
pub fn parse_shorthand(s: &str, ctx: &ResolutionContext) -> Option<SpacingBox> {
    // STEP 1: Parse every token. One failure fails the shorthand.
    let values = split_values(s)
        .iter()
        .map(|token| parse_token(token, ctx))
        .collect::<Option<Vec<Spacing>>>()?;

    // STEP 2: Apply the expansion rules to the first four.
    match &values[..values.len().min(4)] {
        // RULE 1-VALUE: "it applies to all sides."
        &[all] => Some(SpacingBox::uniform(all)),
        // RULE 2-VALUE: top/bottom, then right/left.
        &[vertical, horizontal] => Some(SpacingBox::new(vertical, horizontal, vertical, horizontal)),
        // RULE 3-VALUE: top, right/left, bottom.
        &[top, horizontal, bottom] => Some(SpacingBox::new(top, horizontal, bottom, horizontal)),
        // RULE 4-VALUE: "top, right, bottom, and left, respectively."
        &[top, right, bottom, left] => Some(SpacingBox::new(top, right, bottom, left)),
        _ => None,
    }
}

fn parse_token(token: &str, ctx: &ResolutionContext) -> Option<Spacing> {
    if KEYWORDS.contains(&token) {
        return None;
    }
    Spacing::parse(token, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fifth_token_fails() {
        let ctx = ResolutionContext::DEFAULT;
        assert_eq!(parse_shorthand("1px 2px 3px 4px auto", &ctx), None);
        assert_eq!(parse_shorthand("1px 2px 3px 4px garbage", &ctx), None);
    }

    #[test]
    fn test_split_keeps_calc_together() {
        assert_eq!(
            split_values("calc(1rem + 5px) 20px"),
            vec!["calc(1rem + 5px)", "20px"]
        );
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(split_values("  10px   20px\t30px "), vec!["10px", "20px", "30px"]);
        assert!(split_values("   ").is_empty());
    }

    #[test]
    fn test_split_unbalanced_close_paren() {
        // A stray ')' does not drive the depth negative.
        assert_eq!(split_values("a) b"), vec!["a)", "b"]);
    }

    #[test]
    fn test_split_unclosed_paren_is_one_token() {
        assert_eq!(split_values("calc(1px + 2px 3px"), vec!["calc(1px + 2px 3px"]);
    }
}
