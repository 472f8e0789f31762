//! Integration tests for box shorthand tokenization and expansion.

use plinth_values::{ResolutionContext, Spacing, SpacingBox, parse_shorthand, split_values};

/// Sides as pixels, top/right/bottom/left.
fn sides(s: &str, ctx: &ResolutionContext) -> Option<[f64; 4]> {
    parse_shorthand(s, ctx).map(|b| {
        [
            b.top.to_pixels(),
            b.right.to_pixels(),
            b.bottom.to_pixels(),
            b.left.to_pixels(),
        ]
    })
}

#[test]
fn test_split_values_is_paren_aware() {
    assert_eq!(
        split_values("calc(1rem + 5px) 20px"),
        vec!["calc(1rem + 5px)".to_string(), "20px".to_string()]
    );
    assert_eq!(
        split_values("1px calc(2px - 1px) 3px"),
        vec!["1px", "calc(2px - 1px)", "3px"]
    );
    assert_eq!(split_values("10px"), vec!["10px"]);
    assert!(split_values("").is_empty());
}

#[test]
fn test_one_value() {
    let ctx = ResolutionContext::default();
    assert_eq!(sides("10px", &ctx), Some([10.0, 10.0, 10.0, 10.0]));
}

#[test]
fn test_two_values() {
    // "the top and bottom margins are set to the first value and the right
    // and left margins are set to the second."
    let ctx = ResolutionContext::default();
    assert_eq!(sides("10px 20px", &ctx), Some([10.0, 20.0, 10.0, 20.0]));
}

#[test]
fn test_three_values() {
    // "the top is set to the first value, the left and right are set to the
    // second, and the bottom is set to the third."
    let ctx = ResolutionContext::default();
    assert_eq!(sides("10px 20px 30px", &ctx), Some([10.0, 20.0, 30.0, 20.0]));
}

#[test]
fn test_four_values() {
    let ctx = ResolutionContext::default();
    assert_eq!(
        sides("10px 20px 30px 40px", &ctx),
        Some([10.0, 20.0, 30.0, 40.0])
    );
}

#[test]
fn test_extra_values_ignored() {
    let ctx = ResolutionContext::default();
    assert_eq!(
        sides("1px 2px 3px 4px 5px 6px", &ctx),
        Some([1.0, 2.0, 3.0, 4.0])
    );
}

#[test]
fn test_extra_values_still_validated() {
    // The first four are fine, but any bad token fails the whole shorthand.
    let ctx = ResolutionContext::default();
    assert_eq!(sides("1px 2px 3px 4px auto", &ctx), None);
    assert_eq!(sides("1px 2px 3px 4px garbage", &ctx), None);
    assert_eq!(sides("1px 2px 3px 4px 5px inherit", &ctx), None);
}

#[test]
fn test_mixed_units_with_context() {
    let ctx = ResolutionContext::DEFAULT
        .with_font_size(20.0)
        .with_viewport(1000.0, 1080.0);
    assert_eq!(
        sides("5px 1rem 2em 5vw", &ctx),
        Some([5.0, 20.0, 40.0, 50.0])
    );
}

#[test]
fn test_calc_tokens() {
    let ctx = ResolutionContext::default();
    assert_eq!(
        sides("calc(1rem + 5px) 20px", &ctx),
        Some([21.0, 20.0, 21.0, 20.0])
    );
}

#[test]
fn test_bare_numbers_and_negatives() {
    let ctx = ResolutionContext::default();
    assert_eq!(sides("8 -4px", &ctx), Some([8.0, 0.0, 8.0, 0.0]));
}

#[test]
fn test_all_or_nothing() {
    let ctx = ResolutionContext::default();
    assert_eq!(parse_shorthand("auto", &ctx), None);
    assert_eq!(parse_shorthand("10px auto", &ctx), None);
    assert_eq!(parse_shorthand("inherit", &ctx), None);
    assert_eq!(parse_shorthand("10px 20px initial", &ctx), None);
    assert_eq!(parse_shorthand("10px foo", &ctx), None);
    assert_eq!(parse_shorthand("10px 5%", &ctx), None);
    assert_eq!(parse_shorthand("calc(1px * 2) 3px", &ctx), None);
    assert_eq!(parse_shorthand("", &ctx), None);
    assert_eq!(parse_shorthand("   ", &ctx), None);
}

#[test]
fn test_spacing_box_helpers() {
    let ctx = ResolutionContext::default();
    let b = Spacing::parse_shorthand("1px 2px 3px 4px", &ctx).unwrap();
    assert_eq!(b.horizontal(), 6.0);
    assert_eq!(b.vertical(), 4.0);
    assert_eq!(SpacingBox::parse("1px 2px 3px 4px", &ctx), Some(b));

    let uniform = SpacingBox::uniform(Spacing::new(5.0));
    assert_eq!("5px".parse::<SpacingBox>(), Ok(uniform));
    assert!("auto".parse::<SpacingBox>().is_err());
}
