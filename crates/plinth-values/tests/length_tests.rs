//! Integration tests for lengths, percentages, spacing and sizes.

use plinth_values::{
    Length, LengthUnit, Percentage, Pixels, ResolutionContext, Size, Spacing, ValueError,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_length_parse() {
    assert_eq!(Length::parse("10px"), Some(Length::px(10.0)));
    assert_eq!(
        Length::parse("1.5rem"),
        Some(Length::new(1.5, LengthUnit::Rem))
    );
    assert_eq!(Length::parse("2em"), Some(Length::new(2.0, LengthUnit::Em)));
    assert_eq!(Length::parse(" 50vh "), Some(Length::new(50.0, LengthUnit::Vh)));
    assert_eq!(Length::parse("-3vw"), Some(Length::new(-3.0, LengthUnit::Vw)));
}

#[test]
fn test_length_parse_rejects_other_shapes() {
    assert_eq!(Length::parse("auto"), None);
    assert_eq!(Length::parse("10%"), None);
    assert_eq!(Length::parse("10"), None);
    assert_eq!(Length::parse("10pt"), None);
    assert_eq!(Length::parse("px"), None);
    assert_eq!(Length::parse("10 px"), None);
    assert_eq!(Length::parse(""), None);
}

#[test]
fn test_length_to_pixels() {
    let ctx = ResolutionContext::new(1000.0, 800.0, 20.0);

    assert_eq!(Length::px(12.0).to_pixels(&ctx), 12.0);
    // rem and em both resolve against the context font size.
    assert_eq!(Length::new(2.0, LengthUnit::Rem).to_pixels(&ctx), 40.0);
    assert_eq!(Length::new(2.0, LengthUnit::Em).to_pixels(&ctx), 40.0);
    // "1vh = 1% of viewport height"
    assert_eq!(Length::new(15.0, LengthUnit::Vh).to_pixels(&ctx), 120.0);
    // "1vw = 1% of viewport width"
    assert_eq!(Length::new(60.0, LengthUnit::Vw).to_pixels(&ctx), 600.0);
}

#[test]
fn test_length_default_context() {
    let ctx = ResolutionContext::default();
    assert_eq!(Length::new(1.0, LengthUnit::Rem).to_pixels(&ctx), 16.0);
    assert_eq!(Length::new(100.0, LengthUnit::Vw).to_pixels(&ctx), 1920.0);
    assert_eq!(Length::new(100.0, LengthUnit::Vh).to_pixels(&ctx), 1080.0);
}

#[test]
fn test_length_from_str() {
    assert_eq!("4px".parse::<Length>(), Ok(Length::px(4.0)));
    assert_eq!(
        "4pt".parse::<Length>(),
        Err(ValueError::Length("4pt".to_string()))
    );
}

#[test]
fn test_percentage_parse() {
    assert_eq!(Percentage::parse("50%"), Some(Percentage::new(50.0)));
    // Values above 100 are kept.
    assert_eq!(Percentage::parse("150%").map(Percentage::value), Some(150.0));
    // Negative values clamp to 0.
    assert_eq!(Percentage::parse("-10%").map(Percentage::value), Some(0.0));
    assert_eq!(Percentage::parse("50"), None);
    assert_eq!(Percentage::parse("%"), None);
    assert_eq!(Percentage::parse("50px"), None);
}

#[test]
fn test_percentage_conversions() {
    let half = Percentage::new(50.0);
    assert_eq!(half.to_pixels(200.0), 100.0);
    assert_eq!(half.to_decimal(), 0.5);
    assert_eq!(Percentage::new(-5.0).value(), 0.0);
    assert_eq!(half.to_string(), "50%");
}

#[test]
fn test_spacing_clamps() {
    assert_eq!(Spacing::from(-10.0).to_pixels(), 0.0);
    assert_eq!(Spacing::new(8.0).to_pixels(), 8.0);
    assert_eq!(Spacing::new(f64::NAN), Spacing::ZERO);
}

#[test]
fn test_spacing_parse() {
    let ctx = ResolutionContext::default();

    assert_eq!(Spacing::parse("10px", &ctx), Some(Spacing::new(10.0)));
    assert_eq!(Spacing::parse("2rem", &ctx), Some(Spacing::new(32.0)));
    assert_eq!(Spacing::parse("12", &ctx), Some(Spacing::new(12.0)));
    assert_eq!(
        Spacing::parse("calc(10px + 5px)", &ctx),
        Some(Spacing::new(15.0))
    );
    // Any source unit clamps to 0.
    assert_eq!(Spacing::parse("-5px", &ctx), Some(Spacing::ZERO));
    assert_eq!(Spacing::parse("calc(5px - 20px)", &ctx), Some(Spacing::ZERO));
}

#[test]
fn test_spacing_parse_rejects() {
    let ctx = ResolutionContext::default();

    assert_eq!(Spacing::parse("auto", &ctx), None);
    assert_eq!(Spacing::parse("inherit", &ctx), None);
    assert_eq!(Spacing::parse("initial", &ctx), None);
    assert_eq!(Spacing::parse("10%", &ctx), None);
    assert_eq!(Spacing::parse("calc(2px * 3)", &ctx), None);
    assert_eq!(Spacing::parse("", &ctx), None);
}

#[test]
fn test_size_keywords() {
    let ctx = ResolutionContext::default();

    assert_eq!(Size::parse("auto", &ctx), Some(Size::Auto));
    assert_eq!(Size::parse("inherit", &ctx), Some(Size::Inherit));
    assert_eq!(Size::parse("initial", &ctx), Some(Size::Initial));
    // Keywords are matched verbatim.
    assert_eq!(Size::parse("AUTO", &ctx), None);
    assert!(Size::Auto.is_keyword());
    assert!(!Size::Pixels(Pixels(1.0)).is_keyword());
}

#[test]
fn test_size_units_resolve_to_pixels() {
    let ctx = ResolutionContext::new(1000.0, 500.0, 10.0);

    assert_eq!(Size::parse("100px", &ctx), Some(Size::Pixels(Pixels(100.0))));
    assert_eq!(Size::parse("2rem", &ctx), Some(Size::Pixels(Pixels(20.0))));
    assert_eq!(Size::parse("3em", &ctx), Some(Size::Pixels(Pixels(30.0))));
    assert_eq!(Size::parse("50vw", &ctx), Some(Size::Pixels(Pixels(500.0))));
    assert_eq!(Size::parse("10vh", &ctx), Some(Size::Pixels(Pixels(50.0))));
    assert_eq!(Size::parse("42", &ctx), Some(Size::Pixels(Pixels(42.0))));
}

#[test]
fn test_size_percentage() {
    let ctx = ResolutionContext::default();

    assert_eq!(
        Size::parse("50%", &ctx),
        Some(Size::Percentage(Percentage::new(50.0)))
    );
    assert_eq!(Size::parse("50%", &ctx).and_then(|s| s.to_pixels(300.0)), Some(150.0));
}

#[test]
fn test_size_calc() {
    let ctx = ResolutionContext::default();

    // Percentage-minus-pixels stays percentage-typed.
    assert_eq!(
        Size::parse("calc(100% - 40px)", &ctx),
        Some(Size::Percentage(Percentage::new(100.0)))
    );
    assert_eq!(
        Size::parse("calc(50% - 10px)", &ctx),
        Some(Size::Percentage(Percentage::new(50.0)))
    );
    // Everything else is evaluated.
    assert_eq!(
        Size::parse("calc(10px + 1rem)", &ctx),
        Some(Size::Pixels(Pixels(26.0)))
    );
    // A percentage in any other calc() shape resolves to 0px.
    assert_eq!(
        Size::parse("calc(100% + 10px)", &ctx),
        Some(Size::Pixels(Pixels(10.0)))
    );
    assert_eq!(Size::parse("calc(1px + 2px + 3px)", &ctx), None);
}

#[test]
fn test_size_rejects() {
    let ctx = ResolutionContext::default();

    assert_eq!(Size::parse("fit-content", &ctx), None);
    assert_eq!(Size::parse("10pt", &ctx), None);
    assert_eq!(Size::parse("", &ctx), None);
    assert_eq!(
        "wide".parse::<Size>(),
        Err(ValueError::Size("wide".to_string()))
    );
}

#[test]
fn test_size_to_pixels() {
    assert_eq!(Size::Pixels(Pixels(12.0)).to_pixels(500.0), Some(12.0));
    assert_eq!(
        Size::Percentage(Percentage::new(25.0)).to_pixels(400.0),
        Some(100.0)
    );
    assert_eq!(Size::Auto.to_pixels(400.0), None);
    assert_eq!(Size::Inherit.to_pixels(400.0), None);
    assert_eq!(Size::Initial.to_pixels(400.0), None);
}

#[test]
fn test_size_display() {
    assert_eq!(Size::Pixels(Pixels(12.0)).to_string(), "12px");
    assert_eq!(Size::Percentage(Percentage::new(50.0)).to_string(), "50%");
    assert_eq!(Size::Auto.to_string(), "auto");
}

#[test]
fn test_vh_fraction() {
    let ctx = ResolutionContext::default();
    assert_close(Length::new(33.3, LengthUnit::Vh).to_pixels(&ctx), 359.64);
}

#[test]
fn test_size_calc_keeps_its_own_percentage() {
    // The percentage operand is kept as written, not forced to 100%.
    let ctx = ResolutionContext::default();
    let size = Size::parse("calc(50% - 10px)", &ctx);
    assert_eq!(size, Some(Size::Percentage(Percentage::new(50.0))));
    assert_eq!(size.and_then(|s| s.to_pixels(200.0)), Some(100.0));
}
