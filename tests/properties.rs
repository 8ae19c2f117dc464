use proptest::prelude::*;
use stepcalc::{
    calculate,
    interpreter::{lexer::tokenize, token::Token},
    util::num::format_number,
};

proptest! {
    #[test]
    fn literals_tokenize_to_one_number(int in "[0-9]{1,9}", frac in proptest::option::of("[0-9]{0,6}")) {
        let literal = match &frac {
            Some(frac) => format!("{int}.{frac}"),
            None => int.clone(),
        };
        let expected: f64 = literal.parse().unwrap();

        prop_assert_eq!(tokenize(&literal).unwrap(), vec![Token::Number(expected)]);
    }

    #[test]
    fn formatting_is_deterministic(value in any::<f64>()) {
        prop_assert_eq!(format_number(value), format_number(value));
    }

    #[test]
    fn integers_format_without_a_point(value in -1_000_000_000i64..1_000_000_000) {
        #[allow(clippy::cast_precision_loss)]
        let formatted = format_number(value as f64);
        prop_assert_eq!(formatted, value.to_string());
    }

    #[test]
    fn fractions_use_at_most_twelve_significant_digits(value in 1e-3f64..1e9) {
        let formatted = format_number(value);
        let digits = formatted.chars()
                              .filter(char::is_ascii_digit)
                              .skip_while(|c| *c == '0')
                              .count();

        prop_assert!(digits <= 12, "{formatted}");
        prop_assert!(!formatted.contains('.') || !formatted.ends_with('0'), "{formatted}");
    }

    #[test]
    fn sums_of_integers_are_exact(a in 0u32..100_000, b in 0u32..100_000) {
        let calc = calculate(&format!("{a} + {b}")).unwrap();
        prop_assert_eq!(calc.formatted_result(), (u64::from(a) + u64::from(b)).to_string());
        prop_assert_eq!(calc.steps.len(), 3);
    }

    #[test]
    fn arbitrary_text_never_panics(src in "[0-9+*/^() .-]{0,24}") {
        let _ = calculate(&src);
    }
}
