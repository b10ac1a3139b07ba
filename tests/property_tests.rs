//! Property-based tests for receipt totals and receipt numbers.

use chrono::NaiveDate;
use jewellery_tracker::models::receipt::{
    calculate_total, generate_receipt_number, is_valid_receipt_number, parse_amount,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn receipt_numbers_always_match_pattern(date in date_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let number = generate_receipt_number(date, &mut rng);
        prop_assert!(is_valid_receipt_number(&number), "bad number {}", number);
        prop_assert_eq!(&number[3..9], date.format("%y%m%d").to_string());
    }

    #[test]
    fn integer_totals_are_exact(weight in 0u32..10_000, price in 0u32..100_000) {
        let total = calculate_total(&weight.to_string(), &price.to_string());
        prop_assert_eq!(total, format!("{}.00", u64::from(weight) * u64::from(price)));
    }

    #[test]
    fn totals_always_have_two_decimals(weight in "[0-9. a-df-zA-DF-Z+-]{0,8}", price in "[0-9. a-df-zA-DF-Z+-]{0,8}") {
        let total = calculate_total(&weight, &price);
        let (_, decimals) = total.rsplit_once('.').expect("decimal point");
        prop_assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn text_without_digits_reads_as_zero(raw in "[a-zA-Z ]{0,12}") {
        prop_assert_eq!(parse_amount(&raw), 0.0);
    }
}
