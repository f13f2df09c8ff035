use cena_core::{IngredientId, Name};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parsed_names_are_trimmed_non_blank_and_capitalized(
        lead in "[ \t]{0,3}",
        body in "[a-zA-Z][a-zA-Z0-9 '-]{0,30}",
        tail in "[ \t]{0,3}"
    ) {
        let raw = format!("{lead}{body}{tail}");
        let name = Name::parse(&raw).expect("valid name");
        let value = name.as_str();
        prop_assert!(!value.trim().is_empty());
        prop_assert_eq!(value, value.trim());
        let first = value.chars().next().expect("first char");
        prop_assert!(!first.is_lowercase());
    }

    #[test]
    fn blank_names_are_rejected(raw in "[ \t\r\n]{0,8}") {
        prop_assert!(Name::parse(&raw).is_err());
    }

    #[test]
    fn case_insensitive_equality_is_symmetric(body in "[a-z]{1,12}") {
        let lower = Name::parse(&body).expect("lower");
        let upper = Name::parse(&body.to_uppercase()).expect("upper");
        prop_assert!(lower.eq_ignore_case(&upper));
        prop_assert!(upper.eq_ignore_case(&lower));
    }
}

#[test]
fn ingredient_id_display_parses_back() {
    let id = IngredientId::generate();
    let parsed = IngredientId::parse(&id.to_string()).expect("parse");
    assert_eq!(id, parsed);
}
