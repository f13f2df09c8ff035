use cena_api::{format_menu_id, parse_menu_id};
use cena_model::{MealType, MenuId};
use chrono::NaiveDate;
use proptest::prelude::*;

fn meal_type() -> impl Strategy<Value = MealType> {
    prop::sample::select(MealType::ALL.to_vec())
}

proptest! {
    #[test]
    fn parse_reconstructs_formatted_identity(
        days in 0i64..40_000,
        meal in meal_type(),
        owner in "[a-z][a-z0-9_]{0,15}",
    ) {
        let base = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch");
        let date = base + chrono::Duration::days(days);
        let id = MenuId::new(owner.clone(), date, meal).expect("menu id");
        let parsed = parse_menu_id(&format_menu_id(&id), &owner);
        prop_assert_eq!(parsed, Some(id));
    }

    #[test]
    fn parse_never_panics_on_arbitrary_input(raw in ".{0,40}") {
        let _ = parse_menu_id(&raw, "alice");
    }
}
