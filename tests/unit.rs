//! Unit tests for tags, the criteria form, formatting and errors.
mod common;
use common::*;
use recipe_roulette::prelude::*;
use recipe_roulette::ui::{CALORIE_STEP, MAX_CALORIES};

#[test]
fn test_tag_labels_and_order() {
    assert_eq!(Cuisine::ALL.len(), 8);
    assert_eq!(DietaryRestriction::ALL.len(), 4);
    assert_eq!(Allergen::ALL.len(), 11);

    assert_eq!(Cuisine::ALL[0], Cuisine::All);
    assert_eq!(DietaryRestriction::GlutenFree.to_string(), "Gluten Free");
    assert_eq!(Allergen::TreeNuts.label(), "Tree Nuts");

    assert_eq!(Cuisine::default(), Cuisine::All);
    assert!(DietaryRestriction::default().is_sentinel());
    assert!(Allergen::None.is_sentinel());
    assert!(!Allergen::Sesame.is_sentinel());
}

#[test]
fn test_tag_parsing_is_lenient() {
    assert_eq!("thai".parse::<Cuisine>(), Ok(Cuisine::Thai));
    assert_eq!("Gluten Free".parse::<DietaryRestriction>(), Ok(DietaryRestriction::GlutenFree));
    assert_eq!("gluten_free".parse::<DietaryRestriction>(), Ok(DietaryRestriction::GlutenFree));
    assert_eq!("TreeNuts".parse::<Allergen>(), Ok(Allergen::TreeNuts));
    assert_eq!("tree-nuts".parse::<Allergen>(), Ok(Allergen::TreeNuts));

    assert_eq!(
        "Korean".parse::<Cuisine>(),
        Err(ParseTagError::Cuisine("Korean".to_string()))
    );
    assert!("Keto".parse::<DietaryRestriction>().is_err());
    assert!("Gluten".parse::<Allergen>().is_err());
}

#[test]
fn test_tag_serde_uses_labels() {
    assert_eq!(serde_json::to_string(&Allergen::TreeNuts).unwrap(), "\"Tree Nuts\"");
    let parsed: DietaryRestriction = serde_json::from_str("\"GlutenFree\"").unwrap();
    assert_eq!(parsed, DietaryRestriction::GlutenFree);
}

#[test]
fn test_calorie_stepper_clamps_and_snaps() {
    let mut form = CriteriaForm::new();
    assert_eq!(form.calories(), 0);

    form.set_calories(250);
    assert_eq!(form.calories(), 200);
    form.set_calories(299);
    assert_eq!(form.calories(), 200);
    form.set_calories(300);
    assert_eq!(form.calories(), 300);
    form.set_calories(99);
    assert_eq!(form.calories(), 0);
    form.set_calories(9_999);
    assert_eq!(form.calories(), MAX_CALORIES);
    form.set_calories(4_990);
    assert_eq!(form.calories(), 4_900);

    form.set_calories(MAX_CALORIES);
    form.increment_calories();
    assert_eq!(form.calories(), MAX_CALORIES);

    form.set_calories(CALORIE_STEP);
    form.decrement_calories();
    form.decrement_calories();
    assert_eq!(form.calories(), 0);
    form.increment_calories();
    assert_eq!(form.calories(), 100);
}

#[test]
fn test_form_submit_snapshot() {
    let mut form = CriteriaForm::new();
    assert_eq!(form.submit(), SelectionCriteria::default());

    form.cuisine = Cuisine::Mexican;
    form.set_calories(700);
    form.dietary_restriction = DietaryRestriction::Vegetarian;
    form.allergy = Allergen::Dairy;

    assert_eq!(
        form.submit(),
        criteria(Cuisine::Mexican, 700, DietaryRestriction::Vegetarian, Allergen::Dairy)
    );
}

#[test]
fn test_criteria_display() {
    assert_eq!(
        SelectionCriteria::default().to_string(),
        "cuisine=All calories=any diet=None avoid=None"
    );
    let c = criteria(Cuisine::French, 400, DietaryRestriction::GlutenFree, Allergen::Eggs);
    assert_eq!(c.to_string(), "cuisine=French calories<=400 diet=Gluten Free avoid=Eggs");
    assert!(!c.is_unfiltered());
}

#[test]
fn test_formatter_output() {
    let catalog = small_catalog();
    let tofu = &catalog.all()[0];
    let tacos = &catalog.all()[3];

    assert_eq!(RecipeFormatter::summary(tofu), "Tofu Bowl (Japanese, 400 kcal)");

    let detail = RecipeFormatter::detail(tofu);
    assert!(detail.starts_with("Tofu Bowl\n"));
    assert!(detail.contains("Dietary:     Vegan"));
    assert!(detail.contains("Allergens:   Soy"));
    assert!(detail.contains("Image:       tofu_bowl"));

    let tacos_detail = RecipeFormatter::detail(tacos);
    assert!(tacos_detail.contains("Dietary:     None"));
    assert!(tacos_detail.contains("Allergens:   Shellfish"));

    let pesto_detail = RecipeFormatter::detail(&catalog.all()[1]);
    assert!(pesto_detail.contains("Allergens:   Dairy, Tree Nuts"));

    let list = RecipeFormatter::result_list("Picks", &[tofu, tacos]);
    assert_eq!(
        list,
        "Picks\n  1. Tofu Bowl (Japanese, 400 kcal) [#1]\n  2. Shrimp Tacos (Mexican, 500 kcal) [#4]\n"
    );
}

#[test]
fn test_error_display() {
    let err = CatalogError::WildcardCuisine {
        name: "Mystery Stew".to_string(),
    };
    assert!(err.to_string().contains("Mystery Stew"));
    assert!(err.to_string().contains("All"));

    let err = CatalogError::EmptyName { index: 4 };
    assert!(err.to_string().contains('4'));

    let err = ParseTagError::Allergen("Gluten".to_string());
    assert_eq!(err.to_string(), "Unknown allergen 'Gluten'");
}

#[test]
fn test_recipe_id_display() {
    assert_eq!(RecipeId(12).to_string(), "#12");
}
