use crate::data::RecipeRecord;
use crate::recipe::Cuisine::{self, *};
use crate::recipe::{Allergen as Al, DietaryRestriction as Dr};

struct Seed {
    name: &'static str,
    cuisine: Cuisine,
    calories: u32,
    restrictions: &'static [Dr],
    allergens: &'static [Al],
    image: &'static str,
}

const fn seed(
    name: &'static str,
    cuisine: Cuisine,
    calories: u32,
    restrictions: &'static [Dr],
    allergens: &'static [Al],
    image: &'static str,
) -> Seed {
    Seed {
        name,
        cuisine,
        calories,
        restrictions,
        allergens,
        image,
    }
}

// Names repeat on purpose: "Margherita Pizza" is listed twice.
const SEEDS: &[Seed] = &[
    seed("Spaghetti Carbonara", Italian, 500, &[], &[], "Spaghetti_Carbonara"),
    seed("Chicken Tikka Masala", Indian, 600, &[], &[], "chicken_tikka_masala"),
    seed("Tacos al Pastor", Mexican, 550, &[], &[], "tacos_al_pastor"),
    seed("General Tso's Chicken", Chinese, 700, &[], &[], "general_tso's_chicken"),
    seed("Sushi Rolls", Japanese, 400, &[], &[], "sushi_rolls"),
    seed("Coq au Vin", French, 750, &[], &[], "coq_au_vin"),
    seed("Pad Thai", Thai, 600, &[], &[], "pad_thai"),
    seed("Margherita Pizza", Italian, 700, &[], &[Al::Dairy], "margherita_pizza"),
    seed("Guacamole", Mexican, 200, &[], &[], "guacamole"),
    seed("Butter Chicken", Indian, 650, &[], &[], "butter_chicken"),
    seed("Beef Bourguignon", French, 800, &[], &[], "beef_bourguignon"),
    seed("Tom Yum Soup", Thai, 300, &[], &[Al::Shellfish], "tom_yum_soup"),
    seed("Enchiladas", Mexican, 600, &[], &[], "enchiladas"),
    seed("Peking Duck", Chinese, 900, &[], &[], "peking_duck"),
    seed("Ratatouille", French, 450, &[Dr::Vegan], &[], "ratatouille"),
    seed("Salmon Teriyaki", Japanese, 550, &[], &[Al::Fish], "salmon_teriyaki"),
    seed("Caprese Salad", Italian, 300, &[Dr::Vegetarian], &[], "caprese_salad"),
    seed("Vegetable Stir Fry", Chinese, 400, &[Dr::Vegetarian], &[], "vegetable_stir_fry"),
    seed("Miso Soup", Japanese, 150, &[Dr::Vegan], &[], "miso_soup"),
    seed("Cheese Quesadilla", Mexican, 400, &[Dr::Vegetarian], &[], "cheese_quesadilla"),
    seed("Paneer Tikka", Indian, 500, &[Dr::Vegetarian], &[], "paneer_tikka"),
    seed("Crepes", French, 350, &[], &[], "crepes"),
    seed("California Roll", Japanese, 500, &[], &[Al::Shellfish], "california_roll"),
    seed("Egg Drop Soup", Chinese, 200, &[], &[], "egg_drop_soup"),
    seed("Chicken Parmesan", Italian, 800, &[], &[], "chicken_parmesan"),
    seed("Vegetable Curry", Indian, 600, &[Dr::Vegetarian], &[], "vegetable_curry"),
    seed("Chicken Enchiladas", Mexican, 700, &[], &[], "chicken_enchiladas"),
    seed("Beef Chow Mein", Chinese, 600, &[], &[], "beef_chow_mein"),
    seed("Sushi Sashimi", Japanese, 650, &[], &[], "sushi_sashimi"),
    seed("Pho", Thai, 500, &[], &[], "pho"),
    seed("Tiramisu", Italian, 400, &[], &[], "tiramisu"),
    seed("Beef Tacos", Mexican, 600, &[], &[], "beef_tacos"),
    seed("Kung Pao Tofu", Chinese, 500, &[Dr::Vegetarian], &[Al::Peanuts], "kung_pao_tofo"),
    seed("Veggie Sushi Rolls", Japanese, 350, &[Dr::Vegetarian], &[], "veggie_sushi_rolls"),
    seed("Crepes Suzette", French, 600, &[], &[], "crepes_suzette"),
    seed("Lasagna", Italian, 700, &[], &[], "lasagna"),
    seed("Chile Relleno", Mexican, 550, &[], &[], "chile_relleno"),
    seed("Orange Chicken", Chinese, 750, &[], &[], "orange_chicken"),
    seed("Soba Noodles", Japanese, 400, &[], &[], "soba_noodles"),
    seed("Escargot", French, 700, &[], &[], "escargot"),
    seed("Spaghetti Bolognese", Italian, 600, &[], &[], "spaghetti_bolognese"),
    seed("Nachos", Mexican, 800, &[], &[], "nachos"),
    seed("Beef and Broccoli", Chinese, 600, &[], &[], "beef_and_broccoli"),
    seed("Tempura", Japanese, 600, &[], &[], "tempura"),
    seed("Onion Soup", French, 300, &[], &[], "onion_soup"),
    seed("Fettuccine Alfredo", Italian, 700, &[], &[], "fettuccine_alfredo"),
    seed("Taco Salad", Mexican, 500, &[], &[], "taco_salad"),
    seed("Kung Pao Chicken", Chinese, 700, &[], &[Al::Peanuts], "kung_pao_chicken"),
    seed("Rice Bowl", Japanese, 450, &[], &[], "rice_bowl"),
    seed("Croissant", French, 350, &[], &[], "croissant"),
    seed("Margherita Pizza", Italian, 700, &[], &[Al::Dairy], "margherita_pizza"),
    seed("Chimichanga", Mexican, 800, &[], &[], "chimichanga"),
    seed("Spring Rolls", Chinese, 400, &[Dr::Vegetarian], &[], "spring_rolls"),
    seed("Quiche", French, 600, &[], &[], "quiche"),
    seed("Fettuccine Carbonara", Italian, 600, &[], &[], "fettuccine_carbonara"),
    seed("Burrito", Mexican, 700, &[], &[], "burrito"),
    seed("Sweet and Sour Chicken", Chinese, 700, &[], &[], "sweet_and_sour_chicken"),
    seed("Sushi Platter", Japanese, 700, &[], &[], "sushi_platter"),
    seed("French Onion Soup", French, 400, &[], &[], "french_onion_soup"),
    seed("Fusilli Pasta", Italian, 500, &[], &[], "fuisili_pasta"),
    seed("Tostadas", Mexican, 650, &[], &[], "tostadas"),
    seed("Sweet and Sour Tofu", Chinese, 600, &[Dr::Vegetarian], &[], "sweet_and_sour_tofu"),
    seed("Sashimi", Japanese, 300, &[], &[], "sashimi"),
    seed("Potato Soup", French, 400, &[Dr::Vegetarian], &[], "potato_soup"),
    seed("Caprese Pasta", Italian, 600, &[Dr::Vegetarian], &[], "caprese_pasta"),
    seed("Fajitas", Mexican, 700, &[], &[], "fajitas"),
    seed("Mongolian Beef", Chinese, 800, &[], &[], "mongolian_beef"),
    seed("Sushi Burrito", Japanese, 700, &[], &[], "sushi_burrito"),
    seed("Creme Brulee", French, 350, &[], &[], "creme_brulee"),
    seed("Rigatoni Pasta", Italian, 550, &[], &[], "rigatoni_pasta"),
    seed("Burrito Bowl", Mexican, 600, &[], &[], "burrito_bowl"),
    seed("Kung Pao Beef", Chinese, 750, &[], &[Al::Peanuts], "kung_pao_beef"),
    seed("Yakitori", Japanese, 450, &[], &[], "yakitori"),
    seed("Croque Monsieur", French, 600, &[], &[], "croque_monsieur"),
];

/// The sample catalog shipped with the crate, as plain records.
pub(super) fn records() -> Vec<RecipeRecord> {
    SEEDS
        .iter()
        .map(|s| {
            RecipeRecord::new(s.name, s.cuisine, s.calories)
                .with_restrictions(s.restrictions)
                .with_allergens(s.allergens)
                .with_image(s.image)
        })
        .collect()
}
