use clap::Parser;
use recipe_roulette::prelude::*;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Pick a few random recipes that match your preferences
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional path to a catalog JSON file. Defaults to the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Your name, used in the greeting
    #[arg(short, long, default_value = "", conflicts_with = "human")]
    name: String,

    /// Cuisine to pick from, or "All"
    #[arg(long, default_value = "All", conflicts_with = "human")]
    cuisine: Cuisine,

    /// Calorie ceiling (0 to 5000 in steps of 100). 0 means no ceiling
    #[arg(long, default_value_t = 0, conflicts_with = "human")]
    max_calories: u32,

    /// Dietary restriction every recipe must satisfy, or "None"
    #[arg(long, default_value = "None", conflicts_with = "human")]
    diet: DietaryRestriction,

    /// Allergen to avoid, or "None"
    #[arg(long, default_value = "None", conflicts_with = "human")]
    avoid: Allergen,

    /// Maximum number of recipes per draw
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE, value_parser = parse_limit)]
    limit: usize,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Number of extra draws with the same preferences
    #[arg(long, default_value_t = 0, conflicts_with = "human")]
    rerolls: usize,

    /// Show the detail view of the recipe with this id and exit
    #[arg(long, conflicts_with = "human")]
    show: Option<u32>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "arguments parsed");

    let custom = cli.catalog.as_deref().map(load_catalog);
    let catalog = custom.as_ref().unwrap_or_else(|| {
        info!("using built-in catalog");
        Catalog::builtin()
    });

    if cli.human {
        run_interactive(catalog, cli.limit, cli.seed);
    } else {
        run_non_interactive(catalog, cli);
    }
}

/// A draw of zero recipes would be indistinguishable from "no matches".
fn parse_limit(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recipe_roulette={level},roulette={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn load_catalog(path: &Path) -> Catalog {
    let catalog = Catalog::from_file(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load catalog from '{}': {}",
            path.display(),
            e
        ))
    });
    if catalog.is_empty() {
        exit_with_error(&format!("Catalog '{}' has no recipes", path.display()));
    }
    catalog
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(catalog: &Catalog, cli: Cli) {
    let mut form = CriteriaForm::new();
    form.name = cli.name;
    form.cuisine = cli.cuisine;
    form.set_calories(cli.max_calories);
    form.dietary_restriction = cli.diet;
    form.allergy = cli.avoid;

    let selector = Selector::builder()
        .limit(cli.limit)
        .maybe_seed(cli.seed)
        .build();
    let mut session = RouletteSession::new(catalog, &form, selector);

    if let Some(id) = cli.show {
        let recipe = session
            .detail_by_id(RecipeId(id))
            .unwrap_or_else(|| exit_with_error(&format!("No recipe with id {}", id)));
        print!("{}", RecipeFormatter::detail(recipe));
        return;
    }

    info!(criteria = %session.criteria(), "selecting recipes");
    session.roll();
    print!(
        "{}",
        RecipeFormatter::result_list(&session.greeting(), session.results())
    );

    for n in 1..=cli.rerolls {
        session.roll();
        print!(
            "\n{}",
            RecipeFormatter::result_list(&format!("Re-roll #{}", n), session.results())
        );
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(catalog: &Catalog, limit: usize, seed: Option<u64>) {
    println!("--- Welcome to Recipe Roulette ---");
    println!("{} recipes in the catalog.\n", catalog.len());

    let mut form = CriteriaForm::new();
    form.name = prompt_for_input("Enter your name", None);

    let counts = catalog.cuisine_counts();
    form.cuisine = prompt_for_choice("Cuisine", Cuisine::ALL, |c| {
        if c.is_sentinel() {
            c.label().to_string()
        } else {
            format!("{} ({})", c, counts.get(c).copied().unwrap_or(0))
        }
    });

    let calories = loop {
        let raw = prompt_for_input("Calorie ceiling, 0 for none (0-5000, steps of 100)", Some("0"));
        match raw.parse::<u32>() {
            Ok(value) => break value,
            Err(_) => println!("Please enter a whole number."),
        }
    };
    form.set_calories(calories);
    if form.calories() != calories {
        println!("Using {} kcal.", form.calories());
    }

    form.dietary_restriction =
        prompt_for_choice("Dietary restriction", DietaryRestriction::ALL, |d| d.to_string());
    form.allergy = prompt_for_choice("Allergy", Allergen::ALL, |a| a.to_string());

    let selector = Selector::builder().limit(limit).maybe_seed(seed).build();
    let mut session = RouletteSession::new(catalog, &form, selector);
    session.roll();

    loop {
        println!();
        print!(
            "{}",
            RecipeFormatter::result_list(&session.greeting(), session.results())
        );
        let choice = prompt_for_input("Number for details, 'r' to re-roll, 'q' to quit", Some("q"));

        match choice.to_lowercase().as_str() {
            "q" | "quit" => break,
            "r" | "reroll" => {
                session.roll();
            }
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => match session.detail(n - 1) {
                    Some(recipe) => {
                        println!();
                        print!("{}", RecipeFormatter::detail(recipe));
                        prompt_for_input("Press enter to go back", None);
                    }
                    None => println!("There is no recipe number {}.", n),
                },
                _ => println!("Invalid choice."),
            },
        }
    }
}

/// Lists the options and reads one, by number or by name.
fn prompt_for_choice<T>(label: &str, options: &[T], describe: impl Fn(&T) -> String) -> T
where
    T: Copy + Default + Display + FromStr,
{
    println!("\n{}:", label);
    for (i, option) in options.iter().enumerate() {
        println!("  {}: {}", i + 1, describe(option));
    }
    let default = T::default().to_string();
    loop {
        let raw = prompt_for_input("Enter choice", Some(&default));
        if let Ok(n) = raw.parse::<usize>() {
            if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
                return *option;
            }
        } else if let Ok(option) = raw.parse::<T>() {
            return option;
        }
        println!("Invalid choice. Please enter a number from 1 to {}.", options.len());
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write prompt: {}", e)));

    io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)));
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["roulette", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["roulette", "--limit", "many"]).is_err());

        let cli = Cli::try_parse_from(["roulette", "--limit", "3"]).unwrap();
        assert_eq!(cli.limit, 3);
        assert_eq!(Cli::try_parse_from(["roulette"]).unwrap().limit, DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn test_criteria_flags_conflict_with_interactive_mode() {
        for flags in [
            &["--cuisine", "Thai"][..],
            &["--name", "Sam"],
            &["--max-calories", "300"],
            &["--diet", "Vegan"],
            &["--avoid", "Peanuts"],
            &["--rerolls", "2"],
            &["--show", "4"],
        ] {
            let args = ["roulette", "-i"].iter().chain(flags.iter());
            assert!(Cli::try_parse_from(args).is_err(), "{:?} accepted with -i", flags);
        }

        let cli = Cli::try_parse_from(["roulette", "-i", "--limit", "2", "--seed", "9"]).unwrap();
        assert!(cli.human);
        assert_eq!(cli.seed, Some(9));
    }
}
