use colored::Colorize;
use propcalc::{argument::Argument, parser::parse_proposition, proposition::Proposition};

fn parse(input: &str) -> Proposition {
    parse_proposition(input).expect("well formed proposition")
}

fn main() {
    // If it is raining, the ground is wet and it is not sunny.
    let raining_then_wet = parse("raining -> (wet & ~sunny)");
    // If it is not raining, the ground is dry.
    let no_rain_then_dry = parse("~raining -> ~wet");
    // The tennis game is cancelled exactly when the ground is wet.
    let wet_then_no_tennis = parse("wet <-> ~tennis");
    // If tennis is on, there is no time for the movies or hiking.
    let tennis_then_no_activities = parse("tennis -> ~(movie || hiking)");

    // Can we conclude that going to the movies means it is not sunny?
    let conclusion = parse("movie -> ~sunny");

    println!("{}", "Premises:".blue());
    for premise in [
        &raining_then_wet,
        &no_rain_then_dry,
        &wet_then_no_tennis,
        &tennis_then_no_activities,
    ] {
        println!("  {premise}");
    }
    println!("{}", "Conclusion:".blue());
    println!("  {conclusion}\n");

    println!("{}", "Structure of the first premise:".blue());
    println!("{}", raining_then_wet.get_tree());

    let argument = Argument::new(
        vec![
            raining_then_wet,
            no_rain_then_dry,
            wet_then_no_tennis,
            tennis_then_no_activities,
        ],
        conclusion,
    );

    println!("{}", "Argument:".blue());
    println!("{argument}\n");

    println!("{}", argument.truth_table());

    let verdict = if argument.is_valid() {
        "valid".green()
    } else {
        "not valid".red()
    };
    println!("\nThe argument is {verdict}.");
}
