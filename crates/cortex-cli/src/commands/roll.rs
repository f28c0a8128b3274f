use std::path::Path;

use colored::Colorize;

use cortex_dice::difficulty::difficulty_name;
use cortex_dice::{
    CharacterTraits, FixedRolls, RandomSource, RollConfig, RollReport, RollRequest, RolledDie,
    StepModifier, TraitStore, Verdict, roll_check,
};

/// Options for the `roll` command.
pub struct RollOptions {
    pub seed: Option<u64>,
    pub rolls: Option<Vec<u32>>,
    pub max_dice: usize,
    pub json: bool,
    pub quiet_notices: bool,
}

pub fn run(sheet: &Path, request: &[String], opts: &RollOptions) -> Result<(), String> {
    let character = super::load_sheet(sheet)?;
    let request = RollRequest::parse(&request_text(request)).map_err(|e| e.to_string())?;

    let mut config = RollConfig::default()
        .with_max_pool_size(opts.max_dice)
        .with_category_notices(!opts.quiet_notices);
    if let Some(seed) = opts.seed {
        config = config.with_seed(seed);
    }

    let mut rng: Box<dyn RandomSource> = match &opts.rolls {
        Some(values) => Box::new(FixedRolls::new(values.clone())),
        None => Box::new(config.rng()),
    };

    let report =
        roll_check(&character, &request, rng.as_mut(), &config).map_err(|e| e.to_string())?;

    if opts.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let name = super::display_name(&character, sheet);
    print_report(&name, &character, &report);
    Ok(())
}

/// Rejoin shell arguments, quoting any that already contain whitespace.
fn request_text(args: &[String]) -> String {
    args.iter()
        .map(|a| {
            if a.contains(char::is_whitespace) {
                format!("\"{a}\"")
            } else {
                a.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_report(name: &str, character: &CharacterTraits, report: &RollReport) {
    let dice: Vec<String> = report
        .entries()
        .filter(|d| !d.is_echo)
        .map(|d| format_die(character, report, &d))
        .collect();

    if report.outcome.is_botch {
        println!("{}", format!("{name} BOTCHES! All dice came up 1s!").red().bold());
        println!("Rolled: {}", dice.join(", "));
        return;
    }

    println!("{name} rolls: {}", dice.join(", "));

    let mut line = format!(
        "Total: {} | Effect Die: {}",
        report.outcome.total.to_string().bold(),
        report.outcome.effect_face.to_string().bold()
    );
    if report.effect_defaulted_notice() {
        line.push_str(&format!(" {}", "(defaulted to d4 - only two dice rolled)".yellow()));
    }
    println!("{line}");

    if let Some(difficulty) = report.difficulty {
        let label = match difficulty_name(difficulty) {
            Some(n) => format!("{difficulty} ({n})"),
            None => difficulty.to_string(),
        };
        let verdict = match report.verdict {
            Verdict::Heroic => format!("{name} achieves a HEROIC SUCCESS!").green().bold(),
            Verdict::Success => "Success".normal(),
            _ => "Failure".yellow(),
        };
        println!("Difficulty: {} - {verdict}", label.bold());
    }

    if report.outcome.hitch_count() > 0 {
        let faces: Vec<String> = report
            .outcome
            .hitch_faces
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "{}",
            format!(
                "Hitches: {} (rolled 1 on: {})",
                report.outcome.hitch_count(),
                faces.join(", ")
            )
            .yellow()
        );
    }

    for notice in report
        .notices
        .iter()
        .filter(|n| !matches!(n, cortex_dice::Notice::EffectDefaulted))
    {
        println!("{}", format!("Note: {notice}").yellow());
    }
}

/// `7(d8 Attribute: Strength (U))`, or `7, 3(d8 ... (Doubled))` for a doubled trait.
fn format_die(character: &CharacterTraits, report: &RollReport, die: &RolledDie<'_>) -> String {
    let (Some(category), Some(key)) = (die.category, die.trait_name) else {
        return format!("{}({})", die.value.to_string().cyan(), die.face);
    };

    let display = character
        .get(category, key)
        .map_or(key, |entry| entry.name.as_str());

    let step = match die.step {
        Some(StepModifier::Up) => format!(" {}", "(U)".green()),
        Some(StepModifier::Down) => format!(" {}", "(D)".red()),
        None => String::new(),
    };

    let echoes = report.echo_values(die.index);
    let (values, doubled) = if echoes.is_empty() {
        (die.value.to_string(), String::new())
    } else {
        let mut all = vec![die.value.to_string()];
        all.extend(echoes.iter().map(ToString::to_string));
        (all.join(", "), format!(" {}", "(Doubled)".cyan()))
    };

    format!(
        "{}({} {category}: {display}{step}{doubled})",
        values.cyan(),
        die.face
    )
}
