use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::catalog;
use crate::config::{get_config_path, Config};
use crate::scoring::validation::HOURS_PER_WEEK_RANGE;
use crate::scoring::{
    CaseExperience, EventBudget, FocusPriority, MbaYear, RecruitingPhase, UserProfile,
};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Parse a 1-based menu selection.
fn parse_choice(input: &str, len: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Parse a comma-separated list of catalog entries, normalizing to the
/// catalog's spelling.
fn parse_multi(input: &str, known: &[&str]) -> Result<BTreeSet<String>, String> {
    let mut selected = BTreeSet::new();
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match known.iter().find(|k| k.eq_ignore_ascii_case(item)) {
            Some(k) => {
                selected.insert(k.to_string());
            }
            None => return Err(format!("'{}' is not one of: {}", item, known.join(", "))),
        }
    }
    Ok(selected)
}

/// Show a numbered menu and loop until a valid option is picked.
fn prompt_choice<T: Copy + PartialEq>(
    message: &str,
    options: &[T],
    label: fn(T) -> &'static str,
    default: T,
) -> Result<T> {
    println!("{}", message);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, label(*option));
    }
    let default_index = options.iter().position(|o| *o == default).unwrap_or(0) + 1;
    loop {
        let input = prompt_with_default("Choice", &default_index.to_string())?;
        match parse_choice(&input, options.len()) {
            Some(i) => return Ok(options[i]),
            None => println!("  Invalid: pick a number from 1 to {}. Try again.", options.len()),
        }
    }
}

fn prompt_multi(message: &str, known: &[&str], default: &BTreeSet<String>) -> Result<BTreeSet<String>> {
    println!("{} (comma-separated)", message);
    println!("  Options: {}", known.join(", "));
    let default_str = default.iter().cloned().collect::<Vec<_>>().join(", ");
    loop {
        let input = prompt_with_default("Selection", &default_str)?;
        match parse_multi(&input, known) {
            Ok(selected) => return Ok(selected),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

fn prompt_priorities(default: &BTreeSet<FocusPriority>) -> Result<BTreeSet<FocusPriority>> {
    let labels: Vec<&str> = FocusPriority::ALL.iter().map(|p| p.label()).collect();
    let default_labels: BTreeSet<String> = default.iter().map(|p| p.label().to_string()).collect();
    let selected = prompt_multi("Focus areas", &labels, &default_labels)?;
    Ok(FocusPriority::ALL
        .into_iter()
        .filter(|p| selected.contains(p.label()))
        .collect())
}

fn prompt_hours(default: u32) -> Result<u32> {
    let (low, high) = HOURS_PER_WEEK_RANGE;
    loop {
        let input = prompt_with_default("Hours per week for events", &default.to_string())?;
        match input.parse::<u32>() {
            Ok(v) if (low..=high).contains(&v) => return Ok(v),
            _ => println!("  Invalid: must be a number from {} to {}. Try again.", low, high),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("EventIQ Profile Setup");
    println!("=====================");
    println!();

    let defaults = UserProfile::default();

    let mba_year = prompt_choice("MBA year", &MbaYear::ALL, MbaYear::label, defaults.mba_year)?;
    println!();
    let case_experience = prompt_choice(
        "Case experience",
        &CaseExperience::ALL,
        CaseExperience::label,
        defaults.case_experience,
    )?;
    println!();
    let target_firms = prompt_multi("Target firms", catalog::TARGET_FIRMS, &defaults.target_firms)?;
    println!();
    let recruiting_phase = prompt_choice(
        "Recruiting phase",
        &RecruitingPhase::ALL,
        RecruitingPhase::label,
        defaults.recruiting_phase,
    )?;
    println!();
    let target_industries = prompt_multi(
        "Target industries",
        catalog::TARGET_INDUSTRIES,
        &defaults.target_industries,
    )?;
    println!();
    let event_budget = prompt_choice(
        "Event budget",
        &EventBudget::ALL,
        EventBudget::label,
        defaults.event_budget,
    )?;
    println!();
    let focus_priorities = prompt_priorities(&defaults.focus_priorities)?;
    println!();
    let hours_per_week = prompt_hours(defaults.hours_per_week)?;

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        profile: UserProfile {
            mba_year,
            case_experience,
            target_firms,
            recruiting_phase,
            target_industries,
            event_budget,
            focus_priorities,
            hours_per_week,
        },
        export_dir: None,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `event-iq analyze <event.yaml>` to score an event.");

    Ok(())
}
