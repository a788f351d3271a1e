//! Command line driver for the Naming Conventions and Phosphorescence puzzles

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ktane_modules::{
    config::{CliOverrides, OutputFormat, Settings},
    puzzle::{labels::glyph_rows, InputEvent, NamingConventions, PressOutcome},
    rules::{DataType, MonoRandom, SolutionGenerator},
    survey_rule_seeds,
    utils::{ColorOutput, ConsoleDisplay, ConsoleReport, SolutionFormatter},
};
use log::debug;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ktane_modules")]
#[command(about = "Naming Conventions and Phosphorescence puzzle tools")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the solution table for a rule seed
    Solution {
        /// Rule seed (1 selects the default rules)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        rule_seed: i32,

        /// Only print the solution for this data type
        #[arg(short, long)]
        variant: Option<DataType>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Play a puzzle instance with scripted button presses
    Play {
        /// Session configuration file
        #[arg(short, long, default_value = "config/session.yaml")]
        config: PathBuf,

        /// Rule seed (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        rule_seed: Option<i32>,

        /// Seed for the instance's own randomness (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        module_seed: Option<i32>,

        /// Buttons to press, in order; 0 submits
        #[arg(short, long, value_delimiter = ',')]
        press: Vec<usize>,

        /// Bomb timer ticks to deliver before pressing
        #[arg(short, long, default_value_t = 0)]
        ticks: u32,

        /// Press the correct buttons and submit after the scripted presses
        #[arg(long)]
        auto_solve: bool,

        /// Print every rendered frame
        #[arg(short, long)]
        verbose: bool,
    },

    /// Resolve the Phosphorescence settings overrides
    Resolve {
        /// Session configuration file
        #[arg(short, long, default_value = "config/session.yaml")]
        config: PathBuf,

        /// Mod settings JSON file (overrides config)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Mission description text (overrides config)
        #[arg(short, long)]
        mission: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check a range of rule seeds for data types that share a solution
    Survey {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        from: i32,

        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        to: i32,
    },

    /// Create a default session configuration
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solution {
            rule_seed,
            variant,
            format,
        } => solution_command(rule_seed, variant, format),
        Commands::Play {
            config,
            rule_seed,
            module_seed,
            press,
            ticks,
            auto_solve,
            verbose,
        } => play_command(
            config,
            CliOverrides {
                rule_seed,
                module_seed,
                ..Default::default()
            },
            &press,
            ticks,
            auto_solve,
            verbose,
        ),
        Commands::Resolve {
            config,
            settings,
            mission,
            format,
        } => resolve_command(
            config,
            CliOverrides {
                settings_file: settings,
                mission_description: mission,
                format,
                ..Default::default()
            },
        ),
        Commands::Survey { from, to } => survey_command(from, to),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        debug!("Config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn solution_command(rule_seed: i32, variant: Option<DataType>, format: OutputFormat) -> Result<()> {
    let table = SolutionGenerator::generate(rule_seed);

    match (format, variant) {
        (OutputFormat::Json, Some(data_type)) => {
            println!("{}", serde_json::to_string_pretty(table.get(data_type))?);
        }
        (OutputFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        (OutputFormat::Text, Some(data_type)) => {
            println!(
                "{}",
                SolutionFormatter::format_solution(data_type, table.get(data_type))
            );
        }
        (OutputFormat::Text, None) => {
            print!("{}", SolutionFormatter::format_table(&table));
        }
    }

    Ok(())
}

fn play_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    presses: &[usize],
    ticks: u32,
    auto_solve: bool,
    verbose: bool,
) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let module_seed = settings.puzzle.module_seed.unwrap_or_else(rand::random);

    println!(
        "{}",
        ColorOutput::info(&format!(
            "🧩 Naming Conventions #{} (rule seed {}, module seed {})",
            settings.puzzle.module_id, settings.puzzle.rule_seed, module_seed
        ))
    );

    let mut module = NamingConventions::new(
        settings.puzzle.module_id,
        settings.puzzle.rule_seed,
        &mut MonoRandom::new(module_seed),
        ConsoleDisplay::new(verbose),
        ConsoleReport::default(),
    );

    let mut events: Vec<InputEvent> = (0..ticks).map(|_| InputEvent::TimerTick).collect();
    events.extend(presses.iter().map(|&button| InputEvent::Press(button)));
    let mut outcomes = module.run(&mut events.into_iter());

    if auto_solve && !module.is_solved() {
        let solution = *module.solution();
        let states = *module.states();
        let mut fixes: Vec<InputEvent> = solution
            .iter()
            .zip(states[1..].iter())
            .enumerate()
            .filter(|(_, (want, have))| want != have)
            .map(|(i, _)| InputEvent::Press(i + 1))
            .collect();
        fixes.push(InputEvent::Press(0));
        outcomes.extend(module.run(&mut fixes.into_iter()));
    }

    let selection = module.selection();
    println!("Selection: {} (index {})", selection.data_type, selection.index);
    println!(
        "{}",
        SolutionFormatter::format_frame(
            &glyph_rows(module.states(), &selection, module.is_solved()),
            module.states()
        )
    );

    let strikes = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, PressOutcome::Strike(_)))
        .count();
    if module.is_solved() {
        println!("{}", ColorOutput::success(&format!("Solved with {} strike(s)", strikes)));
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Not solved yet, {} strike(s)", strikes))
        );
        println!("Expected: {}", module.solution_labels().join(", "));
    }

    module.teardown();
    Ok(())
}

fn resolve_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;
    let resolved = settings
        .resolve_override()
        .context("Failed to resolve Phosphorescence settings")?;

    match settings.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Text => println!("{}", resolved),
    }

    Ok(())
}

fn survey_command(from: i32, to: i32) -> Result<()> {
    if from > to {
        anyhow::bail!("Empty seed range: {} > {}", from, to);
    }

    println!(
        "{}",
        ColorOutput::info(&format!("🔬 Surveying rule seeds {}..={}", from, to))
    );
    let entries = survey_rule_seeds(from..=to);
    print!("{}", SolutionFormatter::format_survey(&entries));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up session configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("session.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let mod_settings_path = config_dir.join("modsettings.json");
    if !mod_settings_path.exists() || force {
        let defaults = concat!(
            "{\n",
            "  \"Phosphorescence -> CruelMode\": false,\n",
            "  \"Phosphorescence -> StreamDelay\": 0\n",
            "}\n",
        );
        std::fs::write(&mod_settings_path, defaults)
            .with_context(|| format!("Failed to write {}", mod_settings_path.display()))?;
        println!("Created: {}", mod_settings_path.display());
    }

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    Ok(())
}
