use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use recraft_core::{BonusOption, CalculationInput, TaxOption};
use tracing::{debug, info};

use recraft_cli::{
    batch,
    config::AppConfig,
    logging,
    session::{self, Session},
    state::FormState,
    utils::parse_number,
};

/// Printed before an interactive session.
const SESSION_BANNER: &str = "Recraft calculator: type 'help' for commands, 'quit' to leave.";

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Recraft profit calculator.
///
/// Computes the crafted quantity after resource returns, the total cost and
/// the net profit after tax.
#[derive(Debug, Parser)]
#[command(name = "recraft", version, about)]
struct Cli {
    /// TOML configuration file (defaults to `recraft.toml` when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `recraft_core=trace`. Overrides
    /// `RUST_LOG` and the configuration file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate one scenario and print the outputs.
    Calc(CalcArgs),
    /// Interactive form: one `<field> <value>` per line (default).
    Session,
    /// Calculate every scenario in a CSV file and print CSV results.
    Batch {
        /// CSV file with one scenario per row.
        file: PathBuf,
    },
    /// List the labels accepted by each option.
    Options,
}

/// Values not given here come from the configuration defaults.
#[derive(Debug, Args)]
struct CalcArgs {
    #[arg(long, value_parser = parse_number)]
    primary_price: Option<f64>,
    #[arg(long, value_parser = parse_number)]
    secondary_price: Option<f64>,
    #[arg(long, value_parser = parse_number)]
    primary_qty: Option<f64>,
    #[arg(long, value_parser = parse_number)]
    secondary_qty: Option<f64>,
    #[arg(long, value_parser = parse_number)]
    food_price: Option<f64>,
    /// Station fee per crafted unit.
    #[arg(long, value_parser = parse_number)]
    station_cost: Option<f64>,
    /// Sale price per crafted unit.
    #[arg(long, value_parser = parse_number)]
    crafting_price: Option<f64>,
    /// Use focus.
    #[arg(long, conflicts_with = "no_focus")]
    focus: bool,
    /// Do not use focus, even if the configuration enables it.
    #[arg(long)]
    no_focus: bool,
    /// Bonus label (`Бонус`, `10%`, `Нэту(`).
    #[arg(long)]
    bonus: Option<BonusOption>,
    /// Resource label.
    #[arg(long)]
    resource: Option<String>,
    /// Town label.
    #[arg(long)]
    town: Option<String>,
    /// Tax label (`Налог`, `6.5%`, `10.5%`).
    #[arg(long)]
    tax: Option<TaxOption>,
}

impl CalcArgs {
    fn apply_to(
        self,
        mut input: CalculationInput,
    ) -> CalculationInput {
        let numbers = [
            (self.primary_price, &mut input.primary_price),
            (self.secondary_price, &mut input.secondary_price),
            (self.primary_qty, &mut input.primary_qty),
            (self.secondary_qty, &mut input.secondary_qty),
            (self.food_price, &mut input.food_price),
            (self.station_cost, &mut input.station_cost_per_unit),
            (self.crafting_price, &mut input.crafting_price),
        ];
        for (value, slot) in numbers {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if self.focus {
            input.focus_enabled = true;
        }
        if self.no_focus {
            input.focus_enabled = false;
        }
        if let Some(bonus) = self.bonus {
            input.has_bonus = bonus.has_bonus();
        }
        if let Some(resource) = self.resource {
            input.resource = resource;
        }
        if let Some(town) = self.town {
            input.town = town;
        }
        if let Some(tax) = self.tax {
            input.tax_rate = tax.rate();
        }
        input
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let env_filter = std::env::var(logging::LOG_ENV_VAR).ok();
    let filter = logging::select_filter(
        cli.log_level.as_deref(),
        env_filter.as_deref(),
        &config.logging.level,
    );
    logging::init_logging(filter)?;
    debug!(filter, "logging initialized");

    if let Some(path) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        logging::enable_file_logging(path)?;
        debug!(path = %path.display(), "file logging enabled");
    }

    let defaults = config
        .defaults
        .to_input()
        .context("Invalid [defaults] in configuration")?;

    match cli.command.unwrap_or(Command::Session) {
        Command::Calc(args) => {
            let input = args.apply_to(defaults);
            let result = recraft_core::calculate(&input);
            println!("{}", session::render_outputs(&result));
        }
        Command::Session => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("{SESSION_BANNER}");
            }
            let mut session = Session::new(FormState::new(defaults), stdin.lock(), io::stdout())
                .with_prompt(interactive);
            session.run()?;
        }
        Command::Batch { file } => {
            let inputs = batch::load_from_file(&file)
                .with_context(|| format!("Failed to read scenarios from: {}", file.display()))?;
            let written = batch::write_results(&inputs, io::stdout().lock())?;
            info!(rows = written, "batch complete");
        }
        Command::Options => {
            println!("{}", session::render_option_lists());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("recraft").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_session() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn calc_args_override_defaults() {
        let cli = parse(&[
            "calc",
            "--secondary-price",
            "10",
            "--secondary-qty",
            "100",
            "--crafting-price",
            "50",
            "--bonus",
            "10%",
            "--tax",
            "6.5%",
            "--town",
            "Fort Sterling",
        ]);
        let Some(Command::Calc(args)) = cli.command else {
            panic!("expected calc");
        };
        let defaults = CalculationInput {
            food_price: 25.0,
            ..CalculationInput::default()
        };

        let input = args.apply_to(defaults);

        assert_eq!(input.secondary_qty, 100.0);
        assert_eq!(input.food_price, 25.0);
        assert!(input.has_bonus);
        assert_eq!(input.tax_rate, 0.065);
        assert_eq!(input.town, "Fort Sterling");
    }

    #[test]
    fn no_focus_clears_configured_focus() {
        let Some(Command::Calc(args)) = parse(&["calc", "--no-focus"]).command else {
            panic!("expected calc");
        };
        let defaults = CalculationInput {
            focus_enabled: true,
            ..CalculationInput::default()
        };

        assert!(!args.apply_to(defaults).focus_enabled);
    }

    #[test]
    fn non_finite_numbers_are_rejected_by_parser() {
        for value in ["inf", "infinity", "NaN"] {
            let result = Cli::try_parse_from(["recraft", "calc", "--secondary-qty", value]);

            assert!(result.is_err(), "accepted {value}");
        }
    }

    #[test]
    fn padded_number_is_accepted() {
        let Some(Command::Calc(args)) = parse(&["calc", "--crafting-price", " 50 "]).command else {
            panic!("expected calc");
        };

        assert_eq!(args.crafting_price, Some(50.0));
    }

    #[test]
    fn session_banner_names_session_commands() {
        assert!(SESSION_BANNER.is_ascii());
        for name in ["help", "quit"] {
            assert!(SESSION_BANNER.contains(&format!("'{name}'")));
            assert!(matches!(session::Command::parse(name), Ok(Some(_))));
        }
    }

    #[test]
    fn unknown_tax_label_is_rejected_by_parser() {
        let result = Cli::try_parse_from(["recraft", "calc", "--tax", "12%"]);

        assert!(result.is_err());
    }
}
