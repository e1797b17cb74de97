//! Interactive, line-driven calculator session.
//!
//! Each line is one command. A field change that is accepted recomputes all
//! three outputs and prints them before the next line is read:
//!
//! ```text
//! > secondary-price 10
//! > secondary-qty 100
//! > crafting-price 50
//! Кол-во готового: 117 | Траты: 1000 | Прибыль: 4850
//! ```

use std::io::{self, BufRead, Write};

use recraft_core::{
    BonusOption, CalculationResult, Resource, SelectOption, TaxOption, Town,
    calculations::common::format_whole,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    logging,
    state::{Field, FormState, UnknownFieldError},
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Show,
    Reset,
    Options,
    Log(String),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "show" => Command::Show,
            "reset" => Command::Reset,
            "options" => Command::Options,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "log" if rest.is_empty() => return Err(CommandError::MissingValue(name.to_string())),
            "log" => Command::Log(rest.to_string()),
            _ => match name.parse::<Field>() {
                Ok(_) if rest.is_empty() => {
                    return Err(CommandError::MissingValue(name.to_string()));
                }
                Ok(field) => Command::Set(field, rest.to_string()),
                Err(UnknownFieldError { name }) => return Err(CommandError::Unknown(name)),
            },
        };
        Ok(Some(command))
    }
}

/// Renders the three outputs on one line.
pub fn render_outputs(result: &CalculationResult) -> String {
    let shown = result.display();
    format!(
        "Кол-во готового: {} | Траты: {} | Прибыль: {}",
        shown.crafted_quantity, shown.total_cost, shown.net_profit
    )
}

fn render_list<T: SelectOption>(name: &str) -> String {
    format!("{name:<9} {}", T::labels().join(", "))
}

/// Renders every option list, one per line.
pub fn render_option_lists() -> String {
    [
        render_list::<Resource>("resource"),
        render_list::<Town>("town"),
        render_list::<BonusOption>("bonus"),
        render_list::<TaxOption>("tax"),
    ]
    .join("\n")
}

fn render_help() -> String {
    let fields: Vec<&str> = Field::all().iter().map(|f| f.name()).collect();
    format!(
        "set a field:  <field> <value>\n\
         fields:       {}\n\
         commands:     show, reset, options, log <filter>, help, quit",
        fields.join(", ")
    )
}

/// Runs the read-apply-recompute loop over `input` until `quit` or end of
/// input.
pub struct Session<R, W> {
    form: FormState,
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        form: FormState,
        input: R,
        output: W,
    ) -> Self {
        Self {
            form,
            input,
            output,
            prompt: false,
        }
    }

    /// Prints `> ` before each line. Meant for a terminal on stdin.
    pub fn with_prompt(
        mut self,
        prompt: bool,
    ) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("session started");
        let mut line = String::new();

        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Ok(None) => {}
                Err(e) => writeln!(self.output, "error: {e}")?,
            }
        }

        info!("session finished");
        Ok(())
    }

    fn execute(
        &mut self,
        command: Command,
    ) -> Result<(), SessionError> {
        match command {
            Command::Set(field, value) => {
                if self.form.apply(field, &value) {
                    self.print_outputs()?;
                } else {
                    debug!(%field, value = %value, "input ignored");
                }
            }
            Command::Show => self.print_outputs()?,
            Command::Reset => {
                self.form.reset();
                self.print_outputs()?;
            }
            Command::Options => writeln!(self.output, "{}", render_option_lists())?,
            Command::Log(directive) => match logging::set_log_level(&directive) {
                Ok(()) => writeln!(self.output, "log filter set to '{directive}'")?,
                Err(e) => writeln!(self.output, "error: {e}")?,
            },
            Command::Help => writeln!(self.output, "{}", render_help())?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn print_outputs(&mut self) -> Result<(), SessionError> {
        let result = self.form.recalculate();
        debug!(
            return_rate = %format!("{:.1}%", result.return_rate * 100.0),
            total_yield = %format_whole(result.total_yield),
            "outputs refreshed"
        );
        writeln!(self.output, "{}", render_outputs(&result))?;
        Ok(())
    }
}
