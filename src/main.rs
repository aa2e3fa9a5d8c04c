mod setup;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use models::{ErrorMap, FieldName, FieldValues, FormVariant};
use presenters::{FieldBindings, FormPresenter, FormView, InMemorySurface, SubmitOutcome};
use serde::Serialize;
use setup::{parse_field_values, set_up_config, set_up_tracing, ConfigError};

#[derive(Parser)]
#[command(name = "folio", about = "Run the personal site's form and page logic from the command line")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a JSON object of field values through the form and print the verdict
    Submit {
        /// Which form to run; defaults to FOLIO_FORM or `contact`
        #[arg(long)]
        form: Option<FormVariant>,

        /// File holding the field values; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Print the CDN URL configured for an image key
    Image {
        key: String,

        /// Printed when the key has no CDN entry
        #[arg(long, default_value = "")]
        placeholder: String,
    },
}

const SUBMITTED: &str = "submitted";
const REJECTED: &str = "rejected";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitReport {
    outcome: &'static str,
    form: FormVariant,
    values: FieldValues,
    errors: ErrorMap,
    focused: Option<FieldName>,
}

impl SubmitReport {
    /// 0 when the form went through, 1 when it was rejected
    fn exit_status(&self) -> u8 {
        if self.outcome == SUBMITTED {
            0
        } else {
            1
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_up_tracing(cli.json_logs);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "folio failed");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode, ConfigError> {
    let config = set_up_config()?;

    match command {
        Command::Submit { form, input } => {
            let variant = form.unwrap_or(config.form);
            let values = parse_field_values(&read_input(input)?)?;
            submit(variant, &values)
        }
        Command::Image { key, placeholder } => {
            let images = config.cdn_images()?;
            println!("{}", images.source_for(&key, &placeholder));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_input(path: Option<PathBuf>) -> Result<String, ConfigError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn submit(variant: FormVariant, values: &FieldValues) -> Result<ExitCode, ConfigError> {
    let report = submit_report(variant, values);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::from(report.exit_status()))
}

/// Run one submission against an in-memory page pre-filled with `values`
fn submit_report(variant: FormVariant, values: &FieldValues) -> SubmitReport {
    let bindings = FieldBindings::for_variant(variant);
    let surface = InMemorySurface::from_values(&bindings, values);
    let mut presenter = FormPresenter::new(variant, FormView::new(surface, bindings));

    match presenter.handle_submit_trigger() {
        SubmitOutcome::Submitted(values) => SubmitReport {
            outcome: SUBMITTED,
            form: variant,
            values,
            errors: ErrorMap::new(),
            focused: None,
        },
        SubmitOutcome::Rejected { errors, focused } => SubmitReport {
            outcome: REJECTED,
            form: variant,
            values: presenter.values().clone(),
            errors,
            focused,
        },
    }
}
