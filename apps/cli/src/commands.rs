//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use leadbase_core::pipeline::{ProcessOutcome, confirm_batch, process_file};
use leadbase_core::store::LeadStore;
use leadbase_enrich::EnrichClient;
use leadbase_export::{BundleInput, build_bundle};
use leadbase_shared::{
    AppConfig, Settings, SettingsConfig, SettingsUpdate, load_config, resolve_api_key, save_config,
};

/// Records shown per category when previewing a processed file.
const PREVIEW_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Leadbase — turn saved company profiles into sourcing-ready lead data.
#[derive(Parser)]
#[command(
    name = "leadbase",
    version,
    about = "Extract deduplicated lead records and outreach drafts from saved HTML profile pages.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Process saved profile pages into a deduplicated result set.
    Process {
        /// HTML files to process, in order.
        files: Vec<PathBuf>,

        /// Commit each file's preview into the result set.
        #[arg(long)]
        commit: bool,

        /// Print previews as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Write the export bundle (CSVs + drafts) to this path afterwards.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Override the sourcing analyst for this run.
        #[arg(long)]
        analyst: Option<String>,

        /// Override the industry for this run.
        #[arg(long)]
        industry: Option<String>,

        /// Override the industry vertical for this run.
        #[arg(long)]
        industry_vertical: Option<String>,

        /// Override the investment cycle for this run.
        #[arg(long)]
        investment_cycle: Option<String>,
    },

    /// Sourcing settings management.
    Settings {
        /// Settings subcommand.
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Show the settings new runs will start with.
    Show,
    /// Update startup settings in the config file.
    Set {
        #[arg(long)]
        quality_level: Option<String>,
        #[arg(long)]
        sub_pipeline: Option<String>,
        #[arg(long)]
        stage: Option<String>,
        #[arg(long)]
        industry_vertical: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        analyst: Option<String>,
        #[arg(long)]
        investment_cycle: Option<String>,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "leadbase=info",
        1 => "leadbase=debug",
        _ => "leadbase=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Process {
            files,
            commit,
            json,
            out,
            analyst,
            industry,
            industry_vertical,
            investment_cycle,
        } => {
            let update = SettingsUpdate {
                sourcing_analyst: analyst,
                industry,
                industry_vertical,
                investment_cycle,
                ..Default::default()
            };
            cmd_process(&files, commit, json, out.as_deref(), update).await
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => cmd_settings_show(),
            SettingsAction::Set {
                quality_level,
                sub_pipeline,
                stage,
                industry_vertical,
                industry,
                analyst,
                investment_cycle,
            } => cmd_settings_set(SettingsUpdate {
                prospect_quality_level: quality_level,
                sub_pipeline,
                stage,
                industry_vertical,
                industry,
                sourcing_analyst: analyst,
                investment_cycle,
            }),
        },
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// process
// ---------------------------------------------------------------------------

async fn cmd_process(
    files: &[PathBuf],
    commit: bool,
    json: bool,
    out: Option<&std::path::Path>,
    update: SettingsUpdate,
) -> Result<()> {
    if files.is_empty() {
        return Err(eyre!("no input files given"));
    }

    let config = load_config()?;
    let store = LeadStore::new(Settings::from(&config.settings));
    if !update.is_empty() {
        store.update_settings(update);
    }

    let enricher = EnrichClient::new(resolve_api_key(&config))?;

    info!(files = files.len(), commit, "processing profile pages");

    let spinner = new_spinner();
    let mut outcomes: Vec<ProcessOutcome> = Vec::new();

    for (i, file) in files.iter().enumerate() {
        let display_name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.display().to_string());

        spinner.set_message(format!(
            "Processing [{}/{}] {display_name}",
            i + 1,
            files.len()
        ));

        let bytes = match std::fs::read(file) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "cannot read file, skipping");
                continue;
            }
        };

        match process_file(&display_name, &bytes, &store, &enricher).await {
            Ok(outcome) => {
                if commit {
                    confirm_batch(&outcome.preview, &store);
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                // Input-format problems are reported per file and leave the
                // result set untouched.
                warn!(file = %display_name, error = %e, "file rejected");
            }
        }
    }

    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            print_preview(outcome);
        }

        let totals = store.totals();
        println!();
        println!("  Result set:");
        println!("  Contacts:     {}", totals.contacts);
        println!("  Companies:    {}", totals.companies);
        println!("  Deals:        {}", totals.deals);
        println!("  Email drafts: {}", totals.email_templates);
        if !commit {
            println!();
            println!("  (preview only — re-run with --commit to accumulate)");
        }
    }

    if let Some(out_path) = out {
        let snapshot = store.export_snapshot();
        let bundle = build_bundle(&BundleInput {
            contacts: &snapshot.contacts,
            companies: &snapshot.companies,
            deals: &snapshot.deals,
            email_templates: &snapshot.email_templates,
        })?;
        std::fs::write(out_path, &bundle)
            .map_err(|e| eyre!("cannot write bundle to '{}': {e}", out_path.display()))?;
        println!();
        println!(
            "  Bundle written: {} ({} bytes)",
            out_path.display(),
            bundle.len()
        );
    }

    Ok(())
}

/// Print one file's preview, capped per category.
fn print_preview(outcome: &ProcessOutcome) {
    println!();
    println!("  {}", outcome.file_name);

    if outcome.preview.is_empty() {
        println!("    all records already accumulated");
        return;
    }

    for contact in outcome.preview.contacts.iter().take(PREVIEW_LIMIT) {
        println!(
            "    contact: {} <{}> ({})",
            contact.contact_name, contact.email, contact.company_name
        );
    }
    for company in outcome.preview.companies.iter().take(PREVIEW_LIMIT) {
        let website = if company.website.is_empty() {
            "no website"
        } else {
            company.website.as_str()
        };
        println!("    company: {} ({website})", company.company_name);
    }
    for deal in outcome.preview.deals.iter().take(PREVIEW_LIMIT) {
        println!("    deal:    {} [{}]", deal.deal_name, deal.stage);
    }
    let drafts = outcome.preview.email_templates.len();
    if drafts > 0 {
        println!("    drafts:  {drafts}");
    }
}

fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

// ---------------------------------------------------------------------------
// settings
// ---------------------------------------------------------------------------

fn cmd_settings_show() -> Result<()> {
    let config = load_config()?;
    let settings = Settings::from(&config.settings);
    println!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

fn cmd_settings_set(update: SettingsUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(eyre!("no settings given — pass at least one --option"));
    }

    let mut config = load_config()?;
    let mut settings = Settings::from(&config.settings);
    update.apply(&mut settings);

    config.settings = SettingsConfig {
        prospect_quality_level: settings.prospect_quality_level,
        sub_pipeline: settings.sub_pipeline,
        stage: settings.stage,
        industry_vertical: settings.industry_vertical,
        industry: settings.industry,
        sourcing_analyst: settings.sourcing_analyst,
        investment_cycle: settings.investment_cycle,
    };

    let path = save_config(&config)?;
    println!("Settings saved to: {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = leadbase_shared::init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
