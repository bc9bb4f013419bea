mod flow;
mod navigator;
mod prompt;

use anyhow::{bail, Context};
use catalog_config::load as load_config;
use catalog_registration::{SubmitOutcome, UserRole, ValidationError};
use catalog_runtime::{telemetry, FrontendServices, RegistrationForm};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::flow::{fields_to_revisit, missing_fields, Field, RetryChoice};
use crate::navigator::TerminalNavigator;
use crate::prompt::Prompter;

#[derive(Parser)]
#[command(name = "catalog-console")]
#[command(about = "Library catalog account registration (register by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new library account
    Register(RegisterArgs),
    /// Print the effective configuration
    ShowConfig,
}

#[derive(Args, Default)]
struct RegisterArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Account type; asked interactively when omitted
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
    /// Override the authentication service base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => UserRole::Admin,
            RoleArg::User => UserRole::User,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Register(args)) => run_register(args).await,
        Some(Commands::ShowConfig) => show_config(),
        None => run_register(RegisterArgs::default()).await,
    }
}

fn show_config() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    let rendered =
        serde_json::to_string_pretty(&config).context("failed to render configuration")?;
    println!("{rendered}");
    Ok(())
}

async fn run_register(args: RegisterArgs) -> anyhow::Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    let mut config = load_config().context("failed to load configuration")?;
    if let Some(base_url) = args.base_url {
        config.auth_service.base_url = base_url;
    }

    let services =
        FrontendServices::initialise(&config).context("failed to initialise front end services")?;
    let navigator = TerminalNavigator::new(config.auth_service.base_url.clone());
    let mut form = services.registration_form(navigator);

    info!(base_url = %config.auth_service.base_url, "starting registration console");

    println!("Library Catalog Registration");
    println!("Use an @mail.uc.edu address. Press Enter to keep a value shown in brackets.");
    println!("---");

    if let Some(value) = args.first_name {
        form.set_first_name(value);
    }
    if let Some(value) = args.last_name {
        form.set_last_name(value);
    }
    if let Some(value) = args.email {
        form.set_email(value);
    }

    let mut prompter = Prompter::new();

    let role = match args.role {
        Some(role) => role.into(),
        None => ask_role(&mut prompter).await?,
    };
    form.set_role(role);

    let pending = missing_fields(form.draft());
    ask_fields(&mut prompter, &mut form, &pending).await?;

    loop {
        let error = match form.submit().await {
            SubmitOutcome::Succeeded(user) => {
                if let Some(user) = user {
                    info!(user_id = user.id, "account created");
                }
                return Ok(());
            }
            SubmitOutcome::Invalid(error) | SubmitOutcome::Failed(error) => error,
        };

        println!("! {error}");

        let revisit = fields_to_revisit(&error, form.draft());
        if !revisit.is_empty() {
            ask_fields(&mut prompter, &mut form, &revisit).await?;
            continue;
        }

        if !ask_retry(&mut prompter, &mut form, &error).await? {
            bail!("registration abandoned: {error}");
        }
    }
}

async fn ask_role(prompter: &mut Prompter) -> anyhow::Result<UserRole> {
    loop {
        let answer = prompter
            .ask("Account type (admin/user)", Some("user"))
            .await?;
        match answer.parse::<UserRole>() {
            Ok(role) => return Ok(role),
            Err(error) => println!("! {error}"),
        }
    }
}

async fn ask_fields(
    prompter: &mut Prompter,
    form: &mut RegistrationForm<TerminalNavigator>,
    fields: &[Field],
) -> anyhow::Result<()> {
    for field in fields {
        let current = field.value(form.draft()).to_string();
        let default = (!field.is_secret()).then_some(current.as_str());
        let value = prompter.ask(field.label(), default).await?;
        field.apply(form, value);
    }
    Ok(())
}

/// After a rejection or network failure, offer to resend, edit, or quit.
async fn ask_retry(
    prompter: &mut Prompter,
    form: &mut RegistrationForm<TerminalNavigator>,
    error: &ValidationError,
) -> anyhow::Result<bool> {
    let hint = match error {
        ValidationError::NetworkFailure => "Enter to retry, 'edit' to change details, 'q' to quit",
        _ => "'edit' to change details, Enter to resend, 'q' to quit",
    };

    loop {
        let answer = prompter.ask(hint, None).await?;
        match RetryChoice::parse(&answer) {
            Some(RetryChoice::Resend) => return Ok(true),
            Some(RetryChoice::Edit) => {
                ask_fields(prompter, form, &Field::ALL).await?;
                return Ok(true);
            }
            Some(RetryChoice::Quit) => return Ok(false),
            None => println!("! unrecognised choice"),
        }
    }
}
