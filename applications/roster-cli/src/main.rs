//! Roster - terminal front end for a JSON user collection

mod config;
mod render;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use config::RosterConfig;
use roster_client::RosterClient;
use roster_controller::{ListController, RowEvent};
use roster_core::{UserField, UserFields, UserId};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Controller = ListController<RosterClient>;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse and edit the users of a JSON collection", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users, optionally filtered and sorted
    List {
        /// Text to look for (case-insensitive substring)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Field to search in (e.g. firstName, email, city)
        #[arg(long, default_value = "")]
        criteria: String,
        /// Column to sort by; repeat to toggle the direction
        #[arg(long, value_name = "FIELD")]
        sort: Vec<UserField>,
    },
    /// Show one user as currently stored on the server
    Show {
        /// User id
        id: String,
    },
    /// Create a new user
    Create(FormArgs),
    /// Edit an existing user
    Edit {
        /// User id
        id: String,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Delete a user
    Delete {
        /// User id
        id: String,
    },
}

/// Form fields; omitted flags are not sent
#[derive(Args)]
struct FormArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    street_number: Option<String>,
    #[arg(long)]
    street: Option<String>,
}

impl From<FormArgs> for UserFields {
    fn from(args: FormArgs) -> Self {
        UserFields {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone_number: args.phone_number,
            city: args.city,
            country: args.country,
            street_number: args.street_number,
            street: args.street,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = RosterConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize tracing; stdout is reserved for the rendered list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        base_url = %config.api.base_url,
        collection = %config.api.collection,
        "Configuration loaded"
    );

    let client = RosterClient::new(config.client_config())?;
    let mut controller = ListController::new(client);

    match cli.command {
        Commands::List {
            search,
            criteria,
            sort,
        } => list(&mut controller, &search, &criteria, &sort).await?,
        Commands::Show { id } => show(&mut controller, UserId::new(id)).await?,
        Commands::Create(form) => create(&mut controller, form.into()).await?,
        Commands::Edit { id, form } => edit(&mut controller, UserId::new(id), form.into()).await?,
        Commands::Delete { id } => delete(&mut controller, UserId::new(id)).await?,
    }

    Ok(())
}

fn print_list(controller: &Controller) {
    print!(
        "{}",
        render::render_list(
            controller.display_state(),
            &controller.visible_users(),
            controller.sort().current(),
        )
    );
}

async fn list(
    controller: &mut Controller,
    search: &str,
    criteria: &str,
    sort: &[UserField],
) -> anyhow::Result<()> {
    let result = if search.trim().is_empty() && criteria.trim().is_empty() {
        controller.activate().await
    } else {
        controller.search(search, criteria).await
    };

    for field in sort {
        controller.toggle_sort(*field);
    }

    print_list(controller);
    result.context("Failed to load users")
}

async fn show(controller: &mut Controller, id: UserId) -> anyhow::Result<()> {
    let result = controller.handle_row_event(RowEvent::Info(id)).await;

    match controller.info() {
        Some(user) => print!("{}", render::render_user(user)),
        None => print_list(controller),
    }
    result.context("Failed to load user")
}

async fn create(controller: &mut Controller, fields: UserFields) -> anyhow::Result<()> {
    controller.activate().await.context("Failed to load users")?;
    controller.open_create();

    let user = controller
        .submit_create(&fields)
        .await
        .context("Failed to create user")?;

    println!("Created user {}", user.id);
    print!("{}", render::render_user(&user));
    Ok(())
}

async fn edit(controller: &mut Controller, id: UserId, fields: UserFields) -> anyhow::Result<()> {
    controller.activate().await.context("Failed to load users")?;
    controller
        .handle_row_event(RowEvent::Edit(id.clone()))
        .await
        .with_context(|| format!("Cannot edit user {}", id))?;

    // Unset flags keep the values the form was pre-filled with
    let defaults = controller.form_defaults().unwrap_or_default();
    let fields = merge_form(defaults, fields);

    controller
        .submit_edit(&fields)
        .await
        .context("Failed to update user")?;

    println!("Updated user {}", id);
    print_list(controller);
    Ok(())
}

async fn delete(controller: &mut Controller, id: UserId) -> anyhow::Result<()> {
    controller.activate().await.context("Failed to load users")?;
    controller
        .handle_row_event(RowEvent::Delete(id.clone()))
        .await
        .with_context(|| format!("Cannot delete user {}", id))?;

    controller
        .confirm_delete()
        .await
        .context("Failed to delete user")?;

    println!("Deleted user {}", id);
    print_list(controller);
    Ok(())
}

/// Overlay the flags the user passed onto the pre-filled form
fn merge_form(defaults: UserFields, input: UserFields) -> UserFields {
    UserFields {
        first_name: input.first_name.or(defaults.first_name),
        last_name: input.last_name.or(defaults.last_name),
        email: input.email.or(defaults.email),
        phone_number: input.phone_number.or(defaults.phone_number),
        city: input.city.or(defaults.city),
        country: input.country.or(defaults.country),
        street_number: input.street_number.or(defaults.street_number),
        street: input.street.or(defaults.street),
    }
}
