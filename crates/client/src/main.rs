//! panchangam-client CLI entry point.

use std::io;

use clap::Parser;
use panchangam_client::cli::admin::AdminAction;
use panchangam_client::cli::health::HealthAction;
use panchangam_client::cli::subscriptions::{KeyArgs, SubscriptionsAction};
use panchangam_client::cli::{Cli, Commands};
use panchangam_client::narrator::{narrate, ConsoleNarrator};
use panchangam_client::output::{pretty, render};
use panchangam_client::{ClientError, PanchangamClient};
use panchangam_core::subscription::SubscriptionKey;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = PanchangamClient::new(&cli.base_url);
    let format = cli.format;

    match cli.command {
        Commands::Day(args) => {
            let day = client.get_day(args.date).await?;
            println!("{}", render(&day, format, pretty::format_day));
            if args.narrate {
                if !cli.quiet {
                    println!();
                }
                narrate(&day.entry, &mut ConsoleNarrator::new(io::stdout().lock()))?;
            }
        }
        Commands::Range(args) => {
            let entries = client.list_range(args.start, args.end).await?;
            println!("{}", render(&entries, format, |e| pretty::format_entries(e)));
        }
        Commands::Ics(args) => {
            let calendar = match &args.token {
                _ if args.sample => client.sample_ics().await?,
                Some(token) => client.subscription_feed(token).await?,
                None => client.export_ics(&args.export_query()).await?,
            };
            std::fs::write(&args.output, &calendar)?;
            if !cli.quiet {
                println!(
                    "Wrote {} bytes to {}",
                    calendar.len(),
                    args.output.display()
                );
            }
        }
        Commands::Subscriptions(cmd) => match cmd.action {
            SubscriptionsAction::Create {
                user_id,
                preferences,
            } => {
                let created = client
                    .create_subscription(&preferences.into_create(user_id))
                    .await?;
                println!("{}", render(&created, format, pretty::format_created));
            }
            SubscriptionsAction::Get { key } => {
                let details = client.get_subscription(&require_key(&key)?).await?;
                println!("{}", render(&details, format, pretty::format_details));
            }
            SubscriptionsAction::Update { key, preferences } => {
                let update = preferences.into_update();
                if update.is_empty() {
                    return Err(ClientError::InvalidInput(
                        "Nothing to update; pass at least one preference flag".to_string(),
                    )
                    .into());
                }
                let updated = client
                    .update_subscription(&require_key(&key)?, &update)
                    .await?;
                println!(
                    "{}",
                    render(&updated, format, |u| format!(
                        "{}\n{}",
                        u.message,
                        pretty::format_preferences(&u.preferences)
                    ))
                );
            }
            SubscriptionsAction::Delete { key } => {
                let deleted = client.delete_subscription(&require_key(&key)?).await?;
                if !cli.quiet {
                    println!("{}", render(&deleted, format, |d| d.message.clone()));
                }
            }
        },
        Commands::Admin(cmd) => match cmd.action {
            AdminAction::Overview => {
                let overview = client.admin_overview().await?;
                println!("{}", render(&overview, format, pretty::format_overview));
            }
        },
        Commands::Health(cmd) => match cmd.action {
            HealthAction::Live => {
                client.livez().await?;
                if !cli.quiet {
                    println!("Live");
                }
            }
            HealthAction::Ready => {
                let readiness = client.readyz().await?;
                println!("{}", render(&readiness, format, pretty::format_readiness));
                if !readiness.healthy {
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}

fn require_key(args: &KeyArgs) -> Result<SubscriptionKey, ClientError> {
    args.key().ok_or_else(|| {
        ClientError::InvalidInput("Either --token or --user-id is required".to_string())
    })
}

