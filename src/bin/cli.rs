//! Wedding RSVP CLI
//!
//! Command-line client for a running Wedding RSVP server:
//! - List guests and response tallies
//! - Add guests
//! - Print RSVP links
//! - Record responses

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wedding_rsvp::api::dto::{GuestListResponse, GuestResponse, LinkResponse};
use wedding_rsvp::config::generate_default_config;
use wedding_rsvp::guests::GuestStats;

#[derive(Parser)]
#[command(name = "wedding-rsvp-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage the wedding guest list from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all guests
    Guests,

    /// Add a guest
    Add {
        /// Guest name
        name: String,
        /// Guest email
        email: String,
    },

    /// Show response tallies
    Stats,

    /// Print a guest's RSVP link
    Link {
        /// Guest id
        id: String,
    },

    /// Record an RSVP on behalf of a guest
    Respond {
        /// Guest id
        id: String,
        /// yes or no
        #[arg(short, long)]
        attending: String,
        /// Party size including the guest (1-5)
        #[arg(short = 'n', long, default_value = "1")]
        guest_count: u8,
        /// Message for the couple
        #[arg(short, long, default_value = "")]
        message: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Guests => {
            let response = client
                .get(format!("{}/api/v1/guests", cli.api_url))
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;
            let list: GuestListResponse = expect_success(response).await?.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&list.guests)?);
            } else if list.guests.is_empty() {
                println!("No guests yet.");
                println!();
                println!("Add your first guest with:");
                println!("  wedding-rsvp-cli add \"Priya Shah\" priya@example.com");
            } else {
                println!(
                    "{:<6} {:<24} {:<28} {:<14} {}",
                    "ID", "Name", "Email", "Status", "Party"
                );
                println!("{}", "-".repeat(80));
                for guest in &list.guests {
                    print_guest_row(guest);
                }
                println!();
                println!("{} guests", list.total);
            }
        }

        Commands::Add { name, email } => {
            let body = serde_json::json!({ "name": name, "email": email });
            let response = client
                .post(format!("{}/api/v1/guests", cli.api_url))
                .json(&body)
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;
            let guest: GuestResponse = expect_success(response).await?.json().await?;

            println!("{} has been added to the guest list.", guest.name);
            println!("RSVP link: {}", guest.rsvp_link);
        }

        Commands::Stats => {
            let response = client
                .get(format!("{}/api/v1/stats", cli.api_url))
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;
            let stats: GuestStats = expect_success(response).await?.json().await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Guests:          {}", stats.total_guests);
                println!("Attending:       {}", stats.attending);
                println!("Not attending:   {}", stats.not_attending);
                println!("Pending:         {}", stats.pending);
                println!();
                println!("Total people attending: {}", stats.total_attendees);
            }
        }

        Commands::Link { id } => {
            let response = client
                .get(format!(
                    "{}/api/v1/guests/{}/link",
                    cli.api_url,
                    urlencoding::encode(&id)
                ))
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;
            let link: LinkResponse = expect_success(response).await?.json().await?;

            println!("{}", link.link);
        }

        Commands::Respond {
            id,
            attending,
            guest_count,
            message,
        } => {
            let attending = attending.to_lowercase();
            if attending != "yes" && attending != "no" {
                bail!("--attending must be 'yes' or 'no', got '{}'", attending);
            }

            let body = serde_json::json!({
                "attending": attending,
                "guest_count": guest_count,
                "message": message,
            });
            let response = client
                .post(format!(
                    "{}/api/v1/guests/{}/response",
                    cli.api_url,
                    urlencoding::encode(&id)
                ))
                .json(&body)
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;
            let guest: GuestResponse = expect_success(response).await?.json().await?;

            println!("Recorded response for {}: {}", guest.name, guest.status);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn connect_hint(api_url: &str) -> String {
    format!(
        "Cannot connect to Wedding RSVP server at {}. Start it with: cargo run --bin wedding-rsvp",
        api_url
    )
}

/// Turn a non-2xx response into an error carrying the server's message
async fn expect_success(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(text);

    bail!("Request failed ({}): {}", status, message)
}

fn print_guest_row(guest: &GuestResponse) {
    let party = match guest.status {
        wedding_rsvp::GuestStatus::Attending => (guest.guest_count + 1).to_string(),
        _ => "-".to_string(),
    };

    println!(
        "{:<6} {:<24} {:<28} {:<14} {}",
        guest.id,
        truncate(&guest.name, 24),
        truncate(&guest.email, 28),
        guest.status,
        party
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
