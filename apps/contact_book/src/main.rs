use std::{io, time::Duration};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use client_core::ContactStoreClient;
use contact_book::{launch, ui, ContactPage};
use shared::domain::DraftField;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "contact_book", about = "Contact book backed by the contact service")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8443")]
    server_url: String,
    /// Seconds to wait for the contact service before giving up on a load or save.
    #[arg(long, default_value_t = 10)]
    wait_secs: u64,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the saved contacts.
    List,
    /// Save one contact and print the page.
    Add {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone_number: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Edit and submit the form line by line (default).
    Interactive,
}

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    let wait = Duration::from_secs(args.wait_secs);

    let bridge = launch(ContactStoreClient::http(&args.server_url))?;
    let mut page = ContactPage::open(&bridge);
    page.mount();

    let outcome = match args.command.unwrap_or(Command::Interactive) {
        Command::List => {
            if !page.wait_until_settled(wait) {
                bail!("timed out loading contacts from {}", args.server_url);
            }
            print!("{}", ui::render_page(page.state()));
            match page.state().error() {
                Some(error) => Err(anyhow!("{error}")),
                None => Ok(()),
            }
        }
        Command::Add {
            full_name,
            email,
            phone_number,
            notes,
        } => {
            page.set_field(DraftField::FullName, full_name);
            page.set_field(DraftField::Email, email);
            page.set_field(DraftField::PhoneNumber, phone_number);
            page.set_field(DraftField::Notes, notes);
            add_contact(&mut page, wait)
        }
        Command::Interactive => {
            ui::run_interactive(&mut page, io::stdin().lock(), io::stdout().lock(), wait)
        }
    };

    drop(page);
    bridge.shutdown();
    outcome
}

fn add_contact(page: &mut ContactPage, wait: Duration) -> Result<()> {
    let missing = page.state().form().missing_required_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.into_iter().map(DraftField::label).collect();
        bail!("please fill in: {}", names.join(", "));
    }
    if !page.wait_until_settled(wait) {
        bail!("timed out loading contacts");
    }

    page.submit();
    if !page.wait_until_settled(wait) {
        bail!("timed out waiting for the contact service");
    }
    print!("{}", ui::render_page(page.state()));
    match page.state().error() {
        Some(error) => bail!("{error}"),
        None => Ok(()),
    }
}
