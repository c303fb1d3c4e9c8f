//! CLI argument definitions for the ContactFlow binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ContactFlow contact manager
#[derive(Parser, Debug)]
#[command(name = "contactflow")]
#[command(about = "ContactFlow: contact manager server and client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the contact API server
    Serve(ServeArgs),
    /// Check liveness of a running server
    Health(HealthArgs),
    /// List contacts, with optional local search filtering
    List(ListArgs),
    /// Add a new contact
    Add(AddArgs),
    /// Update fields of an existing contact
    Update(UpdateArgs),
    /// Delete a contact
    Delete(DeleteArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5000, env = "CONTACTFLOW_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "CONTACTFLOW_HOST")]
    pub host: String,

    /// Path of the JSON database file. Mutations are written through to it.
    /// Required: the server refuses to start without a database location.
    #[arg(short = 'D', long, env = "CONTACTFLOW_DB")]
    pub db_path: PathBuf,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:5000", env = "CONTACTFLOW_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}

/// Connection arguments shared by the client commands
#[derive(clap::Args, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the server
    #[arg(long, default_value = "http://127.0.0.1:5000", env = "CONTACTFLOW_URL")]
    pub url: String,
}

/// Arguments for the list command
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Case-insensitive substring filter over name and email,
    /// applied locally after fetching
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the contacts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the add command
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address (must look like local@domain.tld)
    #[arg(long)]
    pub email: String,

    /// Phone number (at least 10 characters)
    #[arg(long)]
    pub phone: String,
}

/// Arguments for the update command
#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Id of the contact to update
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// New message
    #[arg(long)]
    pub message: Option<String>,
}

/// Arguments for the delete command
#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Id of the contact to delete
    pub id: String,

    /// Skip the interactive confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}
