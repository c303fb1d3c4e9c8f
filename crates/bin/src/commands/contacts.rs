//! Client commands - list, add, update, and delete contacts over the API.

use std::io::{self, BufRead, Write};

use contactflow::{
    Contact, ContactId, ContactPatch,
    client::{ClientState, ContactClient, ContactForm, Submit},
};

use crate::cli::{AddArgs, DeleteArgs, ListArgs, UpdateArgs};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn print_contact(contact: &Contact) {
    println!(
        "{}  ({})",
        contact.id,
        contact.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  name:  {}", contact.name);
    println!("  email: {}", contact.email);
    println!("  phone: {}", contact.phone);
    if let Some(message) = &contact.message {
        println!("  note:  {message}");
    }
}

/// Run the list command
pub async fn list(args: &ListArgs) -> Result<()> {
    let client = ContactClient::new(&args.connection.url);
    let mut state = ClientState::new();
    state.search_term = args.search.clone().unwrap_or_default();

    state.refresh(&client).await;
    if let Some(error) = &state.error {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let filtered = state.filtered_contacts();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No contacts found");
        return Ok(());
    }
    println!("{} of {} contacts:", filtered.len(), state.contacts.len());
    println!();
    for contact in filtered {
        print_contact(contact);
        println!();
    }
    Ok(())
}

/// Run the add command
pub async fn add(args: &AddArgs) -> Result<()> {
    let client = ContactClient::new(&args.connection.url);
    let mut state = ClientState::new();
    state.form = ContactForm::new(&args.name, &args.email, &args.phone);

    match state.submit(&client).await {
        Submit::Created => {
            println!("Contact added ({} total)", state.contacts.len());
            Ok(())
        }
        Submit::Invalid => {
            eprintln!(
                "Invalid contact: name must be non-empty, email must look like \
                 local@domain.tld, and phone must be at least 10 characters"
            );
            std::process::exit(1);
        }
        Submit::Failed(message) => {
            eprintln!("Failed to add contact: {message}");
            std::process::exit(1);
        }
    }
}

/// Run the update command
pub async fn update(args: &UpdateArgs) -> Result<()> {
    let patch = ContactPatch {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        message: args.message.clone(),
    };
    if patch.is_empty() {
        eprintln!("Nothing to update: pass at least one of --name, --email, --phone, --message");
        std::process::exit(1);
    }

    let client = ContactClient::new(&args.connection.url);
    let id = ContactId::from(args.id.as_str());
    match client.update_contact(&id, &patch).await {
        Ok(updated) => {
            println!("Updated:");
            print_contact(&updated);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            eprintln!("Contact not found: {id}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to update contact: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the delete command
pub async fn delete(args: &DeleteArgs) -> Result<()> {
    if !args.yes && !confirm("Are you sure you want to delete this contact?")? {
        println!("Aborted");
        return Ok(());
    }

    let client = ContactClient::new(&args.connection.url);
    let id = ContactId::from(args.id.as_str());

    // Delete failures are not surfaced; the refreshed list is the feedback.
    let mut state = ClientState::new();
    state.delete(&client, &id).await;

    if let Some(error) = &state.error {
        eprintln!("{error}");
        std::process::exit(1);
    }
    println!("{} contacts remain", state.contacts.len());
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
