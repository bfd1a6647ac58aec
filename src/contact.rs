//! `folio contact` - the contact card, and message delivery through the
//! configured mail relay.

use anyhow::{bail, Result};
use reqwest::Client;

use crate::config::Config;
use crate::relay::{ContactMessage, RelayClient};

pub fn run_card(config: &Config) -> Result<()> {
    println!("Let's Work Together");
    println!("Have a project in mind or want to discuss DevOps strategies? I'm always open to interesting conversations and collaboration opportunities.");
    println!();

    println!("Connect With Me");
    for link in config.contact_links() {
        println!("  {:<18} {}", link.label, link.display);
        println!("  {:<18} {}", "", link.href);
    }
    println!();
    println!("I typically respond within 24-48 hours.");
    println!("Send a message directly: folio contact send --name <NAME> --email <EMAIL> --message <TEXT>");

    Ok(())
}

pub async fn run_send(
    config: &Config,
    client: &Client,
    name: &str,
    email: &str,
    message: &str,
) -> Result<()> {
    if name.trim().is_empty() {
        bail!("--name must not be empty.");
    }
    if message.trim().is_empty() {
        bail!("--message must not be empty.");
    }
    if !email.contains('@') {
        bail!("'{}' does not look like an email address.", email);
    }

    let relay = RelayClient::from_config(client.clone(), &config.relay)?;
    relay
        .send(&ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
        .await?;

    println!("Message sent! Thanks for reaching out. I'll get back to you soon.");
    Ok(())
}
