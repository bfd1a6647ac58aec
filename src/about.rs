//! `folio about` - the hero block and introduction.

use anyhow::Result;
use chrono::Datelike;

use crate::config::Config;

pub fn run_about(config: &Config) -> Result<()> {
    let profile = config.effective_profile();

    println!("{}", profile.title);
    println!("{}", profile.tagline);
    println!();
    println!("{}", profile.intro);
    println!();
    println!("{}", profile.tags.join(", "));
    println!();
    println!("© {} | All rights reserved", chrono::Utc::now().year());

    Ok(())
}
