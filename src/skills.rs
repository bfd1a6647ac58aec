//! `folio skills` - the technical skill matrix.

use anyhow::Result;

use crate::builtin;

pub fn run_skills() -> Result<()> {
    println!("Technical Expertise");
    println!("A comprehensive toolkit spanning cloud infrastructure, automation, and full-stack development");
    println!();

    for category in builtin::skill_categories() {
        println!("{}", category.title);
        println!("    {}", category.skills.join(", "));
        println!();
    }

    Ok(())
}
