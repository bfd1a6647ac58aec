//! `folio timeline` - career history, most recent first.

use anyhow::Result;

use crate::builtin;

pub fn run_timeline() -> Result<()> {
    println!("Career Journey");
    println!("My path in DevOps and cloud infrastructure");
    println!();

    for event in builtin::timeline() {
        println!("{} {} ({})", event.kind.badge(), event.title, event.period);
        println!("    {}", event.organization);
        println!("    {}", event.description);
        for highlight in &event.highlights {
            println!("      - {}", highlight);
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::builtin;
    use crate::models::EventKind;

    #[test]
    fn timeline_leads_with_current_role() {
        let events = builtin::timeline();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].kind, EventKind::Work);
        assert_eq!(events[0].period, "2023 - Present");
    }

    #[test]
    fn certifications_carry_no_highlights() {
        for event in builtin::timeline() {
            if event.kind == EventKind::Certification {
                assert!(event.highlights.is_empty());
            }
        }
    }
}
