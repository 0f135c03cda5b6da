//! Plain-text rendering of a timeline.

use std::fmt;

use super::reconcile::Timeline;

const BAR_WIDTH: usize = 20;

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.progress();
        let filled = if progress.total == 0 {
            0
        } else {
            progress.approved * BAR_WIDTH / progress.total
        };

        writeln!(
            f,
            "[{}{}] {:.0}% ({}/{} approved)",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            progress.percent(),
            progress.approved,
            progress.total
        )?;

        for entry in self.entries() {
            write!(
                f,
                "  {:<24} {}",
                entry.department.name,
                entry.status.label()
            )?;
            if let Some(remarks) = entry.record.as_ref().and_then(|r| r.remarks.as_deref()) {
                write!(f, " - {}", remarks)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
