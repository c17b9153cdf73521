// src/mail.rs
//
// Clipboard-ready payout message. Pure function of a snapshot.
use crate::config::consts::SHOWINFO_CHARACTER;
use crate::payout::{amount::format_isk, Participant, Snapshot};

/// Name, wrapped in an in-game link when the character id is known.
pub fn format_name(p: &Participant) -> String {
    match p.external_id.as_deref() {
        Some(id) if !id.is_empty() => format!("<url=showinfo:{SHOWINFO_CHARACTER}//{id}>{}</url>", p.name),
        _ => p.name.clone(),
    }
}

fn or_none(s: String) -> String {
    if s.is_empty() { s!("None") } else { s }
}

pub fn compose(snap: &Snapshot) -> String {
    let send_to = snap.included().map(format_name).collect::<Vec<_>>().join(", ");

    let scout_lines = snap
        .scouts()
        .map(|p| format!("- {} (50% = {} ISK)", format_name(p), format_isk(p.share())))
        .collect::<Vec<_>>()
        .join("\n");

    let line_lines = snap
        .lines()
        .map(|p| format!("- {}: {} ISK", format_name(p), format_isk(p.share())))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\nSEND TO:\n{}\n\nHey everyone,\n\nThanks for joining the op! Here's the payout for the recent loot buyback.\n\nBuyback Total: {} ISK\n\nScout(s):\n{}\n\nLine Members:\n{}\n",
        or_none(send_to),
        format_isk(snap.pool_amount),
        or_none(scout_lines),
        or_none(line_lines),
    )
}

/// One-line cohort summary, as shown under the table.
pub fn count_line(snap: &Snapshot) -> String {
    format!(
        "Scouts: {} | Line: {} | Total: {}",
        snap.scout_count, snap.line_count, snap.included_count
    )
}

pub fn footer_line(snap: &Snapshot) -> String {
    let unit = if snap.dynamic { " per share" } else { "" };
    format!(
        "Buyback ISK: {} | Scout gets{unit}: {} | Line gets{unit}: {}",
        format_isk(snap.pool_amount),
        format_isk(snap.per_scout_share),
        format_isk(snap.per_line_share),
    )
}
