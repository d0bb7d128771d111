//! Export file naming.

use super::ResultRecord;

/// `nasa_tlx_<task>_<participant>_<session_id>.<extension>`
///
/// Missing identifiers fall back to `task` / `anon`.
pub fn export_file_name(record: &ResultRecord, extension: &str) -> String {
    let task = sanitize_component(record.task_id().unwrap_or("task"));
    let participant = sanitize_component(record.participant_id().unwrap_or("anon"));
    format!(
        "nasa_tlx_{}_{}_{}.{}",
        task,
        participant,
        record.session_id(),
        extension
    )
}

/// Replaces each run of characters outside `[A-Za-z0-9_-]` with one `_`.
pub fn sanitize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_component("P-01_a"), "P-01_a");
    }

    #[test]
    fn sanitize_collapses_unsafe_runs() {
        assert_eq!(sanitize_component("task #3 / pilot"), "task_3_pilot");
        assert_eq!(sanitize_component("été"), "_t_");
        assert_eq!(sanitize_component("../etc"), "_etc");
    }
}
