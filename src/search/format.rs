use colored::Colorize;

use crate::schemas::RepositorySummary;

const DESCRIPTION_PREVIEW_CHARS: usize = 150;

pub fn format_repository(repo: &RepositorySummary, use_color: bool) -> String {
    let updated = repo.last_updated.format("%Y-%m-%d").to_string();
    let language = repo.primary_language.as_deref().unwrap_or("Not specified");
    let description = repo
        .description
        .as_deref()
        .map(|d| truncate(d, DESCRIPTION_PREVIEW_CHARS))
        .unwrap_or_else(|| "No description".to_string());

    if use_color {
        format!(
            "{} [{}] ★ {} ⑂ {} updated {}\n  {}",
            repo.display_name().bright_green(),
            language.bright_yellow(),
            repo.star_count.to_string().bright_blue(),
            repo.fork_count.to_string().bright_blue(),
            updated.dimmed(),
            description
        )
    } else {
        format!(
            "{} [{}] ★ {} ⑂ {} updated {}\n  {}",
            repo.display_name(),
            language,
            repo.star_count,
            repo.fork_count,
            updated,
            description
        )
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() > max_chars {
        let truncated: String = single_line.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        single_line
    }
}
