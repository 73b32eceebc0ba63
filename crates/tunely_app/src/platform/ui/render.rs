use tunely_core::{AppViewModel, PlaylistLink};

use super::constants::*;

/// Static header shown once at startup.
pub fn banner() -> Vec<String> {
    vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        INSTRUCTION.to_string(),
        String::new(),
    ]
}

/// Renders the button and result area for the current view.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("[ {} ]", view.button_label)];

    if !view.generate_enabled {
        lines.push(format!("{GENERATING_FOR} \"{}\"", view.query));
    }

    if let Some(link) = &view.playlist {
        lines.push(PLAYLIST_HEADING.to_string());
        lines.push(format_link(link));
    }

    if view.generate_enabled {
        lines.push(format!("{INPUT_PLACEHOLDER} ({QUIT_COMMAND} to exit)"));
    }

    lines
}

fn format_link(link: &PlaylistLink) -> String {
    let label = link.name.as_deref().unwrap_or(DEFAULT_LINK_LABEL);
    format!("  {label} -> {}", link.url)
}
