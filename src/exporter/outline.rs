// file: src/exporter/outline.rs
// description: plain-text outline of a render tree for terminal output

use crate::presenter::{Panel, RenderTree};
use crate::utils::Validator;
use crate::utils::logging::format_panel;

const MAX_TITLE_CHARS: usize = 80;

/// Open panels list their contents, closed panels show only their header.
pub fn outline(tree: &RenderTree, colored: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", tree.heading, tree.total_documents));

    for panel in &tree.panels {
        write_panel(&mut out, panel, 1, colored);
    }
    out
}

fn write_panel(out: &mut String, panel: &Panel, depth: usize, colored: bool) {
    let indent = "  ".repeat(depth);
    let header = if colored {
        format_panel(panel.open, &panel.label, panel.document_count)
    } else {
        let marker = if panel.open { "▾" } else { "▸" };
        format!("{} {} ({})", marker, panel.label, panel.document_count)
    };
    out.push_str(&format!("{}{}\n", indent, header));

    if !panel.open {
        return;
    }

    for child in &panel.children {
        write_panel(out, child, depth + 1, colored);
    }
    for link in &panel.documents {
        out.push_str(&format!(
            "{}  [{}] {} -> {}\n",
            indent,
            link.badge,
            Validator::truncate_text(&link.title, MAX_TITLE_CHARS),
            link.url
        ));
    }
}
