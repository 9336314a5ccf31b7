use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::Note;
use axum::extract::State;
use axum::response::Html;

/// GET /
///
/// Server-rendered listing of all notes, newest first.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let mut notes = state.notes.list_all().await?;
    // Newest first; id breaks timestamp ties deterministically.
    notes.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    Ok(Html(render_index(&notes)))
}

fn render_index(notes: &[Note]) -> String {
    let mut page = String::from(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Notes</title>\n\
         </head>\n\
         <body>\n\
         <h1>Notes</h1>\n",
    );

    if notes.is_empty() {
        page.push_str("<p>No notes yet.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for note in notes {
            page.push_str("<li><strong>");
            push_escaped(&mut page, &note.title);
            page.push_str("</strong> <em>[");
            push_escaped(&mut page, &note.project);
            page.push_str("]</em><br>");
            push_escaped(&mut page, &note.body);
            page.push_str("<br><small>");
            page.push_str(&note.created_at.to_rfc3339());
            page.push_str("</small></li>\n");
        }
        page.push_str("</ul>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn push_escaped(out: &mut String, input: &str) {
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
