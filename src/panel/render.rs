//! HTML for the recommendations container.
//!
//! [`render`] is a pure function of [`PanelState`]; the container is always
//! replaced wholesale with its output.

use super::state::{Card, PanelState};

pub const LOADING_HTML: &str = r#"<div class="loader"></div>"#;
pub const EMPTY_HTML: &str =
    r#"<div class="placeholder"><p>No new recommendations for you right now!</p></div>"#;
pub const ERROR_HTML: &str =
    r#"<div class="placeholder"><p>Oops! Something went wrong. Please try again.</p></div>"#;

/// Inner HTML of the container for `state`
pub fn render(state: &PanelState) -> String {
    match state {
        PanelState::Idle => String::new(),
        PanelState::Loading => LOADING_HTML.to_string(),
        PanelState::Empty => EMPTY_HTML.to_string(),
        PanelState::Error => ERROR_HTML.to_string(),
        PanelState::Populated(cards) => cards.iter().map(render_card).collect(),
    }
}

fn render_card(card: &Card) -> String {
    let links: String = card
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" class="platform-link">{}</a>"#,
                escape(&link.href),
                escape(&link.platform)
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="card">"#,
            r#"<img src="{src}" alt="{alt}" class="card-image">"#,
            r#"<div class="card-content">"#,
            r#"<h3>{heading}</h3>"#,
            r#"<p class="category">{category}</p>"#,
            r#"<p class="explanation"><strong>Why you might like this:</strong> {explanation}</p>"#,
            r#"<div class="platforms"><span>Available on:</span>{links}</div>"#,
            r#"</div></div>"#,
        ),
        src = escape(&card.image_src),
        alt = escape(&card.image_alt),
        heading = escape(&card.heading),
        category = escape(&card.category),
        explanation = escape(&card.explanation),
        links = links,
    )
}

/// Escapes text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
