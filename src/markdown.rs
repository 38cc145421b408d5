//! Markdown Rendering
//!
//! Extends pulldown-cmark with:
//! - External links open in a new tab
//! - Raw HTML in the source is shown as text, never injected

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown with the enabled extensions
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Rewrite parser events for the custom behaviour above
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // Links cannot nest, so one flag is enough
    let mut in_external_link = false;

    for event in parser {
        match event {
            Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
                let title_attr = if title.is_empty() {
                    String::new()
                } else {
                    format!(r#" title="{}""#, escape_html(&title))
                };
                let html = format!(
                    r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                    escape_html(&dest_url),
                    title_attr
                );
                events.push(Event::Html(CowStr::from(html)));
                in_external_link = true;
            }
            Event::End(TagEnd::Link) if in_external_link => {
                events.push(Event::Html(CowStr::from("</a>")));
                in_external_link = false;
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
