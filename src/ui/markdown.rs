//! Markdown rendering for the legal pages
//!
//! Legal copy lives in the binary as markdown and is turned into HTML with
//! pulldown-cmark. Section headings get stable anchor ids so the table of
//! contents and external links can point at them. Raw HTML in the source is
//! escaped rather than passed through.

use leptos::prelude::*;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A heading collected while rendering, used for the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub anchor: String,
    pub text: String,
}

/// Rendered document: HTML body plus its section headings
#[derive(Debug, Clone, Default)]
pub struct RenderedDocument {
    pub html: String,
    pub headings: Vec<Heading>,
}

/// Render markdown content as a legal document body
#[component]
pub fn MarkdownDocument(
    /// The markdown source
    content: &'static str,
    /// Show a table of contents built from `##` headings
    #[prop(default = true)]
    with_toc: bool,
) -> impl IntoView {
    let document = render_markdown(content);
    let toc: Vec<Heading> = document
        .headings
        .into_iter()
        .filter(|h| h.level == 2)
        .collect();

    view! {
        {(with_toc && !toc.is_empty()).then(|| view! {
            <nav class="legal-toc" aria-label="Table of contents">
                <h2 class="legal-toc-title">"Contents"</h2>
                <ol>
                    {toc.into_iter().map(|h| view! {
                        <li><a href=format!("#{}", h.anchor)>{h.text}</a></li>
                    }).collect_view()}
                </ol>
            </nav>
        })}
        <article class="legal-content" inner_html=document.html />
    }
}

/// Parse markdown into HTML, collecting headings on the way
pub fn render_markdown(content: &str) -> RenderedDocument {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut html = String::new();
    let mut headings = Vec::new();

    // Heading text is buffered so the anchor can be derived from it
    let mut open_heading: Option<(u8, String)> = None;

    for event in Parser::new_ext(content, options) {
        if let Some((_, text)) = open_heading.as_mut() {
            match &event {
                Event::Text(t) | Event::Code(t) => {
                    text.push_str(t);
                    continue;
                }
                Event::End(TagEnd::Heading(_)) => {}
                _ => continue,
            }
        }

        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html.push_str("<p>"),
                Tag::Heading { level, .. } => {
                    open_heading = Some((heading_level(level), String::new()));
                }
                Tag::BlockQuote(_) => html.push_str("<blockquote>"),
                Tag::List(Some(1)) => html.push_str("<ol>"),
                Tag::List(Some(start)) => html.push_str(&format!("<ol start=\"{}\">", start)),
                Tag::List(None) => html.push_str("<ul>"),
                Tag::Item => html.push_str("<li>"),
                Tag::Emphasis => html.push_str("<em>"),
                Tag::Strong => html.push_str("<strong>"),
                Tag::Strikethrough => html.push_str("<del>"),
                Tag::Link { dest_url, .. } => {
                    let external = dest_url.starts_with("http");
                    html.push_str(&format!("<a href=\"{}\"", escape_html(&dest_url)));
                    if external {
                        html.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
                    }
                    html.push('>');
                }
                Tag::Table(_) => html.push_str("<div class=\"legal-table\"><table>"),
                Tag::TableHead => html.push_str("<thead>"),
                Tag::TableRow => html.push_str("<tr>"),
                Tag::TableCell => html.push_str("<td>"),
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    if let Some((level, text)) = open_heading.take() {
                        let anchor = slugify(&text);
                        html.push_str(&format!(
                            "<h{level} id=\"{}\">{}</h{level}>",
                            anchor,
                            escape_html(&text)
                        ));
                        headings.push(Heading {
                            level,
                            anchor,
                            text,
                        });
                    }
                }
                TagEnd::Paragraph => html.push_str("</p>"),
                TagEnd::BlockQuote(_) => html.push_str("</blockquote>"),
                TagEnd::List(true) => html.push_str("</ol>"),
                TagEnd::List(false) => html.push_str("</ul>"),
                TagEnd::Item => html.push_str("</li>"),
                TagEnd::Emphasis => html.push_str("</em>"),
                TagEnd::Strong => html.push_str("</strong>"),
                TagEnd::Strikethrough => html.push_str("</del>"),
                TagEnd::Link => html.push_str("</a>"),
                TagEnd::Table => html.push_str("</tbody></table></div>"),
                TagEnd::TableHead => html.push_str("</thead><tbody>"),
                TagEnd::TableRow => html.push_str("</tr>"),
                TagEnd::TableCell => html.push_str("</td>"),
                _ => {}
            },
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                html.push_str(&escape_html(&text));
            }
            Event::Code(code) => {
                html.push_str(&format!("<code>{}</code>", escape_html(&code)));
            }
            Event::SoftBreak => html.push(' '),
            Event::HardBreak => html.push_str("<br />"),
            Event::Rule => html.push_str("<hr />"),
            _ => {}
        }
    }

    RenderedDocument { html, headings }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Lowercase, alphanumerics kept, runs of anything else collapsed to `-`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_and_emphasis() {
        let doc = render_markdown("We take **privacy** seriously, *always*.");
        assert_eq!(
            doc.html,
            "<p>We take <strong>privacy</strong> seriously, <em>always</em>.</p>"
        );
    }

    #[test]
    fn test_headings_get_anchors() {
        let doc = render_markdown("# Privacy Policy\n\n## 1. Data We Collect\n\ntext");
        assert!(doc.html.contains("<h1 id=\"privacy-policy\">Privacy Policy</h1>"));
        assert!(doc.html.contains("<h2 id=\"1-data-we-collect\">1. Data We Collect</h2>"));
        assert_eq!(doc.headings.len(), 2);
        assert_eq!(doc.headings[1].level, 2);
        assert_eq!(doc.headings[1].anchor, "1-data-we-collect");
    }

    #[test]
    fn test_heading_with_inline_code() {
        let doc = render_markdown("## The `contact` table");
        assert_eq!(doc.headings[0].text, "The contact table");
        assert_eq!(doc.headings[0].anchor, "the-contact-table");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let doc = render_markdown("<script>alert('xss')</script>");
        assert!(!doc.html.contains("<script>"));
        assert!(doc.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_external_links_open_in_new_tab() {
        let doc = render_markdown("[site](https://example.com) and [contact](/contact)");
        assert!(doc.html.contains(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">site</a>"
        ));
        assert!(doc.html.contains("<a href=\"/contact\">contact</a>"));
    }

    #[test]
    fn test_lists() {
        let doc = render_markdown("- one\n- two\n\n3. three\n4. four");
        assert!(doc.html.contains("<ul><li>one</li><li>two</li></ul>"));
        assert!(doc.html.contains("<ol start=\"3\">"));
    }

    #[test]
    fn test_table() {
        let doc = render_markdown("| Cookie | Purpose |\n|---|---|\n| session | login |");
        assert!(doc.html.contains("<div class=\"legal-table\"><table><thead>"));
        assert!(doc.html.contains("<td>session</td>"));
        assert!(doc.html.ends_with("</tbody></table></div>"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  --Leading"), "leading");
        assert_eq!(slugify("Cookies & Tracking"), "cookies-tracking");
    }
}
