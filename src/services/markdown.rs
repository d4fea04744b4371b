//! Markdown to sanitised HTML for blog posts and project READMEs

use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html,
};

/// Shortcodes most commonly found in READMEs and posts.
const EMOJI: &[(&str, &str)] = &[
    (":rocket:", "🚀"),
    (":star:", "⭐"),
    (":sparkles:", "✨"),
    (":fire:", "🔥"),
    (":tada:", "🎉"),
    (":bug:", "🐛"),
    (":memo:", "📝"),
    (":book:", "📖"),
    (":books:", "📚"),
    (":warning:", "⚠️"),
    (":white_check_mark:", "✅"),
    (":heavy_check_mark:", "✔️"),
    (":x:", "❌"),
    (":bulb:", "💡"),
    (":wrench:", "🔧"),
    (":hammer:", "🔨"),
    (":gear:", "⚙️"),
    (":package:", "📦"),
    (":zap:", "⚡"),
    (":lock:", "🔒"),
    (":computer:", "💻"),
    (":heart:", "❤️"),
    (":thumbsup:", "👍"),
    (":+1:", "👍"),
    (":eyes:", "👀"),
    (":wave:", "👋"),
    (":construction:", "🚧"),
    (":chart_with_upwards_trend:", "📈"),
    (":globe_with_meridians:", "🌐"),
    (":iphone:", "📱"),
    (":art:", "🎨"),
    (":mag:", "🔍"),
    (":link:", "🔗"),
    (":email:", "📧"),
    (":robot:", "🤖"),
    (":brain:", "🧠"),
    (":trophy:", "🏆"),
    (":smile:", "😄"),
];

fn options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

/// Renders markdown to HTML.
///
/// Raw HTML in the source is shown as text. Relative image paths are resolved
/// against `repo_base` (a GitHub repository URL) when one is given. Fenced code
/// blocks carry a copy button whose `data-code` holds the block's text.
pub fn render(markdown: &str, repo_base: Option<&str>) -> String {
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut code: Option<(String, String)> = None;

    for event in TextMergeStream::new(Parser::new_ext(markdown, options())) {
        if let Some((lang, mut body)) = code.take() {
            match event {
                Event::Text(text) => {
                    body.push_str(&text);
                    code = Some((lang, body));
                }
                Event::End(TagEnd::CodeBlock) => {
                    events.push(Event::Html(code_block_html(&lang, &body).into()));
                }
                _ => code = Some((lang, body)),
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or("").to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((lang, String::new()));
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => events.push(Event::Start(Tag::Image {
                link_type,
                dest_url: resolve_image_url(&dest_url, repo_base).into(),
                title,
                id,
            })),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                ..
            }) => {
                events.push(Event::InlineHtml(CowStr::from(format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
                    escape_html(&safe_href(&link_href(link_type, &dest_url)))
                ))));
            }
            Event::End(TagEnd::Link) => events.push(Event::InlineHtml("</a>".into())),
            Event::Text(text) => events.push(Event::Text(replace_emoji(&text).into())),
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Resolves an image source against a repository's raw file URL.
pub fn resolve_image_url(src: &str, repo_base: Option<&str>) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }
    match repo_base {
        Some(base) if !src.is_empty() && !src.starts_with('/') => {
            let path = src.strip_prefix("./").unwrap_or(src);
            format!("{}/raw/main/{}", base.trim_end_matches('/'), path)
        }
        _ => src.to_string(),
    }
}

/// Email autolinks (`<me@example.com>`) carry the bare address.
fn link_href(link_type: LinkType, dest: &str) -> String {
    if link_type == LinkType::Email && !dest.starts_with("mailto:") {
        format!("mailto:{dest}")
    } else {
        dest.to_string()
    }
}

fn safe_href(href: &str) -> String {
    let lowered = href.trim().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        "#".to_string()
    } else {
        href.to_string()
    }
}

pub fn replace_emoji(text: &str) -> String {
    if !text.contains(':') {
        return text.to_string();
    }
    EMOJI
        .iter()
        .fold(text.to_string(), |acc, (code, emoji)| acc.replace(code, emoji))
}

fn code_block_html(lang: &str, body: &str) -> String {
    let escaped = escape_html(body);
    let label = if lang.is_empty() { "text" } else { lang };
    format!(
        "<div class=\"code-block\"><div class=\"code-block-header\"><span>{label}</span>\
         <button type=\"button\" class=\"copy-button\" data-code=\"{escaped}\">Copy</button></div>\
         <pre><code class=\"language-{label}\">{escaped}</code></pre></div>\n",
        label = escape_html(label),
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
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
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://img.shields.io/badge.svg", "https://img.shields.io/badge.svg")]
    #[case("./docs/shot.png", "https://github.com/me/app/raw/main/docs/shot.png")]
    #[case("docs/shot.png", "https://github.com/me/app/raw/main/docs/shot.png")]
    #[case("/static/logo.png", "/static/logo.png")]
    fn test_resolve_image_url(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(resolve_image_url(src, Some("https://github.com/me/app")), expected);
    }

    #[test]
    fn test_relative_image_without_base_is_untouched() {
        assert_eq!(resolve_image_url("./a.png", None), "./a.png");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render("Hello <script>alert(1)</script>\n\n<div onclick=\"x\">hi</div>", None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<div onclick"));
    }

    #[test]
    fn test_code_block_has_copy_button() {
        let html = render("```rust\nfn main() {}\n```\n", None);
        assert!(html.contains("class=\"copy-button\""));
        assert!(html.contains("data-code=\"fn main() {}\n\""));
        assert!(html.contains("<code class=\"language-rust\">fn main() {}"));
    }

    #[test]
    fn test_links_open_in_new_tab_and_scripts_are_neutralised() {
        let html = render("[site](https://example.com) [bad](javascript:alert(1))", None);
        assert!(html.contains(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">site</a>"
        ));
        assert!(html.contains("<a href=\"#\""));
    }

    #[test]
    fn test_email_autolink_uses_mailto() {
        let html = render("Write to <me@example.com>.", None);
        assert!(html.contains("<a href=\"mailto:me@example.com\""));
        assert!(html.contains(">me@example.com</a>"));
    }

    #[test]
    fn test_tables_images_and_emoji() {
        let md = "# Demo :rocket:\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n![shot](img/s.png)\n";
        let html = render(md, Some("https://github.com/me/app/"));
        assert!(html.contains("<h1>Demo 🚀</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("src=\"https://github.com/me/app/raw/main/img/s.png\""));
    }

    #[test]
    fn test_emoji_not_replaced_inside_code() {
        let html = render("```\n:rocket:\n```\n", None);
        assert!(html.contains(":rocket:"));
    }
}
