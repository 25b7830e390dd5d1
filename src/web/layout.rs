use std::fmt::Write;

use super::Page;

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;display:flex;color:#262730}\
nav{width:16rem;min-height:100vh;background:#f0f2f6;padding:1.5rem;box-sizing:border-box}\
nav a{display:block;padding:.4rem .6rem;color:inherit;text-decoration:none;border-radius:.3rem}\
nav a.selected{background:#ff4b4b;color:#fff}\
main{flex:1;max-width:50rem;padding:2rem 3rem}\
img.wide{width:100%}\
.columns{display:flex;gap:1rem}.columns>div{flex:1}\
figure{margin:0 0 1rem}figure img{width:100%}figcaption{text-align:center;font-size:.9rem}\
.error{background:#ffe5e5;color:#7d0000;padding:1rem;border-radius:.3rem}";

/// Escape HTML special characters
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wraps page content in the document shell with the sidebar menu
pub fn render_layout(current: Page, content: &str) -> String {
    let mut menu = String::new();
    for page in Page::ALL {
        let class = if page == current { " class=\"selected\"" } else { "" };
        let _ = write!(
            menu,
            "<a href=\"{}\"{}>{}</a>",
            page.path(),
            class,
            page.label()
        );
    }

    format!(
        "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} · Movie Recommender</title><style>{STYLE}</style></head>\
<body><nav><h3>Menu</h3>{menu}</nav><main>{content}</main></body></html>",
        title = current.label(),
    )
}

/// Full-width image served from `/imgs`
pub fn image(file: &str, alt: &str) -> String {
    format!(
        "<img class=\"wide\" src=\"/imgs/{}\" alt=\"{}\">",
        file,
        html_escape(alt)
    )
}

/// Captioned image for the team grid
pub fn figure(file: &str, caption: &str) -> String {
    let caption = html_escape(caption);
    format!(
        "<figure><img src=\"/imgs/{}\" alt=\"{caption}\"><figcaption>{caption}</figcaption></figure>",
        file
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<Tom & Jerry's \"Movie\">"),
            "&lt;Tom &amp; Jerry&#x27;s &quot;Movie&quot;&gt;"
        );
    }

    #[test]
    fn test_layout_marks_current_page() {
        let html = render_layout(Page::AboutUs, "<p>hi</p>");
        assert!(html.contains("<a href=\"/pages/about\" class=\"selected\">About Us</a>"));
        assert!(html.contains("<a href=\"/pages/recommender\">Recommender System</a>"));
        assert_eq!(html.matches("class=\"selected\"").count(), 1);
        assert!(html.contains("<main><p>hi</p></main>"));
    }

    #[test]
    fn test_figure_escapes_caption() {
        let html = figure("x.jpg", "A <b>");
        assert!(html.contains("<figcaption>A &lt;b&gt;</figcaption>"));
    }
}
