use crate::format::category::FileCategory;
use crate::format::display::LinkDisplayType;

/// The URLs a rendered link is built from. `page_url` is `None` when the
/// file has no distinct share page, in which case the direct URL stands in.
#[derive(Debug, Clone, Copy)]
pub struct FileLink<'a> {
    pub filename: &'a str,
    pub direct_url: &'a str,
    pub page_url: Option<&'a str>,
}

impl FileLink<'_> {
    fn page_url(&self) -> &str {
        self.page_url.unwrap_or(self.direct_url)
    }
}

impl LinkDisplayType {
    /// Renders `link` in this format. Pure and total: the output is pasted
    /// into forums, pages and notes, so the markup below must not change.
    pub fn render(self, link: &FileLink<'_>) -> String {
        let category = FileCategory::from_filename(link.filename);

        match self {
            LinkDisplayType::DirectLink => link.direct_url.to_string(),
            LinkDisplayType::SharePage => link.page_url().to_string(),
            LinkDisplayType::BBCode => bbcode(category, link),
            LinkDisplayType::BBCodeWithLink => bbcode_wrapped(category, link, link.page_url()),
            LinkDisplayType::BBCodeDirectLink => bbcode_wrapped(category, link, link.direct_url),
            LinkDisplayType::Html => html(category, link),
            LinkDisplayType::HtmlWithLink => html_wrapped(category, link, link.page_url()),
            LinkDisplayType::HtmlDirectLink => html_wrapped(category, link, link.direct_url),
            LinkDisplayType::Markdown => markdown(category, link),
        }
    }
}

fn bbcode(category: FileCategory, link: &FileLink<'_>) -> String {
    match category {
        FileCategory::Image => format!("[img]{}[/img]", link.direct_url),
        FileCategory::Audio => format!("[audio]{}[/audio]", link.direct_url),
        FileCategory::Video => format!("[video]{}[/video]", link.direct_url),
        FileCategory::Other => format!("[url={}]{}[/url]", link.direct_url, link.filename),
    }
}

// Audio and video keep the bare tag: wrapping a player in a link is
// redundant, the embed itself is the interaction surface.
fn bbcode_wrapped(category: FileCategory, link: &FileLink<'_>, href: &str) -> String {
    match category {
        FileCategory::Image => format!("[url={}][img]{}[/img][/url]", href, link.direct_url),
        FileCategory::Audio => format!("[audio]{}[/audio]", link.direct_url),
        FileCategory::Video => format!("[video]{}[/video]", link.direct_url),
        FileCategory::Other => format!("[url={}]{}[/url]", href, link.filename),
    }
}

fn html(category: FileCategory, link: &FileLink<'_>) -> String {
    match category {
        FileCategory::Image => {
            format!(r#"<img src="{}" alt="{}">"#, link.direct_url, link.filename)
        }
        FileCategory::Audio => {
            format!(r#"<audio src="{}" controls>{}</audio>"#, link.direct_url, link.filename)
        }
        FileCategory::Video => {
            format!(r#"<video src="{}" controls>{}</video>"#, link.direct_url, link.filename)
        }
        FileCategory::Other => {
            format!(r#"<a href="{}">{}</a>"#, link.direct_url, link.filename)
        }
    }
}

fn html_wrapped(category: FileCategory, link: &FileLink<'_>, href: &str) -> String {
    match category {
        FileCategory::Image => format!(
            r#"<a href="{}"><img src="{}" alt="{}"></a>"#,
            href, link.direct_url, link.filename
        ),
        FileCategory::Audio => {
            format!(r#"<audio src="{}" controls>{}</audio>"#, link.direct_url, link.filename)
        }
        FileCategory::Video => {
            format!(r#"<video src="{}" controls>{}</video>"#, link.direct_url, link.filename)
        }
        FileCategory::Other => format!(r#"<a href="{}">{}</a>"#, href, link.filename),
    }
}

fn markdown(category: FileCategory, link: &FileLink<'_>) -> String {
    match category {
        FileCategory::Image => format!("![{}]({})", link.filename, link.direct_url),
        _ => format!("[{}]({})", link.filename, link.direct_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LinkDisplayType::*;

    const IMAGE: FileLink<'static> = FileLink {
        filename: "a.png",
        direct_url: "https://x/a.png",
        page_url: Some("https://x/p/a"),
    };
    const AUDIO: FileLink<'static> = FileLink {
        filename: "a.mp3",
        direct_url: "https://x/a.mp3",
        page_url: Some("https://x/p/a"),
    };
    const VIDEO: FileLink<'static> = FileLink {
        filename: "a.mp4",
        direct_url: "https://x/a.mp4",
        page_url: Some("https://x/p/a"),
    };
    const OTHER: FileLink<'static> = FileLink {
        filename: "doc.pdf",
        direct_url: "https://x/doc.pdf",
        page_url: Some("https://x/p/doc"),
    };

    #[test]
    fn direct_link_and_share_page_ignore_the_category() {
        for link in [IMAGE, AUDIO, VIDEO, OTHER] {
            assert_eq!(DirectLink.render(&link), link.direct_url);
            assert_eq!(SharePage.render(&link), link.page_url.unwrap());
        }
    }

    #[test]
    fn bbcode_matrix() {
        assert_eq!(BBCode.render(&IMAGE), "[img]https://x/a.png[/img]");
        assert_eq!(BBCode.render(&AUDIO), "[audio]https://x/a.mp3[/audio]");
        assert_eq!(BBCode.render(&VIDEO), "[video]https://x/a.mp4[/video]");
        assert_eq!(BBCode.render(&OTHER), "[url=https://x/doc.pdf]doc.pdf[/url]");

        assert_eq!(
            BBCodeWithLink.render(&IMAGE),
            "[url=https://x/p/a][img]https://x/a.png[/img][/url]"
        );
        // bare tag for media, despite "WithLink" in the name
        assert_eq!(BBCodeWithLink.render(&AUDIO), "[audio]https://x/a.mp3[/audio]");
        assert_eq!(BBCodeWithLink.render(&VIDEO), "[video]https://x/a.mp4[/video]");
        assert_eq!(BBCodeWithLink.render(&OTHER), "[url=https://x/p/doc]doc.pdf[/url]");

        assert_eq!(
            BBCodeDirectLink.render(&IMAGE),
            "[url=https://x/a.png][img]https://x/a.png[/img][/url]"
        );
        assert_eq!(BBCodeDirectLink.render(&AUDIO), "[audio]https://x/a.mp3[/audio]");
        assert_eq!(BBCodeDirectLink.render(&VIDEO), "[video]https://x/a.mp4[/video]");
        assert_eq!(BBCodeDirectLink.render(&OTHER), "[url=https://x/doc.pdf]doc.pdf[/url]");
    }

    #[test]
    fn html_matrix() {
        assert_eq!(Html.render(&IMAGE), r#"<img src="https://x/a.png" alt="a.png">"#);
        assert_eq!(Html.render(&AUDIO), r#"<audio src="https://x/a.mp3" controls>a.mp3</audio>"#);
        assert_eq!(Html.render(&VIDEO), r#"<video src="https://x/a.mp4" controls>a.mp4</video>"#);
        assert_eq!(Html.render(&OTHER), r#"<a href="https://x/doc.pdf">doc.pdf</a>"#);

        assert_eq!(
            HtmlWithLink.render(&IMAGE),
            r#"<a href="https://x/p/a"><img src="https://x/a.png" alt="a.png"></a>"#
        );
        assert_eq!(
            HtmlWithLink.render(&AUDIO),
            r#"<audio src="https://x/a.mp3" controls>a.mp3</audio>"#
        );
        assert_eq!(
            HtmlWithLink.render(&VIDEO),
            r#"<video src="https://x/a.mp4" controls>a.mp4</video>"#
        );
        assert_eq!(HtmlWithLink.render(&OTHER), r#"<a href="https://x/p/doc">doc.pdf</a>"#);

        assert_eq!(
            HtmlDirectLink.render(&IMAGE),
            r#"<a href="https://x/a.png"><img src="https://x/a.png" alt="a.png"></a>"#
        );
        assert_eq!(
            HtmlDirectLink.render(&AUDIO),
            r#"<audio src="https://x/a.mp3" controls>a.mp3</audio>"#
        );
        assert_eq!(
            HtmlDirectLink.render(&VIDEO),
            r#"<video src="https://x/a.mp4" controls>a.mp4</video>"#
        );
        assert_eq!(HtmlDirectLink.render(&OTHER), r#"<a href="https://x/doc.pdf">doc.pdf</a>"#);
    }

    #[test]
    fn markdown_matrix() {
        assert_eq!(Markdown.render(&IMAGE), "![a.png](https://x/a.png)");
        assert_eq!(Markdown.render(&AUDIO), "[a.mp3](https://x/a.mp3)");
        assert_eq!(Markdown.render(&VIDEO), "[a.mp4](https://x/a.mp4)");
        assert_eq!(Markdown.render(&OTHER), "[doc.pdf](https://x/doc.pdf)");
    }

    #[test]
    fn missing_page_url_falls_back_to_the_direct_url() {
        let link = FileLink { filename: "a.png", direct_url: "https://x/a.png", page_url: None };
        assert_eq!(SharePage.render(&link), "https://x/a.png");
        assert_eq!(
            BBCodeWithLink.render(&link),
            "[url=https://x/a.png][img]https://x/a.png[/img][/url]"
        );
        // WithLink and DirectLink coincide when the URLs do
        assert_eq!(BBCodeWithLink.render(&link), BBCodeDirectLink.render(&link));
    }

    #[test]
    fn empty_inputs_pass_through_unvalidated() {
        let link = FileLink { filename: "", direct_url: "", page_url: None };
        for display_type in LinkDisplayType::ALL {
            // total over arbitrary input, never panics
            let _ = display_type.render(&link);
        }
        assert_eq!(Html.render(&link), r#"<a href=""></a>"#);
    }

    #[test]
    fn rendering_is_deterministic() {
        for display_type in LinkDisplayType::ALL {
            assert_eq!(display_type.render(&IMAGE), display_type.render(&IMAGE));
        }
    }
}
