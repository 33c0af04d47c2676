/// The textual formats a file link can be copied as. The identifier strings
/// are persisted as a user preference, so they must stay stable across
/// releases; parsing falls back to `DirectLink` instead of failing so a
/// stale or corrupt preference can never break the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDisplayType {
    DirectLink,
    SharePage,
    BBCode,
    BBCodeWithLink,
    BBCodeDirectLink,
    Html,
    HtmlWithLink,
    HtmlDirectLink,
    Markdown,
}

impl LinkDisplayType {
    /// All variants in presentation order.
    pub const ALL: [LinkDisplayType; 9] = [
        LinkDisplayType::DirectLink,
        LinkDisplayType::SharePage,
        LinkDisplayType::BBCode,
        LinkDisplayType::BBCodeWithLink,
        LinkDisplayType::BBCodeDirectLink,
        LinkDisplayType::Html,
        LinkDisplayType::HtmlWithLink,
        LinkDisplayType::HtmlDirectLink,
        LinkDisplayType::Markdown,
    ];

    /// Stable identifier used for persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkDisplayType::DirectLink => "DIRECT_LINK",
            LinkDisplayType::SharePage => "SHARE_PAGE",
            LinkDisplayType::BBCode => "BBCODE",
            LinkDisplayType::BBCodeWithLink => "BBCODE_WITH_LINK",
            LinkDisplayType::BBCodeDirectLink => "BBCODE_DIRECT_LINK",
            LinkDisplayType::Html => "HTML",
            LinkDisplayType::HtmlWithLink => "HTML_WITH_LINK",
            LinkDisplayType::HtmlDirectLink => "HTML_DIRECT_LINK",
            LinkDisplayType::Markdown => "MARKDOWN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkDisplayType::DirectLink => "Direct Link",
            LinkDisplayType::SharePage => "Share Page",
            LinkDisplayType::BBCode => "BBCode",
            LinkDisplayType::BBCodeWithLink => "BBCode w/ Link",
            LinkDisplayType::BBCodeDirectLink => "BBCode w/ Direct Link",
            LinkDisplayType::Html => "HTML",
            LinkDisplayType::HtmlWithLink => "HTML w/ Link",
            LinkDisplayType::HtmlDirectLink => "HTML w/ Direct Link",
            LinkDisplayType::Markdown => "Markdown",
        }
    }

    /// Total: unrecognized identifiers fall back to `DirectLink`.
    pub fn from_str(value: &str) -> Self {
        Self::ALL
            .iter()
            .find(|display_type| display_type.as_str() == value)
            .copied()
            .unwrap_or(LinkDisplayType::DirectLink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for display_type in LinkDisplayType::ALL {
            assert_eq!(LinkDisplayType::from_str(display_type.as_str()), display_type);
        }
    }

    #[test]
    fn unknown_identifier_falls_back_to_direct_link() {
        assert_eq!(LinkDisplayType::from_str("not_a_real_type"), LinkDisplayType::DirectLink);
        assert_eq!(LinkDisplayType::from_str(""), LinkDisplayType::DirectLink);
        // match is exact, not case-folded
        assert_eq!(LinkDisplayType::from_str("bbcode"), LinkDisplayType::DirectLink);
    }

    #[test]
    fn presentation_order_is_stable() {
        let expected = [
            "DIRECT_LINK",
            "SHARE_PAGE",
            "BBCODE",
            "BBCODE_WITH_LINK",
            "BBCODE_DIRECT_LINK",
            "HTML",
            "HTML_WITH_LINK",
            "HTML_DIRECT_LINK",
            "MARKDOWN",
        ];
        let identifiers: Vec<&str> =
            LinkDisplayType::ALL.iter().map(|display_type| display_type.as_str()).collect();
        assert_eq!(identifiers, expected);
    }

    #[test]
    fn labels_match_the_original_clients() {
        assert_eq!(LinkDisplayType::BBCodeWithLink.label(), "BBCode w/ Link");
        assert_eq!(LinkDisplayType::HtmlDirectLink.label(), "HTML w/ Direct Link");
    }
}
