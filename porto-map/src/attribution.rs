//! Credit notice required by the tile provider.

/// Attribution notice displayed over the map.
///
/// The notice is plain text. Part of it may be a link to the provider's terms, the way
/// OpenStreetMap asks for `© <OpenStreetMap> contributors` with the name linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    text: String,
    link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Link {
    span: String,
    url: String,
}

impl Attribution {
    /// Creates an attribution without a link.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    /// Links the first occurrence of `span` in the notice to `url`.
    ///
    /// If `span` does not occur in the text, the whole notice becomes the link.
    pub fn with_link(mut self, span: impl Into<String>, url: impl Into<String>) -> Self {
        let span = span.into();
        let span = if self.text.contains(&span) {
            span
        } else {
            self.text.clone()
        };

        self.link = Some(Link {
            span,
            url: url.into(),
        });
        self
    }

    /// Notice as plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Link the notice points to, if any.
    pub fn url(&self) -> Option<&str> {
        self.link.as_ref().map(|link| link.url.as_str())
    }

    /// Part of the text that carries the link.
    pub fn linked_span(&self) -> Option<&str> {
        self.link.as_ref().map(|link| link.span.as_str())
    }

    /// Notice as an HTML fragment, with `©` written as `&copy;`.
    pub fn to_html(&self) -> String {
        let Some(link) = &self.link else {
            return escape_html(&self.text);
        };

        // `with_link` guarantees the span is part of the text.
        let (before, after) = match self.text.find(&link.span) {
            Some(start) => (&self.text[..start], &self.text[start + link.span.len()..]),
            None => ("", ""),
        };

        format!(
            "{}<a href=\"{}\">{}</a>{}",
            escape_html(before),
            escape_html(&link.url),
            escape_html(&link.span),
            escape_html(after),
        )
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '©' => out.push_str("&copy;"),
            c => out.push(c),
        }
    }

    out
}
