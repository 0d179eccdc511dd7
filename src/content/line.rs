use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Images the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageId {
    Profile,
}

impl ImageId {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageId::Profile => "profile",
        }
    }
}

/// Special effects that replace a line with an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Nico,
}

impl Effect {
    /// Sentinel understood by string-based renderers.
    pub fn sentinel(self) -> &'static str {
        match self {
            Effect::Nico => "::easteregg_nico::",
        }
    }
}

/// One row of terminal output.
///
/// Content tables build these directly, so a renderer never has to scan
/// text for link or image tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Line {
    Text {
        text: Cow<'static, str>,
    },
    Link {
        /// Text shown before the anchor, e.g. tree glyphs or indentation.
        prefix: Cow<'static, str>,
        url: Cow<'static, str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<Cow<'static, str>>,
    },
    Image {
        image: ImageId,
    },
    Effect {
        effect: Effect,
    },
}

impl Line {
    pub const BLANK: Line = Line::text("");

    pub const fn text(text: &'static str) -> Self {
        Line::Text { text: Cow::Borrowed(text) }
    }

    pub const fn link(prefix: &'static str, url: &'static str, label: &'static str) -> Self {
        Line::Link {
            prefix: Cow::Borrowed(prefix),
            url: Cow::Borrowed(url),
            label: Some(Cow::Borrowed(label)),
        }
    }

    pub const fn bare_link(prefix: &'static str, url: &'static str) -> Self {
        Line::Link {
            prefix: Cow::Borrowed(prefix),
            url: Cow::Borrowed(url),
            label: None,
        }
    }

    pub const fn image(image: ImageId) -> Self {
        Line::Image { image }
    }

    pub const fn effect(effect: Effect) -> Self {
        Line::Effect { effect }
    }

    pub fn owned(text: impl Into<String>) -> Self {
        Line::Text { text: Cow::Owned(text.into()) }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Text { text } if text.trim().is_empty())
    }

    /// Legacy string form: `<link=URL|Label>`, `<image=profile>` and the
    /// effect sentinel.
    pub fn markup(&self) -> Cow<'_, str> {
        match self {
            Line::Text { text } => Cow::Borrowed(text.as_ref()),
            Line::Link { prefix, url, label: Some(label) } => {
                Cow::Owned(format!("{}<link={}|{}>", prefix, url, label))
            }
            Line::Link { prefix, url, label: None } => {
                Cow::Owned(format!("{}<link={}>", prefix, url))
            }
            Line::Image { image } => Cow::Owned(format!("<image={}>", image.as_str())),
            Line::Effect { effect } => Cow::Borrowed(effect.sentinel()),
        }
    }
}

/// Plain rendering without colors. Links print as `label (url)`.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Text { text } => write!(f, "{}", text),
            Line::Link { prefix, url, label: Some(label) } => {
                write!(f, "{}{} ({})", prefix, label, url)
            }
            Line::Link { prefix, url, label: None } => write!(f, "{}{}", prefix, url),
            Line::Image { image } => write!(f, "[{}]", image.as_str()),
            Line::Effect { effect } => write!(f, "{}", effect.sentinel()),
        }
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::owned(text)
    }
}

impl From<&'static str> for Line {
    fn from(text: &'static str) -> Self {
        Line::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_markup_keeps_prefix_and_label() {
        let line = Line::link("   ├─ ", "https://example.org", "GitHub");
        assert_eq!(line.markup(), "   ├─ <link=https://example.org|GitHub>");
        assert_eq!(line.to_string(), "   ├─ GitHub (https://example.org)");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(Line::image(ImageId::Profile).markup(), "<image=profile>");
        assert_eq!(Line::effect(Effect::Nico).markup(), "::easteregg_nico::");
        assert_eq!(Line::bare_link("", "https://a.b").markup(), "<link=https://a.b>");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Line::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "text", "text": "hi" }));

        let json = serde_json::to_value(Line::bare_link("", "https://a.b")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "link", "prefix": "", "url": "https://a.b" }));
    }

    #[test]
    fn test_blank() {
        assert!(Line::BLANK.is_blank());
        assert!(Line::text("  ").is_blank());
        assert!(!Line::image(ImageId::Profile).is_blank());
    }
}
