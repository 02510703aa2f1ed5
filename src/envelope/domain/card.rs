//! Cards rendered in the companion app alongside speech.

use serde::{Deserialize, Serialize};

/// A card shown in the companion app.
///
/// # Serialisation
///
/// Cards are serialised with a `type` tag field:
///
/// ```json
/// { "type": "Simple", "title": "...", "content": "..." }
/// { "type": "Standard", "title": "...", "text": "...", "image": { "smallImageUrl": "..." } }
/// { "type": "LinkAccount" }
/// ```
///
/// All text in a card, image URLs included, must stay within 8000
/// characters; each image URL within 2000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Title and plain content.
    Simple {
        /// Card title.
        title: String,
        /// Card body.
        content: String,
    },
    /// Title, text and an optional image.
    Standard {
        /// Card title.
        title: String,
        /// Card body.
        text: String,
        /// Optional image URLs.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<CardImage>,
    },
    /// Prompts the user to link their account.
    LinkAccount,
}

impl Card {
    /// Creates a simple card.
    #[must_use]
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Simple {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Creates a standard card without an image.
    #[must_use]
    pub fn standard(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Standard {
            title: title.into(),
            text: text.into(),
            image: None,
        }
    }

    /// Attaches an image to a standard card.
    ///
    /// Other card kinds have no image slot and are returned unchanged.
    #[must_use]
    pub fn with_image(self, image: CardImage) -> Self {
        match self {
            Self::Standard { title, text, .. } => Self::Standard {
                title,
                text,
                image: Some(image),
            },
            other => other,
        }
    }

    /// Returns the number of characters counted against the card limit.
    ///
    /// This covers the title, content, text and image URLs.
    #[must_use]
    pub fn char_count(&self) -> usize {
        match self {
            Self::Simple { title, content } => title.chars().count() + content.chars().count(),
            Self::Standard { title, text, image } => {
                title.chars().count()
                    + text.chars().count()
                    + image.as_ref().map_or(0, CardImage::char_count)
            }
            Self::LinkAccount => 0,
        }
    }

    /// Returns the image, if this card carries one.
    #[must_use]
    pub const fn image(&self) -> Option<&CardImage> {
        match self {
            Self::Standard {
                image: Some(image), ..
            } => Some(image),
            _ => None,
        }
    }
}

/// Image URLs for a standard card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    /// URL of the small image variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,

    /// URL of the large image variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}

impl CardImage {
    /// Creates an image with both URL variants.
    #[must_use]
    pub fn new(small_image_url: impl Into<String>, large_image_url: impl Into<String>) -> Self {
        Self {
            small_image_url: Some(small_image_url.into()),
            large_image_url: Some(large_image_url.into()),
        }
    }

    fn char_count(&self) -> usize {
        [&self.small_image_url, &self.large_image_url]
            .into_iter()
            .flatten()
            .map(|url| url.chars().count())
            .sum()
    }
}
