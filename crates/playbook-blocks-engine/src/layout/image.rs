use serde::{Deserialize, Serialize};

/// An image placed in a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Optional link wrapping the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub bordered: bool,
    #[serde(default = "default_true")]
    pub rounded: bool,
    #[serde(default = "default_true")]
    pub shadow: bool,
}

fn default_true() -> bool {
    true
}

impl ImageBlock {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            caption: None,
            href: None,
            bordered: false,
            rounded: true,
            shadow: true,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Picks what to show for the renderer's current load signal.
    ///
    /// Loading is owned by the renderer; this only maps its signal onto an
    /// already-parsed presentation branch.
    pub fn presentation(&self, state: ImageLoadState) -> ImagePresentation<'_> {
        match state {
            ImageLoadState::Loading => ImagePresentation::Skeleton,
            ImageLoadState::Loaded => ImagePresentation::Picture {
                src: &self.src,
                alt: &self.alt,
                caption: self.caption.as_deref(),
            },
            ImageLoadState::Failed => ImagePresentation::Failed { src: &self.src },
        }
    }
}

/// The load signal reported back by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl From<Result<(), ()>> for ImageLoadState {
    fn from(result: Result<(), ()>) -> Self {
        match result {
            Ok(()) => ImageLoadState::Loaded,
            Err(()) => ImageLoadState::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePresentation<'a> {
    /// Placeholder while loading.
    Skeleton,
    Picture {
        src: &'a str,
        alt: &'a str,
        caption: Option<&'a str>,
    },
    /// Failure placeholder naming the source that could not be loaded.
    Failed { src: &'a str },
}
