//! Slide carousel state.
//!
//! The carousel always holds at least one slide, so the current index is valid
//! by construction. Navigation wraps in both directions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One image and caption pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Slide {
    pub image_url: String,
    pub caption: String,
}

impl Slide {
    pub fn new(image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    Empty,
    #[error("slide {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Arc<[Slide]>,
    current: usize,
}

impl Carousel {
    pub fn new(slides: impl Into<Arc<[Slide]>>) -> Result<Self, CarouselError> {
        let slides = slides.into();
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { slides, current: 0 })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // Never empty; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len();
    }

    pub fn retreat(&mut self) {
        self.current = (self.current + self.len() - 1) % self.len();
    }

    /// Jump straight to `index`. Out-of-range indices leave the carousel untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// `count` consecutive slides starting at the current one, wrapping.
    pub fn visible(&self, count: usize) -> impl Iterator<Item = (usize, &Slide)> {
        let len = self.len();
        (0..count).map(move |offset| {
            let index = (self.current + offset) % len;
            (index, &self.slides[index])
        })
    }

    pub fn visible_for(
        &self,
        viewport: Viewport,
    ) -> impl Iterator<Item = (usize, &Slide)> {
        self.visible(viewport.slides_per_view())
    }
}

/// Width class of the surface the carousel is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    #[default]
    Compact,
    Medium,
    Wide,
}

impl Viewport {
    pub const MEDIUM_MIN_WIDTH: f32 = 768.0;
    pub const WIDE_MIN_WIDTH: f32 = 1024.0;

    pub fn from_width(width: f32) -> Self {
        if width >= Self::WIDE_MIN_WIDTH {
            Self::Wide
        } else if width >= Self::MEDIUM_MIN_WIDTH {
            Self::Medium
        } else {
            Self::Compact
        }
    }

    pub fn slides_per_view(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Medium => 2,
            Self::Wide => 3,
        }
    }
}
