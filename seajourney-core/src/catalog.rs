//! Built-in page copy and the default slide catalog.

use crate::carousel::Slide;

pub const BRAND_NAME: &str = "Sea Journey";

pub const TAGLINE: &str = "Your Gateway to Breathtaking South-East Asian Adventures";

pub const COPYRIGHT: &str = "© 2024 Sea Journey. All rights reserved.";

pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1552733407-5d5c46c3bb3b?auto=format&fit=crop&w=1920&q=80";

pub const CONTACT_EMAIL: &str = "info@seajourney.com";

const THAILAND: (&str, &str) = (
    "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?auto=format&fit=crop&w=400&q=80",
    "Crystal clear waters of Thailand",
);
const BALI: (&str, &str) = (
    "https://images.unsplash.com/photo-1537996194471-e657df975ab4?auto=format&fit=crop&w=400&q=80",
    "Temples of Bali",
);
const VIETNAM: (&str, &str) = (
    "https://images.unsplash.com/photo-1512553353614-82a7370096dc?auto=format&fit=crop&w=400&q=80",
    "Beaches of Vietnam",
);

/// The launch catalog. Destinations repeat so the three-up view always has
/// distinct neighbours while cycling.
pub fn default_slides() -> Vec<Slide> {
    [THAILAND, BALI, VIETNAM, THAILAND, BALI, VIETNAM]
        .into_iter()
        .map(|(url, caption)| Slide::new(url, caption))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Facebook,
    Instagram,
    Youtube,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

/// Footer links, in display order.
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            kind: SocialKind::Facebook,
            href: "#".to_string(),
        },
        SocialLink {
            kind: SocialKind::Instagram,
            href: "#".to_string(),
        },
        SocialLink {
            kind: SocialKind::Youtube,
            href: "#".to_string(),
        },
        SocialLink {
            kind: SocialKind::Mail,
            href: format!("mailto:{CONTACT_EMAIL}"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_cycles_three_destinations() {
        let slides = default_slides();
        assert_eq!(slides.len(), 6);
        assert_eq!(slides[0], slides[3]);
        assert_eq!(slides[2].caption, "Beaches of Vietnam");
    }

    #[test]
    fn mail_link_points_at_contact_address() {
        let links = social_links();
        let mail = links.last().unwrap();
        assert_eq!(mail.kind, SocialKind::Mail);
        assert_eq!(mail.href, "mailto:info@seajourney.com");
    }
}
