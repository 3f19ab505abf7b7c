//! # Footer Content
//!
//! Immutable tables rendered by the site footer: link groups, social links, the brand
//! block and the legal bar. Everything here is `&'static` data defined once and never
//! mutated; [`FOOTER`] is the instance the site renders.
//!
//! ## Integrity
//!
//! The footer component performs no checks at render time. Broken content is caught by
//! [`FooterContent::validate`], which the web entry point and the preview host run on
//! startup and the test suite runs on every build.
//!
//! ```rust
//! use shared::footer::FOOTER;
//!
//! assert!(FOOTER.validate().is_ok());
//! assert_eq!(FOOTER.groups[0].title, "Company");
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::utils::{destination_kind, DestinationKind};

/// A single navigational link: display text and destination.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LinkItem {
    pub label: &'static str,
    /// Path (`/about`), path with fragment (`/services#cloud`) or absolute URL
    pub href: &'static str,
}

impl LinkItem {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn kind(&self) -> DestinationKind {
        destination_kind(self.href)
    }
}

/// A titled cluster of links shown under one heading.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [LinkItem],
}

/// Icon reference for a social link.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Twitter,
    LinkedIn,
    GitHub,
}

/// An external profile link shown as an icon button.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    /// Absolute `https://` URL
    pub href: &'static str,
    pub glyph: Glyph,
}

/// Brand mark and description shown in the first footer column.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub home: &'static str,
}

/// Everything the footer renders, bundled.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FooterContent {
    pub brand: Brand,
    pub groups: &'static [LinkGroup],
    pub socials: &'static [SocialLink],
    /// Links in the bottom bar next to the copyright line
    pub legal: &'static [LinkItem],
    pub copyright_holder: &'static str,
}

// region:    --- Content

pub const LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Company",
        links: &[
            LinkItem::new("About", "/about"),
            LinkItem::new("Careers", "/careers"),
            LinkItem::new("Contact", "/contact"),
            LinkItem::new("Privacy Policy", "/privacy"),
        ],
    },
    LinkGroup {
        title: "Services",
        links: &[
            LinkItem::new("AI Workflow Automation", "/services#ai-automation"),
            LinkItem::new("Blockchain Solutions", "/services#blockchain"),
            LinkItem::new("Cloud Architecture", "/services#cloud"),
            LinkItem::new("Enterprise Software", "/services#software"),
        ],
    },
    LinkGroup {
        title: "Resources",
        links: &[
            LinkItem::new("Blog", "/blog"),
            LinkItem::new("Case Studies", "/case-studies"),
            LinkItem::new("Documentation", "/docs"),
            LinkItem::new("FAQ", "/faq"),
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/intelik",
        glyph: Glyph::Twitter,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/company/intelik",
        glyph: Glyph::LinkedIn,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/intelik",
        glyph: Glyph::GitHub,
    },
];

pub const LEGAL_LINKS: &[LinkItem] = &[
    LinkItem::new("Privacy Policy", "/privacy-policy"),
    LinkItem::new("Terms of Service", "/terms-of-service"),
];

pub const BRAND: Brand = Brand {
    name: "INTELIK",
    tagline: "Enterprise-grade AI automation, blockchain solutions, cloud architecture, \
              and custom software development for forward-thinking organizations.",
    home: "/",
};

pub const FOOTER: FooterContent = FooterContent {
    brand: BRAND,
    groups: LINK_GROUPS,
    socials: SOCIAL_LINKS,
    legal: LEGAL_LINKS,
    copyright_holder: "Intelik",
};

// endregion: --- Content

impl FooterContent {
    /// Check the tables for authoring mistakes.
    ///
    /// Returns the first problem found, walking groups in order, then social links,
    /// then the legal bar.
    pub fn validate(&self) -> Result<(), ContentError> {
        for group in self.groups {
            if group.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle);
            }
            if group.links.is_empty() {
                return Err(ContentError::EmptyGroup(group.title));
            }
            for (i, link) in group.links.iter().enumerate() {
                check_link(link)?;
                if group.links[..i].iter().any(|prev| prev.label == link.label) {
                    return Err(ContentError::DuplicateLabel {
                        group: group.title,
                        label: link.label,
                    });
                }
            }
        }

        for social in self.socials {
            if social.label.trim().is_empty() {
                return Err(ContentError::EmptyLabel(social.href));
            }
            if !social.href.starts_with("https://") {
                return Err(ContentError::InsecureSocialLink(social.label));
            }
        }

        for link in self.legal {
            check_link(link)?;
        }

        Ok(())
    }

    /// Total number of links across all groups.
    pub fn group_link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

fn check_link(link: &LinkItem) -> Result<(), ContentError> {
    if link.label.trim().is_empty() {
        return Err(ContentError::EmptyLabel(link.href));
    }
    if link.href.trim().is_empty() {
        return Err(ContentError::EmptyDestination(link.label));
    }
    Ok(())
}

// region:    --- Error

/// Authoring mistakes found by [`FooterContent::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("link group with an empty title")]
    EmptyTitle,

    #[error("link group '{0}' has no links")]
    EmptyGroup(&'static str),

    #[error("link to '{0}' has an empty label")]
    EmptyLabel(&'static str),

    #[error("link '{0}' has an empty destination")]
    EmptyDestination(&'static str),

    #[error("social link '{0}' must use an https:// destination")]
    InsecureSocialLink(&'static str),

    #[error("label '{label}' appears twice in group '{group}'")]
    DuplicateLabel {
        group: &'static str,
        label: &'static str,
    },
}

// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    fn with_groups(groups: &'static [LinkGroup]) -> FooterContent {
        FooterContent { groups, ..FOOTER }
    }

    #[test]
    fn test_site_content_is_valid() {
        assert_eq!(FOOTER.validate(), Ok(()));
    }

    #[test]
    fn test_groups_have_titles_and_links() {
        assert_eq!(FOOTER.groups.len(), 3);
        for group in FOOTER.groups {
            assert!(!group.title.is_empty());
            assert!(!group.links.is_empty());
            for link in group.links {
                assert!(!link.label.is_empty());
                assert!(!link.href.is_empty());
            }
        }
        assert_eq!(FOOTER.group_link_count(), 12);
    }

    #[test]
    fn test_social_links_are_https() {
        assert_eq!(FOOTER.socials.len(), 3);
        for social in FOOTER.socials {
            assert!(!social.label.is_empty());
            assert!(social.href.starts_with("https://"));
        }
        let glyphs: Vec<Glyph> = FOOTER.socials.iter().map(|s| s.glyph).collect();
        assert_eq!(glyphs, vec![Glyph::Twitter, Glyph::LinkedIn, Glyph::GitHub]);
    }

    #[test]
    fn test_link_kinds() {
        assert_eq!(FOOTER.groups[0].links[0].kind(), DestinationKind::Path);
        assert_eq!(FOOTER.groups[1].links[2].kind(), DestinationKind::Anchor);
        assert!(FOOTER.legal.iter().all(|l| l.kind() == DestinationKind::Path));
        assert_eq!(
            LinkItem::new("Status", "https://status.intelik.com").kind(),
            DestinationKind::External
        );
    }

    #[test]
    fn test_group_order_is_fixed() {
        let titles: Vec<&str> = FOOTER.groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Company", "Services", "Resources"]);
        assert_eq!(FOOTER.groups[1].links[0].href, "/services#ai-automation");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        static GROUPS: &[LinkGroup] = &[LinkGroup {
            title: "  ",
            links: &[LinkItem::new("About", "/about")],
        }];
        assert_eq!(with_groups(GROUPS).validate(), Err(ContentError::EmptyTitle));
    }

    #[test]
    fn test_validate_rejects_empty_group() {
        static GROUPS: &[LinkGroup] = &[LinkGroup { title: "Company", links: &[] }];
        assert_eq!(
            with_groups(GROUPS).validate(),
            Err(ContentError::EmptyGroup("Company"))
        );
    }

    #[test]
    fn test_validate_rejects_empty_label_and_destination() {
        static NO_LABEL: &[LinkGroup] = &[LinkGroup {
            title: "Company",
            links: &[LinkItem::new("", "/about")],
        }];
        static NO_HREF: &[LinkGroup] = &[LinkGroup {
            title: "Company",
            links: &[LinkItem::new("About", "")],
        }];
        assert_eq!(
            with_groups(NO_LABEL).validate(),
            Err(ContentError::EmptyLabel("/about"))
        );
        assert_eq!(
            with_groups(NO_HREF).validate(),
            Err(ContentError::EmptyDestination("About"))
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_label() {
        static GROUPS: &[LinkGroup] = &[LinkGroup {
            title: "Resources",
            links: &[LinkItem::new("Blog", "/blog"), LinkItem::new("Blog", "/news")],
        }];
        let err = with_groups(GROUPS).validate().unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateLabel { group: "Resources", label: "Blog" }
        );
        assert_eq!(err.to_string(), "label 'Blog' appears twice in group 'Resources'");
    }

    #[test]
    fn test_validate_rejects_plain_http_social() {
        static SOCIALS: &[SocialLink] = &[SocialLink {
            label: "GitHub",
            href: "http://github.com/intelik",
            glyph: Glyph::GitHub,
        }];
        let content = FooterContent { socials: SOCIALS, ..FOOTER };
        assert_eq!(
            content.validate(),
            Err(ContentError::InsecureSocialLink("GitHub"))
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(FOOTER).unwrap();
        assert_eq!(json["brand"]["name"], "INTELIK");
        assert_eq!(json["groups"][2]["links"][3]["label"], "FAQ");
        assert_eq!(json["socials"][1]["glyph"], "linkedin");
        assert_eq!(json["copyright_holder"], "Intelik");
    }
}
