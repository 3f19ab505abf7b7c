//! Site Footer Component
//!
//! Brand block with social icons, a grid of link groups, and a bottom bar with the
//! copyright year and legal links. Takes no props: content comes from
//! [`shared::footer::FOOTER`], the year from the [`Clock`](crate::state::Clock) in
//! context, and reveal hooks from the [`MotionPreference`] in context.

use leptos::prelude::*;
use shared::footer::{LinkGroup, LinkItem, SocialLink, FOOTER};
use shared::utils::{copyright_line, DestinationKind};

use crate::components::icons::GlyphIcon;
use crate::components::motion::{observe_viewport, use_motion};
use crate::state::use_clock;
use crate::utils::constants::VIEWPORT_AMOUNT;

#[component]
pub fn Footer() -> impl IntoView {
    let content = FOOTER;
    let year = use_clock().year();
    let motion = use_motion();

    let root = NodeRef::<leptos::html::Footer>::new();
    if motion.is_enabled() {
        observe_viewport(root, VIEWPORT_AMOUNT);
    }

    view! {
        <footer
            node_ref=root
            class="site-footer"
            data-motion=motion.root_marker()
            style=motion.root_style()
        >
            <FooterDecor animated=motion.is_enabled()/>

            <div class="container">
                <div class="footer-grid">
                    <div class=motion.class("footer-brand")>
                        <a href=content.brand.home class="footer-logo-link">
                            <h2 class="footer-logo">{content.brand.name}</h2>
                        </a>
                        <p class="footer-tagline">{content.brand.tagline}</p>
                        <div class="footer-social">
                            {content
                                .socials
                                .iter()
                                .map(|social| view! { <SocialIcon social=*social/> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="footer-groups">
                        {content
                            .groups
                            .iter()
                            .enumerate()
                            .map(|(index, group)| view! { <LinkGroupColumn group=*group index=index/> })
                            .collect_view()}
                    </div>
                </div>

                <div class=motion.class("footer-bottom")>
                    <p class="footer-copyright">
                        {copyright_line(content.copyright_holder, year)}
                    </p>
                    <div class="footer-legal">
                        {content
                            .legal
                            .iter()
                            .map(|link| footer_link(*link, "footer-legal-link"))
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// One heading plus its list of links; staggered by `index` inside the grid.
#[component]
fn LinkGroupColumn(group: LinkGroup, index: usize) -> impl IntoView {
    let motion = use_motion();

    view! {
        <div class=motion.class("footer-group") style=motion.stagger_style(index)>
            <h3 class="footer-group-title">{group.title}</h3>
            <ul class="footer-group-links">
                {group
                    .links
                    .iter()
                    .map(|link| view! { <li>{footer_link(*link, "footer-link")}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SocialIcon(social: SocialLink) -> impl IntoView {
    view! {
        <a
            href=social.href
            class="footer-social-link"
            target="_blank"
            rel="noopener noreferrer"
            aria-label=social.label
        >
            <GlyphIcon glyph=social.glyph/>
        </a>
    }
}

/// Plain anchor; the router intercepts same-origin clicks. External links open a new tab.
fn footer_link(link: LinkItem, class: &'static str) -> impl IntoView {
    let external = link.kind() == DestinationKind::External;

    view! {
        <a
            href=link.href
            class=class
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {link.label}
        </a>
    }
}

/// Background ornaments. No text, hidden from assistive tech.
#[component]
fn FooterDecor(animated: bool) -> impl IntoView {
    let core_class = if animated {
        "footer-core footer-core-pulse"
    } else {
        "footer-core"
    };

    view! {
        <div class="footer-glass" aria-hidden="true"></div>
        <div class="footer-hairline footer-hairline-top" aria-hidden="true"></div>
        <div class="footer-hairline footer-hairline-bottom" aria-hidden="true"></div>
        <div class="footer-ring footer-ring-left" aria-hidden="true"></div>
        <div class="footer-ring footer-ring-right" aria-hidden="true"></div>
        <div class=core_class aria-hidden="true"></div>
    }
}
