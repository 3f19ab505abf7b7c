//! Inline SVG icons for social glyphs (lucide outlines, 24x24 viewBox)

use leptos::prelude::*;
use shared::footer::Glyph;

use crate::utils::constants::ICON_SIZE;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Shape {
    Path(&'static str),
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
    },
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
}

const TWITTER: &[Shape] = &[Shape::Path(
    "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
)];

const LINKEDIN: &[Shape] = &[
    Shape::Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
    Shape::Rect { x: "2", y: "9", width: "4", height: "12" },
    Shape::Circle { cx: "4", cy: "4", r: "2" },
];

const GITHUB: &[Shape] = &[
    Shape::Path(
        "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
    ),
    Shape::Path("M9 18c-4.51 2-5-2-7-2"),
];

fn shapes(glyph: Glyph) -> &'static [Shape] {
    match glyph {
        Glyph::Twitter => TWITTER,
        Glyph::LinkedIn => LINKEDIN,
        Glyph::GitHub => GITHUB,
    }
}

/// CSS-friendly name used in the icon's class list.
fn glyph_name(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Twitter => "twitter",
        Glyph::LinkedIn => "linkedin",
        Glyph::GitHub => "github",
    }
}

fn shape_view(shape: &Shape) -> AnyView {
    match *shape {
        Shape::Path(d) => view! { <path d=d></path> }.into_any(),
        Shape::Rect { x, y, width, height } => {
            view! { <rect x=x y=y width=width height=height></rect> }.into_any()
        }
        Shape::Circle { cx, cy, r } => view! { <circle cx=cx cy=cy r=r></circle> }.into_any(),
    }
}

/// Stroke icon for a social glyph. Decorative; the enclosing link carries the label.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(default = ICON_SIZE)] size: u32) -> impl IntoView {
    let size = size.to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("icon icon-{}", glyph_name(glyph))
            aria-hidden="true"
        >
            {shapes(glyph).iter().map(shape_view).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn render_icon(glyph: Glyph, size: u32) -> String {
        Owner::new().with(|| view! { <GlyphIcon glyph=glyph size=size/> }.to_html())
    }

    #[test]
    fn test_every_glyph_has_shapes() {
        for glyph in [Glyph::Twitter, Glyph::LinkedIn, Glyph::GitHub] {
            assert!(!shapes(glyph).is_empty());
        }
        assert_eq!(shapes(Glyph::LinkedIn).len(), 3);
    }

    #[test]
    fn test_icon_renders_svg() {
        let html = render_icon(Glyph::LinkedIn, ICON_SIZE);
        assert!(html.contains("<svg"));
        assert!(html.contains("width=\"16\""));
        assert!(html.contains("class=\"icon icon-linkedin\""));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("<rect"));
        assert!(html.contains("<circle"));
    }

    #[test]
    fn test_icon_size_override() {
        let html = render_icon(Glyph::GitHub, 24);
        assert!(html.contains("height=\"24\""));
        assert_eq!(html.matches("<path").count(), 2);
    }
}
