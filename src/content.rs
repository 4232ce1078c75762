//! Static site content: phrases, links, and asset paths.

pub const OWNER: &str = "Silfa Salsa Bila Putri";

pub const TYPEWRITER_WORDS: [&str; 2] = ["Network & Telecom Student", "Tech Enthusiast"];
pub const TECH_STACK: [&str; 4] = ["React", "Javascript", "Node.js", "Tailwind"];

pub const HOME_ANCHOR: &str = "Home";
pub const ABOUT_ANCHOR: &str = "About";
pub const PORTFOLIO_HREF: &str = "#Portofolio";
pub const CONTACT_HREF: &str = "#Contact";

pub const CV_PATH: &str = "/CV_ATS_SilfaSalsaBilaPutri.pdf";
pub const ILLUSTRATION_PATH: &str = "ilustrasiEngineer.png";
pub const PROFILE_IMAGE_PATH: &str = "/Silfa.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Instagram,
    Mail,
    ExternalLink,
    Sparkles,
    FileText,
    Code,
    Award,
    ArrowUpRight,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Github,
        Icon::Linkedin,
        Icon::Instagram,
        Icon::Mail,
        Icon::ExternalLink,
        Icon::Sparkles,
        Icon::FileText,
        Icon::Code,
        Icon::Award,
        Icon::ArrowUpRight,
    ];

    /// Inner markup of the lucide glyph, drawn on a 24x24 stroked viewBox.
    pub fn svg_body(self) -> &'static str {
        match self {
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Instagram => concat!(
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
                r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
                r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
            ),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Icon::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/>"#,
                r#"<path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
            Icon::Sparkles => concat!(
                r#"<path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"/>"#,
                r#"<path d="M20 3v4"/>"#,
                r#"<path d="M22 5h-4"/>"#,
                r#"<path d="M4 17v2"/>"#,
                r#"<path d="M5 18H3"/>"#,
            ),
            Icon::FileText => concat!(
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>"#,
                r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#,
                r#"<path d="M10 9H8"/>"#,
                r#"<path d="M16 13H8"/>"#,
                r#"<path d="M16 17H8"/>"#,
            ),
            Icon::Code => concat!(
                r#"<polyline points="16 18 22 12 16 6"/>"#,
                r#"<polyline points="8 6 2 12 8 18"/>"#,
            ),
            Icon::Award => concat!(
                r#"<circle cx="12" cy="8" r="6"/>"#,
                r#"<path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
            ),
            Icon::ArrowUpRight => concat!(r#"<path d="M7 7h10v10"/>"#, r#"<path d="M7 17 17 7"/>"#),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Github,
        label: "GitHub Profile",
        href: "https://github.com/SilfaSalsaBilaPutri",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/silfa-salsa-bila-putri-526453343",
    },
    SocialLink {
        icon: Icon::Instagram,
        label: "Instagram Profile",
        href: "https://www.instagram.com/silfa.sbp?igsh=cGkzZGNhaWRkb29l",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaButton {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    /// Tailwind motion applied to the icon on hover.
    pub hover_motion: &'static str,
}

pub const CTA_BUTTONS: [CtaButton; 2] = [
    CtaButton {
        href: PORTFOLIO_HREF,
        label: "Projects",
        icon: Icon::ExternalLink,
        hover_motion: "group-hover:rotate-45",
    },
    CtaButton {
        href: CONTACT_HREF,
        label: "Contact",
        icon: Icon::Mail,
        hover_motion: "group-hover:translate-x-1",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_open_expected_targets() {
        assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
        assert!(CTA_BUTTONS.iter().all(|b| b.href.starts_with('#')));
        assert_eq!(CTA_BUTTONS[1].hover_motion, "group-hover:translate-x-1");
    }

    #[test]
    fn test_every_icon_has_glyph_markup() {
        for icon in Icon::ALL {
            let body = icon.svg_body();
            assert!(body.starts_with('<') && body.ends_with("/>"), "{icon:?}: {body}");
            // self-closing shapes only, so every opened tag is closed
            assert_eq!(body.matches('<').count(), body.matches("/>").count(), "{icon:?}");
            assert!(!body.contains("<svg"), "{icon:?} must not nest an <svg>");
        }
    }

    #[test]
    fn test_typewriter_words_non_empty() {
        assert!(!TYPEWRITER_WORDS.is_empty());
        assert!(TYPEWRITER_WORDS.iter().all(|w| !w.is_empty()));
    }
}
