//! Read-only catalog of content templates, keyed by content type.
//!
//! The catalog is compiled in and shared by every request; nothing mutates it.

use serde::Serialize;

/// Filter value that selects every template.
pub const ALL_TYPES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub content_type: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
    pub length: &'static str,
    /// Section outline the generated piece should follow, in order.
    pub structure: &'static [&'static str],
}

pub const TEMPLATES: &[ContentTemplate] = &[
    ContentTemplate {
        id: "blog-how-to",
        name: "How-to guide",
        content_type: "blog",
        description: "Step-by-step walkthrough that solves one concrete problem.",
        tone: "informative",
        length: "long",
        structure: &["Title", "Introduction", "Steps", "Common mistakes", "Conclusion"],
    },
    ContentTemplate {
        id: "blog-listicle",
        name: "Listicle",
        content_type: "blog",
        description: "Numbered list of tips or examples around a single theme.",
        tone: "casual",
        length: "medium",
        structure: &["Title", "Hook", "Numbered items", "Wrap-up"],
    },
    ContentTemplate {
        id: "social-announcement",
        name: "Announcement post",
        content_type: "social",
        description: "Short launch or news post with a call to action.",
        tone: "enthusiastic",
        length: "short",
        structure: &["Hook", "News", "Call to action", "Hashtags"],
    },
    ContentTemplate {
        id: "social-engagement",
        name: "Engagement question",
        content_type: "social",
        description: "Conversation starter that invites replies.",
        tone: "friendly",
        length: "short",
        structure: &["Context", "Question"],
    },
    ContentTemplate {
        id: "email-newsletter",
        name: "Newsletter",
        content_type: "email",
        description: "Periodic update grouping several short stories.",
        tone: "friendly",
        length: "medium",
        structure: &["Subject line", "Greeting", "Highlights", "Sign-off"],
    },
    ContentTemplate {
        id: "email-promotion",
        name: "Promotional email",
        content_type: "email",
        description: "Single offer with urgency and one clear call to action.",
        tone: "persuasive",
        length: "short",
        structure: &["Subject line", "Offer", "Benefits", "Call to action"],
    },
    ContentTemplate {
        id: "ad-search",
        name: "Search ad",
        content_type: "ad",
        description: "Headline and description sized for search results.",
        tone: "persuasive",
        length: "short",
        structure: &["Headline", "Description", "Call to action"],
    },
    ContentTemplate {
        id: "landing-product",
        name: "Product landing page",
        content_type: "landing",
        description: "Conversion page built around one product.",
        tone: "professional",
        length: "long",
        structure: &[
            "Hero headline",
            "Value proposition",
            "Features",
            "Social proof",
            "FAQ",
            "Call to action",
        ],
    },
];

/// Templates for `content_type`, or the whole catalog for `"all"`.
/// An unknown type yields an empty list.
pub fn templates_for(content_type: &str) -> Vec<&'static ContentTemplate> {
    TEMPLATES
        .iter()
        .filter(|t| content_type == ALL_TYPES || t.content_type == content_type)
        .collect()
}

pub fn find_template(template_id: &str) -> Option<&'static ContentTemplate> {
    TEMPLATES.iter().find(|t| t.id == template_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn test_all_returns_whole_catalog() {
        assert_eq!(templates_for("all").len(), TEMPLATES.len());
    }

    #[test]
    fn test_filter_by_type() {
        let social = templates_for("social");
        assert_eq!(social.len(), 2);
        assert!(social.iter().all(|t| t.content_type == "social"));
    }

    #[test]
    fn test_unknown_type_is_empty() {
        assert!(templates_for("podcast").is_empty());
    }

    #[test]
    fn test_find_template() {
        assert_eq!(find_template("ad-search").map(|t| t.content_type), Some("ad"));
        assert!(find_template("missing").is_none());
    }
}
