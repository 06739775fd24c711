// src/section.rs
//! Worksheet title → content category, anchor and list tag.

use crate::core::sanitize::normalize_title;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    News,
    FeaturedArticle,
    BookChapter,
    Journal,
    Conference,
    Patent,
    Award,
    Correspondence,
    ResearchInterests,
    HeaderProfile,
    Biography,
    Unknown,
}

/// Accepted (normalized) worksheet titles per category.
const SYNONYMS: &[(Category, &[&str])] = &[
    (Category::Biography, &["biography", "bio", "传记", "简历"]),
    (Category::News, &["news", "最新动态", "动态"]),
    (Category::FeaturedArticle, &["featured article", "featured", "精选文章"]),
    (Category::BookChapter, &["book chapter", "book chapters", "图书章节"]),
    (Category::Journal, &["refereed journal papers", "journal", "journals", "期刊论文"]),
    (Category::Conference, &[
        "refereed conference papers", "refereed conference paper", "conference", "conferences",
        "会议论文", "conf", "conference papers", "refereed conferences", "会议",
    ]),
    (Category::Patent, &["patent", "patents", "专利"]),
    (Category::Award, &["award", "awards", "award & honors", "honors", "荣誉", "奖项"]),
    (Category::Correspondence, &["correspondence", "contact", "contacts", "联系方式", "联系", "通讯"]),
    (Category::ResearchInterests, &["research interests", "interests", "研究兴趣"]),
    (Category::HeaderProfile, &["header", "profile", "顶部", "基本信息"]),
];

/// Where a category's fragment goes in the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Replace the inner HTML of the first `tag` after the anchor.
    List { anchor: &'static str, tag: &'static str },
    /// Replace the inner text of the first `tag` after the anchor.
    Text { anchor: &'static str, tag: &'static str },
    /// Targeted substitutions in the page header.
    Profile,
}

impl Category {
    pub fn target(self) -> Option<Target> {
        use Category::*;
        fn list(anchor: &'static str, tag: &'static str) -> Option<Target> {
            Some(Target::List { anchor, tag })
        }
        match self {
            News => list("News", "ul"),
            FeaturedArticle => list("Featured Article", "ol"),
            BookChapter => list("Book Chapter", "ol"),
            Journal => list("Refereed Journal Papers", "ol"),
            Conference => list("Refereed Conference Papers", "ol"),
            Patent => list("Patent", "ol"),
            Award => list("Award", "ul"),
            Correspondence => list("Correspondence", "ul"),
            ResearchInterests => Some(Target::Text { anchor: "Research Interests", tag: "h5" }),
            HeaderProfile => Some(Target::Profile),
            Biography | Unknown => None,
        }
    }
}

pub fn classify(title: &str) -> Category {
    let norm = normalize_title(title);
    SYNONYMS
        .iter()
        .find(|(_, names)| names.contains(&norm.as_str()))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Unknown)
}
