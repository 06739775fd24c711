// src/specs/cols.rs
// Accepted column spellings per field, tried in order by `fields::find_col`.

// Bibliographic
pub const AUTHORS: &[&str] = &["authors", "author", "作者"];
pub const AUTHOR_ORDER: &[&str] = &["author_order", "作者序", "作者次序", "次序"];
pub const TITLE: &[&str] = &["title", "题目"];
pub const CONTAINER: &[&str] = &["journal", "conference", "book", "venue", "容器", "刊物", "期刊", "会议"];
pub const PAGES: &[&str] = &["pages", "pp", "页"];
pub const TIME: &[&str] = &["time", "日期", "时间"];
pub const MONTH: &[&str] = &["month"];
pub const YEAR: &[&str] = &["year", "年份"];
pub const DOI: &[&str] = &["doi", "doa"];
pub const NOTE: &[&str] = &["note", "备注"];
pub const NOTE_LINK: &[&str] = &["note_link", "备注链接", "note_url"];
pub const LINK: &[&str] = &["url", "link", "链接", "地址"];

// Book chapters
pub const CHAPTER_TITLE: &[&str] = &["chapter_title", "chapter", "章节题目"];
pub const BOOK_TITLE: &[&str] = &["book_title", "book", "书名"];
pub const ISBN: &[&str] = &["isbn"];
pub const PUBLISHER: &[&str] = &["publisher", "出版社"];
pub const IMAGE: &[&str] = &["pics", "image", "图片", "picture"];

// Patents and awards
pub const INDEX: &[&str] = &["index", "序号"];
pub const STATE: &[&str] = &["state", "状态"];
pub const VISIBLE: &[&str] = &["visible", "visable", "展示"];
pub const PATENT_TITLE: &[&str] = &["title", "题目", "patent_title"];

// News
pub const NEWS_DATE: &[&str] = &["date", "日期", "时间"];
pub const NEWS_TEXT: &[&str] = &["text", "content", "描述", "description", "desc", "内容", "news"];

// Correspondence
pub const ENTRY_NAME: &[&str] = &["name", "名称", "field"];
pub const ENTRY_CONTENT: &[&str] = &["content", "内容", "value"];
pub const EMAIL: &[&str] = &["email", "邮箱", "e-mail"];
pub const PHONE: &[&str] = &["phone", "电话", "tel"];
pub const OFFICE: &[&str] = &["office", "办公室", "lab", "laboratory"];
pub const ADDRESS: &[&str] = &["address", "地址", "location"];
pub const HOMEPAGE: &[&str] = &["homepage", "website", "个人主页"];

// Header / profile
pub const NAME_CN: &[&str] = &["name_cn", "姓名"];
pub const NAME_EN: &[&str] = &["name_en", "英文名"];
pub const PROFILE_EMAIL: &[&str] = &["email"];
pub const PROFILE_HOMEPAGE: &[&str] = &["ieee", "ieee link"];
