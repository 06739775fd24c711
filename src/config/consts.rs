// src/config/consts.rs

// Default inputs, resolved against the working directory
pub const DEFAULT_WORKBOOK_FILE: &str = "library_update_this_file.xlsx";
pub const DEFAULT_DOCUMENT_FILE: &str = "index.html";

// Logging
pub const DEFAULT_LOG_FILE: &str = "index_updater.log";

// Patching
pub const DEFAULT_INDENT: &str = "            "; // 12 spaces
pub const ANCHOR_PREFIX: &str = "<div id=\"";
pub const ANCHOR_SUFFIX: &str = "\"></div>";

// Author emphasis: full name or initial + surname, matched case-insensitively
pub const DEFAULT_HIGHLIGHT_PATTERN: &str = r"\b(Yuchen\s+Li|Y\.?\s*Li)\b";
pub const HIGHLIGHT_OPEN: &str = "<font class=\"deepblue\">";
pub const HIGHLIGHT_CLOSE: &str = "</font>";

// Record visibility
pub const VISIBLE_TOKENS: &[&str] = &["1", "true", "True", "是", "yes", "Yes"];

// Book chapter cover image
pub const CHAPTER_IMAGE_CLASS: &str = "animate__animated animate__fadeIn animate__slow animate__delay-1s";
