pub const PREVIEW_HTML: &str = include_str!("../templates/preview.html");
pub const ZRC_PROSAUDIT_TABLE_HTML: &str = include_str!("../templates/zrc_prosaudit.html");
pub const BASE_LEADERBOARD_JS: &str = include_str!("../templates/base.leaderboard.js");

/// Embedded template by file name, as shipped with the binary.
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "preview.html" => Some(PREVIEW_HTML),
        "zrc_prosaudit.html" => Some(ZRC_PROSAUDIT_TABLE_HTML),
        "base.leaderboard.js" => Some(BASE_LEADERBOARD_JS),
        _ => None,
    }
}
