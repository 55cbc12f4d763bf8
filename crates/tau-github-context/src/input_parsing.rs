use std::collections::BTreeMap;

/// Permission scopes granted on top of the defaults, keyed by scope name.
///
/// Keys are unique; when a scope is listed twice the later value wins.
pub type AdditionalPermissions = BTreeMap<String, String>;

/// Split a tool list on commas or newline runs, dropping `#` comments and blanks.
pub fn parse_multiline_input(raw: &str) -> Vec<String> {
    raw.split(|ch: char| matches!(ch, ',' | '\n' | '\r'))
        .map(|token| match token.find('#') {
            Some(index) => &token[..index],
            None => token,
        })
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `scope: level` lines into a permission map.
///
/// Lines without a `:` or with an empty side are skipped.
pub fn parse_additional_permissions(raw: &str) -> AdditionalPermissions {
    let mut permissions = AdditionalPermissions::new();
    if raw.trim().is_empty() {
        return permissions;
    }

    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        permissions.insert(key.to_string(), value.to_string());
    }
    permissions
}

/// Return true only for the literal string `true`.
pub fn parse_bool_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}
