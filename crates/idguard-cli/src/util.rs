use anyhow::{Context as _, Result};
use std::io::{self, BufRead};
use url::form_urlencoded;

/// First value posted for `field_id` in an urlencoded form body.
pub fn field_value_from_body(body: &str, field_id: &str) -> Option<String> {
    form_urlencoded::parse(body.as_bytes())
        .find(|(name, _)| name == field_id)
        .map(|(_, value)| value.into_owned())
}

pub fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin().lock();
    let mut lines = Vec::new();
    for line in stdin.lines() {
        lines.push(line.with_context(|| "read stdin")?);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::field_value_from_body;

    #[test]
    fn field_value_from_body_decodes_value() {
        let value = field_value_from_body("facebook_id=john.doe123&x=1", "facebook_id");
        assert_eq!(value.as_deref(), Some("john.doe123"));
    }

    #[test]
    fn field_value_from_body_decodes_plus_as_space() {
        let value = field_value_from_body("facebook_id=john+doe", "facebook_id");
        assert_eq!(value.as_deref(), Some("john doe"));
        let value = field_value_from_body("facebook_id=user%40name", "facebook_id");
        assert_eq!(value.as_deref(), Some("user@name"));
    }

    #[test]
    fn field_value_from_body_takes_first_value() {
        let value = field_value_from_body("facebook_id=1&facebook_id=2", "facebook_id");
        assert_eq!(value.as_deref(), Some("1"));
    }

    #[test]
    fn field_value_from_body_missing_field() {
        assert_eq!(field_value_from_body("other=1", "facebook_id"), None);
        assert_eq!(field_value_from_body("", "facebook_id"), None);
    }
}
