use serde::de::DeserializeOwned;

/// Parse a kebab-case enum value through its serde representation.
///
/// Case is ignored and `_` is accepted for `-` (`in_progress` → `in-progress`).
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('_', "-");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use bnx_core::enums::{Category, ProjectStatus};

    use super::parse_enum;

    #[test]
    fn parses_kebab_case_enum() {
        let status: ProjectStatus =
            parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn parses_underscore_and_uppercase_alias() {
        let status: ProjectStatus =
            parse_enum("IN_PROGRESS", "status").expect("status should parse");
        assert_eq!(status, ProjectStatus::InProgress);
        let category: Category = parse_enum("Genetic", "category").expect("category should parse");
        assert_eq!(category, Category::Genetic);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ProjectStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
