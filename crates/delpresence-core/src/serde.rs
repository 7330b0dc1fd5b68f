use serde::{Deserialize, Deserializer};

/// Treats `null` as the type's default (empty vec, zero count).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats `""` (and whitespace-only strings) as `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "null_as_default")]
        ids: Vec<u64>,
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        note: Option<String>,
    }

    #[test]
    fn test_nulls_become_defaults() {
        let payload: Payload =
            serde_json::from_str(r#"{"ids":null,"count":null,"note":null}"#).unwrap();
        assert!(payload.ids.is_empty());
        assert_eq!(payload.count, 0);
        assert_eq!(payload.note, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.ids.is_empty());
        assert_eq!(payload.note, None);
    }

    #[test]
    fn test_blank_string_is_none() {
        let payload: Payload = serde_json::from_str(r#"{"note":"  "}"#).unwrap();
        assert_eq!(payload.note, None);

        let payload: Payload = serde_json::from_str(r#"{"note":"A"}"#).unwrap();
        assert_eq!(payload.note.as_deref(), Some("A"));
    }
}
