use serde::Serialize;

/// Resultado de un GET por id: el registro o `{}` si no existe
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Missing {},
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(found) => Lookup::Found(found),
            None => Lookup::Missing {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_serializes_as_empty_object() {
        let missing: Lookup<u32> = None.into();
        assert_eq!(serde_json::to_value(missing).unwrap(), json!({}));

        let found: Lookup<u32> = Some(7).into();
        assert_eq!(serde_json::to_value(found).unwrap(), json!(7));
    }
}
