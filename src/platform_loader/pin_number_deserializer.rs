use crate::platform_loader::serialized_config::PinNumber;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for PinNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(value) => Ok(PinNumber(value)),
            serde_json::Value::Number(value) if value.is_u64() => Ok(PinNumber(value.to_string())),
            _ => Err(serde::de::Error::custom(format!(
                "invalid pin number: {}, expected a string or a non-negative integer",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::string(json!("111"), "111")]
    #[case::non_numeric_string(json!("A0"), "A0")]
    #[case::integer(json!(7), "7")]
    fn deserializes_strings_and_integers(#[case] json: serde_json::Value, #[case] expected: &str) {
        let pin_number = serde_json::from_value::<PinNumber>(json).unwrap();

        assert_eq!(pin_number, PinNumber(expected.to_string()));
    }

    #[rstest]
    #[case::negative(json!(-1), "invalid pin number: -1, expected a string or a non-negative integer")]
    #[case::float(json!(1.5), "invalid pin number: 1.5, expected a string or a non-negative integer")]
    #[case::boolean(json!(true), "invalid pin number: true, expected a string or a non-negative integer")]
    fn rejects_other_values(#[case] json: serde_json::Value, #[case] expected: &str) {
        let result = serde_json::from_value::<PinNumber>(json);

        assert_eq!(result.map_err(|e| e.to_string()), Err(expected.to_string()));
    }
}
