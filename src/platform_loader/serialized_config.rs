use serde::Deserialize;
use serde_json::Value;

// Devices and accessories stay raw so each entry can be deserialized with its own location
#[derive(Debug, Deserialize)]
pub struct SerializedPlatform {
    pub(crate) platform: Option<String>,
    pub(crate) serverurl: Option<String>,
    pub(crate) pollerseconds: Option<Value>,
    pub(crate) devices: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct SerializedDevice {
    pub(crate) name: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) manufacturer: Option<String>,
    pub(crate) discover: Option<bool>,
    pub(crate) accessories: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct SerializedWidget {
    pub(crate) name: Option<String>,
    #[serde(rename = "type")]
    pub(crate) widget_type: Option<String>,
    #[serde(rename = "typeOf")]
    pub(crate) type_of: Option<String>,
    pub(crate) pintype: Option<String>,
    pub(crate) pinnumber: Option<PinNumber>,
    pub(crate) model: Option<String>,
}

/// Vendor pin identifier, kept as text as virtual pins are not always numeric.
#[derive(PartialEq, Debug)]
pub struct PinNumber(pub(crate) String);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_widget_with_renamed_fields() {
        let json = json!({
            "name": "item name",
            "type": "BUTTON",
            "typeOf": "outlet",
            "pintype": "virtual",
            "pinnumber": "1",
            "model": "accessory model"
        });

        let widget = SerializedWidget::deserialize(&json).unwrap();

        assert_eq!(widget.name.as_deref(), Some("item name"));
        assert_eq!(widget.widget_type.as_deref(), Some("BUTTON"));
        assert_eq!(widget.type_of.as_deref(), Some("outlet"));
        assert_eq!(widget.pinnumber, Some(PinNumber("1".to_string())));
    }

    #[test]
    fn absent_and_null_fields_are_none() {
        let json = json!({ "name": "hub", "token": null });

        let device = SerializedDevice::deserialize(&json).unwrap();

        assert_eq!(device.name.as_deref(), Some("hub"));
        assert_eq!(device.token, None);
        assert_eq!(device.discover, None);
        assert!(device.accessories.is_none());
    }

    #[test]
    fn keeps_the_poller_interval_raw() {
        let json = json!({ "serverurl": "http://server", "pollerseconds": "fast" });

        let platform = SerializedPlatform::deserialize(&json).unwrap();

        assert_eq!(platform.pollerseconds, Some(json!("fast")));
    }

    #[test]
    fn rejects_a_non_boolean_discover_flag() {
        let json = json!({ "name": "hub", "discover": "yes" });

        assert!(SerializedDevice::deserialize(&json).is_err());
    }
}
