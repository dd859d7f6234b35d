//! Writing a payload onto the form and reading it back yields the same payload.

use common::form::{read_snapshot, write_snapshot, DeclaredType, FieldDescriptor, FieldRegistry};
use common::model::{SettingValue, Settings};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn form() -> FieldRegistry {
    FieldRegistry::new([
        FieldDescriptor::text("device_name"),
        FieldDescriptor::text("inching_delay").with_type(DeclaredType::Number),
        FieldDescriptor::checkbox("led").with_type(DeclaredType::Boolean),
        FieldDescriptor::text("tag"),
        FieldDescriptor::text("tag"),
        FieldDescriptor::radio("mode", "auto"),
        FieldDescriptor::radio("mode", "manual"),
        FieldDescriptor::radio("relay", "on").with_type(DeclaredType::Boolean),
        FieldDescriptor::radio("relay", "off").with_type(DeclaredType::Boolean),
    ])
}

#[test]
fn grouped_and_typed_payload_survives() {
    let settings = Settings::from_json_str(
        r#"{"device_name":"","inching_delay":2.5,"led":false,"tag":["x","y"],"mode":"manual","relay":true}"#,
    )
    .unwrap();
    let mut registry = form();

    write_snapshot(&mut registry, &settings);

    assert_eq!(read_snapshot(&registry).unwrap(), settings);
}

prop_compose! {
    fn device_settings()(
        name in "[a-zA-Z0-9 _-]{0,16}",
        delay in prop_oneof![
            (-1_000_000i64..1_000_000).prop_map(|n| SettingValue::Number(n as f64)),
            (-1000.0f64..1000.0).prop_map(SettingValue::Number),
            Just(SettingValue::String(String::new())),
        ],
        led in any::<bool>(),
        tags in ("[a-z]{0,6}", "[a-z]{0,6}"),
        mode in prop_oneof![
            Just(SettingValue::from("auto")),
            Just(SettingValue::from("manual")),
            Just(SettingValue::Boolean(false)),
        ],
        relay in any::<bool>(),
    ) -> Settings {
        let mut settings = Settings::new();
        settings.insert("device_name", name);
        settings.insert("inching_delay", delay);
        settings.insert("led", led);
        settings.insert(
            "tag",
            SettingValue::List(vec![tags.0.into(), tags.1.into()]),
        );
        settings.insert("mode", mode);
        settings.insert("relay", relay);
        settings
    }
}

proptest! {
    #[test]
    fn read_after_write_is_identity(settings in device_settings()) {
        let mut registry = form();
        write_snapshot(&mut registry, &settings);
        prop_assert_eq!(read_snapshot(&registry).unwrap(), settings);
    }
}
