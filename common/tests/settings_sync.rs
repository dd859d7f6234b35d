use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use common::form::{DeclaredType, FieldDescriptor, FieldRegistry, ValidationRules};
use common::model::{SettingValue, Settings};
use common::sync::{
    SettingsBackend, SettingsSyncController, SubmitError, SyncState, TransportError, STATUS_UPDATED,
    STATUS_UPDATE_FAILED,
};
use pretty_assertions::assert_eq;

const DEVICE_BODY: &str = r#"{"device_name":"Gate1","inching_delay":5,"led":true}"#;

/// Device stand-in recording every `PUT` body as JSON text.
#[derive(Default)]
struct FakeDevice {
    body: RefCell<Option<String>>,
    puts: RefCell<Vec<String>>,
    reject_puts: Cell<bool>,
}

impl FakeDevice {
    fn serving(body: &str) -> Self {
        Self {
            body: RefCell::new(Some(body.to_string())),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl SettingsBackend for FakeDevice {
    async fn fetch(&self) -> Result<Settings, TransportError> {
        match self.body.borrow().as_deref() {
            Some(body) => Ok(Settings::from_json_str(body)?),
            None => Err(TransportError::Status {
                status: 404,
                body: String::new(),
            }),
        }
    }

    async fn store(&self, settings: &Settings) -> Result<(), TransportError> {
        if self.reject_puts.get() {
            return Err(TransportError::Status {
                status: 500,
                body: "flash write failed".to_string(),
            });
        }
        self.puts.borrow_mut().push(settings.to_json_string()?);
        Ok(())
    }
}

fn device_page() -> SettingsSyncController {
    SettingsSyncController::new(
        FieldRegistry::new([
            FieldDescriptor::text("device_name"),
            FieldDescriptor::text("inching_delay").with_type(DeclaredType::Number),
            FieldDescriptor::checkbox("led").with_type(DeclaredType::Boolean),
        ]),
        ValidationRules::new()
            .required("device_name")
            .required("inching_delay"),
    )
}

#[tokio::test]
async fn unedited_form_puts_back_what_was_fetched() {
    let device = FakeDevice::serving(DEVICE_BODY);
    let mut page = device_page();

    page.load(&device).await.unwrap();

    let fields = page.registry().fields();
    assert_eq!(fields[0].text, "Gate1");
    assert_eq!(fields[1].text, "5");
    assert!(fields[2].checked);
    assert_eq!(page.state(), SyncState::Ready);

    page.submit(&device).await.unwrap();

    assert_eq!(page.state(), SyncState::Saved);
    assert_eq!(page.status(), STATUS_UPDATED);
    let puts = device.puts.borrow();
    assert_eq!(puts.len(), 1);
    assert_eq!(
        Settings::from_json_str(&puts[0]).unwrap(),
        Settings::from_json_str(DEVICE_BODY).unwrap()
    );
    assert_eq!(puts[0], DEVICE_BODY);
}

#[tokio::test]
async fn unchecking_led_sends_false() {
    let device = FakeDevice::serving(DEVICE_BODY);
    let mut page = device_page();
    page.load(&device).await.unwrap();

    page.registry_mut().set_checked(2, false);
    page.submit(&device).await.unwrap();

    let sent = Settings::from_json_str(&device.puts.borrow()[0]).unwrap();
    assert_eq!(sent.get("led"), Some(&SettingValue::Boolean(false)));
}

#[tokio::test]
async fn empty_required_field_sends_nothing() {
    let device = FakeDevice::serving(DEVICE_BODY);
    let mut page = device_page();
    page.load(&device).await.unwrap();

    page.registry_mut().set_text(0, "");
    let err = page.submit(&device).await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(ref o) if o.failed == ["device_name"]));
    assert!(device.puts.borrow().is_empty());
    assert_ne!(page.status(), STATUS_UPDATED);
    assert_eq!(page.state(), SyncState::Ready);
}

#[tokio::test]
async fn failed_load_keeps_defaults() {
    let device = FakeDevice::default();
    let mut page = device_page();
    let pristine = page.registry().clone();

    assert!(page.load(&device).await.is_err());

    assert_eq!(page.state(), SyncState::Failed);
    assert_eq!(page.registry(), &pristine);
}

#[tokio::test]
async fn malformed_payload_is_a_load_failure() {
    let device = FakeDevice::serving(r#"{"device_name": {"nested": true}}"#);
    let mut page = device_page();

    let err = page.load(&device).await.unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
    assert_eq!(page.registry().fields()[0].text, "");
}

#[tokio::test]
async fn rejected_save_reports_failure() {
    let device = FakeDevice::serving(DEVICE_BODY);
    let mut page = device_page();
    page.load(&device).await.unwrap();
    device.reject_puts.set(true);

    let err = page.submit(&device).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(TransportError::Status { status: 500, .. })));
    assert_eq!(page.state(), SyncState::Failed);
    assert_eq!(page.status(), STATUS_UPDATE_FAILED);

    device.reject_puts.set(false);
    page.submit(&device).await.unwrap();
    assert_eq!(page.status(), STATUS_UPDATED);
}

#[tokio::test]
async fn extra_device_keys_are_ignored() {
    let device = FakeDevice::serving(
        r#"{"device_name":"Gate1","inching_delay":5,"led":false,"firmware":"1.0.3"}"#,
    );
    let mut page = device_page();

    let report = page.load(&device).await.unwrap();

    assert_eq!(report.unknown_keys, vec!["firmware".to_string()]);
    assert!(!page.registry().fields()[2].checked);
}
