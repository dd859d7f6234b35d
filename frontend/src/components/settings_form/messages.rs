use common::model::Settings;
use common::sync::{SubmitTicket, TransportError};

pub enum Msg {
    Loaded(Result<Settings, TransportError>),
    EditText(usize, String),
    SetChecked(usize, bool),
    Submit,
    Submitted(SubmitTicket, Result<(), TransportError>),
}
