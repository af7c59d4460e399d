use std::{any::Any, panic};

pub(crate) fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "Box<dyn Any>"
    }
}

/// Routes panic messages through `tracing` instead of stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let message = payload_message(info.payload());

        match info.location() {
            Some(location) => error!(
                "panicked at {}:{}: {}",
                location.file(),
                location.line(),
                message
            ),
            None => error!("panicked: {}", message),
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_messages() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(payload_message(payload.as_ref()), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(payload_message(payload.as_ref()), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(payload_message(payload.as_ref()), "Box<dyn Any>");
    }
}
