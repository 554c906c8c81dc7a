use std::panic::{self, AssertUnwindSafe};

macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

pub(crate) use assert_panics;

/// Runs `f`, which is expected to panic, and returns the panic's message.
///
/// # Panics
/// Panics if `f` returns normally or panics with a payload that isn't a string.
pub fn panic_message<R>(f: impl FnOnce() -> R) -> String {
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("closure was expected to panic"),
        Err(payload) => payload,
    };
    println!("^ panic caught");

    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_owned(),
            Err(_) => panic!("panic payload wasn't a string"),
        },
    }
}
