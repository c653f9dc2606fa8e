// ============================================================
// Layer 6 — Panic Guard
// ============================================================
// Burn signals many failures (shape mismatch, missing adapter,
// device loss) by panicking instead of returning an error.
// Every check body runs through `guarded` so those panics end
// up as a failed check rather than an aborted process.

use anyhow::{anyhow, Result};
use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
};

/// Run `body`, converting a panic into an error carrying the panic message.
pub fn guarded<T>(body: impl FnOnce() -> Result<T>) -> Result<T> {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::debug!("Recovered framework panic: {}", message);
            Err(anyhow!(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "framework panicked with a non-string payload".to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_ok() {
        let value = guarded(|| Ok(7)).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_passes_through_err() {
        let err = guarded::<()>(|| anyhow::bail!("plain failure")).unwrap_err();
        assert_eq!(err.to_string(), "plain failure");
    }

    #[test]
    fn test_converts_str_panic() {
        let err = guarded::<()>(|| panic!("shape mismatch")).unwrap_err();
        assert_eq!(err.to_string(), "shape mismatch");
    }

    #[test]
    fn test_converts_formatted_panic() {
        let dims = [3, 4];
        let err = guarded::<()>(|| panic!("bad dims {:?}", dims)).unwrap_err();
        assert_eq!(err.to_string(), "bad dims [3, 4]");
    }
}
