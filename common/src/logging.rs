// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Logging macros over the `tracing` facade.
//!
//! All events are emitted under the single `ifbind` target, whatever crate
//! they originate from, so one filter directive (`ifbind=debug`) controls the
//! whole workspace. Each event also carries a `status` field that the CLI
//! formatter renders as a glyph.
//!
//! Library code only emits. Installing a subscriber is up to the binary.

/// Target shared by every event emitted through these macros.
pub const TARGET: &str = "ifbind";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        tracing::info!(target: $crate::logging::TARGET, status = "info", $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        tracing::info!(target: $crate::logging::TARGET, status = "success", $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        tracing::debug!(target: $crate::logging::TARGET, status = "debug", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        tracing::warn!(target: $crate::logging::TARGET, status = "warn", $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        tracing::error!(target: $crate::logging::TARGET, status = "error", $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use super::TARGET;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Metadata, Subscriber, span};

    struct TargetRecorder {
        targets: Arc<Mutex<Vec<String>>>,
    }

    impl Subscriber for TargetRecorder {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            self.targets
                .lock()
                .unwrap()
                .push(event.metadata().target().to_string());
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    #[test]
    fn every_macro_emits_under_shared_target() {
        let targets = Arc::new(Mutex::new(Vec::new()));
        let recorder = TargetRecorder {
            targets: Arc::clone(&targets),
        };

        tracing::subscriber::with_default(recorder, || {
            crate::info!("info");
            crate::success!("success");
            crate::debug!("debug");
            crate::warn!("warn");
            crate::error!("error");
        });

        assert_eq!(*targets.lock().unwrap(), vec![TARGET; 5]);
    }
}
