use anyhow::Result;
use idguard_config::AlertBackend;
use idguard_core::{Alert, RecordedAlerts};
use tracing::warn;

pub trait Alerter {
    fn show(&self, message: &str) -> Result<()>;
}

pub struct StderrAlerter;

impl Alerter for StderrAlerter {
    fn show(&self, message: &str) -> Result<()> {
        eprintln!("alert: {message}");
        Ok(())
    }
}

#[cfg(feature = "desktop-notify")]
pub struct DesktopAlerter;

#[cfg(feature = "desktop-notify")]
impl Alerter for DesktopAlerter {
    fn show(&self, message: &str) -> Result<()> {
        notify_rust::Notification::new()
            .summary("idguard")
            .body(message)
            .show()?;
        Ok(())
    }
}

/// Alert sink handed to the guard: shows each alert through the configured
/// backend and keeps a copy for the submission report.
pub struct AlertSink {
    alerter: Box<dyn Alerter>,
    shown: RecordedAlerts,
}

impl AlertSink {
    pub fn new(alerter: Box<dyn Alerter>) -> Self {
        Self {
            alerter,
            shown: RecordedAlerts::default(),
        }
    }

    pub fn for_backend(backend: AlertBackend) -> Self {
        match backend {
            AlertBackend::Stderr => Self::new(Box::new(StderrAlerter)),
            AlertBackend::Desktop => Self::new(desktop_alerter()),
        }
    }

    pub fn shown(&self) -> &RecordedAlerts {
        &self.shown
    }
}

impl Alert for AlertSink {
    fn alert(&mut self, message: &str) {
        self.shown.alert(message);
        if let Err(err) = self.alerter.show(message) {
            warn!(error = %err, "alert backend failed, falling back to stderr");
            let _ = StderrAlerter.show(message);
        }
    }
}

#[cfg(feature = "desktop-notify")]
fn desktop_alerter() -> Box<dyn Alerter> {
    Box::new(DesktopAlerter)
}

#[cfg(not(feature = "desktop-notify"))]
fn desktop_alerter() -> Box<dyn Alerter> {
    warn!("desktop alerts unavailable (build with desktop-notify feature), using stderr");
    Box::new(StderrAlerter)
}

#[cfg(test)]
mod tests {
    use super::{AlertSink, Alerter};
    use anyhow::{anyhow, Result};
    use idguard_core::{Alert, REJECT_MESSAGE};

    struct FailingAlerter;

    impl Alerter for FailingAlerter {
        fn show(&self, _message: &str) -> Result<()> {
            Err(anyhow!("no display"))
        }
    }

    #[test]
    fn alert_sink_records_even_when_backend_fails() {
        let mut sink = AlertSink::new(Box::new(FailingAlerter));
        sink.alert(REJECT_MESSAGE);
        assert_eq!(sink.shown().last(), Some(REJECT_MESSAGE));
    }
}
