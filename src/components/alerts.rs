use crate::prelude::*;

use uuid::Uuid;

use std::collections::VecDeque;
use std::time::Duration;

use crate::components::svg::{AlertCircle, Close, DrawSvg, SvgSize::Size5};
use crate::utils::CCStr;

static ALERTS: GlobalSignal<AlertQueue> = Signal::global(|| AlertQueue::new(MAX_ALERTS));

/// Maximum number of alerts to display at once
const MAX_ALERTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertLevel {
    Success,
    Error,
}
impl AlertLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
    fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
    /// Errors stay on screen longer
    fn timeout(self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(8),
            Self::Success => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    uuid: Uuid,
    level: AlertLevel,
    message: CCStr,
}
impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<CCStr>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AlertQueue {
    capacity: usize,
    alerts: VecDeque<Alert>,
}
impl AlertQueue {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            alerts: VecDeque::with_capacity(capacity),
        }
    }

    /// An alert identical to one already displayed replaces it, so the same
    /// failure repeated by the user does not stack up
    fn push(&mut self, alert: Alert) {
        self.alerts
            .retain(|a| !(a.level == alert.level && a.message == alert.message));
        while self.alerts.len() >= self.capacity {
            self.alerts.pop_front();
        }
        self.alerts.push_back(alert);
    }

    fn remove(&mut self, uuid: Uuid) {
        self.alerts.retain(|a| a.uuid != uuid);
    }
}

pub fn add_alert(alert: Alert) {
    ALERTS.write().push(alert);
}

pub fn alert_success(message: impl Into<CCStr>) {
    add_alert(Alert::new(AlertLevel::Success, message));
}

pub fn alert_error(message: impl Into<CCStr>) {
    add_alert(Alert::new(AlertLevel::Error, message));
}

#[component]
pub fn AlertsContainer() -> Element {
    rsx! {
        div { class: "fixed z-50 top-2 w-[90%] left-[5%] md:w-[60%] md:left-[20%] lg:w-1/2 lg:left-1/4",
            for alert in ALERTS().alerts.iter() {
                AlertDisplay { key: "{alert.uuid}", alert: alert.clone() }
            }
        }
    }
}

#[component]
fn AlertDisplay(alert: Alert) -> Element {
    log::debug!("AlertDisplay Rendered: {alert:?}");
    let uuid = alert.uuid;
    let timeout = alert.level.timeout();

    use_future(move || async move {
        tokio::time::sleep(timeout).await;
        log::debug!("Closing alert: {uuid}");
        ALERTS.write().remove(uuid);
    });

    use_drop(move || log::debug!("AlertDisplay Dropped: {uuid}"));

    rsx! {
        div {
            role: "alert",
            class: "alert p-1 rounded-xl mb-1 gap-1 md:gap-4 {alert.level.class()}",
            div { class: "flex text-sm",
                DrawSvg::<AlertCircle> { size: Size5 }
                b { {alert.level.title()} }
            }
            span { class: "text-xs", "{alert.message}" }
            button {
                class: "btn btn-circle btn-outline btn-xs",
                onclick: move |_| ALERTS.write().remove(uuid),
                DrawSvg::<Close> { size: Size5 }
            }
        }
    }
}
