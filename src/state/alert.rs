use std::collections::VecDeque;

/// A modal notification waiting to be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

/// FIFO of alerts; only the front one is on screen
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    alerts: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, alert: Alert) {
        log::debug!("Alert: {} - {}", alert.title, alert.message);
        self.alerts.push_back(alert);
    }

    /// The alert currently displayed
    pub fn current(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Close the displayed alert, revealing the next one if any
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.alerts.pop_front()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_shown_in_order() {
        let mut queue = AlertQueue::default();
        assert!(queue.current().is_none());

        queue.push(Alert::error("first"));
        queue.push(Alert::new("Done", "second"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().map(|a| a.message.as_str()), Some("first"));

        queue.dismiss();
        assert_eq!(queue.current().map(|a| a.title.as_str()), Some("Done"));

        queue.dismiss();
        assert!(queue.is_empty());
        assert!(queue.dismiss().is_none());
    }
}
