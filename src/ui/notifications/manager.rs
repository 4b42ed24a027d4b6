// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered list of active notifications, schedules their
//! auto-dismiss deadlines and publishes the list to observers after every change.
//! Expiry is driven by the host calling [`Manager::tick`], for instance from a
//! periodic UI subscription or after sleeping until [`Manager::until_next_expiry`].

use super::clock::{Clock, SystemClock};
use super::notification::{default_ttl, Notification, NotificationId, Severity};
use crate::ui::observers::{Observers, SubscriptionId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the active notifications and their expiry.
pub struct Manager<C: Clock = SystemClock> {
    /// Active notifications, oldest first.
    notifications: Vec<Notification>,
    /// Pending deadlines. Ids grow with scheduling order, so equal deadlines
    /// pop in the order they were scheduled.
    expiries: BinaryHeap<Reverse<(Duration, NotificationId)>>,
    observers: Observers<[Notification]>,
    next_id: u64,
    clock: C,
}

impl Manager<SystemClock> {
    /// Creates an empty manager driven by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            notifications: Vec::new(),
            expiries: BinaryHeap::new(),
            observers: Observers::new(),
            next_id: 0,
            clock,
        }
    }

    /// Registers an observer of the notification list.
    ///
    /// The observer is called right away with the current list, then after
    /// every change.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[Notification]) + 'static,
    {
        self.observers.subscribe(&self.notifications, observer)
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Shows an info notification with the default time-to-live.
    pub fn show(&mut self, message: impl Into<String>) -> NotificationId {
        self.show_with(message, Severity::Info, default_ttl())
    }

    /// Shows a success notification with the default time-to-live.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.show_with(message, Severity::Success, default_ttl())
    }

    /// Shows an info notification with the default time-to-live.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.show_with(message, Severity::Info, default_ttl())
    }

    /// Shows a warning notification with the default time-to-live.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.show_with(message, Severity::Warning, default_ttl())
    }

    /// Shows an error notification with the default time-to-live.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.show_with(message, Severity::Error, default_ttl())
    }

    /// Appends a notification and publishes the updated list.
    ///
    /// A non-zero `ttl` schedules an automatic dismissal `ttl` after now; a
    /// zero `ttl` keeps the notification until it is dismissed or cleared.
    pub fn show_with(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        ttl: Duration,
    ) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, message.into(), severity, ttl);
        log::debug!(
            "notification {} shown ({:?}, ttl {}ms): {}",
            id.value(),
            severity,
            ttl.as_millis(),
            notification.message()
        );
        self.notifications.push(notification);

        if !ttl.is_zero() {
            // A deadline past the clock's range is never reached.
            if let Some(deadline) = self.clock.now().checked_add(ttl) {
                self.expiries.push(Reverse((deadline, id)));
            }
        }

        self.publish();
        id
    }

    /// Dismisses a notification by its ID and publishes the list.
    ///
    /// Unknown or already removed IDs leave the list untouched.
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let removed = self.remove(id);
        if removed {
            self.expiries.retain(|Reverse((_, pending))| *pending != id);
            log::debug!("notification {} dismissed", id.value());
        }
        self.publish();
        removed
    }

    /// Removes every notification and cancels their pending expiries.
    pub fn clear(&mut self) {
        self.notifications.clear();
        self.expiries.clear();
        self.publish();
    }

    /// Expires every notification whose deadline has passed.
    ///
    /// Deadlines fire in time order, each publishing the list once.
    /// Returns the number of notifications removed.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut expired = 0;

        while let Some(&Reverse((deadline, id))) = self.expiries.peek() {
            if deadline > now {
                break;
            }
            self.expiries.pop();

            if self.remove(id) {
                log::debug!("notification {} expired", id.value());
                expired += 1;
                self.publish();
            }
        }

        expired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Clock reading at which the next notification expires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.expiries.peek().map(|Reverse((deadline, _))| *deadline)
    }

    /// Time left before the next notification expires.
    #[must_use]
    pub fn until_next_expiry(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Returns the active notifications, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
            self.notifications.remove(pos);
            true
        } else {
            false
        }
    }

    fn publish(&mut self) {
        self.observers.notify(&self.notifications);
    }
}

impl<C: Clock> fmt::Debug for Manager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("notifications", &self.notifications)
            .field("pending_expiries", &self.expiries.len())
            .field("observers", &self.observers)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Snapshots = Rc<RefCell<Vec<Vec<(u64, Severity)>>>>;

    fn recorder(manager: &mut Manager<ManualClock>) -> Snapshots {
        let snapshots: Snapshots = Rc::default();
        let sink = Rc::clone(&snapshots);
        manager.subscribe(move |list| {
            sink.borrow_mut().push(
                list.iter()
                    .map(|n| (n.id().value(), n.severity()))
                    .collect(),
            );
        });
        snapshots
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn subscribe_receives_current_list_immediately() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock);
        manager.show_with("kept", Severity::Info, Duration::ZERO);

        let snapshots = recorder(&mut manager);
        assert_eq!(*snapshots.borrow(), vec![vec![(0, Severity::Info)]]);
    }

    #[test]
    fn show_appends_in_insertion_order() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let snapshots = recorder(&mut manager);

        manager.success("one");
        manager.warning("two");
        manager.error("three");

        let last = snapshots.borrow().last().cloned().unwrap();
        assert_eq!(
            last,
            vec![
                (0, Severity::Success),
                (1, Severity::Warning),
                (2, Severity::Error)
            ]
        );
        // initial delivery + one per show
        assert_eq!(snapshots.borrow().len(), 4);
    }

    #[test]
    fn show_defaults_to_info_with_default_ttl() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let id = manager.show("hello");

        let notification = manager.get(id).unwrap();
        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.ttl(), ms(3000));
        assert_eq!(notification.message(), "hello");
    }

    #[test]
    fn ids_strictly_increase_across_removals() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let a = manager.show("a");
        manager.clear();
        let b = manager.show("b");
        manager.dismiss(b);
        let c = manager.show("c");

        assert!(a < b && b < c);
    }

    #[test]
    fn notification_expires_after_ttl() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let snapshots = recorder(&mut manager);

        manager.show_with("Saved", Severity::Success, ms(1000));

        clock.advance(ms(999));
        assert_eq!(manager.tick(), 0);
        assert_eq!(manager.len(), 1);

        clock.advance(ms(1));
        assert_eq!(manager.tick(), 1);
        assert!(manager.is_empty());
        assert!(snapshots.borrow().last().unwrap().is_empty());
    }

    #[test]
    fn zero_ttl_never_expires() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        manager.show_with("sticky", Severity::Error, Duration::ZERO);

        clock.advance(Duration::from_secs(3600));
        assert_eq!(manager.tick(), 0);
        assert_eq!(manager.len(), 1);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn dismiss_removes_only_matching_entry() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let snapshots = recorder(&mut manager);

        let first = manager.show_with("A", Severity::Info, Duration::ZERO);
        let second = manager.show_with("B", Severity::Error, Duration::ZERO);
        assert!(manager.dismiss(first));

        assert_eq!(
            snapshots.borrow().last().unwrap(),
            &vec![(second.value(), Severity::Error)]
        );
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let id = manager.show("kept");
        let snapshots = recorder(&mut manager);

        assert!(!manager.dismiss(NotificationId::from_raw(42)));
        assert!(manager.get(id).is_some());
        // still published, unchanged
        assert_eq!(snapshots.borrow().len(), 2);
        assert_eq!(snapshots.borrow()[0], snapshots.borrow()[1]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let id = manager.show("once");

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_cancels_pending_expiry() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let id = manager.show_with("short", Severity::Info, ms(100));
        manager.dismiss(id);

        assert!(manager.next_deadline().is_none());
        let snapshots = recorder(&mut manager);
        clock.advance(ms(100));
        assert_eq!(manager.tick(), 0);
        assert_eq!(snapshots.borrow().len(), 1);
    }

    #[test]
    fn clear_then_expiry_leaves_list_empty() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let snapshots = recorder(&mut manager);

        manager.show_with("X", Severity::Warning, ms(5000));
        manager.clear();
        assert!(snapshots.borrow().last().unwrap().is_empty());
        let published = snapshots.borrow().len();

        clock.advance(ms(5000));
        assert_eq!(manager.tick(), 0);
        assert!(manager.is_empty());
        assert_eq!(snapshots.borrow().len(), published);
    }

    #[test]
    fn expiries_fire_in_deadline_order() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let snapshots = recorder(&mut manager);

        manager.show_with("late", Severity::Info, ms(300));
        manager.show_with("early", Severity::Info, ms(100));
        manager.show_with("tie", Severity::Info, ms(100));
        snapshots.borrow_mut().clear();

        clock.advance(ms(300));
        assert_eq!(manager.tick(), 3);

        let ids: Vec<Vec<u64>> = snapshots
            .borrow()
            .iter()
            .map(|list| list.iter().map(|(id, _)| *id).collect())
            .collect();
        assert_eq!(ids, vec![vec![0, 2], vec![0], vec![]]);
    }

    #[test]
    fn ttl_is_measured_from_show_time() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());

        clock.advance(ms(500));
        manager.show_with("later", Severity::Info, ms(1000));
        assert_eq!(manager.next_deadline(), Some(ms(1500)));

        clock.advance(ms(600));
        assert_eq!(manager.until_next_expiry(), Some(ms(400)));
        assert_eq!(manager.tick(), 0);
    }

    #[test]
    fn ttl_beyond_clock_range_never_expires() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());

        clock.advance(ms(1));
        let id = manager.show_with("forever", Severity::Info, Duration::MAX);

        assert!(manager.get(id).is_some());
        assert!(manager.next_deadline().is_none());
        clock.advance(Duration::from_secs(86_400));
        assert_eq!(manager.tick(), 0);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let sticky = manager.show_with("sticky", Severity::Error, Duration::ZERO);
        manager.show_with("timed", Severity::Info, ms(10));

        clock.advance(ms(10));
        manager.handle_message(&Message::Tick);
        assert_eq!(manager.len(), 1);

        manager.handle_message(&Message::Dismiss(sticky));
        assert!(manager.is_empty());
    }

    #[test]
    fn unsubscribed_observer_receives_nothing_more() {
        let mut manager = Manager::with_clock(ManualClock::new());
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let subscription = manager.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(manager.unsubscribe(subscription));
        manager.show("ignored");
        assert_eq!(*count.borrow(), 1);
    }
}
