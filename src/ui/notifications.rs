//! Toast notifications
//!
//! Provides toast-style notifications stacked in the top-right corner. Each
//! toast removes itself after its `auto_dismiss_ms` delay or when closed.
//! Toasts never block each other or the page underneath.

use crate::core::{Notification, NotificationType};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Notifications container component
/// Place this once at the app level to show notifications
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <NotificationToast
                            notification=item.notification
                            id=item.id
                            notifications=notifications
                        />
                    }
                }
            />
        </div>
    }
}

/// Single notification toast
#[component]
fn NotificationToast(
    notification: Notification,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notification.auto_dismiss_ms {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            // Length of the exit transition before a toast is removed
            const EXIT_ANIMATION_MS: u32 = 300;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                notifications.update(|n| n.retain(|i| i.id != id));
            });
        }
    }

    let icon_path = match notification.notification_type {
        NotificationType::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        NotificationType::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        NotificationType::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let role = match notification.notification_type {
        NotificationType::Error => "alert",
        _ => "status",
    };

    let container_class = format!("notification {}", notification.css_class());
    let title = notification.title;
    let message = notification.message;

    view! {
        <div
            class=container_class
            class:notification-exiting=move || is_exiting.get()
            role=role
        >
            <svg class="notification-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <div class="notification-body">
                <h4 class="notification-title">{title}</h4>
                <p class="notification-message">{message}</p>
            </div>
            <button
                class="notification-close"
                aria-label="Dismiss notification"
                on:click=move |_| {
                    notifications.update(|n| n.retain(|i| i.id != id));
                }
            >
                <svg class="notification-close-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Handle for pushing notifications from anywhere in the app
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification
    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notification });
        });
    }

}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the app-wide notification manager and put it in context
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager provided by the app shell
pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().unwrap_or_default()
}
