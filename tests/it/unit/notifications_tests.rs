//! Toast queue unit tests.

use mapboard::notifications::{Toast, ToastManager, ToastVariant};
use std::time::{Duration, Instant};

#[test]
fn test_queue_keeps_newest_five() {
    let mut manager = ToastManager::new();
    for n in 0..8 {
        manager.push(Toast::info(format!("toast {n}")));
    }

    assert_eq!(manager.count(), 5);
    assert_eq!(manager.toasts()[0].message, "toast 3");
    assert_eq!(manager.latest().unwrap().message, "toast 7");
}

#[test]
fn test_remove_by_id() {
    let mut manager = ToastManager::new();
    manager.push(Toast::success("saved"));
    manager.push(Toast::warning("careful"));
    let id = manager.toasts()[0].id;

    manager.remove(id);

    assert_eq!(manager.count(), 1);
    assert_eq!(manager.latest().unwrap().variant, ToastVariant::Warning);
    manager.clear();
    assert!(manager.latest().is_none());
}

#[test]
fn test_expiry_uses_duration() {
    let toast = Toast::info("hello").with_duration(Duration::from_millis(100));
    let created = toast.created_at;

    assert!(!toast.is_expired_at(created + Duration::from_millis(99)));
    assert!(toast.is_expired_at(created + Duration::from_millis(100)));
}

#[test]
fn test_remove_expired_drops_only_elapsed() {
    let mut manager = ToastManager::new();
    manager.push(Toast::error("gone").with_duration(Duration::ZERO));
    manager.push(Toast::info("stays"));

    assert!(manager.remove_expired());
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.latest().unwrap().message, "stays");
    assert!(!manager.remove_expired());
}

#[test]
fn test_errors_linger_longer() {
    assert!(ToastVariant::Error.default_duration() > ToastVariant::Info.default_duration());
    assert!(Toast::error("x").created_at <= Instant::now());
    assert_ne!(Toast::info("a").id, Toast::info("a").id);
}
