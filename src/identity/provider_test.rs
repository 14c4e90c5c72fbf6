use super::*;
use crate::identity::types::ProviderInfo;

fn rosa() -> Identity {
    Identity {
        uid: "u-rosa".to_owned(),
        display_name: Some("Rosa".to_owned()),
        email: Some("rosa@example.com".to_owned()),
        photo_url: None,
        provider: ProviderInfo::default(),
    }
}

#[test]
fn subscribe_delivers_current_identity_first() {
    let feed = ChangeFeed::default();
    let mut rx = feed.subscribe(None);
    assert_eq!(rx.try_recv().unwrap(), None);
    assert!(rx.try_recv().is_err(), "no further events expected");
}

#[test]
fn publish_reaches_every_subscriber() {
    let feed = ChangeFeed::default();
    let mut a = feed.subscribe(None);
    let mut b = feed.subscribe(None);
    let _ = a.try_recv();
    let _ = b.try_recv();

    feed.publish(&Some(rosa()));

    assert_eq!(a.try_recv().unwrap(), Some(rosa()));
    assert_eq!(b.try_recv().unwrap(), Some(rosa()));
}

#[test]
fn closed_subscribers_are_pruned_on_publish() {
    let feed = ChangeFeed::default();
    let mut kept = feed.subscribe(None);
    let mut dropped = feed.subscribe(None);
    dropped.close();
    assert_eq!(feed.subscriber_count(), 2);

    feed.publish(&None);

    assert_eq!(feed.subscriber_count(), 1);
    assert_eq!(kept.try_recv().unwrap(), None);
}
