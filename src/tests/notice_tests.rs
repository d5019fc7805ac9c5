use super::*;

#[tokio::test(start_paused = true)]
async fn notice_dismisses_after_ttl() {
    let notice = CopyNotice::new();
    assert!(!notice.is_visible());

    notice.raise();
    assert!(notice.is_visible());

    tokio::time::sleep(COPY_NOTICE_TTL - Duration::from_millis(1)).await;
    assert!(notice.is_visible(), "still shown just before the deadline");

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!notice.is_visible());
}

#[tokio::test(start_paused = true)]
async fn second_raise_restarts_the_window() {
    let notice = CopyNotice::new();

    notice.raise();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    notice.raise();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(
        notice.is_visible(),
        "first dismissal must not hide the second notice"
    );

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert!(!notice.is_visible());
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_show_and_hide() {
    let notice = CopyNotice::with_ttl(Duration::from_millis(50));
    let mut rx = notice.subscribe();

    notice.raise();
    rx.changed().await.expect("show");
    assert!(*rx.borrow_and_update());

    rx.changed().await.expect("hide");
    assert!(!*rx.borrow_and_update());
}
