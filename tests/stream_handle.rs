use futures::executor::block_on;
use futures::future::{AbortHandle, Abortable, pending};
use rate_converter_wasm::infrastructure::websocket::DepthStreamHandle;

#[test]
fn close_aborts_the_stream_future() {
    let (abort, registration) = AbortHandle::new_pair();
    let handle = DepthStreamHandle::new(abort);
    let stream = Abortable::new(pending::<()>(), registration);

    handle.close();

    assert!(block_on(stream).is_err());
    assert!(handle.is_closed());
}

#[test]
fn close_is_idempotent() {
    let (abort, registration) = AbortHandle::new_pair();
    let handle = DepthStreamHandle::new(abort);
    let stream = Abortable::new(pending::<()>(), registration);

    handle.close();
    handle.close();

    assert!(handle.is_closed());
    assert!(block_on(stream).is_err());
}

#[test]
fn dropping_the_handle_releases_the_subscription() {
    let (abort, registration) = AbortHandle::new_pair();
    let handle = DepthStreamHandle::new(abort);
    let stream = Abortable::new(pending::<()>(), registration);

    drop(handle);

    assert!(block_on(stream).is_err());
}
