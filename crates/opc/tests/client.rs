use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio::time::{timeout, Duration};

use opc::protocol::drain_messages;
use opc::Client;

#[tokio::test]
async fn delivers_frames_to_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut temp = [0u8; 1024];
        let mut messages = Vec::new();
        while messages.len() < 2 {
            let n = stream.read(&mut temp).await.unwrap();
            assert!(n > 0, "client closed early");
            buf.extend_from_slice(&temp[..n]);
            messages.extend(drain_messages(&mut buf).unwrap());
        }
        messages
    });

    let mut client = Client::new(address);
    assert!(client.can_connect().await);
    assert!(client.put_pixels(0, &[[255.0, 0.0, 10.4]]).await);
    let pixels = [[1.0, 2.0, 3.0], [400.0, -1.0, 0.0]];
    assert!(client.put_pixels(4, &pixels).await);

    let messages = timeout(Duration::from_secs(5), server)
        .await
        .expect("server timed out")
        .unwrap();
    assert_eq!(messages[0].channel, 0);
    assert_eq!(messages[0].pixels(), vec![[255, 0, 10]]);
    assert_eq!(messages[1].channel, 4);
    assert_eq!(messages[1].pixels(), vec![[1, 2, 3], [255, 0, 0]]);
}

#[tokio::test]
async fn unreachable_server_is_not_fatal() {
    // Bind then drop to get a port nothing listens on.
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().to_string()
    };

    let mut client = Client::new(address);
    assert!(!client.can_connect().await);
    assert!(!client.put_pixels(0, &[[1.0, 1.0, 1.0]]).await);
    assert!(!client.is_connected());
}
