use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::RequestBuilder;

use super::PlayerGateway;
use crate::config::ApiConfig;
use crate::domain::{Player, PlayerDraft, PlayerId, SyncResult};
use crate::envelope::{decode_ack, decode_data, PlayerData, PlayersData};

/// `reqwest`-backed gateway. Uses the browser's `fetch` on wasm32.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send and read the whole body; only reachability failures error here
    async fn send(request: RequestBuilder) -> SyncResult<(u16, String)> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl PlayerGateway for HttpGateway {
    async fn list_players(&self) -> SyncResult<Vec<Player>> {
        let (status, body) = Self::send(self.client.get(self.config.players_url())).await?;
        decode_data::<PlayersData>(status, &body).map(|data| data.players)
    }

    async fn get_player(&self, id: PlayerId) -> SyncResult<Player> {
        let (status, body) = Self::send(self.client.get(self.config.player_url(id))).await?;
        decode_data::<PlayerData>(status, &body).map(|data| data.player)
    }

    async fn create_player(&self, draft: &PlayerDraft) -> SyncResult<Player> {
        let request = self
            .client
            .post(self.config.players_url())
            .header(CONTENT_TYPE, "application/json")
            .json(draft);
        let (status, body) = Self::send(request).await?;
        decode_data::<PlayerData>(status, &body).map(|data| data.player)
    }

    async fn delete_player(&self, id: PlayerId) -> SyncResult<()> {
        let (status, body) = Self::send(self.client.delete(self.config.player_url(id))).await?;
        decode_ack(status, &body)
    }
}


#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    use super::*;
    use crate::domain::{Operation, SyncError};
    use crate::roster::{RosterStore, SharedRoster};
    use crate::sync::Synchronizer;

    /// Answer one request with a canned JSON body. The handle yields the raw request.
    fn serve_once(status: u16, body: &'static str) -> (ApiConfig, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind failed");
        let config = ApiConfig::new(format!("http://{}/api/c", listener.local_addr().unwrap()));
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept failed");
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write failed");
            request
        });
        (config, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).expect("read failed");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn request_body(request: &str) -> &str {
        request.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or("")
    }

    fn fido_and_rex() -> Vec<Player> {
        vec![Player::new(1, "Fido", "Mutt"), Player::new(2, "Rex", "Boxer")]
    }

    #[tokio::test]
    async fn test_create_player_posts_json() {
        let (config, server) = serve_once(200, r#"{"data":{"player":{"id":3,"name":"Spot","breed":"Dalmatian"}}}"#);
        let gateway = HttpGateway::new(config);

        let player = gateway
            .create_player(&PlayerDraft::new("Spot", "Dalmatian"))
            .await
            .expect("create failed");

        assert_eq!(player, Player::new(3, "Spot", "Dalmatian"));
        let request = server.join().unwrap();
        assert!(request.starts_with("POST /api/c/players HTTP/1.1\r\n"), "{}", request);
        assert!(request.to_lowercase().contains("\r\ncontent-type: application/json\r\n"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(request_body(&request)).unwrap(),
            serde_json::json!({ "name": "Spot", "breed": "Dalmatian" })
        );
    }

    #[tokio::test]
    async fn test_load_all_with_null_breed() {
        let (config, server) = serve_once(
            200,
            r#"{"success":true,"error":null,"data":{"players":[{"id":1,"name":"Fido","breed":null},{"id":2,"name":"Rex","breed":"Boxer"}]}}"#,
        );
        let sync = Synchronizer::new(HttpGateway::new(config), SharedRoster::default());

        let count = sync.load_all().await.expect("load failed");

        assert_eq!(count, 2);
        assert_eq!(
            sync.roster().snapshot(),
            vec![Player::new(1, "Fido", ""), Player::new(2, "Rex", "Boxer")]
        );
        assert!(server.join().unwrap().starts_with("GET /api/c/players HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_get_player_hits_single_player_url() {
        let (config, server) = serve_once(200, r#"{"data":{"player":{"id":7,"name":"Biscuit","breed":"Beagle"}}}"#);
        let gateway = HttpGateway::new(config);

        let player = gateway.get_player(7).await.expect("fetch failed");

        assert_eq!(player.name, "Biscuit");
        assert!(server.join().unwrap().starts_with("GET /api/c/players/7 HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_remove_with_error_payload_keeps_roster() {
        let (config, server) = serve_once(200, r#"{"error":{"message":"nope"}}"#);
        let sync = Synchronizer::new(HttpGateway::new(config), SharedRoster::new(fido_and_rex()));

        let err = sync.remove(2).await.unwrap_err();

        assert_eq!(err.operation, Operation::Remove(2));
        assert_eq!(err.source, SyncError::Service("nope".to_string()));
        assert_eq!(sync.roster().snapshot(), fido_and_rex());
        assert!(server.join().unwrap().starts_with("DELETE /api/c/players/2 HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_remove_success_drops_player() {
        let (config, server) = serve_once(200, r#"{"success":true,"error":null,"data":null}"#);
        let sync = Synchronizer::new(HttpGateway::new(config), SharedRoster::new(fido_and_rex()));

        sync.remove(1).await.expect("remove failed");

        assert_eq!(sync.roster().snapshot(), vec![Player::new(2, "Rex", "Boxer")]);
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Grab a free port, then close it again
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let gateway = HttpGateway::new(ApiConfig::new(format!("http://{}/api/c", addr)));

        let err = gateway.list_players().await.unwrap_err();

        assert!(matches!(err, SyncError::Transport(_)));
    }
}
