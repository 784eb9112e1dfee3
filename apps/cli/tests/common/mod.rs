//! Test harness: a scripted stand-in for the ConnectTool service.

#![allow(dead_code)]

use connect_protocol::{error_codes, Method, Request, Response};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::task::JoinHandle;

/// How the mock answers a method.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer with this `result` payload
    Result(serde_json::Value),
    /// Answer with a service error
    Error(i32, String),
    /// Read the request and never answer
    NeverRespond,
}

/// Mock service listening on a temporary socket.
pub struct MockService {
    socket_path: PathBuf,
    replies: Arc<Mutex<HashMap<Method, Reply>>>,
    received: Arc<Mutex<Vec<Request>>>,
    _temp_dir: TempDir,
}

impl MockService {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let socket_path = temp_dir.path().join("connect_tool.sock");

        Self {
            socket_path,
            replies: Arc::new(Mutex::new(HashMap::new())),
            received: Arc::new(Mutex::new(Vec::new())),
            _temp_dir: temp_dir,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Script the reply for a method. Unscripted methods get METHOD_NOT_FOUND.
    pub fn reply(&self, method: Method, reply: Reply) -> &Self {
        self.replies.lock().unwrap().insert(method, reply);
        self
    }

    pub fn reply_result(&self, method: Method, result: serde_json::Value) -> &Self {
        self.reply(method, Reply::Result(result))
    }

    /// Requests received so far.
    pub fn received(&self) -> Vec<Request> {
        self.received.lock().unwrap().clone()
    }

    pub fn received_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Bind the socket and serve until the handle is aborted.
    pub fn start(&self) -> JoinHandle<()> {
        let listener = UnixListener::bind(&self.socket_path).unwrap();
        let replies = self.replies.clone();
        let received = self.received.clone();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let replies = replies.clone();
                let received = received.clone();
                tokio::spawn(Self::handle_connection(stream, replies, received));
            }
        })
    }

    async fn handle_connection(
        stream: UnixStream,
        replies: Arc<Mutex<HashMap<Method, Reply>>>,
        received: Arc<Mutex<Vec<Request>>>,
    ) {
        let (reader, mut writer) = stream.into_split();
        let mut reader = BufReader::new(reader);
        let mut line = String::new();

        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }

            let request = match Request::from_json(line.trim()) {
                Ok(request) => request,
                Err(e) => {
                    let response =
                        Response::error("", error_codes::PARSE_ERROR, &format!("Parse error: {}", e));
                    Self::send(&mut writer, &response).await;
                    continue;
                }
            };
            received.lock().unwrap().push(request.clone());

            let reply = replies.lock().unwrap().get(&request.method).cloned();
            let response = match reply {
                Some(Reply::Result(result)) => Response::success(&request.id, result),
                Some(Reply::Error(code, message)) => Response::error(&request.id, code, &message),
                Some(Reply::NeverRespond) => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    return;
                }
                None => Response::error(
                    &request.id,
                    error_codes::METHOD_NOT_FOUND,
                    &format!("Method not found: {:?}", request.method),
                ),
            };
            Self::send(&mut writer, &response).await;
        }
    }

    async fn send(writer: &mut tokio::net::unix::OwnedWriteHalf, response: &Response) {
        let json = response.to_json().unwrap();
        let _ = writer.write_all(json.as_bytes()).await;
        let _ = writer.write_all(b"\n").await;
        let _ = writer.flush().await;
    }
}

/// Captured result of one CLI run.
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the CLI against `socket` with the given command arguments.
pub async fn run_cli(socket: &Path, args: &[&str]) -> RunOutput {
    let mut argv = vec![
        "connecttoolcli".to_string(),
        "--socket".to_string(),
        socket.to_string_lossy().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = connecttool_cli::run(argv, &mut stdout, &mut stderr).await;

    RunOutput {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}
