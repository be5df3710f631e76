//! Test fixtures: runs the real server binary on a dedicated port.

use std::{
    net::TcpStream,
    process::{Child, Command, Stdio},
    thread,
    time::Duration,
};

/// A `lantern-server` process that is killed when dropped.
pub struct TestServer {
    child: Child,
    port: u16,
}

impl TestServer {
    /// Start the server on `127.0.0.1:<port>` and wait until it accepts connections.
    pub fn start(port: u16) -> Self {
        let child = Command::new(env!("CARGO_BIN_EXE_lantern-server"))
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start lantern-server");

        let server = Self { child, port };
        server.wait_until_ready();
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    fn wait_until_ready(&self) {
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("lantern-server did not start on port {}", self.port);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
