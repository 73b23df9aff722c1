use file_manager::commands::{dispatch, Flow};
use file_manager::session::Session;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// Output writer whose bytes stay readable after it is handed to a session
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    /// Everything written since the last call
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }
}

impl AsyncWrite for Capture {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

pub struct Harness {
    pub session: Session,
    pub out: Capture,
}

impl Harness {
    pub fn at(dir: &Path) -> Self {
        let out = Capture::default();
        let session = Session::new(dir, Box::new(out.clone())).unwrap();
        Self { session, out }
    }

    /// Dispatch one line and return what it printed
    pub async fn run(&mut self, line: &str) -> String {
        let flow = dispatch(&mut self.session, line).await.unwrap();
        assert_eq!(flow, Flow::Continue, "{line}");
        self.out.take()
    }

    pub fn status_line(&self) -> String {
        format!("You are currently in {}\n", self.session.cwd().display())
    }
}
