use async_trait::async_trait;
use subnet_echo_application::ports::{DnsHandler, ResponseWriter};
use subnet_echo_domain::{DnsReply, DnsRequest, DomainError, ResponseCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Next handler that never writes and returns a canned result.
pub struct MockNextHandler {
    calls: AtomicUsize,
    seen: Mutex<Vec<DnsRequest>>,
    result: Result<ResponseCode, DomainError>,
}

impl MockNextHandler {
    pub fn returning(result: Result<ResponseCode, DomainError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            result,
        }
    }

    pub fn new() -> Self {
        Self::returning(Ok(ResponseCode::NoError))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<DnsRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Default for MockNextHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsHandler for MockNextHandler {
    async fn serve(
        &self,
        request: &DnsRequest,
        _writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(request.clone());
        self.result.clone()
    }

    fn name(&self) -> &'static str {
        "mock_next"
    }
}

/// Writer that keeps every reply, or fails every write.
#[derive(Default)]
pub struct RecordingWriter {
    pub replies: Vec<DnsReply>,
    fail_with: Option<String>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            replies: Vec::new(),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn only_text(&self) -> &str {
        assert_eq!(self.replies.len(), 1, "expected exactly one reply");
        assert_eq!(self.replies[0].answers.len(), 1, "expected exactly one answer");
        &self.replies[0].answers[0].text
    }
}

#[async_trait]
impl ResponseWriter for RecordingWriter {
    async fn write_reply(&mut self, reply: DnsReply) -> Result<(), DomainError> {
        if let Some(reason) = &self.fail_with {
            return Err(DomainError::ResponseWrite(reason.clone()));
        }
        self.replies.push(reply);
        Ok(())
    }

    fn written(&self) -> bool {
        !self.replies.is_empty()
    }
}
