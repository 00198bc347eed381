use anyhow::Result;
use bible_core::config::{bible_home, debug_enabled};
use bible_core::{ChapterFetcher, PageSource};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read, Write};

mod tools;

// ============ MCP stdio framing ============

fn dbg_log(msg: &str) {
    if !debug_enabled() { return; }
    let home = bible_home();
    let _ = std::fs::create_dir_all(&home);
    if let Ok(mut f) = std::fs::OpenOptions::new().create(true).append(true).open(home.join("bible-ko-mcp.log")) {
        let _ = writeln!(f, "{}", msg);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FramingMode { Lsp, Lines }

enum Incoming {
    Message(Value),
    /// unparseable body; answered with a parse error
    Malformed(String),
    /// header block without a body
    Empty,
    /// announced body larger than `MAX_BODY_BYTES`
    Oversized(u64),
}

const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// Reads and writes JSON-RPC messages. Two framings are accepted:
/// LSP-style `Content-Length` headers, or one JSON object per line.
/// Replies use whichever framing the last request came in.
struct Transport<R, W> {
    reader: R,
    writer: W,
    mode: FramingMode,
}

impl<R: BufRead, W: Write> Transport<R, W> {
    fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, mode: FramingMode::Lsp }
    }

    fn read_line_lossy(&mut self) -> Result<Option<String>> {
        let mut buf: Vec<u8> = Vec::new();
        let n = self.reader.read_until(b'\n', &mut buf)?;
        if n == 0 { return Ok(None); }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn read_message(&mut self) -> Result<Option<Incoming>> {
        let mut buf: Vec<u8> = Vec::new();
        let n = self.reader.read_until(b'\n', &mut buf)?;
        if n == 0 { return Ok(None); }
        let line = String::from_utf8_lossy(&buf).into_owned();

        let trimmed = line.trim_start();
        if trimmed.starts_with('{') {
            self.mode = FramingMode::Lines;
            dbg_log(&format!("[lines] {}", line.trim_end()));
            return Ok(Some(parse_body(trim_end_bytes(&buf))));
        }
        if trimmed.is_empty() {
            // stray blank line between messages
            return Ok(Some(Incoming::Empty));
        }
        if !looks_like_header(&line) {
            // neither JSON nor a header: answer it as a line-framed parse error
            self.mode = FramingMode::Lines;
            dbg_log(&format!("[recv] garbage line {} bytes", buf.len()));
            return Ok(Some(parse_body(trim_end_bytes(&buf))));
        }

        let mut headers = line;
        while let Some(next) = self.read_line_lossy()? {
            if next.trim().is_empty() { break; }
            headers.push_str(&next);
        }
        self.mode = FramingMode::Lsp;
        dbg_log(&format!("[hdr]{}", headers.replace('\r', "\\r").replace('\n', "\\n")));

        let content_length = headers
            .lines()
            .filter_map(|h| h.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        if content_length == 0 { dbg_log("[body] skip len=0"); return Ok(Some(Incoming::Empty)); }
        if content_length > MAX_BODY_BYTES {
            // drain what was announced so the next frame starts clean
            std::io::copy(&mut self.reader.by_ref().take(content_length), &mut std::io::sink())?;
            dbg_log(&format!("[body] oversized len={}", content_length));
            return Ok(Some(Incoming::Oversized(content_length)));
        }
        let mut content = vec![0u8; content_length as usize];
        self.reader.read_exact(&mut content)?;
        dbg_log(&format!("[body-bytes]{}", content_length));
        Ok(Some(parse_body(&content)))
    }

    fn write_message(&mut self, v: &Value) -> Result<()> {
        match self.mode {
            FramingMode::Lines => {
                let body = serde_json::to_string(v)?;
                writeln!(self.writer, "{}", body)?;
                dbg_log(&format!("[send-lines] {} chars", body.len()));
            }
            FramingMode::Lsp => {
                let body = serde_json::to_vec(v)?;
                write!(
                    self.writer,
                    "Content-Length: {}\r\nContent-Type: application/vscode-jsonrpc; charset=utf-8\r\n\r\n",
                    body.len()
                )?;
                self.writer.write_all(&body)?;
                dbg_log(&format!("[send-lsp] {} bytes", body.len()));
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn trim_end_bytes(b: &[u8]) -> &[u8] {
    let end = b.iter().rposition(|c| !c.is_ascii_whitespace()).map_or(0, |i| i + 1);
    &b[..end]
}

/// `Name: value` with an ASCII token name, as in `Content-Length: 42`.
fn looks_like_header(line: &str) -> bool {
    match line.split_once(':') {
        Some((k, _)) => !k.is_empty() && k.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-'),
        None => false,
    }
}

fn parse_body(bytes: &[u8]) -> Incoming {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(v) => Incoming::Message(v),
        Err(e) => Incoming::Malformed(e.to_string()),
    }
}

#[derive(Deserialize)]
struct Request {
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

// ============ Handlers ============

fn handle_initialize(id: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": {
            "protocolVersion": "2024-11-05",
            "capabilities": { "tools": {} },
            "serverInfo": { "name": "bible-ko-mcp", "version": env!("CARGO_PKG_VERSION") }
        }
    })
}

fn handle_tools_list(id: Value) -> Value {
    json!({"jsonrpc":"2.0","id":id,"result": {"tools": tools::tools_list()}})
}

/// Response for one decoded message; `None` for notifications.
fn dispatch<S: PageSource>(fetcher: &ChapterFetcher<S>, msg: Value) -> Option<Value> {
    // requests carry an id; anything else is a notification
    if msg.get("id").map_or(true, |id| id.is_null()) {
        dbg_log(&format!("[recv] notification {}", msg.get("method").and_then(|m| m.as_str()).unwrap_or("?")));
        return None;
    }
    let req = match serde_json::from_value::<Request>(msg) {
        Ok(r) => r,
        Err(e) => {
            return Some(json!({"jsonrpc":"2.0","id":Value::Null,"error":{"code": -32600, "message": format!("Invalid Request: {}", e)}}));
        }
    };
    dbg_log(&format!("[recv] method={} id={}", req.method, req.id));
    let resp = match req.method.as_str() {
        "initialize" => handle_initialize(req.id),
        "tools/list" => handle_tools_list(req.id),
        "tools/call" => json!({"jsonrpc":"2.0","id":req.id,"result": tools::handle_call(fetcher, &req.params)}),
        "ping" => json!({"jsonrpc":"2.0","id":req.id,"result":{}}),
        _ => json!({"jsonrpc":"2.0","id":req.id,"error":{"code": -32601, "message":"Method not found"}}),
    };
    Some(resp)
}

fn serve<R: BufRead, W: Write, S: PageSource>(transport: &mut Transport<R, W>, fetcher: &ChapterFetcher<S>) -> Result<()> {
    loop {
        let Some(incoming) = transport.read_message()? else { break };
        let resp = match incoming {
            Incoming::Message(msg) => dispatch(fetcher, msg),
            Incoming::Malformed(err) => {
                dbg_log(&format!("[recv] parse error: {}", err));
                Some(json!({"jsonrpc":"2.0","id":Value::Null,"error":{"code": -32700, "message": format!("Parse error: {}", err)}}))
            }
            Incoming::Oversized(len) => Some(json!({"jsonrpc":"2.0","id":Value::Null,"error":{"code": -32600, "message": format!("Invalid Request: body of {} bytes exceeds {} bytes", len, MAX_BODY_BYTES)}})),
            Incoming::Empty => None,
        };
        if let Some(resp) = resp {
            transport.write_message(&resp)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let stdin = std::io::stdin();
    let mut transport = Transport::new(BufReader::new(stdin.lock()), std::io::stdout());
    let fetcher = ChapterFetcher::from_env();
    eprintln!("Bible Korean MCP Server running on stdio");
    if let Err(e) = serve(&mut transport, &fetcher) {
        eprintln!("[bible-ko-mcp] fatal: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
