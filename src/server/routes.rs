use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/validate") => match api::validate_payload(body) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(400, "Bad Request", &err.to_string()),
        },
        ("POST", "/api/select") => match api::select_payload(body) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(400, "Bad Request", &err.to_string()),
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn json_ok(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>randops Console</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    textarea { width: 100%; height: 160px; box-sizing: border-box; font-family: monospace; }
    input[type=number] { width: 160px; padding: 6px; }
    button { margin-top: 12px; margin-right: 8px; padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 180px; }
  </style>
</head>
<body>
  <h1>randops Local API</h1>
  <p>Paste a roster JSON array, pick the draw options, and generate a copilot plan.</p>

  <div class="card">
    <label for="roster">Roster JSON</label>
    <textarea id="roster" placeholder='[{"id":1,"name":"...","elite":2,"level":80,"rarity":6}]'></textarea>
    <label><input id="weighted" type="checkbox" /> Weight by level and rarity</label>
    <label><input id="ignore-unleveled" type="checkbox" /> Ignore elite 0 / level 1 operators</label>
    <label for="seed">Seed (optional)</label>
    <input id="seed" type="number" min="0" placeholder="random" />
    <div>
      <button id="validate-btn">POST /api/validate</button>
      <button id="select-btn">POST /api/select</button>
    </div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');

    async function request(path, body) {
      output.textContent = 'Loading…';
      const response = await fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body,
      });
      const text = await response.text();
      output.textContent = 'HTTP ' + response.status + '\n' + text;
    }

    document.getElementById('validate-btn').addEventListener('click', () => {
      request('/api/validate', document.getElementById('roster').value);
    });

    document.getElementById('select-btn').addEventListener('click', () => {
      let roster;
      try {
        roster = JSON.parse(document.getElementById('roster').value);
      } catch (e) {
        output.textContent = 'Roster is not valid JSON: ' + e.message;
        return;
      }
      const payload = {
        roster,
        weighted: document.getElementById('weighted').checked,
        ignore_unleveled: document.getElementById('ignore-unleveled').checked,
      };
      const seed = document.getElementById('seed').value;
      if (seed !== '') payload.seed = Number(seed);
      request('/api/select', JSON.stringify(payload));
    });
  </script>
</body>
</html>
"#
    .to_string()
}
