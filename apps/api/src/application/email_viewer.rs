use chrono::DateTime;
use scedge_types::WaitlistEntry;

const PAGE_TITLE: &str = "Scedge Waitlist - Email Viewer";

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: #0a0a0a; color: #fff; padding: 40px; max-width: 1200px; margin: 0 auto; }
    h1 { margin-bottom: 30px; }
    table { width: 100%; border-collapse: collapse; background: #1a1a1a; border-radius: 8px; overflow: hidden; }
    th { background: #2a2a2a; padding: 15px; text-align: left; font-weight: 600; }
    td { padding: 15px; border-top: 1px solid #2a2a2a; }
    tr:hover { background: #252525; }
    .count { color: #888; margin-bottom: 20px; }
    .empty { text-align: center; padding: 40px; color: #888; }
    .refresh { background: #fff; color: #000; border: none; padding: 10px 20px; border-radius: 6px; cursor: pointer; margin-bottom: 20px; }
    .refresh:hover { background: #e0e0e0; }
"#;

/// Standalone HTML table of every waitlist entry, in the order given.
pub fn render_email_table(entries: &[WaitlistEntry]) -> String {
    let rows = if entries.is_empty() {
        r#"<tr><td colspan="3" class="empty">No emails yet</td></tr>"#.to_string()
    } else {
        entries.iter().map(entry_row).collect::<Vec<_>>().join("\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{PAGE_TITLE}</title>
  <style>{STYLE}</style>
</head>
<body>
  <h1>Scedge Waitlist Emails</h1>
  <div class="count">Total: {count} emails</div>
  <button class="refresh" onclick="location.reload()">Refresh</button>
  <table>
    <thead>
      <tr><th>Email</th><th>Date</th><th>Time</th></tr>
    </thead>
    <tbody>
{rows}
    </tbody>
  </table>
</body>
</html>"#,
        count = entries.len(),
    )
}

pub fn render_error_page() -> String {
    "<h1>Error loading emails</h1>".to_string()
}

fn entry_row(entry: &WaitlistEntry) -> String {
    let (date, time) = match DateTime::from_timestamp_millis(entry.timestamp) {
        Some(at) => (
            at.format("%Y-%m-%d").to_string(),
            at.format("%H:%M:%S UTC").to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };
    format!(
        "      <tr><td>{}</td><td>{date}</td><td>{time}</td></tr>",
        escape_html(&entry.email)
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
