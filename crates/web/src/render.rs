//! HTML rendering of the health payload.

use serde_json::Value;

use crate::error::Result;

/// Heading shown on every rendered page.
pub const HEADING: &str = "AirGuard Web";

/// Renders the page shell around `payload`, pretty-printed with two-space indentation.
pub fn render_page(payload: &Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(payload)?;

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{HEADING}</title></head>\n\
         <body>\n\
         <main class=\"p-6\">\n\
         <h1 class=\"text-2xl font-bold\">{HEADING}</h1>\n\
         <pre class=\"mt-4 p-4 bg-gray-100 rounded\">{}</pre>\n\
         </main>\n\
         </body>\n\
         </html>\n",
        escape_text(&pretty)
    ))
}

// Text-node escaping only; quotes stay literal so JSON reads as-is.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_status_object_with_two_space_indent() {
        let html = render_page(&json!({"status": "ok"})).unwrap();
        assert!(html.contains("{\n  \"status\": \"ok\"\n}"));
        assert!(html.contains("<h1 class=\"text-2xl font-bold\">AirGuard Web</h1>"));
    }

    #[test]
    fn renders_empty_object_flat() {
        let html = render_page(&json!({})).unwrap();
        assert!(html.contains("rounded\">{}</pre>"));
    }

    #[test]
    fn renders_nested_payload() {
        let payload = json!({"ok": true, "deps": {"db": "up", "queue": [1, 2]}});
        let html = render_page(&payload).unwrap();
        let expected = "{\n  \"ok\": true,\n  \"deps\": {\n    \"db\": \"up\",\n    \"queue\": [\n      1,\n      2\n    ]\n  }\n}";
        assert!(html.contains(expected));
    }

    #[test]
    fn renders_non_object_payloads() {
        assert!(render_page(&json!("up")).unwrap().contains(">\"up\"</pre>"));
        assert!(render_page(&Value::Null).unwrap().contains(">null</pre>"));
    }

    #[test]
    fn escapes_markup_in_values() {
        let html = render_page(&json!({"msg": "<script>a && b</script>"})).unwrap();
        assert!(html.contains("&lt;script&gt;a &amp;&amp; b&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn heading_present_regardless_of_payload() {
        for payload in [json!({}), json!([]), json!(42), json!({"status": "degraded"})] {
            let html = render_page(&payload).unwrap();
            assert!(html.contains(HEADING));
        }
    }
}
