//! Dashboard Route
//!
//! Serves the single dashboard page: a heading, a multi-select country
//! dropdown, and the line-chart placeholder. The page is a static embedded
//! document built once at compile time; the dropdown options and the
//! figure itself come from the JSON API.
//!
//! The reactive binding lives in the page script: every `change` event on
//! the dropdown re-requests the figure and hands it to the renderer. The
//! server holds no per-session state.

use axum::response::Html;

/// GET /
///
/// The dashboard page.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>coalboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.0.min.js"></script>
    <style>
      :root {
        --bg: #fafafa;
        --panel: #ffffff;
        --text: #1a1a2e;
        --muted: #6b7280;
        --border: #d1d5db;
      }
      body { font-family: system-ui, -apple-system, sans-serif; max-width: 1100px; margin: 0 auto; padding: 24px; background: var(--bg); color: var(--text); }
      h1 { font-size: 22px; font-weight: 600; }
      .panel { background: var(--panel); border: 1px solid var(--border); border-radius: 8px; padding: 16px; margin: 16px 0; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
      label { display: block; font-size: 13px; color: var(--muted); margin-bottom: 6px; }
      select { width: 66%; min-height: 140px; border: 1px solid var(--border); border-radius: 6px; padding: 6px; font-size: 14px; }
      #line-chart { height: 450px; }
    </style>
  </head>
  <body>
    <h1>APIC Hackathon 2023 Dashboard</h1>
    <div class="panel">
      <label for="country-dropdown">Countries</label>
      <select id="country-dropdown" multiple></select>
    </div>
    <div class="panel">
      <div id="line-chart"></div>
    </div>
    <script>
      const dropdown = document.getElementById('country-dropdown');

      async function redraw() {
        const countries = Array.from(dropdown.selectedOptions).map((o) => o.value);
        const res = await fetch('/api/v1/chart', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ countries }),
        });
        const figure = await res.json();
        Plotly.react('line-chart', figure.data, figure.layout, { responsive: true });
      }

      async function init() {
        const res = await fetch('/api/v1/countries');
        const options = await res.json();
        for (const name of options.countries) {
          const option = document.createElement('option');
          option.value = name;
          option.textContent = name;
          // Defaults absent from the option set simply never match
          option.selected = options.default_selection.includes(name);
          dropdown.appendChild(option);
        }
        dropdown.addEventListener('change', redraw);
        await redraw();
      }

      init();
    </script>
  </body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_stable_element_ids() {
        assert!(DASHBOARD_HTML.contains("id=\"country-dropdown\""));
        assert!(DASHBOARD_HTML.contains("id=\"line-chart\""));
    }

    #[test]
    fn test_page_binds_dropdown_change() {
        assert!(DASHBOARD_HTML.contains("addEventListener('change'"));
    }
}
