//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module provides safe Rust wrappers that serialize
//! data and call those globals; render calls poll until D3, the chart
//! scripts and the target container all exist.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_SERIES_JS: &str = include_str!("../assets/js/line-series.js");
static BAR_SERIES_JS: &str = include_str!("../assets/js/bar-series.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[empleo] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the D3.js v7 script tag if the page has not loaded it yet.
///
/// `init_charts` polls for the `d3` global, so render calls issued before
/// the CDN script finishes loading still succeed.
pub fn ensure_d3() {
    call_js(
        r#"
        if (typeof d3 === 'undefined' && !document.getElementById('d3-cdn')) {
            var s = document.createElement('script');
            s.id = 'd3-cdn';
            s.src = 'https://cdn.jsdelivr.net/npm/d3@7';
            document.head.appendChild(s);
        }
        "#,
    );
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderLineSeries(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect `eval()` once D3 is ready, and then
/// explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_SERIES_JS, BAR_SERIES_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__empleoChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__empleoChartsReady) return;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__empleoChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__empleoChartScripts);
                    delete window.__empleoChartScripts;
                    if (typeof renderLineSeries !== 'undefined') window.renderLineSeries = renderLineSeries;
                    if (typeof renderBarSeries !== 'undefined') window.renderBarSeries = renderBarSeries;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__empleoChartsReady = true;
                    console.log('[empleo] charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a multi-series line chart into the given container.
///
/// `data_json` is an ordered array of records; `config_json` names the
/// x key and the series (key, label, color, stroke width, axis side and
/// tick format token).
pub fn render_line_series(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(container_id, "renderLineSeries", data_json, config_json);
}

/// Render a single-series bar chart into the given container.
pub fn render_bar_series(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(container_id, "renderBarSeries", data_json, config_json);
}

/// Shared polling wrapper for chart render calls.
///
/// Waits for D3.js to load, chart scripts to initialize and the container
/// DOM element to exist before invoking the window-level render function.
fn render_when_ready(container_id: &str, function: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__empleoChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[empleo] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Trigger a browser download of a JSON document via a Blob URL.
pub fn download_json(filename: &str, json: &str) {
    log::info!("exporting {}", filename);
    let escaped = json
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n");
    call_js(&format!(
        r#"
        var blob = new Blob(['{escaped}'], {{ type: 'application/json' }});
        var url = URL.createObjectURL(blob);
        var a = document.createElement('a');
        a.href = url;
        a.download = '{filename}';
        document.body.appendChild(a);
        a.click();
        document.body.removeChild(a);
        URL.revokeObjectURL(url);
        "#,
    ));
}
