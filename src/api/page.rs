//! Host page carrying the trigger and the container.

use crate::panel::render::{ERROR_HTML, LOADING_HTML};

pub const TRIGGER_ID: &str = "get-recs-btn";
pub const CONTAINER_ID: &str = "recommendations-container";

/// Full page with `container_html` pre-rendered inside the container
pub fn host_page(container_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Recommendations</title>
</head>
<body>
<button id="{trigger}">Get Recommendations</button>
<div id="{container}">{content}</div>
<script>
const trigger = document.getElementById('{trigger}');
const container = document.getElementById('{container}');
trigger.addEventListener('click', async () => {{
    container.innerHTML = '{loading}';
    try {{
        const response = await fetch('/panel/fetch', {{ method: 'POST' }});
        if (!response.ok) throw new Error('Panel request failed with status ' + response.status);
        container.innerHTML = await response.text();
    }} catch (error) {{
        console.error('There was a problem fetching recommendations:', error);
        container.innerHTML = '{error}';
    }}
}});
</script>
</body>
</html>
"#,
        trigger = TRIGGER_ID,
        container = CONTAINER_ID,
        content = container_html,
        loading = LOADING_HTML,
        error = ERROR_HTML,
    )
}
