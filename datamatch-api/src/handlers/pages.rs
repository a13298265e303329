use axum::{extract::Path, response::Html};

// The real UI is rendered by the desktop shell's frontend bundle; these
// handlers only keep the page routes serving a valid document.

pub async fn dashboard() -> Html<String> {
    shell("Dashboard", "")
}

pub async fn datasets() -> Html<String> {
    shell("Datasets", "")
}

pub async fn recent_runs() -> Html<String> {
    shell("Recent Runs", "")
}

pub async fn results(Path(run_id): Path<String>) -> Html<String> {
    let attr = format!(" data-run-id=\"{}\"", escape_attr(&run_id));
    shell("Results", &attr)
}

fn shell(title: &str, app_attrs: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>DataMatch - {title}</title></head>\n<body><div id=\"app\"{app_attrs}></div></body>\n</html>\n"
    ))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
