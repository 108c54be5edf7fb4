//! HTML for the organize page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use photokey_core::Scope;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin: 0.5rem 0; }
input[type=text] { width: 100%; }
.actions button { margin-right: 0.5rem; }
pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
"#;

/// Values the page is rendered with.
#[derive(Debug, Clone)]
pub struct PageView {
    pub folder: String,
    pub copy: bool,
    pub extract_qr: bool,
    /// Submitted scope, kept verbatim so an invalid value is shown back.
    pub scope: String,
    /// Run output, absent until the form has been submitted.
    pub output: Option<String>,
}

fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Current => "Root folder only",
        Scope::Subdirs => "First-level subfolders only",
        Scope::Recursive => "Root folder and all subfolders",
    }
}

pub fn render_page(view: &PageView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Photo organizer" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Photo organizer" }
                p { "Sorts JPG/JPEG files into folders named after the 4 digits following IMGK or IMG_ in their names." }
                form method="post" action="/" {
                    label {
                        "Folder"
                        input type="text" name="folder" value=(view.folder);
                    }
                    label {
                        "Scope "
                        select name="scope" {
                            @for scope in Scope::all() {
                                option value=(scope.as_str()) selected[view.scope == scope.as_str()] {
                                    (scope_label(scope))
                                }
                            }
                        }
                    }
                    label {
                        input type="checkbox" name="copy" checked[view.copy];
                        " Copy instead of move"
                    }
                    label {
                        input type="checkbox" name="extract_qr" checked[view.extract_qr];
                        " Pull QR files out of QR folders first"
                    }
                    div class="actions" {
                        button type="submit" name="action" value="preview" { "Preview" }
                        button type="submit" name="action" value="execute" { "Execute" }
                        button type="submit" name="action" value="qr_preview" { "Preview QR only" }
                        button type="submit" name="action" value="qr_execute" { "Execute QR only" }
                    }
                }
                @if let Some(output) = &view.output {
                    h2 { "Output" }
                    pre id="output" { (output) }
                }
            }
        }
    }
}
