//! Entry-point template

const MAIN_GO_TEMPLATE: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello from {{.name}}!")
}
"#;

/// Render `main.go` with `project_name` in the greeting
pub fn render_main_go(project_name: &str) -> String {
    MAIN_GO_TEMPLATE.replace("{{.name}}", &escape_go_string(project_name))
}

/// Escape text for the inside of a Go interpreted string literal
fn escape_go_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
