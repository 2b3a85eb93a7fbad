use super::*;

#[test]
fn renders_heading_and_paragraph() {
    let out = render_markdown_html("### Install\n\nRun it.");
    assert!(out.contains("<h3>Install</h3>"));
    assert!(out.contains("<p>Run it.</p>"));
}

#[test]
fn renders_fenced_code_with_language_class() {
    let out = render_markdown_html("```sh\ngorunn init\n```\n");
    assert!(out.contains("<pre><code class=\"language-sh\">gorunn init\n</code></pre>"));
}

#[test]
fn renders_tables() {
    let out = render_markdown_html("| Database | Port |\n|---|---|\n| Redis | 16379 |\n");
    assert!(out.contains("<table>"));
    assert!(out.contains("<td>16379</td>"));
}

#[test]
fn strips_raw_html() {
    let out = render_markdown_html("before\n\n<script>alert(1)</script>\n\nafter <b>bold</b>");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("<b>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}
